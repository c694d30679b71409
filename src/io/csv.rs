use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Writer};
use log::{error, info, warn};

use crate::column::Column;
use crate::dataframe::{DataFrame, Transformed};
use crate::error::{Error, Result, Warning};

/// Files combined by [`merge_csvs`], in load order
#[derive(Debug, Clone, PartialEq)]
pub struct MergeReport {
    pub files: Vec<PathBuf>,
}

/// Reads a CSV file with a header row into a DataFrame.
///
/// Column types are inferred per column (`Int64`, then `Float64`, else
/// `String`); empty fields are missing values.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let file = File::open(path.as_ref())?;
    let df = read_csv_from_reader(file)?;
    info!("loaded {} rows from {}", df.row_count(), path.as_ref().display());
    Ok(df)
}

/// Same as [`read_csv`] over any reader
pub fn read_csv_from_reader<R: Read>(reader: R) -> Result<DataFrame> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.is_empty() {
        return Ok(DataFrame::new());
    }

    let mut buffers: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for result in rdr.records() {
        let record = result?;
        // Short records are padded with missing values, extra fields dropped
        for (i, buffer) in buffers.iter_mut().enumerate() {
            buffer.push(record.get(i).unwrap_or_default().to_string());
        }
    }

    let mut df = DataFrame::new();
    for (header, raw) in headers.into_iter().zip(buffers) {
        let column = Column::infer(&header, &raw)?;
        df.add_column(header, column)?;
    }

    Ok(df)
}

/// Loads a CSV file, or returns an empty DataFrame with a logged diagnostic
/// when the file cannot be read
pub fn load_csv_or_empty<P: AsRef<Path>>(path: P) -> DataFrame {
    match read_csv(path.as_ref()) {
        Ok(df) => df,
        Err(Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            error!("file not found: {}", path.as_ref().display());
            DataFrame::new()
        }
        Err(err) => {
            error!("could not load {}: {}", path.as_ref().display(), err);
            DataFrame::new()
        }
    }
}

/// Writes a DataFrame as CSV with a header row. Missing values become empty fields.
pub fn write_csv<P: AsRef<Path>>(df: &DataFrame, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv_to_writer(df, file)?;
    info!("data saved to {}", path.as_ref().display());
    Ok(())
}

/// Same as [`write_csv`] over any writer
pub fn write_csv_to_writer<W: Write>(df: &DataFrame, writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);

    if df.column_count() > 0 {
        wtr.write_record(df.column_names())?;
    }

    for row in 0..df.row_count() {
        let record: Vec<String> = df
            .iter_columns()
            .map(|(_, col)| col.format_value(row).unwrap_or_default())
            .collect();
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Loads every `.csv` file in `dir` whose name starts with `prefix`, in file
/// name order, and stacks them with [`DataFrame::concat`].
///
/// When nothing matches the result is an empty frame with
/// [`Warning::NoInputFiles`].
pub fn merge_csvs<P: AsRef<Path>>(dir: P, prefix: &str) -> Result<Transformed<MergeReport>> {
    let dir = dir.as_ref();
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path.extension().is_some_and(|ext| ext == "csv")
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(prefix))
        })
        .collect();
    files.sort();

    if files.is_empty() {
        warn!("no CSV files starting with '{}' in {}", prefix, dir.display());
        return Ok(Transformed::skipped(
            DataFrame::new(),
            Warning::NoInputFiles {
                dir: dir.display().to_string(),
                prefix: prefix.to_string(),
            },
        ));
    }

    let frames = files
        .iter()
        .map(read_csv)
        .collect::<Result<Vec<_>>>()?;
    let frame = DataFrame::concat(&frames)?;
    info!(
        "merged {} files with total {} rows",
        files.len(),
        frame.row_count()
    );

    Ok(Transformed::applied(frame, MergeReport { files }))
}

impl DataFrame {
    /// Reads a CSV file; see [`read_csv`]
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        read_csv(path)
    }

    /// Writes a CSV file; see [`write_csv`]
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_csv(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnType;

    #[test]
    fn test_read_infers_types() {
        let data = "Make,Year,MSRP,Popularity\nBMW,2011,46135.5,3916\nAudi,2012,,\nKia,2013,29000,1\n";
        let df = read_csv_from_reader(data.as_bytes()).unwrap();

        assert_eq!(df.shape(), (3, 4));
        assert_eq!(df.column_type("Make").unwrap(), ColumnType::String);
        assert_eq!(df.column_type("Year").unwrap(), ColumnType::Int64);
        assert_eq!(df.column_type("MSRP").unwrap(), ColumnType::Float64);
        assert_eq!(df.column_type("Popularity").unwrap(), ColumnType::Int64);
        assert!(df.column("MSRP").unwrap().is_null(1));
    }

    #[test]
    fn test_short_records_padded() {
        let data = "a,b\n1\n2,3\n";
        let df = read_csv_from_reader(data.as_bytes()).unwrap();
        assert_eq!(df.row_count(), 2);
        assert!(df.column("b").unwrap().is_null(0));
    }

    #[test]
    fn test_write_missing_as_empty() {
        let data = "Brand,Year\nBMW,\nAudi,2012\n";
        let df = read_csv_from_reader(data.as_bytes()).unwrap();

        let mut out = Vec::new();
        write_csv_to_writer(&df, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), data);
    }

    #[test]
    fn test_whole_floats_stay_float() {
        let df = read_csv_from_reader("Price\n100.0\n200.0\n".as_bytes()).unwrap();
        assert_eq!(df.column_type("Price").unwrap(), ColumnType::Float64);

        let mut out = Vec::new();
        write_csv_to_writer(&df, &mut out).unwrap();
        assert_eq!(String::from_utf8(out.clone()).unwrap(), "Price\n100.0\n200.0\n");

        let reloaded = read_csv_from_reader(out.as_slice()).unwrap();
        assert_eq!(reloaded.column_type("Price").unwrap(), ColumnType::Float64);
        assert_eq!(reloaded, df);
    }
}
