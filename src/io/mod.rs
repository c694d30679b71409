pub mod csv;

pub use self::csv::{
    load_csv_or_empty, merge_csvs, read_csv, read_csv_from_reader, write_csv, write_csv_to_writer,
    MergeReport,
};
