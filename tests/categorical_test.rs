mod common;

use tidyrs::dataframe::DataFrame;
use tidyrs::io::read_csv_from_reader;
use tidyrs::{factorize, Warning};

fn brands(df: &DataFrame) -> Vec<Option<String>> {
    let col = df.column("Make").unwrap().as_string().unwrap();
    col.iter().map(|v| v.map(str::to_string)).collect()
}

#[test]
fn test_codes_follow_first_occurrence() {
    let df = read_csv_from_reader(common::CARS_CSV.as_bytes()).unwrap();
    let result = df.factorize_column("Make", "Make_ID").unwrap();
    let mapping = result.report().unwrap();

    assert_eq!(mapping.len(), 3);
    assert_eq!(mapping.get(Some("BMW")), Some(0));
    assert_eq!(mapping.get(Some("Audi")), Some(1));
    assert_eq!(mapping.get(Some("Kia")), Some(2));

    let codes: Vec<_> = result
        .frame
        .column("Make_ID")
        .unwrap()
        .as_int64()
        .unwrap()
        .iter()
        .collect();
    assert_eq!(
        codes,
        vec![Some(0), Some(1), Some(0), Some(2), Some(1), Some(2), Some(0)]
    );

    // Source column is kept and the code column is appended
    assert_eq!(brands(&result.frame), brands(&df));
    assert_eq!(result.frame.column_names().last().unwrap(), "Make_ID");
}

#[test]
fn test_codes_are_dense_and_labels_round_trip() {
    let labels = ["c", "a", "c", "b", "a", "d"];
    let result = factorize(labels.iter().map(|s| Some(*s)));

    let distinct = result.mapping.len() as i64;
    assert!(result.codes.iter().all(|&code| (0..distinct).contains(&code)));
    for (label, &code) in labels.iter().zip(&result.codes) {
        assert_eq!(result.mapping.label(code), Some(Some(*label)));
    }
}

#[test]
fn test_factorize_into_existing_column_replaces_it() {
    let df = read_csv_from_reader(common::CARS_CSV.as_bytes()).unwrap();
    let result = df.factorize_column("Make", "Make").unwrap();
    assert_eq!(result.frame.column_names(), df.column_names());
    assert!(result.frame.column("Make").unwrap().as_int64().is_some());
}

#[test]
fn test_missing_source_column_warns() {
    let df = read_csv_from_reader(common::CARS_CSV.as_bytes()).unwrap();
    let result = df.factorize_column("Brand", "Brand_ID").unwrap();
    assert_eq!(result.frame, df);
    assert_eq!(
        result.warning(),
        Some(&Warning::ColumnNotFound("Brand".to_string()))
    );
}
