//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const CARS_CSV: &str = "\
Make,Model,Year,Engine HP,Engine Cylinders,Number of Doors,Market Category,Popularity,MSRP
BMW,1 Series,1990,335,6,2,Luxury,3916,46135
Audi,A4,1995,300,6,4,Luxury,3105,40650
BMW,3 Series,2000,,6,4,Luxury,3916,36350
Kia,Rio,2005,138,4,4,,1720,
Audi,A6,2010,310,6,4,Luxury,3105,29450
Kia,Soul,2015,164,4,4,Crossover,1720,34500
BMW,M3,2020,414,8,2,Performance,3916,31200
";

/// Creates a scratch directory removed on drop
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Writes `content` to `dir/name` and returns the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write fixture");
    path
}
