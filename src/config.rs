//! TOML configuration for the two console tools.
//!
//! Every field has a default, so an empty file (or no file) reproduces the
//! stock behaviour.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::dataframe::{
    DEFAULT_FACTORIZE_SOURCE, DEFAULT_FACTORIZE_TARGET, DEFAULT_LOWER_PERCENTILE,
    DEFAULT_OUTLIER_COLUMN, DEFAULT_UPPER_PERCENTILE,
};
use crate::error::{Error, Result};
use crate::inventory::Item;

/// Settings of the car listing cleanup session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleaningConfig {
    pub data_file: String,
    pub output_file: String,
    /// File name prefix of the CSV files combined by the merge action
    pub merge_prefix: String,
    pub drop_columns: Vec<String>,
    /// Old name -> new name
    pub rename: BTreeMap<String, String>,
    pub outlier_column: String,
    pub lower_percentile: f64,
    pub upper_percentile: f64,
    pub summary_columns: Vec<String>,
    pub factorize_source: String,
    pub factorize_target: String,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            data_file: "cars_data.csv".into(),
            output_file: "cars_data_cleaned.csv".into(),
            merge_prefix: "cars_dat".into(),
            drop_columns: vec![
                "Engine Cylinders".into(),
                "Number of Doors".into(),
                "Market Category".into(),
                "Popularity".into(),
            ],
            rename: BTreeMap::from([
                ("MSRP".to_string(), "Price".to_string()),
                ("Make".to_string(), "Brand".to_string()),
            ]),
            outlier_column: DEFAULT_OUTLIER_COLUMN.into(),
            lower_percentile: DEFAULT_LOWER_PERCENTILE,
            upper_percentile: DEFAULT_UPPER_PERCENTILE,
            summary_columns: vec!["Year".into(), "Price".into()],
            factorize_source: DEFAULT_FACTORIZE_SOURCE.into(),
            factorize_target: DEFAULT_FACTORIZE_TARGET.into(),
        }
    }
}

impl CleaningConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&text)?;
        info!("loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let (low, high) = (self.lower_percentile, self.upper_percentile);
        let in_range = |p: f64| (0.0..=100.0).contains(&p);
        if !(in_range(low) && in_range(high) && low <= high) {
            return Err(Error::InvalidPercentile { low, high });
        }
        if self.outlier_column.is_empty() || self.factorize_source.is_empty() {
            return Err(Error::Config("column names must not be empty".into()));
        }
        Ok(())
    }

    pub fn drop_column_names(&self) -> Vec<&str> {
        self.drop_columns.iter().map(String::as_str).collect()
    }

    pub fn rename_pairs(&self) -> Vec<(&str, &str)> {
        self.rename
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .collect()
    }

    pub fn summary_column_names(&self) -> Vec<&str> {
        self.summary_columns.iter().map(String::as_str).collect()
    }
}

/// Settings of the fruit inventory session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InventoryConfig {
    pub store_file: String,
    /// Items loaded when the store is empty
    pub starter_items: Vec<Item>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            store_file: "fruit_list.dat".into(),
            starter_items: vec![
                Item::new("Äpple", 6, 10.0),
                Item::new("Banan", 5, 20.0),
                Item::new("Kiwi", 10, 15.0),
            ],
        }
    }
}

impl InventoryConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }
}
