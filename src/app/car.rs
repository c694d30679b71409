//! Interactive cleanup session over a car listings table

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use log::{error, info};

use super::prompt::Prompt;
use super::report::ReportSink;
use crate::config::CleaningConfig;
use crate::dataframe::{DataFrame, Outcome};
use crate::error::Result;
use crate::io;

pub const CAR_MENU: &str = "
========== Car Dataset Menu ==========
1. Drop unnecessary columns
2. Show basic data overview
3. Convert 'Brand' to numeric ID
4. Merge CSV files
5. Rename columns
6. Drop rows with missing values
7. Show summary statistics
8. Drop outliers in 'Year'
9. Exit and save
======================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarAction {
    DropColumns,
    Overview,
    Factorize,
    Merge,
    Rename,
    DropNa,
    Summary,
    DropOutliers,
    SaveAndExit,
}

impl CarAction {
    /// Parses a menu choice (`"1"` to `"9"`)
    pub fn parse(choice: &str) -> Option<Self> {
        let action = match choice.trim() {
            "1" => CarAction::DropColumns,
            "2" => CarAction::Overview,
            "3" => CarAction::Factorize,
            "4" => CarAction::Merge,
            "5" => CarAction::Rename,
            "6" => CarAction::DropNa,
            "7" => CarAction::Summary,
            "8" => CarAction::DropOutliers,
            "9" => CarAction::SaveAndExit,
            _ => return None,
        };
        Some(action)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Current table plus the settings the menu actions use.
/// Relative file names in the config resolve against `base_dir`.
#[derive(Debug, Clone)]
pub struct CarSession {
    frame: DataFrame,
    config: CleaningConfig,
    base_dir: PathBuf,
}

impl CarSession {
    pub fn new(frame: DataFrame, config: CleaningConfig, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            frame,
            config,
            base_dir: base_dir.into(),
        }
    }

    /// Loads `config.data_file`; an unreadable file starts an empty session
    pub fn load(config: CleaningConfig, base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let frame = io::load_csv_or_empty(base_dir.join(&config.data_file));
        Self::new(frame, config, base_dir)
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn config(&self) -> &CleaningConfig {
        &self.config
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.output_file)
    }

    fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn perform(&mut self, action: CarAction, sink: &mut dyn ReportSink) -> Result<Flow> {
        match action {
            CarAction::DropColumns => {
                let dropped = self.frame.drop_columns(&self.config.drop_column_names());
                sink.message(&format!("Dropped {} columns", dropped.len()))?;
            }
            CarAction::Overview => self.overview(sink)?,
            CarAction::Factorize => {
                let result = self
                    .frame
                    .factorize_column(&self.config.factorize_source, &self.config.factorize_target)?;
                match &result.outcome {
                    Outcome::Applied(mapping) => sink.message(&format!(
                        "Converted '{}' to numeric IDs: {}",
                        self.config.factorize_source, mapping
                    ))?,
                    Outcome::Skipped(warning) => sink.message(&format!("Warning: {}", warning))?,
                }
                self.frame = result.frame;
            }
            CarAction::Merge => {
                let result = io::merge_csvs(self.base_dir(), &self.config.merge_prefix)?;
                match result.outcome {
                    Outcome::Applied(report) => {
                        sink.message(&format!(
                            "Merged {} files with total {} rows",
                            report.files.len(),
                            result.frame.row_count()
                        ))?;
                        self.frame = result.frame;
                    }
                    // keep the current table rather than replacing it with nothing
                    Outcome::Skipped(warning) => sink.message(&format!("Warning: {}", warning))?,
                }
            }
            CarAction::Rename => {
                let renamed = self.frame.rename_columns(&self.config.rename_pairs())?;
                sink.message(&format!("Renamed {} columns", renamed))?;
            }
            CarAction::DropNa => {
                let before = self.frame.row_count();
                self.frame = self.frame.drop_na()?;
                sink.message(&format!(
                    "Removed {} rows with missing values",
                    before - self.frame.row_count()
                ))?;
            }
            CarAction::Summary => {
                let report = self
                    .frame
                    .summarize_columns(&self.config.summary_column_names())?;
                for (column, stats) in &report.columns {
                    sink.summary(column, stats)?;
                }
                for warning in &report.warnings {
                    sink.message(&format!("Warning: {}", warning))?;
                }
            }
            CarAction::DropOutliers => {
                let result = self.frame.filter_outliers(
                    &self.config.outlier_column,
                    self.config.lower_percentile,
                    self.config.upper_percentile,
                )?;
                match &result.outcome {
                    Outcome::Applied(report) => sink.outliers(report)?,
                    Outcome::Skipped(warning) => sink.message(&format!("Warning: {}", warning))?,
                }
                self.frame = result.frame;
            }
            CarAction::SaveAndExit => {
                let path = self.output_path();
                io::write_csv(&self.frame, &path)?;
                sink.message(&format!("Data saved to {}", path.display()))?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn overview(&self, sink: &mut dyn ReportSink) -> Result<()> {
        sink.message(&format!("First 5 rows:\n{}", self.frame.head(5)?))?;
        sink.message(&format!("Last 5 rows:\n{}", self.frame.tail(5)?))?;
        let (rows, columns) = self.frame.shape();
        sink.message(&format!("Shape: ({}, {})", rows, columns))?;

        let description: Vec<String> = self
            .frame
            .describe()
            .iter()
            .map(ToString::to_string)
            .collect();
        sink.message(&format!("Description:\n{}", description.join("\n")))
    }

    /// Runs the menu loop until the save-and-exit action or end of input.
    /// Failed actions are reported and the loop goes on.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        prompt: &mut Prompt<R, W>,
        sink: &mut dyn ReportSink,
    ) -> Result<()> {
        loop {
            prompt.say(CAR_MENU)?;
            let Some(choice) = prompt.ask("Enter your choice (1-9): ")? else {
                info!("end of input, leaving without saving");
                return Ok(());
            };

            let Some(action) = CarAction::parse(&choice) else {
                prompt.say("Invalid input. Please enter a number from 1 to 9.")?;
                continue;
            };

            match self.perform(action, sink) {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(err) => {
                    error!("{:?} failed: {}", action, err);
                    sink.message(&format!("Error: {}", err))?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::report::TextSink;

    #[test]
    fn test_parse_choices() {
        assert_eq!(CarAction::parse(" 8 "), Some(CarAction::DropOutliers));
        assert_eq!(CarAction::parse("9"), Some(CarAction::SaveAndExit));
        assert_eq!(CarAction::parse("10"), None);
        assert_eq!(CarAction::parse("x"), None);
    }

    #[test]
    fn test_actions_on_missing_columns_continue() {
        let mut df = DataFrame::new();
        df.add_int_column("Price", vec![1, 2, 3]).unwrap();
        let mut session = CarSession::new(df.clone(), CleaningConfig::default(), ".");
        let mut sink = TextSink::new(Vec::new());

        assert_eq!(
            session.perform(CarAction::DropOutliers, &mut sink).unwrap(),
            Flow::Continue
        );
        assert_eq!(
            session.perform(CarAction::Factorize, &mut sink).unwrap(),
            Flow::Continue
        );
        assert_eq!(session.frame(), &df);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains("Warning: column 'Year' not found"));
        assert!(text.contains("Warning: column 'Brand' not found"));
    }
}
