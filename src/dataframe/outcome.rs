use crate::dataframe::DataFrame;
use crate::error::Warning;

/// What happened when a transformation was asked to work on an optional column
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The transformation ran and produced `T`
    Applied(T),
    /// The transformation was a no-op
    Skipped(Warning),
}

/// A transformed frame plus the outcome of the transformation.
/// On [`Outcome::Skipped`] the frame equals the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed<T> {
    pub frame: DataFrame,
    pub outcome: Outcome<T>,
}

impl<T> Transformed<T> {
    pub(crate) fn applied(frame: DataFrame, report: T) -> Self {
        Self {
            frame,
            outcome: Outcome::Applied(report),
        }
    }

    pub(crate) fn skipped(frame: DataFrame, warning: Warning) -> Self {
        Self {
            frame,
            outcome: Outcome::Skipped(warning),
        }
    }

    pub fn report(&self) -> Option<&T> {
        match &self.outcome {
            Outcome::Applied(report) => Some(report),
            Outcome::Skipped(_) => None,
        }
    }

    pub fn warning(&self) -> Option<&Warning> {
        match &self.outcome {
            Outcome::Applied(_) => None,
            Outcome::Skipped(warning) => Some(warning),
        }
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }
}
