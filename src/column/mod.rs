mod common;
mod float64_column;
mod int64_column;
mod string_column;

pub use common::{utils, Column, ColumnTrait, ColumnType};

pub use float64_column::Float64Column;
pub use int64_column::Int64Column;
pub use string_column::StringColumn;
