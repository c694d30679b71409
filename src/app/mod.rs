//! Menu-driven console sessions for the two binaries

pub mod car;
pub mod fruit;
pub mod prompt;
pub mod report;

pub use self::car::{CarAction, CarSession, Flow};
pub use self::fruit::{FruitAction, FruitSession};
pub use self::prompt::Prompt;
pub use self::report::{JsonSink, ReportSink, TextSink};
