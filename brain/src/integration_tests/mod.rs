pub use self::helpers::{full_throttle, FinishedTest, TestRunner, TestScenario};

mod helpers;
mod scenarios;
