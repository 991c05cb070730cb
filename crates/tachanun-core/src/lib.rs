pub mod classifier;
pub mod config;
pub mod error;
pub mod format;
pub mod hebrew;
pub mod io;
pub mod report;
pub mod rules;
pub mod types;

pub use classifier::{evaluate, Classifier, DayContext, Rule, Verdict};
pub use error::{Result, TachanunError};
pub use hebrew::HebrewDate;
pub use report::DayReport;
pub use types::{HebrewMonth, Weekday};
