//! How often a random hand can reach the target

mod core;

pub use self::core::{SurveyConfig, SurveyReport, survey};
