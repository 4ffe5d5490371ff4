// Fri Oct 16 2026 - Alex

pub mod json;
pub mod report;

pub use json::JsonSerializer;
pub use report::ReportGenerator;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self::Text
    }
}
