// Fri Oct 16 2026 - Alex

use crate::output::ReportFormat;
use crate::structure::{PackingPolicy, StructureError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host_policy: PackingPolicy,
    pub device_policy: PackingPolicy,
    pub compare_nested: bool,
    pub format: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub use_color: bool,
    pub pretty_json: bool,
    pub fail_on_divergence: bool,
    pub structs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host_policy: PackingPolicy::Natural,
            device_policy: PackingPolicy::DeviceVector,
            compare_nested: false,
            format: ReportFormat::Text,
            output_file: None,
            use_color: true,
            pretty_json: true,
            fail_on_divergence: true,
            structs: Vec::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, StructureError> {
        let text = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)
            .map_err(|e| StructureError::ParseError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_policies(mut self, host: PackingPolicy, device: PackingPolicy) -> Self {
        self.host_policy = host;
        self.device_policy = device;
        self
    }

    pub fn with_nested(mut self, nested: bool) -> Self {
        self.compare_nested = nested;
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = Some(output);
        self
    }

    pub fn with_structs(mut self, structs: Vec<String>) -> Self {
        self.structs = structs;
        self
    }

    pub fn validate(&self) -> Result<(), StructureError> {
        if self.structs.iter().any(|s| s.trim().is_empty()) {
            return Err(StructureError::ParseError("struct names must not be empty".to_string()));
        }
        if self.host_policy == self.device_policy {
            log::warn!("Host and device both use {}; every comparison will match", self.host_policy);
        }
        Ok(())
    }
}
