use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{Error, ScheduleError};
use crate::core::pipeline::policy::Policy;
use crate::core::scheduler::{Scheduler, DEFAULT_REORDER_WINDOW};

const DEFAULT_POLICY: &str = "best";
const DEFAULT_OUTPUT_SUFFIX: &str = "_RESULT";

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Loads a configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a TOML file; missing sections and keys take defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration text.
    pub fn parse(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Builds the scheduler described by the `[scheduler]` section.
    ///
    /// # Returns
    ///
    /// The scheduler, or `InvalidPolicy` if the policy key names no policy.
    pub fn build_scheduler(&self) -> Result<Scheduler, ScheduleError> {
        let policy = self.scheduler.policy.resolve()?;
        Ok(Scheduler::new(policy).with_reorder_window(self.scheduler.reorder_window))
    }
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SchedulerConfig {
    #[serde(default = "default_policy")]
    pub policy: PolicySelector,

    #[serde(default = "default_reorder_window")]
    pub reorder_window: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            policy: default_policy(),
            reorder_window: default_reorder_window(),
        }
    }
}

/// Policy as written in the config file: a name or a numeric selector.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum PolicySelector {
    Index(i64),
    Name(String),
}

impl PolicySelector {
    /// Maps the selector to a policy.
    pub fn resolve(&self) -> Result<Policy, ScheduleError> {
        match self {
            PolicySelector::Index(idx) => u8::try_from(*idx)
                .map_err(|_| ScheduleError::InvalidPolicy(idx.to_string()))
                .and_then(Policy::try_from),
            PolicySelector::Name(name) => name.parse(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_suffix")]
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_output_suffix(),
        }
    }
}

fn default_policy() -> PolicySelector {
    PolicySelector::Name(DEFAULT_POLICY.to_string())
}

fn default_reorder_window() -> usize {
    DEFAULT_REORDER_WINDOW
}

fn default_output_suffix() -> String {
    DEFAULT_OUTPUT_SUFFIX.to_string()
}
