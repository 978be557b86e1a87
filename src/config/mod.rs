//! Project and step scoped plugin configuration
//!
//! A plugin configuration file holds a list of `[[config]]` blocks. Each block
//! names the projects and steps it applies to, `*` matching any, and carries
//! the plugin parameters:
//!
//! ```toml
//! [[config]]
//! project = ["*"]
//! step = ["*"]
//! newProcessTitle = "{meta.CatalogIDDigital}"
//!
//! [[config]]
//! project = ["Manuscripts"]
//! step = ["Rename process"]
//! newProcessTitle = "{projectname}_{meta.Shelfmark}"
//! ```

use serde::{Deserialize, Serialize};

pub mod loader;

pub use loader::ConfigLoader;

const WILDCARD: &str = "*";

/// All configuration blocks of one plugin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(default, rename = "config")]
    pub blocks: Vec<StepConfig>,
}

/// A configuration block scoped to a set of projects and steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepConfig {
    #[serde(default)]
    pub project: Vec<String>,
    #[serde(default)]
    pub step: Vec<String>,
    /// Title template, resolved against the process when the step runs
    #[serde(default)]
    pub new_process_title: String,
}

impl StepConfig {
    fn matches(&self, project: &str, step: &str) -> bool {
        self.project.iter().any(|p| p == project) && self.step.iter().any(|s| s == step)
    }
}

impl PluginConfig {
    /// Find the block for a project/step pair.
    ///
    /// Exact matches win over wildcards, and a named project wins over a
    /// named step: `(project, step)`, `(project, *)`, `(*, step)`, `(*, *)`.
    /// Falls back to an empty block so every parameter takes its default.
    pub fn project_and_step_config(&self, project: &str, step: &str) -> StepConfig {
        let candidates = [
            (project, step),
            (project, WILDCARD),
            (WILDCARD, step),
            (WILDCARD, WILDCARD),
        ];

        candidates
            .iter()
            .find_map(|(p, s)| self.blocks.iter().find(|block| block.matches(p, s)))
            .cloned()
            .unwrap_or_default()
    }
}
