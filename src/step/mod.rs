//! Step plugin interface and the rename process step
//!
//! The workflow host drives a step plugin in two phases: [`StepPlugin::initialize`]
//! with the step to work on, then [`StepPlugin::execute`] (or `run`).

use crate::host::{LogType, StepHost};
use crate::process::Step;
use serde::Serialize;
use tracing::{debug, error, info, warn};

pub mod title;

#[cfg(test)]
mod tests;

/// Plugin title, also the name of its configuration file
pub const PLUGIN_TITLE: &str = "intranda_step_rename_process";

const PAGE_PATH: &str = "/uii/plugin_step_rename_process.xhtml";
const NAVIGATION_PREFIX: &str = "/uii";
const LOG_PREFIX: &str = "Rename Process Step Plugin: ";

/// Outcome of a step run reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PluginReturnValue {
    Finish,
    Error,
}

/// Kind of user interface a plugin contributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PluginGuiType {
    None,
    Part,
    Full,
    PartAndFull,
}

/// Extension point a plugin is registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PluginType {
    Step,
}

/// Static description of a plugin, as the host registers it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginInfo {
    pub title: String,
    pub plugin_type: PluginType,
    pub gui_type: PluginGuiType,
    pub page_path: String,
    pub interface_version: u32,
}

/// Trait that all step plugins implement
pub trait StepPlugin {
    fn title(&self) -> &str;

    fn plugin_type(&self) -> PluginType {
        PluginType::Step
    }

    fn gui_type(&self) -> PluginGuiType;

    fn page_path(&self) -> &str;

    fn interface_version(&self) -> u32 {
        0
    }

    /// Prepare the plugin for a step. `return_path` is where the host
    /// navigates back to once the plugin is done.
    fn initialize(&mut self, step: Step, return_path: &str);

    /// Run the step and report the outcome
    fn run(&mut self) -> PluginReturnValue;

    /// Run the step, `true` unless it failed
    fn execute(&mut self) -> bool {
        self.run() != PluginReturnValue::Error
    }

    /// Navigation target when the user cancels
    fn cancel(&self) -> String;

    /// Navigation target when the user finishes
    fn finish(&self) -> String;

    fn info(&self) -> PluginInfo {
        PluginInfo {
            title: self.title().to_string(),
            plugin_type: self.plugin_type(),
            gui_type: self.gui_type(),
            page_path: self.page_path().to_string(),
            interface_version: self.interface_version(),
        }
    }
}

/// Renames a process from a configured title template
///
/// During initialization the template configured for the step's project and
/// step is resolved against the process. Running the step strips variables
/// the host did not recognize, refuses blank titles, and saves the process
/// under its new title.
pub struct RenameProcessStep {
    host: StepHost,
    step: Option<Step>,
    return_path: String,
    new_process_title: String,
}

impl RenameProcessStep {
    pub fn new(host: StepHost) -> Self {
        Self {
            host,
            step: None,
            return_path: String::new(),
            new_process_title: String::new(),
        }
    }

    /// Identity of this plugin, available before any host is wired up
    pub fn describe() -> PluginInfo {
        PluginInfo {
            title: PLUGIN_TITLE.to_string(),
            plugin_type: PluginType::Step,
            gui_type: PluginGuiType::None,
            page_path: PAGE_PATH.to_string(),
            interface_version: 0,
        }
    }

    /// The step handed to `initialize`, carrying the process in its current state
    pub fn step(&self) -> Option<&Step> {
        self.step.as_ref()
    }

    /// The title the process will be renamed to, as resolved so far
    pub fn new_process_title(&self) -> &str {
        &self.new_process_title
    }

    /// Write a message to the log and, for known processes, to the process journal
    fn log_both(&self, process_id: i32, log_type: LogType, message: &str) {
        let log_message = format!("{LOG_PREFIX}{message}");
        match log_type {
            LogType::Error => error!("{}", log_message),
            LogType::Warn => warn!("{}", log_message),
            LogType::Info => info!("{}", log_message),
            LogType::Debug => debug!("{}", log_message),
        }
        if process_id > 0 {
            self.host
                .journal
                .add_message(process_id, log_type, &log_message);
        }
    }

    fn resolve_template(&self, step: &Step, template: &str) -> String {
        match self.host.replacers.replacer_for(step) {
            Ok(replacer) => replacer.replace(template),
            Err(e) => {
                self.log_both(
                    step.process.id,
                    LogType::Error,
                    &format!("Exception happened during initialization: {e}"),
                );
                template.to_string()
            }
        }
    }

    fn rename(&mut self, step: &mut Step) -> PluginReturnValue {
        let process_id = step.process.id;
        debug!("process title before = {}", step.process.title);

        if title::has_placeholders(&self.new_process_title) {
            for variable in title::unresolved_variables(&self.new_process_title) {
                self.log_both(
                    process_id,
                    LogType::Warn,
                    &format!("Unrecognized Goobi Variable: {variable}"),
                );
            }
            self.new_process_title = title::strip_placeholders(&self.new_process_title);
        }

        if title::is_blank(&self.new_process_title) {
            self.log_both(process_id, LogType::Error, "Cannot rename a process with blank!");
            return PluginReturnValue::Error;
        }

        let old_title = step.process.title.clone();
        step.process.change_process_title(&self.new_process_title);

        if let Err(e) = self.host.store.save_process(&step.process) {
            step.process.change_process_title(&old_title);
            self.log_both(
                process_id,
                LogType::Error,
                &format!(
                    "Failed to save process with new title '{}': {}",
                    self.new_process_title, e
                ),
            );
            return PluginReturnValue::Error;
        }

        debug!("process title after = {}", step.process.title);
        self.log_both(process_id, LogType::Info, "RenameProcess step plugin executed");
        debug!("=============================== Stopping Rename Process ===============================");

        PluginReturnValue::Finish
    }
}

impl StepPlugin for RenameProcessStep {
    fn title(&self) -> &str {
        PLUGIN_TITLE
    }

    fn gui_type(&self) -> PluginGuiType {
        PluginGuiType::None
    }

    fn page_path(&self) -> &str {
        PAGE_PATH
    }

    fn initialize(&mut self, step: Step, return_path: &str) {
        debug!("=============================== Starting Rename Process ===============================");
        self.return_path = return_path.to_string();

        let config = self
            .host
            .config
            .project_and_step_config(step.project_name(), &step.title);
        let template = config.new_process_title;
        debug!("processTitle = {}", template);

        let resolved = self.resolve_template(&step, &template);
        debug!("newProcessTitle = {}", resolved);

        self.new_process_title = title::normalize_title(&resolved);
        debug!("newProcessTitle = {}", self.new_process_title);

        let process_id = step.process.id;
        self.step = Some(step);
        self.log_both(process_id, LogType::Info, "RenameProcess step plugin initialized");
    }

    fn run(&mut self) -> PluginReturnValue {
        let Some(mut step) = self.step.take() else {
            self.log_both(0, LogType::Error, "Step has not been initialized");
            return PluginReturnValue::Error;
        };

        let outcome = self.rename(&mut step);
        self.step = Some(step);
        outcome
    }

    fn cancel(&self) -> String {
        format!("{NAVIGATION_PREFIX}{}", self.return_path)
    }

    fn finish(&self) -> String {
        format!("{NAVIGATION_PREFIX}{}", self.return_path)
    }
}
