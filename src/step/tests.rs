use super::*;
use crate::config::{PluginConfig, StepConfig};
use crate::host::{MockJournal, MockProcessStore, MockReplacerFactory, StepHost};
use crate::process::Process;
use std::sync::Arc;

const PROCESS_ID: i32 = 17;

struct Fixture {
    journal: MockJournal,
    store: MockProcessStore,
    replacers: MockReplacerFactory,
}

impl Fixture {
    fn new(replacers: MockReplacerFactory) -> Self {
        Self {
            journal: MockJournal::new(),
            store: MockProcessStore::new(),
            replacers,
        }
    }

    fn with_store(mut self, store: MockProcessStore) -> Self {
        self.store = store;
        self
    }

    fn plugin(&self, template: &str) -> RenameProcessStep {
        let config = PluginConfig {
            blocks: vec![StepConfig {
                project: vec!["*".to_string()],
                step: vec!["*".to_string()],
                new_process_title: template.to_string(),
            }],
        };
        let host = StepHost::new(
            config,
            Arc::new(self.replacers.clone()),
            Arc::new(self.journal.clone()),
            Arc::new(self.store.clone()),
        );
        RenameProcessStep::new(host)
    }
}

fn step() -> Step {
    Step::new(
        5,
        "Rename process",
        Process::new(PROCESS_ID, "old_title").with_project("Demo"),
    )
}

fn current_title(plugin: &RenameProcessStep) -> String {
    plugin.step().unwrap().process.title.clone()
}

#[test]
fn test_plugin_identity() {
    let plugin = Fixture::new(MockReplacerFactory::default()).plugin("");
    let info = plugin.info();

    assert_eq!(info.title, "intranda_step_rename_process");
    assert_eq!(info.plugin_type, PluginType::Step);
    assert_eq!(info.gui_type, PluginGuiType::None);
    assert_eq!(info.page_path, "/uii/plugin_step_rename_process.xhtml");
    assert_eq!(info.interface_version, 0);
    assert_eq!(info, RenameProcessStep::describe());
}

#[test]
fn test_substitutes_variables() {
    let fixture = Fixture::new(MockReplacerFactory::with_variables([
        ("ProjectName", "Demo"),
        ("Year", "2024"),
    ]));
    let mut plugin = fixture.plugin("{ProjectName}_{Year}");
    plugin.initialize(step(), "/task_edit.xhtml");

    assert_eq!(plugin.new_process_title(), "Demo_2024");
    assert_eq!(plugin.run(), PluginReturnValue::Finish);
    assert_eq!(current_title(&plugin), "Demo_2024");

    let saved = fixture.store.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].title, "Demo_2024");
    assert_eq!(saved[0].id, PROCESS_ID);
}

#[test]
fn test_template_without_braces_is_normalized() {
    let fixture = Fixture::new(MockReplacerFactory::default());
    let mut plugin = fixture.plugin("  Manuscript 0042 \n");
    plugin.initialize(step(), "");

    assert!(plugin.execute());
    assert_eq!(current_title(&plugin), "Manuscript0042");
    assert!(fixture.journal.messages_of(LogType::Warn).is_empty());
}

#[test]
fn test_unresolved_variables_are_stripped_and_warned() {
    let fixture = Fixture::new(MockReplacerFactory::default());
    let mut plugin = fixture.plugin("  foo {unknown} bar ");
    plugin.initialize(step(), "");

    assert_eq!(plugin.run(), PluginReturnValue::Finish);
    assert_eq!(current_title(&plugin), "foobar");
    assert_eq!(
        fixture.journal.messages_of(LogType::Warn),
        vec!["Rename Process Step Plugin: Unrecognized Goobi Variable: unknown"]
    );
}

#[test]
fn test_one_warning_per_occurrence() {
    let fixture = Fixture::new(MockReplacerFactory::with_variables([("id", "7")]));
    let mut plugin = fixture.plugin("{id}{a}_{b}{a}");
    plugin.initialize(step(), "");

    assert_eq!(plugin.run(), PluginReturnValue::Finish);
    assert_eq!(current_title(&plugin), "7_");
    assert_eq!(fixture.journal.messages_of(LogType::Warn).len(), 3);
}

#[test]
fn test_blank_title_fails_without_saving() {
    let fixture = Fixture::new(MockReplacerFactory::default());
    let mut plugin = fixture.plugin("");
    plugin.initialize(step(), "");

    assert_eq!(plugin.run(), PluginReturnValue::Error);
    assert_eq!(current_title(&plugin), "old_title");
    assert!(fixture.store.saved().is_empty());
    assert_eq!(
        fixture.journal.messages_of(LogType::Error),
        vec!["Rename Process Step Plugin: Cannot rename a process with blank!"]
    );
}

#[test]
fn test_only_placeholders_is_blank() {
    let fixture = Fixture::new(MockReplacerFactory::default());
    let mut plugin = fixture.plugin("{a} {b}");
    plugin.initialize(step(), "");

    assert!(!plugin.execute());
    assert_eq!(current_title(&plugin), "old_title");
    assert_eq!(fixture.journal.messages_of(LogType::Warn).len(), 2);
    assert_eq!(fixture.journal.messages_of(LogType::Error).len(), 1);
}

#[test]
fn test_running_twice_is_idempotent() {
    let fixture = Fixture::new(MockReplacerFactory::with_variables([("Year", "2024")]));
    let mut plugin = fixture.plugin("Print_{Year}_{gone}");
    plugin.initialize(step(), "");

    assert_eq!(plugin.run(), PluginReturnValue::Finish);
    let first = current_title(&plugin);
    assert_eq!(plugin.run(), PluginReturnValue::Finish);

    assert_eq!(current_title(&plugin), first);
    assert_eq!(first, "Print_2024_");
    assert_eq!(fixture.journal.messages_of(LogType::Warn).len(), 1);
}

#[test]
fn test_metadata_failure_continues_with_raw_template() {
    let fixture = Fixture::new(MockReplacerFactory::failing("metadata file unreadable"));
    let mut plugin = fixture.plugin("Static {Year} title");
    plugin.initialize(step(), "");

    let errors = fixture.journal.messages_of(LogType::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Exception happened during initialization"));
    assert!(errors[0].contains("metadata file unreadable"));
    assert_eq!(plugin.new_process_title(), "Static{Year}title");

    assert_eq!(plugin.run(), PluginReturnValue::Finish);
    assert_eq!(current_title(&plugin), "Statictitle");
}

#[test]
fn test_save_failure_restores_title() {
    let fixture = Fixture::new(MockReplacerFactory::default())
        .with_store(MockProcessStore::failing("connection lost"));
    let mut plugin = fixture.plugin("new_title");
    plugin.initialize(step(), "");

    assert_eq!(plugin.run(), PluginReturnValue::Error);
    assert_eq!(current_title(&plugin), "old_title");

    let errors = fixture.journal.messages_of(LogType::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("connection lost"));
}

#[test]
fn test_run_before_initialize_fails() {
    let fixture = Fixture::new(MockReplacerFactory::default());
    let mut plugin = fixture.plugin("anything");

    assert_eq!(plugin.run(), PluginReturnValue::Error);
    assert!(plugin.step().is_none());
    // Unknown process, so nothing reaches the journal
    assert!(fixture.journal.messages().is_empty());
}

#[test]
fn test_journal_lifecycle_messages() {
    let fixture = Fixture::new(MockReplacerFactory::default());
    let mut plugin = fixture.plugin("title");
    plugin.initialize(step(), "");
    plugin.run();

    let infos = fixture.journal.messages_of(LogType::Info);
    assert_eq!(
        infos,
        vec![
            "Rename Process Step Plugin: RenameProcess step plugin initialized",
            "Rename Process Step Plugin: RenameProcess step plugin executed",
        ]
    );
    assert!(fixture
        .journal
        .messages()
        .iter()
        .all(|(id, _, _)| *id == PROCESS_ID));
}

#[test]
fn test_process_without_id_skips_journal() {
    let fixture = Fixture::new(MockReplacerFactory::default());
    let mut plugin = fixture.plugin("title");
    plugin.initialize(Step::new(1, "s", Process::new(0, "t")), "");

    assert_eq!(plugin.run(), PluginReturnValue::Finish);
    assert!(fixture.journal.messages().is_empty());
    assert_eq!(fixture.store.saved().len(), 1);
}

#[test]
fn test_template_scoped_by_project_and_step() {
    let fixture = Fixture::new(MockReplacerFactory::default());
    let config = PluginConfig {
        blocks: vec![
            StepConfig {
                project: vec!["*".to_string()],
                step: vec!["*".to_string()],
                new_process_title: "generic".to_string(),
            },
            StepConfig {
                project: vec!["Demo".to_string()],
                step: vec!["Rename process".to_string()],
                new_process_title: "specific".to_string(),
            },
        ],
    };
    let host = StepHost::new(
        config,
        Arc::new(fixture.replacers.clone()),
        Arc::new(fixture.journal.clone()),
        Arc::new(fixture.store.clone()),
    );
    let mut plugin = RenameProcessStep::new(host);
    plugin.initialize(step(), "");

    assert_eq!(plugin.new_process_title(), "specific");
    assert_eq!(fixture.replacers.requests(), vec![5]);
}

#[test]
fn test_navigation_targets() {
    let mut plugin = Fixture::new(MockReplacerFactory::default()).plugin("x");
    plugin.initialize(step(), "/task_edit.xhtml");

    assert_eq!(plugin.cancel(), "/uii/task_edit.xhtml");
    assert_eq!(plugin.finish(), "/uii/task_edit.xhtml");
}
