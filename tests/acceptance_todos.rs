use std::io::Cursor;

use todo_cli::application::todo_service::{Summary, TodoService, TodoServiceImpl};
use todo_cli::cli::{app::choose_storage, messages, App};
use todo_cli::config::Config;
use todo_cli::domain::cache::TodoCache;
use todo_cli::infrastructure::{build_cache, json_file_cache::JsonFileCache, StorageKind};

/// Drives a whole session: storage choice followed by commands.
fn run_session(config: &Config, script: &str) -> String {
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    if let Some(kind) = choose_storage(&mut input, &mut output).unwrap() {
        let service = TodoServiceImpl::new(build_cache(kind, config));
        let mut app = App::new(service, input, output);
        app.run().unwrap();
        output = app.into_output();
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn acceptance_session_add_add_toggle_list() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_data_dir(dir.path());
    let out = run_session(&config, "1\nadd\nBuy milk\n1\nWrite report\ntoggle\n1\nlist\nexit\n");

    let first = out.rfind("1. [x] Buy milk: is ").unwrap();
    let second = out.rfind("2. [ ] Write report: is ").unwrap();
    assert!(first < second);
    assert!(out.contains(&messages::summary_message(Summary::KeepGoing)));
    assert!(out.contains("Bye!"));
    // session storage never touches the data directory
    assert!(!config.todo_file().exists());
}

#[test]
fn acceptance_four_open_tasks_are_busy() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_data_dir(dir.path());
    let out = run_session(&config, "1\nadd\na\nadd\nb\nadd\nc\nadd\nd\nlist\n");
    assert!(out.contains(&messages::summary_message(Summary::Busy)));
}

#[test]
fn acceptance_delete_out_of_range_keeps_list() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_data_dir(dir.path());
    run_session(&config, "2\nadd\na\nadd\nb\nadd\nc\ndelete\n5\nexit\n");

    let titles: Vec<String> = JsonFileCache::new(config.todo_file()).read_todos().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
}

#[test]
fn acceptance_file_storage_survives_restart_with_stable_ids() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_data_dir(dir.path());
    run_session(&config, "2\nadd\nBuy milk\nadd\nWrite report\n4\n1\n");
    let first_run = JsonFileCache::new(config.todo_file()).read_todos();
    assert_eq!(first_run.len(), 1);
    assert_eq!(first_run[0].title, "Write report");

    let out = run_session(&config, "2\n3\n1\n2\nexit\n");
    assert!(out.contains("1. [x] Write report: is "));
    assert!(out.contains(&messages::summary_message(Summary::AllDone)));

    let second_run = JsonFileCache::new(config.todo_file()).read_todos();
    assert_eq!(second_run[0].id, first_run[0].id);
    assert!(second_run[0].is_completed);
}

#[test]
fn acceptance_unwritable_file_reports_failure_and_keeps_running() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let config = Config::with_data_dir(&blocker);

    let out = run_session(&config, "2\nadd\nBuy milk\nlist\nexit\n");
    assert!(out.contains("Failed to save"));
    assert!(out.contains(&messages::summary_message(Summary::Empty)));
    assert!(out.contains("Bye!"));
}

#[test]
fn acceptance_declining_at_storage_choice_ends_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_data_dir(dir.path());
    let out = run_session(&config, "3\nn\nadd\n");
    assert!(!out.contains("What would you like to do?"));
}

#[test]
fn service_over_boxed_file_cache() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_data_dir(dir.path());
    let mut service = TodoServiceImpl::new(build_cache(StorageKind::File, &config));
    service.add("one").unwrap();
    service.add("two").unwrap();
    service.delete(1).unwrap();

    let reloaded = TodoServiceImpl::new(build_cache(StorageKind::File, &config));
    let listing = reloaded.list();
    assert_eq!(listing.todos.len(), 1);
    assert_eq!(listing.todos[0].title, "two");
}
