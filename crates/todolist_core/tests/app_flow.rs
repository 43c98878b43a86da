use todolist_core::{
    KeyValueStorage, MemoryStorage, TitlePolicy, TodoApp, APP_HEADER, STORAGE_KEY,
};

#[test]
fn add_toggle_delete_scenario() {
    let mut app = TodoApp::start(MemoryStorage::new()).unwrap();
    assert!(app.view().rows.is_empty());

    let id = app.submit_text("Buy milk").unwrap().unwrap();
    let view = app.view();
    assert_eq!(view.header, APP_HEADER);
    assert_eq!(view.draft, "");
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].title, "Buy milk");
    assert!(!view.rows[0].checked);

    let toggle = view.rows[0].on_toggle(true);
    app.dispatch(toggle).unwrap();
    let view = app.view();
    assert!(view.rows[0].checked);
    assert_eq!(view.rows[0].class_name, "todo-item completed");

    app.dispatch(view.rows[0].on_delete()).unwrap();
    assert!(app.view().rows.is_empty());
    assert!(app.store().todos().get(&id).is_none());

    let storage = app.into_storage();
    assert_eq!(storage.get(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn blank_submission_is_rejected_and_draft_kept() {
    let mut app = TodoApp::start(MemoryStorage::new()).unwrap();

    assert_eq!(app.submit_text("  ").unwrap(), None);
    assert!(app.store().is_empty());
    assert_eq!(app.view().draft, "  ");
}

#[test]
fn default_policy_stores_title_as_typed() {
    let mut app = TodoApp::start(MemoryStorage::new()).unwrap();

    app.submit_text("  Walk dog  ").unwrap().unwrap();
    assert_eq!(app.store().todos().as_slice()[0].title, "  Walk dog  ");
    assert_eq!(app.form().policy(), TitlePolicy::KeepAsTyped);
}

#[test]
fn trim_policy_stores_trimmed_title() {
    let mut app = TodoApp::start_with_policy(MemoryStorage::new(), TitlePolicy::Trim).unwrap();

    app.submit_text("  Walk dog  ").unwrap().unwrap();
    assert_eq!(app.store().todos().as_slice()[0].title, "Walk dog");
}

#[test]
fn typed_draft_is_cleared_after_submit() {
    let mut app = TodoApp::start(MemoryStorage::new()).unwrap();

    app.type_draft("Pay rent");
    assert_eq!(app.view().draft, "Pay rent");
    app.submit().unwrap().unwrap();
    assert_eq!(app.view().draft, "");
    assert_eq!(app.store().len(), 1);
}
