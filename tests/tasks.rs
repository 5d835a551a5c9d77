use tienda_api::{
    dto::tasks::{CreateTaskRequest, UpdateTaskRequest},
    error::AppError,
    services::task_service::TaskStore,
};

#[test]
fn seeded_store_lists_the_tutorial_tasks() {
    let store = TaskStore::with_seed_tasks();
    let tasks = store.list();
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0].id, 1);
    assert!(tasks[2].completed);
}

#[test]
fn create_requires_a_title() {
    let store = TaskStore::new();
    let result = store.create(CreateTaskRequest::default());
    assert!(matches!(result, Err(AppError::MissingField(_))));
    assert!(store.list().is_empty());
}

#[test]
fn create_defaults_description_and_completed() {
    let store = TaskStore::new();
    let task = store
        .create(CreateTaskRequest {
            title: Some("Aprender Rust".into()),
            description: None,
        })
        .expect("created task");
    assert_eq!(task.id, 1);
    assert_eq!(task.description, "");
    assert!(!task.completed);
}

#[test]
fn update_applies_only_supplied_fields() {
    let store = TaskStore::with_seed_tasks();
    let updated = store
        .update(
            1,
            UpdateTaskRequest {
                completed: Some(true),
                ..UpdateTaskRequest::default()
            },
        )
        .expect("updated task");
    assert_eq!(updated.title, "Aprender Node.js");
    assert!(updated.completed);
}

#[test]
fn deleted_ids_are_never_reused() {
    let store = TaskStore::with_seed_tasks();
    let task = store
        .create(CreateTaskRequest {
            title: Some("Cuarta".into()),
            description: None,
        })
        .expect("created task");
    assert_eq!(task.id, 4);

    store.delete(task.id).expect("deleted task");

    let next = store
        .create(CreateTaskRequest {
            title: Some("Quinta".into()),
            description: None,
        })
        .expect("created task");
    assert_eq!(next.id, 5);
}

#[test]
fn missing_ids_yield_not_found() {
    let store = TaskStore::new();
    assert!(matches!(store.get(9), Err(AppError::NotFound(_))));
    assert!(matches!(
        store.update(9, UpdateTaskRequest::default()),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(store.delete(9), Err(AppError::NotFound(_))));
}
