use std::sync::{Arc, PoisonError, RwLock};

use crate::{
    dto::tasks::{CreateTaskRequest, UpdateTaskRequest},
    error::{AppError, AppResult},
    models::Task,
};

struct TaskState {
    tasks: Vec<Task>,
    next_id: u64,
}

/// In-memory task repository. Constructed once at startup and handed to the
/// router as shared state; ids are monotonic so a delete never frees an id
/// for reuse.
#[derive(Clone)]
pub struct TaskStore {
    inner: Arc<RwLock<TaskState>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TaskState {
                tasks: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Store preloaded with the tutorial tasks the original ships with.
    pub fn with_seed_tasks() -> Self {
        let store = Self::new();
        {
            let mut state = store.write();
            for (title, description, completed) in [
                ("Aprender Node.js", "Completar tutorial básico", false),
                ("Crear una API REST", "Hacer un CRUD completo", false),
                ("Aprender SQL", "Estudiar bases de datos relacionales", true),
            ] {
                let id = state.next_id;
                state.next_id += 1;
                state.tasks.push(Task {
                    id,
                    title: title.to_string(),
                    description: description.to_string(),
                    completed,
                });
            }
        }
        store
    }

    pub fn list(&self) -> Vec<Task> {
        self.read().tasks.clone()
    }

    pub fn get(&self, id: u64) -> AppResult<Task> {
        self.read()
            .tasks
            .iter()
            .find(|task| task.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    pub fn create(&self, payload: CreateTaskRequest) -> AppResult<Task> {
        let title = match payload.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(AppError::MissingField("El título es obligatorio".into())),
        };

        let mut state = self.write();
        let task = Task {
            id: state.next_id,
            title,
            description: payload.description.unwrap_or_default(),
            completed: false,
        };
        state.next_id += 1;
        state.tasks.push(task.clone());
        Ok(task)
    }

    /// Apply only the supplied fields, leaving the rest untouched.
    pub fn update(&self, id: u64, payload: UpdateTaskRequest) -> AppResult<Task> {
        let mut state = self.write();
        let task = state
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| not_found(id))?;

        if let Some(title) = payload.title {
            task.title = title;
        }
        if let Some(description) = payload.description {
            task.description = description;
        }
        if let Some(completed) = payload.completed {
            task.completed = completed;
        }
        Ok(task.clone())
    }

    pub fn delete(&self, id: u64) -> AppResult<Task> {
        let mut state = self.write();
        let index = state
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| not_found(id))?;
        Ok(state.tasks.remove(index))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, TaskState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, TaskState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: u64) -> AppError {
    AppError::NotFound(format!("No se encontró ninguna tarea con el ID {id}"))
}
