use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::{
    dto::tasks::{CreateTaskRequest, UpdateTaskRequest},
    error::AppResult,
    models::Task,
    response::ApiResponse,
    services::task_service::TaskStore,
};

pub fn router() -> Router<TaskStore> {
    Router::new()
        .route("/", axum::routing::get(list_tasks))
        .route("/", axum::routing::post(create_task))
        .route("/{id}", axum::routing::get(get_task))
        .route("/{id}", axum::routing::put(update_task))
        .route("/{id}", axum::routing::delete(delete_task))
}

/// Welcome page of the task service.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service description")
    ),
    tag = "Tareas"
)]
pub async fn index() -> Json<Value> {
    Json(json!({
        "mensaje": "¡Bienvenido a la API de tareas!",
        "version": "1.0.0",
        "endpoints": [
            "GET /api/tasks - Ver todas las tareas",
            "GET /api/tasks/:id - Ver una tarea específica",
            "POST /api/tasks - Crear una nueva tarea",
            "PUT /api/tasks/:id - Actualizar una tarea",
            "DELETE /api/tasks/:id - Eliminar una tarea"
        ]
    }))
}

#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "List tasks", body = ApiResponse<Vec<Task>>)
    ),
    tag = "Tareas"
)]
pub async fn list_tasks(State(store): State<TaskStore>) -> Json<ApiResponse<Vec<Task>>> {
    Json(ApiResponse::list(store.list()))
}

#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    params(
        ("id" = u64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Get task", body = ApiResponse<Task>),
        (status = 404, description = "Task not found"),
    ),
    tag = "Tareas"
)]
pub async fn get_task(
    Path(id): Path<u64>,
    State(store): State<TaskStore>,
) -> AppResult<Json<ApiResponse<Task>>> {
    Ok(Json(ApiResponse::success(store.get(id)?)))
}

#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Create task", body = ApiResponse<Task>),
        (status = 400, description = "Missing title"),
    ),
    tag = "Tareas"
)]
pub async fn create_task(
    State(store): State<TaskStore>,
    Json(payload): Json<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Task>>)> {
    let task = store.create(payload)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Tarea creada exitosamente", task)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    params(
        ("id" = u64, Path, description = "Task ID")
    ),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Updated task", body = ApiResponse<Task>),
        (status = 404, description = "Task not found"),
    ),
    tag = "Tareas"
)]
pub async fn update_task(
    State(store): State<TaskStore>,
    Path(id): Path<u64>,
    Json(payload): Json<UpdateTaskRequest>,
) -> AppResult<Json<ApiResponse<Task>>> {
    let task = store.update(id, payload)?;
    Ok(Json(ApiResponse::with_message(
        "Tarea actualizada exitosamente",
        task,
    )))
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(
        ("id" = u64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Deleted task", body = ApiResponse<Task>),
        (status = 404, description = "Task not found"),
    ),
    tag = "Tareas"
)]
pub async fn delete_task(
    State(store): State<TaskStore>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<Task>>> {
    let task = store.delete(id)?;
    Ok(Json(ApiResponse::with_message(
        "Tarea eliminada exitosamente",
        task,
    )))
}
