use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    db::DbPool,
    dto::categories::{CreateCategoryRequest, UpdateCategoryRequest},
    error::AppResult,
    models::Category,
    response::ApiResponse,
    services::category_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", axum::routing::get(list_categories))
        .route("/", axum::routing::post(create_category))
        .route("/{id}", axum::routing::get(get_category))
        .route("/{id}", axum::routing::put(update_category))
        .route("/{id}", axum::routing::delete(delete_category))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List categories", body = ApiResponse<Vec<Category>>)
    ),
    tag = "Categorias"
)]
pub async fn list_categories(
    State(pool): State<DbPool>,
) -> AppResult<Json<ApiResponse<Vec<Category>>>> {
    Ok(Json(category_service::list_categories(&pool).await?))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Get category", body = ApiResponse<Category>),
        (status = 404, description = "Category not found"),
    ),
    tag = "Categorias"
)]
pub async fn get_category(
    Path(id): Path<i64>,
    State(pool): State<DbPool>,
) -> AppResult<Json<ApiResponse<Category>>> {
    Ok(Json(category_service::get_category(&pool, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Create category", body = ApiResponse<Category>),
        (status = 400, description = "Missing name"),
    ),
    tag = "Categorias"
)]
pub async fn create_category(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Category>>)> {
    let response = category_service::create_category(&pool, payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Updated category", body = ApiResponse<Category>),
        (status = 400, description = "No fields provided"),
        (status = 404, description = "Category not found"),
    ),
    tag = "Categorias"
)]
pub async fn update_category(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> AppResult<Json<ApiResponse<Category>>> {
    Ok(Json(
        category_service::update_category(&pool, id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Deleted category", body = ApiResponse<Category>),
        (status = 400, description = "Category has products"),
        (status = 404, description = "Category not found"),
    ),
    tag = "Categorias"
)]
pub async fn delete_category(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Category>>> {
    Ok(Json(category_service::delete_category(&pool, id).await?))
}
