use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    db::DbPool,
    dto::products::{CreateProductRequest, UpdateProductRequest},
    error::AppResult,
    models::{Product, ProductWithCategory},
    response::ApiResponse,
    services::product_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", axum::routing::get(list_products))
        .route("/", axum::routing::post(create_product))
        .route("/{id}", axum::routing::get(get_product))
        .route("/{id}", axum::routing::put(update_product))
        .route("/{id}", axum::routing::delete(delete_product))
        .route("/category/{category_id}", axum::routing::get(list_by_category))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List products", body = ApiResponse<Vec<Product>>)
    ),
    tag = "Productos"
)]
pub async fn list_products(State(pool): State<DbPool>) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    Ok(Json(product_service::list_products(&pool).await?))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product with its category", body = ApiResponse<ProductWithCategory>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Productos"
)]
pub async fn get_product(
    Path(id): Path<i64>,
    State(pool): State<DbPool>,
) -> AppResult<Json<ApiResponse<ProductWithCategory>>> {
    Ok(Json(product_service::get_product(&pool, id).await?))
}

#[utoipa::path(
    get,
    path = "/api/products/category/{category_id}",
    params(
        ("category_id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Products in the category, empty when unknown", body = ApiResponse<Vec<Product>>)
    ),
    tag = "Productos"
)]
pub async fn list_by_category(
    Path(category_id): Path<i64>,
    State(pool): State<DbPool>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    Ok(Json(
        product_service::list_by_category(&pool, category_id).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Create product", body = ApiResponse<Product>),
        (status = 400, description = "Missing fields or unknown category"),
    ),
    tag = "Productos"
)]
pub async fn create_product(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let response = product_service::create_product(&pool, payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ApiResponse<Product>),
        (status = 400, description = "No fields provided or unknown category"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Productos"
)]
pub async fn update_product(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProductRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    Ok(Json(
        product_service::update_product(&pool, id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Productos"
)]
pub async fn delete_product(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Product>>> {
    Ok(Json(product_service::delete_product(&pool, id).await?))
}
