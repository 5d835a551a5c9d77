use sqlx::{Executor, Sqlite};

use crate::{
    db::DbPool,
    dto::products::{CreateProductRequest, UpdateProductRequest},
    error::{AppError, AppResult},
    models::{Product, ProductWithCategory},
    response::ApiResponse,
    services::update::ProductPatch,
};

/// Whether a category row with this id exists. Missing rows are not an
/// error; store failures are.
pub async fn category_exists<'e, E>(executor: E, category_id: i64) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM categories WHERE id = ?")
        .bind(category_id)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}

pub async fn list_products(pool: &DbPool) -> AppResult<ApiResponse<Vec<Product>>> {
    let items = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id ASC")
        .fetch_all(pool)
        .await?;
    Ok(ApiResponse::list(items))
}

pub async fn get_product(pool: &DbPool, id: i64) -> AppResult<ApiResponse<ProductWithCategory>> {
    let product = sqlx::query_as::<_, ProductWithCategory>(
        r#"
        SELECT p.*, c.name AS category_name, c.description AS category_description
        FROM products p
        LEFT JOIN categories c ON p.category_id = c.id
        WHERE p.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Producto {id} no encontrado")))?;

    Ok(ApiResponse::success(product))
}

/// Products under one category. An unknown category id yields an empty
/// list, not an error.
pub async fn list_by_category(
    pool: &DbPool,
    category_id: i64,
) -> AppResult<ApiResponse<Vec<Product>>> {
    let items =
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE category_id = ? ORDER BY id ASC")
            .bind(category_id)
            .fetch_all(pool)
            .await?;
    Ok(ApiResponse::list(items))
}

pub async fn create_product(
    pool: &DbPool,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let name = match payload.name {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(AppError::MissingField(
                "nombre y precio son obligatorios".into(),
            ));
        }
    };
    let price = payload
        .price
        .ok_or_else(|| AppError::MissingField("nombre y precio son obligatorios".into()))?;
    let description = payload.description.unwrap_or_default();
    let stock = payload.stock.unwrap_or(0);

    // Existence check and insert share one transaction; the FK constraint
    // backs the check up.
    let mut tx = pool.begin().await?;
    if let Some(category_id) = payload.category_id {
        if !category_exists(&mut *tx, category_id).await? {
            return Err(AppError::InvalidReference);
        }
    }

    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (name, description, price, stock, category_id)
        VALUES (?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(price)
    .bind(stock)
    .bind(payload.category_id)
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;

    Ok(ApiResponse::with_message("Producto creado", product))
}

pub async fn update_product(
    pool: &DbPool,
    id: i64,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let mut tx = pool.begin().await?;

    let existing = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    if existing.is_none() {
        return Err(AppError::NotFound(format!("Producto {id} no encontrado")));
    }

    let patch = ProductPatch::from(payload);
    if let Some(category_id) = patch.new_category_reference() {
        if !category_exists(&mut *tx, category_id).await? {
            return Err(AppError::InvalidReference);
        }
    }

    let mut update = patch.into_update(id)?;
    update.build().execute(&mut *tx).await?;

    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ?")
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(ApiResponse::with_message("Producto actualizado", product))
}

pub async fn delete_product(pool: &DbPool, id: i64) -> AppResult<ApiResponse<Product>> {
    let mut tx = pool.begin().await?;

    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Producto {id} no encontrado")))?;

    sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(ApiResponse::with_message("Producto eliminado", product))
}
