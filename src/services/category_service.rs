use crate::{
    db::DbPool,
    dto::categories::{CreateCategoryRequest, UpdateCategoryRequest},
    error::{AppError, AppResult},
    models::Category,
    response::ApiResponse,
    services::update::CategoryPatch,
};

pub async fn list_categories(pool: &DbPool) -> AppResult<ApiResponse<Vec<Category>>> {
    let items = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY id ASC")
        .fetch_all(pool)
        .await?;
    Ok(ApiResponse::list(items))
}

pub async fn get_category(pool: &DbPool, id: i64) -> AppResult<ApiResponse<Category>> {
    let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Categoria {id} no encontrada")))?;
    Ok(ApiResponse::success(category))
}

pub async fn create_category(
    pool: &DbPool,
    payload: CreateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    let name = match payload.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(AppError::MissingField("El nombre es obligatorio".into())),
    };
    let description = payload.description.unwrap_or_default();

    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name, description) VALUES (?, ?) RETURNING *",
    )
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await?;

    Ok(ApiResponse::with_message("Categoria creada", category))
}

pub async fn update_category(
    pool: &DbPool,
    id: i64,
    payload: UpdateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    let mut tx = pool.begin().await?;

    let existing = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    if existing.is_none() {
        return Err(AppError::NotFound(format!("Categoria {id} no encontrada")));
    }

    let mut update = CategoryPatch::from(payload).into_update(id)?;
    update.build().execute(&mut *tx).await?;

    let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ?")
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(ApiResponse::with_message("Categoria actualizada", category))
}

pub async fn delete_category(pool: &DbPool, id: i64) -> AppResult<ApiResponse<Category>> {
    let mut tx = pool.begin().await?;

    let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Categoria {id} no encontrada")))?;

    // Fast-path check; the FK constraint still blocks a concurrent insert.
    let (dependents,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM products WHERE category_id = ?")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
    if dependents > 0 {
        return Err(AppError::HasDependents);
    }

    sqlx::query("DELETE FROM categories WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(ApiResponse::with_message("Categoria eliminada", category))
}
