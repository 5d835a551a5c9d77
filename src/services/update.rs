//! Typed patches for partial updates. Each patch enumerates the mutable
//! columns of its table; the rendered SQL only ever contains column names
//! from these fixed lists, never text taken from the request.

use sqlx::{QueryBuilder, Sqlite};

use crate::dto::categories::UpdateCategoryRequest;
use crate::dto::products::UpdateProductRequest;
use crate::error::{AppError, AppResult};

#[derive(Debug, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateCategoryRequest> for CategoryPatch {
    fn from(payload: UpdateCategoryRequest) -> Self {
        Self {
            name: payload.name,
            description: payload.description,
        }
    }
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    /// Render a single `UPDATE categories SET … WHERE id = ?` statement, or
    /// fail when no field was supplied.
    pub fn into_update(self, id: i64) -> AppResult<QueryBuilder<'static, Sqlite>> {
        if self.is_empty() {
            return Err(AppError::NoFieldsProvided);
        }

        let mut builder = QueryBuilder::new("UPDATE categories SET ");
        let mut assignments = builder.separated(", ");
        if let Some(name) = self.name {
            assignments.push("name = ");
            assignments.push_bind_unseparated(name);
        }
        if let Some(description) = self.description {
            assignments.push("description = ");
            assignments.push_bind_unseparated(description);
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id);
        Ok(builder)
    }
}

#[derive(Debug, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    /// `Some(None)` clears the category reference.
    pub category_id: Option<Option<i64>>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(payload: UpdateProductRequest) -> Self {
        Self {
            name: payload.name,
            description: payload.description,
            price: payload.price,
            stock: payload.stock,
            category_id: payload.category_id,
        }
    }
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.category_id.is_none()
    }

    /// Category id this patch wants the product to point at, if any.
    /// Clearing the reference (`Some(None)`) needs no existence check.
    pub fn new_category_reference(&self) -> Option<i64> {
        self.category_id.flatten()
    }

    /// Render a single `UPDATE products SET … WHERE id = ?` statement. The
    /// `updated_at` column is refreshed on every update.
    pub fn into_update(self, id: i64) -> AppResult<QueryBuilder<'static, Sqlite>> {
        if self.is_empty() {
            return Err(AppError::NoFieldsProvided);
        }

        let mut builder = QueryBuilder::new("UPDATE products SET ");
        let mut assignments = builder.separated(", ");
        if let Some(name) = self.name {
            assignments.push("name = ");
            assignments.push_bind_unseparated(name);
        }
        if let Some(description) = self.description {
            assignments.push("description = ");
            assignments.push_bind_unseparated(description);
        }
        if let Some(price) = self.price {
            assignments.push("price = ");
            assignments.push_bind_unseparated(price);
        }
        if let Some(stock) = self.stock {
            assignments.push("stock = ");
            assignments.push_bind_unseparated(stock);
        }
        if let Some(category_id) = self.category_id {
            assignments.push("category_id = ");
            assignments.push_bind_unseparated(category_id);
        }
        assignments.push("updated_at = CURRENT_TIMESTAMP");
        builder.push(" WHERE id = ");
        builder.push_bind(id);
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryPatch, ProductPatch};
    use crate::error::AppError;

    #[test]
    fn empty_category_patch_is_rejected() {
        let result = CategoryPatch::default().into_update(1);
        assert!(matches!(result, Err(AppError::NoFieldsProvided)));
    }

    #[test]
    fn empty_product_patch_is_rejected() {
        let result = ProductPatch::default().into_update(1);
        assert!(matches!(result, Err(AppError::NoFieldsProvided)));
    }

    #[test]
    fn category_patch_renders_only_supplied_columns() {
        let patch = CategoryPatch {
            name: Some("Hogar".into()),
            description: None,
        };
        let builder = patch.into_update(3).unwrap();
        assert_eq!(builder.sql(), "UPDATE categories SET name = ? WHERE id = ?");
    }

    #[test]
    fn product_patch_always_refreshes_updated_at() {
        let patch = ProductPatch {
            price: Some(10.5),
            ..ProductPatch::default()
        };
        let builder = patch.into_update(9).unwrap();
        assert_eq!(
            builder.sql(),
            "UPDATE products SET price = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?"
        );
    }

    #[test]
    fn clearing_category_skips_existence_check_but_binds_null() {
        let patch = ProductPatch {
            category_id: Some(None),
            ..ProductPatch::default()
        };
        assert_eq!(patch.new_category_reference(), None);
        let builder = patch.into_update(2).unwrap();
        assert_eq!(
            builder.sql(),
            "UPDATE products SET category_id = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?"
        );
    }
}
