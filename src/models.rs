use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "fecha_creacion")]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub stock: i64,
    #[serde(rename = "categoria_id")]
    pub category_id: Option<i64>,
    #[serde(rename = "fecha_creacion")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "fecha_actualizacion")]
    pub updated_at: NaiveDateTime,
}

/// Product row joined with its category's name and description. Both joined
/// members are null when the product has no category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProductWithCategory {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub product: Product,
    #[serde(rename = "categoria_nombre")]
    pub category_name: Option<String>,
    #[serde(rename = "categoria_descripcion")]
    pub category_description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Task {
    pub id: u64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "completada")]
    pub completed: bool,
}
