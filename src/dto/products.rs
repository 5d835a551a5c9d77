use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "precio")]
    pub price: Option<f64>,
    pub stock: Option<i64>,
    #[serde(rename = "categoria_id")]
    pub category_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "precio")]
    pub price: Option<f64>,
    pub stock: Option<i64>,
    /// `categoria_id: null` clears the reference; an absent key leaves it
    /// untouched.
    #[serde(
        rename = "categoria_id",
        default,
        deserialize_with = "crate::dto::double_option"
    )]
    #[schema(value_type = Option<i64>)]
    pub category_id: Option<Option<i64>>,
}
