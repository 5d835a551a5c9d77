use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}
