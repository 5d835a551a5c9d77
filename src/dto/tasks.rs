use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "completada")]
    pub completed: Option<bool>,
}
