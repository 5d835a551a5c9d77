use axum::Json;
use serde_json::{Value, json};

/// Static description of the catalog API, served at `/`.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service description")
    ),
    tag = "Root"
)]
pub async fn index() -> Json<Value> {
    Json(json!({
        "mensaje": "¡Bienvenido a la API de la tienda!",
        "version": "2.0.0",
        "descripcion": "Gestión de categorias y productos sobre SQLite",
        "endpoints": {
            "categorias": [
                "GET /api/categories",
                "GET /api/categories/:id",
                "POST /api/categories",
                "PUT /api/categories/:id",
                "DELETE /api/categories/:id"
            ],
            "productos": [
                "GET /api/products",
                "GET /api/products/:id",
                "GET /api/products/category/:category_id",
                "POST /api/products",
                "PUT /api/products/:id",
                "DELETE /api/products/:id"
            ]
        },
        "ejemplos": {
            "Crear categoria": {
                "metodo": "POST",
                "url": "/api/categories",
                "body": {
                    "nombre": "Electrónica",
                    "descripcion": "Dispositivos y accesorios"
                }
            },
            "Crear producto": {
                "metodo": "POST",
                "url": "/api/products",
                "body": {
                    "nombre": "Teléfono X",
                    "descripcion": "Smartphone ejemplo",
                    "precio": 899.99,
                    "stock": 10,
                    "categoria_id": 1
                }
            }
        }
    }))
}
