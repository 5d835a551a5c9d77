use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{categories as category_dto, products as product_dto, tasks as task_dto},
    models::{Category, Product, ProductWithCategory, Task},
    response::ApiResponse,
    routes::{categories, health, products, root, tasks},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        root::index,
        health::health_check,
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        products::list_products,
        products::get_product,
        products::list_by_category,
        products::create_product,
        products::update_product,
        products::delete_product,
    ),
    components(
        schemas(
            Category,
            Product,
            ProductWithCategory,
            category_dto::CreateCategoryRequest,
            category_dto::UpdateCategoryRequest,
            product_dto::CreateProductRequest,
            product_dto::UpdateProductRequest,
            health::HealthData,
            ApiResponse<Category>,
            ApiResponse<Product>,
            ApiResponse<ProductWithCategory>,
            ApiResponse<Vec<Category>>,
            ApiResponse<Vec<Product>>,
        )
    ),
    tags(
        (name = "Root", description = "Service description"),
        (name = "Health", description = "Health check endpoint"),
        (name = "Categorias", description = "Category endpoints"),
        (name = "Productos", description = "Product endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        tasks::index,
        tasks::list_tasks,
        tasks::get_task,
        tasks::create_task,
        tasks::update_task,
        tasks::delete_task,
    ),
    components(
        schemas(
            Task,
            task_dto::CreateTaskRequest,
            task_dto::UpdateTaskRequest,
            ApiResponse<Task>,
            ApiResponse<Vec<Task>>,
        )
    ),
    tags(
        (name = "Tareas", description = "Task endpoints"),
    )
)]
pub struct TasksDoc;

pub fn tasks_scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", TasksDoc::openapi())
}
