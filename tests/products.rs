use tienda_api::{
    dto::{
        categories::CreateCategoryRequest,
        products::{CreateProductRequest, UpdateProductRequest},
    },
    error::AppError,
    services::{category_service, product_service},
};

mod common;

async fn seed_category(pool: &tienda_api::db::DbPool, name: &str) -> anyhow::Result<i64> {
    let category = category_service::create_category(
        pool,
        CreateCategoryRequest {
            name: Some(name.into()),
            description: None,
        },
    )
    .await?
    .data
    .expect("seeded category");
    Ok(category.id)
}

#[tokio::test]
async fn create_requires_name_and_price() -> anyhow::Result<()> {
    let pool = common::setup_pool().await?;

    let nameless = product_service::create_product(
        &pool,
        CreateProductRequest {
            price: Some(10.0),
            ..CreateProductRequest::default()
        },
    )
    .await;
    assert!(matches!(nameless, Err(AppError::MissingField(_))));

    let priceless = product_service::create_product(
        &pool,
        CreateProductRequest {
            name: Some("Teléfono".into()),
            ..CreateProductRequest::default()
        },
    )
    .await;
    assert!(matches!(priceless, Err(AppError::MissingField(_))));

    // A price of zero is a present value, not an absent one.
    let free = product_service::create_product(
        &pool,
        CreateProductRequest {
            name: Some("Muestra".into()),
            price: Some(0.0),
            ..CreateProductRequest::default()
        },
    )
    .await?
    .data
    .expect("created product");
    assert_eq!(free.price, 0.0);
    Ok(())
}

#[tokio::test]
async fn create_defaults_description_and_stock() -> anyhow::Result<()> {
    let pool = common::setup_pool().await?;

    let product = product_service::create_product(
        &pool,
        CreateProductRequest {
            name: Some("Lámpara".into()),
            price: Some(25.5),
            ..CreateProductRequest::default()
        },
    )
    .await?
    .data
    .expect("created product");

    assert_eq!(product.description, "");
    assert_eq!(product.stock, 0);
    assert_eq!(product.category_id, None);
    Ok(())
}

#[tokio::test]
async fn create_with_unknown_category_inserts_nothing() -> anyhow::Result<()> {
    let pool = common::setup_pool().await?;

    let result = product_service::create_product(
        &pool,
        CreateProductRequest {
            name: Some("Fantasma".into()),
            price: Some(5.0),
            category_id: Some(42),
            ..CreateProductRequest::default()
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::InvalidReference)));

    let listed = product_service::list_products(&pool).await?;
    assert_eq!(listed.count, Some(0));
    Ok(())
}

#[tokio::test]
async fn get_joins_the_category_fields() -> anyhow::Result<()> {
    let pool = common::setup_pool().await?;
    let category_id = seed_category(&pool, "Electrónica").await?;

    let with_category = product_service::create_product(
        &pool,
        CreateProductRequest {
            name: Some("Teléfono X".into()),
            price: Some(899.99),
            category_id: Some(category_id),
            ..CreateProductRequest::default()
        },
    )
    .await?
    .data
    .expect("created product");

    let fetched = product_service::get_product(&pool, with_category.id)
        .await?
        .data
        .expect("joined product");
    assert_eq!(fetched.category_name.as_deref(), Some("Electrónica"));
    assert_eq!(fetched.category_description.as_deref(), Some(""));

    let without_category = product_service::create_product(
        &pool,
        CreateProductRequest {
            name: Some("Suelto".into()),
            price: Some(1.0),
            ..CreateProductRequest::default()
        },
    )
    .await?
    .data
    .expect("created product");

    let fetched = product_service::get_product(&pool, without_category.id)
        .await?
        .data
        .expect("joined product");
    assert_eq!(fetched.category_name, None);
    assert_eq!(fetched.category_description, None);
    Ok(())
}

#[tokio::test]
async fn list_by_category_never_fails_on_unknown_ids() -> anyhow::Result<()> {
    let pool = common::setup_pool().await?;

    let listed = product_service::list_by_category(&pool, 12345).await?;
    assert_eq!(listed.count, Some(0));
    assert_eq!(listed.data.expect("rows").len(), 0);
    Ok(())
}

#[tokio::test]
async fn update_with_null_category_clears_the_reference() -> anyhow::Result<()> {
    let pool = common::setup_pool().await?;
    let category_id = seed_category(&pool, "Hogar").await?;

    let product = product_service::create_product(
        &pool,
        CreateProductRequest {
            name: Some("Silla".into()),
            price: Some(49.9),
            category_id: Some(category_id),
            ..CreateProductRequest::default()
        },
    )
    .await?
    .data
    .expect("created product");
    assert_eq!(product.category_id, Some(category_id));

    let cleared = product_service::update_product(
        &pool,
        product.id,
        UpdateProductRequest {
            category_id: Some(None),
            ..UpdateProductRequest::default()
        },
    )
    .await?
    .data
    .expect("updated product");
    assert_eq!(cleared.category_id, None);
    Ok(())
}

#[tokio::test]
async fn update_with_unknown_category_changes_nothing() -> anyhow::Result<()> {
    let pool = common::setup_pool().await?;

    let product = product_service::create_product(
        &pool,
        CreateProductRequest {
            name: Some("Mesa".into()),
            price: Some(80.0),
            ..CreateProductRequest::default()
        },
    )
    .await?
    .data
    .expect("created product");

    let result = product_service::update_product(
        &pool,
        product.id,
        UpdateProductRequest {
            price: Some(99.0),
            category_id: Some(Some(42)),
            ..UpdateProductRequest::default()
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::InvalidReference)));

    let fetched = product_service::get_product(&pool, product.id)
        .await?
        .data
        .expect("product unchanged");
    assert_eq!(fetched.product.price, 80.0);
    assert_eq!(fetched.product.category_id, None);
    Ok(())
}

#[tokio::test]
async fn update_with_no_fields_is_rejected() -> anyhow::Result<()> {
    let pool = common::setup_pool().await?;

    let product = product_service::create_product(
        &pool,
        CreateProductRequest {
            name: Some("Estante".into()),
            price: Some(30.0),
            ..CreateProductRequest::default()
        },
    )
    .await?
    .data
    .expect("created product");

    let result =
        product_service::update_product(&pool, product.id, UpdateProductRequest::default()).await;
    assert!(matches!(result, Err(AppError::NoFieldsProvided)));
    Ok(())
}

#[tokio::test]
async fn missing_ids_yield_not_found_everywhere() -> anyhow::Result<()> {
    let pool = common::setup_pool().await?;

    let get = product_service::get_product(&pool, 999).await;
    assert!(matches!(get, Err(AppError::NotFound(_))));

    let update = product_service::update_product(
        &pool,
        999,
        UpdateProductRequest {
            price: Some(1.0),
            ..UpdateProductRequest::default()
        },
    )
    .await;
    assert!(matches!(update, Err(AppError::NotFound(_))));

    let delete = product_service::delete_product(&pool, 999).await;
    assert!(matches!(delete, Err(AppError::NotFound(_))));
    Ok(())
}

#[tokio::test]
async fn delete_returns_the_prior_snapshot() -> anyhow::Result<()> {
    let pool = common::setup_pool().await?;

    let product = product_service::create_product(
        &pool,
        CreateProductRequest {
            name: Some("Descartable".into()),
            price: Some(2.5),
            stock: Some(7),
            ..CreateProductRequest::default()
        },
    )
    .await?
    .data
    .expect("created product");

    let deleted = product_service::delete_product(&pool, product.id).await?;
    assert_eq!(deleted.message.as_deref(), Some("Producto eliminado"));
    let snapshot = deleted.data.expect("deleted snapshot");
    assert_eq!(snapshot.id, product.id);
    assert_eq!(snapshot.stock, 7);

    let gone = product_service::get_product(&pool, product.id).await;
    assert!(matches!(gone, Err(AppError::NotFound(_))));
    Ok(())
}
