use serde_json::json;
use tienda_api::{
    dto::{categories::CreateCategoryRequest, products::CreateProductRequest},
    error::AppError,
    services::{category_service, product_service},
};

mod common;

// Full lifecycle: category -> product referencing it -> delete blocked ->
// product removed -> delete allowed.
#[tokio::test]
async fn category_delete_is_blocked_while_products_reference_it() -> anyhow::Result<()> {
    let pool = common::setup_pool().await?;

    let created = category_service::create_category(
        &pool,
        CreateCategoryRequest {
            name: Some("X".into()),
            description: None,
        },
    )
    .await?;

    // Envelope and entity keys on the wire are the Spanish ones.
    let envelope = serde_json::to_value(&created)?;
    assert_eq!(envelope["success"], json!(true));
    assert_eq!(envelope["mensaje"], json!("Categoria creada"));
    assert_eq!(envelope["datos"]["nombre"], json!("X"));
    assert_eq!(envelope["datos"]["descripcion"], json!(""));
    assert!(envelope["datos"]["fecha_creacion"].is_string());

    let category = created.data.expect("created category");
    assert!(category.id > 0);

    let product = product_service::create_product(
        &pool,
        CreateProductRequest {
            name: Some("Y".into()),
            price: Some(10.0),
            category_id: Some(category.id),
            ..CreateProductRequest::default()
        },
    )
    .await?
    .data
    .expect("created product");

    let product_wire = serde_json::to_value(&product)?;
    assert_eq!(product_wire["precio"], json!(10.0));
    assert_eq!(product_wire["categoria_id"], json!(category.id));

    let blocked = category_service::delete_category(&pool, category.id).await;
    assert!(matches!(blocked, Err(AppError::HasDependents)));

    product_service::delete_product(&pool, product.id).await?;

    let deleted = category_service::delete_category(&pool, category.id)
        .await?
        .data
        .expect("deleted snapshot");
    assert_eq!(deleted.id, category.id);
    assert_eq!(deleted.name, "X");
    Ok(())
}

#[tokio::test]
async fn products_reappear_under_their_category_listing() -> anyhow::Result<()> {
    let pool = common::setup_pool().await?;

    let category = category_service::create_category(
        &pool,
        CreateCategoryRequest {
            name: Some("Electrónica".into()),
            description: None,
        },
    )
    .await?
    .data
    .expect("created category");

    for name in ["Radio", "Parlante"] {
        product_service::create_product(
            &pool,
            CreateProductRequest {
                name: Some(name.into()),
                price: Some(15.0),
                category_id: Some(category.id),
                ..CreateProductRequest::default()
            },
        )
        .await?;
    }

    let listed = product_service::list_by_category(&pool, category.id).await?;
    assert_eq!(listed.count, Some(2));
    let names: Vec<String> = listed
        .data
        .expect("rows")
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Radio".to_string(), "Parlante".to_string()]);
    Ok(())
}
