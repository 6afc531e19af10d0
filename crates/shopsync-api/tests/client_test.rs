#![allow(clippy::unwrap_used)]
// Integration tests for `CatalogClient` using wiremock.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopsync_api::{CatalogClient, Error};
use shopsync_api::models::{
    ManufacturerUpdate, NewManufacturer, NewProduct, OptionUpdate, ProductUpdate,
};

const ACCESS_KEY: &str = "test-access-key";

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CatalogClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = CatalogClient::with_client(reqwest::Client::new(), base_url, Some(ACCESS_KEY));
    (server, client)
}

fn product_summary(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "@controls": { "self": { "href": format!("/api/product/{id}") } }
    })
}

fn product_detail(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "manufacturer_id": 1,
        "manufacturer_name": "Ray Ban",
        "sku": format!("SKU-{id}"),
        "quantity": 1000,
        "image": "/image/products/p.jpg",
        "price": 39.55,
        "width": 3.0,
        "date_added": "2023-02-27 02:14:38",
        "options": [
            { "option_id": 1, "option_name": "Black", "option_image": "/image/options/black.jpg" }
        ]
    })
}

// ── Product tests ───────────────────────────────────────────────────

#[tokio::test]
async fn list_products_resolves_details_in_summary_order() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/product/"))
        .and(header("access-key", ACCESS_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [
                product_summary(1, "Rage 4025"),
                product_summary(2, "RB3357"),
                product_summary(3, "GG2598"),
            ]
        })))
        .mount(&server)
        .await;

    // The first detail responds last; order must still follow the summary list.
    Mock::given(method("GET"))
        .and(path("/api/product/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(product_detail(1, "Rage 4025"))
                .set_delay(Duration::from_millis(150)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/product/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_detail(2, "RB3357")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/product/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_detail(3, "GG2598")))
        .mount(&server)
        .await;

    let products = client.list_products().await.unwrap();

    let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(products[0].manufacturer_name.as_deref(), Some("Ray Ban"));
    assert_eq!(products[0].options.len(), 1);
    assert_eq!(products[0].options[0].name.as_deref(), Some("Black"));
}

#[tokio::test]
async fn list_products_fails_when_summary_has_no_self_link() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/product/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [ { "id": 7, "name": "Orphan" } ]
        })))
        .mount(&server)
        .await;

    let result = client.list_products().await;

    assert!(
        matches!(result, Err(Error::MissingDetailLink { entity: "product", .. })),
        "expected MissingDetailLink, got: {result:?}"
    );
}

#[tokio::test]
async fn list_products_fails_when_a_detail_fetch_fails() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/product/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [ product_summary(1, "Rage 4025"), product_summary(2, "RB3357") ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/product/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_detail(1, "Rage 4025")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/product/2"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Product_item not found"))
        .mount(&server)
        .await;

    let result = client.list_products().await;

    assert!(result.is_err(), "partially resolved collections must not be returned");
}

#[tokio::test]
async fn create_product_posts_contract_body() {
    let (server, client) = setup().await;

    let expected = json!({
        "name": "Hijinx OO9021",
        "description": "Oakley Hijinx Sunglass",
        "sku": "OAKXHIJINX006BF1",
        "manufacturerId": 3,
        "quantity": 1000,
        "image": "/image/products/hijinx.jpg",
        "price": 39.55,
        "width": 3.0,
        "date_added": "2023-02-27T02:14:38+00:00",
        "selectedOptions": [12]
    });

    Mock::given(method("POST"))
        .and(path("/api/product/"))
        .and(header("access-key", ACCESS_KEY))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(201).set_body_string("Product Added Successfully"))
        .expect(1)
        .mount(&server)
        .await;

    let new = NewProduct {
        name: "Hijinx OO9021".into(),
        description: "Oakley Hijinx Sunglass".into(),
        sku: "OAKXHIJINX006BF1".into(),
        manufacturer_id: 3,
        quantity: 1000,
        image: "/image/products/hijinx.jpg".into(),
        price: "39.55".parse().unwrap(),
        width: 3.0,
        date_added: "2023-02-27T02:14:38+00:00".into(),
        selected_options: vec![12],
    };

    client.create_product(&new).await.unwrap();
}

#[tokio::test]
async fn update_product_uses_canonical_field_names() {
    let (server, client) = setup().await;

    let expected = json!({
        "name": "RB3357",
        "description": "Ray Ban RB3357 Sunglass",
        "sku": "RBX335700000006B",
        "quantity": 900,
        "image": "/image/products/RB3357.jpg",
        "price": 44.0,
        "width": 3.0
    });

    Mock::given(method("PUT"))
        .and(path("/api/product/2"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_string("Product Updated Successfully"))
        .expect(1)
        .mount(&server)
        .await;

    let update = ProductUpdate {
        name: "RB3357".into(),
        description: "Ray Ban RB3357 Sunglass".into(),
        sku: "RBX335700000006B".into(),
        quantity: 900,
        image: "/image/products/RB3357.jpg".into(),
        price: "44.0".parse().unwrap(),
        width: 3.0,
    };

    client.update_product(2, &update).await.unwrap();
}

#[tokio::test]
async fn delete_product_hits_item_route() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/product/4"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Product Deleted Successfully"))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_product(4).await.unwrap();
}

// ── Manufacturer tests ──────────────────────────────────────────────

#[tokio::test]
async fn list_manufacturers_unwraps_nested_detail_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/manufacturer/"))
        .and(header("access-key", ACCESS_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "name": "Ray Ban",
                    "@controls": { "storage:manufacturer": { "href": "/api/manufacturer/1" } }
                },
                {
                    "name": "Oakley",
                    "@controls": { "storage:manufacturer": { "href": "/api/manufacturer/3" } }
                }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/manufacturer/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "manufacturer": [{
                "id": 1,
                "name": "Ray Ban",
                "image": "/image/ray-ban.jpg",
                "description": "Ray Ban Sunglass Lenses",
                "products": []
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/manufacturer/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "manufacturer": [{
                "id": 3,
                "name": "Oakley",
                "image": "/image/oakley.jpg",
                "description": "Oakley Sunglass Lenses"
            }]
        })))
        .mount(&server)
        .await;

    let manufacturers = client.list_manufacturers().await.unwrap();

    assert_eq!(manufacturers.len(), 2);
    assert_eq!(manufacturers[0].id, 1);
    assert_eq!(manufacturers[0].image.as_deref(), Some("/image/ray-ban.jpg"));
    assert_eq!(manufacturers[1].name.as_deref(), Some("Oakley"));
}

#[tokio::test]
async fn empty_manufacturer_envelope_is_an_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/manufacturer/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "manufacturer": [] })))
        .mount(&server)
        .await;

    let result = client.get_manufacturer(9).await;

    assert!(
        matches!(result, Err(Error::EmptyDetail { entity: "manufacturer" })),
        "expected EmptyDetail, got: {result:?}"
    );
}

#[tokio::test]
async fn create_manufacturer_posts_contract_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/manufacturer/"))
        .and(body_json(json!({
            "name": "Acme",
            "image": "http://x/a.png",
            "description": "Tools"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_string("Manufacturer Added Successfully"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let new = NewManufacturer {
        name: "Acme".into(),
        image: "http://x/a.png".into(),
        description: "Tools".into(),
    };

    client.create_manufacturer(&new).await.unwrap();
}

#[tokio::test]
async fn update_manufacturer_uses_canonical_field_names() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/manufacturer/1"))
        .and(body_json(json!({
            "name": "Ray-Ban",
            "description": "Updated lenses",
            "image": "/image/ray-ban-2.jpg"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("Manufacturer Updated Successfully"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let update = ManufacturerUpdate {
        name: "Ray-Ban".into(),
        description: "Updated lenses".into(),
        image: "/image/ray-ban-2.jpg".into(),
    };

    client.update_manufacturer(1, &update).await.unwrap();
}

// ── Option tests ────────────────────────────────────────────────────

#[tokio::test]
async fn list_options_is_flat() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/option/"))
        .and(header("access-key", ACCESS_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "options": [
                { "id": 1, "name": "Black", "image": "/image/options/black.jpg" },
                { "id": 2, "name": "Brown", "image": "/image/options/brown.jpg" }
            ]
        })))
        .mount(&server)
        .await;

    let options = client.list_options().await.unwrap();

    assert_eq!(options.len(), 2);
    assert_eq!(options[0].name.as_deref(), Some("Black"));
}

#[tokio::test]
async fn update_option_uses_canonical_field_names() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/option/2"))
        .and(body_json(json!({ "name": "Brown Gradient", "image": "/image/options/bg.jpg" })))
        .respond_with(ResponseTemplate::new(200).set_body_string("Option Updated Successfully"))
        .expect(1)
        .mount(&server)
        .await;

    let update = OptionUpdate {
        name: "Brown Gradient".into(),
        image: "/image/options/bg.jpg".into(),
    };

    client.update_option(2, &update).await.unwrap();
}

// ── Order tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn list_orders_sends_no_access_key_header() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/order/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [{
                "firstname": "Roshan",
                "email": "roshan@gmail.com",
                "telephone": "0123654789",
                "payment_address_1": "yliopistokatu",
                "payment_city": "Oulu",
                "payment_postcode": "90570",
                "payment_country": "Finland",
                "total": 39.55,
                "date_added": "2019-02-27T02:14:38+00:00"
            }]
        })))
        .mount(&server)
        .await;

    let orders = client.list_orders().await.unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].payment_city.as_deref(), Some("Oulu"));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0].headers.contains_key("access-key"),
        "order route must be called without the access-key header"
    );
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn forbidden_maps_to_access_denied() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/option/"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let result = client.list_options().await;

    assert!(
        matches!(result, Err(Error::AccessDenied { status: 403 })),
        "expected AccessDenied, got: {result:?}"
    );
}

#[tokio::test]
async fn server_error_maps_to_api_error_with_body_preview() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/product/"))
        .respond_with(ResponseTemplate::new(400).set_body_string("SKU already exists"))
        .mount(&server)
        .await;

    let new = NewProduct {
        name: "Dup".into(),
        description: "d".into(),
        sku: "DUP".into(),
        manufacturer_id: 1,
        quantity: 1,
        image: "/i.jpg".into(),
        price: "1.0".parse().unwrap(),
        width: 1.0,
        date_added: "2023-02-27T02:14:38+00:00".into(),
        selected_options: vec![],
    };
    let result = client.create_product(&new).await;

    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 400);
            assert!(message.contains("SKU already exists"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn not_found_helper() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/product/999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Product_item not found"))
        .mount(&server)
        .await;

    let err = client.get_product(999).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn garbage_body_maps_to_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/option/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = client.list_options().await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization, got: {result:?}"
    );
}
