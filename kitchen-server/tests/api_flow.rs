//! End-to-end flow through the HTTP router on an in-memory database

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use kitchen_server::db::DbService;
use kitchen_server::{Config, ServerState, build_app};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> Router {
    let db = DbService::new_in_memory().await.unwrap();
    build_app(ServerState::with_db(Config::in_memory(), db))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(v) => Body::from(serde_json::to_vec(&v).unwrap()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn decimal(v: &Value) -> Decimal {
    serde_json::from_value(v.clone()).unwrap()
}

fn id(v: &Value) -> i64 {
    v["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_catalog_flow() {
    let app = app().await;

    let (status, group) = send(&app, "POST", "/api/menu-groups", Some(json!({ "name": "두마리메뉴" }))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, product) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "후라이드", "price": 16000 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(product["name"], "후라이드");
    assert_eq!(decimal(&product["price"]), Decimal::from(16000));

    let (status, err) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "음수", "price": -1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], 2);

    let menu_body = |price: i64| {
        json!({
            "name": "후라이드+후라이드",
            "price": price,
            "menuGroupId": id(&group),
            "menuProducts": [{ "productId": id(&product), "quantity": 2 }]
        })
    };

    let (status, _) = send(&app, "POST", "/api/menus", Some(menu_body(32001))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, menu) = send(&app, "POST", "/api/menus", Some(menu_body(32000))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(menu["menuProducts"][0]["menuId"], id(&menu));

    let (status, menus) = send(&app, "GET", "/api/menus", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(menus.as_array().unwrap().len(), 1);

    let (_, products) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(products.as_array().unwrap().len(), 1);
    let (_, groups) = send(&app, "GET", "/api/menu-groups", None).await;
    assert_eq!(groups.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_table_group_and_order_flow() {
    let app = app().await;

    // catalog
    let (_, group) = send(&app, "POST", "/api/menu-groups", Some(json!({ "name": "한마리메뉴" }))).await;
    let (_, product) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "양념치킨", "price": 17000 })),
    )
    .await;
    let (_, menu) = send(
        &app,
        "POST",
        "/api/menus",
        Some(json!({
            "name": "양념치킨",
            "price": 17000,
            "menuGroupId": id(&group),
            "menuProducts": [{ "productId": id(&product), "quantity": 1 }]
        })),
    )
    .await;

    // two empty tables, grouped
    let mut table_ids = Vec::new();
    for _ in 0..2 {
        let (status, table) = send(
            &app,
            "POST",
            "/api/tables",
            Some(json!({ "numberOfGuests": 0, "empty": true })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        table_ids.push(id(&table));
    }

    let (status, _) = send(
        &app,
        "POST",
        "/api/table-groups",
        Some(json!({ "orderTables": [{ "id": table_ids[0] }] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, table_group) = send(
        &app,
        "POST",
        "/api/table-groups",
        Some(json!({ "orderTables": [{ "id": table_ids[0] }, { "id": table_ids[1] }] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(table_group["createdDate"].as_i64().unwrap() > 0);
    for member in table_group["orderTables"].as_array().unwrap() {
        assert_eq!(member["tableGroupId"], id(&table_group));
        assert_eq!(member["empty"], true);
    }

    // grouped tables cannot change emptiness
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/tables/{}/empty", table_ids[0]),
        Some(json!({ "empty": false })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // empty tables cannot take orders
    let order_body = json!({
        "orderTableId": table_ids[0],
        "orderLineItems": [{ "menuId": id(&menu), "quantity": 1 }]
    });
    let (status, _) = send(&app, "POST", "/api/orders", Some(order_body.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // ungroup: members come back occupied
    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/table-groups/{}", id(&table_group)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, tables) = send(&app, "GET", "/api/tables", None).await;
    for table in tables.as_array().unwrap() {
        assert_eq!(table["tableGroupId"], Value::Null);
        assert_eq!(table["empty"], false);
    }

    let (status, table) = send(
        &app,
        "PUT",
        &format!("/api/tables/{}/number-of-guests", table_ids[0]),
        Some(json!({ "numberOfGuests": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(table["numberOfGuests"], 3);

    // order lifecycle
    let (status, order) = send(&app, "POST", "/api/orders", Some(order_body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["orderStatus"], "COOKING");
    assert!(order["orderedTime"].as_i64().unwrap() > 0);
    assert_eq!(order["orderLineItems"][0]["orderId"], id(&order));

    // a table with an order in progress stays occupied
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/tables/{}/empty", table_ids[0]),
        Some(json!({ "empty": true })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let status_uri = format!("/api/orders/{}/order-status", id(&order));
    for next in ["MEAL", "COMPLETION"] {
        let (status, changed) =
            send(&app, "PUT", &status_uri, Some(json!({ "orderStatus": next }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(changed["orderStatus"], next);
        assert_eq!(changed["orderLineItems"].as_array().unwrap().len(), 1);
    }

    let (status, err) = send(&app, "PUT", &status_uri, Some(json!({ "orderStatus": "MEAL" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], 2);

    let (status, _) = send(
        &app,
        "PUT",
        "/api/orders/9999/order-status",
        Some(json!({ "orderStatus": "MEAL" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, orders) = send(&app, "GET", "/api/orders", None).await;
    assert_eq!(orders.as_array().unwrap().len(), 1);
    assert_eq!(orders[0]["orderStatus"], "COMPLETION");

    // completed orders free the table
    let (status, table) = send(
        &app,
        "PUT",
        &format!("/api/tables/{}/empty", table_ids[0]),
        Some(json!({ "empty": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(table["empty"], true);
}

#[tokio::test]
async fn test_health_and_request_id() {
    let app = app().await;
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
}
