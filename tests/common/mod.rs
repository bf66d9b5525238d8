#![allow(dead_code)]

use actix_web::{body::MessageBody, dev::ServiceResponse, http::header, test};
use leptos::logging::log;
use stayease::db::Database;

pub async fn test_db() -> Database {
    log!("[TEST] Creating in-memory test database");
    let db = Database::new(":memory:").unwrap();
    db.create_schema().await.unwrap();
    db
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .expect("missing Location header")
        .to_str()
        .unwrap()
        .to_string()
}

pub async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}
