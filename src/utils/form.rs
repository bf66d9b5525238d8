//! Request body decoding shared by the mutating routes.
//!
//! Form fields use bracketed names (`listing[image][url]=...`) and are folded
//! into the same JSON tree a JSON body would produce.

use actix_web::{HttpMessage, HttpRequest};
use serde_json::{Map, Value};

use crate::error::AppError;

pub fn parse_body(req: &HttpRequest, body: &[u8]) -> Result<Value, AppError> {
    if body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    if req.content_type() == "application/json" {
        return serde_json::from_slice(body).map_err(|_| AppError::MalformedPayload);
    }
    let text = std::str::from_utf8(body).map_err(|_| AppError::MalformedPayload)?;
    parse_form(text)
}

/// Decodes an urlencoded body into nested objects.
pub fn parse_form(text: &str) -> Result<Value, AppError> {
    let mut root = Map::new();
    for pair in text.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode(raw_key)?;
        let value = decode(raw_value)?;
        insert_path(&mut root, &key_path(&key), value);
    }
    Ok(Value::Object(root))
}

fn decode(raw: &str) -> Result<String, AppError> {
    urlencoding::decode(&raw.replace('+', " "))
        .map(|s| s.into_owned())
        .map_err(|_| AppError::MalformedPayload)
}

// "listing[image][url]" -> ["listing", "image", "url"]
fn key_path(key: &str) -> Vec<&str> {
    match key.find('[') {
        Some(start) if key.ends_with(']') => {
            let mut path = vec![&key[..start]];
            path.extend(key[start + 1..key.len() - 1].split("]["));
            path
        }
        _ => vec![key],
    }
}

fn insert_path(map: &mut Map<String, Value>, path: &[&str], value: String) {
    match path {
        [] => {}
        [last] => {
            map.insert(last.to_string(), Value::String(value));
        }
        [head, rest @ ..] => {
            let entry = map
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(child) = entry {
                insert_path(child, rest, value);
            }
        }
    }
}
