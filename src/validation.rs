//! Payload checks run before any listing or review is written.
//!
//! Each schema walks the decoded request body and collects every violation
//! instead of stopping at the first one. Form bodies arrive as strings, so
//! numeric fields also accept numeric text.

use crate::models::listing::{ImageInput, ListingInput};
use crate::models::review::ReviewInput;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}", .issues.join(","))]
pub struct ValidationError {
    pub issues: Vec<String>,
}

const LISTING_KEYS: &[&str] = &["title", "description", "image", "price", "location", "country"];
const IMAGE_KEYS: &[&str] = &["filename", "url"];
const REVIEW_KEYS: &[&str] = &["rating", "comment"];

/// Checks `payload.listing` and returns the typed input.
pub fn validate_listing(payload: &Value) -> Result<ListingInput, ValidationError> {
    let mut issues = Vec::new();
    let Some(listing) = require_object(payload, "listing", &mut issues) else {
        return Err(ValidationError { issues });
    };

    reject_unknown(listing, "listing", LISTING_KEYS, &mut issues);
    let title = required_string(listing, "title", "listing", &mut issues);
    let description = optional_string(listing, "description", "listing", &mut issues);
    let location = optional_string(listing, "location", "listing", &mut issues);
    let country = optional_string(listing, "country", "listing", &mut issues);
    let price = optional_number(listing, "price", "listing", &mut issues).and_then(|price| {
        if price < 0.0 {
            issues.push("\"listing.price\" must be greater than or equal to 0".to_string());
            None
        } else {
            Some(price)
        }
    });

    let image = match listing.get("image") {
        None | Some(Value::Null) => None,
        Some(Value::Object(image)) => {
            reject_unknown(image, "listing.image", IMAGE_KEYS, &mut issues);
            Some(ImageInput {
                filename: optional_string(image, "filename", "listing.image", &mut issues),
                url: optional_string(image, "url", "listing.image", &mut issues),
            })
        }
        Some(_) => {
            issues.push("\"listing.image\" must be of type object".to_string());
            None
        }
    };

    match title {
        Some(title) if issues.is_empty() => Ok(ListingInput {
            title,
            description,
            image,
            price,
            location,
            country,
        }),
        _ => Err(ValidationError { issues }),
    }
}

/// Checks `payload.review` and returns the typed input.
pub fn validate_review(payload: &Value) -> Result<ReviewInput, ValidationError> {
    let mut issues = Vec::new();
    let Some(review) = require_object(payload, "review", &mut issues) else {
        return Err(ValidationError { issues });
    };

    reject_unknown(review, "review", REVIEW_KEYS, &mut issues);

    let rating = match review.get("rating") {
        None | Some(Value::Null) => {
            issues.push("\"review.rating\" is required".to_string());
            None
        }
        Some(value) => match as_number(value) {
            Some(n) if n.fract() != 0.0 => {
                issues.push("\"review.rating\" must be an integer".to_string());
                None
            }
            Some(n) if n < 1.0 => {
                issues.push("\"review.rating\" must be greater than or equal to 1".to_string());
                None
            }
            Some(n) if n > 5.0 => {
                issues.push("\"review.rating\" must be less than or equal to 5".to_string());
                None
            }
            Some(n) => Some(n as u8),
            None => {
                issues.push("\"review.rating\" must be a number".to_string());
                None
            }
        },
    };
    let comment = required_string(review, "comment", "review", &mut issues);

    match (rating, comment) {
        (Some(rating), Some(comment)) if issues.is_empty() => Ok(ReviewInput { comment, rating }),
        _ => Err(ValidationError { issues }),
    }
}

fn require_object<'a>(
    payload: &'a Value,
    key: &str,
    issues: &mut Vec<String>,
) -> Option<&'a Map<String, Value>> {
    match payload.get(key) {
        Some(Value::Object(map)) => Some(map),
        None | Some(Value::Null) => {
            issues.push(format!("\"{key}\" is required"));
            None
        }
        Some(_) => {
            issues.push(format!("\"{key}\" must be of type object"));
            None
        }
    }
}

fn reject_unknown(map: &Map<String, Value>, parent: &str, allowed: &[&str], issues: &mut Vec<String>) {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            issues.push(format!("\"{parent}.{key}\" is not allowed"));
        }
    }
}

fn required_string(
    map: &Map<String, Value>,
    key: &str,
    parent: &str,
    issues: &mut Vec<String>,
) -> Option<String> {
    match map.get(key) {
        None | Some(Value::Null) => {
            issues.push(format!("\"{parent}.{key}\" is required"));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            issues.push(format!("\"{parent}.{key}\" is not allowed to be empty"));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            issues.push(format!("\"{parent}.{key}\" must be a string"));
            None
        }
    }
}

fn optional_string(
    map: &Map<String, Value>,
    key: &str,
    parent: &str,
    issues: &mut Vec<String>,
) -> Option<String> {
    match map.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            issues.push(format!("\"{parent}.{key}\" must be a string"));
            None
        }
    }
}

// Empty text counts as absent.
fn optional_number(
    map: &Map<String, Value>,
    key: &str,
    parent: &str,
    issues: &mut Vec<String>,
) -> Option<f64> {
    match map.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(value) => {
            let number = as_number(value);
            if number.is_none() {
                issues.push(format!("\"{parent}.{key}\" must be a number"));
            }
            number
        }
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
