use actix_web::{
    http::header::{self, ContentType},
    web, HttpRequest, HttpResponse,
};
use leptos::logging::log;
use serde_json::{Map, Value};

use crate::components;
use crate::db::Database;
use crate::error::AppError;
use crate::models::listing::Listing;
use crate::models::review::Review;
use crate::utils::form::parse_body;
use crate::validation::{validate_listing, validate_review};

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// Wraps a bare-string `listing.image` as `{ "url": image }`.
/// Runs before validation; the empty-url placeholder is applied later by the model.
pub fn normalize_image(payload: &mut Value) {
    let Some(image) = payload.get_mut("listing").and_then(|l| l.get_mut("image")) else {
        return;
    };
    if let Value::String(url) = image {
        let url = std::mem::take(url);
        let mut wrapped = Map::new();
        wrapped.insert("url".to_string(), Value::String(url));
        *image = Value::Object(wrapped);
    }
}

pub async fn index() -> HttpResponse {
    redirect("/listings")
}

pub async fn list_listings(db: web::Data<Database>) -> Result<HttpResponse, AppError> {
    let listings = db.find_listings().await?;
    log!("[API] Rendering {} listings", listings.len());
    Ok(html(components::render_listings_index(listings)))
}

pub async fn new_listing_form() -> HttpResponse {
    html(components::render_new_listing())
}

pub async fn create_listing(
    db: web::Data<Database>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let mut payload = parse_body(&req, &body)?;
    normalize_image(&mut payload);
    let input = validate_listing(&payload)?;

    let listing = Listing::new(input);
    db.insert_listing(&listing).await?;
    log!("[API] Created listing {}", listing.id);
    Ok(redirect("/listings"))
}

pub async fn show_listing(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let (listing, reviews) = db
        .find_listing_with_reviews(&id)
        .await?
        .ok_or(AppError::ListingNotFound)?;
    Ok(html(components::render_listing_show(listing, reviews)))
}

pub async fn edit_listing_form(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let listing = db.find_listing(&id).await?.ok_or(AppError::ListingNotFound)?;
    Ok(html(components::render_edit_listing(listing)))
}

pub async fn update_listing(
    db: web::Data<Database>,
    id: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let mut payload = parse_body(&req, &body)?;
    normalize_image(&mut payload);
    let input = validate_listing(&payload)?;

    let listing = db
        .update_listing(&id, input)
        .await?
        .ok_or(AppError::ListingNotFound)?;
    log!("[API] Updated listing {}", listing.id);
    Ok(redirect(&format!("/listings/{}", listing.id)))
}

pub async fn delete_listing(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let listing = db.delete_listing(&id).await?.ok_or(AppError::ListingNotFound)?;
    log!("[API] Deleted listing {} ({} review refs left as is)", listing.id, listing.reviews.len());
    Ok(redirect("/listings"))
}

/// Saves the review, then appends its id to the parent. The writes are
/// independent: if the second fails the review exists without a reference.
pub async fn create_review(
    db: web::Data<Database>,
    id: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let payload = parse_body(&req, &body)?;
    let input = validate_review(&payload)?;

    let listing = db.find_listing(&id).await?.ok_or(AppError::ListingNotFound)?;
    let review = Review::new(input);

    db.insert_review(&review).await?;
    if !db.push_review_ref(&listing.id, &review.id).await? {
        log!("[API] Listing {} vanished, review {} left unattached", listing.id, review.id);
        return Err(AppError::ListingNotFound);
    }
    log!("[API] Review {} added to listing {}", review.id, listing.id);
    Ok(redirect(&format!("/listings/{}", listing.id)))
}

/// Detaches the id from the listing, then deletes the review record.
/// Neither step checks that the listing or the review exists.
pub async fn delete_review(
    db: web::Data<Database>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (listing_id, review_id) = path.into_inner();

    db.pull_review_ref(&listing_id, &review_id).await?;
    db.delete_review(&review_id).await?;
    log!("[API] Review {} removed from listing {}", review_id, listing_id);
    Ok(redirect(&format!("/listings/{}", listing_id)))
}

pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::PageNotFound)
}
