//! Application assembly for StayEase.
//! Wires the store handle, method override, listing/review routes, static
//! assets and the not-found fallback into one actix `App`.

use actix_files::Files;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse},
    http::StatusCode,
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    web, App, Error, ResponseError,
};

use crate::api;
use crate::db::Database;
use crate::error::AppError;
use crate::utils::method_override;

/// Largest request body a handler will read.
pub const BODY_LIMIT: usize = 256 * 1024;

pub fn create_app(
    db: Database,
    static_dir: &str,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(db))
        .app_data(web::PayloadConfig::new(BODY_LIMIT))
        .wrap_fn(|mut req, srv| {
            method_override::apply(&mut req);
            srv.call(req)
        })
        // Oversized bodies are refused by the extractor before any handler runs
        .wrap(ErrorHandlers::new().handler(StatusCode::PAYLOAD_TOO_LARGE, payload_too_large))
        .configure(routes)
        // Serve stylesheets and images from the static directory
        .service(Files::new("/assets", static_dir.to_string()))
        .default_service(web::to(api::not_found))
}

fn payload_too_large<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, AppError::PayloadTooLarge.error_response());
    Ok(ErrorHandlerResponse::Response(res.map_into_right_body()))
}

/// Registers every listing and review route. Each resource falls back to the
/// not-found page for methods it does not handle.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(api::index))
            .default_service(web::to(api::not_found)),
    )
    .service(
        web::resource("/listings")
            .route(web::get().to(api::list_listings))
            .route(web::post().to(api::create_listing))
            .default_service(web::to(api::not_found)),
    )
    .service(
        web::resource("/listings/new")
            .route(web::get().to(api::new_listing_form))
            .default_service(web::to(api::not_found)),
    )
    .service(
        web::resource("/listings/{id}")
            .route(web::get().to(api::show_listing))
            .route(web::put().to(api::update_listing))
            .route(web::delete().to(api::delete_listing))
            .default_service(web::to(api::not_found)),
    )
    .service(
        web::resource("/listings/{id}/edit")
            .route(web::get().to(api::edit_listing_form))
            .default_service(web::to(api::not_found)),
    )
    .service(
        web::resource("/listings/{id}/reviews")
            .route(web::post().to(api::create_review))
            .default_service(web::to(api::not_found)),
    )
    .service(
        web::resource("/listings/{id}/reviews/{review_id}")
            .route(web::delete().to(api::delete_review))
            .default_service(web::to(api::not_found)),
    );
}
