mod common;

use actix_web::{http::StatusCode, test};
use common::{body_text, location, test_db};
use serde_json::json;
use stayease::app::create_app;
use stayease::db::Database;
use stayease::models::listing::{Listing, ListingInput};

async fn seed_listing(db: &Database) -> Listing {
    let listing = Listing::new(ListingInput {
        title: "Treehouse".into(),
        ..Default::default()
    });
    db.insert_listing(&listing).await.unwrap();
    listing
}

#[actix_web::test]
async fn reviews_are_appended_in_order() {
    let db = test_db().await;
    let listing = seed_listing(&db).await;
    let app = test::init_service(create_app(db.clone(), "public")).await;

    for (rating, comment) in [("5", "Magical"), ("3", "Too many stairs")] {
        let req = test::TestRequest::post()
            .uri(&format!("/listings/{}/reviews", listing.id))
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload(format!(
                "review[rating]={}&review[comment]={}",
                rating,
                comment.replace(' ', "+")
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), format!("/listings/{}", listing.id));
    }

    let (stored, reviews) = db
        .find_listing_with_reviews(&listing.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].comment, "Magical");
    assert_eq!(reviews[0].rating, 5);
    assert_eq!(reviews[1].comment, "Too many stairs");
    assert_eq!(
        stored.reviews,
        vec![reviews[0].id.clone(), reviews[1].id.clone()]
    );
    for review in &reviews {
        let occurrences = stored.reviews.iter().filter(|id| **id == review.id).count();
        assert_eq!(occurrences, 1);
        assert!(db.find_review(&review.id).await.unwrap().is_some());
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/listings/{}", listing.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Magical"));
    assert!(body.contains("Too many stairs"));
}

#[actix_web::test]
async fn invalid_review_is_rejected() {
    let db = test_db().await;
    let listing = seed_listing(&db).await;
    let app = test::init_service(create_app(db.clone(), "public")).await;

    let req = test::TestRequest::post()
        .uri(&format!("/listings/{}/reviews", listing.id))
        .set_json(json!({ "review": { "rating": 9, "comment": "" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_text(resp).await;
    assert!(body.contains("review.rating"));
    assert!(body.contains("review.comment"));

    assert_eq!(db.count_reviews().await.unwrap(), 0);
    let stored = db.find_listing(&listing.id).await.unwrap().unwrap();
    assert!(stored.reviews.is_empty());
}

#[actix_web::test]
async fn delete_review_detaches_and_removes() {
    let db = test_db().await;
    let listing = seed_listing(&db).await;
    let app = test::init_service(create_app(db.clone(), "public")).await;

    let req = test::TestRequest::post()
        .uri(&format!("/listings/{}/reviews", listing.id))
        .set_json(json!({ "review": { "rating": 4, "comment": "Cozy" } }))
        .to_request();
    test::call_service(&app, req).await;
    let review_id = db.find_listing(&listing.id).await.unwrap().unwrap().reviews[0].clone();

    let uri = format!("/listings/{}/reviews/{}?_method=DELETE", listing.id, review_id);
    let resp = test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), format!("/listings/{}", listing.id));

    let stored = db.find_listing(&listing.id).await.unwrap().unwrap();
    assert!(stored.reviews.is_empty());
    assert!(db.find_review(&review_id).await.unwrap().is_none());

    // deleting again still redirects
    let resp = test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), format!("/listings/{}", listing.id));
}

#[actix_web::test]
async fn delete_review_does_not_check_listing() {
    let db = test_db().await;
    let app = test::init_service(create_app(db.clone(), "public")).await;

    let req = test::TestRequest::delete()
        .uri("/listings/missing/reviews/also-missing")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/listings/missing");
}

#[actix_web::test]
async fn deleting_listing_keeps_reviews() {
    let db = test_db().await;
    let listing = seed_listing(&db).await;
    let app = test::init_service(create_app(db.clone(), "public")).await;

    let req = test::TestRequest::post()
        .uri(&format!("/listings/{}/reviews", listing.id))
        .set_json(json!({ "review": { "rating": 2, "comment": "Noisy" } }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/listings/{}", listing.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    assert_eq!(db.count_listings().await.unwrap(), 0);
    assert_eq!(db.count_reviews().await.unwrap(), 1);
}
