//! Server-rendered views. Every page is a leptos component rendered to a
//! plain HTML string; nothing is hydrated on the client.

pub mod error_page;
pub mod layout;
pub mod listing_form;
pub mod listing_show;
pub mod listings_index;
pub mod review_form;
pub mod reviews_list;

use leptos::*;

use crate::models::listing::Listing;
use crate::models::review::Review;
use error_page::ErrorPage;
use listing_form::ListingForm;
use listing_show::ListingShow;
use listings_index::ListingsIndex;

fn render_page<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let html = leptos::leptos_dom::ssr::render_to_string(view);
    format!("<!DOCTYPE html>{}", html)
}

pub fn render_listings_index(listings: Vec<Listing>) -> String {
    render_page(move || view! { <ListingsIndex listings={listings}/> })
}

pub fn render_new_listing() -> String {
    render_page(|| view! { <ListingForm/> })
}

pub fn render_edit_listing(listing: Listing) -> String {
    render_page(move || view! { <ListingForm listing={listing}/> })
}

pub fn render_listing_show(listing: Listing, reviews: Vec<Review>) -> String {
    render_page(move || view! { <ListingShow listing={listing} reviews={reviews}/> })
}

pub fn render_error_page(status: u16, message: String) -> String {
    render_page(move || view! { <ErrorPage status={status} message={message}/> })
}
