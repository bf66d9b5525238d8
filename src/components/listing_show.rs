use leptos::*;
use crate::components::{layout::Layout, review_form::ReviewForm, reviews_list::ReviewsList};
use crate::models::listing::Listing;
use crate::models::review::Review;

#[component]
pub fn ListingShow(listing: Listing, reviews: Vec<Review>) -> impl IntoView {
    let price = listing.price_label();
    let place = [listing.location.clone(), listing.country.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <Layout title={listing.title.clone()}>
            <h3>{ listing.title.clone() }</h3>
            <div class="card show-card">
                <img class="card-img show-img" src={listing.image.url.clone()} alt={listing.image.filename.clone()}/>
                <div class="card-body">
                    <p>{ listing.description.clone().unwrap_or_default() }</p>
                    <p>{ format!("₹ {}", price) }</p>
                    <p>{ place }</p>
                </div>
            </div>
            <div class="actions">
                <a class="btn" href={format!("/listings/{}/edit", listing.id)}>{ "Edit" }</a>
                <form method="POST" action={format!("/listings/{}?_method=DELETE", listing.id)}>
                    <button type="submit" class="btn btn-dark">{ "Delete" }</button>
                </form>
            </div>
            <hr/>
            <ReviewForm listing_id={listing.id.clone()}/>
            <ReviewsList listing_id={listing.id.clone()} reviews={reviews}/>
        </Layout>
    }
}
