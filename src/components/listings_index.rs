//! Collection page listing every stay as a card.

use leptos::*;
use crate::components::layout::Layout;
use crate::models::listing::Listing;

#[component]
pub fn ListingsIndex(listings: Vec<Listing>) -> impl IntoView {
    view! {
        <Layout title="All Listings">
            <h2>{ "All Listings" }</h2>
            <div class="listings">
                {
                    listings.into_iter().map(|listing| {
                        let price = listing.price_label();
                        let href = format!("/listings/{}", listing.id);
                        let Listing { title, image, .. } = listing;
                        view! {
                            <a class="listing-link" href={href}>
                                <div class="card listing-card">
                                    <img class="card-img" src={image.url} alt={title.clone()}/>
                                    <div class="card-body">
                                        <b>{ title }</b>
                                        <p>{ format!("₹ {} / night", price) }</p>
                                    </div>
                                </div>
                            </a>
                        }
                    }).collect::<Vec<_>>()
                }
            </div>
        </Layout>
    }
}
