use leptos::*;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(listing_id: String, reviews: Vec<Review>) -> impl IntoView {
    view! {
        <div class="reviews">
            <h4>{ "All Reviews" }</h4>
            <ul>
                {
                    reviews.into_iter().map(|review| {
                        let action = format!("/listings/{}/reviews/{}?_method=DELETE", listing_id, review.id);
                        let stars = format!("{} ({}/5)", review.stars(), review.rating);
                        let posted = review.created_at.format("%d %b %Y").to_string();
                        view! {
                            <li class="review-card">
                                <p class="stars">{ stars }</p>
                                <p>{ review.comment }</p>
                                <p class="muted">{ posted }</p>
                                <form method="POST" action={action}>
                                    <button type="submit">{ "Delete" }</button>
                                </form>
                            </li>
                        }
                    }).collect::<Vec<_>>()
                }
            </ul>
        </div>
    }
}
