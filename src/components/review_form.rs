use leptos::*;

#[component]
pub fn ReviewForm(listing_id: String) -> impl IntoView {
    view! {
        <div class="review-form">
            <h4>{ "Leave a Review" }</h4>
            <form method="POST" action={format!("/listings/{}/reviews", listing_id)}>
                <label for="rating">{ "Rating (1-5)" }</label>
                <input id="rating" type="range" min="1" max="5" value="3" name="review[rating]"/>
                <label for="comment">{ "Comments" }</label>
                <textarea id="comment" name="review[comment]" cols="30" rows="5" placeholder="Write your review here"></textarea>
                <button type="submit">{ "Submit" }</button>
            </form>
        </div>
    }
}
