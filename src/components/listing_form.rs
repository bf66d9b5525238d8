use leptos::*;
use crate::components::layout::Layout;
use crate::models::listing::Listing;

/// Create form when `listing` is `None`, pre-filled edit form otherwise.
/// The edit form posts with `?_method=PUT`.
#[component]
pub fn ListingForm(#[prop(optional)] listing: Option<Listing>) -> impl IntoView {
    let (heading, action, submit) = match &listing {
        Some(existing) => (
            "Edit your listing",
            format!("/listings/{}?_method=PUT", existing.id),
            "Edit",
        ),
        None => ("Create a new listing", "/listings".to_string(), "Add"),
    };

    let title = listing.as_ref().map(|l| l.title.clone()).unwrap_or_default();
    let description = listing
        .as_ref()
        .and_then(|l| l.description.clone())
        .unwrap_or_default();
    let price = listing
        .as_ref()
        .and_then(|l| l.price)
        .map(|p| p.to_string())
        .unwrap_or_default();
    let location = listing
        .as_ref()
        .and_then(|l| l.location.clone())
        .unwrap_or_default();
    let country = listing
        .as_ref()
        .and_then(|l| l.country.clone())
        .unwrap_or_default();

    // The create form sends the image as a bare url; the edit form keeps the
    // stored filename alongside it.
    let image_fields = match &listing {
        Some(existing) => view! {
            <input type="hidden" name="listing[image][filename]" value={existing.image.filename.clone()}/>
            <label for="image">{ "Image Link" }</label>
            <input id="image" type="text" name="listing[image][url]" value={existing.image.url.clone()}/>
        }
        .into_view(),
        None => view! {
            <label for="image">{ "Image Link" }</label>
            <input id="image" type="text" name="listing[image]" placeholder="Enter image URL/Link"/>
        }
        .into_view(),
    };

    view! {
        <Layout title={heading.to_string()}>
            <h3>{ heading }</h3>
            <form method="POST" action={action} class="listing-form">
                <label for="title">{ "Title" }</label>
                <input id="title" type="text" name="listing[title]" value={title} placeholder="Add a catchy title"/>

                <label for="description">{ "Description" }</label>
                <textarea id="description" name="listing[description]">{ description }</textarea>

                { image_fields }

                <label for="price">{ "Price" }</label>
                <input id="price" type="number" name="listing[price]" value={price} placeholder="1200"/>

                <label for="country">{ "Country" }</label>
                <input id="country" type="text" name="listing[country]" value={country} placeholder="India"/>

                <label for="location">{ "Location" }</label>
                <input id="location" type="text" name="listing[location]" value={location} placeholder="Jaipur, Rajasthan"/>

                <button type="submit">{ submit }</button>
            </form>
        </Layout>
    }
}
