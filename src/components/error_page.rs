use leptos::*;
use crate::components::layout::Layout;

#[component]
pub fn ErrorPage(status: u16, message: String) -> impl IntoView {
    view! {
        <Layout title={format!("Error {}", status)}>
            <div class="alert alert-danger">
                <h4>{ format!("Error {}", status) }</h4>
                <p>{ message }</p>
                <a href="/listings">{ "Back to all listings" }</a>
            </div>
        </Layout>
    }
}
