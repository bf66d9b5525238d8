use leptos::*;

/// Page shell shared by every view: head, navigation bar and footer.
#[component]
pub fn Layout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{ format!("{} | StayEase", title) }</title>
                <link rel="stylesheet" href="/assets/css/style.css"/>
            </head>
            <body>
                <nav class="navbar">
                    <a class="brand" href="/listings">{ "StayEase" }</a>
                    <a href="/listings">{ "Explore" }</a>
                    <a href="/listings/new">{ "Add new listing" }</a>
                </nav>
                <main class="container">
                    { children() }
                </main>
                <footer class="footer">{ "© StayEase Private Limited" }</footer>
            </body>
        </html>
    }
}
