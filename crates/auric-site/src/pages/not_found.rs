//! 404 page

use auric_core::routes;
use leptos::*;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <section class="section not-found">
            <div class="container">
                <h1>"404"</h1>
                <p class="lead">"The page you are looking for could not be found."</p>
                <a href=routes::HOME class="btn btn-primary">"Back to Home"</a>
            </div>
        </section>
    }
}
