//! Product family pages under `/products/:slug`

use auric_core::catalog::{self, ProductFamily};
use auric_core::routes;
use leptos::*;
use leptos_router::use_params_map;
use tracing::debug;

use super::NotFound;
use crate::components::*;

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").cloned().unwrap_or_default());

    move || match catalog::family(&slug()) {
        Ok(family) => view! { <FamilyView family=family/> }.into_view(),
        Err(err) => {
            debug!(error = %err, "No product family for route");
            view! { <NotFound/> }.into_view()
        }
    }
}

#[component]
fn FamilyView(family: &'static ProductFamily) -> impl IntoView {
    view! {
        <PageHero title=family.title lead=family.intro/>

        <section class="section">
            <div class="container">
                <div class="grid grid-3">
                    {family
                        .items
                        .iter()
                        .map(|item| view! {
                            <article class="card product-card">
                                <ImageCard src=item.image fallback=family.fallback_image title=item.name/>
                                <p>{item.description}</p>
                                <SpecList items=item.specs/>
                            </article>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        {(!family.applications.is_empty() || !family.standards.is_empty()).then(|| view! {
            <section class="section section-alt">
                <div class="container two-column">
                    {(!family.applications.is_empty()).then(|| view! {
                        <div class="card">
                            <h3>"Applications"</h3>
                            <SpecList items=family.applications/>
                        </div>
                    })}
                    {(!family.standards.is_empty()).then(|| view! {
                        <div class="card">
                            <h3>"Standards"</h3>
                            <SpecList items=family.standards/>
                        </div>
                    })}
                </div>
            </section>
        })}

        <CtaBanner
            heading="Need a custom size or material?"
            text="Tell us your pressure class, facing and material grade and we will quote to your specification."
        >
            <a href=routes::CONTACT class="btn btn-primary">"Request a Quote"</a>
        </CtaBanner>
    }
}
