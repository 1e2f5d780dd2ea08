//! Manufacture page: forged products and flange range

use auric_core::content::manufacture::{
    ShowcaseImage, BADGES, FALLBACK_IMAGE, FLANGES_INTRO, FLANGE_PRODUCTS, FORGED_INTRO, FORGED_PRODUCTS, INTRO,
    QUOTE_HEADING, QUOTE_TEXT,
};
use auric_core::routes;
use leptos::*;

use crate::components::*;

#[component]
pub fn ManufacturePage() -> impl IntoView {
    view! {
        <PageHero title="Manufacturing Excellence" lead=INTRO>
            <BadgeRow badges=BADGES/>
            <div class="hero-actions">
                <a href=routes::product_path("slip-on") class="btn btn-primary">"View Catalog"</a>
                <a href="#forged" class="btn btn-outline">"Forged Products"</a>
            </div>
        </PageHero>

        <section class="section" id="forged">
            <div class="container">
                <SectionHeading title="Forged Products" subtitle=FORGED_INTRO/>
                <Showcase items=FORGED_PRODUCTS/>
            </div>
        </section>

        <section class="section section-alt" id="flanges">
            <div class="container">
                <SectionHeading title="Industrial Flanges" subtitle=FLANGES_INTRO/>
                <Showcase items=FLANGE_PRODUCTS/>
            </div>
        </section>

        <CtaBanner heading=QUOTE_HEADING text=QUOTE_TEXT>
            <a href=routes::CONTACT class="btn btn-primary">"Get a Quote"</a>
            <a href="#" class="btn btn-outline">"Download Catalog"</a>
        </CtaBanner>
    }
}

#[component]
fn Showcase(items: &'static [ShowcaseImage]) -> impl IntoView {
    view! {
        <div class="grid grid-3">
            {items
                .iter()
                .map(|item| view! {
                    <ImageCard src=item.src fallback=FALLBACK_IMAGE title=item.title caption=item.caption/>
                })
                .collect_view()}
        </div>
    }
}
