//! Home page

use auric_core::content::company::{
    HERO_BADGES, HERO_EYEBROW, HERO_IMAGE, HERO_LEAD, HERO_PARTICLES, HERO_STATS, WHY_CHOOSE,
};
use auric_core::routes;
use leptos::*;

use super::AboutSection;
use crate::components::*;

const FEATURE_ICONS: [&str; 3] = ["🏅", "🛡", "⚙"];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>
        <AboutSection/>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let (desktop_particles, mobile_particles) = HERO_PARTICLES;

    view! {
        <section class="hero">
            <ParticleField count=desktop_particles mobile_count=mobile_particles seed=20/>
            <div class="container hero-grid">
                <div class="hero-copy">
                    <span class="eyebrow">{HERO_EYEBROW}</span>
                    <h1>"Auric "<span class="accent">"Engineering"</span></h1>
                    <p class="lead">{HERO_LEAD}</p>
                    <BadgeRow badges=HERO_BADGES/>
                    <div class="hero-actions">
                        <a href=routes::MANUFACTURE class="btn btn-primary">"Get Started Today"</a>
                        <a href=routes::product_path("slip-on") class="btn btn-outline">"View Products"</a>
                    </div>
                </div>
                <figure class="hero-media">
                    <img src=HERO_IMAGE alt="Industrial Manufacturing"/>
                    <figcaption><span class="live-dot"></span>"Live Production"</figcaption>
                </figure>
            </div>
            <div class="container stats-strip">
                {HERO_STATS.iter().map(|stat| view! { <StatCard value=stat.value label=stat.label/> }).collect_view()}
            </div>
        </section>

        <section class="section">
            <div class="container">
                <SectionHeading
                    title="Why Choose Auric"
                    subtitle="Experience the difference of working with industry-leading experts"
                />
                <div class="grid grid-3">
                    {WHY_CHOOSE
                        .iter()
                        .zip(FEATURE_ICONS)
                        .map(|(feature, icon)| view! {
                            <FeatureCard title=feature.title description=feature.description icon=icon/>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
