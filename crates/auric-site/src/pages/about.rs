//! About page, also rendered below the home hero

use auric_core::content::company::{
    ABOUT_INTRO, ABOUT_PARTICLES, ABOUT_STOCK, ADVANTAGES, MANUFACTURING_STANDARDS, MATERIAL_STANDARDS,
};
use auric_core::routes;
use leptos::*;

use crate::components::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! { <AboutSection/> }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let (desktop_particles, mobile_particles) = ABOUT_PARTICLES;

    view! {
        <section class="about section">
            <ParticleField count=desktop_particles mobile_count=mobile_particles seed=25/>
            <div class="container">
                <SectionHeading title="About Us" subtitle=ABOUT_INTRO/>

                <div class="about-grid">
                    <div class="about-copy">
                        <h3>"Leading Manufacturing Company"</h3>
                        <p>{ABOUT_STOCK}</p>
                    </div>
                    <div class="standards">
                        <div class="card">
                            <h4>"Material Standards"</h4>
                            <SpecList items=MATERIAL_STANDARDS/>
                        </div>
                        <div class="card">
                            <h4>"Manufacturing Standards"</h4>
                            <SpecList items=MANUFACTURING_STANDARDS/>
                        </div>
                    </div>
                </div>

                <div class="grid grid-3">
                    {ADVANTAGES
                        .iter()
                        .map(|advantage| view! {
                            <FeatureCard title=advantage.title description=advantage.description/>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <CtaBanner
            heading="Ready to Partner With Us?"
            text="Experience the Auric difference in quality, reliability, and service excellence"
        >
            <a href=routes::CONTACT class="btn btn-primary">"Contact Us Today"</a>
        </CtaBanner>
    }
}
