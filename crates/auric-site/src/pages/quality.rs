//! Quality control page

use auric_core::content::quality::{
    CERTIFICATIONS, CLOSING_HEADING, CLOSING_TEXT, HERO_BADGES, INTRO, PROCESSES, PROCESSES_INTRO, PRODUCT_STANDARDS,
    QUALITY_SYSTEMS,
};
use auric_core::routes;
use leptos::*;

use crate::components::*;

#[component]
pub fn QualityPage() -> impl IntoView {
    view! {
        <PageHero title="Quality Control & Assurance" lead=INTRO>
            <BadgeRow badges=HERO_BADGES/>
            <div class="hero-actions">
                <a href="#processes" class="btn btn-primary">"Explore Our Process"</a>
                <a href="#standards" class="btn btn-outline">"View Standards"</a>
            </div>
        </PageHero>

        <section class="section" id="processes">
            <div class="container">
                <SectionHeading title="Our Testing & Inspection Processes" subtitle=PROCESSES_INTRO/>
                <div class="grid grid-3">
                    {PROCESSES
                        .iter()
                        .enumerate()
                        .map(|(step, process)| view! {
                            <div class=format!("card process-card {}", process.accent.class())>
                                <span class="step">{format!("{:02}", step + 1)}</span>
                                <h3>{process.title}</h3>
                                <p>{process.description}</p>
                                <SpecList items=process.details/>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section section-alt">
            <div class="container certifications">
                {CERTIFICATIONS.iter().map(|cert| view! { <div class="cert-badge">{*cert}</div> }).collect_view()}
            </div>
        </section>

        <section class="section" id="standards">
            <div class="container">
                <SectionHeading
                    title="Industry Certifications & Standards"
                    subtitle="Compliance with global quality management and product safety standards."
                />
                <div class="two-column">
                    <div class="card">
                        <h3>"Quality Management Systems"</h3>
                        <SpecList items=QUALITY_SYSTEMS/>
                    </div>
                    <div class="card">
                        <h3>"Product Standards"</h3>
                        <SpecList items=PRODUCT_STANDARDS/>
                    </div>
                </div>
            </div>
        </section>

        <CtaBanner heading=CLOSING_HEADING text=CLOSING_TEXT>
            <a href=routes::CONTACT class="btn btn-primary">"Request Quality Report"</a>
        </CtaBanner>
    }
}
