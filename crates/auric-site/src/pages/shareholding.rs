//! Shareholding pattern

use auric_core::content::investor::{
    ring_dasharray, MAJOR_SHAREHOLDERS, OWNERSHIP, RING_CIRCUMFERENCE, SHAREHOLDING_FALLBACK_IMAGE, SHAREHOLDING_INTRO,
};
use auric_core::routes;
use leptos::*;

use crate::components::*;

#[component]
pub fn ShareholdingPage() -> impl IntoView {
    view! {
        <PageHero title="Shareholding Information" lead=SHAREHOLDING_INTRO/>

        <section class="section">
            <div class="container">
                <SectionHeading
                    title="Major Shareholders"
                    subtitle="The following highlights our largest individual and institutional stakeholders."
                />
                <div class="grid grid-3">
                    {MAJOR_SHAREHOLDERS
                        .iter()
                        .map(|holder| view! {
                            <div class="card shareholder-card">
                                <ImageCard src=holder.image fallback=SHAREHOLDING_FALLBACK_IMAGE title=holder.name/>
                                <StakeRing pct=holder.stake_pct/>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <SectionHeading
                    title="Ownership Structure"
                    subtitle="Our shareholding is diversified across promoters, institutions, and public investors."
                />
                <ul class="ownership-bars">
                    {OWNERSHIP
                        .iter()
                        .map(|(group, pct)| view! {
                            <li>
                                <div class="bar-label">
                                    <span>{*group}</span>
                                    <span>{format!("{pct}%")}</span>
                                </div>
                                <div class="bar-track">
                                    <div class="bar-fill" style=format!("width:{pct}%")></div>
                                </div>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>

        <CtaBanner
            heading="Want detailed investor reports?"
            text="Download our latest shareholding pattern and annual investor report for in-depth insights."
        >
            <a href=routes::FINANCIALS class="btn btn-primary">"View Financial Reports"</a>
            <a href=routes::CONTACT class="btn btn-outline">"Contact IR Team"</a>
        </CtaBanner>
    }
}

#[component]
fn StakeRing(pct: u8) -> impl IntoView {
    view! {
        <svg class="stake-ring" viewBox="0 0 80 80" role="img" aria-label=format!("{pct}% stake")>
            <circle cx="40" cy="40" r="32" class="ring-track" stroke-dasharray=RING_CIRCUMFERENCE.to_string()/>
            <circle cx="40" cy="40" r="32" class="ring-fill" stroke-dasharray=ring_dasharray(pct) transform="rotate(-90 40 40)"/>
            <text x="40" y="45" text-anchor="middle">{format!("{pct}%")}</text>
        </svg>
    }
}
