//! Investor relations landing page

use auric_core::content::investor::{KeyMetric, HIGHLIGHTS, INTRO, KEY_METRICS, OVERVIEW, OVERVIEW_DESCRIPTION, QUICK_LINKS};
use auric_core::routes;
use leptos::*;

use crate::components::*;

#[component]
pub fn InvestorPage() -> impl IntoView {
    let (overview_tab, set_overview_tab) = create_signal(0usize);
    let (metric, set_metric) = create_signal(None::<&'static KeyMetric>);

    view! {
        <PageHero title="Investor Relations" lead=INTRO>
            <div class="hero-actions">
                {QUICK_LINKS
                    .iter()
                    .map(|(label, href)| view! { <a href=*href class="btn btn-outline">{*label}</a> })
                    .collect_view()}
            </div>
        </PageHero>

        <section class="section">
            <div class="container">
                <SectionHeading title="Company Overview" subtitle=OVERVIEW_DESCRIPTION/>
                <div class="tabs" role="tablist">
                    {OVERVIEW
                        .iter()
                        .enumerate()
                        .map(|(index, tab)| view! {
                            <button
                                type="button"
                                role="tab"
                                class=move || if overview_tab.get() == index { "tab active" } else { "tab" }
                                on:click=move |_| set_overview_tab.set(index)
                            >
                                {tab.label}
                            </button>
                        })
                        .collect_view()}
                </div>
                <dl class="fact-grid">
                    {move || OVERVIEW
                        .get(overview_tab.get())
                        .map(|tab| tab.facts.iter().map(|(k, v)| view! { <div><dt>{*k}</dt><dd>{*v}</dd></div> }).collect_view())}
                </dl>
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <SectionHeading title="Key Metrics"/>
                <div class="grid grid-3">
                    {KEY_METRICS
                        .iter()
                        .map(|m| view! {
                            <button type="button" class="card metric-card" on:click=move |_| set_metric.set(Some(m))>
                                <span class="metric-label">{m.label}</span>
                                <span class="metric-value">{m.value}</span>
                                <span class=format!("metric-change {}", m.trend.class())>{m.change}</span>
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <SectionHeading title="Investment Highlights"/>
                <div class="grid grid-4">
                    {HIGHLIGHTS
                        .iter()
                        .map(|(icon, feature)| view! {
                            <FeatureCard title=feature.title description=feature.description icon=*icon/>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <CtaBanner
            heading="Ready to Invest in Excellence?"
            text="Explore our detailed financial reports and corporate governance information."
        >
            <a href=routes::FINANCIALS class="btn btn-primary">"View Financial Reports"</a>
            <a href=routes::CONTACT class="btn btn-outline">"Contact IR Team"</a>
        </CtaBanner>

        {move || metric.get().map(|m| view! {
            <Modal title=m.label.to_string() on_close=move |_: ()| set_metric.set(None)>
                <p class="metric-value">{m.value}</p>
                <p class=format!("metric-change {}", m.trend.class())>{m.comparison()}</p>
            </Modal>
        })}
    }
}
