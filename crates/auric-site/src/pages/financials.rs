//! Financial reports: quarterly and annual results, ratios, downloads

use auric_core::content::investor::{QuarterSelection, ANNUAL, FINANCIALS_INTRO, KEY_RATIOS, REPORTS};
use leptos::*;

use crate::components::*;

#[component]
pub fn FinancialsPage() -> impl IntoView {
    let selection = create_rw_signal(QuarterSelection::default());

    view! {
        <PageHero title="Financial Reports" lead=FINANCIALS_INTRO/>

        <section class="section">
            <div class="container">
                <SectionHeading title="Quarterly Results"/>
                <div class="quarter-picker">
                    <select
                        aria-label="Year"
                        prop:value=move || selection.with(|s| s.year.to_string())
                        on:change=move |ev| {
                            if let Ok(year) = event_target_value(&ev).parse::<u16>() {
                                selection.update(|s| s.select_year(year));
                            }
                        }
                    >
                        {QuarterSelection::years()
                            .map(|year| view! { <option value=year.to_string()>{year}</option> })
                            .collect_view()}
                    </select>
                    <div class="tabs">
                        {(1..=4u8)
                            .map(|quarter| view! {
                                <button
                                    type="button"
                                    class=move || if selection.with(|s| s.quarter == quarter) { "tab active" } else { "tab" }
                                    on:click=move |_| selection.update(|s| s.select_quarter(quarter))
                                >
                                    {format!("Q{quarter}")}
                                </button>
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="grid grid-4">
                    {move || selection.get().result().map(|r| view! {
                        <StatCard value=r.revenue label="Revenue"/>
                        <StatCard value=r.profit label="Net Profit"/>
                        <StatCard value=r.growth label="Growth"/>
                        <StatCard value=r.margin label="Margin"/>
                    })}
                </div>
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <SectionHeading title="Annual Performance"/>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Year"</th>
                            <th>"Revenue"</th>
                            <th>"Net Profit"</th>
                            <th>"Growth"</th>
                            <th>"Margin"</th>
                            <th>"Total Assets"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {ANNUAL
                            .iter()
                            .map(|row| view! {
                                <tr>
                                    <td>{row.year}</td>
                                    <td>{row.revenue}</td>
                                    <td>{row.profit}</td>
                                    <td>{row.growth}</td>
                                    <td>{row.margin}</td>
                                    <td>{row.assets}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <SectionHeading title="Key Financial Ratios"/>
                <div class="grid grid-3">
                    {KEY_RATIOS
                        .iter()
                        .map(|ratio| view! {
                            <div class="card ratio-card">
                                <div class="ratio-head">
                                    <h3>{ratio.name}</h3>
                                    <span class="rating">{ratio.rating.label()}</span>
                                </div>
                                <div class="metric-value">{ratio.value}</div>
                                <div class="metric-change">{ratio.change}</div>
                                <p>{ratio.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <SectionHeading title="Reports & Downloads"/>
                <ul class="report-list">
                    {REPORTS
                        .iter()
                        .map(|report| view! {
                            <li class="card report-row">
                                <div>
                                    <h3>{report.title}</h3>
                                    <p>{format!("{} · {} · {} · {}", report.kind, report.category, report.date, report.size)}</p>
                                </div>
                                <a href="#" class="btn btn-outline">"Download"</a>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
