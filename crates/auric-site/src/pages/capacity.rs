//! Manufacturing capacity page

use auric_core::content::facilities::{capacity_stats, Facility, FacilityTab, EQUIPMENT, EQUIPMENT_INTRO, INTRO};
use leptos::*;

use crate::components::*;

#[component]
pub fn CapacityPage() -> impl IntoView {
    let (tab, set_tab) = create_signal(FacilityTab::default());
    let (selected, set_selected) = create_signal(None::<&'static Facility>);

    view! {
        <PageHero title="Manufacturing Capacity" lead=INTRO/>

        <section class="section">
            <div class="container stats-strip">
                {capacity_stats()
                    .into_iter()
                    .map(|(value, label, note)| view! { <StatCard value=value label=label note=note/> })
                    .collect_view()}
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <div class="tabs" role="tablist">
                    {FacilityTab::ALL
                        .into_iter()
                        .map(|option| view! {
                            <button
                                type="button"
                                role="tab"
                                class=move || if tab.get() == option { "tab active" } else { "tab" }
                                on:click=move |_| set_tab.set(option)
                            >
                                {option.label()}
                            </button>
                        })
                        .collect_view()}
                </div>

                <div class="grid grid-3">
                    {move || tab
                        .get()
                        .facilities()
                        .iter()
                        .map(|facility| view! {
                            <button type="button" class="card facility-card" on:click=move |_| set_selected.set(Some(facility))>
                                <img src=facility.image alt=facility.name loading="lazy"/>
                                <h3>{facility.name}</h3>
                                <p>{facility.description}</p>
                                <span class="area">{facility.area_label()}</span>
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <SectionHeading title="Equipment & Infrastructure" subtitle=EQUIPMENT_INTRO/>
                <div class="grid grid-4">
                    {EQUIPMENT
                        .iter()
                        .map(|(stat, category)| view! { <StatCard value=stat.value label=stat.label note=*category/> })
                        .collect_view()}
                </div>
            </div>
        </section>

        {move || selected.get().map(|facility| view! {
            <Modal title=facility.name.to_string() on_close=move |_: ()| set_selected.set(None)>
                <img src=facility.image alt=facility.name class="modal-image"/>
                <p>{facility.description}</p>
                <SpecList items=facility.specs/>
                <p class="area">{facility.area_label()}</p>
            </Modal>
        })}
    }
}
