//! Decorative floating particles behind hero sections

use auric_core::viewport::particle_field;
use leptos::*;

use crate::context::use_viewport;

/// `count` particles on desktop. On mobile, `mobile_count` if given,
/// otherwise the global mobile default.
#[component]
pub fn ParticleField(
    count: usize,
    #[prop(optional)] mobile_count: Option<usize>,
    #[prop(default = 1)] seed: u64,
) -> impl IntoView {
    let viewport = use_viewport();

    let particles = move || {
        let viewport = viewport.get();
        let n = match mobile_count {
            Some(mobile) => viewport.scaled_count(count, mobile),
            None => viewport.particle_count(count),
        };
        particle_field(n, seed)
    };

    view! {
        <div class="particles" aria-hidden="true">
            {move || particles()
                .into_iter()
                .map(|p| view! { <span class="particle" style=p.style()></span> })
                .collect_view()}
        </div>
    }
}
