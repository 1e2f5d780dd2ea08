//! Card and section building blocks shared by the pages

use leptos::*;

#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] id: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-heading" id=id>
            <h2>{title}</h2>
            {subtitle.map(|text| view! { <p>{text}</p> })}
        </div>
    }
}

/// Page banner with a title, lead paragraph and optional extras below.
#[component]
pub fn PageHero(
    title: &'static str,
    lead: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="page-hero">
            <div class="container">
                <h1>{title}</h1>
                <p class="lead">{lead}</p>
                {children.map(|c| c())}
            </div>
        </section>
    }
}

#[component]
pub fn BadgeRow(badges: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="badge-row">
            {badges.iter().map(|badge| view! { <li class="badge">{*badge}</li> }).collect_view()}
        </ul>
    }
}

#[component]
pub fn FeatureCard(
    title: &'static str,
    description: &'static str,
    #[prop(optional)] icon: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="card feature-card">
            {icon.map(|icon| view! { <div class="card-icon">{icon}</div> })}
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] value: String,
    label: &'static str,
    #[prop(optional)] note: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
            {note.map(|note| view! { <div class="stat-note">{note}</div> })}
        </div>
    }
}

/// Image tile that swaps to `fallback` if the image fails to load.
#[component]
pub fn ImageCard(
    src: &'static str,
    fallback: &'static str,
    title: &'static str,
    #[prop(optional)] caption: Option<&'static str>,
) -> impl IntoView {
    let (image, set_image) = create_signal(src);

    view! {
        <figure class="card image-card">
            <img src=move || image.get() alt=title loading="lazy" on:error=move |_| set_image.set(fallback)/>
            <figcaption>
                <h3>{title}</h3>
                {caption.map(|text| view! { <p>{text}</p> })}
            </figcaption>
        </figure>
    }
}

#[component]
pub fn SpecList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="spec-list">
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}

/// Closing call-to-action band.
#[component]
pub fn CtaBanner(heading: &'static str, text: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="cta-banner">
            <div class="container">
                <h2>{heading}</h2>
                <p>{text}</p>
                <div class="cta-actions">{children()}</div>
            </div>
        </section>
    }
}

/// Overlay dialog; clicking the backdrop or the close button calls `on_close`.
#[component]
pub fn Modal(
    title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.call(())>
            <div class="modal" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button type="button" class="modal-close" aria-label="Close" on:click=move |_| on_close.call(())>
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
