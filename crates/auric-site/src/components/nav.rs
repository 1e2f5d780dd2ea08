//! Site navigation bar

use auric_core::contrast::CONTRAST_DELAY;
use auric_core::nav::{is_active, NavCategory, NavLink, NavState, NAV_LINKS};
use auric_core::routes;
use auric_core::scroll::{ScrollTracker, VisibilityChange};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use leptos_router::use_location;

use crate::browser;

#[component]
pub fn SiteNav() -> impl IntoView {
    let pathname = use_location().pathname;
    let nav = create_rw_signal(NavState::default());
    let (scrolled, set_scrolled) = create_signal(false);
    let (shown, set_shown) = create_signal(true);
    let (dark_page, set_dark_page) = create_signal(false);

    let tracker = store_value(ScrollTracker::default());
    let pending_hide = store_value(None::<TimeoutHandle>);

    let on_scroll = window_event_listener(ev::scroll, move |_| {
        let Some(update) = tracker.try_update_value(|t| t.update(browser::scroll_y())) else {
            return;
        };
        if let Some(handle) = pending_hide.try_update_value(Option::take).flatten() {
            handle.clear();
        }
        set_scrolled.set(update.scrolled);
        match update.visibility {
            VisibilityChange::Show => set_shown.set(true),
            VisibilityChange::HideAfter(delay) => {
                let handle = set_timeout_with_handle(move || set_shown.set(false), delay).ok();
                pending_hide.set_value(handle);
            }
            VisibilityChange::Keep => {}
        }
    });
    on_cleanup(move || {
        on_scroll.remove();
        if let Some(handle) = pending_hide.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    // Sample the new page's background once it has painted.
    create_effect(move |_| {
        pathname.track();
        set_timeout(move || set_dark_page.set(browser::body_is_dark()), CONTRAST_DELAY);
    });

    let nav_class = move || {
        let mut class = String::from("site-nav");
        if scrolled.get() {
            class.push_str(" is-scrolled");
        }
        if !shown.get() {
            class.push_str(" is-hidden");
        }
        if dark_page.get() && !scrolled.get() {
            class.push_str(" on-dark");
        }
        class
    };

    view! {
        <nav class=nav_class>
            <div class="container nav-bar">
                <a href=routes::HOME class="brand" on:click=move |_| nav.update(NavState::navigate)>
                    <span class="brand-mark">"A"</span>
                    <span class="brand-name">"Auric"<span class="brand-accent">"Engineering"</span></span>
                </a>

                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .enumerate()
                        .map(|(index, link)| view! { <DesktopLink index=index link=*link nav=nav pathname=pathname/> })
                        .collect_view()}
                </div>

                <button
                    type="button"
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || nav.with(|s| s.mobile_open).to_string()
                    on:click=move |_| nav.update(NavState::toggle_mobile)
                >
                    <Show when=move || nav.with(|s| s.mobile_open) fallback=|| view! { <span>"☰"</span> }>
                        <span>"✕"</span>
                    </Show>
                </button>
            </div>

            <Show when=move || nav.with(|s| s.mobile_open)>
                <MobileMenu nav=nav pathname=pathname/>
            </Show>
        </nav>
    }
}

fn link_class(path: &'static str, pathname: Memo<String>) -> impl Fn() -> &'static str {
    move || {
        if pathname.with(|current| is_active(path, current)) {
            "nav-link active"
        } else {
            "nav-link"
        }
    }
}

#[component]
fn DesktopLink(index: usize, link: NavLink, nav: RwSignal<NavState>, pathname: Memo<String>) -> impl IntoView {
    match link {
        NavLink::Page(item) => view! {
            <a href=item.path class=link_class(item.path, pathname) on:click=move |_| nav.update(NavState::navigate)>
                {item.label}
            </a>
        }
        .into_view(),
        NavLink::Dropdown { label, categories } => {
            let paths = link.paths();
            let section_active = move || pathname.with(|current| paths.iter().any(|p| is_active(p, current)));
            view! {
                <div
                    class="nav-dropdown"
                    on:mouseenter=move |_| nav.update(|s| s.hover_dropdown(index))
                    on:mouseleave=move |_| nav.update(NavState::leave_dropdown)
                >
                    <button
                        type="button"
                        class=move || if section_active() { "nav-link active" } else { "nav-link" }
                        aria-expanded=move || nav.with(|s| s.is_open(index)).to_string()
                        on:click=move |_| nav.update(|s| s.toggle_dropdown(index))
                    >
                        {label}
                        <span class="caret">"▾"</span>
                    </button>
                    <Show when=move || nav.with(|s| s.is_open(index))>
                        <div class="dropdown-panel">
                            <DropdownCategories categories=categories nav=nav pathname=pathname/>
                        </div>
                    </Show>
                </div>
            }
            .into_view()
        }
    }
}

#[component]
fn DropdownCategories(
    categories: &'static [NavCategory],
    nav: RwSignal<NavState>,
    pathname: Memo<String>,
) -> impl IntoView {
    categories
        .iter()
        .map(|category| {
            view! {
                <div class="dropdown-category">
                    <h4>{category.label}</h4>
                    <ul>
                        {category
                            .items
                            .iter()
                            .map(|item| view! {
                                <li>
                                    <a
                                        href=item.path
                                        class=link_class(item.path, pathname)
                                        on:click=move |_| nav.update(NavState::navigate)
                                    >
                                        {item.label}
                                    </a>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            }
        })
        .collect_view()
}

#[component]
fn MobileMenu(nav: RwSignal<NavState>, pathname: Memo<String>) -> impl IntoView {
    view! {
        <div class="mobile-menu">
            {NAV_LINKS
                .iter()
                .enumerate()
                .map(|(index, link)| match *link {
                    NavLink::Page(item) => view! {
                        <a href=item.path class=link_class(item.path, pathname) on:click=move |_| nav.update(NavState::navigate)>
                            {item.label}
                        </a>
                    }
                    .into_view(),
                    NavLink::Dropdown { label, categories } => view! {
                        <div class="mobile-dropdown">
                            <button type="button" class="nav-link" on:click=move |_| nav.update(|s| s.toggle_dropdown(index))>
                                {label}
                                <span class="caret">{move || if nav.with(|s| s.is_open(index)) { "▴" } else { "▾" }}</span>
                            </button>
                            <Show when=move || nav.with(|s| s.is_open(index))>
                                <DropdownCategories categories=categories nav=nav pathname=pathname/>
                            </Show>
                        </div>
                    }
                    .into_view(),
                })
                .collect_view()}
        </div>
    }
}
