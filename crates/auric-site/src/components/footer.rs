//! Site footer

use auric_core::catalog::FAMILIES;
use auric_core::contact::{FieldError, NewsletterState, NewsletterStatus};
use auric_core::content::company::{
    ContactKind, FooterLink, COMPANY_LINKS, COMPANY_NAME, FOOTER_BLURB, FOOTER_CONTACT, FOOTER_STATS,
    LEGAL_LINKS, QUICK_LINKS, SOCIAL_LINKS, WORKING_HOURS,
};
use auric_core::routes;
use chrono::Datelike;
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-about">
                    <a href=routes::HOME class="brand">
                        <span class="brand-mark">"A"</span>
                        <span class="brand-name">{COMPANY_NAME}</span>
                    </a>
                    <p>{FOOTER_BLURB}</p>
                    <Newsletter/>
                    <ul class="social-links">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| view! {
                                <li>
                                    <a href=link.href target="_blank" rel="noopener noreferrer" aria-label=link.label>
                                        {link.label}
                                    </a>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <LinkColumn title="Quick Links" links=QUICK_LINKS/>
                <LinkColumn title="Company" links=COMPANY_LINKS/>

                <div class="footer-column">
                    <h4>"Products"</h4>
                    <ul>
                        {FAMILIES
                            .iter()
                            .map(|family| view! {
                                <li><a href=routes::product_path(family.slug)>{family.title}</a></li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>"Get In Touch"</h4>
                    <ul class="footer-contact">
                        {FOOTER_CONTACT
                            .iter()
                            .map(|(kind, text, href)| {
                                let icon = match kind {
                                    ContactKind::Address => "📍",
                                    ContactKind::Phone => "📞",
                                    ContactKind::Email => "✉",
                                    ContactKind::Hours => "🕐",
                                };
                                view! {
                                    <li>
                                        <span class="icon">{icon}</span>
                                        {match href {
                                            Some(href) => view! { <a href=*href>{*text}</a> }.into_view(),
                                            None => view! { <span>{*text}</span> }.into_view(),
                                        }}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <h4>"Working Hours"</h4>
                    <dl class="footer-hours">
                        {WORKING_HOURS
                            .iter()
                            .map(|(days, hours)| view! { <dt>{*days}</dt><dd>{*hours}</dd> })
                            .collect_view()}
                    </dl>
                </div>
            </div>

            <div class="container footer-stats">
                {FOOTER_STATS
                    .iter()
                    .map(|stat| view! {
                        <div class="stat-card">
                            <div class="stat-value">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="footer-bottom">
                <div class="container">
                    <p>"© "{year}" "{COMPANY_NAME}". All rights reserved."</p>
                    <ul class="legal-links">
                        {LEGAL_LINKS.iter().map(|label| view! { <li><a href="#">{*label}</a></li> }).collect_view()}
                    </ul>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(title: &'static str, links: &'static [FooterLink]) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h4>{title}</h4>
            <ul>
                {links.iter().map(|link| view! { <li><a href=link.href>{link.label}</a></li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn Newsletter() -> impl IntoView {
    let newsletter = create_rw_signal(NewsletterState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        newsletter.update(|n| {
            n.subscribe();
        });
    };

    view! {
        <form class="newsletter" on:submit=on_submit>
            <h4>"Stay Updated"</h4>
            <div class="newsletter-row">
                <input
                    type="email"
                    placeholder="Enter your email"
                    on:input=move |ev| newsletter.update(|n| n.edit(event_target_value(&ev)))
                    prop:value=move || newsletter.with(|n| n.email.clone())
                />
                <button type="submit" class="btn btn-primary">"Subscribe"</button>
            </div>
            {move || match newsletter.with(|n| n.status) {
                NewsletterStatus::Idle => None,
                NewsletterStatus::Subscribed => Some(view! { <p class="form-note success">"Thanks for subscribing!"</p> }),
                NewsletterStatus::Invalid => Some(view! {
                    <p class="form-note error">{FieldError::InvalidEmail.to_string()}</p>
                }),
            }}
        </form>
    }
}
