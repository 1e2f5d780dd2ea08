//! Contact page: details, enquiry form and the facility map

use auric_core::contact::{ContactField, ContactFormState, SUBJECTS, SUBMIT_DELAY, SUCCESS_BANNER};
use auric_core::content::company::{facility_location, ContactKind, CONTACT_ITEMS};
use leptos::*;

use crate::components::*;

const INTRO: &str = "Get in touch with our team for inquiries, support, or business partnerships. We also welcome media inquiries, job applications, and collaboration proposals.";

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <PageHero title="Contact Us" lead=INTRO/>

        <section class="section">
            <div class="container contact-grid">
                <div class="contact-info">
                    <h2>"Get In Touch"</h2>
                    <p>"Reach out to us for customer service, supplier relations, media interviews, and any other queries."</p>
                    <ContactCards/>
                </div>
                <ContactForm/>
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <SectionHeading title="Find Us" subtitle="Our manufacturing facility in Rajkot, Gujarat"/>
                <MapEmbed location=facility_location() height=480 class="rounded"/>
            </div>
        </section>
    }
}

#[component]
fn ContactCards() -> impl IntoView {
    CONTACT_ITEMS
        .iter()
        .map(|item| {
            let icon = match item.kind {
                ContactKind::Address => "📍",
                ContactKind::Phone => "📞",
                ContactKind::Email => "✉",
                ContactKind::Hours => "🕐",
            };
            let primary = match item.href() {
                Some(href) => view! { <a href=href>{item.text}</a> }.into_view(),
                None => view! { <span>{item.text}</span> }.into_view(),
            };
            view! {
                <div class="card contact-card">
                    <span class="card-icon">{icon}</span>
                    <div>
                        <h3>{item.title}</h3>
                        <p>{primary}</p>
                        {item.secondary.map(|text| view! { <p class="secondary">{text}</p> })}
                    </div>
                </div>
            }
        })
        .collect_view()
}

#[component]
fn ContactForm() -> impl IntoView {
    let state = create_rw_signal(ContactFormState::default());

    let value = move |field: ContactField| move || state.with(|s| s.form.get(field).to_string());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.try_update(ContactFormState::submit).unwrap_or(false) {
            return;
        }
        set_timeout(
            move || {
                state.update(ContactFormState::complete);
                set_timeout(move || state.update(ContactFormState::dismiss_success), SUCCESS_BANNER);
            },
            SUBMIT_DELAY,
        );
    };

    view! {
        <form class="card contact-form" on:submit=on_submit novalidate=true>
            <Show when=move || state.with(ContactFormState::show_success)>
                <div class="form-banner success" role="status">
                    "Thank you! Your message has been sent. We'll get back to you shortly."
                </div>
            </Show>

            <div class="form-row">
                <FieldRow field=ContactField::Name state=state>
                    <input
                        id="name"
                        type="text"
                        placeholder="Your full name"
                        prop:value=value(ContactField::Name)
                        on:input=move |ev| state.update(|s| s.edit(ContactField::Name, event_target_value(&ev)))
                    />
                </FieldRow>
                <FieldRow field=ContactField::Email state=state>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@company.com"
                        prop:value=value(ContactField::Email)
                        on:input=move |ev| state.update(|s| s.edit(ContactField::Email, event_target_value(&ev)))
                    />
                </FieldRow>
            </div>

            <div class="form-row">
                <FieldRow field=ContactField::Phone state=state>
                    <input
                        id="phone"
                        type="tel"
                        placeholder="+91 0000000000"
                        prop:value=value(ContactField::Phone)
                        on:input=move |ev| state.update(|s| s.edit(ContactField::Phone, event_target_value(&ev)))
                    />
                </FieldRow>
                <FieldRow field=ContactField::Company state=state>
                    <input
                        id="company"
                        type="text"
                        placeholder="Company name (optional)"
                        prop:value=value(ContactField::Company)
                        on:input=move |ev| state.update(|s| s.edit(ContactField::Company, event_target_value(&ev)))
                    />
                </FieldRow>
            </div>

            <FieldRow field=ContactField::Subject state=state>
                <select
                    id="subject"
                    prop:value=value(ContactField::Subject)
                    on:change=move |ev| state.update(|s| s.edit(ContactField::Subject, event_target_value(&ev)))
                >
                    <option value="">"Select a subject"</option>
                    {SUBJECTS.iter().map(|subject| view! { <option value=*subject>{*subject}</option> }).collect_view()}
                </select>
            </FieldRow>

            <FieldRow field=ContactField::Message state=state>
                <textarea
                    id="message"
                    rows="5"
                    placeholder="How can we help?"
                    prop:value=value(ContactField::Message)
                    on:input=move |ev| state.update(|s| s.edit(ContactField::Message, event_target_value(&ev)))
                ></textarea>
            </FieldRow>

            <button type="submit" class="btn btn-primary btn-block" disabled=move || state.with(ContactFormState::is_submitting)>
                {move || if state.with(ContactFormState::is_submitting) { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}

/// Label, control and the field's validation message.
#[component]
fn FieldRow(
    field: ContactField,
    state: RwSignal<ContactFormState>,
    children: Children,
) -> impl IntoView {
    let error = move || state.with(|s| s.errors.get(field));

    view! {
        <div class=move || if error().is_some() { "form-field has-error" } else { "form-field" }>
            <label for=field.as_str()>{field.form_label()}</label>
            {children()}
            {move || error().map(|e| view! { <p class="field-error">{e.to_string()}</p> })}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render_form() -> String {
        leptos::ssr::render_to_string(|| view! { <ContactForm/> }).to_string()
    }

    #[test]
    fn test_required_labels_show_one_asterisk() {
        let html = render_form();
        for field in ContactField::ALL {
            assert!(html.contains(&field.form_label()), "missing label {}", field.form_label());
        }
        assert!(!html.contains("* *"));
        let required = ContactField::ALL.iter().filter(|f| f.is_required()).count();
        assert_eq!(html.matches('*').count(), required);
    }

    #[test]
    fn test_form_starts_without_errors_or_banner() {
        let html = render_form();
        assert!(!html.contains("field-error"));
        assert!(!html.contains("form-banner"));
        assert!(html.contains("Send Message"));
    }
}
