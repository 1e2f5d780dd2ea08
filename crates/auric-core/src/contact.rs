//! Contact form model and validation

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?\d{7,15}$").expect("valid regex"));

/// Simulated request time before a submission succeeds.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// How long the success banner stays up.
pub const SUCCESS_BANNER: Duration = Duration::from_millis(4000);

pub const SUBJECTS: &[&str] = &[
    "General Inquiry",
    "Product Information",
    "Technical Support",
    "Business Partnership",
    "Quality Assurance",
    "Investor Relations",
];

pub fn is_valid_email(email: &str) -> bool {
    !email.trim().is_empty() && EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    !phone.trim().is_empty() && PHONE_PATTERN.is_match(phone)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Company,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Form control name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Company => "company",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email Address",
            ContactField::Phone => "Phone Number",
            ContactField::Company => "Company Name",
            ContactField::Subject => "Subject",
            ContactField::Message => "Your Message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, ContactField::Company)
    }

    /// Label as shown on the form, with a single ` *` on required fields.
    pub fn form_label(&self) -> String {
        if self.is_required() {
            format!("{} *", self.label())
        } else {
            self.label().to_string()
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Full Name is required.")]
    NameRequired,

    #[error("Valid Email is required.")]
    InvalidEmail,

    #[error("Valid Phone Number is required.")]
    InvalidPhone,

    #[error("Please select a subject.")]
    SubjectRequired,

    #[error("Message is required.")]
    MessageRequired,
}

/// Field errors keyed by field, in form order.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<ContactField, FieldError>);

impl ValidationErrors {
    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn clear(&mut self, field: ContactField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub company: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Company => &self.company,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Company => self.company = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = BTreeMap::new();

        if self.name.trim().is_empty() {
            errors.insert(ContactField::Name, FieldError::NameRequired);
        }
        if !is_valid_email(&self.email) {
            errors.insert(ContactField::Email, FieldError::InvalidEmail);
        }
        if !is_valid_phone(&self.phone) {
            errors.insert(ContactField::Phone, FieldError::InvalidPhone);
        }
        if self.subject.trim().is_empty() {
            errors.insert(ContactField::Subject, FieldError::SubjectRequired);
        }
        if self.message.trim().is_empty() {
            errors.insert(ContactField::Message, FieldError::MessageRequired);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// Everything the contact page renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub errors: ValidationErrors,
    pub phase: SubmissionPhase,
}

impl ContactFormState {
    /// Update a field and clear its error.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    /// Validate and, when valid, enter `Submitting`. Returns whether the
    /// caller should start the submission timer.
    pub fn submit(&mut self) -> bool {
        if self.phase == SubmissionPhase::Submitting {
            return false;
        }
        match self.form.validate() {
            Ok(()) => {
                self.errors = ValidationErrors::default();
                self.phase = SubmissionPhase::Submitting;
                info!(subject = %self.form.subject, "Contact form submitted");
                true
            }
            Err(errors) => {
                debug!(count = errors.len(), "Contact form rejected");
                self.errors = errors;
                false
            }
        }
    }

    /// The simulated request finished: reset the form and show the banner.
    pub fn complete(&mut self) {
        if self.phase != SubmissionPhase::Submitting {
            return;
        }
        self.form = ContactForm::default();
        self.phase = SubmissionPhase::Succeeded;
    }

    pub fn dismiss_success(&mut self) {
        if self.phase == SubmissionPhase::Succeeded {
            self.phase = SubmissionPhase::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn show_success(&self) -> bool {
        self.phase == SubmissionPhase::Succeeded
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewsletterStatus {
    #[default]
    Idle,
    Subscribed,
    Invalid,
}

/// Footer newsletter box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterState {
    pub email: String,
    pub status: NewsletterStatus,
}

impl NewsletterState {
    /// Typing replaces the address and hides any previous notice.
    pub fn edit(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.status = NewsletterStatus::Idle;
    }

    /// Accept the address if it passes the contact email rule, clearing the
    /// input. Returns whether it was accepted.
    pub fn subscribe(&mut self) -> bool {
        if is_valid_email(&self.email) {
            info!("Newsletter signup received");
            self.email.clear();
            self.status = NewsletterStatus::Subscribed;
            true
        } else {
            debug!("Newsletter address rejected");
            self.status = NewsletterStatus::Invalid;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Asha Patel".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+919876543210".to_string(),
            company: String::new(),
            subject: "Product Information".to_string(),
            message: "Need a quote for 6\" weld neck flanges.".to_string(),
        }
    }

    #[test]
    fn test_email_rule() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("   "));
    }

    #[test]
    fn test_phone_rule() {
        assert!(is_valid_phone("+9107434905"));
        assert!(is_valid_phone("1234567"));
        assert!(!is_valid_phone("123456"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("+91 07434905789"));
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(ContactField::Name).unwrap().to_string(), "Full Name is required.");
        assert_eq!(errors.get(ContactField::Email).unwrap().to_string(), "Valid Email is required.");
        assert_eq!(errors.get(ContactField::Phone).unwrap().to_string(), "Valid Phone Number is required.");
        assert_eq!(errors.get(ContactField::Subject).unwrap().to_string(), "Please select a subject.");
        assert_eq!(errors.get(ContactField::Message).unwrap().to_string(), "Message is required.");
        assert_eq!(errors.get(ContactField::Company), None);
    }

    #[test]
    fn test_edit_clears_field_error() {
        let mut state = ContactFormState::default();
        assert!(!state.submit());
        assert!(state.errors.get(ContactField::Name).is_some());

        state.edit(ContactField::Name, "Asha");
        assert_eq!(state.errors.get(ContactField::Name), None);
        assert!(state.errors.get(ContactField::Email).is_some());
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut state = ContactFormState {
            form: valid_form(),
            ..ContactFormState::default()
        };

        assert!(state.submit());
        assert!(state.is_submitting());
        assert!(!state.submit(), "double submit must be ignored");

        state.complete();
        assert!(state.show_success());
        assert_eq!(state.form, ContactForm::default());

        state.dismiss_success();
        assert_eq!(state.phase, SubmissionPhase::Idle);
    }

    #[test]
    fn test_complete_without_submit_is_ignored() {
        let mut state = ContactFormState {
            form: valid_form(),
            ..ContactFormState::default()
        };
        state.complete();
        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert_eq!(state.form, valid_form());
    }

    #[test]
    fn test_required_labels_carry_one_marker() {
        for field in ContactField::ALL {
            let label = field.form_label();
            assert_eq!(label.matches('*').count(), usize::from(field.is_required()), "{label}");
            assert!(!field.label().contains('*'), "{}", field.label());
        }
        assert_eq!(ContactField::Name.form_label(), "Full Name *");
        assert_eq!(ContactField::Company.form_label(), "Company Name");
    }

    #[test]
    fn test_newsletter_accepts_and_clears() {
        let mut newsletter = NewsletterState::default();
        newsletter.edit("buyer@example.com");
        assert!(newsletter.subscribe());
        assert_eq!(newsletter.status, NewsletterStatus::Subscribed);
        assert!(newsletter.email.is_empty());
    }

    #[test]
    fn test_newsletter_rejects_bad_address_and_keeps_it() {
        let mut newsletter = NewsletterState::default();
        newsletter.edit("not-an-email");
        assert!(!newsletter.subscribe());
        assert_eq!(newsletter.status, NewsletterStatus::Invalid);
        assert_eq!(newsletter.email, "not-an-email");

        newsletter.edit("not-an-email@");
        assert_eq!(newsletter.status, NewsletterStatus::Idle);
    }

    #[test]
    fn test_newsletter_empty_address_is_invalid() {
        let mut newsletter = NewsletterState::default();
        assert!(!newsletter.subscribe());
        assert_eq!(newsletter.status, NewsletterStatus::Invalid);
    }
}
