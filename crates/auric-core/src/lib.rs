//! Auric Engineering Site Core
//!
//! Framework-free building blocks for the marketing site: map embed
//! resolution and visibility gating, navigation state, contact form
//! validation, viewport modelling and the static catalog and company
//! content the pages render.

pub mod catalog;
pub mod contact;
pub mod content;
pub mod contrast;
pub mod map;
pub mod nav;
pub mod routes;
pub mod scroll;
pub mod viewport;

use thiserror::Error;

pub use catalog::{ProductCategory, ProductFamily, ProductItem};
pub use contact::{
    ContactField, ContactForm, ContactFormState, FieldError, NewsletterState, NewsletterStatus, SubmissionPhase,
    ValidationErrors,
};
pub use map::{
    resolve_embed_url, Coordinates, GateState, LocationReference, MapPresentation,
    ObserverOptions, ResolvedLocation, VisibilityGate,
};
pub use nav::{NavLink, NavState};
pub use viewport::{Particle, Viewport};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown product family: {0}")]
    UnknownProduct(String),

    #[error("Invalid colour: {0}")]
    InvalidColor(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
