//! Site-wide components

mod cards;
mod footer;
mod map_embed;
mod nav;
mod particles;
mod scroll_to_top;

pub use cards::*;
pub use footer::Footer;
pub use map_embed::MapEmbed;
pub use nav::SiteNav;
pub use particles::ParticleField;
pub use scroll_to_top::ScrollToTop;
