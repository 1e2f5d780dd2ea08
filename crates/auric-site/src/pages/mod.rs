//! Site pages

mod about;
mod capacity;
mod contact;
mod financials;
mod home;
mod investor;
mod manufacture;
mod not_found;
mod product;
mod quality;
mod shareholding;

pub use about::{AboutPage, AboutSection};
pub use capacity::CapacityPage;
pub use contact::ContactPage;
pub use financials::FinancialsPage;
pub use home::HomePage;
pub use investor::InvestorPage;
pub use manufacture::ManufacturePage;
pub use not_found::NotFound;
pub use product::ProductPage;
pub use quality::QualityPage;
pub use shareholding::ShareholdingPage;
