//! Company identity, contact details, home and about page copy

use serde::Serialize;

use super::{Feature, Stat};
use crate::map::LocationReference;
use crate::routes;

pub const COMPANY_NAME: &str = "Auric Engineering";

pub const HERO_EYEBROW: &str = "Leading Manufacturer in India";

pub const HERO_LEAD: &str = "Leading manufacturer and supplier of premium flanges, buttwelded fittings, and forged fittings. Delivering excellence from Rajkot, India to the world.";

pub const HERO_IMAGE: &str = "https://ritecheng.com/wp-content/uploads/2021/03/pipelines-and-industrial-services.jpg";

pub const HERO_BADGES: &[&str] = &["ISO Certified", "Custom Solutions", "Global Delivery"];

/// Home hero particle counts for desktop and mobile.
pub const HERO_PARTICLES: (usize, usize) = (20, 12);

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "25+", label: "Years Experience" },
    Stat { value: "500+", label: "Happy Clients" },
    Stat { value: "1000+", label: "Projects Done" },
    Stat { value: "99%", label: "Success Rate" },
];

pub const WHY_CHOOSE: &[Feature] = &[
    Feature {
        title: "Premium Quality",
        description: "ISO-certified manufacturing with rigorous quality control.",
    },
    Feature {
        title: "Reliable Solutions",
        description: "Trusted by industry leaders for durability and consistency.",
    },
    Feature {
        title: "Custom Engineering",
        description: "Tailored solutions built to meet your unique industrial needs.",
    },
];

pub const ABOUT_INTRO: &str = "Auric Engineering, the company is concentrating on piping solutions for industrial companies. We are located in India, equipped with multi-base inventory and manufacturing facilities in Rajkot India.";

pub const ABOUT_STOCK: &str = "We have large in-stock of different material with carbon, alloy, and stainless steel flange and raw material flange plate, which means we can manufacture your specific requirements in the urgent period.";

/// About page particle counts for desktop and mobile.
pub const ABOUT_PARTICLES: (usize, usize) = (25, 15);

pub const MATERIAL_STANDARDS: &[&str] = &["ASTM A105", "ASTM A182", "ASTM A350", "ASTM A694", "ASTM A516"];

pub const MANUFACTURING_STANDARDS: &[&str] = &["ASME B16.5", "ASME B16.47", "ASME B16.36"];

pub const ADVANTAGES: &[Feature] = &[
    Feature {
        title: "Quality of the Product",
        description: "We ensure that the quality standards are met. As per customers requirement, we supply products of standard quality after going through various checking, testing, inspection & certification process.",
    },
    Feature {
        title: "Quality Raw Materials",
        description: "All material used for manufacturing of fittings are tested for chemical & mechanical properties. They are identified & fully traceable from raw material stage to final product.",
    },
    Feature {
        title: "Checks & Controls",
        description: "The system controls the quality of all incoming materials as per the raw material test certificate. Randomly checking in each size for chemical and physical properties at Government approved laboratory.",
    },
    Feature {
        title: "Testing & Inspection",
        description: "Auric maintains strict dimensional standards by inspecting and testing equipment with strict adherence to the quality manual. All finished material is inspected for quality after the first piece of production.",
    },
    Feature {
        title: "Leading Supplier",
        description: "As ISO 9001:2015 Certified Company, we are the leading manufacturer and suppliers of all types of high quality Stainless Steel, Pipe Fittings, Butt weld and Forged Fittings and Flanges.",
    },
    Feature {
        title: "Certification",
        description: "Fittings are supplied with test certificates as approved QAP which includes chemical composition, mechanical properties, hardness details of heat treatment and stamping details.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContactKind {
    Address,
    Phone,
    Email,
    Hours,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub title: &'static str,
    pub text: &'static str,
    pub secondary: Option<&'static str>,
}

impl ContactItem {
    /// `tel:`/`mailto:` target for the primary text, if it has one.
    pub fn href(&self) -> Option<String> {
        match self.kind {
            ContactKind::Phone => Some(format!("tel:{}", self.text.replace(' ', ""))),
            ContactKind::Email => Some(format!("mailto:{}", self.text)),
            ContactKind::Address | ContactKind::Hours => None,
        }
    }
}

pub const CONTACT_ITEMS: &[ContactItem] = &[
    ContactItem {
        kind: ContactKind::Address,
        title: "Address",
        text: "Udgam School, 3,Auric Engineering Aadarsh City -A Beside Punit Nagar, 80 Feet Rd, B/h, Rajkot, Gujarat 360004",
        secondary: None,
    },
    ContactItem {
        kind: ContactKind::Phone,
        title: "Phone",
        text: "+91 07434905789",
        secondary: Some("+91 07434905789"),
    },
    ContactItem {
        kind: ContactKind::Email,
        title: "Email",
        text: "info@manufacturing.com",
        secondary: Some("sales@manufacturing.com"),
    },
    ContactItem {
        kind: ContactKind::Hours,
        title: "Working Hours",
        text: "Mon - Fri: 8:00 AM - 8:00 PM, Sat: 9:00 AM - 6:00 PM, Sun: 10:00 AM - 4:00 PM",
        secondary: None,
    },
];

/// Google Maps place link for the Rajkot works.
pub const FACILITY_MAP_URL: &str = "https://www.google.com/maps/place/Auric+Engineering+Rajkot/@22.2459909,70.7835601,17z/data=!4m14!1m7!3m6!1s0x3959cbdf19456397:0x8ae1246f1d7cb63e!2sAuric+Engineering+Rajkot!8m2!3d22.2458618!4d70.7854269!16s%2Fg%2F11q2yb4fss!3m5!1s0x3959cbdf19456397:0x8ae1246f1d7cb63e!8m2!3d22.2458618!4d70.7854269!16s%2Fg%2F11q2yb4fss?entry=ttu&g_ep=EgoyMDI1MTAyOS4yIKXMDSoASAFQAw%3D%3D";

pub const FACILITY_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir//Udgam+School,+3,Auric+Engineering+Aadarsh+City+-A+Beside+Punit+Nagar,+80+Feet+Rd,+B%2Fh,+Rajkot,+Gujarat+360004/@21.9698156,70.9313563,9.79z/data=!4m8!4m7!1m0!1m5!1m1!1s0x3959cbdf19456397:0x8ae1246f1d7cb63e!2m2!1d70.7854269!2d22.2458618?entry=ttu&g_ep=EgoyMDI1MTAyOS4yIKXMDSoASAFQAw%3D%3D";

/// Map reference used by the contact page.
pub fn facility_location() -> LocationReference {
    LocationReference::from_url(FACILITY_MAP_URL).with_directions(FACILITY_DIRECTIONS_URL)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const FOOTER_BLURB: &str = "Your trusted partner in forged steel solutions. Delivering strength, precision, and quality for industries worldwide since 1972.";

pub const QUICK_LINKS: &[FooterLink] = &[
    FooterLink { label: "Home", href: routes::HOME },
    FooterLink { label: "Manufacture", href: routes::MANUFACTURE },
    FooterLink { label: "Quality Control", href: routes::QUALITY_CONTROL },
    FooterLink { label: "Manufacture Capacity", href: routes::MANUFACTURING_CAPACITY },
];

pub const COMPANY_LINKS: &[FooterLink] = &[
    FooterLink { label: "About Us", href: routes::ABOUT },
    FooterLink { label: "Contact", href: routes::CONTACT },
];

pub const SOCIAL_LINKS: &[FooterLink] = &[
    FooterLink { label: "Facebook", href: "#" },
    FooterLink { label: "Twitter", href: "#" },
    FooterLink {
        label: "LinkedIn",
        href: "https://in.linkedin.com/company/auric-engineering-pvt-ltd---india",
    },
];

pub const LEGAL_LINKS: &[&str] = &["Privacy Policy", "Terms of Service", "Sitemap"];

pub const FOOTER_STATS: &[Stat] = &[
    Stat { value: "25+", label: "Years Experience" },
    Stat { value: "500+", label: "Happy Clients" },
    Stat { value: "99%", label: "Quality Rate" },
];

/// Head office details listed in the footer.
pub const FOOTER_CONTACT: &[(ContactKind, &str, Option<&str>)] = &[
    (ContactKind::Address, "8-4-368/A SANTHNAGAR HYDERABAD TG IN 500018", None),
    (ContactKind::Phone, "040 2335 3898", Some("tel:04023353898")),
    (ContactKind::Email, "auricengg@hotmail.com", Some("mailto:auricengg@hotmail.com")),
];

pub const WORKING_HOURS: &[(&str, &str)] = &[
    ("Mon - Fri", "8:00 AM - 6:00 PM"),
    ("Saturday", "9:00 AM - 2:00 PM"),
    ("Sunday", "Closed"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{GateState, MapPresentation, ResolvedLocation};

    #[test]
    fn test_contact_hrefs() {
        let phone = CONTACT_ITEMS.iter().find(|i| i.kind == ContactKind::Phone).unwrap();
        assert_eq!(phone.href().as_deref(), Some("tel:+9107434905789"));
        let address = CONTACT_ITEMS.iter().find(|i| i.kind == ContactKind::Address).unwrap();
        assert_eq!(address.href(), None);
    }

    #[test]
    fn test_facility_map_embeds_coordinates() {
        let resolved = ResolvedLocation::resolve(&facility_location());
        let src = resolved.embed_url.clone().unwrap();
        assert!(src.starts_with("https://www.google.com/maps?q=22.2459909%2C70.7835601"));
        assert_eq!(
            resolved.presentation(GateState::Visible, true),
            MapPresentation::Fallback {
                href: FACILITY_DIRECTIONS_URL.to_string()
            }
        );
    }

    #[test]
    fn test_footer_links_are_routable() {
        for link in QUICK_LINKS.iter().chain(COMPANY_LINKS) {
            assert!(routes::is_known_path(link.href), "{}", link.href);
        }
    }
}
