//! Quality control page content

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Accent {
    Blue,
    Cyan,
}

impl Accent {
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Cyan => "accent-cyan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InspectionProcess {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub accent: Accent,
}

pub const INTRO: &str = "Rigorous testing, precision measurement, and comprehensive inspections ensure every component meets the highest international standards. Our quality-first approach guarantees reliability in every delivery.";

pub const HERO_BADGES: &[&str] = &["ISO 9001 Certified", "ASME Approved", "API Compliant"];

pub const PROCESSES_INTRO: &str = "Multi\u{2011}stage quality verification ensures every forged component and flange meets exacting specifications before delivery.";

pub const PROCESSES: &[InspectionProcess] = &[
    InspectionProcess {
        title: "Material Testing",
        description: "Comprehensive material analysis and verification",
        details: &["Spectroscopic analysis", "Chemical composition verification", "Hardness testing (HRC/HV)", "Tensile strength analysis"],
        accent: Accent::Blue,
    },
    InspectionProcess {
        title: "Dimensional Inspection",
        description: "Precision measurement of all components",
        details: &["CMM (Coordinate Measuring Machine)", "Digital calipers & micrometers", "Bore & thread inspection", "Surface finish verification"],
        accent: Accent::Cyan,
    },
    InspectionProcess {
        title: "NDT (Non-Destructive Testing)",
        description: "Advanced testing without component damage",
        details: &["Ultrasonic testing", "Magnetic particle inspection", "Radiography (X-ray)", "Eddy current testing"],
        accent: Accent::Blue,
    },
    InspectionProcess {
        title: "Pressure & Performance",
        description: "Functional testing under actual conditions",
        details: &["Hydrostatic pressure testing", "Leak detection", "Load performance verification", "Temperature cycling tests"],
        accent: Accent::Cyan,
    },
    InspectionProcess {
        title: "Documentation & Certification",
        description: "Complete traceability and compliance records",
        details: &["Material test certificates", "Inspection reports", "Third-party verification", "ISO compliance documentation"],
        accent: Accent::Blue,
    },
    InspectionProcess {
        title: "Final Quality Approval",
        description: "Rigorous final inspection before delivery",
        details: &["Final visual inspection", "Packaging inspection", "Shipment verification", "Customer specifications check"],
        accent: Accent::Cyan,
    },
];

pub const CERTIFICATIONS: &[&str] = &["ISO 9001", "ASME Certified", "API Approved", "ISO 17025 LAB"];

pub const QUALITY_SYSTEMS: &[&str] = &[
    "ISO 9001:2015 Quality Management",
    "ISO 17025 Laboratory Accreditation",
    "ISO 45001 Occupational Health & Safety",
];

pub const PRODUCT_STANDARDS: &[&str] = &[
    "ASME B16.5 Flange Standards",
    "API 6A Wellhead Equipment",
    "ASTM Material Specifications",
];

pub const CLOSING_HEADING: &str = "Quality Assured Every Step";

pub const CLOSING_TEXT: &str = "From raw material verification to final inspection, we maintain rigorous quality standards. Every product is tested and certified for performance and compliance.";
