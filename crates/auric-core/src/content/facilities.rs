//! Manufacturing capacity: plant facilities, headline figures and equipment

use serde::Serialize;

use super::{group_thousands, Stat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FacilityTab {
    #[default]
    Manufacturing,
    Quality,
    Storage,
}

impl FacilityTab {
    pub const ALL: [FacilityTab; 3] = [FacilityTab::Manufacturing, FacilityTab::Quality, FacilityTab::Storage];

    pub fn label(&self) -> &'static str {
        match self {
            FacilityTab::Manufacturing => "Manufacturing",
            FacilityTab::Quality => "Quality",
            FacilityTab::Storage => "Storage",
        }
    }

    pub fn facilities(&self) -> &'static [Facility] {
        match self {
            FacilityTab::Manufacturing => MANUFACTURING,
            FacilityTab::Quality => QUALITY,
            FacilityTab::Storage => STORAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Facility {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub specs: &'static [&'static str],
    pub area_sq_ft: u32,
}

impl Facility {
    pub fn area_label(&self) -> String {
        format!("{} sq ft", group_thousands(u64::from(self.area_sq_ft)))
    }
}

pub const INTRO: &str = "State-of-the-art manufacturing facilities equipped with cutting-edge technology and advanced automation systems for precision engineering excellence.";

const MANUFACTURING: &[Facility] = &[
    Facility {
        name: "Main Manufacturing Unit",
        image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=800&h=600&fit=crop",
        description: "State-of-the-art manufacturing facility with advanced automation systems",
        specs: &["Production Capacity: 50,000 units/month", "Automation Level: 85%", "Quality Control: ISO 9001:2015"],
        area_sq_ft: 25_000,
    },
    Facility {
        name: "Forging Department",
        image: "https://media.istockphoto.com/id/1353796808/photo/young-diverse-team-of-automotive-engineers-working-in-office-at-car-factory-industrial.jpg?s=612x612&w=0&k=20&c=QSFNB6lvgP9wRTntzh1xesQ_jJB2OQP42nLPshXuG-Q=",
        description: "Specialized forging operations with hydraulic and mechanical presses",
        specs: &["Press Capacity: 2000-8000 tons", "Temperature Control: ±10°C", "Material Handling: Automated"],
        area_sq_ft: 15_000,
    },
    Facility {
        name: "Machining Center",
        image: "https://media.istockphoto.com/id/1275786906/photo/smart-industry-robot-arms-for-digital-factory-production-technology.jpg?s=612x612&w=0&k=20&c=XKtjLs564SuaKCXtfRZYyq4A7JD1cGBNhRLYO3PAjbg=",
        description: "Precision machining with CNC technology and quality assurance",
        specs: &["CNC Machines: 25 units", "Tolerance: ±0.01mm", "Surface Finish: Ra 0.8"],
        area_sq_ft: 20_000,
    },
];

const QUALITY: &[Facility] = &[
    Facility {
        name: "Quality Control Lab",
        image: "https://media.istockphoto.com/id/1329665165/photo/factory-digitalization-with-information-lines-lying-through-the-high-tech-modern-electronics.jpg?s=612x612&w=0&k=20&c=shxeXxata9vvwKwg6RG0J0KII47g-EBcMPlcSkonbY8=",
        description: "Advanced testing and inspection facilities for product validation",
        specs: &["Testing Equipment: 50+ units", "Certification: NABL accredited", "Coverage: 100% inspection"],
        area_sq_ft: 8_000,
    },
    Facility {
        name: "Metallurgical Lab",
        image: "https://media.istockphoto.com/id/1648830115/video/timelapse-of-fully-automated-pcb-assembly-line-equipped-with-advanced-high-precision-robot.avif?s=640x640&k=20&c=BefEojFa6Ywy4BupJSiQ-DW9IdMCyd8Pvwi8J9N_t_E=",
        description: "Material analysis and characterization for quality assurance",
        specs: &["Microscopes: 10 units", "Spectrometers: 5 units", "Testing Standards: ASTM/ISO"],
        area_sq_ft: 5_000,
    },
];

const STORAGE: &[Facility] = &[
    Facility {
        name: "Raw Material Warehouse",
        image: "https://media.istockphoto.com/id/990083620/photo/forklift-handling-sugar-bags-for-stuffing-into-container-for-export.jpg?s=612x612&w=0&k=20&c=GdV8ZLDCVGqbDSR2Vxr7oeaNpMnej47F0h_XsDZR6mA=",
        description: "Organized storage for raw materials with inventory management",
        specs: &["Storage Capacity: 5000 tons", "Climate Control: Yes", "Security: 24/7 monitoring"],
        area_sq_ft: 30_000,
    },
    Facility {
        name: "Finished Goods Warehouse",
        image: "https://media.istockphoto.com/id/464219597/photo/various-sizes-steel-rods-and-iron-profiles-stacked-up.jpg?s=612x612&w=0&k=20&c=J8QLPsms7F3XTEsy9KUM0ERxxTlcgoUpP8msII80iC0=",
        description: "Efficient storage and dispatch system for finished products",
        specs: &["Storage Capacity: 10,000 units", "Loading Bays: 8 units", "Dispatch: Same day"],
        area_sq_ft: 35_000,
    },
];

/// Combined floor area of every listed facility.
pub fn total_area_sq_ft() -> u64 {
    FacilityTab::ALL
        .iter()
        .flat_map(|tab| tab.facilities())
        .map(|f| u64::from(f.area_sq_ft))
        .sum()
}

/// Headline figures. The total area is derived from the facility list.
pub fn capacity_stats() -> Vec<(String, &'static str, &'static str)> {
    vec![
        (
            format!("{} sq ft", group_thousands(total_area_sq_ft())),
            "Total Area",
            "Manufacturing footprint",
        ),
        ("12".to_string(), "Production Lines", "Active production units"),
        ("2,000 units".to_string(), "Daily Capacity", "Maximum output"),
        ("450+".to_string(), "Employees", "Skilled workforce"),
    ]
}

pub const EQUIPMENT_INTRO: &str = "Advanced machinery and technology for superior manufacturing capabilities.";

/// Equipment counts by category.
pub const EQUIPMENT: &[(Stat, &str)] = &[
    (Stat { value: "25", label: "CNC Machines" }, "Machining"),
    (Stat { value: "8", label: "Forging Presses" }, "Forging"),
    (Stat { value: "50+", label: "Quality Testing" }, "Inspection"),
    (Stat { value: "15", label: "Material Handling" }, "Logistics"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_area_matches_headline() {
        assert_eq!(total_area_sq_ft(), 138_000);
        assert_eq!(capacity_stats()[0].0, "138,000 sq ft");
    }

    #[test]
    fn test_tabs() {
        assert_eq!(FacilityTab::default(), FacilityTab::Manufacturing);
        assert_eq!(FacilityTab::Manufacturing.facilities().len(), 3);
        assert_eq!(FacilityTab::Quality.facilities().len(), 2);
        assert_eq!(FacilityTab::Storage.facilities().len(), 2);
    }

    #[test]
    fn test_area_label() {
        assert_eq!(FacilityTab::Storage.facilities()[1].area_label(), "35,000 sq ft");
    }
}
