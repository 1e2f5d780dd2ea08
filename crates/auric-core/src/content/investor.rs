//! Investor relations, financial reports and shareholding data

use serde::Serialize;

use super::Feature;
use crate::routes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn class(&self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

impl KeyMetric {
    /// Detail line shown when the metric is opened.
    pub fn comparison(&self) -> String {
        format!("{} vs previous", self.change)
    }
}

/// One tab of the company overview card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverviewTab {
    pub key: &'static str,
    pub label: &'static str,
    pub facts: &'static [(&'static str, &'static str)],
}

pub const INTRO: &str = "Transparent communication and strong financial performance for sustainable shareholder value creation and long-term growth.";

pub const QUICK_LINKS: &[(&str, &str)] = &[
    ("Financial Reports", routes::FINANCIALS),
    ("Shareholding Info", routes::SHAREHOLDING),
];

pub const OVERVIEW_DESCRIPTION: &str = "Leading manufacturer of precision forged products with a strong market presence and consistent growth trajectory.";

pub const OVERVIEW: &[OverviewTab] = &[
    OverviewTab {
        key: "overview",
        label: "Overview",
        facts: &[("Founded", "1995"), ("Employees", "450+"), ("Locations", "3"), ("Markets", "Global")],
    },
    OverviewTab {
        key: "financials",
        label: "Financials",
        facts: &[("Revenue", "₹250 Cr"), ("Growth", "+15%"), ("Profit", "₹45 Cr"), ("Margin", "18%")],
    },
    OverviewTab {
        key: "operations",
        label: "Operations",
        facts: &[
            ("Capacity", "50,000 units/month"),
            ("Utilization", "85%"),
            ("Exports", "40%"),
            ("Certifications", "4"),
        ],
    },
];

pub const KEY_METRICS: &[KeyMetric] = &[
    KeyMetric { label: "Market Cap", value: "₹1,200 Cr", change: "+12%", trend: Trend::Up },
    KeyMetric { label: "Revenue Growth", value: "15.2%", change: "+2.1%", trend: Trend::Up },
    KeyMetric { label: "Profit Margin", value: "18.5%", change: "+1.2%", trend: Trend::Up },
    KeyMetric { label: "ROE", value: "22.3%", change: "+3.1%", trend: Trend::Up },
    KeyMetric { label: "Debt Ratio", value: "0.35", change: "-0.05", trend: Trend::Down },
    KeyMetric { label: "Current Ratio", value: "2.1", change: "+0.2%", trend: Trend::Up },
];

pub const HIGHLIGHTS: &[(&str, Feature)] = &[
    (
        "📈",
        Feature {
            title: "Strong Financial Performance",
            description: "Consistent revenue growth and improving profitability margins",
        },
    ),
    (
        "🏆",
        Feature {
            title: "Market Leadership",
            description: "Leading position in forged products segment with expanding market share",
        },
    ),
    (
        "⚙️",
        Feature {
            title: "Operational Excellence",
            description: "High capacity utilization and efficient production processes",
        },
    ),
    (
        "🌍",
        Feature {
            title: "Global Expansion",
            description: "Growing international presence and export markets",
        },
    ),
];

// Financial reports

pub const FINANCIALS_INTRO: &str = "Comprehensive quarterly and annual data, key ratios, and downloadable reports.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuarterResult {
    pub quarter: u8,
    pub revenue: &'static str,
    pub profit: &'static str,
    pub growth: &'static str,
    pub margin: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnnualResult {
    pub year: u16,
    pub revenue: &'static str,
    pub profit: &'static str,
    pub growth: &'static str,
    pub margin: &'static str,
    pub assets: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RatioRating {
    Good,
    Excellent,
}

impl RatioRating {
    pub fn label(&self) -> &'static str {
        match self {
            RatioRating::Good => "Good",
            RatioRating::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyRatio {
    pub name: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub rating: RatioRating,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: &'static str,
    pub kind: &'static str,
    pub date: &'static str,
    pub size: &'static str,
    pub category: &'static str,
}

const fn q(quarter: u8, revenue: &'static str, profit: &'static str, growth: &'static str, margin: &'static str) -> QuarterResult {
    QuarterResult { quarter, revenue, profit, growth, margin }
}

pub const QUARTERLY: &[(u16, [QuarterResult; 4])] = &[
    (
        2024,
        [
            q(1, "₹58.2 Cr", "₹10.8 Cr", "+12.5%", "18.6%"),
            q(2, "₹62.1 Cr", "₹11.9 Cr", "+15.2%", "19.2%"),
            q(3, "₹65.8 Cr", "₹12.7 Cr", "+18.1%", "19.3%"),
            q(4, "₹68.9 Cr", "₹13.6 Cr", "+20.3%", "19.7%"),
        ],
    ),
    (
        2023,
        [
            q(1, "₹51.7 Cr", "₹9.2 Cr", "+8.3%", "17.8%"),
            q(2, "₹53.9 Cr", "₹9.8 Cr", "+10.1%", "18.2%"),
            q(3, "₹55.7 Cr", "₹10.3 Cr", "+11.2%", "18.5%"),
            q(4, "₹57.3 Cr", "₹10.9 Cr", "+12.8%", "19.0%"),
        ],
    ),
    (
        2022,
        [
            q(1, "₹47.6 Cr", "₹8.1 Cr", "+6.8%", "17.0%"),
            q(2, "₹49.2 Cr", "₹8.5 Cr", "+7.2%", "17.3%"),
            q(3, "₹50.8 Cr", "₹8.9 Cr", "+7.8%", "17.5%"),
            q(4, "₹52.4 Cr", "₹9.3 Cr", "+8.5%", "17.7%"),
        ],
    ),
];

pub const ANNUAL: &[AnnualResult] = &[
    AnnualResult { year: 2024, revenue: "₹255.0 Cr", profit: "₹49.0 Cr", growth: "+16.5%", margin: "19.2%", assets: "₹320.0 Cr" },
    AnnualResult { year: 2023, revenue: "₹218.6 Cr", profit: "₹40.2 Cr", growth: "+12.8%", margin: "18.4%", assets: "₹285.0 Cr" },
    AnnualResult { year: 2022, revenue: "₹194.0 Cr", profit: "₹34.1 Cr", growth: "+9.5%", margin: "17.6%", assets: "₹252.0 Cr" },
    AnnualResult { year: 2021, revenue: "₹177.1 Cr", profit: "₹29.8 Cr", growth: "+7.2%", margin: "16.8%", assets: "₹160.0 Cr" },
];

pub const KEY_RATIOS: &[KeyRatio] = &[
    KeyRatio {
        name: "Current Ratio",
        value: "2.1",
        change: "+0.2",
        rating: RatioRating::Good,
        description: "Measures ability to pay short-term obligations",
    },
    KeyRatio {
        name: "Debt-to-Equity",
        value: "0.35",
        change: "-0.05",
        rating: RatioRating::Excellent,
        description: "Lower ratio indicates less financial risk",
    },
    KeyRatio {
        name: "ROE",
        value: "22.3%",
        change: "+3.1%",
        rating: RatioRating::Excellent,
        description: "Return on shareholder equity",
    },
    KeyRatio {
        name: "ROA",
        value: "15.8%",
        change: "+2.2%",
        rating: RatioRating::Excellent,
        description: "Return on total assets",
    },
    KeyRatio {
        name: "Asset Turnover",
        value: "1.8",
        change: "+0.1",
        rating: RatioRating::Good,
        description: "Efficiency of asset utilization",
    },
    KeyRatio {
        name: "Inventory Turnover",
        value: "12.5",
        change: "+1.2",
        rating: RatioRating::Excellent,
        description: "How quickly inventory is sold",
    },
];

pub const REPORTS: &[Report] = &[
    Report { title: "Annual Report 2023-24", kind: "Annual", date: "2024-05-15", size: "8.5 MB", category: "Corporate" },
    Report { title: "Q4 FY24 Results", kind: "Quarterly", date: "2024-02-28", size: "2.1 MB", category: "Performance" },
    Report { title: "Q3 FY24 Results", kind: "Quarterly", date: "2024-01-15", size: "2.0 MB", category: "Performance" },
];

/// Year and quarter picked in the quarterly results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuarterSelection {
    pub year: u16,
    pub quarter: u8,
}

impl Default for QuarterSelection {
    fn default() -> Self {
        Self { year: 2024, quarter: 4 }
    }
}

impl QuarterSelection {
    pub fn years() -> impl Iterator<Item = u16> {
        QUARTERLY.iter().map(|(year, _)| *year)
    }

    /// Results for the selection, `None` if the year has no data.
    pub fn result(&self) -> Option<&'static QuarterResult> {
        QUARTERLY
            .iter()
            .find(|(year, _)| *year == self.year)
            .and_then(|(_, quarters)| quarters.iter().find(|r| r.quarter == self.quarter))
    }

    /// Switch year, ignoring years without data.
    pub fn select_year(&mut self, year: u16) {
        if Self::years().any(|y| y == year) {
            self.year = year;
        }
    }

    pub fn select_quarter(&mut self, quarter: u8) {
        if (1..=4).contains(&quarter) {
            self.quarter = quarter;
        }
    }
}

// Shareholding

pub const SHAREHOLDING_INTRO: &str = "Transparent and up-to-date shareholding structure for stakeholders and investors. Explore our major shareholders and ownership distribution.";

pub const SHAREHOLDING_FALLBACK_IMAGE: &str = "https://source.unsplash.com/1600x1066/?business,corporate";

/// Circumference of the ownership ring (r = 32).
pub const RING_CIRCUMFERENCE: f64 = 201.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shareholder {
    pub name: &'static str,
    pub stake_pct: u8,
    pub image: &'static str,
}

pub const MAJOR_SHAREHOLDERS: &[Shareholder] = &[
    Shareholder {
        name: "John Smith",
        stake_pct: 35,
        image: "https://media.istockphoto.com/id/1413766112/photo/successful-mature-businessman-looking-at-camera-with-confidence.jpg?s=612x612&w=0&k=20&c=NJSugBzNuZqb7DJ8ZgLfYKb3qPr2EJMvKZ21Sj5Sfq4=",
    },
    Shareholder {
        name: "Global Investments Ltd.",
        stake_pct: 25,
        image: "https://media.istockphoto.com/id/1312016960/photo/modern-office-building-in-the-city.jpg?s=612x612&w=0&k=20&c=F0uWLyLB7WBOTZzJqCkZyF0L8H3w6G-Er1H0aVK4O5U=",
    },
    Shareholder {
        name: "Mary Johnson",
        stake_pct: 15,
        image: "https://media.istockphoto.com/id/1369508766/photo/beautiful-successful-latin-woman-smiling.jpg?s=612x612&w=0&k=20&c=LoznG6eGT42_rs9G1dOLumOTlAveLpuOi_U755l_fqI=",
    },
    Shareholder {
        name: "Institutional Fund A",
        stake_pct: 10,
        image: "https://media.istockphoto.com/id/1137525150/photo/financial-district-skyscrapers.jpg?s=612x612&w=0&k=20&c=0vXpNmP2JVzN0TWwmC9R3p7ypVcY1p7nZ1HkQ1bPqXg=",
    },
    Shareholder {
        name: "Other Investors",
        stake_pct: 15,
        image: "https://media.istockphoto.com/id/1155287817/photo/group-of-business-people-in-meeting.jpg?s=612x612&w=0&k=20&c=KJHz4bQvGqBqS5J6kRm7r7U8wq3dN0Fj6sP0ZxgYh7E=",
    },
];

pub const OWNERSHIP: &[(&str, u8)] = &[
    ("Promoters", 50),
    ("Institutional Investors", 35),
    ("Public Shareholding", 15),
];

/// `stroke-dasharray` value drawing `pct` percent of the ring.
pub fn ring_dasharray(pct: u8) -> String {
    let filled = f64::from(pct.min(100)) / 100.0 * RING_CIRCUMFERENCE;
    format!("{} {}", filled, RING_CIRCUMFERENCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stakes_sum_to_whole() {
        let major: u32 = MAJOR_SHAREHOLDERS.iter().map(|s| u32::from(s.stake_pct)).sum();
        assert_eq!(major, 100);
        let ownership: u32 = OWNERSHIP.iter().map(|(_, pct)| u32::from(*pct)).sum();
        assert_eq!(ownership, 100);
    }

    #[test]
    fn test_ring_dasharray() {
        assert_eq!(ring_dasharray(50), "100.5 201");
        assert_eq!(ring_dasharray(0), "0 201");
        assert_eq!(ring_dasharray(250), "201 201");
    }

    #[test]
    fn test_default_selection_has_data() {
        let selection = QuarterSelection::default();
        assert_eq!(selection.result().map(|r| r.revenue), Some("₹68.9 Cr"));
    }

    #[test]
    fn test_selection_ignores_unknown_values() {
        let mut selection = QuarterSelection::default();
        selection.select_year(1999);
        selection.select_quarter(7);
        assert_eq!(selection, QuarterSelection::default());

        selection.select_year(2022);
        selection.select_quarter(1);
        assert_eq!(selection.result().map(|r| r.growth), Some("+6.8%"));
    }

    #[test]
    fn test_every_year_has_four_quarters() {
        for (_, quarters) in QUARTERLY {
            let numbers: Vec<u8> = quarters.iter().map(|r| r.quarter).collect();
            assert_eq!(numbers, vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_metric_comparison() {
        assert_eq!(KEY_METRICS[4].comparison(), "-0.05 vs previous");
    }
}
