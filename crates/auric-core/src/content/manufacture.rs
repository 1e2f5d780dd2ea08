//! Manufacture page showcase

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowcaseImage {
    pub src: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

pub const INTRO: &str = "Precision forged components and high\u{2011}performance flanges engineered for demanding industries. Explore our process, materials, and quality that power real\u{2011}world reliability.";

pub const BADGES: &[&str] = &["ISO Certified", "Quality Assured", "Fast Delivery"];

pub const FALLBACK_IMAGE: &str = "https://source.unsplash.com/1600x1066/?industry,metal";

pub const FORGED_INTRO: &str = "High\u{2011}strength, heat\u{2011}treated steel forgings built to exacting tolerances for critical applications.";

pub const FLANGES_INTRO: &str = "A comprehensive range of flanges for pipelines and process plants. Machined, inspected, and ready for service.";

pub const QUOTE_HEADING: &str = "Need a custom forging or flange?";

pub const QUOTE_TEXT: &str = "Share your drawings and specifications. Our team will recommend materials, processes, and lead\u{2011}times tailored to your project.";

pub const FORGED_PRODUCTS: &[ShowcaseImage] = &[
    ShowcaseImage {
        src: "https://e7.pngegg.com/pngimages/561/1008/png-clipart-flange-manufacturing-stainless-steel-valve-stainless-miscellaneous-company-thumbnail.png",
        title: "Precision Forgings",
        caption: "Heat-treated components",
    },
    ShowcaseImage {
        src: "https://www.tirupatiforge.com/images/products/auto-part.png",
        title: "Auto Components",
        caption: "Automotive grade steel",
    },
    ShowcaseImage {
        src: "https://3.imimg.com/data3/KV/RN/MY-9357494/forged-cam-shaft-250x250.jpg",
        title: "Camshaft Forgings",
        caption: "High-performance parts",
    },
    ShowcaseImage {
        src: "https://cpimg.tistatic.com/10512451/b/6/Automotive-Transmission-Parts.png",
        title: "Transmission Parts",
        caption: "Precision engineered",
    },
    ShowcaseImage {
        src: "https://s.alicdn.com/@sc04/kf/Hacc4e5d022ea450d8cd1a02896f73b756/High-Quality-CNC-Forged-Wheel-Hub-Auto-Parts-and-Machinery-Made-From-Durable-Alloy-Brass-Carbon-Steel-Iron.png",
        title: "Wheel Hubs",
        caption: "CNC machined alloy",
    },
    ShowcaseImage {
        src: "https://iacpl.co.in/wp-content/uploads/2018/12/Forged-Parts-3.png",
        title: "Custom Forgings",
        caption: "Tailored solutions",
    },
];

pub const FLANGE_PRODUCTS: &[ShowcaseImage] = &[
    ShowcaseImage {
        src: "https://www.tirupatiforge.com/images/products/weld-neck.png",
        title: "Weld-Neck Flanges",
        caption: "High-pressure rated",
    },
    ShowcaseImage {
        src: "https://www.tirupatiforge.com/images/products/slip-on.png",
        title: "Slip-On Flanges",
        caption: "Easy installation",
    },
    ShowcaseImage {
        src: "https://www.tirupatiforge.com/images/products/weld-neck.png",
        title: "Long Weld-Neck",
        caption: "Extended hub design",
    },
    ShowcaseImage {
        src: "https://www.tirupatiforge.com/images/products/blind.png",
        title: "Blind Flanges",
        caption: "Pipeline termination",
    },
    ShowcaseImage {
        src: "https://www.tirupatiforge.com/images/products/lap-jiont.png",
        title: "Lap-Joint Flanges",
        caption: "Rotating compatibility",
    },
    ShowcaseImage {
        src: "https://www.tirupatiforge.com/images/products/socket-weld.png",
        title: "Socket-Weld Flanges",
        caption: "Small bore piping",
    },
];
