//! Product catalog: flange and forged-fitting families

use serde::Serialize;

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProductCategory {
    Flanges,
    ForgedFittings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductItem {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub specs: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductFamily {
    pub slug: &'static str,
    pub title: &'static str,
    pub category: ProductCategory,
    pub intro: &'static str,
    pub items: &'static [ProductItem],
    /// Shown when an item image fails to load.
    pub fallback_image: &'static str,
    pub applications: &'static [&'static str],
    pub standards: &'static [&'static str],
}

const INDUSTRIAL_FALLBACK: &str = "https://source.unsplash.com/800x600/?flange,industrial";
const FACTORY_FALLBACK: &str = "https://source.unsplash.com/800x600/?flange,factory,steel";

pub const FAMILIES: &[ProductFamily] = &[
    ProductFamily {
        slug: "slip-on",
        title: "Slip-On Flanges",
        category: ProductCategory::Flanges,
        intro: "We are manufacturing high quality Slip on Flanges which are suitable for low pressure applications. Manufactured with high grade raw material such as stainless steel, mild steel and other metallic products, our range is appreciated in the global market.",
        items: &[
            ProductItem {
                name: "Slip-On Raised Face Flanges",
                image: "https://www.tirupatiforge.com/images/products/slip-on.png",
                description: "Standard slip-on flange with a raised sealing surface, offering strong sealing performance and easy installation.",
                specs: &["Pressure Rating: 150# - 2500#", "Material: CS, SS, Alloy Steel", "Sizes: 1/2\" to 48\"", "Face Type: Raised Face (RF)"],
            },
            ProductItem {
                name: "Slip-On Flat Face Flanges",
                image: "https://www.induskart.co.in/wp-content/uploads/2023/05/Flat-Face.png",
                description: "Preferred for low-pressure applications and soft gasket materials. Commonly used in water lines and industrial piping.",
                specs: &["Pressure Rating: 150# - 600#", "Material: Carbon Steel / Stainless Steel", "Sizes: 1/2\" to 24\"", "Face Type: Flat Face (FF)"],
            },
            ProductItem {
                name: "Slip-On Long Neck Flanges",
                image: "https://vishadforge.com/wp-content/uploads/2021/07/Welding-Neck-Flanges.jpg",
                description: "Designed for high-temperature and high-pressure lines where additional reinforcement and alignment are required.",
                specs: &["Pressure Rating: 300# - 1500#", "Material: Alloy Steel / Stainless Steel", "Sizes: 2\" to 48\"", "Feature: Extended hub for stability"],
            },
            ProductItem {
                name: "Slip-On RTJ Flanges",
                image: "https://www.indusroof.com/pub/media/catalog/product/cache/cfd2a6dbe1bba1c6c4eeb6960592327b/f/l/flanges_carbon-steel-ring-type-joint-rtj-blind-flange.png",
                description: "Ring-Type-Joint groove design for critical sealing applications in high-pressure environments.",
                specs: &["Pressure Rating: 600# - 2500#", "Material: Stainless Steel / Alloy", "RTJ Groove for Metal Gaskets", "Oil & Gas Applications"],
            },
            ProductItem {
                name: "Custom Slip-On Flanges",
                image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRjeoLgnNp-nW2EY2JUYnWaH9LKGTYJ1LHOZg&s",
                description: "Engineered custom slip-on flanges tailored to meet specific industrial requirements and unique specifications.",
                specs: &["Custom Bores & Dimensions", "Exotic Material Options", "Precision CNC Machined", "Special Coatings Available"],
            },
        ],
        fallback_image: FACTORY_FALLBACK,
        applications: &[
            "Oil & Gas Distribution",
            "Water Treatment Plants",
            "Chemical Processing",
            "Marine & Offshore Systems",
            "HVAC Systems",
            "Power Generation",
        ],
        standards: &[
            "ASME B16.5 / B16.47 Certified",
            "DIN & EN Standards",
            "ISO 9001:2015 Certified",
            "Hydro-Tested & MPI Inspection",
            "UT & PMI Testing",
            "Material Traceability",
        ],
    },
    ProductFamily {
        slug: "weld-neck",
        title: "Weld-Neck Flanges",
        category: ProductCategory::Flanges,
        intro: "We are manufacturing a comprehensive range of Weld Neck Flanges which are available in various sizes and dimensions to match the pipes. These flanges are mainly used to connect pipes and are considered as an important unit to hold up mechanical parts. Our Weld Neck Flanges are developed from superior quality carbon steel, stainless steel and alloy steel, and are built in compliance with client's requirements.",
        items: &[
            ProductItem {
                name: "Standard Weld-Neck Flange",
                image: "https://www.tirupatiforge.com/images/products/weld-neck.png",
                description: "High-integrity flange designed for high-pressure & high-temperature pipelines.",
                specs: &["Pressure: 150# to 2500#", "Material: Carbon & Stainless Steel", "Size: 1/2\" to 48\""],
            },
            ProductItem {
                name: "Long Weld-Neck Flange",
                image: "https://fieldindustries.com/wp-content/uploads/2020/10/long-weld-neck-flange-400x400.png",
                description: "Extended neck for elevated reinforcement, ideal for vessels & high-temperature systems.",
                specs: &["Extended Hub Design", "Material: CS / SS / Alloy Steel", "Used in Pressure Vessels"],
            },
            ProductItem {
                name: "Heavy-Wall Weld-Neck Flange",
                image: "https://www.octalsteel.com/wp-content/uploads/2018/08/weld-neck-flange-dimensions.jpg",
                description: "Reinforced flange for extremely high-pressure & demanding pipeline environments.",
                specs: &["Extra-thick Hub", "High Pressure & Shock Resistance", "Oil & Gas Approved"],
            },
            ProductItem {
                name: "RTJ Weld-Neck Flange",
                image: "https://www.prochem.com.au/images/thumbs/0008076_25nb-cl1500-rtj-weldneck-flange-sch80-astm-a182-f304l_600.jpeg",
                description: "Ring-Type-Joint sealing groove for leak-free sealing in critical operations.",
                specs: &["RTJ Groove", "Used in Petrochemical & Refineries", "High Temperature Service"],
            },
            ProductItem {
                name: "Specialty Weld-Neck (Custom)",
                image: "https://apiint.com/wp-content/uploads/2023/03/rfwn.png",
                description: "Custom engineered weld-neck flanges tailored for unique industrial requirements.",
                specs: &["Custom Bores & Face Types", "Exotic Materials Available", "Precision CNC Machined"],
            },
        ],
        fallback_image: FACTORY_FALLBACK,
        applications: &["Oil & Gas Pipelines", "Petrochemical Plants", "Power & Energy", "Boilers and High-Temp Lines"],
        standards: &["ANSI / ASME B16.5", "ASTM Material Grades", "ISO Certified Production", "NDT & Pressure Testing"],
    },
    ProductFamily {
        slug: "blind",
        title: "Blind Flanges",
        category: ProductCategory::Flanges,
        intro: "We are offering a superior quality of Blind Flange which is manufactured with high grade of raw material. We have various sizes and dimensions available and can also customize clients demand with detailed specification. It is manufactured in accordance of requisite norms and standards and is delivered within given time frame.",
        items: &[
            ProductItem {
                name: "Blind Flange - Raised Face (RF)",
                image: "https://www.tirupatiforge.com/images/products/blind.png",
                description: "Standard raised face blind flange used to close pipe ends and pressure vessel openings with reliable sealing performance.",
                specs: &[
                    "Class: 150# - 2500#",
                    "Materials: Carbon Steel, Stainless Steel, Alloy Steel",
                    "Sizes: up to 24 (150 & 300 Class), up to 8 (600 Class), up to 6 (900 & 1500 Class), up to 4 (2500 Class)",
                ],
            },
            ProductItem {
                name: "Blind Flange - Flat Face (FF)",
                image: "https://www.induskart.co.in/wp-content/uploads/2023/05/Flat-Face.png",
                description: "Flat face blind flange recommended where the flange faces of mating components are flat and softer gaskets are used.",
                specs: &["Class: 150# - 600#", "Materials: Carbon Steel, Stainless Steel", "Sizes: Common up to 24\""],
            },
            ProductItem {
                name: "RTJ Blind Flange",
                image: "https://fieldindustries.com/wp-content/uploads/2020/10/api-rtj-blind-flange.png",
                description: "Ring-type-joint blind flange for critical services requiring metal-to-metal sealing and high-integrity leak control.",
                specs: &["RTJ Groove for ring gasket", "Used in Petrochemical and Refinery applications", "Sizes: Typically up to 24\" depending on class"],
            },
        ],
        fallback_image: "https://source.unsplash.com/800x600/?industrial,flange",
        applications: &[],
        standards: &[],
    },
    ProductFamily {
        slug: "socket-weld",
        title: "Socket Weld Flanges",
        category: ProductCategory::Flanges,
        intro: "We are offering a wide gamut of Socket Weld which is acclaimed in the Indian market. We fabricate these Sockets Weld with premium quality of raw material which is procured from renowned manufacturers of the country.",
        items: &[
            ProductItem {
                name: "Standard Socket Weld Flange",
                image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcS2k2ogHKfgRjNyxLSuxiqtroy4GnMDFLmQUA&s",
                description: "Forged flanges for pipelines with smaller diameters and high pressure.",
                specs: &["Size Range: ½\" to 24\"", "Material: Carbon Steel, Stainless Steel", "Pressure Class: 150#, 300#, 600#"],
            },
            ProductItem {
                name: "Raised Face Socket Weld Flange",
                image: "https://arcellorcontrols.com/wp-content/uploads/2022/02/socket-weld-flange.jpg",
                description: "Provides additional sealing area to prevent leakage in critical connections.",
                specs: &["Face Type: Raised", "Applicable to: Process Lines", "Pressure Class: 150# to 2500#"],
            },
            ProductItem {
                name: "Ring Type Joint Socket Weld Flange",
                image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTQ-do--1W92TVcnVyNfx7V4zqIlWzIy9DhWw&s",
                description: "Special ring groove for demanding pressure and safety applications.",
                specs: &["Seal Type: RTJ", "Material: Alloy Steel", "Max Pressure: 2500#"],
            },
            ProductItem {
                name: "Custom Socket Weld Flange",
                image: "https://tiimg.tistatic.com/fp/1/005/610/socket-weld-pipe-flange-974.jpg",
                description: "Custom designed flanges for specialty pipeline assemblies.",
                specs: &["Design: Custom", "Material: As requested", "Finish: Machined, Coated"],
            },
        ],
        fallback_image: INDUSTRIAL_FALLBACK,
        applications: &[],
        standards: &[],
    },
    ProductFamily {
        slug: "threaded",
        title: "Threaded Flanges",
        category: ProductCategory::Flanges,
        intro: "We are also manufacturing a wide gamut of Screwed Threaded Flanges which are produced with high quality raw material and manufactured at highly advanced unit equipped with latest technology. Based on the sizes, dimensions, shapes and length of these flanges, we can customize the products for our respected clients.",
        items: &[
            ProductItem {
                name: "Threaded Flange (Standard)",
                image: "https://www.tirupatiforge.com/images/products/threaded.png",
                description: "Ideal for non-welded pipe connections in low-pressure, non-critical systems. Internal threads allow easy, quick installation.",
                specs: &["Pressure Rating: 150-900#", "Material: Carbon Steel, Stainless Steel", "Size Range: 1/2\" - 4\""],
            },
            ProductItem {
                name: "Threaded Flange with Hub",
                image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQqy39RGF81LpXRm6OA_eTuVfpBJY3Kjdt5Sg&s",
                description: "Provides added reinforcement in the neck; suited for higher mechanical stress while retaining easy, weld-free assembly.",
                specs: &["Hubbed for extra strength", "Material: Carbon Steel, Alloy Steel", "Thread Types: NPT/BSP"],
            },
            ProductItem {
                name: "Threaded Reducing Flange",
                image: "https://www.metalfed.com/wp-content/uploads/images/threaded-reducing-flange-supplier.jpg",
                description: "Connects pipes of different diameters with internal threads, useful for system modifications without re-welding.",
                specs: &["Custom Size Reductions Available", "Material: Stainless Steel, Alloy Steel", "Bore: Reduces to any custom size"],
            },
            ProductItem {
                name: "Threaded Blind Flange",
                image: "https://www.tirupatiforge.com/images/products/blind.png",
                description: "Used to close pipe ends in systems where future threading access may be required. Ensures easy reopening without cutting or welding.",
                specs: &["Pressure Rating: 150-900#", "Material: Carbon Steel, Stainless Steel", "Size Range: 1/2\" - 4\""],
            },
            ProductItem {
                name: "Custom Threaded Flange",
                image: "https://www.tirupatiforge.com/images/products/threaded.png",
                description: "Manufactured to exact specifications for special process requirements. All thread types and finishes available.",
                specs: &["Custom Design & Drilling", "Exotic Materials & Coatings", "Precision Machined Threads"],
            },
        ],
        fallback_image: INDUSTRIAL_FALLBACK,
        applications: &[],
        standards: &[],
    },
    ProductFamily {
        slug: "reducing",
        title: "Reducing Flanges",
        category: ProductCategory::Flanges,
        intro: "We are offering a superior quality of Reducing Flange which is manufactured with high grade of raw material. We have various sizes and dimensions available and can also customize clients demand with detailed specification. It is manufactured in accordance of requisite norms and standards and is delivered within given time frame.",
        items: &[
            ProductItem {
                name: "Quick Install Reducing Flange",
                image: "https://fieldindustries.com/wp-content/uploads/2020/10/carbon-stainless-alloy-reducing-weld-neck-flange.png",
                description: "Rapid-connect reducing flanges for time-critical or mobile installations. Saves installation time and labor.",
                specs: &["Connection: Push-Pull", "Pressure Rating: 150-900#", "Size Range: 1\" - 10\""],
            },
            ProductItem {
                name: "Standard Reducing Flange",
                image: "https://www.hgffgroup.com/wp-content/uploads/2019/07/flange-groove-tongue-type_meitu_17.jpg",
                description: "Designed to connect pipes of different diameters with superior structural integrity. Ideal for process, chemical, and utility piping.",
                specs: &["Pressure Rating: 150-2500#", "Material: Forged/Carbon/Stainless Steel", "Size Range: 1\" - 24\""],
            },
            ProductItem {
                name: "High-Pressure Reducing Flange",
                image: "https://www.airaindia.com/wp-content/uploads/2024/09/High-Pressure-Reducing-Valve-Flanged-05.webp",
                description: "Engineered for ultra-high pressure installations, precisely machined for leak-free performance in severe environments.",
                specs: &["Pressure Rating: up to 2500#", "Material: Alloy Steel", "Size Range: 1\" - 12\""],
            },
            ProductItem {
                name: "Corrosion Resistant Reducing Flange",
                image: "https://5.imimg.com/data5/SELLER/Default/2024/9/453486685/BF/VD/IG/3355448/industrial-stainless-steel-reducing-flange-500x500.jpeg",
                description: "Manufactured from 316L stainless steel for optimal chemical and salt resistance in process and water lines.",
                specs: &["Material: 316L SS & Duplex", "Pressure Rating: 150-900#", "Size Range: 1\" - 18\""],
            },
            ProductItem {
                name: "Low Temperature Reducing Flange",
                image: "https://tiimg.tistatic.com/fp/1/009/034/stainless-steel-reducing-flange--296.jpg",
                description: "Cryogenic-grade flanges for applications requiring reliable performance in sub-zero conditions.",
                specs: &["Temperature Service: -196°C", "Material: Special Alloy/LTCS", "Size Range: 1\" - 12\""],
            },
            ProductItem {
                name: "Custom Reducing Flange",
                image: "https://www.acealloysllp.com/images/products/reducing-flanges.jpg",
                description: "Fully engineered to meet client requirements including special bores, materials, coatings, and international standards.",
                specs: &["Design: Custom to Spec", "Material: Per Request", "Size: Any combination"],
            },
        ],
        fallback_image: INDUSTRIAL_FALLBACK,
        applications: &[],
        standards: &[],
    },
    ProductFamily {
        slug: "lap-joint",
        title: "Lap Joint Flanges",
        category: ProductCategory::Flanges,
        intro: "We offer lap flanges, which is manufactured from top grade materials, thus meeting the various requirements of our clients. These are available in various sizes, grades and dimensions. As per the requirement of our large clients we can also provide customized solutions within the committed time frame.",
        items: &[
            ProductItem {
                name: "Standard Lap Joint Flange",
                image: "https://ritecheng.com/wp-content/uploads/2021/02/lap-joint.png",
                description: "General-purpose lap joint flange used with a stub end, ideal for systems that require frequent dismantling and maintenance.",
                specs: &["Size: up to 24\" (150 & 300 Class)", "Material: Carbon Steel, Stainless Steel", "Pressure Rating: 150-300#"],
            },
            ProductItem {
                name: "High-Pressure Lap Joint Flange",
                image: "https://media.istockphoto.com/id/1188393107/photo/industrial-pipes-with-valve-isolated-on-white-background.jpg?s=612x612&w=0&k=20&c=5t42u-3AbL797NUkZs6a4vRHcXb2YSFWlLsU2cISNhM=",
                description: "Engineered for higher pressure systems, ensuring robust leak-free joint integrity even during thermal cycling.",
                specs: &["Size: up to 8\" (600 Class)", "Material: Alloy & Stainless Steel", "Pressure Rating: 600#"],
            },
            ProductItem {
                name: "Extra High-Pressure Lap Joint Flange",
                image: "https://media.istockphoto.com/id/2159789889/photo/ball-bearing-on-white-background-close-up.jpg?s=612x612&w=0&k=20&c=zMd5RFiWc40JTqCxtnGOeGTTmGneoBR0ssd7EU3jtCw=",
                description: "Specially crafted to handle 900 & 1500 Class applications, suitable for demanding industrial duties.",
                specs: &["Size: up to 6\" (900 & 1500 Class)", "Material: Forged Steel", "Pressure Rating: 900-1500#"],
            },
            ProductItem {
                name: "Ultra High-Pressure Lap Joint Flange",
                image: "https://media.istockphoto.com/id/1031288068/photo/fragment-of-the-sealing-system-of-the-industrial-pump.jpg?s=612x612&w=0&k=20&c=UzlIwvfHixyFILfDyF7WguVKmBUtAsEbrbuPCHR6QzY=",
                description: "For the highest pressure service where reliability is critical. Forged, inspected, and tested for severe service.",
                specs: &["Size: up to 4\" (2500 Class)", "Material: Special Alloy Steel", "Pressure Rating: 2500#"],
            },
            ProductItem {
                name: "Custom Lap Joint Flange",
                image: "https://www.kencotubes.com/images/flange-lap-joint-type.jpg",
                description: "Custom-made as per client specifications with options in grade, dimensions, and corrosion resistance for rapid project turnaround.",
                specs: &["Size: As Required", "Material: All Grades", "Finish & Specs: Tailored"],
            },
        ],
        fallback_image: INDUSTRIAL_FALLBACK,
        applications: &[],
        standards: &[],
    },
    ProductFamily {
        slug: "plate",
        title: "Plate Flanges",
        category: ProductCategory::Flanges,
        intro: "We are offering a superior quality of Plate Flange which is manufactured with high grade of raw material. We have various sizes and dimensions available and can also customize clients demand with detailed specification. It is manufactured in accordance of requisite norms and standards and is delivered within given time frame.",
        items: &[
            ProductItem {
                name: "Standard Plate Flange",
                image: "https://ritecheng.com/wp-content/uploads/2021/02/studding-outlet.png",
                description: "Economical forged flanges for general-purpose piping, manufactured to precise norms and delivered quickly.",
                specs: &["Pressure Rating: 150-300#", "Material: Carbon Steel, Stainless Steel", "Size Range: up to 24\""],
            },
            ProductItem {
                name: "High-Pressure Plate Flange",
                image: "https://www.tirupatiforge.com/images/products/weld-neck.png",
                description: "Enhanced thickness and strength for rigorous industrial applications up to 600 Class.",
                specs: &["Pressure Rating: 600#", "Material: Alloy/Carbon/Stainless Steel", "Size Range: up to 8\""],
            },
            ProductItem {
                name: "Extra High-Pressure Plate Flange",
                image: "https://www.tirupatiforge.com/images/products/blind.png",
                description: "Suitable for 900 & 1500 pressure classes where dimensional stability and safety are paramount.",
                specs: &["Pressure Rating: 900-1500#", "Material: Forged Steel, Custom Alloys", "Size Range: up to 6\""],
            },
            ProductItem {
                name: "Heavy Duty Plate Flange",
                image: "https://www.tirupatiforge.com/images/products/lap-jiont.png",
                description: "Designed for critical sites and 2500 Class pipes, ensuring exceptional resistance to pressure and stress.",
                specs: &["Pressure Rating: 2500#", "Material: Special Steel Grades", "Size Range: up to 4\""],
            },
            ProductItem {
                name: "Custom Plate Flange",
                image: "https://5.imimg.com/data5/QN/AM/MY-421170/plate-flange.png",
                description: "Manufactured precisely to your size and grade specifications for specialized or large-scale projects.",
                specs: &["Size: As Required", "Material: All Grades", "Specs: Client Defined"],
            },
        ],
        fallback_image: INDUSTRIAL_FALLBACK,
        applications: &[],
        standards: &[],
    },
    ProductFamily {
        slug: "rf-rij",
        title: "RF & RIJ Flanges",
        category: ProductCategory::Flanges,
        intro: "We are offering a superior quality of RF & RIJ Flange which is manufactured with high grade of raw material. We have various sizes and dimensions available and can also customize clients demand with detailed specification. It is manufactured in accordance of requisite norms and standards and is delivered within given time frame.",
        items: &[
            ProductItem {
                name: "Standard RF Flange",
                image: "https://www.tirupatiforge.com/images/products/slip-on.png",
                description: "Raised Face (RF) flange ensures enhanced gasket sealing in general process applications. Manufactured to precision from high-grade materials.",
                specs: &["Pressure Rating: 150-300#", "Material: Carbon Steel, Stainless Steel", "Size Range: up to 24\""],
            },
            ProductItem {
                name: "High-Pressure RF Flange",
                image: "https://www.tirupatiforge.com/images/products/weld-neck.png",
                description: "Thicker and engineered for 600 Class or higher. Guarantees long-life service in rigorous environments.",
                specs: &["Pressure Rating: 600#", "Material: Alloy Steel, Stainless Steel", "Size Range: up to 8\""],
            },
            ProductItem {
                name: "Ring Type Joint (RTJ) Flange",
                image: "https://www.tirupatiforge.com/images/products/blind.png",
                description: "For leak-free performance under high pressure, RTJ flanges (RIJ) feature a machined groove and metal ring gasket. Ideal for critical applications.",
                specs: &["Pressure Rating: 900-1500#", "Material: Forged Steel, Custom Alloys", "Size Range: up to 6\""],
            },
            ProductItem {
                name: "Extra High-Pressure RTJ Flange",
                image: "https://www.tirupatiforge.com/images/products/lap-jiont.png",
                description: "Specially designed for 2500 Class and critical containment, supporting utmost strength and sealing integrity.",
                specs: &["Pressure Rating: 2500#", "Material: All High-Strength Alloys", "Size Range: up to 4\""],
            },
            ProductItem {
                name: "Custom RF / RIJ Flange",
                image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTYG_bPlPEFtwAxILF7GeYoI1TnmXyBHAkwRw&s",
                description: "Tailored design and material, manufactured per client specification for specialty pressure ratings and performance.",
                specs: &["Size: As Required", "Material: All Grades", "Specs: To Client Detail"],
            },
        ],
        fallback_image: INDUSTRIAL_FALLBACK,
        applications: &[],
        standards: &[],
    },
    ProductFamily {
        slug: "long-weld",
        title: "Long Weld Neck Flanges",
        category: ProductCategory::Flanges,
        intro: "We are offering a superior quality of Long Welding Neck Flanges which is manufactured with high grade of raw material. We have various sizes and dimensions available and can also customize clients demand with detailed specification. It is manufactured in accordance of requisite norms and standards and is delivered within given time frame.",
        items: &[
            ProductItem {
                name: "Standard Long Weld Neck Flange",
                image: "https://ritecheng.com/wp-content/uploads/2021/04/circular-weld-neck-flange-500x500-1-300x300.jpg",
                description: "High-quality long weld neck flange, manufactured with high-grade raw materials to ensure strength and durability. Suitable for critical pressure applications with precise dimensional tolerances.",
                specs: &["Size: Up to 24\" (150 & 300 Class)", "Material: Carbon Steel, Stainless Steel, Alloy Steel", "Features: Precision machined, corrosion resistant"],
            },
            ProductItem {
                name: "Heavy Duty Long Weld Neck Flange",
                image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTNiU1M8fmNcmlRFzpZ2qUYEKf1Qyo1jf7uDg&s",
                description: "Designed for heavy-duty high-pressure environments, supporting seamless integration for demanding industrial systems.",
                specs: &["Size: Up to 8\" (600 Class)", "Material: Forged Steel, Special Alloys", "Features: Excellent strength, dimensional accuracy"],
            },
            ProductItem {
                name: "Alloy Long Weld Neck Flange",
                image: "https://5.imimg.com/data5/FE/ED/VW/SELLER-23775710/astm-a182-alloy-steel-long-weld-neck-flange-500x500.jpg",
                description: "Manufactured with premium alloy materials to resist corrosion and extreme temperatures for demanding sectors.",
                specs: &["Size: Up to 6\" (900 & 1500 Class)", "Material: Alloy Steel", "Features: Corrosion resistant, thermally stable"],
            },
            ProductItem {
                name: "Custom Long Weld Neck Flange",
                image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcT3x861fmMryRAhACVmSTT2tlKsCrWtdLht2w&s",
                description: "Custom-designed for special project requirements with precise specifications and fast turnaround.",
                specs: &["Size & Grade: As per client specifications", "Material: Tailored to needs", "Features: Certified quality, quick delivery"],
            },
        ],
        fallback_image: "https://source.unsplash.com/800x600/?flange,welding",
        applications: &[],
        standards: &[],
    },
    ProductFamily {
        slug: "forged-fitting",
        title: "Forged Fittings",
        category: ProductCategory::ForgedFittings,
        intro: "Engineered forged fittings built for demanding pressure systems. Durable, certified, and precision manufactured for industrial pipelines.",
        items: &[
            ProductItem {
                name: "Forged Elbow (45° / 90°)",
                image: "https://5.imimg.com/data5/SELLER/Default/2021/8/AM/OK/DF/3832574/stainless-steel-socket-weld-elbow-forged-elbow-bend-45-90-180-degree-small-long-radius.jpg",
                description: "High-strength forged elbows designed for directional changes in high-pressure piping systems.",
                specs: &["Pressure Rating: 2000 / 3000 / 6000 LB", "Material: Carbon / Stainless / Alloy Steel", "Size Range: 1/4\" – 4\""],
            },
            ProductItem {
                name: "Forged Tee",
                image: "https://m.media-amazon.com/images/I/71jJQEmV-3L._AC_UF1000,1000_QL80_.jpg",
                description: "Reliable forged tees used for equal or reducing branch connections in industrial pipelines.",
                specs: &["Pressure Rating: 2000 / 3000 / 6000 LB", "Material: CS / SS / Alloy Steel", "Size Range: 1/4\" – 4\""],
            },
            ProductItem {
                name: "Forged Coupling",
                image: "https://image.made-in-china.com/2f0j00JgIonWsUAvur/ANSI-B16-1-6000-Lbs-Galvanized-Weld-Female-Thread-Half-Full-Forged-Carbon-Steel-Pipe-Fitting-Coupling.webp",
                description: "Durable forged couplings for connecting pipe segments in pressure piping applications.",
                specs: &["Pressure Rating: 2000 / 3000 / 6000 LB", "Material: Carbon / Stainless Steel", "Size Range: 1/4\" – 4\""],
            },
            ProductItem {
                name: "Forged Union",
                image: "https://5.imimg.com/data5/WS/ZU/MC/SELLER-991456/ms-union.jpg",
                description: "Heavy-duty unions ideal for dismantling pipelines during inspection or maintenance.",
                specs: &["Pressure Rating: 3000 / 6000 LB", "Material: CS / SS / Alloy Steel", "Size Range: 1/4\" – 4\""],
            },
            ProductItem {
                name: "Forged Cap",
                image: "https://3.imimg.com/data3/CE/RH/MY-5382001/forged-cap.jpg",
                description: "Precision engineered forged caps to close pipe ends in process piping systems.",
                specs: &["Pressure Rating: 2000 / 3000 LB", "Material: Carbon / Stainless Steel", "Size Range: 1/4\" – 4\""],
            },
            ProductItem {
                name: "Forged Plug & Bushing",
                image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQrdEdOLPpV3CRCIVGUuodzeGBy563tZMXuuQ&s",
                description: "Rugged forged plugs & bushings for sealing or adapting threaded piping connections.",
                specs: &["Pressure Rating: 3000 / 6000 LB", "Material: Carbon & Stainless Steel", "Size Range: 1/4\" – 4\""],
            },
        ],
        fallback_image: "https://source.unsplash.com/800x600/?forged,fittings,industrial",
        applications: &[],
        standards: &[],
    },
];

/// Look up a family by its URL slug.
pub fn family(slug: &str) -> CoreResult<&'static ProductFamily> {
    FAMILIES
        .iter()
        .find(|f| f.slug == slug)
        .ok_or_else(|| CoreError::UnknownProduct(slug.to_string()))
}

pub fn families_in(category: ProductCategory) -> impl Iterator<Item = &'static ProductFamily> {
    FAMILIES.iter().filter(move |f| f.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{NavLink, NAV_LINKS};
    use crate::routes;

    #[test]
    fn test_eleven_families() {
        assert_eq!(FAMILIES.len(), 11);
        assert_eq!(families_in(ProductCategory::Flanges).count(), 10);
        assert_eq!(families_in(ProductCategory::ForgedFittings).count(), 1);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(family("blind").unwrap().title, "Blind Flanges");
        assert_eq!(
            family("gaskets"),
            Err(CoreError::UnknownProduct("gaskets".to_string()))
        );
    }

    #[test]
    fn test_every_family_has_items_with_specs() {
        for f in FAMILIES {
            assert!(!f.items.is_empty(), "{} has no items", f.slug);
            assert!(f.items.iter().all(|i| !i.specs.is_empty()), "{} item without specs", f.slug);
        }
    }

    #[test]
    fn test_nav_products_match_catalog() {
        let NavLink::Dropdown { categories, .. } = NAV_LINKS[3] else {
            panic!("expected products dropdown");
        };
        let nav_paths: Vec<String> = categories
            .iter()
            .flat_map(|c| c.items.iter().map(|i| i.path.to_string()))
            .collect();
        let catalog_paths: Vec<String> = FAMILIES.iter().map(|f| routes::product_path(f.slug)).collect();
        assert_eq!(nav_paths, catalog_paths);
    }
}
