//! Site paths

pub const HOME: &str = "/";
pub const ABOUT: &str = "/aboutus";
pub const MANUFACTURE: &str = "/manufacture";
pub const PRODUCTS_PREFIX: &str = "/products/";
pub const QUALITY_CONTROL: &str = "/quality-control";
pub const MANUFACTURING_CAPACITY: &str = "/manufacturing-capacity";
pub const CONTACT: &str = "/contact-us";
pub const INVESTOR: &str = "/investor";
pub const FINANCIALS: &str = "/investor/financials";
pub const SHAREHOLDING: &str = "/investor/shareholding";

const STATIC_PATHS: &[&str] = &[
    HOME,
    ABOUT,
    MANUFACTURE,
    QUALITY_CONTROL,
    MANUFACTURING_CAPACITY,
    CONTACT,
    INVESTOR,
    FINANCIALS,
    SHAREHOLDING,
];

pub fn product_path(slug: &str) -> String {
    format!("{}{}", PRODUCTS_PREFIX, slug)
}

/// Whether `path` is served by a page other than not-found.
pub fn is_known_path(path: &str) -> bool {
    if STATIC_PATHS.contains(&path) {
        return true;
    }
    path.strip_prefix(PRODUCTS_PREFIX)
        .map(|slug| crate::catalog::family(slug).is_ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_path() {
        assert_eq!(product_path("weld-neck"), "/products/weld-neck");
    }

    #[test]
    fn test_known_paths() {
        assert!(is_known_path("/"));
        assert!(is_known_path("/investor/financials"));
        assert!(is_known_path("/products/forged-fitting"));
        assert!(!is_known_path("/products/unknown"));
        assert!(!is_known_path("/pricing"));
    }
}
