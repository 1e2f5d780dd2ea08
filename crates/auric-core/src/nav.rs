//! Navigation model and menu state

use serde::Serialize;

use crate::routes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

/// Titled group inside a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavCategory {
    pub label: &'static str,
    pub items: &'static [NavItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavLink {
    Page(NavItem),
    Dropdown {
        label: &'static str,
        categories: &'static [NavCategory],
    },
}

impl NavLink {
    pub fn label(&self) -> &'static str {
        match self {
            NavLink::Page(item) => item.label,
            NavLink::Dropdown { label, .. } => label,
        }
    }

    /// Every page path reachable from this link.
    pub fn paths(&self) -> Vec<&'static str> {
        match self {
            NavLink::Page(item) => vec![item.path],
            NavLink::Dropdown { categories, .. } => categories
                .iter()
                .flat_map(|c| c.items.iter().map(|i| i.path))
                .collect(),
        }
    }
}

const FLANGES: &[NavItem] = &[
    NavItem { path: "/products/slip-on", label: "Slip-On Flanges" },
    NavItem { path: "/products/weld-neck", label: "Weld Neck Flanges" },
    NavItem { path: "/products/blind", label: "Blind Flanges" },
    NavItem { path: "/products/socket-weld", label: "Socket Weld Flanges" },
    NavItem { path: "/products/threaded", label: "Threaded Flanges" },
    NavItem { path: "/products/reducing", label: "Reducing Flanges" },
    NavItem { path: "/products/lap-joint", label: "Lap-Joint Flanges" },
    NavItem { path: "/products/plate", label: "Plate Flanges" },
    NavItem { path: "/products/rf-rij", label: "RF & RIJ Flanges" },
    NavItem { path: "/products/long-weld", label: "Long Welding Neck Flanges" },
];

const FORGED_FITTINGS: &[NavItem] = &[NavItem {
    path: "/products/forged-fitting",
    label: "Forged Fitting",
}];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink::Page(NavItem { path: routes::HOME, label: "Home" }),
    NavLink::Page(NavItem { path: routes::ABOUT, label: "About Us" }),
    NavLink::Page(NavItem { path: routes::MANUFACTURE, label: "Manufacture" }),
    NavLink::Dropdown {
        label: "Products",
        categories: &[
            NavCategory { label: "Flanges", items: FLANGES },
            NavCategory { label: "Forged Fittings", items: FORGED_FITTINGS },
        ],
    },
    NavLink::Page(NavItem { path: routes::QUALITY_CONTROL, label: "Quality Control" }),
    NavLink::Page(NavItem { path: routes::MANUFACTURING_CAPACITY, label: "Manufacturing Capacity" }),
    NavLink::Page(NavItem { path: routes::CONTACT, label: "Contact" }),
];

/// Open/closed state of the mobile menu and the desktop dropdowns.
///
/// Dropdowns are identified by their index in [`NAV_LINKS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub mobile_open: bool,
    pub open_dropdown: Option<usize>,
}

impl NavState {
    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn toggle_dropdown(&mut self, index: usize) {
        self.open_dropdown = match self.open_dropdown {
            Some(open) if open == index => None,
            _ => Some(index),
        };
    }

    pub fn hover_dropdown(&mut self, index: usize) {
        self.open_dropdown = Some(index);
    }

    pub fn leave_dropdown(&mut self) {
        self.open_dropdown = None;
    }

    /// Following any link closes every menu.
    pub fn navigate(&mut self) {
        self.mobile_open = false;
        self.open_dropdown = None;
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_dropdown == Some(index)
    }
}

/// Exact match against the current pathname.
pub fn is_active(link_path: &str, pathname: &str) -> bool {
    link_path == pathname
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_dropdown_shape() {
        let NavLink::Dropdown { label, categories } = NAV_LINKS[3] else {
            panic!("expected dropdown at index 3");
        };
        assert_eq!(label, "Products");
        assert_eq!(categories[0].items.len(), 10);
        assert_eq!(categories[1].items.len(), 1);
    }

    #[test]
    fn test_every_nav_target_is_routable() {
        for link in NAV_LINKS {
            for path in link.paths() {
                assert!(routes::is_known_path(path), "{} is not routable", path);
            }
        }
    }

    #[test]
    fn test_toggle_dropdown() {
        let mut state = NavState::default();
        state.toggle_dropdown(3);
        assert!(state.is_open(3));
        state.toggle_dropdown(3);
        assert_eq!(state.open_dropdown, None);
        state.toggle_dropdown(3);
        state.toggle_dropdown(1);
        assert!(state.is_open(1));
    }

    #[test]
    fn test_hover_and_leave() {
        let mut state = NavState::default();
        state.hover_dropdown(3);
        state.hover_dropdown(3);
        assert!(state.is_open(3));
        state.leave_dropdown();
        assert!(!state.is_open(3));
    }

    #[test]
    fn test_navigate_closes_everything() {
        let mut state = NavState::default();
        state.toggle_mobile();
        state.toggle_dropdown(3);
        state.navigate();
        assert_eq!(state, NavState::default());
    }

    #[test]
    fn test_active_link() {
        assert!(is_active("/aboutus", "/aboutus"));
        assert!(!is_active("/", "/aboutus"));
    }
}
