//! Navigation items rendered by the [`Header`](crate::components::Header).
//!
//! The bar is a fixed table: one brand link, the product sections on the
//! left, and account links pushed to the right. None of the links go
//! anywhere yet.

/// Target used by every link until the sections exist.
pub const PLACEHOLDER_HREF: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPlacement {
    Brand,
    Left,
    Right,
}

impl NavPlacement {
    /// Class list applied to the `<li>` holding the link.
    pub const fn class(self) -> &'static str {
        match self {
            NavPlacement::Brand => "logo nav-left",
            NavPlacement::Left => "nav-left",
            NavPlacement::Right => "nav-right",
        }
    }

    #[cfg(test)]
    pub(crate) const fn is_right_aligned(self) -> bool {
        matches!(self, NavPlacement::Right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub placement: NavPlacement,
}

impl NavItem {
    const fn new(label: &'static str, placement: NavPlacement) -> Self {
        Self {
            label,
            href: PLACEHOLDER_HREF,
            placement,
        }
    }
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem::new("narratus", NavPlacement::Brand),
    NavItem::new("Connections", NavPlacement::Left),
    NavItem::new("Datasets", NavPlacement::Left),
    NavItem::new("Charts", NavPlacement::Left),
    NavItem::new("Reports", NavPlacement::Left),
    NavItem::new("Settings", NavPlacement::Right),
    NavItem::new("Login", NavPlacement::Right),
];

#[cfg(test)]
pub(crate) fn brand() -> &'static NavItem {
    &NAV_ITEMS[0]
}

/// Labels in display order, separated by single spaces.
#[cfg(test)]
pub(crate) fn text_content() -> String {
    NAV_ITEMS
        .iter()
        .map(|item| item.label)
        .collect::<Vec<_>>()
        .join(" ")
}
