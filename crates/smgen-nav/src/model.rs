//! Decoration model types.
//!
//! The decoration model is the resolved navigation structure for a site at a
//! given locale: an ordered list of named menus, each holding a tree of menu
//! entries. Models are read-only during sitemap extraction.

use serde::Deserialize;

/// One navigation entry in a site's decoration model.
///
/// Entries form a tree: an item may carry child items of arbitrary depth.
/// The href is a path relative to the site root (`guide.html`,
/// `/reference/index.html`); items without an href act as pure grouping
/// nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MenuItem {
    /// Display name of the entry.
    #[serde(default)]
    pub name: String,
    /// Link target, relative to the site root. `None` for grouping nodes.
    #[serde(default)]
    pub href: Option<String>,
    /// Child entries, in document order.
    #[serde(default, rename = "item")]
    pub items: Vec<MenuItem>,
}

impl MenuItem {
    /// Whether this entry links anywhere.
    ///
    /// Entries with an empty or absent href are grouping nodes: they produce
    /// no sitemap record themselves, but their children are still visited.
    #[must_use]
    pub fn has_href(&self) -> bool {
        self.href.as_deref().is_some_and(|href| !href.is_empty())
    }
}

/// One named top-level menu of a decoration model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Menu {
    /// Menu heading.
    #[serde(default)]
    pub name: String,
    /// Root entries of this menu, in document order.
    #[serde(default, rename = "item")]
    pub items: Vec<MenuItem>,
}

/// Root navigation collection for one locale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DecorationModel {
    /// Top-level menus, in descriptor order.
    #[serde(default, rename = "menu")]
    pub menus: Vec<Menu>,
}

/// The site a sitemap is generated for.
///
/// Carries the project name and the base URL every menu href is resolved
/// against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    /// Human-readable project name.
    pub name: String,
    /// Absolute base URL of the published site.
    pub url: String,
}
