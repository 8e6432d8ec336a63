//! Navigation model and site descriptor loading.
//!
//! Provides the decoration model types ([`DecorationModel`], [`Menu`],
//! [`MenuItem`], [`Project`]) that describe a site's navigation, and a loader
//! for TOML site descriptors with per-locale resolution.
//!
//! A descriptor directory holds `site.toml` plus optional localized variants
//! (`site.fr.toml`, `site.de.toml`, ...). Loading a locale falls back to the
//! default descriptor when no localized file exists.

mod descriptor;
mod model;

pub use descriptor::{DescriptorError, load_descriptor};
pub use model::{DecorationModel, Menu, MenuItem, Project};
