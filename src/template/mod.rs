//! Template System - template assets, helpers and rendering
//!
//! Templates are loaded once into an immutable [`TemplateSet`] and compiled by a
//! [`TemplateRenderer`] that receives its helper functions explicitly through a
//! [`HelperSet`].

mod helpers;
mod loader;
mod render;

pub use helpers::HelperSet;
pub use loader::{TEMPLATE_EXTENSION, TemplateId, TemplateSet};
pub use render::TemplateRenderer;
