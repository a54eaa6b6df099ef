//! Shared visual primitives for SpanView surfaces.
//!
//! Currently this is the theme layer: token types, the baseline default set,
//! and the deep-merge builder the shell uses to assemble its one immutable
//! theme configuration. Page views consume tokens either directly by field
//! or through the CSS custom properties the shell installs on the document
//! root.

pub mod theme;

pub use theme::{
    ComponentOverrides, ComponentTokens, GlobalOverrides, GlobalTokens, Theme, ThemeOverrides,
};
