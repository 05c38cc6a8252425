//! ProjectHub component library.
//!
//! Each component links its own stylesheet; the app supplies the theme
//! variables (`--color-*`, `--radius`, `--space-*`) they reference.

pub mod components;

pub use components::*;
