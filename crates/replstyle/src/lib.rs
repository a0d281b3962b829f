//! # replstyle - Theme Catalogs and Style Composition
//!
//! `replstyle` is the styling core for a terminal REPL display. It combines
//! a syntax-highlighting theme (one of many named color schemes) with a UI
//! chrome theme (prompt, toolbars, sidebar, menus) into a single resolved
//! style table that a renderer looks scopes up against.
//!
//! ## Core Concepts
//!
//! - [`Attrs`]: one rule's attributes — fg/bg color tokens plus `bold`,
//!   `underline`, and `noinherit` flags, convertible to and from the
//!   classic `"bg:#44bbbb #000000 bold"` string form
//! - [`StyleTable`]: scope name → [`Attrs`] mapping representing one theme
//! - [`code_styles`] / [`ui_styles`]: the two theme catalogs
//! - [`compose`]: merge one of each into the resolved table, UI rules
//!   winning on collision
//! - [`Palette`] / [`detect_palette`]: reduced 16-color console detection
//!
//! ## Quick Start
//!
//! ```rust
//! use replstyle::{compose, Palette};
//!
//! let code = replstyle::code_style("InspiredGitHub").unwrap();
//! let ui = replstyle::ui_style("default", Palette::Extended).unwrap();
//!
//! let resolved = compose(&code, &ui);
//! assert!(resolved.get("prompt").is_some_and(|a| a.bold));
//! assert!(resolved.contains("pygments.comment"));
//! ```
//!
//! ## Catalogs
//!
//! Code styles are delegated to the bundled external theme set and adapted
//! to `pygments.*` token scopes; the bespoke [`WIN32_STYLE`] entry covers
//! 16-color consoles. UI styles are a fixed pair (`default` and `blue`)
//! built from literal baseline data; on a reduced palette a handful of
//! scopes get higher-contrast overrides at construction time:
//!
//! ```rust
//! use replstyle::{ui_styles, Palette};
//!
//! let styles = ui_styles(detect());
//! assert_eq!(styles.len(), 2);
//! # fn detect() -> Palette { Palette::Extended }
//! ```
//!
//! ## What This Crate Does Not Do
//!
//! Color token syntax is never parsed or validated — `"#zzz"` flows through
//! to the renderer untouched. Hierarchical scope fallback (`sidebar.title`
//! falling back to `sidebar`, `noinherit` halting it) is the renderer's
//! resolution algorithm; this crate only produces data compatible with it.

pub mod catalog;
mod compose;
mod error;
pub mod palette;
pub mod style;

pub use catalog::{
    code_style, code_style_names, code_styles, ui_style, ui_styles, BLUE_UI_STYLE,
    DEFAULT_UI_STYLE, WIN32_STYLE,
};
pub use compose::compose;
pub use error::StyleError;
pub use palette::{detect_palette, set_palette_detector, Palette};
pub use style::{Attrs, StyleTable};
