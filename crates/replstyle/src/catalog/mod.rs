//! Theme catalogs.
//!
//! Two independent registries with no cross-validation between them:
//!
//! - [`code_styles`]: syntax-highlighting themes, delegated to the bundled
//!   external theme set and adapted to `pygments.*` scopes, plus the
//!   bespoke reduced-palette [`WIN32_STYLE`] entry.
//! - [`ui_styles`]: UI chrome themes (prompt, toolbars, sidebar, menus), a
//!   fixed pair built from literal baseline data and adjusted for the
//!   terminal palette at construction time.
//!
//! Callers pick one name from each catalog and hand both tables to
//! [`compose`](crate::compose).

mod code;
mod ui;

pub use code::{code_style, code_style_names, code_styles, WIN32_STYLE};
pub use ui::{ui_style, ui_styles, BLUE_UI_STYLE, DEFAULT_UI_STYLE};
