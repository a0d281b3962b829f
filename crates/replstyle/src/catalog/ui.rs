//! The UI chrome style catalog.
//!
//! A fixed pair of themes covering every widget scope the REPL display
//! renders: prompt, completion menus, the toolbar family, the options
//! sidebar, frames, and confirmation messages. The tables are built fresh
//! on every call as a pure function of the terminal palette — platform
//! adjustments happen here, at construction time, never per-lookup.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::StyleError;
use crate::palette::Palette;
use crate::style::{Attrs, StyleTable};

/// Name of the baseline UI style.
pub const DEFAULT_UI_STYLE: &str = "default";

/// Name of the variant UI style.
///
/// Currently identical to [`DEFAULT_UI_STYLE`]; callers must not assume
/// the two diverge.
pub const BLUE_UI_STYLE: &str = "blue";

/// The literal baseline for the `default` UI style.
///
/// Empty values are deliberate: they mean "explicitly unstyled", which
/// stops the renderer's inheritance lookup at that scope.
const DEFAULT_UI_BASELINE: &[(&str, &str)] = &[
    ("control-character", "ansiblue"),
    // Classic prompt.
    ("prompt", "bold"),
    ("prompt.dots", "noinherit"),
    // Numbered input prompt: "In [1]:"
    ("in", "bold #008800"),
    ("in.number", ""),
    // Return value.
    ("out", "#ff0000"),
    ("out.number", "#ff0000"),
    // Completions.
    ("completion.builtin", ""),
    ("completion.keyword", "fg:#008800"),
    ("completion.keyword fuzzymatch.inside", "fg:#008800"),
    ("completion.keyword fuzzymatch.outside", "fg:#44aa44"),
    // Separator between windows, used above the docstring pane.
    ("separator", "#bbbbbb"),
    // System toolbar.
    ("system-toolbar", "#22aaaa noinherit"),
    // "arg" toolbar.
    ("arg-toolbar", "#22aaaa noinherit"),
    ("arg-toolbar.text", "noinherit"),
    // Signature toolbar.
    ("signature-toolbar", "bg:#44bbbb #000000"),
    ("signature-toolbar.currentname", "bg:#008888 #ffffff bold"),
    ("signature-toolbar.operator", "#000000 bold"),
    ("docstring", "#888888"),
    // Validation toolbar.
    ("validation-toolbar", "bg:#440000 #aaaaaa"),
    // Status toolbar.
    ("status-toolbar", "bg:#222222 #aaaaaa"),
    ("status-toolbar.title", "underline"),
    ("status-toolbar.key", "bg:#000000 #888888"),
    ("status-toolbar.python-version", "bg:#222222 #ffffff bold"),
    ("status-toolbar paste-mode-on", "bg:#aa4444 #ffffff"),
    ("record", "bg:#884444 white"),
    ("status-toolbar.input-mode", "#ffff44"),
    // The options sidebar.
    ("sidebar", "bg:#bbbbbb #000000"),
    ("sidebar.title", "bg:#668866 #ffffff"),
    ("sidebar.label", "bg:#bbbbbb #222222"),
    ("sidebar.status", "bg:#dddddd #000011"),
    ("sidebar.label selected", "bg:#222222 #eeeeee"),
    ("sidebar.status selected", "bg:#444444 #ffffff bold"),
    ("sidebar.separator", "underline"),
    ("sidebar.key", "bg:#bbddbb #000000 bold"),
    ("sidebar.description", "bg:#bbbbbb #000000"),
    ("sidebar.helptext", "bg:#fdf6e3 #000011"),
    // Help window.
    ("frame", ""),
    ("frame.border", "#aaaaaa"),
    ("frame.label", "bg:#bbbbbb #000000"),
    // Meta-enter message.
    ("accept-message", "bg:#ffff88 #444444"),
    // Exit confirmation.
    ("exit-confirmation", "bg:#884444 #ffffff"),
];

/// Higher-contrast overrides for 16-color consoles.
const ANSI16_UI_OVERLAY: &[(&str, &str)] = &[
    ("sidebar.title", "bg:#00ff00 #ffffff"),
    ("exit-confirmation", "bg:#ff4444 #ffffff"),
    ("validation-toolbar", "bg:#ff4444 #ffffff"),
    ("completion-menu.completion", "bg:#ffffff #000000"),
    ("completion-menu.completion.current", "bg:#aaaaaa #000000"),
];

/// Builds the UI style catalog for the given palette.
///
/// Returns exactly two entries, [`DEFAULT_UI_STYLE`] and [`BLUE_UI_STYLE`].
/// Rebuilding with the same palette yields the same tables.
pub fn ui_styles(palette: Palette) -> BTreeMap<String, StyleTable> {
    let default = default_ui_style(palette);
    let blue = blue_ui_style(&default);
    BTreeMap::from([
        (DEFAULT_UI_STYLE.to_string(), default),
        (BLUE_UI_STYLE.to_string(), blue),
    ])
}

/// Looks up a single UI style by name.
///
/// # Errors
///
/// Returns [`StyleError::UnknownUiStyle`] for any name other than the two
/// catalog entries.
pub fn ui_style(name: &str, palette: Palette) -> Result<StyleTable, StyleError> {
    ui_styles(palette)
        .remove(name)
        .ok_or_else(|| StyleError::UnknownUiStyle {
            name: name.to_string(),
        })
}

fn default_ui_style(palette: Palette) -> StyleTable {
    let mut table = StyleTable::from_pairs(DEFAULT_UI_BASELINE);
    if palette.is_reduced() {
        debug!("applying 16-color contrast overlay to ui baseline");
        for (scope, spec) in ANSI16_UI_OVERLAY {
            table.set(*scope, Attrs::parse(spec));
        }
    }
    table
}

/// `blue` starts as a full copy of `default`, so it reflects the same
/// palette overlay. It layers no further overrides today; the separate
/// entry exists so callers can select it and future overrides have a
/// place to land.
fn blue_ui_style(default: &StyleTable) -> StyleTable {
    default.clone()
}
