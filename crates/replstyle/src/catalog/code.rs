//! The code (syntax) style catalog.
//!
//! Lexical themes come from the external theme set bundled with `syntect`;
//! this module only adapts them to the local `pygments.*` scope convention.
//! Each local token scope maps to a TextMate selector, and the theme's own
//! highlighter resolves what color that token category gets. Token
//! categories a theme leaves uncolored are simply absent from the adapted
//! table, which the renderer reads as "use the default".
//!
//! One entry is defined locally: [`WIN32_STYLE`], a hand-picked set of
//! colors that displays legibly on 16-color consoles.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use syntect::highlighting::{FontStyle, Highlighter, StyleModifier, Theme, ThemeSet};
use syntect::parsing::Scope;
use tracing::debug;

use crate::error::StyleError;
use crate::style::{Attrs, StyleTable};

/// Reserved catalog name for the bespoke 16-color console theme.
pub const WIN32_STYLE: &str = "win32";

/// Local token scope → TextMate selector used to pull the matching color
/// out of an external theme.
const TOKEN_SCOPES: &[(&str, &str)] = &[
    ("pygments.comment", "comment"),
    ("pygments.keyword", "keyword"),
    ("pygments.number", "constant.numeric"),
    ("pygments.operator", "keyword.operator"),
    ("pygments.string", "string"),
    ("pygments.name", "variable"),
    ("pygments.name.attribute", "entity.other.attribute-name"),
    ("pygments.name.builtin", "support.function"),
    ("pygments.name.class", "entity.name.class"),
    ("pygments.name.constant", "constant"),
    ("pygments.name.decorator", "entity.name.function.decorator"),
    ("pygments.name.entity", "entity.name"),
    ("pygments.name.exception", "entity.name.exception"),
    ("pygments.name.function", "entity.name.function"),
    ("pygments.name.label", "entity.name.label"),
    ("pygments.name.namespace", "entity.name.namespace"),
    ("pygments.name.tag", "entity.name.tag"),
    ("pygments.name.variable", "variable.other"),
];

/// Colors for 16-color consoles, chosen to display legibly there.
///
/// Only these seven scopes are set; everything else inherits the renderer
/// default rather than carrying an empty override.
const WIN32_TOKEN_COLORS: &[(&str, &str)] = &[
    ("pygments.comment", "#00ff00"),
    ("pygments.keyword", "#44ff44"),
    ("pygments.string", "#ff44ff"),
    ("pygments.name.builtin", "#ff4444"),
    ("pygments.name.class", "#ff4444"),
    ("pygments.name.decorator", "#ff4444"),
    ("pygments.name.function", "#ff4444"),
];

/// The external theme set, loaded exactly once per process.
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Lists every name in the code style catalog, sorted.
///
/// This is every theme the external set knows plus [`WIN32_STYLE`].
pub fn code_style_names() -> Vec<String> {
    let mut names: Vec<String> = THEME_SET.themes.keys().cloned().collect();
    names.push(WIN32_STYLE.to_string());
    names.sort();
    names.dedup();
    names
}

/// Builds the full code style catalog.
///
/// Every external theme is resolved through the set's lookup-by-name and
/// adapted to `pygments.*` scopes; the [`WIN32_STYLE`] entry is added last
/// and wins should the external set ever claim the same name.
pub fn code_styles() -> BTreeMap<String, StyleTable> {
    debug!(themes = THEME_SET.themes.len(), "building code style catalog");
    let mut styles: BTreeMap<String, StyleTable> = THEME_SET
        .themes
        .iter()
        .map(|(name, theme)| (name.clone(), adapt_theme(theme)))
        .collect();
    styles.insert(WIN32_STYLE.to_string(), win32_style());
    styles
}

/// Looks up a single code style by name.
///
/// # Errors
///
/// Returns [`StyleError::UnknownCodeStyle`] when neither the external set
/// nor the local [`WIN32_STYLE`] entry has the name.
pub fn code_style(name: &str) -> Result<StyleTable, StyleError> {
    if name == WIN32_STYLE {
        return Ok(win32_style());
    }
    THEME_SET
        .themes
        .get(name)
        .map(adapt_theme)
        .ok_or_else(|| StyleError::UnknownCodeStyle {
            name: name.to_string(),
        })
}

/// Adapts one external theme to a `pygments.*`-keyed table.
fn adapt_theme(theme: &Theme) -> StyleTable {
    let highlighter = Highlighter::new(theme);
    let mut table = StyleTable::new();
    for (scope_name, selector) in TOKEN_SCOPES {
        let Ok(scope) = Scope::new(selector) else {
            continue;
        };
        let modifier = highlighter.style_mod_for_stack(&[scope]);
        if let Some(attrs) = attrs_from_modifier(modifier) {
            table.set(*scope_name, attrs);
        }
    }
    table
}

fn win32_style() -> StyleTable {
    StyleTable::from_pairs(WIN32_TOKEN_COLORS)
}

/// Converts a resolved theme modifier into attributes.
///
/// Returns `None` when the theme says nothing about the token category, so
/// the scope stays absent instead of becoming an empty override.
fn attrs_from_modifier(modifier: StyleModifier) -> Option<Attrs> {
    let mut attrs = Attrs::new();
    if let Some(color) = modifier.foreground {
        attrs.fg = Some(format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b));
    }
    if let Some(color) = modifier.background {
        attrs.bg = Some(format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b));
    }
    if let Some(font) = modifier.font_style {
        attrs.bold = font.contains(FontStyle::BOLD);
        attrs.underline = font.contains(FontStyle::UNDERLINE);
    }
    if attrs.is_empty() {
        None
    } else {
        Some(attrs)
    }
}
