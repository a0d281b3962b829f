//! Structured style attributes and the classic string form.
//!
//! Themes have traditionally written style values as space-separated token
//! strings like `"bg:#44bbbb #000000 bold"`. [`Attrs`] keeps the same
//! surface (it parses from and formats back to that form, and serializes as
//! it) while giving the rest of the crate discriminated fields to work with
//! instead of opaque strings.
//!
//! Color *tokens* stay opaque: `"#ff0000"`, `"ansiblue"`, and malformed
//! values all pass through verbatim. Detecting a bad color is the
//! renderer's job.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single style rule's attributes.
///
/// All fields default to unset. An all-default `Attrs` is meaningful when
/// present in a table: it says "explicitly unstyled", which tells the
/// renderer to stop inheritance lookup at that scope rather than falling
/// through to a parent. A scope that is *absent* from the table falls
/// through instead.
///
/// # Example
///
/// ```rust
/// use replstyle::Attrs;
///
/// let attrs = Attrs::parse("bg:#44bbbb #000000 bold");
/// assert_eq!(attrs.fg.as_deref(), Some("#000000"));
/// assert_eq!(attrs.bg.as_deref(), Some("#44bbbb"));
/// assert!(attrs.bold);
/// assert!(!attrs.underline);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    /// Foreground color token, passed through verbatim.
    pub fg: Option<String>,
    /// Background color token (written `bg:<token>` in string form).
    pub bg: Option<String>,
    /// Bold text.
    pub bold: bool,
    /// Underlined text.
    pub underline: bool,
    /// Halt the renderer's hierarchical fallback at this scope.
    pub noinherit: bool,
}

impl Attrs {
    /// Creates empty attributes (everything unset).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the classic space-separated attribute string.
    ///
    /// Total: there is no malformed input. A `bg:`-prefixed token sets the
    /// background, the literal words `bold`, `underline`, and `noinherit`
    /// set their flags, and any other token sets the foreground (with or
    /// without the optional `fg:` prefix). Last write wins per field. The
    /// empty string yields [`Attrs::default`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use replstyle::Attrs;
    ///
    /// assert_eq!(Attrs::parse(""), Attrs::default());
    /// assert!(Attrs::parse("underline noinherit").noinherit);
    /// ```
    pub fn parse(spec: &str) -> Self {
        let mut attrs = Attrs::new();
        for token in spec.split_whitespace() {
            if let Some(color) = token.strip_prefix("bg:") {
                attrs.bg = Some(color.to_string());
            } else if let Some(color) = token.strip_prefix("fg:") {
                attrs.fg = Some(color.to_string());
            } else {
                match token {
                    "bold" => attrs.bold = true,
                    "underline" => attrs.underline = true,
                    "noinherit" => attrs.noinherit = true,
                    other => attrs.fg = Some(other.to_string()),
                }
            }
        }
        attrs
    }

    /// Returns true if every field is unset.
    ///
    /// A present-but-empty entry is still significant, see the type docs.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && !self.bold && !self.underline && !self.noinherit
    }
}

impl fmt::Display for Attrs {
    /// Formats back to the classic string form.
    ///
    /// Token order is normalized to fg, bg, bold, underline, noinherit;
    /// renderers treat the tokens as an unordered set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if let Some(ref fg) = self.fg {
            write!(f, "{}", fg)?;
            sep = " ";
        }
        if let Some(ref bg) = self.bg {
            write!(f, "{}bg:{}", sep, bg)?;
            sep = " ";
        }
        for (on, word) in [
            (self.bold, "bold"),
            (self.underline, "underline"),
            (self.noinherit, "noinherit"),
        ] {
            if on {
                write!(f, "{}{}", sep, word)?;
                sep = " ";
            }
        }
        Ok(())
    }
}

impl FromStr for Attrs {
    type Err = Infallible;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        Ok(Attrs::parse(spec))
    }
}

impl From<&str> for Attrs {
    fn from(spec: &str) -> Self {
        Attrs::parse(spec)
    }
}

impl Serialize for Attrs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Attrs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let spec = String::deserialize(deserializer)?;
        Ok(Attrs::parse(&spec))
    }
}
