//! Catalog lookup errors.

/// Error returned when a requested theme name is not in its catalog.
///
/// Both variants are fatal to the requested composition and recoverable by
/// selecting another name. Malformed style *values* are never an error
/// here; they pass through to the renderer verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The code (syntax) style catalog has no entry with this name.
    UnknownCodeStyle { name: String },
    /// The UI style catalog has no entry with this name.
    UnknownUiStyle { name: String },
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::UnknownCodeStyle { name } => {
                write!(f, "unknown code style '{}'", name)
            }
            StyleError::UnknownUiStyle { name } => {
                write!(f, "unknown ui style '{}'", name)
            }
        }
    }
}

impl std::error::Error for StyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_style_display() {
        let err = StyleError::UnknownCodeStyle {
            name: "no-such-theme".to_string(),
        };
        assert_eq!(err.to_string(), "unknown code style 'no-such-theme'");
    }

    #[test]
    fn test_unknown_ui_style_display() {
        let err = StyleError::UnknownUiStyle {
            name: "green".to_string(),
        };
        assert_eq!(err.to_string(), "unknown ui style 'green'");
    }
}
