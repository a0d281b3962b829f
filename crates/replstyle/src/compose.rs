//! Merging a code style with a UI style.

use tracing::trace;

use crate::style::StyleTable;

/// Merges a code style and a UI style into one resolved table.
///
/// Pure union with strict precedence: code rules apply first, UI rules are
/// layered on top and win on any scope-name collision. Scope names and
/// color tokens are never validated here; malformed values reach the
/// renderer verbatim.
///
/// # Example
///
/// ```rust
/// use replstyle::{compose, Attrs, StyleTable};
///
/// let code = StyleTable::new().add("pygments.keyword", Attrs::parse("bold"));
/// let ui = StyleTable::new().add("prompt", Attrs::parse("bold"));
///
/// let resolved = compose(&code, &ui);
/// assert!(resolved.contains("pygments.keyword"));
/// assert!(resolved.contains("prompt"));
/// ```
pub fn compose(code: &StyleTable, ui: &StyleTable) -> StyleTable {
    trace!(
        code_rules = code.len(),
        ui_rules = ui.len(),
        "composing resolved style"
    );
    let mut resolved = code.clone();
    resolved.extend_from(ui);
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Attrs;
    use proptest::collection::btree_map;
    use proptest::option;
    use proptest::prelude::*;

    #[test]
    fn test_ui_wins_on_collision() {
        let code = StyleTable::new().add("separator", Attrs::parse("#111111"));
        let ui = StyleTable::new().add("separator", Attrs::parse("#bbbbbb"));

        let resolved = compose(&code, &ui);
        assert_eq!(resolved.get("separator").unwrap().fg.as_deref(), Some("#bbbbbb"));
    }

    #[test]
    fn test_single_side_rules_pass_through() {
        let code = StyleTable::new().add("pygments.comment", Attrs::parse("#00ff00"));
        let ui = StyleTable::new().add("prompt", Attrs::parse("bold"));

        let resolved = compose(&code, &ui);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved.get("pygments.comment"), code.get("pygments.comment"));
        assert_eq!(resolved.get("prompt"), ui.get("prompt"));
    }

    #[test]
    fn test_empty_inputs() {
        let empty = StyleTable::new();
        let ui = StyleTable::new().add("prompt", Attrs::parse("bold"));

        assert_eq!(compose(&empty, &empty), empty);
        assert_eq!(compose(&empty, &ui), ui);
        assert_eq!(compose(&ui, &empty), ui);
    }

    #[test]
    fn test_inputs_are_untouched() {
        let code = StyleTable::new().add("pygments.string", Attrs::parse("#ff44ff"));
        let ui = StyleTable::new().add("pygments.string", Attrs::parse(""));

        let before = code.clone();
        let _ = compose(&code, &ui);
        assert_eq!(code, before);
    }

    fn arb_attrs() -> impl Strategy<Value = Attrs> {
        (
            option::of("#[0-9a-f]{6}"),
            option::of("#[0-9a-f]{6}"),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(fg, bg, bold, underline, noinherit)| Attrs {
                fg,
                bg,
                bold,
                underline,
                noinherit,
            })
    }

    fn arb_table() -> impl Strategy<Value = StyleTable> {
        btree_map("[a-z]{1,6}(\\.[a-z]{1,6})?", arb_attrs(), 0..8).prop_map(StyleTable::from)
    }

    proptest! {
        #[test]
        fn prop_compose_is_deterministic(code in arb_table(), ui in arb_table()) {
            prop_assert_eq!(compose(&code, &ui), compose(&code, &ui));
        }

        #[test]
        fn prop_collisions_resolve_to_ui(code in arb_table(), ui in arb_table()) {
            let resolved = compose(&code, &ui);
            for (scope, attrs) in ui.iter() {
                prop_assert_eq!(resolved.get(scope), Some(attrs));
            }
        }

        #[test]
        fn prop_code_only_scopes_unchanged(code in arb_table(), ui in arb_table()) {
            let resolved = compose(&code, &ui);
            for (scope, attrs) in code.iter() {
                if !ui.contains(scope) {
                    prop_assert_eq!(resolved.get(scope), Some(attrs));
                }
            }
        }

        #[test]
        fn prop_no_scopes_invented(code in arb_table(), ui in arb_table()) {
            let resolved = compose(&code, &ui);
            for (scope, _) in resolved.iter() {
                prop_assert!(code.contains(scope) || ui.contains(scope));
            }
        }
    }
}
