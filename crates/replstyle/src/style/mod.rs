//! Style primitives: attribute values and scope-keyed tables.
//!
//! A style is addressed by a *scope* — a dotted or space-separated
//! hierarchical name such as `prompt`, `sidebar.title`, or
//! `pygments.name.function`. Scope names are opaque strings here; the
//! renderer owns hierarchical fallback, this crate only produces the data
//! it resolves against.

mod attrs;
mod table;

pub use attrs::Attrs;
pub use table::StyleTable;
