//! Template catalogs: fixed source bodies per (language, DI,
//! state-management) selection.
//!
//! Catalogs are string evaluators only; they never inspect the filesystem.
//! Cross-file references inside the Flutter bodies go through a
//! [`PathProfile`](featforge_core::domain::PathProfile); everything else is
//! plain placeholder substitution via
//! [`TemplateContext`](featforge_core::domain::TemplateContext).

pub mod android;
pub mod flutter;
