//! Case derivation for feature names.
//!
//! # Design
//!
//! These are pure functions: no I/O, no state, fully deterministic. Every
//! downstream component (templates, tree builders, patchers) consumes the
//! derived [`NameForms`] rather than re-deriving cases ad hoc, so a feature
//! name is converted exactly once per generation.
//!
//! # Known limitation
//!
//! `to_snake_case` inserts an underscore before *every* non-leading uppercase
//! character, so acronym runs degrade: `"HTTPServer"` becomes
//! `"h_t_t_p_server"`, not `"http_server"`. This matches the documented
//! contract and is deliberately not "fixed"; generated identifiers must stay
//! stable across releases.

use serde::{Deserialize, Serialize};

/// The three casing variants derived from a user-supplied feature name.
///
/// A value object: computed once from the raw name, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameForms {
    /// `"order history"` → `"OrderHistory"` (class names).
    pub pascal: String,
    /// `"order history"` → `"orderHistory"` (feature directory, accessors).
    pub camel: String,
    /// `"order history"` → `"order_history"` (Dart files, layout resources).
    pub snake: String,
}

impl NameForms {
    /// Derive all three forms from a raw feature name.
    pub fn derive(raw: &str) -> Self {
        let pascal = to_pascal_case(raw);
        Self {
            camel: to_camel_case(raw),
            snake: to_snake_case(&pascal),
            pascal,
        }
    }

    /// Lowercased pascal form, used for generated package segments
    /// (`features.orderhistory.domain.model`).
    pub fn package_segment(&self) -> String {
        self.pascal.to_lowercase()
    }
}

/// Convert to PascalCase.
///
/// Splits on spaces, underscores and hyphens, drops blank segments,
/// lowercases each segment and uppercases its first character.
/// Empty input yields empty output.
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c| c == ' ' || c == '_' || c == '-')
        .filter(|seg| !seg.trim().is_empty())
        .map(capitalize_lowered)
        .collect()
}

/// Convert to camelCase: PascalCase with the first character lowercased.
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    lower_first(&pascal)
}

/// Convert to snake_case.
///
/// Emits an underscore before each uppercase character that is not the first
/// character, then lowercases everything. Pre-existing separators are not
/// handled here; callers pass the pascal form (see [`NameForms::derive`]).
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_uppercase() && !out.is_empty() {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }
    out
}

fn capitalize_lowered(seg: &str) -> String {
    let lowered = seg.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_from_spaced_words() {
        assert_eq!(to_pascal_case("order history"), "OrderHistory");
        assert_eq!(to_pascal_case("user details"), "UserDetails");
    }

    #[test]
    fn pascal_from_mixed_separators() {
        assert_eq!(to_pascal_case("user_details"), "UserDetails");
        assert_eq!(to_pascal_case("user-details"), "UserDetails");
        assert_eq!(to_pascal_case("user _ details"), "UserDetails");
    }

    #[test]
    fn pascal_lowercases_segments_first() {
        assert_eq!(to_pascal_case("USER DETAILS"), "UserDetails");
    }

    #[test]
    fn pascal_of_empty_is_empty() {
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_pascal_case("   "), "");
    }

    #[test]
    fn camel_lowercases_first_char_only() {
        assert_eq!(to_camel_case("order history"), "orderHistory");
        assert_eq!(to_camel_case("cart"), "cart");
    }

    #[test]
    fn camel_first_char_is_lowercase_when_nonempty() {
        for raw in ["Order History", "a", "Z", "foo_bar-baz"] {
            let camel = to_camel_case(raw);
            let first = camel.chars().next().unwrap();
            assert!(first.is_lowercase() || !first.is_alphabetic(), "{camel}");
        }
    }

    #[test]
    fn snake_splits_camel_humps() {
        assert_eq!(to_snake_case("UserProfile"), "user_profile");
        assert_eq!(to_snake_case("OrderHistory"), "order_history");
    }

    #[test]
    fn snake_acronym_runs_degrade() {
        // Documented limitation, not a bug: each uppercase char gets its own
        // underscore.
        assert_eq!(to_snake_case("HTTPServer"), "h_t_t_p_server");
    }

    #[test]
    fn snake_of_lowercase_is_identity() {
        assert_eq!(to_snake_case("cart"), "cart");
    }

    #[test]
    fn snake_does_not_touch_existing_separators() {
        // The function only reacts to uppercase characters; spaces pass
        // through. NameForms::derive routes through the pascal form first,
        // so generated file names never carry spaces.
        assert_eq!(to_snake_case("user profile"), "user profile");
        assert_eq!(to_snake_case("user_profile"), "user_profile");
    }

    #[test]
    fn derive_produces_consistent_forms() {
        let forms = NameForms::derive("order history");
        assert_eq!(forms.pascal, "OrderHistory");
        assert_eq!(forms.camel, "orderHistory");
        assert_eq!(forms.snake, "order_history");
        assert_eq!(forms.package_segment(), "orderhistory");
    }

    #[test]
    fn derive_is_referentially_transparent() {
        assert_eq!(NameForms::derive("cart"), NameForms::derive("cart"));
    }
}
