//! Pure text transforms for patching pre-existing generated artifacts.
//!
//! Each function takes the target's full text and returns `Some(new_text)`
//! when a change is needed, `None` when the text already contains the entry
//! **or** when an expected anchor (header, bracket pair, closing tag) is
//! missing. Callers re-save only on `Some`; a `None` from a missing anchor
//! is a silent skip, a documented weak point of the patching contract, not
//! a recovery path.
//!
//! Everything here is offset/substring based, not structural. Idempotency
//! comes from the containment checks: re-running a patch with the same
//! inputs never duplicates an entry.

/// Bracket pair and class-literal suffix used by a registration list.
///
/// Kotlin's `@Database(entities = [Foo::class])` vs Java's
/// `@Database(entities = {Foo.class})`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStyle {
    pub open: char,
    pub close: char,
    pub suffix: &'static str,
}

impl RegistryStyle {
    pub const KOTLIN: Self = Self {
        open: '[',
        close: ']',
        suffix: "::class",
    };

    pub const JAVA: Self = Self {
        open: '{',
        close: '}',
        suffix: ".class",
    };
}

/// Insert an import line at the package/header boundary.
///
/// The line goes immediately before the first existing `import `, or
/// immediately after the `package ` header line when no imports exist yet.
/// Skipped (returns `None`) when the line is already present or the file has
/// no `package ` header.
pub fn insert_import(text: &str, import_line: &str) -> Option<String> {
    if text.contains(import_line) {
        return None;
    }

    let package_idx = text.find("package ")?;

    let insert_offset = match text[package_idx..].find("import ") {
        Some(rel) => package_idx + rel,
        None => match text[package_idx..].find('\n') {
            Some(rel) => package_idx + rel + 1,
            None => text.len(),
        },
    };

    let mut out = String::with_capacity(text.len() + import_line.len() + 1);
    out.push_str(&text[..insert_offset]);
    out.push_str(import_line);
    out.push('\n');
    out.push_str(&text[insert_offset..]);
    Some(out)
}

/// Append a class token to the `entities` registration list of a
/// `@Database(...)` annotation, comma-separated, preserving existing entries
/// verbatim.
///
/// Skipped when the annotation, the `entities` key, or the bracket pair is
/// missing, or when the token is already registered.
pub fn register_entity(text: &str, entity_name: &str, style: RegistryStyle) -> Option<String> {
    let annotation_idx = text.find("@Database(")?;
    let entities_idx = annotation_idx + text[annotation_idx..].find("entities")?;
    let open_idx = entities_idx + text[entities_idx..].find(style.open)?;
    let close_idx = open_idx + text[open_idx..].find(style.close)?;

    let current = text[open_idx + 1..close_idx].trim();
    let token = format!("{entity_name}{}", style.suffix);

    if current.contains(&token) {
        return None;
    }

    let updated = if current.is_empty() {
        token
    } else {
        format!("{current}, {token}")
    };

    let mut out = String::with_capacity(text.len() + updated.len() + 2);
    out.push_str(&text[..open_idx + 1]);
    out.push(' ');
    out.push_str(&updated);
    out.push(' ');
    out.push_str(&text[close_idx..]);
    Some(out)
}

/// Insert an accessor declaration immediately before the file's final `}`.
///
/// `probe` is the substring whose presence means the accessor already exists
/// (typically the method signature). Skipped when the probe is found or the
/// file has no closing brace.
pub fn append_accessor(text: &str, probe: &str, declaration: &str) -> Option<String> {
    if text.contains(probe) {
        return None;
    }

    let class_end = text.rfind('}')?;

    let mut out = String::with_capacity(text.len() + declaration.len());
    out.push_str(&text[..class_end]);
    out.push_str(declaration);
    out.push_str(&text[class_end..]);
    Some(out)
}

/// Insert a navigation entry block immediately before the final
/// `</navigation>` closing tag.
///
/// Skipped when either marker (the fully-qualified screen reference or the
/// generated identifier) already appears, or when the closing tag is absent.
pub fn insert_navigation_entry(
    text: &str,
    fragment_class: &str,
    fragment_id: &str,
    entry_block: &str,
) -> Option<String> {
    if text.contains(fragment_class) || text.contains(fragment_id) {
        return None;
    }

    let insert_idx = text.rfind("</navigation>")?;

    let mut out = String::with_capacity(text.len() + entry_block.len() + 2);
    out.push_str(&text[..insert_idx]);
    out.push('\n');
    out.push_str(entry_block);
    out.push('\n');
    out.push_str(&text[insert_idx..]);
    Some(out)
}
