//! Class-name and element-id helpers shared by the components.

use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// `base` plus an optional caller-supplied class
pub fn with_extra(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

/// `base` plus each modifier whose flag is set
pub fn with_modifiers(base: &str, modifiers: &[(&str, bool)]) -> String {
    let mut class = base.to_string();
    for (name, on) in modifiers {
        if *on {
            class.push(' ');
            class.push_str(name);
        }
    }
    class
}

/// Process-unique element id, e.g. `textfield-7`.
///
/// Call through `use_hook` so the id is stable across renders.
pub fn next_id(prefix: &str) -> String {
    format!("{prefix}-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_class_appended() {
        assert_eq!(with_extra("btn", None), "btn");
        assert_eq!(with_extra("btn", Some("")), "btn");
        assert_eq!(with_extra("btn", Some("wide")), "btn wide");
    }

    #[test]
    fn modifiers_appended_in_order() {
        assert_eq!(
            with_modifiers("chip", &[("selected", true), ("disabled", false), ("icon", true)]),
            "chip selected icon"
        );
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(next_id("x"), next_id("x"));
    }
}
