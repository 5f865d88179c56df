//! Shared component hooks.

use dioxus::prelude::*;
use storefront_core::ControlledValue;

/// Controlled/uncontrolled state for an input.
///
/// `value` is the caller's prop. Each time it changes to `Some`, the new
/// value overwrites whatever the user entered; while it is `None` the
/// component owns the value. User commits show immediately either way.
///
/// # Example
///
/// ```rust,ignore
/// let mut state = use_controlled(props.value.clone(), || {
///     props.default_value.clone().unwrap_or_default()
/// });
///
/// let shown = state.read().current().clone();
/// if let Some(v) = state.write().commit(next, props.disabled) {
///     if let Some(handler) = &props.on_change {
///         handler.call(v);
///     }
/// }
/// ```
pub fn use_controlled<T>(value: Option<T>, fallback: impl FnOnce() -> T) -> Signal<ControlledValue<T>>
where
    T: Clone + PartialEq + 'static,
{
    let initial = value.clone();
    let mut state = use_signal(move || ControlledValue::new(initial, fallback()));

    use_effect(use_reactive((&value,), move |(value,)| {
        if state.peek().needs_sync(&value) {
            state.write().sync_external(value);
        }
    }));

    state
}
