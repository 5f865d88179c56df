//! Dropdown listbox state machine.
//!
//! Opening, closing, keyboard navigation and selection for the Dropdown
//! atom. The outside-click subscription is modelled as a guard that exists
//! exactly while the list is open, so every closing path releases it.

use std::cell::Cell;
use std::rc::Rc;

/// A single option in a dropdown list
#[derive(Clone, PartialEq, Debug)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Builder-style disabled flag
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Keys the dropdown reacts to
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DropdownKey {
    Enter,
    Space,
    ArrowDown,
    ArrowUp,
    Home,
    End,
    Escape,
    Tab,
    Other,
}

impl DropdownKey {
    /// Map a DOM `KeyboardEvent.key` string
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Enter" => DropdownKey::Enter,
            " " | "Spacebar" => DropdownKey::Space,
            "ArrowDown" => DropdownKey::ArrowDown,
            "ArrowUp" => DropdownKey::ArrowUp,
            "Home" => DropdownKey::Home,
            "End" => DropdownKey::End,
            "Escape" | "Esc" => DropdownKey::Escape,
            "Tab" => DropdownKey::Tab,
            _ => DropdownKey::Other,
        }
    }
}

/// Inputs to the state machine
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DropdownEvent {
    TriggerClick,
    Key(DropdownKey),
    OutsidePointerDown,
    /// Click on the option at this index
    Select(usize),
}

/// What the component must do after an event
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DropdownOutcome {
    /// Value to pass to `on_change`, at most once per event
    pub selected: Option<String>,
    /// Move focus back to the trigger button
    pub focus_trigger: bool,
    /// The event was consumed (prevent default scrolling etc.)
    pub handled: bool,
}

/// Open/highlight state of one dropdown instance
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DropdownState {
    open: bool,
    highlighted: Option<usize>,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Whether the outside-click subscription must be held
    pub fn listening(&self) -> bool {
        self.open
    }

    /// Drive the state machine.
    ///
    /// `selected_value` is the currently displayed value, used to place the
    /// initial highlight. A `disabled` dropdown ignores every event.
    pub fn handle(
        &mut self,
        event: DropdownEvent,
        options: &[DropdownOption],
        selected_value: Option<&str>,
        disabled: bool,
    ) -> DropdownOutcome {
        if disabled {
            self.close();
            return DropdownOutcome::default();
        }

        match event {
            DropdownEvent::TriggerClick => {
                if self.open {
                    self.close();
                } else {
                    self.open_at(options, selected_value);
                }
                DropdownOutcome {
                    handled: true,
                    ..Default::default()
                }
            }
            DropdownEvent::OutsidePointerDown => {
                let was_open = self.open;
                self.close();
                DropdownOutcome {
                    handled: was_open,
                    ..Default::default()
                }
            }
            DropdownEvent::Select(index) => self.select(index, options),
            DropdownEvent::Key(key) => self.key(key, options, selected_value),
        }
    }

    fn key(
        &mut self,
        key: DropdownKey,
        options: &[DropdownOption],
        selected_value: Option<&str>,
    ) -> DropdownOutcome {
        let handled = DropdownOutcome {
            handled: true,
            ..Default::default()
        };

        if !self.open {
            return match key {
                DropdownKey::Enter | DropdownKey::Space | DropdownKey::ArrowDown => {
                    self.open_at(options, selected_value);
                    handled
                }
                _ => DropdownOutcome::default(),
            };
        }

        match key {
            DropdownKey::Escape => {
                self.close();
                DropdownOutcome {
                    focus_trigger: true,
                    handled: true,
                    ..Default::default()
                }
            }
            DropdownKey::Tab => {
                self.close();
                DropdownOutcome::default()
            }
            DropdownKey::ArrowDown => {
                self.highlighted = next_enabled(options, self.highlighted, Direction::Forward);
                handled
            }
            DropdownKey::ArrowUp => {
                self.highlighted = next_enabled(options, self.highlighted, Direction::Backward);
                handled
            }
            DropdownKey::Home => {
                self.highlighted = first_enabled(options);
                handled
            }
            DropdownKey::End => {
                self.highlighted = last_enabled(options);
                handled
            }
            DropdownKey::Enter | DropdownKey::Space => match self.highlighted {
                Some(index) => {
                    let mut outcome = self.select(index, options);
                    if outcome.selected.is_some() {
                        outcome.focus_trigger = true;
                    }
                    outcome
                }
                None => handled,
            },
            DropdownKey::Other => DropdownOutcome::default(),
        }
    }

    fn select(&mut self, index: usize, options: &[DropdownOption]) -> DropdownOutcome {
        if !self.open {
            return DropdownOutcome::default();
        }
        match options.get(index) {
            Some(option) if !option.disabled => {
                self.close();
                DropdownOutcome {
                    selected: Some(option.value.clone()),
                    focus_trigger: false,
                    handled: true,
                }
            }
            // Disabled or stale index: stay open, no change
            _ => DropdownOutcome {
                handled: true,
                ..Default::default()
            },
        }
    }

    fn open_at(&mut self, options: &[DropdownOption], selected_value: Option<&str>) {
        self.open = true;
        self.highlighted = selected_value
            .and_then(|value| {
                options
                    .iter()
                    .position(|o| o.value == value && !o.disabled)
            })
            .or_else(|| first_enabled(options));
    }

    fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

fn first_enabled(options: &[DropdownOption]) -> Option<usize> {
    options.iter().position(|o| !o.disabled)
}

fn last_enabled(options: &[DropdownOption]) -> Option<usize> {
    options.iter().rposition(|o| !o.disabled)
}

/// Step to the next enabled option, stopping at the ends of the list.
fn next_enabled(
    options: &[DropdownOption],
    from: Option<usize>,
    direction: Direction,
) -> Option<usize> {
    let Some(current) = from else {
        return match direction {
            Direction::Forward => first_enabled(options),
            Direction::Backward => last_enabled(options),
        };
    };
    let found = match direction {
        Direction::Forward => options
            .iter()
            .enumerate()
            .skip(current + 1)
            .find(|(_, o)| !o.disabled)
            .map(|(i, _)| i),
        Direction::Backward => options[..current.min(options.len())]
            .iter()
            .rposition(|o| !o.disabled),
    };
    found.or(Some(current))
}

/// Label shown on the trigger for the current value
pub fn label_for<'a>(
    options: &'a [DropdownOption],
    value: Option<&str>,
    placeholder: &'a str,
) -> &'a str {
    value
        .and_then(|v| options.iter().find(|o| o.value == v))
        .map(|o| o.label.as_str())
        .unwrap_or(placeholder)
}

/// Shared count of live outside-click subscriptions.
///
/// The UI holds one [`OutsideClickGuard`] while a list is open. Dropping
/// the guard releases the subscription.
#[derive(Clone, Default, Debug)]
pub struct OutsideClickRegistry {
    active: Rc<Cell<usize>>,
}

impl OutsideClickRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> OutsideClickGuard {
        self.active.set(self.active.get() + 1);
        tracing::trace!(active = self.active.get(), "outside-click listener acquired");
        OutsideClickGuard {
            active: Rc::clone(&self.active),
        }
    }

    pub fn active(&self) -> usize {
        self.active.get()
    }
}

/// RAII token for one outside-click subscription
#[derive(Debug)]
pub struct OutsideClickGuard {
    active: Rc<Cell<usize>>,
}

impl Drop for OutsideClickGuard {
    fn drop(&mut self) {
        self.active.set(self.active.get().saturating_sub(1));
        tracing::trace!(active = self.active.get(), "outside-click listener released");
    }
}

/// Keep a guard in `slot` iff `state` is listening.
pub fn reconcile_guard(
    state: &DropdownState,
    registry: &OutsideClickRegistry,
    slot: &mut Option<OutsideClickGuard>,
) {
    match (state.listening(), slot.is_some()) {
        (true, false) => *slot = Some(registry.subscribe()),
        (false, true) => *slot = None,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<DropdownOption> {
        vec![
            DropdownOption::new("s", "Small"),
            DropdownOption::new("m", "Medium").disabled(),
            DropdownOption::new("l", "Large"),
        ]
    }

    fn opened() -> DropdownState {
        let mut state = DropdownState::new();
        state.handle(DropdownEvent::TriggerClick, &options(), None, false);
        state
    }

    #[test]
    fn opens_on_click_enter_space_and_arrow_down() {
        for event in [
            DropdownEvent::TriggerClick,
            DropdownEvent::Key(DropdownKey::Enter),
            DropdownEvent::Key(DropdownKey::Space),
            DropdownEvent::Key(DropdownKey::ArrowDown),
        ] {
            let mut state = DropdownState::new();
            state.handle(event, &options(), None, false);
            assert!(state.is_open(), "{event:?} should open");
        }
    }

    #[test]
    fn escape_closes_and_returns_focus() {
        let mut state = opened();
        let outcome = state.handle(
            DropdownEvent::Key(DropdownKey::Escape),
            &options(),
            None,
            false,
        );
        assert!(!state.is_open());
        assert!(outcome.focus_trigger);
        assert!(outcome.selected.is_none());
    }

    #[test]
    fn outside_pointer_down_closes() {
        let mut state = opened();
        state.handle(DropdownEvent::OutsidePointerDown, &options(), None, false);
        assert!(!state.is_open());
    }

    #[test]
    fn selecting_disabled_option_keeps_list_open() {
        let mut state = opened();
        let outcome = state.handle(DropdownEvent::Select(1), &options(), None, false);
        assert!(state.is_open());
        assert_eq!(outcome.selected, None);
    }

    #[test]
    fn selecting_enabled_option_closes_and_reports_once() {
        let mut state = opened();
        let outcome = state.handle(DropdownEvent::Select(2), &options(), None, false);
        assert!(!state.is_open());
        assert_eq!(outcome.selected.as_deref(), Some("l"));

        // A second click on a closed list changes nothing
        let outcome = state.handle(DropdownEvent::Select(2), &options(), None, false);
        assert_eq!(outcome.selected, None);
    }

    #[test]
    fn arrow_navigation_skips_disabled() {
        let mut state = opened();
        assert_eq!(state.highlighted(), Some(0));
        state.handle(DropdownEvent::Key(DropdownKey::ArrowDown), &options(), None, false);
        assert_eq!(state.highlighted(), Some(2));
        state.handle(DropdownEvent::Key(DropdownKey::ArrowDown), &options(), None, false);
        assert_eq!(state.highlighted(), Some(2));
        state.handle(DropdownEvent::Key(DropdownKey::ArrowUp), &options(), None, false);
        assert_eq!(state.highlighted(), Some(0));
    }

    #[test]
    fn enter_selects_highlighted() {
        let mut state = DropdownState::new();
        state.handle(DropdownEvent::Key(DropdownKey::Enter), &options(), Some("l"), false);
        assert_eq!(state.highlighted(), Some(2));
        let outcome = state.handle(
            DropdownEvent::Key(DropdownKey::Enter),
            &options(),
            Some("l"),
            false,
        );
        assert_eq!(outcome.selected.as_deref(), Some("l"));
        assert!(!state.is_open());
    }

    #[test]
    fn disabled_dropdown_is_inert() {
        let mut state = DropdownState::new();
        let outcome = state.handle(DropdownEvent::TriggerClick, &options(), None, true);
        assert!(!state.is_open());
        assert_eq!(outcome, DropdownOutcome::default());
    }

    #[test]
    fn guard_released_on_every_closing_path() {
        let registry = OutsideClickRegistry::new();
        let closers = [
            DropdownEvent::Key(DropdownKey::Escape),
            DropdownEvent::Key(DropdownKey::Tab),
            DropdownEvent::OutsidePointerDown,
            DropdownEvent::Select(0),
            DropdownEvent::TriggerClick,
        ];
        for closer in closers {
            let mut slot = None;
            let mut state = opened();
            reconcile_guard(&state, &registry, &mut slot);
            assert_eq!(registry.active(), 1);
            state.handle(closer, &options(), None, false);
            reconcile_guard(&state, &registry, &mut slot);
            assert_eq!(registry.active(), 0, "{closer:?} leaked a listener");
        }
    }

    #[test]
    fn guard_released_on_unmount() {
        let registry = OutsideClickRegistry::new();
        {
            let mut slot = None;
            reconcile_guard(&opened(), &registry, &mut slot);
            assert_eq!(registry.active(), 1);
        }
        assert_eq!(registry.active(), 0);
    }

    #[test]
    fn label_falls_back_to_placeholder() {
        let opts = options();
        assert_eq!(label_for(&opts, Some("l"), "Select"), "Large");
        assert_eq!(label_for(&opts, Some("xl"), "Select"), "Select");
        assert_eq!(label_for(&opts, None, "Select"), "Select");
    }

    #[test]
    fn key_names_map() {
        assert_eq!(DropdownKey::from_key_name(" "), DropdownKey::Space);
        assert_eq!(DropdownKey::from_key_name("Escape"), DropdownKey::Escape);
        assert_eq!(DropdownKey::from_key_name("a"), DropdownKey::Other);
    }
}
