//! Controlled/uncontrolled value holder.
//!
//! Inputs in the kit accept an optional externally owned value. When it is
//! present the caller owns the state; when it is absent the component owns
//! it. [`ControlledValue`] makes that ownership explicit instead of leaning
//! on effect ordering.

/// Who owns the displayed value right now.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Ownership {
    /// The caller supplied a value; it wins on every prop transition.
    Controlled,
    /// No value supplied; the component is the sole owner.
    Uncontrolled,
}

/// Dual-mode state holder shared by TextField, Dropdown, Checkbox and the
/// radio selector.
#[derive(Clone, PartialEq, Debug)]
pub struct ControlledValue<T> {
    external: Option<T>,
    internal: T,
}

impl<T: Clone + PartialEq> ControlledValue<T> {
    /// Internal state starts from `external`, falling back to `fallback`
    /// (the caller's default value or an empty value).
    pub fn new(external: Option<T>, fallback: T) -> Self {
        let internal = external.clone().unwrap_or(fallback);
        Self { external, internal }
    }

    /// Ownership is derived from the external value on every call.
    pub fn ownership(&self) -> Ownership {
        if self.external.is_some() {
            Ownership::Controlled
        } else {
            Ownership::Uncontrolled
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.ownership() == Ownership::Controlled
    }

    /// The value to display. Prop transitions land here through
    /// [`ControlledValue::sync_external`].
    pub fn current(&self) -> &T {
        &self.internal
    }

    /// Whether `external` differs from the value last synced.
    pub fn needs_sync(&self, external: &Option<T>) -> bool {
        self.external != *external
    }

    /// Apply a prop transition. A supplied value overwrites internal state,
    /// including anything typed since the previous transition.
    pub fn sync_external(&mut self, external: Option<T>) {
        if let Some(value) = &external {
            self.internal = value.clone();
        }
        self.external = external;
    }

    /// Apply a user interaction.
    ///
    /// Returns the value to hand to `on_change`, or `None` when the control
    /// is disabled (no state change, no callback).
    pub fn commit(&mut self, value: T, disabled: bool) -> Option<T> {
        if disabled {
            return None;
        }
        self.internal = value.clone();
        Some(value)
    }
}

impl<T: Clone + PartialEq + Default> ControlledValue<T> {
    /// Like [`ControlledValue::new`] with `default_value ?? T::default()`.
    pub fn with_default(external: Option<T>, default_value: Option<T>) -> Self {
        Self::new(external, default_value.unwrap_or_default())
    }
}
