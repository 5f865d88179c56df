//! Quantity stepper used by the QuantitySelector molecule.

/// Default lower bound; at this quantity the left action removes the item
pub const DEFAULT_MIN_QUANTITY: u32 = 1;
/// Default upper bound
pub const DEFAULT_MAX_QUANTITY: u32 = 99;

/// Meaning of the left-hand stepper button
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LeftAction {
    /// At minimum: remove the item from the cart
    Remove,
    Decrement,
}

impl LeftAction {
    pub fn aria_label(&self) -> &'static str {
        match self {
            LeftAction::Remove => "Remove item",
            LeftAction::Decrement => "Decrease quantity",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            LeftAction::Remove => "/trash.svg",
            LeftAction::Decrement => "/minus.svg",
        }
    }
}

/// Result of pressing a stepper button
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// Fire `on_delete`; quantity unchanged
    Delete,
    /// Fire `on_decrement` with the new quantity
    Decrement(u32),
    /// Fire `on_increment` with the new quantity
    Increment(u32),
}

/// Local counter with min/max boundaries
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct QuantityStepper {
    quantity: u32,
    min: u32,
    max: u32,
}

impl Default for QuantityStepper {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_QUANTITY, DEFAULT_MIN_QUANTITY, DEFAULT_MAX_QUANTITY)
    }
}

impl QuantityStepper {
    /// Initial quantity is clamped into `[min, max]`; `max` below `min` is
    /// raised to `min`.
    pub fn new(initial: u32, min: u32, max: u32) -> Self {
        let max = max.max(min);
        Self {
            quantity: initial.clamp(min, max),
            min,
            max,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn left_action(&self) -> LeftAction {
        if self.quantity <= self.min {
            LeftAction::Remove
        } else {
            LeftAction::Decrement
        }
    }

    pub fn can_increment(&self) -> bool {
        self.quantity < self.max
    }

    pub fn press_left(&mut self) -> StepOutcome {
        match self.left_action() {
            LeftAction::Remove => StepOutcome::Delete,
            LeftAction::Decrement => {
                self.quantity -= 1;
                StepOutcome::Decrement(self.quantity)
            }
        }
    }

    /// `None` at the maximum: nothing changes and no callback fires.
    pub fn press_right(&mut self) -> Option<StepOutcome> {
        if !self.can_increment() {
            tracing::debug!(max = self.max, "increment ignored at maximum quantity");
            return None;
        }
        self.quantity += 1;
        Some(StepOutcome::Increment(self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_at_minimum_deletes_without_change() {
        let mut stepper = QuantityStepper::default();
        assert_eq!(stepper.left_action(), LeftAction::Remove);
        assert_eq!(stepper.press_left(), StepOutcome::Delete);
        assert_eq!(stepper.quantity(), 1);
    }

    #[test]
    fn left_above_minimum_decrements() {
        let mut stepper = QuantityStepper::new(3, 1, 10);
        assert_eq!(stepper.left_action(), LeftAction::Decrement);
        assert_eq!(stepper.press_left(), StepOutcome::Decrement(2));
        assert_eq!(stepper.quantity(), 2);
        assert_eq!(stepper.press_left(), StepOutcome::Decrement(1));
        assert_eq!(stepper.left_action(), LeftAction::Remove);
    }

    #[test]
    fn right_at_maximum_is_inert() {
        let mut stepper = QuantityStepper::new(5, 1, 5);
        assert!(!stepper.can_increment());
        assert_eq!(stepper.press_right(), None);
        assert_eq!(stepper.quantity(), 5);
    }

    #[test]
    fn right_below_maximum_increments() {
        let mut stepper = QuantityStepper::new(4, 1, 5);
        assert_eq!(stepper.press_right(), Some(StepOutcome::Increment(5)));
        assert!(!stepper.can_increment());
    }

    #[test]
    fn initial_quantity_clamped() {
        assert_eq!(QuantityStepper::new(0, 1, 5).quantity(), 1);
        assert_eq!(QuantityStepper::new(9, 1, 5).quantity(), 5);
        assert_eq!(QuantityStepper::new(2, 3, 1).max(), 3);
    }

    #[test]
    fn custom_minimum_moves_remove_boundary() {
        let mut stepper = QuantityStepper::new(2, 2, 10);
        assert_eq!(stepper.press_left(), StepOutcome::Delete);
        assert_eq!(stepper.quantity(), 2);
    }
}
