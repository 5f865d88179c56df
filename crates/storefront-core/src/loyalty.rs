//! Loyalty progress bar position.
//!
//! Three clamping behaviours coexist here and are kept as-is:
//! `aria-valuenow` reports the raw points, the indicator uses the clamped
//! percentage, and the segment flags compare the unclamped percentage.

pub const SEGMENT_COUNT: usize = 3;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LoyaltyProgress {
    points: f64,
    max_points: f64,
}

impl LoyaltyProgress {
    pub fn new(points: f64, max_points: f64) -> Self {
        Self { points, max_points }
    }

    pub fn aria_value_now(&self) -> f64 {
        self.points
    }

    pub fn aria_value_max(&self) -> f64 {
        self.max_points
    }

    /// `points / max * 100` without clamping; 0 when `max <= 0`
    pub fn raw_percent(&self) -> f64 {
        if self.max_points <= 0.0 {
            return 0.0;
        }
        (self.points / self.max_points) * 100.0
    }

    /// `min(100, max(0, points) / max * 100)`
    pub fn indicator_percent(&self) -> f64 {
        if self.max_points <= 0.0 {
            return 0.0;
        }
        ((self.points.max(0.0) / self.max_points) * 100.0).min(100.0)
    }

    /// CSS `left` offset for the indicator, e.g. `"50%"`
    pub fn indicator_offset(&self) -> String {
        format!("{}%", self.indicator_percent())
    }

    /// Filled flags for the three equal segments
    pub fn segments(&self) -> [bool; SEGMENT_COUNT] {
        let pct = self.raw_percent();
        [pct > 0.0, pct > 100.0 / 3.0, pct > 200.0 / 3.0]
    }

    pub fn points_to_go(&self) -> f64 {
        (self.max_points - self.points).max(0.0)
    }

    pub fn is_complete(&self) -> bool {
        self.max_points > 0.0 && self.points >= self.max_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aria_reports_raw_points() {
        let progress = LoyaltyProgress::new(1500.0, 1000.0);
        assert_eq!(progress.aria_value_now(), 1500.0);
        assert_eq!(progress.indicator_percent(), 100.0);
        assert_eq!(progress.indicator_offset(), "100%");
    }

    #[test]
    fn negative_points_pin_indicator_to_start() {
        let progress = LoyaltyProgress::new(-50.0, 1000.0);
        assert_eq!(progress.aria_value_now(), -50.0);
        assert_eq!(progress.indicator_percent(), 0.0);
        assert_eq!(progress.segments(), [false, false, false]);
    }

    #[test]
    fn segments_use_strict_comparisons() {
        assert_eq!(LoyaltyProgress::new(0.0, 300.0).segments(), [false, false, false]);
        assert_eq!(LoyaltyProgress::new(1.0, 300.0).segments(), [true, false, false]);
        assert_eq!(LoyaltyProgress::new(100.0, 300.0).segments(), [true, false, false]);
        assert_eq!(LoyaltyProgress::new(101.0, 300.0).segments(), [true, true, false]);
        assert_eq!(LoyaltyProgress::new(201.0, 300.0).segments(), [true, true, true]);
    }

    #[test]
    fn zero_maximum_does_not_divide() {
        let progress = LoyaltyProgress::new(10.0, 0.0);
        assert_eq!(progress.indicator_percent(), 0.0);
        assert_eq!(progress.raw_percent(), 0.0);
        assert!(!progress.is_complete());
    }

    #[test]
    fn points_to_go_never_negative() {
        assert_eq!(LoyaltyProgress::new(250.0, 1000.0).points_to_go(), 750.0);
        assert_eq!(LoyaltyProgress::new(1250.0, 1000.0).points_to_go(), 0.0);
    }
}
