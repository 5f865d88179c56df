//! Rewards dial arc geometry.

/// Display branch of the dial
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RewardsDialVariant {
    #[default]
    Progress,
    /// Goal reached, reward ready to redeem
    Ready,
    /// Points could not be loaded; pure display branch
    Error,
}

impl RewardsDialVariant {
    pub fn class(&self) -> &'static str {
        match self {
            RewardsDialVariant::Progress => "rewards-dial-progress",
            RewardsDialVariant::Ready => "rewards-dial-ready",
            RewardsDialVariant::Error => "rewards-dial-error",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DialProgress {
    points: f64,
    goal: f64,
}

impl DialProgress {
    pub fn new(points: f64, goal: f64) -> Self {
        Self { points, goal }
    }

    /// Filled share of the arc in `[0, 1]`
    pub fn fraction(&self) -> f64 {
        if self.goal <= 0.0 {
            return 0.0;
        }
        (self.points / self.goal).clamp(0.0, 1.0)
    }

    /// SVG `stroke-dashoffset` for an arc of `circumference`
    pub fn dash_offset(&self, circumference: f64) -> f64 {
        circumference * (1.0 - self.fraction())
    }

    /// Variant implied by the numbers alone
    pub fn variant(&self) -> RewardsDialVariant {
        if self.goal > 0.0 && self.points >= self.goal {
            RewardsDialVariant::Ready
        } else {
            RewardsDialVariant::Progress
        }
    }
}

/// Circumference of a circle of radius `r`
pub fn circumference(r: f64) -> f64 {
    2.0 * std::f64::consts::PI * r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(DialProgress::new(50.0, 100.0).fraction(), 0.5);
        assert_eq!(DialProgress::new(150.0, 100.0).fraction(), 1.0);
        assert_eq!(DialProgress::new(-1.0, 100.0).fraction(), 0.0);
        assert_eq!(DialProgress::new(1.0, 0.0).fraction(), 0.0);
    }

    #[test]
    fn dash_offset_shrinks_with_progress() {
        assert_eq!(DialProgress::new(0.0, 100.0).dash_offset(200.0), 200.0);
        assert_eq!(DialProgress::new(25.0, 100.0).dash_offset(200.0), 150.0);
        assert_eq!(DialProgress::new(100.0, 100.0).dash_offset(200.0), 0.0);
    }

    #[test]
    fn ready_when_goal_met() {
        assert_eq!(DialProgress::new(100.0, 100.0).variant(), RewardsDialVariant::Ready);
        assert_eq!(DialProgress::new(99.0, 100.0).variant(), RewardsDialVariant::Progress);
    }
}
