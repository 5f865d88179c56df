//! Rating-to-fill computation for ReviewStars.
//!
//! All five stars share one gradient stop, so a 3.5 rating fills three and
//! a half stars rather than rounding to a star count.

pub const MAX_RATING: f64 = 5.0;
pub const STAR_COUNT: usize = 5;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StarRating {
    clamped: f64,
}

impl StarRating {
    /// Clamp to `[0, 5]`; NaN and infinities become 0
    pub fn new(rating: f64) -> Self {
        let clamped = if !rating.is_finite() {
            0.0
        } else {
            rating.clamp(0.0, MAX_RATING)
        };
        Self { clamped }
    }

    pub fn value(&self) -> f64 {
        self.clamped
    }

    pub fn fill_percent(&self) -> f64 {
        (self.clamped / MAX_RATING) * 100.0
    }

    /// Gradient stop offset, e.g. `"70%"`
    pub fn gradient_offset(&self) -> String {
        format!("{}%", self.fill_percent())
    }

    pub fn aria_label(&self) -> String {
        format!("Rated {} out of 5 stars", self.clamped)
    }
}
