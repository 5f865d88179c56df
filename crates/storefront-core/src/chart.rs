//! Points chart Y-axis scaling.

/// The axis never tops out below this value
pub const AXIS_FLOOR: f64 = 1000.0;
/// Tick spacing; the axis maximum is rounded up to a multiple of this
pub const TICK_STEP: f64 = 250.0;

/// One bar in the points chart
#[derive(Clone, PartialEq, Debug)]
pub struct PointsDatum {
    pub label: String,
    pub points: f64,
}

impl PointsDatum {
    pub fn new(label: impl Into<String>, points: f64) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }
}

/// Largest finite value (at least [`AXIS_FLOOR`]) rounded up to the next
/// [`TICK_STEP`]. NaN and infinite points are ignored.
pub fn y_axis_max(values: impl IntoIterator<Item = f64>) -> f64 {
    let max = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(AXIS_FLOOR, f64::max);
    (max / TICK_STEP).ceil() * TICK_STEP
}

/// Tick values from the axis maximum down to 0
pub fn y_axis_ticks(values: impl IntoIterator<Item = f64>) -> Vec<u64> {
    let max = y_axis_max(values) as u64;
    let step = TICK_STEP as u64;
    (0..=max / step).rev().map(|i| i * step).collect()
}

/// Bar height as a percentage of the axis, clamped to `[0, 100]`
pub fn bar_height_percent(value: f64, axis_max: f64) -> f64 {
    if !value.is_finite() || axis_max <= 0.0 {
        return 0.0;
    }
    (value / axis_max * 100.0).clamp(0.0, 100.0)
}

/// Period options offered by the chart's dropdown
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PointsPeriod {
    #[default]
    SixMonths,
    TwelveMonths,
}

impl PointsPeriod {
    pub const ALL: [PointsPeriod; 2] = [PointsPeriod::SixMonths, PointsPeriod::TwelveMonths];

    pub fn value(&self) -> &'static str {
        match self {
            PointsPeriod::SixMonths => "6m",
            PointsPeriod::TwelveMonths => "12m",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PointsPeriod::SixMonths => "Last 6 months",
            PointsPeriod::TwelveMonths => "Last 12 months",
        }
    }

    pub fn months(&self) -> usize {
        match self {
            PointsPeriod::SixMonths => 6,
            PointsPeriod::TwelveMonths => 12,
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.value() == value)
    }
}

/// The trailing `period.months()` data points
pub fn window(data: &[PointsDatum], period: PointsPeriod) -> &[PointsDatum] {
    let start = data.len().saturating_sub(period.months());
    &data[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_series_uses_floor() {
        assert_eq!(y_axis_max([10.0, 200.0]), 1000.0);
        assert_eq!(
            y_axis_ticks([10.0, 200.0]),
            vec![1000, 750, 500, 250, 0]
        );
    }

    #[test]
    fn empty_series_uses_floor() {
        assert_eq!(y_axis_max(std::iter::empty()), 1000.0);
    }

    #[test]
    fn rounds_up_to_next_step() {
        assert_eq!(y_axis_max([1001.0]), 1250.0);
        assert_eq!(y_axis_max([1250.0]), 1250.0);
        assert_eq!(y_axis_ticks([1300.0])[0], 1500);
        assert_eq!(y_axis_ticks([1300.0]).len(), 7);
    }

    #[test]
    fn large_and_non_finite_series() {
        let ticks = y_axis_ticks([5_000_000_000.0]);
        assert_eq!(ticks[0], 5_000_000_000);
        assert_eq!(ticks.last(), Some(&0));

        assert_eq!(y_axis_max([f64::INFINITY, f64::NAN, 300.0]), 1000.0);
        assert_eq!(y_axis_ticks([f64::INFINITY, f64::NEG_INFINITY]).len(), 5);
        assert_eq!(bar_height_percent(f64::NAN, 1000.0), 0.0);
    }

    #[test]
    fn bar_heights() {
        assert_eq!(bar_height_percent(500.0, 1000.0), 50.0);
        assert_eq!(bar_height_percent(-5.0, 1000.0), 0.0);
        assert_eq!(bar_height_percent(5.0, 0.0), 0.0);
    }

    #[test]
    fn period_window() {
        let data: Vec<_> = (0..8).map(|i| PointsDatum::new(format!("m{i}"), i as f64)).collect();
        assert_eq!(window(&data, PointsPeriod::SixMonths).len(), 6);
        assert_eq!(window(&data, PointsPeriod::SixMonths)[0].label, "m2");
        assert_eq!(window(&data, PointsPeriod::TwelveMonths).len(), 8);
        assert_eq!(PointsPeriod::from_value("12m"), Some(PointsPeriod::TwelveMonths));
    }
}
