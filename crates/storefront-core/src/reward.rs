//! Reward expiration urgency and headline copy.

use chrono::{DateTime, Utc};

/// A reward counts as expiring within this many days (inclusive)
pub const EXPIRING_WINDOW_DAYS: i64 = 5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Days until `expiry`, rounding partial days up
pub fn days_until(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (expiry - now).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

pub fn is_expiring(days: i64) -> bool {
    (0..=EXPIRING_WINDOW_DAYS).contains(&days)
}

/// What the reward is worth
#[derive(Clone, PartialEq, Debug)]
pub enum RewardKind {
    Dollar(f64),
    Percentage(u32),
    Birthday,
    Employee,
}

impl RewardKind {
    /// Resolve the flat prop surface into a kind.
    ///
    /// Birthday and employee flags take precedence over amounts.
    pub fn from_props(
        dollar: Option<f64>,
        percentage: Option<u32>,
        is_birthday: bool,
        is_employee: bool,
    ) -> Option<Self> {
        if is_birthday {
            Some(RewardKind::Birthday)
        } else if is_employee {
            Some(RewardKind::Employee)
        } else if let Some(amount) = dollar {
            Some(RewardKind::Dollar(amount))
        } else {
            percentage.map(RewardKind::Percentage)
        }
    }

    pub fn headline(&self, symbol: &str) -> String {
        match self {
            RewardKind::Dollar(amount) => {
                // Whole-dollar rewards read "$5 off"
                if amount.fract() == 0.0 {
                    format!("{symbol}{amount:.0} off")
                } else {
                    format!("{} off", crate::pricing::format_price(*amount, symbol))
                }
            }
            RewardKind::Percentage(pct) => format!("{pct}% off"),
            RewardKind::Birthday => "Happy Birthday!".to_string(),
            RewardKind::Employee => "Employee discount".to_string(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            RewardKind::Dollar(_) => "reward-dollar",
            RewardKind::Percentage(_) => "reward-percentage",
            RewardKind::Birthday => "reward-birthday",
            RewardKind::Employee => "reward-employee",
        }
    }
}

/// Urgency derived from an expiration timestamp
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RewardExpiry {
    pub days: i64,
    pub expiring: bool,
    expiry: DateTime<Utc>,
}

impl RewardExpiry {
    pub fn new(expiry: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let days = days_until(expiry, now);
        Self {
            days,
            expiring: is_expiring(days),
            expiry,
        }
    }

    pub fn copy(&self) -> String {
        match self.days {
            d if d < 0 => "Expired".to_string(),
            0 => "Expires today".to_string(),
            1 => "Expires in 1 day".to_string(),
            d if self.expiring => format!("Expires in {d} days"),
            _ => format!("Valid through {}", self.expiry.format("%b %-d, %Y")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn partial_days_round_up() {
        assert_eq!(days_until(now() + Duration::hours(1), now()), 1);
        assert_eq!(days_until(now() + Duration::hours(49), now()), 3);
        assert_eq!(days_until(now(), now()), 0);
        assert_eq!(days_until(now() - Duration::hours(1), now()), 0);
        assert_eq!(days_until(now() - Duration::hours(25), now()), -1);
    }

    #[test]
    fn expiring_window_is_inclusive() {
        assert!(is_expiring(0));
        assert!(is_expiring(5));
        assert!(!is_expiring(6));
        assert!(!is_expiring(-1));
    }

    #[test]
    fn expiry_copy_branches() {
        assert_eq!(RewardExpiry::new(now(), now()).copy(), "Expires today");
        assert_eq!(
            RewardExpiry::new(now() + Duration::days(1), now()).copy(),
            "Expires in 1 day"
        );
        assert_eq!(
            RewardExpiry::new(now() + Duration::days(4), now()).copy(),
            "Expires in 4 days"
        );
        assert_eq!(
            RewardExpiry::new(now() + Duration::days(30), now()).copy(),
            "Valid through Mar 31, 2024"
        );
        assert_eq!(
            RewardExpiry::new(now() - Duration::days(2), now()).copy(),
            "Expired"
        );
    }

    #[test]
    fn kind_precedence_and_headline() {
        assert_eq!(
            RewardKind::from_props(Some(5.0), None, true, false),
            Some(RewardKind::Birthday)
        );
        assert_eq!(RewardKind::from_props(None, None, false, false), None);
        assert_eq!(RewardKind::Dollar(5.0).headline("$"), "$5 off");
        assert_eq!(RewardKind::Dollar(2.5).headline("$"), "$2.50 off");
        assert_eq!(RewardKind::Percentage(20).headline("$"), "20% off");
    }
}
