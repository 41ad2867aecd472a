//! Japanese era years for the timesheet header and file name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A Japanese calendar era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JapaneseEra {
    /// 昭和, until the end of 1988.
    Showa,
    /// 平成, 1989 to April 2019.
    Heisei,
    /// 令和, from May 2019.
    Reiwa,
}

impl JapaneseEra {
    /// Era name as printed.
    pub fn name(&self) -> &'static str {
        match self {
            JapaneseEra::Showa => "昭和",
            JapaneseEra::Heisei => "平成",
            JapaneseEra::Reiwa => "令和",
        }
    }

    fn first_year(&self) -> i32 {
        match self {
            JapaneseEra::Showa => 1926,
            JapaneseEra::Heisei => 1989,
            JapaneseEra::Reiwa => 2019,
        }
    }
}

/// A year counted in a Japanese era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraYear {
    /// The era.
    pub era: JapaneseEra,
    /// Year within the era, starting at 1.
    pub year: i32,
}

impl fmt::Display for EraYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}年", self.era.name(), self.year)
    }
}

/// Converts a Gregorian year and month into an era year.
///
/// Era boundaries are resolved to the month.
///
/// # Examples
///
/// ```
/// use timesheet_engine::timesheet::{japanese_era, JapaneseEra};
///
/// let era = japanese_era(2025, 4);
/// assert_eq!(era.era, JapaneseEra::Reiwa);
/// assert_eq!(era.to_string(), "令和7年");
///
/// assert_eq!(japanese_era(2019, 4).to_string(), "平成31年");
/// ```
pub fn japanese_era(year: i32, month: u32) -> EraYear {
    let era = if (year, month) >= (2019, 5) {
        JapaneseEra::Reiwa
    } else if year >= 1989 {
        JapaneseEra::Heisei
    } else {
        JapaneseEra::Showa
    };

    EraYear {
        era,
        year: year - era.first_year() + 1,
    }
}

/// Period header text, e.g. `令和7年4月分`.
pub fn period_label(year: i32, month: u32) -> String {
    format!("{}{}月分", japanese_era(year, month), month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reiwa_starts_in_may_2019() {
        assert_eq!(japanese_era(2019, 5), EraYear { era: JapaneseEra::Reiwa, year: 1 });
        assert_eq!(japanese_era(2019, 4), EraYear { era: JapaneseEra::Heisei, year: 31 });
    }

    #[test]
    fn test_heisei_and_showa() {
        assert_eq!(japanese_era(1989, 1).to_string(), "平成1年");
        assert_eq!(japanese_era(1988, 12).to_string(), "昭和63年");
    }

    #[test]
    fn test_period_label() {
        assert_eq!(period_label(2025, 4), "令和7年4月分");
    }
}
