// Copyright 2025 the Calwheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Month/weekday naming and week conventions.

extern crate alloc;

use alloc::string::String;

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// How weeks are delimited and numbered.
///
/// Week 1 is the week containing January `first_week_contains_date`. With a Monday start and
/// the 4th of January this is ISO-8601 numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WeekRule {
    /// First day of each week.
    pub first_weekday: Weekday,
    /// Day of January (1..=7) that always falls in week 1.
    pub first_week_contains_date: u32,
}

impl WeekRule {
    /// ISO-8601 weeks: Monday start, week 1 holds the year's first Thursday.
    pub const ISO: Self = Self {
        first_weekday: Weekday::Mon,
        first_week_contains_date: 4,
    };

    /// The first day of the week containing `date`.
    pub fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        let back = (7 + date.weekday().num_days_from_monday()
            - self.first_weekday.num_days_from_monday())
            % 7;
        date.checked_sub_days(Days::new(u64::from(back)))
            .unwrap_or(NaiveDate::MIN)
    }

    /// The week number of `date` (1-based).
    pub fn week_number(&self, date: NaiveDate) -> u32 {
        let year = date.year();
        let week_start = self.start_of_week(date);
        let base = [year + 1, year, year - 1]
            .into_iter()
            .filter_map(|y| self.first_week_start(y))
            .find(|start| *start <= date)
            .unwrap_or(week_start);
        let weeks = (week_start - base).num_days() / 7 + 1;
        u32::try_from(weeks).unwrap_or(1)
    }

    fn first_week_start(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, 1, self.first_week_contains_date)
            .map(|d| self.start_of_week(d))
    }
}

/// Naming and week conventions for one language/region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47 tag, e.g. `en-US`.
    pub tag: &'static str,
    /// Stand-alone month names, January first.
    pub month_names: [&'static str; 12],
    /// Weekday names, Monday first.
    pub weekday_names: [&'static str; 7],
    /// Week delimiting/numbering convention.
    pub week_rule: WeekRule,
}

impl Locale {
    /// US English.
    pub const EN_US: Self = Self {
        tag: "en-US",
        month_names: [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ],
        weekday_names: [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ],
        week_rule: WeekRule {
            first_weekday: Weekday::Sun,
            first_week_contains_date: 1,
        },
    };

    /// Finnish.
    pub const FI: Self = Self {
        tag: "fi",
        month_names: [
            "tammikuu",
            "helmikuu",
            "maaliskuu",
            "huhtikuu",
            "toukokuu",
            "kes\u{e4}kuu",
            "hein\u{e4}kuu",
            "elokuu",
            "syyskuu",
            "lokakuu",
            "marraskuu",
            "joulukuu",
        ],
        weekday_names: [
            "maanantai",
            "tiistai",
            "keskiviikko",
            "torstai",
            "perjantai",
            "lauantai",
            "sunnuntai",
        ],
        week_rule: WeekRule::ISO,
    };

    /// Name of a zero-based month (`0` is January). Out-of-range months wrap.
    pub fn month_name(&self, month0: u32) -> &'static str {
        self.month_names[(month0 % 12) as usize]
    }

    /// Name of a weekday.
    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        self.weekday_names[weekday.num_days_from_monday() as usize]
    }

    /// Month label text, e.g. `January 2024`.
    pub fn format_month_year(&self, date: NaiveDate) -> String {
        alloc::format!("{} {}", self.month_name(date.month0()), date.year())
    }

    /// Week number of `date` under this locale's own convention.
    pub fn week_number(&self, date: NaiveDate) -> u32 {
        self.week_rule.week_number(date)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::EN_US
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn iso_rule_matches_chrono_iso_weeks() {
        let mut d = date(2019, 12, 1);
        while d < date(2027, 2, 1) {
            assert_eq!(
                WeekRule::ISO.week_number(d),
                d.iso_week().week(),
                "mismatch on {d}"
            );
            d = d.succ_opt().expect("in range");
        }
    }

    #[test]
    fn us_weeks_start_on_sunday_and_roll_into_next_year() {
        let rule = Locale::EN_US.week_rule;
        assert_eq!(rule.start_of_week(date(2024, 1, 3)), date(2023, 12, 31));
        assert_eq!(rule.week_number(date(2024, 1, 1)), 1);
        assert_eq!(rule.week_number(date(2024, 1, 7)), 2);
        // 2024-12-29 is a Sunday; the week holding 2025-01-01 is week 1.
        assert_eq!(rule.week_number(date(2024, 12, 29)), 1);
        assert_eq!(rule.week_number(date(2024, 12, 28)), 52);
    }

    #[test]
    fn month_year_labels_use_stand_alone_names() {
        assert_eq!(
            Locale::EN_US.format_month_year(date(2024, 1, 10)),
            "January 2024"
        );
        assert_eq!(
            Locale::FI.format_month_year(date(2024, 6, 1)),
            "kes\u{e4}kuu 2024"
        );
    }

    #[test]
    fn weekday_names_are_monday_first() {
        assert_eq!(Locale::EN_US.weekday_name(Weekday::Mon), "Monday");
        assert_eq!(Locale::FI.weekday_name(Weekday::Sun), "sunnuntai");
    }
}
