//! Pure date arithmetic for ritual scheduling.
//!
//! Every function here is a function of its arguments; "now" is always
//! passed in rather than read from the clock, so results are reproducible.

use chrono::{Datelike, Days, NaiveDate};

use crate::ritual::{Ritual, RitualOffset, RitualStatus};

/// Date a rite falls on for a given death date.
///
/// Day offsets add exactly that many calendar days. Year offsets use
/// calendar-year addition, so a Feb 29 death date rolls to Mar 1 in
/// non-leap target years.
pub fn ritual_date(death_date: NaiveDate, ritual: &Ritual) -> NaiveDate {
    match ritual.offset {
        RitualOffset::Days(n) => death_date + Days::new(n),
        RitualOffset::Years(n) => anniversary_in(death_date, death_date.year() + n),
    }
}

/// Whole-day difference `b - a`. Antisymmetric by construction:
/// `days_between(a, b) == -days_between(b, a)`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// Days elapsed since the death date.
pub fn days_since(death_date: NaiveDate, now: NaiveDate) -> i64 {
    days_between(death_date, now)
}

/// Status of a rite date relative to `now`: past if strictly before,
/// imminent if 0 to 7 days away inclusive, upcoming otherwise.
pub fn ritual_status(ritual_date: NaiveDate, now: NaiveDate) -> RitualStatus {
    let diff = days_between(now, ritual_date);
    if diff < 0 {
        RitualStatus::Past
    } else if diff <= 7 {
        RitualStatus::Imminent
    } else {
        RitualStatus::Upcoming
    }
}

/// Next occurrence of the death date's month/day on or after `now`:
/// this year's if it has not passed yet, otherwise next year's.
pub fn next_annual_anniversary(death_date: NaiveDate, now: NaiveDate) -> NaiveDate {
    let this_year = anniversary_in(death_date, now.year());
    if this_year >= now {
        this_year
    } else {
        anniversary_in(death_date, now.year() + 1)
    }
}

/// The anniversary of `death_date` in `year`, rolling Feb 29 to Mar 1
/// when `year` is not a leap year.
pub(crate) fn anniversary_in(death_date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, death_date.month(), death_date.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ritual::RITUALS;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ritual(key: &str) -> &'static Ritual {
        RITUALS.iter().find(|r| r.key == key).unwrap()
    }

    #[test]
    fn ritual_dates_for_new_year_death() {
        let death = date(2024, 1, 1);
        assert_eq!(ritual_date(death, ritual("49day")), date(2024, 2, 18));
        assert_eq!(ritual_date(death, ritual("100day")), date(2024, 4, 9));
        assert_eq!(ritual_date(death, ritual("1year")), date(2025, 1, 1));
        assert_eq!(ritual_date(death, ritual("3year")), date(2027, 1, 1));
    }

    #[test]
    fn day_offset_crosses_year_boundary() {
        let death = date(2023, 12, 1);
        assert_eq!(ritual_date(death, ritual("49day")), date(2024, 1, 18));
    }

    #[test]
    fn leap_day_death_rolls_to_march_first() {
        let death = date(2024, 2, 29);
        assert_eq!(ritual_date(death, ritual("1year")), date(2025, 3, 1));
        assert_eq!(ritual_date(death, ritual("3year")), date(2027, 3, 1));
    }

    #[test]
    fn days_between_is_antisymmetric() {
        let a = date(2024, 1, 1);
        let b = date(2024, 3, 15);
        assert_eq!(days_between(a, b), 74);
        assert_eq!(days_between(a, b), -days_between(b, a));
        assert_eq!(days_between(a, a), 0);
    }

    #[test]
    fn status_boundaries() {
        let now = date(2025, 6, 1);
        assert_eq!(ritual_status(date(2025, 5, 31), now), RitualStatus::Past);
        assert_eq!(ritual_status(now, now), RitualStatus::Imminent);
        assert_eq!(ritual_status(date(2025, 6, 8), now), RitualStatus::Imminent);
        assert_eq!(ritual_status(date(2025, 6, 9), now), RitualStatus::Upcoming);
    }

    #[test]
    fn next_anniversary_skips_passed_occurrence() {
        let death = date(2024, 3, 15);
        let now = date(2025, 4, 1);
        assert_eq!(next_annual_anniversary(death, now), date(2026, 3, 15));
    }

    #[test]
    fn next_anniversary_on_the_day_is_today() {
        let death = date(2022, 9, 22);
        let now = date(2025, 9, 22);
        assert_eq!(next_annual_anniversary(death, now), now);
    }

    #[test]
    fn next_anniversary_later_this_year() {
        let death = date(2022, 9, 22);
        let now = date(2025, 4, 1);
        assert_eq!(next_annual_anniversary(death, now), date(2025, 9, 22));
    }

    #[test]
    fn leap_day_anniversary_rolls_in_common_years() {
        let death = date(2024, 2, 29);
        assert_eq!(next_annual_anniversary(death, date(2025, 1, 10)), date(2025, 3, 1));
        assert_eq!(next_annual_anniversary(death, date(2028, 1, 10)), date(2028, 2, 29));
    }

    #[test]
    fn days_since_counts_from_death() {
        let death = date(2024, 1, 1);
        assert_eq!(days_since(death, date(2024, 1, 1)), 0);
        assert_eq!(days_since(death, date(2024, 2, 18)), 48);
    }
}
