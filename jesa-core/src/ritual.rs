//! The fixed set of mourning rites.

/// Offset of a rite from the death date: a day count or a calendar-year
/// count, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RitualOffset {
    Days(u64),
    Years(i32),
}

/// A named mourning rite at a fixed offset after death.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ritual {
    /// Stable key used in exported event UIDs.
    pub key: &'static str,
    pub label: &'static str,
    pub korean: &'static str,
    pub offset: RitualOffset,
}

/// The traditional rites. The death day counts as day 1, so the 49th-day
/// rite falls 48 days after death and the 100th-day rite 99 days after.
pub const RITUALS: [Ritual; 4] = [
    Ritual {
        key: "49day",
        label: "49th Day",
        korean: "사십구재",
        offset: RitualOffset::Days(48),
    },
    Ritual {
        key: "100day",
        label: "100th Day",
        korean: "백일",
        offset: RitualOffset::Days(99),
    },
    Ritual {
        key: "1year",
        label: "1 Year",
        korean: "소상",
        offset: RitualOffset::Years(1),
    },
    Ritual {
        key: "3year",
        label: "3 Years",
        korean: "대상",
        offset: RitualOffset::Years(3),
    },
];

/// Chronological status of a rite relative to "now".
/// Derived at render time, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RitualStatus {
    /// Strictly before now.
    Past,
    /// Within 7 days of now, inclusive.
    Imminent,
    /// More than 7 days away.
    Upcoming,
}
