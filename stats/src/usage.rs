//! Moveset usage records

use serde::{Deserialize, Serialize};

/// One ranked entry of a percentage list (abilities, items, moves, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageData {
    pub name: String,
    pub percentage: f64,
}

impl UsageData {
    pub fn new(name: impl Into<String>, percentage: f64) -> Self {
        Self {
            name: name.into(),
            percentage,
        }
    }
}

/// One ranked entry of the checks and counters list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecksAndCountersData {
    pub name: String,
    /// Share of encounters where the subject was knocked out
    pub koed: f64,
    /// Share of encounters where the subject was forced out
    pub switched_out: f64,
}

impl ChecksAndCountersData {
    pub fn new(name: impl Into<String>, koed: f64, switched_out: f64) -> Self {
        Self {
            name: name.into(),
            koed,
            switched_out,
        }
    }
}

/// Aggregated usage of a Pokemon within one format
///
/// Every list is already rank-sorted by the data source. Consumers truncate,
/// they never re-sort.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MoveSetUsage {
    pub name: String,
    /// Weighted usage percentage within the format
    #[serde(default)]
    pub usage: f64,
    #[serde(default)]
    pub abilities: Vec<UsageData>,
    #[serde(default)]
    pub items: Vec<UsageData>,
    #[serde(default)]
    pub moves: Vec<UsageData>,
    #[serde(default)]
    pub spreads: Vec<UsageData>,
    #[serde(default)]
    pub teammates: Vec<UsageData>,
    #[serde(default)]
    pub checks_and_counters: Vec<ChecksAndCountersData>,
}

impl MoveSetUsage {
    pub fn new(name: impl Into<String>, usage: f64) -> Self {
        Self {
            name: name.into(),
            usage,
            ..Default::default()
        }
    }

    /// Tagged view over one list of this record
    pub fn section(&self, section: Section) -> UsageList<'_> {
        match section {
            Section::Abilities => UsageList::Percentage(&self.abilities),
            Section::Items => UsageList::Percentage(&self.items),
            Section::Moves => UsageList::Percentage(&self.moves),
            Section::Spreads => UsageList::Percentage(&self.spreads),
            Section::Teammates => UsageList::Percentage(&self.teammates),
            Section::ChecksAndCounters => UsageList::ChecksAndCounters(&self.checks_and_counters),
        }
    }
}

/// Named list inside a [`MoveSetUsage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Abilities,
    Items,
    Moves,
    Spreads,
    Teammates,
    ChecksAndCounters,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Abilities => "Abilities",
            Section::Items => "Items",
            Section::Moves => "Moves",
            Section::Spreads => "Nature/IV spread",
            Section::Teammates => "Teammates",
            Section::ChecksAndCounters => "Counters & Checks",
        }
    }
}

/// Shape of the entries in a [`UsageList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageKind {
    Percentage,
    ChecksAndCounters,
}

/// A borrowed, rank-ordered list of usage entries with its kind attached
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UsageList<'a> {
    Percentage(&'a [UsageData]),
    ChecksAndCounters(&'a [ChecksAndCountersData]),
}

impl<'a> UsageList<'a> {
    pub fn kind(&self) -> UsageKind {
        match self {
            UsageList::Percentage(_) => UsageKind::Percentage,
            UsageList::ChecksAndCounters(_) => UsageKind::ChecksAndCounters,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            UsageList::Percentage(list) => list.len(),
            UsageList::ChecksAndCounters(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first `n` entries, in their original order
    pub fn top(&self, n: usize) -> UsageList<'a> {
        match *self {
            UsageList::Percentage(list) => UsageList::Percentage(&list[..n.min(list.len())]),
            UsageList::ChecksAndCounters(list) => {
                UsageList::ChecksAndCounters(&list[..n.min(list.len())])
            }
        }
    }
}

/// Raw usage percentage of a Pokemon within a format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub name: String,
    pub usage_raw: f64,
}

impl UsageRecord {
    pub fn new(name: impl Into<String>, usage_raw: f64) -> Self {
        Self {
            name: name.into(),
            usage_raw,
        }
    }
}
