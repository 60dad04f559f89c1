use serde::{Deserialize, Serialize};

/// Selector for one of the two rotation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Breakfast,
    Cleanup,
}

impl Table {
    /// Parses the `table_type` form value. Anything other than the two
    /// known selectors yields `None` and the request becomes a no-op.
    pub fn parse(raw: &str) -> Option<Table> {
        match raw {
            "breakfast" => Some(Table::Breakfast),
            "cleanup" => Some(Table::Cleanup),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Breakfast => "breakfast",
            Table::Cleanup => "cleanup",
        }
    }
}

/// One rotation slot: an entry name paired with the number of times it
/// has been clicked in this table. Keeping the count inside the entry
/// means a roster cannot hold a name without a count or vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub clicks: u64,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clicks: 0,
        }
    }
}

/// Whether a mutating operation changed state or silently ignored its
/// input. The HTTP contract redirects either way; handlers only use this
/// to decide what to log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    NoOp,
}
