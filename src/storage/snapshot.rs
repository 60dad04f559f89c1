use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::roster::state::RotationState;
use crate::roster::types::RosterEntry;

/// On-disk form of the full application state: one ordered name list and
/// one name-to-count map per table. This is the layout the service has
/// always persisted; the in-memory pairing of name and count is an
/// implementation detail the file does not see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub breakfast_names: Vec<String>,
    pub breakfast_clicks: HashMap<String, u64>,
    pub cleanup_names: Vec<String>,
    pub cleanup_clicks: HashMap<String, u64>,
}

impl Snapshot {
    /// Captures the current state in wire form.
    pub fn capture(state: &RotationState) -> Snapshot {
        let (breakfast_names, breakfast_clicks) = split_roster(&state.breakfast);
        let (cleanup_names, cleanup_clicks) = split_roster(&state.cleanup);
        Snapshot {
            breakfast_names,
            breakfast_clicks,
            cleanup_names,
            cleanup_clicks,
        }
    }

    /// Rebuilds the in-memory state. List membership is authoritative: a
    /// listed name missing from its click map gets count zero, and click
    /// map keys not present in the list are dropped.
    pub fn into_state(self) -> RotationState {
        RotationState::new(
            pair_roster(self.breakfast_names, &self.breakfast_clicks),
            pair_roster(self.cleanup_names, &self.cleanup_clicks),
        )
    }
}

fn split_roster(roster: &[RosterEntry]) -> (Vec<String>, HashMap<String, u64>) {
    let names = roster.iter().map(|entry| entry.name.clone()).collect();
    let clicks = roster
        .iter()
        .map(|entry| (entry.name.clone(), entry.clicks))
        .collect();
    (names, clicks)
}

fn pair_roster(names: Vec<String>, clicks: &HashMap<String, u64>) -> Vec<RosterEntry> {
    names
        .into_iter()
        .map(|name| {
            let clicks = clicks.get(&name).copied().unwrap_or(0);
            RosterEntry { name, clicks }
        })
        .collect()
}
