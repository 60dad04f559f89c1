use super::types::{MutationOutcome, RosterEntry, Table};

/// Default rotation members, used whenever no snapshot can be loaded.
/// Both tables start with the same lineup, every count at zero.
const SEED_NAMES: [&str; 22] = [
    "KDTN", "NIPS", "ADFK", "JHRN", "MSRG", "TSAK", "ARGN", "PYGP", "ERKP", "MALA", "JAHP",
    "THSM", "MSGD", "OLLU", "KAGP", "YUKI", "FVRA", "SYNO", "MARA", "CLKT", "ELPI", "PSKH",
];

/// The full in-memory application state: one ordered roster per table.
///
/// Order is the rotation order. Names are unique within a roster; the
/// add operation keeps both rosters in step, while delete works on each
/// roster independently, so the two lineups may diverge over time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationState {
    pub breakfast: Vec<RosterEntry>,
    pub cleanup: Vec<RosterEntry>,
}

impl RotationState {
    pub fn new(breakfast: Vec<RosterEntry>, cleanup: Vec<RosterEntry>) -> Self {
        Self { breakfast, cleanup }
    }

    /// Builds the built-in default state: both tables seeded with the
    /// same 22 members, all counts zero.
    pub fn seeded() -> Self {
        let roster: Vec<RosterEntry> = SEED_NAMES.into_iter().map(RosterEntry::new).collect();
        Self {
            breakfast: roster.clone(),
            cleanup: roster,
        }
    }

    pub fn roster(&self, table: Table) -> &[RosterEntry] {
        match table {
            Table::Breakfast => &self.breakfast,
            Table::Cleanup => &self.cleanup,
        }
    }

    fn roster_mut(&mut self, table: Table) -> &mut Vec<RosterEntry> {
        match table {
            Table::Breakfast => &mut self.breakfast,
            Table::Cleanup => &mut self.cleanup,
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.breakfast.iter().any(|entry| entry.name == name)
            || self.cleanup.iter().any(|entry| entry.name == name)
    }

    /// Adds a new member to the front of both rosters with count zero.
    ///
    /// The raw form value is trimmed and uppercased first. An empty
    /// result, or a name already present in either roster, is ignored.
    pub fn add_name(&mut self, raw_name: &str) -> MutationOutcome {
        let name = raw_name.trim().to_uppercase();
        if name.is_empty() || self.contains(&name) {
            return MutationOutcome::NoOp;
        }

        self.breakfast.insert(0, RosterEntry::new(name.clone()));
        self.cleanup.insert(0, RosterEntry::new(name));
        MutationOutcome::Applied
    }

    /// Rotates the named entry to the end of the selected roster and
    /// increments its click count. The other table is untouched. Ignored
    /// when the name is not in the selected roster.
    pub fn move_to_bottom(&mut self, table: Table, name: &str) -> MutationOutcome {
        let roster = self.roster_mut(table);
        let Some(position) = roster.iter().position(|entry| entry.name == name) else {
            return MutationOutcome::NoOp;
        };

        let mut entry = roster.remove(position);
        entry.clicks += 1;
        roster.push(entry);
        MutationOutcome::Applied
    }

    /// Removes the named entry from each roster that contains it. The
    /// name need not be present in both; absent from both is a no-op.
    pub fn delete_name(&mut self, name: &str) -> MutationOutcome {
        let mut removed = false;
        for roster in [&mut self.breakfast, &mut self.cleanup] {
            if let Some(position) = roster.iter().position(|entry| entry.name == name) {
                roster.remove(position);
                removed = true;
            }
        }

        if removed {
            MutationOutcome::Applied
        } else {
            MutationOutcome::NoOp
        }
    }

    /// Zeroes every click count in the selected roster. Order is kept.
    pub fn reset_counts(&mut self, table: Table) -> MutationOutcome {
        for entry in self.roster_mut(table).iter_mut() {
            entry.clicks = 0;
        }
        MutationOutcome::Applied
    }
}
