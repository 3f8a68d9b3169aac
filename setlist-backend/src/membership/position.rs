//! Position arithmetic for playlist memberships.
//!
//! Every function here works on the dense `1..=n` ordering of one playlist and returns
//! which entries have to move. Nothing touches storage, so the renumbering rules can be
//! checked exhaustively without a database.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use itertools::Itertools;
use uuid::Uuid;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delta {
    Increment,
    Decrement,
}

/// Adds `delta` to the position of every entry whose position lies in `range`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    pub range: RangeInclusive<i32>,
    pub delta: Delta,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insert {
    pub position: i32,
    pub shift: Option<Shift>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub position: i32,
    pub shift: Shift,
}

impl Delta {
    pub fn value(self) -> i32 {
        match self {
            Delta::Increment => 1,
            Delta::Decrement => -1,
        }
    }
}

impl Shift {
    fn new(range: RangeInclusive<i32>, delta: Delta) -> Option<Self> {
        if range.is_empty() { None } else { Some(Self { range, delta }) }
    }

    pub fn apply(&self, position: i32) -> i32 {
        if self.range.contains(&position) { position + self.delta.value() } else { position }
    }
}

/// Places a new entry into a playlist whose highest position is `max`.
///
/// Without a requested position the entry is appended. A requested position past the end is
/// clamped to `max + 1` and one below the start to `1`.
pub fn insert(max: i32, requested: Option<i32>) -> Insert {
    let end = max + 1;
    let position = requested.map_or(end, |requested| requested.clamp(1, end));
    Insert { position, shift: Shift::new(position..=max, Delta::Increment) }
}

/// Closes the gap left by the entry removed from `removed`.
pub fn remove(removed: i32, max: i32) -> Option<Shift> {
    Shift::new((removed + 1)..=max, Delta::Decrement)
}

/// Moves the entry at `old` towards `requested`, clamped into `1..=count`.
///
/// Returns `None` when the entry already sits at the clamped target.
pub fn move_to(old: i32, requested: i32, count: i32) -> Option<Move> {
    let position = requested.clamp(1, count.max(1));
    let shift = match position.cmp(&old) {
        std::cmp::Ordering::Equal => return None,
        std::cmp::Ordering::Less => Shift::new(position..=(old - 1), Delta::Increment),
        std::cmp::Ordering::Greater => Shift::new((old + 1)..=position, Delta::Decrement),
    }?;
    Some(Move { position, shift })
}

/// Validates that `requested` is a permutation of `current` and returns the new position of
/// every song whose position changes.
///
/// `current` is the playlist content ordered by position.
pub fn reorder(
    playlist_id: Uuid,
    current: &[Uuid],
    requested: &[Uuid],
) -> Result<Vec<(Uuid, i32)>, Error> {
    let members: HashSet<_> = current.iter().copied().collect();
    let seen: HashSet<_> = requested.iter().copied().collect();

    let missing: Vec<_> = current.iter().copied().filter(|id| !seen.contains(id)).collect();
    let duplicated: Vec<_> = requested.iter().copied().duplicates().collect();
    let foreign: Vec<_> =
        requested.iter().copied().filter(|id| !members.contains(id)).unique().collect();

    if !missing.is_empty() || !duplicated.is_empty() || !foreign.is_empty() {
        tracing::info!(%playlist_id, ?missing, ?duplicated, ?foreign, "invalid reorder");
        return Err(Error::InvalidReorder { missing, duplicated, foreign });
    }

    requested
        .iter()
        .zip(current)
        .enumerate()
        .filter(|(_, (requested, current))| requested != current)
        .map(|(index, (song_id, _))| i32::try_from(index + 1).map(|position| (*song_id, position)))
        .collect::<Result<_, _>>()
        .map_err(|error| Error::Internal(error.into()))
}
