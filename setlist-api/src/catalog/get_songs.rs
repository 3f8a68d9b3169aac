use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Song;

/// Duration presets, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    /// At most three minutes.
    Short,
    /// At least five minutes.
    Long,
}

impl Length {
    pub const SHORT_MAX: u16 = 180;
    pub const LONG_MIN: u16 = 300;

    /// Inclusive `(min, max)` duration bounds.
    pub fn bounds(self) -> (Option<u16>, Option<u16>) {
        match self {
            Self::Short => (None, Some(Self::SHORT_MAX)),
            Self::Long => (Some(Self::LONG_MIN), None),
        }
    }
}

/// Song filters, read from the query string. Every filter given must match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub album_id: Option<Uuid>,
    pub length: Option<Length>,
    /// Inclusive lower bound in whole seconds.
    pub min_duration: Option<u16>,
    /// Inclusive upper bound in whole seconds.
    pub max_duration: Option<u16>,
}

impl Request {
    /// Combined inclusive duration bounds of `length` and the explicit limits.
    pub fn duration_bounds(&self) -> (Option<u16>, Option<u16>) {
        let (min, max) = self.length.map(Length::bounds).unwrap_or_default();
        (min.max(self.min_duration), tighter(max, self.max_duration))
    }
}

fn tighter(a: Option<u16>, b: Option<u16>) -> Option<u16> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub songs: Vec<Song>,
}

crate::endpoint!(Request, "/songs", Response);
