use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::catalog::Song;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: Uuid,
    pub name: String,
    pub comment: Option<String>,
    pub public: bool,
    pub song_count: u32,
    /// Sum of the entry durations in whole seconds.
    pub duration: u64,
    /// Sum of the entry durations formatted as `{h}h {m}m` or `{m}m`.
    pub total_duration: String,
    pub created: OffsetDateTime,
    pub changed: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub position: u32,
    pub added_at: OffsetDateTime,
    #[serde(flatten)]
    pub song: Song,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Full {
    #[serde(flatten)]
    pub playlist: Playlist,
    pub entry: Vec<Entry>,
}
