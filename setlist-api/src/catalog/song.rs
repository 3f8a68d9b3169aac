use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display projection of a song record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
pub struct Song {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub track_number: u16,
    /// Duration in whole seconds, rounded up.
    pub duration: u32,
    /// Duration formatted as `m:ss`.
    pub formatted_duration: String,
}
