use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    pub song_id: Uuid,
    /// 1-based target position. Appends when absent, clamps past the end.
    pub position: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub playlist_id: Uuid,
    pub song_id: Uuid,
    pub position: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Position the song ended up at.
    pub position: u32,
}

crate::endpoint!(Request, "/playlists/{id}/songs", Response);

impl From<(Uuid, Body)> for Request {
    fn from((playlist_id, Body { song_id, position }): (Uuid, Body)) -> Self {
        Self { playlist_id, song_id, position }
    }
}
