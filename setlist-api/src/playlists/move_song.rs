use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    /// 1-based target position, clamped into the playlist bounds.
    pub position: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub playlist_id: Uuid,
    pub song_id: Uuid,
    pub position: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub position: u32,
}

crate::endpoint!(Request, "/playlists/{id}/songs/{song_id}/position", Response);

impl From<((Uuid, Uuid), Body)> for Request {
    fn from(((playlist_id, song_id), Body { position }): ((Uuid, Uuid), Body)) -> Self {
        Self { playlist_id, song_id, position }
    }
}
