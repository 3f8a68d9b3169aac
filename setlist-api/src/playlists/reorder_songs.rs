use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    /// Every song of the playlist, in the desired order.
    pub song_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub playlist_id: Uuid,
    pub song_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Response;

crate::endpoint!(Request, "/playlists/{id}/songs", Response);

impl From<(Uuid, Body)> for Request {
    fn from((playlist_id, Body { song_ids }): (Uuid, Body)) -> Self {
        Self { playlist_id, song_ids }
    }
}
