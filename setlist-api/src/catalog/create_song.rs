use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
pub struct Request {
    pub album_id: Uuid,
    pub title: String,
    pub track_number: u16,
    /// Duration in seconds.
    #[cfg_attr(feature = "test", dummy(faker = "30.0..600.0"))]
    pub duration: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub song_id: Uuid,
}

crate::endpoint!(Request, "/songs", Response);
