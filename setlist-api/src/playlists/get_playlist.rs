use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::playlist;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Request {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub playlist: playlist::Full,
}

crate::endpoint!(Request, "/playlists/{id}", Response);
