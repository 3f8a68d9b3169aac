use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Song;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Request {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub song: Song,
}

crate::endpoint!(Request, "/songs/{id}", Response);
