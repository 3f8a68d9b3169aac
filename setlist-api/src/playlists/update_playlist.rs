use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Attributes to change. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub public: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    pub playlist_id: Uuid,
    pub body: Body,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Response;

crate::endpoint!(Request, "/playlists/{id}", Response);

impl From<(Uuid, Body)> for Request {
    fn from((playlist_id, body): (Uuid, Body)) -> Self {
        Self { playlist_id, body }
    }
}
