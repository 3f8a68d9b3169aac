use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
pub struct Request {
    pub name: String,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub country: Option<String>,
    pub genre: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub artist_id: Uuid,
}

crate::endpoint!(Request, "/artists", Response);
