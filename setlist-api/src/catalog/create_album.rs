use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
pub struct Request {
    pub artist_id: Uuid,
    pub title: String,
    pub release_date: Option<Date>,
    pub genre: Option<String>,
    pub cover_image: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub album_id: Uuid,
}

crate::endpoint!(Request, "/albums", Response);
