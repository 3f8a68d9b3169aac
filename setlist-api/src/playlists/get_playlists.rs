use serde::{Deserialize, Serialize};

use super::playlist;

/// Playlist filters, read from the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub public: Option<bool>,
    /// Only playlists created within [`Request::DEFAULT_RECENT_DAYS`], unless `recent_days` is set.
    #[serde(default)]
    pub recent: bool,
    /// Only playlists created within this many days.
    pub recent_days: Option<u32>,
}

impl Request {
    pub const DEFAULT_RECENT_DAYS: u32 = 30;

    pub fn within_days(&self) -> Option<u32> {
        self.recent_days.or(self.recent.then_some(Self::DEFAULT_RECENT_DAYS))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Newest first.
    pub playlists: Vec<playlist::Playlist>,
}

crate::endpoint!(Request, "/playlists", Response);
