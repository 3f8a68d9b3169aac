use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Educe)]
#[educe(Debug, Default)]
pub struct Database {
    #[educe(Debug(ignore))]
    pub url: String,
    /// Upper bound on waiting for the playlist lock inside one operation.
    #[educe(Default = 5000)]
    pub lock_timeout_ms: u32,
    /// Upper bound on any single statement inside one operation.
    #[educe(Default = 15000)]
    pub statement_timeout_ms: u32,
}
