use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::playlist;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
pub struct Request {
    pub name: String,
    pub comment: Option<String>,
    #[serde(default)]
    pub public: bool,
    /// Songs appended in order after the playlist is created.
    #[cfg_attr(feature = "test", dummy(default))]
    pub song_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub playlist: playlist::Full,
}

crate::endpoint!(Request, "/playlists", Response);

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use uuid::uuid;

    use super::*;

    #[rstest]
    #[case(
        r#"{"name":"Road trip"}"#,
        Some(Request { name: "Road trip".to_owned(), comment: None, public: false, song_ids: None })
    )]
    #[case(
        r#"{"name":"Road trip","public":true,"songIds":["2b839103-04ab-4b39-9b05-8c664590eda4"]}"#,
        Some(Request {
            name: "Road trip".to_owned(),
            comment: None,
            public: true,
            song_ids: Some(vec![uuid!("2b839103-04ab-4b39-9b05-8c664590eda4")]),
        })
    )]
    #[case(r#"{"comment":"no name"}"#, None)]
    fn test_deserialize(#[case] json: &str, #[case] request: Option<Request>) {
        assert_eq!(serde_json::from_str::<Request>(json).ok(), request);
    }
}
