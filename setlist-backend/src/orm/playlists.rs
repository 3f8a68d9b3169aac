use std::borrow::Cow;

use diesel::prelude::*;
use setlist_api::playlists::{create_playlist, update_playlist};
use time::OffsetDateTime;
use uuid::Uuid;

pub use crate::schema::playlists::{self, *};

#[derive(Debug, Default, Insertable, AsChangeset)]
#[diesel(table_name = playlists, check_for_backend(diesel::pg::Pg))]
#[diesel(treat_none_as_null = false)]
pub struct Upsert<'a> {
    pub name: Option<Cow<'a, str>>,
    pub comment: Option<Cow<'a, str>>,
    pub public: Option<bool>,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = playlists, check_for_backend(diesel::pg::Pg))]
pub struct Playlist {
    pub id: Uuid,
    pub name: String,
    pub comment: Option<String>,
    pub public: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Upsert<'_> {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.comment.is_none() && self.public.is_none()
    }
}

impl<'a> From<&'a create_playlist::Request> for Upsert<'a> {
    fn from(value: &'a create_playlist::Request) -> Self {
        Self {
            name: Some(value.name.as_str().into()),
            comment: value.comment.as_deref().map(Cow::Borrowed),
            public: Some(value.public),
        }
    }
}

impl<'a> From<&'a update_playlist::Body> for Upsert<'a> {
    fn from(value: &'a update_playlist::Body) -> Self {
        Self {
            name: value.name.as_deref().map(Cow::Borrowed),
            comment: value.comment.as_deref().map(Cow::Borrowed),
            public: value.public,
        }
    }
}

mod upsert {
    use diesel::ExpressionMethods;
    use diesel_async::RunQueryDsl;
    use uuid::Uuid;

    use super::{playlists, Upsert};
    use crate::database::Database;
    use crate::Error;

    impl crate::orm::upsert::Update for Upsert<'_> {
        async fn update(&self, database: &Database, id: Uuid) -> Result<(), Error> {
            let updated = diesel::update(playlists::table)
                .filter(playlists::id.eq(id))
                .set(self)
                .execute(&mut database.get().await?)
                .await?;
            if updated == 0 { Err(Error::PlaylistNotFound(id)) } else { Ok(()) }
        }
    }
}
