use std::borrow::Cow;

use diesel::prelude::*;
use setlist_api::catalog::create_album;
use time::Date;
use uuid::Uuid;

pub use crate::schema::albums::{self, *};

#[derive(Debug, Insertable)]
#[diesel(table_name = albums, check_for_backend(diesel::pg::Pg))]
pub struct Data<'a> {
    pub artist_id: Uuid,
    pub title: Cow<'a, str>,
    pub release_date: Option<Date>,
    pub genre: Option<Cow<'a, str>>,
    pub cover_image: Option<Cow<'a, str>>,
    pub description: Option<Cow<'a, str>>,
}

impl<'a> From<&'a create_album::Request> for Data<'a> {
    fn from(value: &'a create_album::Request) -> Self {
        Self {
            artist_id: value.artist_id,
            title: value.title.as_str().into(),
            release_date: value.release_date,
            genre: value.genre.as_deref().map(Cow::Borrowed),
            cover_image: value.cover_image.as_deref().map(Cow::Borrowed),
            description: value.description.as_deref().map(Cow::Borrowed),
        }
    }
}

mod upsert {
    use diesel_async::RunQueryDsl;
    use uuid::Uuid;

    use super::{albums, Data};
    use crate::database::Database;
    use crate::Error;

    impl crate::orm::upsert::Insert for Data<'_> {
        async fn insert(&self, database: &Database) -> Result<Uuid, Error> {
            diesel::insert_into(albums::table)
                .values(self)
                .returning(albums::id)
                .get_result(&mut database.get().await?)
                .await
                .map_err(Error::from)
        }
    }
}
