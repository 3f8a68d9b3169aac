use std::borrow::Cow;

use diesel::prelude::*;
use setlist_api::catalog::create_artist;

pub use crate::schema::artists::{self, *};

#[derive(Debug, Insertable)]
#[diesel(table_name = artists, check_for_backend(diesel::pg::Pg))]
pub struct Data<'a> {
    pub name: Cow<'a, str>,
    pub email: Option<Cow<'a, str>>,
    pub bio: Option<Cow<'a, str>>,
    pub image: Option<Cow<'a, str>>,
    pub country: Option<Cow<'a, str>>,
    pub genre: Option<Cow<'a, str>>,
}

impl<'a> From<&'a create_artist::Request> for Data<'a> {
    fn from(value: &'a create_artist::Request) -> Self {
        Self {
            name: value.name.as_str().into(),
            email: value.email.as_deref().map(Cow::Borrowed),
            bio: value.bio.as_deref().map(Cow::Borrowed),
            image: value.image.as_deref().map(Cow::Borrowed),
            country: value.country.as_deref().map(Cow::Borrowed),
            genre: value.genre.as_deref().map(Cow::Borrowed),
        }
    }
}

mod upsert {
    use diesel_async::RunQueryDsl;
    use uuid::Uuid;

    use super::{artists, Data};
    use crate::database::Database;
    use crate::Error;

    impl crate::orm::upsert::Insert for Data<'_> {
        async fn insert(&self, database: &Database) -> Result<Uuid, Error> {
            diesel::insert_into(artists::table)
                .values(self)
                .returning(artists::id)
                .get_result(&mut database.get().await?)
                .await
                .map_err(Error::from)
        }
    }
}
