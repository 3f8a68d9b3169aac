use std::borrow::Cow;

use diesel::prelude::*;
use setlist_api::catalog::create_song;
use uuid::Uuid;

pub use crate::schema::songs::{self, *};
use crate::Error;

#[derive(Debug, Insertable)]
#[diesel(table_name = songs, check_for_backend(diesel::pg::Pg))]
pub struct Data<'a> {
    pub album_id: Uuid,
    pub title: Cow<'a, str>,
    pub track_number: i32,
    pub duration: f32,
}

impl<'a> TryFrom<&'a create_song::Request> for Data<'a> {
    type Error = Error;

    fn try_from(value: &'a create_song::Request) -> Result<Self, Self::Error> {
        if !value.duration.is_finite() || value.duration < 0.0 {
            return Err(Error::InvalidParameter("Song duration should be a non-negative number"));
        }
        Ok(Self {
            album_id: value.album_id,
            title: value.title.as_str().into(),
            track_number: value.track_number.into(),
            duration: value.duration,
        })
    }
}

/// Song joined with its album and artist names.
///
/// Loaded from [`query::display`] with the columns in field order.
#[derive(Debug, Clone, Queryable)]
pub struct Display {
    pub id: Uuid,
    pub title: String,
    pub track_number: i32,
    pub duration: f32,
    pub album: Option<String>,
    pub artist: Option<String>,
}

pub mod query {
    use diesel::dsl::auto_type;

    use super::*;
    use crate::orm::{albums, artists};

    #[auto_type]
    pub fn source() -> _ {
        songs::table.left_join(albums::table.left_join(artists::table))
    }

    #[auto_type]
    pub fn display() -> _ {
        (
            songs::id,
            songs::title,
            songs::track_number,
            songs::duration,
            albums::title.nullable(),
            artists::name.nullable(),
        )
    }
}

mod upsert {
    use diesel_async::RunQueryDsl;
    use uuid::Uuid;

    use super::{songs, Data};
    use crate::database::Database;
    use crate::Error;

    impl crate::orm::upsert::Insert for Data<'_> {
        async fn insert(&self, database: &Database) -> Result<Uuid, Error> {
            diesel::insert_into(songs::table)
                .values(self)
                .returning(songs::id)
                .get_result(&mut database.get().await?)
                .await
                .map_err(Error::from)
        }
    }
}
