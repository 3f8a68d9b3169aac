use diesel::prelude::*;
use time::OffsetDateTime;
use uuid::Uuid;

use super::songs;
pub use crate::schema::playlists_songs::{self, *};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Queryable, Selectable, Insertable)]
#[diesel(table_name = playlists_songs, check_for_backend(diesel::pg::Pg))]
pub struct Entry {
    pub playlist_id: Uuid,
    pub song_id: Uuid,
    pub position: i32,
    pub added_at: OffsetDateTime,
}

/// One playlist entry joined with the display columns of its song.
#[derive(Debug, Clone, Queryable)]
pub struct Item {
    pub position: i32,
    pub added_at: OffsetDateTime,
    pub song: songs::Display,
}

pub mod query {
    use diesel::dsl::auto_type;

    use super::*;

    #[auto_type]
    pub fn item() -> _ {
        let display: songs::query::display = songs::query::display();
        (playlists_songs::position, playlists_songs::added_at, display)
    }
}

mod store {
    use diesel::dsl::{exists, max};
    use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
    use diesel_async::{AsyncPgConnection, RunQueryDsl};
    use uuid::Uuid;

    use super::{playlists_songs, Entry};
    use crate::membership::{Shift, Store};
    use crate::orm::{playlists, songs};
    use crate::Error;

    impl Store for AsyncPgConnection {
        async fn lock_playlist(&mut self, playlist_id: Uuid) -> Result<(), Error> {
            playlists::table
                .filter(playlists::id.eq(playlist_id))
                .select(playlists::id)
                .for_update()
                .get_result::<Uuid>(self)
                .await
                .optional()?
                .map(|_| ())
                .ok_or(Error::PlaylistNotFound(playlist_id))
        }

        async fn playlist_exists(&mut self, playlist_id: Uuid) -> Result<bool, Error> {
            diesel::select(exists(playlists::table.filter(playlists::id.eq(playlist_id))))
                .get_result(self)
                .await
                .map_err(Error::from)
        }

        async fn song_exists(&mut self, song_id: Uuid) -> Result<bool, Error> {
            diesel::select(exists(songs::table.filter(songs::id.eq(song_id))))
                .get_result(self)
                .await
                .map_err(Error::from)
        }

        async fn get(&mut self, playlist_id: Uuid, song_id: Uuid) -> Result<Option<Entry>, Error> {
            playlists_songs::table
                .find((playlist_id, song_id))
                .select(Entry::as_select())
                .get_result(self)
                .await
                .optional()
                .map_err(Error::from)
        }

        async fn list_ordered(&mut self, playlist_id: Uuid) -> Result<Vec<Entry>, Error> {
            playlists_songs::table
                .filter(playlists_songs::playlist_id.eq(playlist_id))
                .order_by(playlists_songs::position)
                .select(Entry::as_select())
                .get_results(self)
                .await
                .map_err(Error::from)
        }

        async fn max_position(&mut self, playlist_id: Uuid) -> Result<i32, Error> {
            playlists_songs::table
                .filter(playlists_songs::playlist_id.eq(playlist_id))
                .select(max(playlists_songs::position))
                .get_result::<Option<i32>>(self)
                .await
                .map(Option::unwrap_or_default)
                .map_err(Error::from)
        }

        async fn insert(&mut self, entry: Entry) -> Result<(), Error> {
            diesel::insert_into(playlists_songs::table).values(&entry).execute(self).await?;
            Ok(())
        }

        async fn update_position(
            &mut self,
            playlist_id: Uuid,
            song_id: Uuid,
            position: i32,
        ) -> Result<(), Error> {
            diesel::update(playlists_songs::table.find((playlist_id, song_id)))
                .set(playlists_songs::position.eq(position))
                .execute(self)
                .await?;
            Ok(())
        }

        async fn shift_range(&mut self, playlist_id: Uuid, shift: Shift) -> Result<(), Error> {
            let (start, end) = shift.range.into_inner();
            diesel::update(playlists_songs::table)
                .filter(playlists_songs::playlist_id.eq(playlist_id))
                .filter(playlists_songs::position.between(start, end))
                .set(playlists_songs::position.eq(playlists_songs::position + shift.delta.value()))
                .execute(self)
                .await?;
            Ok(())
        }

        async fn delete(&mut self, playlist_id: Uuid, song_id: Uuid) -> Result<bool, Error> {
            let deleted = diesel::delete(playlists_songs::table.find((playlist_id, song_id)))
                .execute(self)
                .await?;
            Ok(deleted > 0)
        }
    }

    /// Playlists containing `song_id`, in id order.
    pub async fn playlist_ids(
        conn: &mut AsyncPgConnection,
        song_id: Uuid,
    ) -> Result<Vec<Uuid>, Error> {
        playlists_songs::table
            .filter(playlists_songs::song_id.eq(song_id))
            .select(playlists_songs::playlist_id)
            .order_by(playlists_songs::playlist_id)
            .get_results(conn)
            .await
            .map_err(Error::from)
    }
}

pub use store::playlist_ids;
