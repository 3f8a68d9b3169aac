//! Ordered playlist membership.
//!
//! Every playlist keeps its songs at the dense positions `1..=n`. The operations re-exported here
//! are the only writers of positions and each of them runs against a [`Store`] that is scoped
//! to one transaction.

mod ordering;
pub mod position;

use std::future::Future;

use diesel_async::scoped_futures::ScopedFutureExt;
pub use ordering::{add, list, move_to, remove, reorder};
pub use position::Shift;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::database::Database;
pub use crate::orm::playlists_songs::Entry;
use crate::Error;

/// Storage of the `(playlist, song, position)` triples.
///
/// Implementations execute on one ambient transaction and never commit on their own.
pub trait Store: Send {
    /// Serializes every mutation of `playlist_id` until the ambient transaction ends.
    fn lock_playlist(
        &mut self,
        playlist_id: Uuid,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    fn playlist_exists(
        &mut self,
        playlist_id: Uuid,
    ) -> impl Future<Output = Result<bool, Error>> + Send;

    fn song_exists(&mut self, song_id: Uuid) -> impl Future<Output = Result<bool, Error>> + Send;

    fn get(
        &mut self,
        playlist_id: Uuid,
        song_id: Uuid,
    ) -> impl Future<Output = Result<Option<Entry>, Error>> + Send;

    /// Entries of `playlist_id` ordered by position.
    fn list_ordered(
        &mut self,
        playlist_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Entry>, Error>> + Send;

    /// Highest position of `playlist_id`, `0` when empty.
    fn max_position(
        &mut self,
        playlist_id: Uuid,
    ) -> impl Future<Output = Result<i32, Error>> + Send;

    fn insert(&mut self, entry: Entry) -> impl Future<Output = Result<(), Error>> + Send;

    fn update_position(
        &mut self,
        playlist_id: Uuid,
        song_id: Uuid,
        position: i32,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    fn shift_range(
        &mut self,
        playlist_id: Uuid,
        shift: Shift,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    /// Returns whether an entry was deleted.
    fn delete(
        &mut self,
        playlist_id: Uuid,
        song_id: Uuid,
    ) -> impl Future<Output = Result<bool, Error>> + Send;
}

impl Database {
    pub async fn add_song(
        &self,
        playlist_id: Uuid,
        song_id: Uuid,
        position: Option<i32>,
    ) -> Result<i32, Error> {
        let added_at = OffsetDateTime::now_utc();
        self.transaction(move |conn| {
            add(conn, playlist_id, song_id, position, added_at).scope_boxed()
        })
        .await
    }

    pub async fn remove_song(&self, playlist_id: Uuid, song_id: Uuid) -> Result<(), Error> {
        self.transaction(move |conn| remove(conn, playlist_id, song_id).scope_boxed()).await
    }

    pub async fn move_song(
        &self,
        playlist_id: Uuid,
        song_id: Uuid,
        position: i32,
    ) -> Result<i32, Error> {
        self.transaction(move |conn| move_to(conn, playlist_id, song_id, position).scope_boxed())
            .await
    }

    pub async fn reorder_songs(&self, playlist_id: Uuid, song_ids: Vec<Uuid>) -> Result<(), Error> {
        self.transaction(move |conn| {
            async move { reorder(conn, playlist_id, &song_ids).await }.scope_boxed()
        })
        .await
    }

    /// Song ids of `playlist_id` in position order, read without taking the playlist lock.
    pub async fn list_songs(&self, playlist_id: Uuid) -> Result<Vec<Uuid>, Error> {
        list(&mut *self.get().await?, playlist_id).await
    }
}
