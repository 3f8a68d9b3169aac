use axum::extract::{Path, State};
use axum::http::StatusCode;
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
pub use setlist_api::catalog::delete_song::{Request, Response};
use uuid::Uuid;

use crate::database::Database;
use crate::membership;
use crate::orm::{playlists_songs, songs};
use crate::Error;

async fn delete(conn: &mut AsyncPgConnection, id: Uuid) -> Result<(), Error> {
    // Holding the song row blocks concurrent inserts of new entries referencing it.
    songs::table
        .filter(songs::id.eq(id))
        .select(songs::id)
        .for_update()
        .get_result::<Uuid>(conn)
        .await
        .optional()?
        .ok_or(Error::SongNotFound(id))?;

    let playlist_ids = playlists_songs::playlist_ids(conn, id).await?;
    for playlist_id in &playlist_ids {
        membership::remove(conn, *playlist_id, id).await?;
    }
    diesel::delete(songs::table.filter(songs::id.eq(id))).execute(conn).await?;

    tracing::debug!(song_id = %id, n_playlist = playlist_ids.len(), "song deleted");
    Ok(())
}

/// Deletes a song after removing it from every playlist, keeping their positions dense.
pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    let id = request.id;
    database.transaction(move |conn| delete(conn, id).scope_boxed()).await?;
    Ok(Response)
}

pub async fn axum_handler(
    State(database): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Error> {
    handler(&database, Request { id }).await?;
    Ok(StatusCode::NO_CONTENT)
}
