use axum::extract::State;
use axum::Json;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
pub use setlist_api::playlists::create_playlist::{Request, Response};
use time::OffsetDateTime;
use uuid::Uuid;

use super::get_playlist;
use crate::database::Database;
use crate::membership;
use crate::orm::playlists;
use crate::Error;

async fn create(
    conn: &mut AsyncPgConnection,
    upsert: &playlists::Upsert<'_>,
    song_ids: &[Uuid],
) -> Result<Uuid, Error> {
    let playlist_id = diesel::insert_into(playlists::table)
        .values(upsert)
        .returning(playlists::id)
        .get_result(conn)
        .await?;
    for song_id in song_ids.iter().copied() {
        membership::add(conn, playlist_id, song_id, None, OffsetDateTime::now_utc()).await?;
    }
    Ok(playlist_id)
}

pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    let upsert = playlists::Upsert::from(&request);
    let song_ids = request.song_ids.as_deref().unwrap_or_default();
    let playlist_id =
        database.transaction(|conn| create(conn, &upsert, song_ids).scope_boxed()).await?;

    Ok(Response {
        playlist: get_playlist::handler(database, get_playlist::Request { id: playlist_id })
            .await?
            .playlist,
    })
}

pub async fn axum_handler(
    State(database): State<Database>,
    Json(request): Json<Request>,
) -> Result<Json<Response>, Error> {
    handler(&database, request).await.map(Json)
}
