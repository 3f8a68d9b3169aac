use axum::extract::{Path, State};
use axum::Json;
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
pub use setlist_api::playlists::get_playlist::{Request, Response};
use uuid::Uuid;

use crate::database::Database;
use crate::orm::{playlists, playlists_songs, songs};
use crate::{display, Error};

pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    let mut conn = database.get().await?;
    let playlist = playlists::table
        .find(request.id)
        .select(playlists::Playlist::as_select())
        .get_result(&mut conn)
        .await
        .optional()?
        .ok_or(Error::PlaylistNotFound(request.id))?;
    let items = playlists_songs::table
        .inner_join(songs::query::source())
        .filter(playlists_songs::playlist_id.eq(request.id))
        .order_by(playlists_songs::position)
        .select(playlists_songs::query::item())
        .get_results::<playlists_songs::Item>(&mut conn)
        .await?;

    Ok(Response { playlist: display::playlist(playlist, items)? })
}

pub async fn axum_handler(
    State(database): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Json<Response>, Error> {
    handler(&database, Request { id }).await.map(Json)
}

#[cfg(all(test, database_test))]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test::{mock, Mock};

    #[rstest]
    #[tokio::test]
    async fn test_total_duration(#[future(awt)] mock: Mock) {
        let mut song_ids = vec![];
        for duration in [1800.0, 1799.5, 600.0] {
            song_ids.push(mock.add_song().duration(duration).call().await);
        }
        let playlist_id = mock.add_playlist().song_ids(song_ids).call().await;

        let playlist = handler(mock.database(), Request { id: playlist_id }).await.unwrap();
        assert_eq!(playlist.playlist.playlist.duration, 4200);
        assert_eq!(playlist.playlist.playlist.total_duration, "1h 10m");
    }

    #[rstest]
    #[tokio::test]
    async fn test_missing_playlist(#[future(awt)] mock: Mock) {
        assert!(matches!(
            handler(mock.database(), Request { id: Uuid::new_v4() }).await,
            Err(Error::PlaylistNotFound(_))
        ));
    }
}
