use axum::extract::{Query, State};
use axum::Json;
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
pub use setlist_api::catalog::get_songs::{Request, Response};

use crate::database::Database;
use crate::orm::songs;
use crate::Error;

/// Lists songs by album and track number, keeping those that match every filter.
///
/// Duration bounds apply to whole seconds rounded up, the same value songs are displayed with.
pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    let mut query = songs::query::source()
        .select(songs::query::display())
        .order_by((songs::album_id, songs::track_number))
        .into_boxed();
    if let Some(album_id) = request.album_id {
        query = query.filter(songs::album_id.eq(album_id));
    }
    let (min, max) = request.duration_bounds();
    if let Some(min) = min {
        query = query.filter(songs::duration.gt(f32::from(min) - 1.0));
    }
    if let Some(max) = max {
        query = query.filter(songs::duration.le(f32::from(max)));
    }

    let songs = query
        .get_results::<songs::Display>(&mut database.get().await?)
        .await?
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<_, _>>()?;
    Ok(Response { songs })
}

pub async fn axum_handler(
    State(database): State<Database>,
    Query(request): Query<Request>,
) -> Result<Json<Response>, Error> {
    handler(&database, request).await.map(Json)
}

#[cfg(all(test, database_test))]
mod tests {
    use rstest::rstest;
    use setlist_api::catalog::get_songs::Length;
    use uuid::Uuid;

    use super::*;
    use crate::test::{mock, Mock};

    async fn durations(mock: &Mock, request: Request) -> Vec<u32> {
        handler(mock.database(), request)
            .await
            .unwrap()
            .songs
            .into_iter()
            .map(|song| song.duration)
            .collect()
    }

    #[rstest]
    #[tokio::test]
    async fn test_filter(#[future(awt)] mock: Mock) {
        let album_id = mock.add_album().call().await;
        for (track_number, duration) in (1..).zip([120.0, 179.5, 180.2, 299.5, 420.0]) {
            mock.add_song()
                .album_id(album_id)
                .track_number(track_number)
                .duration(duration)
                .call()
                .await;
        }
        mock.add_song().duration(60.0).call().await;

        let album = Request { album_id: Some(album_id), ..Request::default() };
        assert_eq!(durations(&mock, album).await, [120, 180, 181, 300, 420]);

        let short = Request { length: Some(Length::Short), ..album };
        assert_eq!(durations(&mock, short).await, [120, 180]);
        let long = Request { length: Some(Length::Long), ..album };
        assert_eq!(durations(&mock, long).await, [300, 420]);

        let between = Request { min_duration: Some(181), max_duration: Some(300), ..album };
        assert_eq!(durations(&mock, between).await, [181, 300]);

        assert_eq!(durations(&mock, Request::default()).await.len(), 6);
    }

    #[rstest]
    #[tokio::test]
    async fn test_unknown_album(#[future(awt)] mock: Mock) {
        mock.add_songs(2).await;
        let request = Request { album_id: Some(Uuid::new_v4()), ..Request::default() };
        assert!(durations(&mock, request).await.is_empty());
    }
}
