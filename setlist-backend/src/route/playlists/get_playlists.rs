use axum::extract::{Query, State};
use axum::Json;
use diesel::{ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use itertools::Itertools;
pub use setlist_api::playlists::get_playlists::{Request, Response};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::database::Database;
use crate::orm::{playlists, playlists_songs, songs};
use crate::{display, Error};

pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    let mut conn = database.get().await?;

    let mut query = playlists::table
        .select(playlists::Playlist::as_select())
        .order_by(playlists::created_at.desc())
        .then_order_by(playlists::id)
        .into_boxed();
    if let Some(public) = request.public {
        query = query.filter(playlists::public.eq(public));
    }
    // A window reaching past the earliest representable date keeps every playlist.
    if let Some(since) = request
        .within_days()
        .and_then(|days| OffsetDateTime::now_utc().checked_sub(Duration::days(days.into())))
    {
        query = query.filter(playlists::created_at.ge(since));
    }
    let rows: Vec<playlists::Playlist> = query.get_results(&mut conn).await?;

    let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
    let mut durations = playlists_songs::table
        .inner_join(songs::table)
        .filter(playlists_songs::playlist_id.eq_any(ids))
        .select((playlists_songs::playlist_id, songs::duration))
        .get_results::<(Uuid, f32)>(&mut conn)
        .await?
        .into_iter()
        .into_group_map();

    let playlists = rows
        .into_iter()
        .map(|row| {
            let durations = durations.remove(&row.id).unwrap_or_default();
            display::summary(row, durations.into_iter().map(display::seconds))
        })
        .collect::<Result<_, _>>()?;
    Ok(Response { playlists })
}

pub async fn axum_handler(
    State(database): State<Database>,
    Query(request): Query<Request>,
) -> Result<Json<Response>, Error> {
    handler(&database, request).await.map(Json)
}
