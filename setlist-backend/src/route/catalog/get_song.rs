use axum::extract::{Path, State};
use axum::Json;
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;
pub use setlist_api::catalog::get_song::{Request, Response};
use uuid::Uuid;

use crate::database::Database;
use crate::orm::songs;
use crate::Error;

pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    let song = songs::query::source()
        .filter(songs::id.eq(request.id))
        .select(songs::query::display())
        .get_result::<songs::Display>(&mut database.get().await?)
        .await
        .optional()?
        .ok_or(Error::SongNotFound(request.id))?;
    Ok(Response { song: song.try_into()? })
}

pub async fn axum_handler(
    State(database): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Json<Response>, Error> {
    handler(&database, Request { id }).await.map(Json)
}
