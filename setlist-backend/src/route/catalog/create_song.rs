use axum::extract::State;
use axum::Json;
pub use setlist_api::catalog::create_song::{Request, Response};

use crate::database::Database;
use crate::orm::songs;
use crate::orm::upsert::Insert;
use crate::Error;

pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    Ok(Response { song_id: songs::Data::try_from(&request)?.insert(database).await? })
}

pub async fn axum_handler(
    State(database): State<Database>,
    Json(request): Json<Request>,
) -> Result<Json<Response>, Error> {
    handler(&database, request).await.map(Json)
}
