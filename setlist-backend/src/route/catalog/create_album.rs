use axum::extract::State;
use axum::Json;
pub use setlist_api::catalog::create_album::{Request, Response};

use crate::database::Database;
use crate::orm::albums;
use crate::orm::upsert::Insert;
use crate::Error;

pub async fn handler(database: &Database, request: Request) -> Result<Response, Error> {
    Ok(Response { album_id: albums::Data::from(&request).insert(database).await? })
}

pub async fn axum_handler(
    State(database): State<Database>,
    Json(request): Json<Request>,
) -> Result<Json<Response>, Error> {
    handler(&database, request).await.map(Json)
}
