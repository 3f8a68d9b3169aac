pub mod create_album;
pub mod create_artist;
pub mod create_song;
pub mod delete_song;
pub mod get_song;
pub mod get_songs;

use axum::routing::{get, post};
use axum::Router;
use setlist_api::common::Endpoint;

use crate::database::Database;

pub fn router() -> Router<Database> {
    Router::new()
        .route(create_artist::Request::PATH, post(create_artist::axum_handler))
        .route(create_album::Request::PATH, post(create_album::axum_handler))
        .route(
            create_song::Request::PATH,
            post(create_song::axum_handler).get(get_songs::axum_handler),
        )
        .route(
            get_song::Request::PATH,
            get(get_song::axum_handler).delete(delete_song::axum_handler),
        )
}
