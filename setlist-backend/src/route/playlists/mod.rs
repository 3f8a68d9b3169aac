pub mod add_song;
pub mod create_playlist;
pub mod delete_playlist;
pub mod get_playlist;
pub mod get_playlists;
pub mod move_song;
pub mod remove_song;
pub mod reorder_songs;
pub mod update_playlist;

use axum::routing::{delete, get, post, put};
use axum::Router;
use setlist_api::common::Endpoint;

use crate::database::Database;

pub fn router() -> Router<Database> {
    Router::new()
        .route(
            create_playlist::Request::PATH,
            post(create_playlist::axum_handler).get(get_playlists::axum_handler),
        )
        .route(
            get_playlist::Request::PATH,
            get(get_playlist::axum_handler)
                .patch(update_playlist::axum_handler)
                .delete(delete_playlist::axum_handler),
        )
        .route(
            add_song::Request::PATH,
            post(add_song::axum_handler).put(reorder_songs::axum_handler),
        )
        .route(remove_song::Request::PATH, delete(remove_song::axum_handler))
        .route(move_song::Request::PATH, put(move_song::axum_handler))
}

/// Converts a requested position from the wire, saturating values no playlist can reach.
fn to_position(position: u32) -> i32 {
    i32::try_from(position).unwrap_or(i32::MAX)
}

fn from_position(position: i32) -> Result<u32, crate::Error> {
    Ok(position.try_into().map_err(color_eyre::Report::from)?)
}
