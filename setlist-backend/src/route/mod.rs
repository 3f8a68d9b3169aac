pub mod catalog;
pub mod playlists;

use axum::Router;
use setlist_api::constant;

use crate::database::Database;

pub fn router() -> Router<Database> {
    Router::new().nest(
        constant::API_PREFIX,
        Router::new().merge(catalog::router()).merge(playlists::router()),
    )
}
