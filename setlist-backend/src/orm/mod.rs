pub mod albums;
pub mod artists;
pub mod playlists;
pub mod playlists_songs;
pub mod songs;
pub mod upsert;
