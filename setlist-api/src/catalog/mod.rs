pub mod create_album;
pub mod create_artist;
pub mod create_song;
pub mod delete_song;
pub mod get_song;
pub mod get_songs;
mod song;

pub use song::Song;
