pub mod add_song;
pub mod create_playlist;
pub mod delete_playlist;
pub mod get_playlist;
pub mod get_playlists;
pub mod move_song;
pub mod playlist;
pub mod remove_song;
pub mod reorder_songs;
pub mod update_playlist;
