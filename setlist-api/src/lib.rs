pub mod catalog;
pub mod common;
pub mod constant;
pub mod playlists;
