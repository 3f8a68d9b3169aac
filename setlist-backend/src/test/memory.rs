use std::collections::HashSet;

use itertools::Itertools;
use uuid::Uuid;

use crate::membership::{Entry, Shift, Store};
use crate::Error;

/// In-memory [`Store`] without transactions, counting every write it receives.
#[derive(Debug, Default)]
pub struct Memory {
    playlists: HashSet<Uuid>,
    songs: HashSet<Uuid>,
    entries: Vec<Entry>,
    pub writes: usize,
}

impl Memory {
    pub fn add_playlist(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.playlists.insert(id);
        id
    }

    pub fn add_song(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.songs.insert(id);
        id
    }

    pub fn assert_dense(&self, playlist_id: Uuid) {
        let entries = self.entries(playlist_id).collect_vec();
        let positions = entries.iter().map(|entry| entry.position).sorted().collect_vec();
        let expected = (1..).take(entries.len()).collect_vec();
        assert_eq!(positions, expected, "positions of {playlist_id} are not dense");
        assert!(entries.iter().map(|entry| entry.song_id).all_unique());
    }

    fn entries(&self, playlist_id: Uuid) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(move |entry| entry.playlist_id == playlist_id)
    }

    fn find(&mut self, playlist_id: Uuid, song_id: Uuid) -> Option<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.playlist_id == playlist_id && entry.song_id == song_id)
    }
}

impl Store for Memory {
    async fn lock_playlist(&mut self, playlist_id: Uuid) -> Result<(), Error> {
        if self.playlists.contains(&playlist_id) {
            Ok(())
        } else {
            Err(Error::PlaylistNotFound(playlist_id))
        }
    }

    async fn playlist_exists(&mut self, playlist_id: Uuid) -> Result<bool, Error> {
        Ok(self.playlists.contains(&playlist_id))
    }

    async fn song_exists(&mut self, song_id: Uuid) -> Result<bool, Error> {
        Ok(self.songs.contains(&song_id))
    }

    async fn get(&mut self, playlist_id: Uuid, song_id: Uuid) -> Result<Option<Entry>, Error> {
        Ok(self.find(playlist_id, song_id).map(|entry| *entry))
    }

    async fn list_ordered(&mut self, playlist_id: Uuid) -> Result<Vec<Entry>, Error> {
        Ok(self.entries(playlist_id).copied().sorted_by_key(|entry| entry.position).collect())
    }

    async fn max_position(&mut self, playlist_id: Uuid) -> Result<i32, Error> {
        Ok(self.entries(playlist_id).map(|entry| entry.position).max().unwrap_or_default())
    }

    async fn insert(&mut self, entry: Entry) -> Result<(), Error> {
        if self.find(entry.playlist_id, entry.song_id).is_some() {
            return Err(Error::DuplicateMembership {
                playlist_id: entry.playlist_id,
                song_id: entry.song_id,
            });
        }
        self.writes += 1;
        self.entries.push(entry);
        Ok(())
    }

    async fn update_position(
        &mut self,
        playlist_id: Uuid,
        song_id: Uuid,
        position: i32,
    ) -> Result<(), Error> {
        if let Some(entry) = self.find(playlist_id, song_id) {
            entry.position = position;
            self.writes += 1;
        }
        Ok(())
    }

    async fn shift_range(&mut self, playlist_id: Uuid, shift: Shift) -> Result<(), Error> {
        for entry in &mut self.entries {
            if entry.playlist_id == playlist_id && shift.range.contains(&entry.position) {
                entry.position = shift.apply(entry.position);
                self.writes += 1;
            }
        }
        Ok(())
    }

    async fn delete(&mut self, playlist_id: Uuid, song_id: Uuid) -> Result<bool, Error> {
        let len = self.entries.len();
        self.entries.retain(|entry| entry.playlist_id != playlist_id || entry.song_id != song_id);
        let deleted = self.entries.len() < len;
        if deleted {
            self.writes += 1;
        }
        Ok(deleted)
    }
}
