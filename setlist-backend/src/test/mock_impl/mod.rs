use diesel_async::pooled_connection::deadpool;
use diesel_async::AsyncPgConnection;
use fake::{Fake, Faker};
use rstest::fixture;
use uuid::Uuid;

use super::database;
use crate::database::Database;
use crate::route::{catalog, playlists};

pub struct Mock {
    pub database: database::Mock,
}

#[bon::bon]
impl Mock {
    async fn new() -> Self {
        Self { database: database::Mock::new().await }
    }

    pub fn database(&self) -> &Database {
        self.database.state()
    }

    pub async fn get(&self) -> deadpool::Object<AsyncPgConnection> {
        self.database().get().await.unwrap()
    }

    pub async fn add_artist(&self) -> Uuid {
        catalog::create_artist::handler(self.database(), Faker.fake()).await.unwrap().artist_id
    }

    #[builder]
    pub async fn add_album(&self, artist_id: Option<Uuid>) -> Uuid {
        let artist_id = match artist_id {
            Some(artist_id) => artist_id,
            None => self.add_artist().await,
        };
        catalog::create_album::handler(
            self.database(),
            catalog::create_album::Request { artist_id, ..Faker.fake() },
        )
        .await
        .unwrap()
        .album_id
    }

    /// Without an album, every song gets an album of its own so track numbers never collide.
    #[builder]
    pub async fn add_song(
        &self,
        album_id: Option<Uuid>,
        track_number: Option<u16>,
        duration: Option<f32>,
    ) -> Uuid {
        let album_id = match album_id {
            Some(album_id) => album_id,
            None => self.add_album().call().await,
        };
        let request: catalog::create_song::Request = Faker.fake();
        catalog::create_song::handler(
            self.database(),
            catalog::create_song::Request {
                album_id,
                track_number: track_number.unwrap_or(request.track_number),
                duration: duration.unwrap_or(request.duration),
                ..request
            },
        )
        .await
        .unwrap()
        .song_id
    }

    pub async fn add_songs(&self, n_song: usize) -> Vec<Uuid> {
        let mut song_ids = Vec::with_capacity(n_song);
        for _ in 0..n_song {
            song_ids.push(self.add_song().call().await);
        }
        song_ids
    }

    #[builder]
    pub async fn add_playlist(&self, song_ids: Option<Vec<Uuid>>, public: Option<bool>) -> Uuid {
        let request: playlists::create_playlist::Request = Faker.fake();
        playlists::create_playlist::handler(
            self.database(),
            playlists::create_playlist::Request {
                song_ids,
                public: public.unwrap_or(request.public),
                ..request
            },
        )
        .await
        .unwrap()
        .playlist
        .playlist
        .id
    }

    /// Song ids of `playlist_id` in position order, checking that positions are dense.
    pub async fn order(&self, playlist_id: Uuid) -> Vec<Uuid> {
        let playlist = playlists::get_playlist::handler(
            self.database(),
            playlists::get_playlist::Request { id: playlist_id },
        )
        .await
        .unwrap()
        .playlist;
        let positions: Vec<_> = playlist.entry.iter().map(|entry| entry.position).collect();
        assert_eq!(positions, (1..).take(positions.len()).collect::<Vec<_>>());
        playlist.entry.into_iter().map(|entry| entry.song.id).collect()
    }
}

#[fixture]
pub async fn mock() -> Mock {
    Mock::new().await
}
