use setlist_api::catalog::Song;
use setlist_api::playlists::playlist;

use crate::orm::{playlists, playlists_songs, songs};
use crate::Error;

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Formats a song duration as `m:ss`.
pub fn format_song_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Formats a playlist duration as `{h}h {m}m`, or `{m}m` below one hour.
pub fn format_total_duration(seconds: u64) -> String {
    let (hours, minutes) = (seconds / 3600, seconds % 3600 / 60);
    if hours > 0 { format!("{hours}h {minutes}m") } else { format!("{minutes}m") }
}

/// Whole seconds of a stored duration, rounded up.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn seconds(duration: f32) -> u32 {
    if duration.is_finite() && duration > 0.0 {
        duration.ceil().min(u32::MAX as f32) as u32
    } else {
        0
    }
}

impl TryFrom<songs::Display> for Song {
    type Error = Error;

    fn try_from(value: songs::Display) -> Result<Self, Self::Error> {
        let duration = seconds(value.duration);
        Ok(Self {
            id: value.id,
            title: value.title,
            artist: value.artist.unwrap_or_else(|| UNKNOWN_ARTIST.to_owned()),
            album: value.album.unwrap_or_else(|| UNKNOWN_ALBUM.to_owned()),
            track_number: value.track_number.try_into().map_err(color_eyre::Report::from)?,
            duration,
            formatted_duration: format_song_duration(duration),
        })
    }
}

impl TryFrom<playlists_songs::Item> for playlist::Entry {
    type Error = Error;

    fn try_from(value: playlists_songs::Item) -> Result<Self, Self::Error> {
        Ok(Self {
            position: value.position.try_into().map_err(color_eyre::Report::from)?,
            added_at: value.added_at,
            song: value.song.try_into()?,
        })
    }
}

/// Builds a playlist summary from its row and the whole-second durations of its entries.
pub fn summary(
    playlist: playlists::Playlist,
    durations: impl IntoIterator<Item = u32>,
) -> Result<playlist::Playlist, Error> {
    let (song_count, duration) = durations.into_iter().fold((0_usize, 0_u64), |(count, total), d| {
        (count + 1, total + u64::from(d))
    });
    Ok(playlist::Playlist {
        id: playlist.id,
        name: playlist.name,
        comment: playlist.comment,
        public: playlist.public,
        song_count: song_count.try_into().map_err(color_eyre::Report::from)?,
        duration,
        total_duration: format_total_duration(duration),
        created: playlist.created_at,
        changed: playlist.updated_at,
    })
}

pub fn playlist(
    playlist: playlists::Playlist,
    items: Vec<playlists_songs::Item>,
) -> Result<playlist::Full, Error> {
    let entry: Vec<playlist::Entry> =
        items.into_iter().map(playlist::Entry::try_from).collect::<Result<_, _>>()?;
    let playlist = summary(playlist, entry.iter().map(|entry| entry.song.duration))?;
    Ok(playlist::Full { playlist, entry })
}

#[cfg(test)]
mod tests {
    use fake::{Fake, Faker};
    use rstest::rstest;
    use time::OffsetDateTime;
    use uuid::Uuid;

    use super::*;

    #[rstest]
    #[case(0, "0:00")]
    #[case(5, "0:05")]
    #[case(65, "1:05")]
    #[case(600, "10:00")]
    #[case(3725, "62:05")]
    fn test_format_song_duration(#[case] seconds: u32, #[case] formatted: &str) {
        assert_eq!(format_song_duration(seconds), formatted);
    }

    #[rstest]
    #[case(0, "0m")]
    #[case(59, "0m")]
    #[case(754, "12m")]
    #[case(3600, "1h 0m")]
    #[case(8100, "2h 15m")]
    #[case(6_000_000_000, "1666666h 40m")]
    fn test_format_total_duration(#[case] seconds: u64, #[case] formatted: &str) {
        assert_eq!(format_total_duration(seconds), formatted);
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(185.2, 186)]
    #[case(185.0, 185)]
    #[case(-1.0, 0)]
    #[case(f32::NAN, 0)]
    fn test_seconds(#[case] duration: f32, #[case] expected: u32) {
        assert_eq!(seconds(duration), expected);
    }

    fn display(artist: Option<&str>, album: Option<&str>, duration: f32) -> songs::Display {
        songs::Display {
            id: Faker.fake(),
            title: Faker.fake(),
            track_number: (1..20).fake(),
            duration,
            album: album.map(str::to_owned),
            artist: artist.map(str::to_owned),
        }
    }

    #[test]
    fn test_song_fallback() {
        let song = Song::try_from(display(None, None, 61.0)).unwrap();
        assert_eq!((song.artist.as_str(), song.album.as_str()), (UNKNOWN_ARTIST, UNKNOWN_ALBUM));
        assert_eq!(song.formatted_duration, "1:01");

        let song = Song::try_from(display(Some("Artist"), Some("Album"), 61.0)).unwrap();
        assert_eq!((song.artist.as_str(), song.album.as_str()), ("Artist", "Album"));
    }

    fn row() -> playlists::Playlist {
        let now = OffsetDateTime::now_utc();
        playlists::Playlist {
            id: Uuid::new_v4(),
            name: Faker.fake(),
            comment: None,
            public: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn items(durations: &[f32]) -> Vec<playlists_songs::Item> {
        durations
            .iter()
            .zip(1..)
            .map(|(duration, position)| playlists_songs::Item {
                position,
                added_at: OffsetDateTime::now_utc(),
                song: display(None, None, *duration),
            })
            .collect()
    }

    #[test]
    fn test_playlist() {
        let full = playlist(row(), items(&[1800.0, 1800.5, 900.0])).unwrap();
        assert_eq!(full.playlist.song_count, 3);
        assert_eq!(full.playlist.duration, 4501);
        assert_eq!(full.playlist.total_duration, "1h 15m");
        assert_eq!(full.entry.iter().map(|entry| entry.position).collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn test_playlist_long_songs() {
        let full = playlist(row(), items(&[3.0e9, 3.0e9])).unwrap();
        let expected = 2 * u64::from(seconds(3.0e9));
        assert!(expected > u64::from(u32::MAX));
        assert_eq!(full.playlist.duration, expected);
        assert_eq!(full.playlist.total_duration, format_total_duration(expected));
    }

    #[test]
    fn test_summary_empty() {
        let summary = summary(row(), []).unwrap();
        assert_eq!(summary.song_count, 0);
        assert_eq!(summary.duration, 0);
        assert_eq!(summary.total_duration, "0m");
    }
}
