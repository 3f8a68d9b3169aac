use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use uuid::Uuid;

const MEMBERSHIP_PRIMARY_KEY: &str = "playlists_songs_pkey";
const MEMBERSHIP_PLAYLIST_KEY: &str = "playlists_songs_playlist_id_fkey";
const MEMBERSHIP_SONG_KEY: &str = "playlists_songs_song_id_fkey";
const ALBUM_ARTIST_KEY: &str = "albums_artist_id_fkey";
const SONG_ALBUM_KEY: &str = "songs_album_id_fkey";
const SONG_TRACK_NUMBER_KEY: &str = "songs_album_id_track_number_key";
const TRANSIENT_MESSAGES: [&str; 3] = [
    "canceling statement due to lock timeout",
    "canceling statement due to statement timeout",
    "deadlock detected",
];

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    InvalidParameter(&'static str),

    #[error("Song {song_id} is already in playlist {playlist_id}")]
    DuplicateMembership { playlist_id: Uuid, song_id: Uuid },
    #[error("Song {song_id} is not in playlist {playlist_id}")]
    NotFound { playlist_id: Uuid, song_id: Uuid },
    #[error("Playlist {0} does not exist")]
    PlaylistNotFound(Uuid),
    #[error("Song {0} does not exist")]
    SongNotFound(Uuid),
    #[error(
        "Reorder is not a permutation of the playlist: missing {missing:?}, duplicated \
         {duplicated:?}, foreign {foreign:?}"
    )]
    InvalidReorder { missing: Vec<Uuid>, duplicated: Vec<Uuid>, foreign: Vec<Uuid> },

    #[error("Could not checkout a connection from connection pool")]
    CheckoutConnectionPool,
    #[error("Database is temporarily unavailable: {0}")]
    TransientStoreFailure(String),

    #[error(transparent)]
    Internal(#[from] color_eyre::Report),
}

impl Error {
    /// Whether the whole operation can be retried by the caller as is.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::TransientStoreFailure(_) | Self::CheckoutConnectionPool)
    }
}

impl From<DieselError> for Error {
    fn from(error: DieselError) -> Self {
        match error {
            DieselError::DatabaseError(kind, info) => match kind {
                DatabaseErrorKind::SerializationFailure
                | DatabaseErrorKind::ClosedConnection
                | DatabaseErrorKind::UnableToSendCommand => {
                    Self::TransientStoreFailure(info.message().to_owned())
                }
                DatabaseErrorKind::UniqueViolation
                    if info.constraint_name() == Some(MEMBERSHIP_PRIMARY_KEY) =>
                {
                    // Raced with a concurrent insert of the same pairing. The ids are not part of
                    // the driver error, so they are reported as nil.
                    Self::DuplicateMembership { playlist_id: Uuid::nil(), song_id: Uuid::nil() }
                }
                DatabaseErrorKind::UniqueViolation
                    if info.constraint_name() == Some(SONG_TRACK_NUMBER_KEY) =>
                {
                    Self::InvalidParameter("Track number is already used in this album")
                }
                DatabaseErrorKind::ForeignKeyViolation => match info.constraint_name() {
                    Some(MEMBERSHIP_PLAYLIST_KEY) => Self::PlaylistNotFound(Uuid::nil()),
                    Some(MEMBERSHIP_SONG_KEY) => Self::SongNotFound(Uuid::nil()),
                    Some(ALBUM_ARTIST_KEY) => Self::InvalidParameter("Artist does not exist"),
                    Some(SONG_ALBUM_KEY) => Self::InvalidParameter("Album does not exist"),
                    _ => Self::Internal(DieselError::DatabaseError(kind, info).into()),
                },
                _ if TRANSIENT_MESSAGES.iter().any(|message| info.message().contains(message)) => {
                    Self::TransientStoreFailure(info.message().to_owned())
                }
                _ => Self::Internal(DieselError::DatabaseError(kind, info).into()),
            },
            DieselError::RollbackTransaction => {
                Self::TransientStoreFailure("transaction rollback requested by database".to_owned())
            }
            error => Self::Internal(error.into()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, status_message) = match &self {
            Error::InvalidParameter(_) | Error::InvalidReorder { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Error::DuplicateMembership { .. } => (StatusCode::CONFLICT, self.to_string()),
            Error::NotFound { .. } | Error::PlaylistNotFound(_) | Error::SongNotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            Error::TransientStoreFailure(_) | Error::CheckoutConnectionPool => {
                (StatusCode::SERVICE_UNAVAILABLE, "Service temporarily unavailable".into())
            }
            Error::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
        };
        if status_code.is_server_error() {
            tracing::error!(error = ?self);
        }
        (status_code, status_message).into_response()
    }
}
