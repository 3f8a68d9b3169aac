use time::OffsetDateTime;
use uuid::Uuid;

use super::{position, Entry, Store};
use crate::Error;

#[tracing::instrument(skip(store, added_at), err(level = "info"))]
pub async fn add<S: Store>(
    store: &mut S,
    playlist_id: Uuid,
    song_id: Uuid,
    position: Option<i32>,
    added_at: OffsetDateTime,
) -> Result<i32, Error> {
    store.lock_playlist(playlist_id).await?;
    if !store.song_exists(song_id).await? {
        return Err(Error::SongNotFound(song_id));
    }
    if store.get(playlist_id, song_id).await?.is_some() {
        return Err(Error::DuplicateMembership { playlist_id, song_id });
    }

    let plan = position::insert(store.max_position(playlist_id).await?, position);
    if let Some(shift) = plan.shift {
        store.shift_range(playlist_id, shift).await?;
    }
    store
        .insert(Entry { playlist_id, song_id, position: plan.position, added_at })
        .await
        .map_err(|error| match error {
            // Errors raised by storage constraints do not carry the ids.
            Error::DuplicateMembership { .. } => {
                Error::DuplicateMembership { playlist_id, song_id }
            }
            Error::PlaylistNotFound(_) => Error::PlaylistNotFound(playlist_id),
            Error::SongNotFound(_) => Error::SongNotFound(song_id),
            error => error,
        })?;

    tracing::debug!(position = plan.position, "song added");
    Ok(plan.position)
}

#[tracing::instrument(skip(store), err(level = "info"))]
pub async fn remove<S: Store>(
    store: &mut S,
    playlist_id: Uuid,
    song_id: Uuid,
) -> Result<(), Error> {
    match store.lock_playlist(playlist_id).await {
        Err(Error::PlaylistNotFound(_)) => return Ok(()),
        result => result?,
    }
    let Some(entry) = store.get(playlist_id, song_id).await? else {
        tracing::debug!("song is not in playlist");
        return Ok(());
    };

    let max = store.max_position(playlist_id).await?;
    store.delete(playlist_id, song_id).await?;
    if let Some(shift) = position::remove(entry.position, max) {
        store.shift_range(playlist_id, shift).await?;
    }

    tracing::debug!(position = entry.position, "song removed");
    Ok(())
}

#[tracing::instrument(skip(store), err(level = "info"))]
pub async fn move_to<S: Store>(
    store: &mut S,
    playlist_id: Uuid,
    song_id: Uuid,
    position: i32,
) -> Result<i32, Error> {
    store.lock_playlist(playlist_id).await?;
    let entry =
        store.get(playlist_id, song_id).await?.ok_or(Error::NotFound { playlist_id, song_id })?;

    let count = store.max_position(playlist_id).await?;
    let Some(plan) = position::move_to(entry.position, position, count) else {
        return Ok(entry.position);
    };
    store.shift_range(playlist_id, plan.shift).await?;
    store.update_position(playlist_id, song_id, plan.position).await?;

    tracing::debug!(from = entry.position, to = plan.position, "song moved");
    Ok(plan.position)
}

#[tracing::instrument(skip_all, fields(%playlist_id, count = song_ids.len()), err(level = "info"))]
pub async fn reorder<S: Store>(
    store: &mut S,
    playlist_id: Uuid,
    song_ids: &[Uuid],
) -> Result<(), Error> {
    store.lock_playlist(playlist_id).await?;
    let current: Vec<_> =
        store.list_ordered(playlist_id).await?.into_iter().map(|entry| entry.song_id).collect();

    let assignments = position::reorder(playlist_id, &current, song_ids)?;
    for (song_id, position) in &assignments {
        store.update_position(playlist_id, *song_id, *position).await?;
    }

    tracing::debug!(changed = assignments.len(), "playlist reordered");
    Ok(())
}

pub async fn list<S: Store>(store: &mut S, playlist_id: Uuid) -> Result<Vec<Uuid>, Error> {
    if !store.playlist_exists(playlist_id).await? {
        return Err(Error::PlaylistNotFound(playlist_id));
    }
    Ok(store.list_ordered(playlist_id).await?.into_iter().map(|entry| entry.song_id).collect())
}
