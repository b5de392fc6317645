//! Change-set application.
//!
//! Phases always run in the same order: remove, add, update. Removing first
//! means a removal can never hit a playlist created by the same change-set,
//! and adding before updating lets one change-set create a playlist and
//! extend it. Users and songs are read-only here; references to unknown ids
//! are skipped, never reported as errors.

use crate::model::{AddPlaylist, ChangeSet, Playlist, RemovePlaylist, UpdatePlaylist};
use crate::store::{CatalogStore, StoreError};
use tracing::debug;

/// What a change-set did to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub removed: usize,
    pub removals_ignored: usize,
    /// Ids allocated to new playlists, in allocation order.
    pub added: Vec<String>,
    pub adds_unknown_user: usize,
    pub adds_without_songs: usize,
    pub updated: usize,
    pub updates_unknown_playlist: usize,
    pub songs_appended: usize,
    /// Candidate song ids dropped by add or update because the song does
    /// not exist.
    pub songs_dropped: usize,
}

/// Apply every phase of `changes` to `store`.
///
/// Fails only when playlist id allocation runs out; anything applied before
/// that point stays applied.
pub fn apply_changes(
    store: &mut CatalogStore,
    changes: &ChangeSet,
) -> Result<ApplyReport, StoreError> {
    let mut report = ApplyReport::default();
    remove_playlists(store, &changes.remove_playlists, &mut report);
    add_playlists(store, &changes.add_playlists, &mut report)?;
    update_playlists(store, &changes.update_playlists, &mut report);
    Ok(report)
}

fn remove_playlists(
    store: &mut CatalogStore,
    entries: &[RemovePlaylist],
    report: &mut ApplyReport,
) {
    for entry in entries {
        match store.remove_playlist(&entry.id) {
            Some(_) => report.removed += 1,
            None => {
                debug!(playlist_id = %entry.id, "remove skipped: unknown playlist");
                report.removals_ignored += 1;
            }
        }
    }
}

fn add_playlists(
    store: &mut CatalogStore,
    entries: &[AddPlaylist],
    report: &mut ApplyReport,
) -> Result<(), StoreError> {
    for entry in entries {
        if !store.contains_user(&entry.user_id) {
            debug!(user_id = %entry.user_id, "add skipped: unknown user");
            report.adds_unknown_user += 1;
            continue;
        }

        let song_ids: Vec<String> = entry
            .song_ids
            .iter()
            .filter(|id| store.contains_song(id))
            .cloned()
            .collect();
        report.songs_dropped += entry.song_ids.len() - song_ids.len();

        if song_ids.is_empty() {
            debug!(user_id = %entry.user_id, "add skipped: no known songs");
            report.adds_without_songs += 1;
            continue;
        }

        let id = store.next_playlist_id()?;
        debug!(playlist_id = %id, user_id = %entry.user_id, songs = song_ids.len(), "playlist added");
        store.upsert_playlist(Playlist {
            id: id.clone(),
            user_id: entry.user_id.clone(),
            song_ids,
        });
        report.added.push(id);
    }
    Ok(())
}

fn update_playlists(
    store: &mut CatalogStore,
    entries: &[UpdatePlaylist],
    report: &mut ApplyReport,
) {
    for entry in entries {
        // Decide which candidates survive before borrowing the playlist
        // mutably; the song table is not touched by this phase.
        let known: Vec<&String> = entry
            .song_ids
            .iter()
            .filter(|id| store.contains_song(id))
            .collect();
        let dropped = entry.song_ids.len() - known.len();

        let Some(playlist) = store.playlist_mut(&entry.id) else {
            debug!(playlist_id = %entry.id, "update skipped: unknown playlist");
            report.updates_unknown_playlist += 1;
            continue;
        };

        let mut appended = 0;
        for song_id in known {
            if !playlist.song_ids.contains(song_id) {
                playlist.song_ids.push(song_id.clone());
                appended += 1;
            }
        }
        debug!(playlist_id = %entry.id, appended, "playlist updated");
        report.updated += 1;
        report.songs_appended += appended;
        report.songs_dropped += dropped;
    }
}
