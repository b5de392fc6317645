//! In-memory catalog store.
//!
//! Each entity kind lives in a [`Table`] keyed by id. Tables remember the
//! order ids were first inserted so the written catalog comes out in load
//! order, with playlists created by a change-set appended after it.
//! Overwriting an id keeps its original slot.
//!
//! The store also owns playlist id allocation: every inserted playlist whose
//! id parses as an integer raises the allocation floor, and
//! [`CatalogStore::next_playlist_id`] hands out ids strictly above it.

use crate::model::{CatalogDocument, Playlist, Song, User};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("playlist id space exhausted after {0}")]
    PlaylistIdsExhausted(u64),
}

/// Anything stored in a [`Table`].
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for User {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Song {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Playlist {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Id-keyed table that iterates in first-insertion order.
#[derive(Debug, Clone)]
pub struct Table<T> {
    slots: BTreeMap<u64, T>,
    by_id: HashMap<String, u64>,
    next_slot: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            slots: BTreeMap::new(),
            by_id: HashMap::new(),
            next_slot: 0,
        }
    }
}

impl<T: Keyed> Table<T> {
    /// Insert or overwrite by id. Returns the entity that was replaced.
    pub fn upsert(&mut self, entity: T) -> Option<T> {
        if let Some(slot) = self.by_id.get(entity.key()) {
            return self.slots.insert(*slot, entity);
        }
        let slot = self.next_slot;
        self.next_slot += 1;
        self.by_id.insert(entity.key().to_string(), slot);
        self.slots.insert(slot, entity);
        None
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.by_id.get(id).and_then(|slot| self.slots.get(slot))
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        let slot = self.by_id.get(id)?;
        self.slots.get_mut(slot)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        let slot = self.by_id.remove(id)?;
        self.slots.remove(&slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Iterates entities in stable insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.values()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    users: Table<User>,
    playlists: Table<Playlist>,
    songs: Table<Song>,
    max_playlist_id: u64,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a parsed catalog. Later records win on id clashes.
    pub fn from_document(document: CatalogDocument) -> Self {
        let mut store = Self::new();
        for user in document.users {
            store.upsert_user(user);
        }
        for playlist in document.playlists {
            store.upsert_playlist(playlist);
        }
        for song in document.songs {
            store.upsert_song(song);
        }
        store
    }

    /// Snapshot the store back into document form.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            users: self.users.iter().cloned().collect(),
            playlists: self.playlists.iter().cloned().collect(),
            songs: self.songs.iter().cloned().collect(),
        }
    }

    pub fn upsert_user(&mut self, user: User) {
        self.users.upsert(user);
    }

    pub fn upsert_song(&mut self, song: Song) {
        self.songs.upsert(song);
    }

    pub fn upsert_playlist(&mut self, playlist: Playlist) {
        self.observe_playlist_id(&playlist.id);
        self.playlists.upsert(playlist);
    }

    pub fn remove_playlist(&mut self, id: &str) -> Option<Playlist> {
        self.playlists.remove(id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn song(&self, id: &str) -> Option<&Song> {
        self.songs.get(id)
    }

    pub fn playlist(&self, id: &str) -> Option<&Playlist> {
        self.playlists.get(id)
    }

    pub fn playlist_mut(&mut self, id: &str) -> Option<&mut Playlist> {
        self.playlists.get_mut(id)
    }

    pub fn contains_user(&self, id: &str) -> bool {
        self.users.contains(id)
    }

    pub fn contains_song(&self, id: &str) -> bool {
        self.songs.contains(id)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    pub fn playlists(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.iter()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    /// Highest numeric playlist id seen so far, 0 when none parsed.
    pub fn max_playlist_id(&self) -> u64 {
        self.max_playlist_id
    }

    /// Allocate the next playlist id and advance the floor.
    ///
    /// The returned id is strictly greater than every numeric playlist id
    /// ever inserted, including ids that have since been removed.
    pub fn next_playlist_id(&mut self) -> Result<String, StoreError> {
        let next = self
            .max_playlist_id
            .checked_add(1)
            .ok_or(StoreError::PlaylistIdsExhausted(self.max_playlist_id))?;
        self.max_playlist_id = next;
        Ok(next.to_string())
    }

    // Non-numeric ids are legal; they just never move the floor.
    fn observe_playlist_id(&mut self, id: &str) {
        if let Ok(value) = id.parse::<u64>() {
            self.max_playlist_id = self.max_playlist_id.max(value);
        }
    }
}
