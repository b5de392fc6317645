//! Typed records for the catalog and change-set documents.
//!
//! Field order in these structs is the field order of the emitted JSON, so
//! keep `id` first. Top-level collections default to empty when the key is
//! absent; record fields are required.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub artist: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub user_id: String,
    pub song_ids: Vec<String>,
}

/// Whole-catalog document, used for both input and output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub playlists: Vec<Playlist>,
    #[serde(default)]
    pub songs: Vec<Song>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemovePlaylist {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddPlaylist {
    pub user_id: String,
    pub song_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatePlaylist {
    pub id: String,
    pub song_ids: Vec<String>,
}

/// Change-set document. The three phases always run remove, add, update,
/// whatever order the keys appear in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChangeSet {
    #[serde(default, rename = "removeplaylists")]
    pub remove_playlists: Vec<RemovePlaylist>,
    #[serde(default, rename = "addplaylists")]
    pub add_playlists: Vec<AddPlaylist>,
    #[serde(default, rename = "updateplaylists")]
    pub update_playlists: Vec<UpdatePlaylist>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.remove_playlists.is_empty()
            && self.add_playlists.is_empty()
            && self.update_playlists.is_empty()
    }
}
