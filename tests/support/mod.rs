#![allow(dead_code)]

// Shared fixtures: a small catalog, a change-set exercising every phase, and
// a scratch workspace that writes them to disk.

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn sample_catalog() -> Value {
    json!({
        "users": [
            {"id": "1", "name": "Albin Jaye"},
            {"id": "2", "name": "Dipika Crescentia"},
            {"id": "3", "name": "Ankit Sacnite"}
        ],
        "playlists": [
            {"id": "1", "user_id": "2", "song_ids": ["8", "32"]},
            {"id": "2", "user_id": "3", "song_ids": ["6", "8", "11"]},
            {"id": "3", "user_id": "1", "song_ids": ["7", "12", "13"]}
        ],
        "songs": [
            {"id": "6", "artist": "Zedd", "title": "The Middle"},
            {"id": "7", "artist": "Camila Cabello", "title": "Never Be the Same"},
            {"id": "8", "artist": "Drake", "title": "God's Plan"},
            {"id": "11", "artist": "Ed Sheeran", "title": "Perfect"},
            {"id": "12", "artist": "Post Malone", "title": "Psycho"},
            {"id": "13", "artist": "Bebe Rexha", "title": "Meant to Be"},
            {"id": "32", "artist": "Dua Lipa", "title": "New Rules"}
        ]
    })
}

pub fn sample_changes() -> Value {
    json!({
        "updateplaylists": [
            {"id": "1", "song_ids": ["6", "8", "99", "6"]},
            {"id": "3", "song_ids": ["32"]},
            {"id": "44", "song_ids": ["6"]}
        ],
        "removeplaylists": [{"id": "3"}, {"id": "55"}],
        "addplaylists": [
            {"user_id": "1", "song_ids": ["11", "404", "12"]},
            {"user_id": "9", "song_ids": ["11"]},
            {"user_id": "2", "song_ids": ["404"]}
        ]
    })
}

/// Scratch directory holding the input, change and output documents.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new().context("creating scratch directory")?,
        })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_json(&self, name: &str, value: &Value) -> Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, serde_json::to_vec_pretty(value)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    pub fn write_raw(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

pub fn read_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Ids of a top-level collection in document order.
pub fn ids(document: &Value, key: &str) -> Vec<String> {
    document[key]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

pub fn playlist<'a>(document: &'a Value, id: &str) -> Option<&'a Value> {
    document["playlists"]
        .as_array()?
        .iter()
        .find(|item| item["id"] == id)
}

pub fn songlist_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_songlist"));
    cmd.env_remove("SONGLIST_LOG");
    cmd
}

pub fn run_songlist<I, S>(args: I) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    songlist_command()
        .args(args)
        .output()
        .context("failed to execute songlist")
}
