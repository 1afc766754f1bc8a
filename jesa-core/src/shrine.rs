//! The memorial collection.
//!
//! Permanent entries come from configuration and always show unless
//! explicitly hidden; user-added entries live in the store alongside them.
//! Removing a permanent entry hides it, removing a user-added entry
//! deletes it.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{JesaError, JesaResult};
use crate::memorial::Memorial;
use crate::prayer::Prayer;
use crate::store::Store;

const ADDED_KEY: &str = "memorials.added";
const HIDDEN_KEY: &str = "memorials.hidden";
const PRAYER_KEY: &str = "prayers";
const PRAYER_SEEDED_KEY: &str = "prayers.seeded";

/// A partial edit of a memorial. `None` fields are left unchanged.
#[derive(Debug, Default, Clone)]
pub struct MemorialPatch {
    pub name: Option<String>,
    pub death_date: Option<NaiveDate>,
    pub photo: Option<String>,
}

pub struct Shrine<S: Store> {
    store: S,
    permanent: Vec<Memorial>,
    seed_prayers: Vec<Prayer>,
}

impl<S: Store> Shrine<S> {
    pub fn new(store: S, permanent: Vec<Memorial>, seed_prayers: Vec<Prayer>) -> Self {
        Shrine {
            store,
            permanent,
            seed_prayers,
        }
    }

    /// Active memorials: permanent entries that are not hidden, followed
    /// by user-added entries.
    pub fn memorials(&self) -> Vec<Memorial> {
        let hidden = self.hidden_ids();
        let mut list: Vec<Memorial> = self
            .permanent
            .iter()
            .filter(|m| !hidden.contains(&m.id))
            .cloned()
            .collect();
        list.extend(self.user_added());
        list
    }

    pub fn get(&self, id: &str) -> JesaResult<Memorial> {
        self.memorials()
            .into_iter()
            .find(|m| m.id == id)
            .ok_or_else(|| JesaError::NotFound(id.to_string()))
    }

    pub fn add(&mut self, memorial: Memorial) -> JesaResult<()> {
        let mut added = self.user_added();
        added.push(memorial);
        self.write_list(ADDED_KEY, &added)
    }

    /// Edit a memorial in place. For a permanent entry the seed is hidden
    /// and the edited copy re-added under the same id, so the observable
    /// result is an in-place update.
    pub fn update(&mut self, id: &str, patch: MemorialPatch) -> JesaResult<Memorial> {
        let mut updated = self.get(id)?;
        if let Some(name) = patch.name {
            updated.name = name;
        }
        if let Some(death_date) = patch.death_date {
            updated.death_date = death_date;
        }
        if let Some(photo) = patch.photo {
            updated.photo = Some(photo);
        }

        let mut added = self.user_added();
        if let Some(existing) = added.iter_mut().find(|m| m.id == id) {
            *existing = updated.clone();
            self.write_list(ADDED_KEY, &added)?;
        } else {
            // Write the edited copy before hiding the seed: a failure in
            // between must not make the entry vanish.
            added.push(updated.clone());
            self.write_list(ADDED_KEY, &added)?;
            self.hide(id)?;
        }
        Ok(updated)
    }

    /// Remove a memorial: hide it if permanent, delete it if user-added.
    pub fn remove(&mut self, id: &str) -> JesaResult<()> {
        let added = self.user_added();
        if added.iter().any(|m| m.id == id) {
            let remaining: Vec<Memorial> = added.into_iter().filter(|m| m.id != id).collect();
            return self.write_list(ADDED_KEY, &remaining);
        }

        let hidden = self.hidden_ids();
        if self
            .permanent
            .iter()
            .any(|m| m.id == id && !hidden.contains(&m.id))
        {
            return self.hide(id);
        }

        Err(JesaError::NotFound(id.to_string()))
    }

    /// Prayer intentions. Seeds from configuration are written once, and
    /// only into an empty list.
    pub fn prayers(&mut self) -> JesaResult<Vec<Prayer>> {
        self.seed_prayers_once()?;
        Ok(self.read_list(PRAYER_KEY))
    }

    pub fn add_prayer(&mut self, prayer: Prayer) -> JesaResult<()> {
        let mut prayers = self.prayers()?;
        prayers.push(prayer);
        self.write_list(PRAYER_KEY, &prayers)
    }

    pub fn remove_prayer(&mut self, id: &str) -> JesaResult<()> {
        let prayers = self.prayers()?;
        if !prayers.iter().any(|p| p.id == id) {
            return Err(JesaError::NotFound(id.to_string()));
        }
        let remaining: Vec<Prayer> = prayers.into_iter().filter(|p| p.id != id).collect();
        self.write_list(PRAYER_KEY, &remaining)
    }

    fn seed_prayers_once(&mut self) -> JesaResult<()> {
        // An unreadable store reads as "not seeded"; skip seeding so
        // prayer reads degrade to empty the same way memorial reads do.
        match self.store.get(PRAYER_SEEDED_KEY) {
            Ok(Some(_)) | Err(_) => return Ok(()),
            Ok(None) => {}
        }
        let existing: Vec<Prayer> = self.read_list(PRAYER_KEY);
        if existing.is_empty() && !self.seed_prayers.is_empty() {
            let seeds = self.seed_prayers.clone();
            self.write_list(PRAYER_KEY, &seeds)?;
        }
        self.store.set(PRAYER_SEEDED_KEY, "1")
    }

    fn hide(&mut self, id: &str) -> JesaResult<()> {
        let mut hidden = self.hidden_ids();
        hidden.push(id.to_string());
        self.write_list(HIDDEN_KEY, &hidden)
    }

    fn hidden_ids(&self) -> Vec<String> {
        self.read_list(HIDDEN_KEY)
    }

    fn user_added(&self) -> Vec<Memorial> {
        self.read_list(ADDED_KEY)
    }

    /// Read a JSON list from the store. A missing, unreadable, or corrupt
    /// value degrades to an empty list rather than taking the whole
    /// collection down.
    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.store.get(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn write_list<T: Serialize>(&mut self, key: &str, list: &[T]) -> JesaResult<()> {
        let raw = serde_json::to_string(list).map_err(|e| JesaError::Storage(e.to_string()))?;
        self.store.set(key, &raw)
    }
}
