//! Interaction store that writes through to a key-value backend.

use crate::error::Result;
use crate::interactions::{InteractionStore, InteractionView};
use crate::kv::KvBackend;
use crate::user_data::UserData;
use serde::de::DeserializeOwned;
use serde::Serialize;

const LIKED_KEY: &str = "liked_topics";
const FAVORITED_KEY: &str = "favorited_topics";
const COMPLETED_KEY: &str = "completed_topics";
const POINTS_KEY: &str = "points";

/// Interaction store persisted through a [`KvBackend`].
///
/// State is loaded once on open. Reads are served from memory; every
/// mutation writes the affected key before returning.
pub struct PersistentStore<B: KvBackend> {
    backend: B,
    data: UserData,
}

impl<B: KvBackend> PersistentStore<B> {
    /// Load user data from the backend. Missing keys start empty and
    /// repeated ids are dropped, keeping the first occurrence.
    pub fn open(backend: B) -> Result<Self> {
        let liked: Vec<String> = read_key(&backend, LIKED_KEY)?.unwrap_or_default();
        let favorited: Vec<String> = read_key(&backend, FAVORITED_KEY)?.unwrap_or_default();
        let completed: Vec<String> = read_key(&backend, COMPLETED_KEY)?.unwrap_or_default();
        let points: u32 = read_key(&backend, POINTS_KEY)?.unwrap_or_default();

        let data = UserData::new()
            .with_liked(liked)
            .with_favorited(favorited)
            .with_completed(completed)
            .with_points(points);

        tracing::info!(
            liked = data.liked_topics.len(),
            favorited = data.favorited_topics.len(),
            completed = data.completed_topics.len(),
            points = data.points,
            "Opened interaction store"
        );

        Ok(Self { backend, data })
    }

    /// Current state.
    pub fn snapshot(&self) -> &UserData {
        &self.data
    }

    /// Release the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

fn write_key<B, T>(backend: &mut B, key: &str, value: &T) -> Result<()>
where
    B: KvBackend,
    T: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec(value)?;
    backend.put(key, &bytes)
}

fn read_key<B: KvBackend, T: DeserializeOwned>(backend: &B, key: &str) -> Result<Option<T>> {
    match backend.get(key)? {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}

impl<B: KvBackend> InteractionView for PersistentStore<B> {
    fn is_liked(&self, id: &str) -> bool {
        self.data.is_liked(id)
    }

    fn is_favorited(&self, id: &str) -> bool {
        self.data.is_favorited(id)
    }

    fn is_completed(&self, id: &str) -> bool {
        self.data.is_completed(id)
    }

    fn liked_topics(&self) -> &[String] {
        &self.data.liked_topics
    }

    fn favorited_topics(&self) -> &[String] {
        &self.data.favorited_topics
    }

    fn completed_topics(&self) -> &[String] {
        &self.data.completed_topics
    }

    fn points(&self) -> u32 {
        self.data.points
    }
}

// Mutations run on a copy and are committed only once the backend write
// succeeds, so a failed write leaves memory matching what is stored.
impl<B: KvBackend> InteractionStore for PersistentStore<B> {
    fn toggle_like(&mut self, id: &str) -> Result<bool> {
        let mut next = self.data.clone();
        let liked = next.toggle_like(id)?;
        write_key(&mut self.backend, LIKED_KEY, &next.liked_topics)?;
        self.data = next;
        tracing::debug!(topic = id, liked, "Toggled like");
        Ok(liked)
    }

    fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let mut next = self.data.clone();
        let favorited = next.toggle_favorite(id)?;
        write_key(&mut self.backend, FAVORITED_KEY, &next.favorited_topics)?;
        self.data = next;
        tracing::debug!(topic = id, favorited, "Toggled favorite");
        Ok(favorited)
    }

    fn mark_completed(&mut self, id: &str) -> Result<bool> {
        if self.data.is_completed(id) {
            return Ok(false);
        }
        let mut next = self.data.clone();
        next.mark_completed(id)?;
        write_key(&mut self.backend, COMPLETED_KEY, &next.completed_topics)?;
        self.data = next;
        tracing::debug!(topic = id, "Marked completed");
        Ok(true)
    }

    fn add_points(&mut self, n: u32) -> Result<u32> {
        let mut next = self.data.clone();
        let total = next.add_points(n)?;
        write_key(&mut self.backend, POINTS_KEY, &total)?;
        self.data = next;
        tracing::debug!(added = n, total, "Added points");
        Ok(total)
    }

    fn complete_topic(&mut self, id: &str, points: u32) -> Result<bool> {
        if self.data.is_completed(id) {
            return Ok(false);
        }
        let mut next = self.data.clone();
        next.complete_topic(id, points)?;

        let mut entries = vec![(COMPLETED_KEY, serde_json::to_vec(&next.completed_topics)?)];
        if points > 0 {
            entries.push((POINTS_KEY, serde_json::to_vec(&next.points)?));
        }
        self.backend.put_batch(&entries)?;

        self.data = next;
        tracing::debug!(topic = id, points, total = self.data.points, "Completed topic");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::kv::{MemoryBackend, SledBackend};
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::tempdir;

    /// Memory backend whose writes fail while `failing` is set.
    struct FlakyBackend {
        inner: MemoryBackend,
        failing: Rc<Cell<bool>>,
    }

    impl FlakyBackend {
        fn new() -> (Self, Rc<Cell<bool>>) {
            let failing = Rc::new(Cell::new(true));
            let backend = Self {
                inner: MemoryBackend::new(),
                failing: Rc::clone(&failing),
            };
            (backend, failing)
        }
    }

    impl KvBackend for FlakyBackend {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
            self.inner.get(key)
        }

        fn put(&mut self, key: &str, value: &[u8]) -> Result<()> {
            if self.failing.get() {
                return Err(Error::Storage("disk full".into()));
            }
            self.inner.put(key, value)
        }
    }

    #[test]
    fn opens_empty() {
        let store = PersistentStore::open(MemoryBackend::new()).unwrap();
        assert_eq!(store.snapshot(), &UserData::new());
    }

    #[test]
    fn survives_reopen() {
        let dir = tempdir().unwrap();

        {
            let backend = SledBackend::open(dir.path()).unwrap();
            let mut store = PersistentStore::open(backend).unwrap();
            store.toggle_like("a").unwrap();
            store.toggle_favorite("b").unwrap();
            store.mark_completed("a").unwrap();
            store.add_points(10).unwrap();
        }

        let backend = SledBackend::open(dir.path()).unwrap();
        let store = PersistentStore::open(backend).unwrap();
        assert!(store.is_liked("a"));
        assert!(store.is_favorited("b"));
        assert!(store.is_completed("a"));
        assert_eq!(store.points(), 10);
    }

    #[test]
    fn repeated_completion_writes_nothing_new() {
        let mut store = PersistentStore::open(MemoryBackend::new()).unwrap();
        assert!(store.mark_completed("a").unwrap());
        assert!(!store.mark_completed("a").unwrap());
        assert_eq!(store.completed_topics(), ["a"]);
        assert_eq!(store.points(), 0);

        let backend = store.into_backend();
        assert!(backend.get(POINTS_KEY).unwrap().is_none());
    }

    #[test]
    fn zero_points_not_persisted() {
        let mut store = PersistentStore::open(MemoryBackend::new()).unwrap();
        assert!(matches!(store.add_points(0), Err(Error::ZeroPoints)));
        assert!(store.into_backend().is_empty());
    }

    #[test]
    fn corrupt_value_is_an_error() {
        let mut backend = MemoryBackend::new();
        backend.put(POINTS_KEY, b"not a number").unwrap();
        assert!(matches!(
            PersistentStore::open(backend),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn failed_write_leaves_state_unchanged() {
        let (backend, _failing) = FlakyBackend::new();
        let mut store = PersistentStore::open(backend).unwrap();

        assert!(matches!(store.toggle_like("a"), Err(Error::Storage(_))));
        assert!(matches!(store.toggle_favorite("a"), Err(Error::Storage(_))));
        assert!(matches!(store.mark_completed("a"), Err(Error::Storage(_))));
        assert!(matches!(store.add_points(10), Err(Error::Storage(_))));

        assert_eq!(store.snapshot(), &UserData::new());
    }

    #[test]
    fn completion_retried_after_failed_write() {
        let (backend, failing) = FlakyBackend::new();
        let mut store = PersistentStore::open(backend).unwrap();

        assert!(store.mark_completed("a").is_err());
        assert!(!store.is_completed("a"));

        failing.set(false);
        assert!(store.mark_completed("a").unwrap());
        assert_eq!(store.completed_topics(), ["a"]);

        let reopened = PersistentStore::open(store.into_backend()).unwrap();
        assert!(reopened.is_completed("a"));
    }

    #[test]
    fn complete_topic_awards_once_and_persists() {
        let dir = tempdir().unwrap();

        {
            let backend = SledBackend::open(dir.path()).unwrap();
            let mut store = PersistentStore::open(backend).unwrap();
            assert!(store.complete_topic("a", 10).unwrap());
            assert!(!store.complete_topic("a", 10).unwrap());
            assert!(store.complete_topic("b", 0).unwrap());
            assert_eq!(store.points(), 10);
        }

        let store = PersistentStore::open(SledBackend::open(dir.path()).unwrap()).unwrap();
        assert_eq!(store.completed_topics(), ["a", "b"]);
        assert_eq!(store.points(), 10);
    }

    #[test]
    fn failed_complete_topic_can_be_retried() {
        let (backend, failing) = FlakyBackend::new();
        let mut store = PersistentStore::open(backend).unwrap();

        assert!(store.complete_topic("a", 10).is_err());
        assert!(!store.is_completed("a"));
        assert_eq!(store.points(), 0);

        failing.set(false);
        assert!(store.complete_topic("a", 10).unwrap());
        assert_eq!(store.points(), 10);
    }

    #[test]
    fn duplicate_ids_collapse_on_open() {
        let mut backend = MemoryBackend::new();
        backend.put(LIKED_KEY, br#"["a","b","a"]"#).unwrap();
        backend.put(COMPLETED_KEY, br#"["c","c"]"#).unwrap();

        let mut store = PersistentStore::open(backend).unwrap();
        assert_eq!(store.liked_topics(), ["a", "b"]);
        assert_eq!(store.completed_topics(), ["c"]);

        assert!(!store.toggle_like("a").unwrap());
        assert!(!store.is_liked("a"));
        assert_eq!(store.liked_topics(), ["b"]);
    }
}
