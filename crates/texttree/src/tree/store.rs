//! Immutable key to entity store and its read API.

use std::borrow::Cow;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use std::time::Instant;

use super::construct::{construct_cache, Cache};
use super::walk::{walk_it, WalkData};
use crate::config::{normalize_root, LoadConfig};
use crate::entity::Entity;
use crate::error::{Result, TextTreeError};
use crate::key::{sub_key, KEY_SEPARATOR};

/// Every qualifying file and subdirectory below a root, keyed for lookup.
///
/// The store is built once by [`EntityStore::load`] and never mutated
/// afterwards, so it can be shared between threads without locking.
///
/// Key conventions:
/// - Directory markers end in `/` (`"b/c/"`)
/// - A file is keyed without its extension (`"a/hello"`) unless a sibling
///   shares its stem, in which case it is keyed by full name (`"b/hello.txt"`)
#[derive(Debug)]
pub struct EntityStore {
    cache: Cache,
    base_path: PathBuf,
}

impl EntityStore {
    /// Loads every file below `root` that is smaller than `max_file_size` bytes.
    ///
    /// Fails on a missing root, an unlistable directory or an unreadable
    /// qualifying file. No partial store is returned.
    pub fn load(root: impl AsRef<Path>, max_file_size: u64) -> Result<Self> {
        let base_path = normalize_root(root.as_ref())?;
        let started = Instant::now();
        log::debug!(
            "loading text tree from {} (max file size {} bytes)",
            base_path.display(),
            max_file_size
        );

        // Phase 1: Walk the filesystem to build the Node tree
        let walk_data = WalkData::new(&base_path, max_file_size);
        let node_tree = walk_it(&walk_data)?;

        // Phase 2: Assign keys in preorder
        let cache = construct_cache(node_tree);

        log::debug!(
            "loaded text tree from {}: {} keys ({} files, {} directories) in {:?}",
            base_path.display(),
            cache.len(),
            walk_data.num_files.load(Ordering::Relaxed),
            walk_data.num_dirs.load(Ordering::Relaxed),
            started.elapsed()
        );

        Ok(Self { cache, base_path })
    }

    pub fn from_config(config: &LoadConfig) -> Result<Self> {
        Self::load(&config.root, config.max_file_size)
    }

    /// Returns every key, in no particular order.
    pub fn entities(&self) -> Vec<&str> {
        self.keys().collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.cache.keys().map(|key| &**key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entity)> + '_ {
        self.cache.iter().map(|(key, entity)| (&**key, entity))
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Gets an entity, failing with [`TextTreeError::KeyNotFound`] if absent.
    pub fn get(&self, key: &str) -> Result<&Entity> {
        self.get_if_exists(key)
            .ok_or_else(|| TextTreeError::KeyNotFound(key.to_string()))
    }

    /// Gets an entity if it exists.
    pub fn get_if_exists(&self, key: &str) -> Option<&Entity> {
        self.cache.get(key)
    }

    /// Gets the entity at `sub + "/" + path`.
    pub fn get_sub(&self, sub: &str, path: &str) -> Result<&Entity> {
        self.get(&sub_key(sub, path))
    }

    pub fn get_sub_if_exists(&self, sub: &str, path: &str) -> Option<&Entity> {
        self.get_if_exists(&sub_key(sub, path))
    }

    /// Gets an entity's content as text.
    pub fn get_string(&self, key: &str) -> Result<Cow<'_, str>> {
        self.get(key).map(Entity::text)
    }

    pub fn get_string_if_exists(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get_if_exists(key).map(Entity::text)
    }

    pub fn get_string_sub(&self, sub: &str, path: &str) -> Result<Cow<'_, str>> {
        self.get_sub(sub, path).map(Entity::text)
    }

    pub fn get_string_sub_if_exists(&self, sub: &str, path: &str) -> Option<Cow<'_, str>> {
        self.get_sub_if_exists(sub, path).map(Entity::text)
    }

    /// Returns true if a directory marker was recorded for `sub`.
    pub fn sub_exists(&self, sub: &str) -> bool {
        let mut key = String::with_capacity(sub.len() + 1);
        key.push_str(sub);
        key.push(KEY_SEPARATOR);
        self.cache.contains_key(key.as_str())
    }

    /// The root path the store was loaded from, without a trailing separator.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

/// Panics if the key is absent; use [`EntityStore::get_if_exists`] when
/// presence is not known.
impl Index<&str> for EntityStore {
    type Output = Entity;

    fn index(&self, key: &str) -> &Entity {
        match self.cache.get(key) {
            Some(entity) => entity,
            None => panic!("no entity for key {key:?}"),
        }
    }
}
