//! Board result caching: in-memory LRU backed by JSON files on disk.
//!
//! The engine recomputes the whole board in one pass; this cache keeps the
//! result of that pass between command invocations. Keys are content
//! fingerprints of the inputs (players + settings + ranks), so a changed
//! input addresses a different entry and writes need no invalidation hook.

use lru::LruCache;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    hash::{DefaultHasher, Hash, Hasher},
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{LazyLock, Mutex},
};

use crate::engine::types::{Player, ReplacementRanks, ScoringSettings};

/// Base directory for cache files: `<cache_dir>/ffl-draft`.
pub fn cache_base_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("ffl-draft")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Cache key usable for both memory and disk tiers
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// String form used to name the on-disk file
    fn to_file_key(&self) -> String;

    /// File path for this cache entry
    fn to_file_path(&self) -> PathBuf {
        cache_base_dir().join(format!("{}.json", self.to_file_key()))
    }
}

/// Cache key for a fully computed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardCacheKey {
    pub fingerprint: u64,
}

impl CacheKey for BoardCacheKey {
    fn to_file_key(&self) -> String {
        format!("board_{:016x}", self.fingerprint)
    }
}

/// Content fingerprint of everything the board computation depends on.
pub fn board_fingerprint(
    players: &[Player],
    scoring: &ScoringSettings,
    ranks: &ReplacementRanks,
) -> crate::Result<BoardCacheKey> {
    let mut hasher = DefaultHasher::new();
    serde_json::to_string(players)?.hash(&mut hasher);
    serde_json::to_string(scoring)?.hash(&mut hasher);
    serde_json::to_string(ranks)?.hash(&mut hasher);
    Ok(BoardCacheKey {
        fingerprint: hasher.finish(),
    })
}

/// Two-tier cache: LRU memory cache in front of JSON file persistence
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + DeserializeOwned,
{
    memory_cache: Mutex<LruCache<K, V>>,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + DeserializeOwned,
{
    /// Create a new unified cache with the given memory capacity
    pub fn new(memory_capacity: usize) -> Self {
        Self {
            memory_cache: Mutex::new(LruCache::new(
                NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN),
            )),
        }
    }

    /// Get an item from cache (memory first, then disk, promoting on hit)
    pub fn get(&self, key: &K) -> Option<V> {
        if let Ok(mut cache) = self.memory_cache.lock() {
            if let Some(value) = cache.get(key) {
                return Some(value.clone());
            }
        }

        let value = self.get_from_disk(key)?;
        if let Ok(mut cache) = self.memory_cache.lock() {
            cache.put(key.clone(), value.clone());
        }
        Some(value)
    }

    /// Put an item into both tiers
    pub fn put(&self, key: K, value: V) {
        if let Ok(mut cache) = self.memory_cache.lock() {
            cache.put(key.clone(), value.clone());
        }
        let _ = self.put_to_disk(&key, &value);
    }

    fn get_from_disk(&self, key: &K) -> Option<V> {
        let content = try_read_to_string(&key.to_file_path())?;
        serde_json::from_str(&content).ok()
    }

    fn put_to_disk(&self, key: &K, value: &V) -> std::io::Result<()> {
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&key.to_file_path(), &content)
    }

    /// Clear the memory tier (disk entries remain)
    pub fn clear_memory(&self) {
        if let Ok(mut cache) = self.memory_cache.lock() {
            cache.clear();
        }
    }
}

/// Process-wide caches
pub struct CacheManager {
    pub board: UnifiedCache<BoardCacheKey, Vec<Player>>,
}

impl CacheManager {
    fn new() -> Self {
        Self {
            board: UnifiedCache::new(16),
        }
    }
}

pub static GLOBAL_CACHE: LazyLock<CacheManager> = LazyLock::new(CacheManager::new);
