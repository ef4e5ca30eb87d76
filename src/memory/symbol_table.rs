use crate::memory::arena::{Arena, Cursor};

/// Number of buckets used by [`SymbolTable::new`].
pub const DEFAULT_BUCKET_COUNT: usize = 512;

#[derive(Debug, Clone)]
struct Entry<V> {
    key:   String,
    value: V,
}

/// Computes the bucket index of `key` for a table with `bucket_count` buckets.
///
/// The hash is the polynomial `h = h * 131 + byte` over the bytes of the key,
/// with wrapping arithmetic, reduced modulo `bucket_count`. The same key always
/// maps to the same bucket for a given bucket count.
///
/// # Example
/// ```
/// use mao::memory::symbol_table::hash;
///
/// assert_eq!(hash("a", 512), 97);
/// assert_eq!(hash("ab", 512), (97 * 131 + 98) % 512);
/// ```
#[must_use]
pub fn hash(key: &str, bucket_count: usize) -> usize {
    key.bytes()
       .fold(0usize, |hash, byte| hash.wrapping_mul(131).wrapping_add(usize::from(byte)))
    % bucket_count.max(1)
}

/// A string-keyed map with a fixed number of chained buckets.
///
/// Each bucket is created on first insertion as an [`Arena`] with a block
/// capacity of one, and is released again once its last entry is deleted.
/// Inserting a key that is already present does not replace it: the older
/// entry keeps shadowing the newer one for lookups. Callers that need unique
/// keys check [`SymbolTable::exists`] first.
#[derive(Debug, Clone)]
pub struct SymbolTable<V> {
    buckets: Vec<Option<Arena<Entry<V>>>>,
    len:     usize,
}

impl<V> Default for SymbolTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SymbolTable<V> {
    /// Creates an empty table with [`DEFAULT_BUCKET_COUNT`] buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    /// Creates an empty table with `bucket_count` buckets.
    ///
    /// # Panics
    /// Panics if `bucket_count` is zero.
    #[must_use]
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "symbol table needs at least one bucket");
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, || None);
        Self { buckets, len: 0 }
    }

    /// Number of buckets.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of buckets currently holding at least one entry.
    #[must_use]
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|bucket| bucket.is_some()).count()
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a new entry to the bucket of `key`.
    pub fn insert(&mut self, key: &str, value: V) {
        let index = self.bucket_of(key);
        let bucket = self.buckets[index].get_or_insert_with(|| Arena::with_block_capacity(1));
        bucket.push(Entry { key: key.to_owned(),
                            value });
        self.len += 1;
    }

    /// Returns the value of the first entry whose key equals `key`.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&V> {
        self.buckets
            .get(self.bucket_of(key))?
            .as_ref()?
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Returns the value of the first entry whose key equals `key`, mutably.
    pub fn lookup_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_of(key);
        let bucket = self.buckets.get_mut(index)?.as_mut()?;
        let cursor = Self::find(bucket, key)?;
        bucket.at_mut(cursor).map(|entry| &mut entry.value)
    }

    /// Returns `true` when an entry with this key exists.
    #[must_use]
    pub fn exists(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Removes the first entry whose key equals `key` and returns its value.
    ///
    /// The bucket itself is released when it becomes empty. Deleting an absent
    /// key returns `None` and leaves the table unchanged.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_of(key);
        let slot = self.buckets.get_mut(index)?;
        let bucket = slot.as_mut()?;
        let cursor = Self::find(bucket, key)?;
        let removed = bucket.remove_at(cursor)?;

        if bucket.is_empty() {
            *slot = None;
        }
        self.len -= 1;

        Some(removed.value)
    }

    /// Iterates over every entry, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.buckets
            .iter()
            .flatten()
            .flat_map(|bucket| bucket.iter().map(|entry| (entry.key.as_str(), &entry.value)))
    }

    fn bucket_of(&self, key: &str) -> usize {
        hash(key, self.buckets.len())
    }

    fn find(bucket: &Arena<Entry<V>>, key: &str) -> Option<Cursor> {
        let mut cursor = bucket.cursor();
        while let Some(entry) = bucket.at(cursor) {
            if entry.key == key {
                return Some(cursor);
            }
            bucket.advance(&mut cursor);
        }
        None
    }
}
