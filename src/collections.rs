use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

/// Use indexmap for insertion-ordered lookups and rustc_hash for fast hashing.
/// Backpointer maps rely on insertion order staying stable: the indices the
/// searches record at discovery time must remain valid for the whole call.
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Fast hash set for membership-only bookkeeping (maze reachability checks).
pub(crate) use rustc_hash::FxHashSet;
