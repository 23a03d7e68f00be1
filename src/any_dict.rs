//! Read-and-clear abstraction over string-keyed maps.
//!
//! [`AnyDict`] is what lets the free functions in [`dict`](crate::dict) accept a
//! [`Dict`](crate::Dict) as well as any other string-keyed container the caller
//! already has. Every entry a container yields is one it owns directly; there is
//! no fallback lookup chain behind any of these types.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use ordermap::OrderMap;

/// A trait for abstraction over string-keyed map types (ordered, hashed, sorted).
///
/// Enumeration order is whatever the container naturally produces:
/// insertion order for `OrderMap`, sorted order for `BTreeMap`, and an
/// unspecified order for hash maps. Positional helpers (`key_at`, `last_key`)
/// are only meaningful on containers with a stable order.
///
/// The trait is object safe so a borrowed mapping can travel inside
/// [`Source::Record`](crate::Source::Record).
pub trait AnyDict<V> {
    fn len(&self) -> usize;
    fn contains_key(&self, key: &str) -> bool;

    /// Own entries in enumeration order.
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a str, &'a V)> + 'a>
    where
        V: 'a;

    /// Removes every entry in place.
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The key at position `index` in enumeration order.
    ///
    /// The default walks [`entries`](AnyDict::entries); indexed containers override it.
    fn key_at<'a>(&'a self, index: usize) -> Option<&'a str>
    where
        V: 'a,
    {
        self.entries().nth(index).map(|(k, _)| k)
    }

    /// The final key in enumeration order.
    fn last_key<'a>(&'a self) -> Option<&'a str>
    where
        V: 'a,
    {
        self.entries().last().map(|(k, _)| k)
    }
}

impl<V, S: BuildHasher> AnyDict<V> for OrderMap<String, V, S> {
    fn len(&self) -> usize {
        self.len()
    }
    fn contains_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a str, &'a V)> + 'a>
    where
        V: 'a,
    {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v)))
    }
    fn clear(&mut self) {
        self.clear();
    }
    // O(1): OrderMap keeps entries in a dense vector.
    fn key_at<'a>(&'a self, index: usize) -> Option<&'a str>
    where
        V: 'a,
    {
        self.get_index(index).map(|(k, _)| k.as_str())
    }
    fn last_key<'a>(&'a self) -> Option<&'a str>
    where
        V: 'a,
    {
        self.last().map(|(k, _)| k.as_str())
    }
}

impl<V, S: BuildHasher> AnyDict<V> for HashMap<String, V, S> {
    fn len(&self) -> usize {
        self.len()
    }
    fn contains_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a str, &'a V)> + 'a>
    where
        V: 'a,
    {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v)))
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<V> AnyDict<V> for BTreeMap<String, V> {
    fn len(&self) -> usize {
        self.len()
    }
    fn contains_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a str, &'a V)> + 'a>
    where
        V: 'a,
    {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v)))
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn last_key<'a>(&'a self) -> Option<&'a str>
    where
        V: 'a,
    {
        self.last_key_value().map(|(k, _)| k.as_str())
    }
}

#[cfg(feature = "hashbrown")]
impl<V, S: BuildHasher> AnyDict<V> for hashbrown::HashMap<String, V, S> {
    fn len(&self) -> usize {
        self.len()
    }
    fn contains_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a str, &'a V)> + 'a>
    where
        V: 'a,
    {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v)))
    }
    fn clear(&mut self) {
        self.clear();
    }
}
