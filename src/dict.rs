//! The [`Dict`] type and the free functions that build and inspect dictionaries.
//!
//! A dictionary only ever holds entries that were assigned to it directly, so a
//! key like `"toString"` is just another key. Every function here is a single
//! pass over the own entries of its argument; only [`create`] and [`clear`]
//! allocate or mutate.
//!
//! # Enumeration order
//! [`Dict`] enumerates keys in insertion order, including keys that look like
//! integers. Positional helpers ([`key_at`], [`first_key`], [`last_key`]) follow
//! the order of whatever [`AnyDict`] they are handed.
//!
//! ```rust
//! use plain_dict::{self as d, Source};
//!
//! let mut dict = d::from_entries([("x", "abc"), ("y", "2"), ("z", "0")]);
//!
//! assert_eq!(d::size(&dict), 3);
//! assert_eq!(d::key_at(&dict, 1), Some("y"));
//! assert_eq!(d::key_of(&dict, &"0"), Some("z"));
//!
//! let copy = d::create(Source::from(&dict));
//! assert!(d::is_empty(&*d::clear(&mut dict)));
//! assert_eq!(d::last_key(&copy), Some("z"));
//! ```

use fnv::FnvBuildHasher;
use ordermap::OrderMap;

use crate::any_dict::AnyDict;

/// An insertion-ordered dictionary from string keys to `V`.
///
/// FNV hashing keeps lookups cheap for the short keys dictionaries usually hold.
pub type Dict<V> = OrderMap<String, V, FnvBuildHasher>;

/// Where [`create`] takes its entries from.
pub enum Source<'a, V> {
    /// No entries.
    Empty,
    /// An ordered key-value structure. Entries are moved in, order preserved.
    Map(OrderMap<String, V>),
    /// Any other mapping. Its own entries are cloned in enumeration order.
    Record(&'a dyn AnyDict<V>),
}

impl<V> Default for Source<'_, V> {
    fn default() -> Self {
        Source::Empty
    }
}

impl<V> From<()> for Source<'_, V> {
    fn from(_: ()) -> Self {
        Source::Empty
    }
}

impl<V> From<OrderMap<String, V>> for Source<'_, V> {
    fn from(map: OrderMap<String, V>) -> Self {
        Source::Map(map)
    }
}

impl<'a, V, D> From<&'a D> for Source<'a, V>
where
    D: AnyDict<V> + 'a,
{
    fn from(record: &'a D) -> Self {
        Source::Record(record)
    }
}

/// Creates a new dictionary, empty or filled from `source`.
pub fn create<V: Clone>(source: Source<'_, V>) -> Dict<V> {
    match source {
        Source::Empty => Dict::default(),
        Source::Map(map) => map.into_iter().collect(),
        Source::Record(record) => {
            let mut dict = Dict::with_capacity_and_hasher(record.len(), FnvBuildHasher::default());
            for (k, v) in record.entries() {
                dict.insert(k.to_owned(), v.clone());
            }
            dict
        }
    }
}

/// Builds a dictionary from key-value pairs, converting each key with [`ToString`].
///
/// A repeated key overwrites the earlier value but keeps its original position.
pub fn from_entries<K, V, I>(entries: I) -> Dict<V>
where
    K: ToString,
    I: IntoIterator<Item = (K, V)>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Returns `true` if `d` has no entries.
pub fn is_empty<D, V>(d: &D) -> bool
where
    D: AnyDict<V> + ?Sized,
{
    d.is_empty()
}

/// Returns the number of entries in `d`.
pub fn size<D, V>(d: &D) -> usize
where
    D: AnyDict<V> + ?Sized,
{
    d.len()
}

/// Returns `true` if `key` is one of the entries of `d`.
pub fn has<D, V>(d: &D, key: &str) -> bool
where
    D: AnyDict<V> + ?Sized,
{
    d.contains_key(key)
}

/// Returns the key of the first entry whose value equals `value`.
pub fn key_of<'a, D, V>(d: &'a D, value: &V) -> Option<&'a str>
where
    D: AnyDict<V> + ?Sized,
    V: PartialEq + 'a,
{
    d.entries().find(|&(_, v)| v == value).map(|(k, _)| k)
}

/// Returns the key at position `index`, or `None` when out of range.
pub fn key_at<'a, D, V: 'a>(d: &'a D, index: usize) -> Option<&'a str>
where
    D: AnyDict<V> + ?Sized,
{
    d.key_at(index)
}

/// Returns the first key, or `None` when `d` is empty.
pub fn first_key<'a, D, V: 'a>(d: &'a D) -> Option<&'a str>
where
    D: AnyDict<V> + ?Sized,
{
    d.key_at(0)
}

/// Returns the last key, or `None` when `d` is empty.
pub fn last_key<'a, D, V: 'a>(d: &'a D) -> Option<&'a str>
where
    D: AnyDict<V> + ?Sized,
{
    d.last_key()
}

/// Returns the keys of `d` in enumeration order.
pub fn keys<'a, D, V: 'a>(d: &'a D) -> Vec<&'a str>
where
    D: AnyDict<V> + ?Sized,
{
    d.entries().map(|(k, _)| k).collect()
}

/// Copies the entries of `d` into a standard ordered map, order preserved.
pub fn to_map<D, V>(d: &D) -> OrderMap<String, V>
where
    D: AnyDict<V> + ?Sized,
    V: Clone,
{
    let mut map = OrderMap::with_capacity(d.len());
    for (k, v) in d.entries() {
        map.insert(k.to_owned(), v.clone());
    }
    map
}

/// Swaps keys and values.
///
/// When several entries share a value, the last one enumerated wins: its key
/// replaces the earlier ones, at the position where that value first appeared.
pub fn invert<D, V>(d: &D) -> Dict<String>
where
    D: AnyDict<V> + ?Sized,
    V: AsRef<str>,
{
    let mut inverted = Dict::with_capacity_and_hasher(d.len(), FnvBuildHasher::default());
    for (k, v) in d.entries() {
        inverted.insert(v.as_ref().to_owned(), k.to_owned());
    }
    inverted
}

/// Removes every entry from `d` and hands it back for chaining.
pub fn clear<D, V>(d: &mut D) -> &mut D
where
    D: AnyDict<V> + ?Sized,
{
    d.clear();
    d
}
