//! # Plain Dict
//!
//! Helpers for string-keyed dictionaries that hold only their own entries.
//!
//! This crate provides the [`Dict`] type, an insertion-ordered map from `String` keys,
//! and a set of free functions (`create`, `size`, `key_of`, `key_at`, `invert`, ...)
//! that work on a `Dict` or on any other map implementing [`AnyDict`].
//!
//! ## Key Features
//!
//! * **Own entries only:** a key like `"toString"` is never present unless it was inserted.
//! * **Deterministic order:** `Dict` enumerates keys in insertion order, integer-like keys included.
//! * **Works on foreign maps:** `HashMap`, `BTreeMap` and `OrderMap` with `String` keys all implement `AnyDict`.
//! * **Fast hashing:** `Dict` uses `FnvBuildHasher` for short keys.
//!
//! ## Cargo features
//!
//! * `serde`: (de)serialization of `Dict` through `ordermap`.
//! * `hashbrown`: `AnyDict` for `hashbrown::HashMap`.
//!
//! ## Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use plain_dict::{self as d, Source};
//!
//! let mut record = HashMap::new();
//! record.insert("en".to_string(), "hello".to_string());
//!
//! let mut dict = d::create(Source::from(&record));
//! dict.insert("fr".to_string(), "bonjour".to_string());
//!
//! assert_eq!(d::keys(&dict), vec!["en", "fr"]);
//! assert_eq!(d::key_of(&dict, &"bonjour".to_string()), Some("fr"));
//!
//! let by_word = d::invert(&dict);
//! assert_eq!(by_word["hello"], "en");
//! ```

// --- Module Declarations ---

pub mod any_dict;
pub mod dict;

// --- Re-exports ---

pub use any_dict::AnyDict;
pub use dict::{
    Dict, Source, clear, create, first_key, from_entries, has, invert, is_empty, key_at, key_of,
    keys, last_key, size, to_map,
};
