// Copyright 2026 the Embar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable per-category row keys.

use hashbrown::HashMap;

/// Hands out a persistent `u64` key per category label.
///
/// Mark identity is derived from these keys, so a category keeps the same
/// retained primitives across updates regardless of its position in the host
/// table. Keys are never reused within one visual instance; a category that
/// disappears and later returns gets its old key back, which reconciles as a
/// fresh enter (its marks exited in between) without risk of collision.
#[derive(Debug, Default)]
pub struct CategoryKeys {
    keys: HashMap<String, u64>,
    next: u64,
}

impl CategoryKeys {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stable key for `category`, assigning one on first sight.
    pub fn key_for(&mut self, category: &str) -> u64 {
        if let Some(&key) = self.keys.get(category) {
            return key;
        }
        let key = self.next;
        self.next += 1;
        self.keys.insert(category.to_owned(), key);
        key
    }

    /// Returns the number of categories ever seen.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if no categories have been seen.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_stable_across_lookups() {
        let mut keys = CategoryKeys::new();
        let a = keys.key_for("alpha");
        let b = keys.key_for("beta");
        assert_ne!(a, b);
        assert_eq!(keys.key_for("alpha"), a);
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn reordering_does_not_change_keys() {
        let mut keys = CategoryKeys::new();
        let a = keys.key_for("alpha");
        let b = keys.key_for("beta");
        assert_eq!(keys.key_for("beta"), b);
        assert_eq!(keys.key_for("alpha"), a);
    }
}
