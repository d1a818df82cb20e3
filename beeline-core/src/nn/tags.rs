// src/nn/tags.rs

//! Tag-based weight sharing.
//!
//! Every parameter carries a [`TagId`]. With sharing enabled, parameters with
//! the same tag are tied: they start from the tag's value and, during training,
//! move by the mean of their gradients. The [`TagArena`] only ever grows; a tag
//! that no entry references any more is harmless garbage.

use crate::error::BeeLineError;
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;

/// Handle into a [`TagArena`]. Handles increase monotonically and are never reused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagId(pub usize);

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anchor tag seeded with value `+1`.
pub const POSITIVE_ANCHOR: TagId = TagId(0);
/// Anchor tag seeded with value `-1`.
pub const NEGATIVE_ANCHOR: TagId = TagId(1);

/// Record of every tag ever minted and its canonical value.
#[derive(Debug, Clone, PartialEq)]
pub struct TagArena {
    values: Vec<f32>,
}

impl TagArena {
    /// The two anchors, `+1` and `-1`.
    pub fn with_anchors() -> Self {
        TagArena {
            values: vec![1.0, -1.0],
        }
    }

    /// Number of tags minted so far, live or abandoned.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, tag: TagId) -> bool {
        tag.0 < self.values.len()
    }

    pub fn value(&self, tag: TagId) -> Result<f32, BeeLineError> {
        self.values
            .get(tag.0)
            .copied()
            .ok_or(BeeLineError::UnknownTag { tag: tag.0 })
    }

    pub fn set_value(&mut self, tag: TagId, value: f32) -> Result<(), BeeLineError> {
        let slot = self
            .values
            .get_mut(tag.0)
            .ok_or(BeeLineError::UnknownTag { tag: tag.0 })?;
        *slot = value;
        Ok(())
    }

    /// Appends a new tag and returns its handle.
    pub fn mint(&mut self, value: f32) -> TagId {
        self.values.push(value);
        TagId(self.values.len() - 1)
    }

    /// A tag drawn uniformly from every tag minted so far.
    pub fn random_tag<R: Rng + ?Sized>(&self, rng: &mut R) -> TagId {
        TagId(rng.gen_range(0..self.values.len()))
    }

    pub fn ids(&self) -> impl Iterator<Item = TagId> {
        (0..self.values.len()).map(TagId)
    }
}

/// Running `(sum, count)` for one tag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Share {
    pub sum: f32,
    pub count: usize,
}

impl Share {
    pub fn mean(&self) -> Option<f32> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f32)
        }
    }
}

/// Transient reduction keyed by tag, rebuilt from the entries on every step.
///
/// Only tags referenced by at least one entry appear as keys. Iteration is in
/// ascending tag order so that anything randomised over it stays reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareTable {
    shares: BTreeMap<TagId, Share>,
}

impl ShareTable {
    /// Sums `values` per tag. Every tag must exist in `arena`.
    pub fn collect(
        arena: &TagArena,
        entries: impl IntoIterator<Item = (TagId, f32)>,
    ) -> Result<Self, BeeLineError> {
        let mut shares: BTreeMap<TagId, Share> = BTreeMap::new();
        for (tag, value) in entries {
            if !arena.contains(tag) {
                return Err(BeeLineError::UnknownTag { tag: tag.0 });
            }
            let share = shares.entry(tag).or_default();
            share.sum += value;
            share.count += 1;
        }
        Ok(ShareTable { shares })
    }

    pub fn get(&self, tag: TagId) -> Option<Share> {
        self.shares.get(&tag).copied()
    }

    pub fn mean(&self, tag: TagId) -> Option<f32> {
        self.get(tag).and_then(|share| share.mean())
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TagId, Share)> + '_ {
        self.shares.iter().map(|(tag, share)| (*tag, *share))
    }
}

#[cfg(test)]
#[path = "tags_test.rs"]
mod tests;
