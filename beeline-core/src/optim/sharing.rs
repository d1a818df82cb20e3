// src/optim/sharing.rs

//! Training-time operations on tied parameters.

use crate::error::BeeLineError;
use crate::nn::network::Network;
use crate::nn::tags::{ShareTable, TagId};
use rand::Rng;
use std::collections::BTreeMap;

/// Replaces every entry's gradient with the mean gradient of its tag.
///
/// Returns the reduction table. Without sharing the network is left untouched
/// and the table is empty.
///
/// # Errors
/// `UnknownTag` if an entry references a tag the arena never minted.
pub fn average_shared_gradients(network: &mut Network) -> Result<ShareTable, BeeLineError> {
    let table = match network.tags() {
        Some(arena) => ShareTable::collect(arena, network.params().map(|p| (p.tag, p.gradient)))?,
        None => return Ok(ShareTable::default()),
    };
    for param in network.params_mut() {
        if let Some(mean) = table.mean(param.tag) {
            param.gradient = mean;
        }
    }
    Ok(table)
}

/// Copies each live tag's current value, read from its first entry, back
/// into the arena.
fn refresh_tag_values(network: &mut Network) -> Result<(), BeeLineError> {
    let mut current: BTreeMap<TagId, f32> = BTreeMap::new();
    for param in network.params() {
        current.entry(param.tag).or_insert(param.value.val);
    }
    if let Some(arena) = network.tags_mut() {
        for (tag, value) in current {
            arena.set_value(tag, value)?;
        }
    }
    Ok(())
}

/// Stochastically unties over-shared groups.
///
/// For every tag referenced by two or more entries a new tag is minted, valued
/// like a uniformly drawn tag that existed before this call. Each entry of the
/// group then moves to the new tag with probability 1/2, taking its value and
/// restarting its momentum from zero. Groups of one are left alone.
///
/// Returns the `(old, new)` pairs minted, in ascending order of `old`.
pub fn split_tags<R: Rng + ?Sized>(
    network: &mut Network,
    rng: &mut R,
) -> Result<Vec<(TagId, TagId)>, BeeLineError> {
    if !network.is_shared() {
        return Ok(Vec::new());
    }
    refresh_tag_values(network)?;

    let mut splits: BTreeMap<TagId, (TagId, f32)> = BTreeMap::new();
    {
        let counts = match network.tags() {
            Some(arena) => ShareTable::collect(arena, network.params().map(|p| (p.tag, 0.0)))?,
            None => return Ok(Vec::new()),
        };
        let arena = match network.tags_mut() {
            Some(arena) => arena,
            None => return Ok(Vec::new()),
        };
        let existing = arena.len();
        for (tag, share) in counts.iter() {
            if share.count < 2 {
                continue;
            }
            let value = arena.value(TagId(rng.gen_range(0..existing)))?;
            let fresh = arena.mint(value);
            splits.insert(tag, (fresh, value));
        }
    }

    for param in network.params_mut() {
        if let Some(&(fresh, value)) = splits.get(&param.tag) {
            if rng.gen_bool(0.5) {
                param.tag = fresh;
                param.value.val = value;
                param.momentum = 0.0;
            }
        }
    }

    if !splits.is_empty() {
        log::debug!("split {} shared tag group(s)", splits.len());
    }
    Ok(splits.into_iter().map(|(old, (fresh, _))| (old, fresh)).collect())
}
