//! Verifying combined membership proofs for multiple leaves at once.
//!
//! When several proven leaves share ancestors, their single-leaf proofs
//! overlap: a sibling on one leaf's path may be an ancestor recomputed on
//! another leaf's path. A multiproof strips that redundancy. It carries each
//! externally required sibling (a *helper*) exactly once; every other node
//! is reconstructed by climbing all paths simultaneously and reusing
//! ancestors across them.
//!
//! Both sides of the protocol must agree on which nodes the combined proof
//! carries and in which order. [`helper_indices`] is that contract.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

use crate::hasher::NodeHasher;
use crate::proof::VerificationError;
use crate::tree::{self, GeneralizedIndex, Node};

/// Compute the generalized indices a combined proof must supply to
/// reconstruct the root from leaves at `indices`, in the order the proof
/// must list them.
///
/// A node is *on-path* if it is one of the supplied indices or an ancestor
/// of one. A helper is the sibling of an on-path node that is not itself
/// on-path: its hash cannot be derived from the leaves, so it must travel
/// with the proof. A sibling needed by two leaves' paths appears once.
///
/// Helpers are listed in descending numeric order, deepest levels first.
/// The ordering is load-bearing: consuming the proof bottom-up guarantees
/// that every node needed to compute a parent has already been resolved.
pub fn helper_indices(
    indices: &[GeneralizedIndex],
) -> Result<Vec<GeneralizedIndex>, VerificationError> {
    let mut on_path = BTreeSet::new();
    for &index in indices {
        if index == 0 {
            return Err(VerificationError::InvalidIndex);
        }
        let mut position = index;
        // Stop early once an ancestor is already recorded: everything above
        // it was recorded along with it.
        while on_path.insert(position) && position > 1 {
            position /= 2;
        }
    }

    let mut helpers: Vec<GeneralizedIndex> = on_path
        .iter()
        .filter(|&&position| position > 1)
        .map(|&position| position ^ 1)
        .filter(|helper| !on_path.contains(helper))
        .collect();
    helpers.sort_unstable_by(|a, b| b.cmp(a));

    Ok(helpers)
}

/// Verify a combined membership proof for several leaves at once.
///
/// `leaves` and `indices` pair up element-wise; the indices must be mutually
/// distinct and positive. `proof` must hold exactly the nodes at
/// [`helper_indices`] of `indices`, in that order.
///
/// Returns `Ok(true)` iff the root reconstructed from all paths equals
/// `root` byte-for-byte. A well-formed proof over the wrong nodes returns
/// `Ok(false)`; only structurally malformed input is an error.
pub fn verify_multiproof<H: NodeHasher>(
    root: &Node,
    proof: &[Node],
    leaves: &[Node],
    indices: &[GeneralizedIndex],
) -> Result<bool, VerificationError> {
    if leaves.len() != indices.len() {
        return Err(VerificationError::LeafCountMismatch);
    }
    if indices.is_empty() {
        return Err(VerificationError::NoLeaves);
    }

    let mut nodes = BTreeMap::new();
    for (&index, &leaf) in indices.iter().zip(leaves) {
        if index == 0 {
            return Err(VerificationError::InvalidIndex);
        }
        if nodes.insert(index, leaf).is_some() {
            return Err(VerificationError::DuplicateIndex);
        }
    }

    let helpers = helper_indices(indices)?;
    if proof.len() != helpers.len() {
        return Err(VerificationError::SiblingCountMismatch);
    }
    nodes.extend(helpers.iter().copied().zip(proof.iter().copied()));

    // Climb all paths at once, deepest positions first.
    let mut pending: BTreeSet<GeneralizedIndex> = nodes.keys().copied().collect();
    while let Some(position) = pending.pop_last() {
        if position == 1 {
            break;
        }
        let parent = tree::parent(position)?;
        if nodes.contains_key(&parent) {
            continue;
        }

        let sibling = tree::sibling(position)?;
        let (left, right) = if tree::is_right(position) {
            (sibling, position)
        } else {
            (position, sibling)
        };
        // UNWRAP: the sibling of an on-path node is either on-path itself or
        // one of the derived helpers. Helpers and leaves are seeded above,
        // and strictly descending order resolves every on-path ancestor
        // before the loop reaches its level.
        let combined = H::combine(nodes.get(&left).unwrap(), nodes.get(&right).unwrap());
        nodes.insert(parent, combined);
        pending.insert(parent);
    }

    Ok(nodes.get(&1) == Some(root))
}
