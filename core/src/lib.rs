//! Core verification of generalized-index merkle proofs over code tries.
//!
//! Contract code is merkleized upstream into a complete binary hash tree:
//! the code is split into fixed-size chunks, each chunk becoming a 32-byte
//! leaf, with a metadata header mixed in alongside. This crate checks that
//! claimed leaves genuinely belong to the tree hashing to a given root,
//! without ever holding the tree itself.
//!
//! Positions are expressed as generalized indices: integers labeling the
//! nodes of a complete binary tree rooted at 1, encoding both position and
//! depth. See [`tree`] for the arithmetic, [`proof`] for single-leaf
//! verification, and [`multi_proof`] for verifying many leaves against one
//! combined proof.
//!
//! The verification routines of this crate do not require the standard
//! library, but do require Rust's alloc crate.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub mod hasher;
pub mod multi_proof;
pub mod proof;
pub mod tree;

pub use multi_proof::{helper_indices, verify_multiproof};
pub use proof::{verify_proof, VerificationError};
pub use tree::{GeneralizedIndex, Node};
