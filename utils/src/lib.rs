#![cfg_attr(not(feature = "std"), no_std)]

//! Common code used by the hashlock DLEQ crates.

extern crate alloc;

#[macro_use]
pub mod macros;
pub mod hashing_utils;
pub mod serde_utils;
pub mod words;
