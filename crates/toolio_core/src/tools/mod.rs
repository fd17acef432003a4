//! Generator and converter tools.
//!
//! Every function here is a pure mapping from plain inputs to plain outputs.
//! Randomness is always taken from a caller-supplied `rand::Rng`.

pub mod codec;
pub mod color;
pub mod compress;
pub mod names;
pub mod password;
pub mod qr;
pub mod units;
