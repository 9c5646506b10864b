//! Algebraic codes built on top of the field machinery.

pub mod bch;
