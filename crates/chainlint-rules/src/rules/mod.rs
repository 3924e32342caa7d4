//! The rules shipped with chainlint.

pub mod no_repeated_chains;

pub use no_repeated_chains::{ChainOptions, NoRepeatedChains};
