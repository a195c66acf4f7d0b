pub mod core;

pub use crate::core::decomposer::{decompose, unpack};
pub use crate::core::unicode::{decompose_syllable, is_hangul_syllable};
