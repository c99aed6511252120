//! Password composition: validation, character classes and generation.

pub mod charset;
mod generate;
mod validate;

pub use charset::CharClass;
pub use generate::{generate, generate_with};
pub use validate::{Composition, MAX_LENGTH, MIN_LENGTH};
