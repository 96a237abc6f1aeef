//! Word lists
//!
//! Provides the embedded dictionary compiled into the binary plus file
//! loading for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
