//! Generate the leading values of the Fibonacci sequence.
//!
//! ```
//! let seq = fibseq::generate(5).unwrap();
//! assert_eq!(seq.as_slice(), &[0, 1, 1, 2, 3]);
//! assert_eq!(seq.to_string(), "[0, 1, 1, 2, 3]");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod sequence;

// Re-export commonly used types
pub use crate::errors::{Error, Result};
pub use crate::sequence::{generate, Sequence, DEFAULT_COUNT, MAX_COUNT};
