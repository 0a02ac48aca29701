#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// tile padding module.
pub mod seam;

/// tile grid layout module.
pub mod tile;
