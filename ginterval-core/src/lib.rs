//! Genomic intervals in 1-based, fully-closed coordinates.
//!
//! This crate models a single genomic interval, a chromosome name plus a closed range of
//! coordinates such as `chr1:400-600`, and the pairwise operations between two of them:
//! classifying how one interval sits relative to another, measuring their overlap or gap,
//! and taking their bounding union.
//!
//! ## Quick Start
//!
//! ```rust
//! use ginterval_core::models::{GenomicInterval, Relation};
//!
//! let receiver = GenomicInterval::parse("chr1:400-600").unwrap();
//! let subject = GenomicInterval::parse("chr1:300-500").unwrap();
//!
//! assert_eq!(receiver.compare(&subject), Relation::LeftOverlapped);
//! assert_eq!(receiver.overlap(&subject), 101);
//! assert_eq!(receiver.expand(&subject).unwrap().to_string(), "chr1:300-600");
//! ```
//!
//! ## Adjacency tolerance
//!
//! Every interval carries an `adjacent` tolerance (20 bp by default). Two disjoint intervals
//! separated by no more than that many bases are classified as adjacent rather than off,
//! which makes [`GenomicInterval::nearly_overlapped`](models::GenomicInterval::nearly_overlapped)
//! true for them. The receiver's tolerance is the one that applies.
//!
//! ```rust
//! use ginterval_core::models::GenomicInterval;
//!
//! let mut receiver = GenomicInterval::parse("chr1:400-600").unwrap();
//! let subject = GenomicInterval::parse("chr1:300-390").unwrap();
//! assert!(receiver.nearly_overlapped(&subject));
//!
//! receiver.set_adjacent(5);
//! assert!(!receiver.nearly_overlapped(&subject));
//! ```
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

pub use consts::*;
pub use errors::*;
