#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
//! constant-time implementations of some primitives
//!
//! Natrium internal library providing basic constant-time operations on byte slices.
//!
//! # Examples
//!
//! ```rust
//! use natrium_constant_time::{compare, constant_time_equals, verify_16, xor};
//!
//! let a = [1, 2, 3, 4];
//! let b = [1, 2, 3, 4];
//! let c = [1, 2, 3, 5];
//!
//! // Compare for equality
//! assert!(constant_time_equals(&a, &b));
//! assert!(!constant_time_equals(&a, &c));
//!
//! // Compare as little endian integers
//! assert_eq!(compare(&a, &c), -1); // a < c
//! assert_eq!(compare(&c, &a), 1);  // c > a
//! assert_eq!(compare(&a, &b), 0);  // a == b
//!
//! // Fixed length verification
//! assert!(verify_16(&[7u8; 16], &[7u8; 16]));
//!
//! // Xor, truncated to the shorter input
//! assert_eq!(xor(&a, &c[..2]), vec![0, 0]);
//! ```
//!
//! # Security Notes
//!
//! While these functions aim to be constant-time, they may leak timing information in some cases:
//!
//! - Input lengths are treated as public; length mismatches may be detectable
//! - Execution time scales linearly with input size

mod compare;
mod memcmp;
mod verify;
mod xor;

#[cfg(all(test, feature = "constant_time_tests"))]
mod timing;

pub use compare::{compare, compare_len};
pub use memcmp::{constant_time_equals, memcmp};
pub use verify::{verify, verify_16, verify_32};
pub use xor::{xor, xor_into};
