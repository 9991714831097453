// Copyright 2025 Batchsha Contributors.

//! Batched SHA-256 over parallel execution lanes.
//!
//! A batch of independent messages is packed into one flat buffer with an
//! offset index, hashed one-lane-per-message on an
//! [`ExecutionBackend`](batchsha_compute::ExecutionBackend), and unpacked
//! back into per-message digests in submission order:
//!
//! ```
//! use batchsha_compute::CpuBackend;
//! use batchsha_core::BatchHasher;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let hasher = BatchHasher::new(CpuBackend::new()?);
//! let digests = hasher.submit(&[b"abc".as_slice(), b"".as_slice()])?;
//! assert_eq!(digests.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod batch;
mod error;
pub mod hasher;

pub use batch::{unpack_digests, PackedBatch};
pub use batchsha_hash::{Sha256, DIGEST_LEN};
pub use error::Error;
pub use hasher::BatchHasher;
