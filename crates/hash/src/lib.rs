// Copyright 2025 Batchsha Contributors.

pub mod sha256;

pub use digest;
pub use sha256::{Sha256, BLOCK_LEN, DIGEST_LEN};
