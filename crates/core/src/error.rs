// Copyright 2025 Batchsha Contributors.

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The flat input or output buffer could not be allocated. The whole
	/// dispatch fails; no partial digests are returned.
	#[error("failed to allocate flat batch buffer: {0}")]
	Allocation(#[from] std::collections::TryReserveError),
	#[error("{0}")]
	Compute(#[from] batchsha_compute::Error),
}
