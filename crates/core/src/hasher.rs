// Copyright 2025 Batchsha Contributors.

//! The caller-facing batch API: one lane per message, digests in
//! submission order.

use batchsha_compute::ExecutionBackend;
use batchsha_hash::{
	digest::{generic_array::GenericArray, Digest},
	Sha256, DIGEST_LEN,
};
use tracing::instrument;

use crate::{
	batch::{unpack_digests, PackedBatch},
	Error,
};

/// Hashes batches of independent messages, one execution lane per message.
///
/// The backend is an explicitly constructed handle with a plain ownership
/// lifecycle: build one, submit any number of batches through it, drop it.
/// A dispatch is atomic; on error no partial digests are returned.
#[derive(Debug)]
pub struct BatchHasher<B> {
	backend: B,
}

impl<B: ExecutionBackend> BatchHasher<B> {
	pub fn new(backend: B) -> Self {
		Self { backend }
	}

	pub fn backend(&self) -> &B {
		&self.backend
	}

	/// Hashes every message in `messages`, returning one digest per message
	/// in the same order.
	///
	/// `digests[i]` depends only on `messages[i]`; batching never changes an
	/// individual message's digest. An empty batch returns an empty vector.
	#[instrument(skip_all, level = "debug", fields(lanes = messages.len()))]
	pub fn submit<M: AsRef<[u8]>>(&self, messages: &[M]) -> Result<Vec<[u8; DIGEST_LEN]>, Error> {
		let packed = PackedBatch::pack(messages)?;
		self.submit_packed(&packed)
	}

	/// Hashes an already-packed batch. The packed form can be reused across
	/// submissions or built incrementally by the caller.
	pub fn submit_packed(&self, packed: &PackedBatch) -> Result<Vec<[u8; DIGEST_LEN]>, Error> {
		packed.validate();
		let lanes = packed.lane_count();

		let mut flat = Vec::new();
		flat.try_reserve_exact(lanes * DIGEST_LEN)?;
		flat.resize(lanes * DIGEST_LEN, 0);

		self.backend
			.dispatch(lanes, DIGEST_LEN, &mut flat, |lane, out| {
				let mut hasher = Sha256::new();
				hasher.update(packed.lane_bytes(lane));
				hasher.finalize_into(GenericArray::from_mut_slice(out));
			})?;

		tracing::debug!(lanes, input_bytes = packed.total_len(), "batch hashed");
		Ok(unpack_digests(&flat))
	}
}
