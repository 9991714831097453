// Copyright 2025 Batchsha Contributors.

//! Packing variable-length messages into a flat buffer and slicing the flat
//! digest output back apart.

use batchsha_hash::DIGEST_LEN;

use crate::Error;

/// A batch of messages flattened into one contiguous buffer plus an offset
/// index.
///
/// For a batch of `N` messages the index holds `N + 1` entries with
/// `offsets[0] == 0` and `offsets[N] == bytes.len()`; message `i` occupies
/// the half-open range `[offsets[i], offsets[i + 1])`. The ranges are
/// pairwise disjoint and cover the buffer exactly, which is what lets each
/// lane of a dispatch address its own input without consulting any other
/// lane's.
#[derive(Debug, Clone)]
pub struct PackedBatch {
	bytes: Vec<u8>,
	offsets: Vec<usize>,
}

impl PackedBatch {
	/// Flattens `messages` in order into a single buffer.
	///
	/// One linear pass, byte-for-byte faithful; no message is split,
	/// reordered or truncated. An empty batch packs to an empty buffer with
	/// a one-entry index.
	pub fn pack<M: AsRef<[u8]>>(messages: &[M]) -> Result<Self, Error> {
		let total = messages.iter().map(|m| m.as_ref().len()).sum();

		let mut bytes = Vec::new();
		bytes.try_reserve_exact(total)?;
		let mut offsets = Vec::new();
		offsets.try_reserve_exact(messages.len() + 1)?;

		offsets.push(0);
		for message in messages {
			bytes.extend_from_slice(message.as_ref());
			offsets.push(bytes.len());
		}
		debug_assert_eq!(bytes.len(), total);

		Ok(Self { bytes, offsets })
	}

	/// Assembles a batch from an already-flattened buffer and offset index.
	///
	/// # Panics
	/// Panics if the index is malformed: empty, not starting at 0, not
	/// non-decreasing, or not ending at `bytes.len()`.
	pub fn from_raw_parts(bytes: Vec<u8>, offsets: Vec<usize>) -> Self {
		let batch = Self { bytes, offsets };
		batch.validate();
		batch
	}

	/// Number of messages, and so of dispatch lanes.
	pub fn lane_count(&self) -> usize {
		self.offsets.len() - 1
	}

	/// Total packed length in bytes.
	pub fn total_len(&self) -> usize {
		self.bytes.len()
	}

	/// The flat input buffer; read-only to lanes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// The offset index; `lane_count() + 1` entries.
	pub fn offsets(&self) -> &[usize] {
		&self.offsets
	}

	/// The bytes of message `lane`, exactly as submitted.
	///
	/// # Panics
	/// Panics if `lane >= lane_count()`.
	pub fn lane_bytes(&self, lane: usize) -> &[u8] {
		&self.bytes[self.offsets[lane]..self.offsets[lane + 1]]
	}

	/// Asserts the offset-index invariants. A violation is a programming
	/// error, so this fails loudly instead of returning a recoverable error.
	pub(crate) fn validate(&self) {
		assert!(!self.offsets.is_empty(), "offset index must have at least one entry");
		assert_eq!(self.offsets[0], 0, "offset index must start at 0");
		assert!(
			self.offsets.windows(2).all(|pair| pair[0] <= pair[1]),
			"offset index must be non-decreasing"
		);
		assert_eq!(
			*self.offsets.last().expect("index is non-empty"),
			self.bytes.len(),
			"offset index must end at the packed length"
		);
	}
}

/// Slices a flat `DIGEST_LEN * N` output buffer into `N` digests,
/// index-aligned with the batch that produced it.
///
/// # Panics
/// Panics if `flat.len()` is not a multiple of [`DIGEST_LEN`].
pub fn unpack_digests(flat: &[u8]) -> Vec<[u8; DIGEST_LEN]> {
	assert_eq!(flat.len() % DIGEST_LEN, 0, "flat output is not whole digests");
	flat.chunks_exact(DIGEST_LEN)
		.map(|chunk| chunk.try_into().expect("chunk is DIGEST_LEN bytes"))
		.collect()
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_pack_layout() {
		let batch = PackedBatch::pack(&[b"ab".as_slice(), b"", b"cde"]).unwrap();
		assert_eq!(batch.lane_count(), 3);
		assert_eq!(batch.bytes(), b"abcde");
		assert_eq!(batch.offsets(), &[0, 2, 2, 5]);
		assert_eq!(batch.lane_bytes(0), b"ab");
		assert_eq!(batch.lane_bytes(1), b"");
		assert_eq!(batch.lane_bytes(2), b"cde");
	}

	#[test]
	fn test_pack_empty_batch() {
		let batch = PackedBatch::pack::<&[u8]>(&[]).unwrap();
		assert_eq!(batch.lane_count(), 0);
		assert_eq!(batch.total_len(), 0);
		assert_eq!(batch.offsets(), &[0]);
	}

	#[test]
	#[should_panic(expected = "non-decreasing")]
	fn test_decreasing_offsets_rejected() {
		let _ = PackedBatch::from_raw_parts(vec![0; 4], vec![0, 3, 2, 4]);
	}

	#[test]
	#[should_panic(expected = "end at the packed length")]
	fn test_short_offsets_rejected() {
		let _ = PackedBatch::from_raw_parts(vec![0; 4], vec![0, 3]);
	}

	#[test]
	fn test_unpack_preserves_order() {
		let mut flat = Vec::new();
		for i in 0..5u8 {
			flat.extend_from_slice(&[i; DIGEST_LEN]);
		}
		let digests = unpack_digests(&flat);
		assert_eq!(digests.len(), 5);
		for (i, digest) in digests.iter().enumerate() {
			assert_eq!(digest, &[i as u8; DIGEST_LEN]);
		}
	}

	proptest! {
		#[test]
		fn test_offset_index_invariants(messages in prop::collection::vec(
			prop::collection::vec(any::<u8>(), 0..200), 0..50,
		)) {
			let batch = PackedBatch::pack(&messages).unwrap();
			let offsets = batch.offsets();

			prop_assert_eq!(offsets.len(), messages.len() + 1);
			prop_assert_eq!(offsets[0], 0);
			prop_assert!(offsets.windows(2).all(|pair| pair[0] <= pair[1]));
			prop_assert_eq!(
				*offsets.last().unwrap(),
				messages.iter().map(Vec::len).sum::<usize>()
			);
			for (lane, message) in messages.iter().enumerate() {
				prop_assert_eq!(batch.lane_bytes(lane), message.as_slice());
			}
		}
	}
}
