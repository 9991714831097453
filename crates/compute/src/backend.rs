// Copyright 2025 Batchsha Contributors.

use std::fmt::Debug;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// No usable backend could be brought up (e.g. the worker pool failed to
	/// build). Raised at construction time, before any dispatch is accepted.
	#[error("backend unavailable: {0}")]
	Backend(Box<dyn std::error::Error + Send + Sync>),
	#[error("output buffer holds {actual} bytes, dispatch needs {expected}")]
	OutputSizeMismatch { expected: usize, actual: usize },
}

/// An abstraction over hardware that can run many independent lanes of
/// uniform work.
///
/// A dispatch is atomic from the caller's perspective: when `dispatch`
/// returns `Ok`, every lane has run to completion; on `Err`, no output byte
/// may be observed. Implementations may schedule lanes in any order and with
/// any degree of concurrency, but must never let two lanes touch the same
/// output slice.
pub trait ExecutionBackend: Send + Sync + Debug {
	/// Runs `lane` once for every index in `0..lane_count`.
	///
	/// `out` is split into `lane_count` disjoint `lane_width`-byte slices;
	/// the invocation for index `i` receives exclusive write access to slice
	/// `i`. `lane` must derive everything else it needs from its index, so
	/// its result cannot depend on scheduling.
	///
	/// # Panics
	/// Panics if `lane_width == 0` while `lane_count > 0`; that is a
	/// programming error, not a runtime condition.
	fn dispatch<F>(
		&self,
		lane_count: usize,
		lane_width: usize,
		out: &mut [u8],
		lane: F,
	) -> Result<(), Error>
	where
		F: Fn(usize, &mut [u8]) + Send + Sync;
}

/// Makes it unnecessary to clone backends.
impl<T: ExecutionBackend> ExecutionBackend for &T {
	fn dispatch<F>(
		&self,
		lane_count: usize,
		lane_width: usize,
		out: &mut [u8],
		lane: F,
	) -> Result<(), Error>
	where
		F: Fn(usize, &mut [u8]) + Send + Sync,
	{
		T::dispatch(self, lane_count, lane_width, out, lane)
	}
}

/// Validates the lane/buffer geometry shared by every backend.
pub(crate) fn check_dispatch_geometry(
	lane_count: usize,
	lane_width: usize,
	out: &[u8],
) -> Result<(), Error> {
	assert!(
		lane_count == 0 || lane_width > 0,
		"dispatch of {lane_count} lanes with zero-width output slices"
	);
	let expected = lane_count
		.checked_mul(lane_width)
		.expect("total output extent overflows usize");
	if out.len() != expected {
		return Err(Error::OutputSizeMismatch {
			expected,
			actual: out.len(),
		});
	}
	Ok(())
}
