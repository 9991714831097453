// Copyright 2025 Batchsha Contributors.

use rayon::{
	iter::{IndexedParallelIterator, ParallelIterator},
	slice::ParallelSliceMut,
	ThreadPool, ThreadPoolBuilder,
};
use tracing::instrument;

use crate::backend::{check_dispatch_geometry, Error, ExecutionBackend};

/// Backend that fans lanes out over an owned rayon thread pool.
///
/// The pool is built at construction, so an unusable backend surfaces as an
/// error before any batch is accepted.
#[derive(Debug)]
pub struct CpuBackend {
	pool: ThreadPool,
}

impl CpuBackend {
	/// Creates a backend with one worker per available core.
	pub fn new() -> Result<Self, Error> {
		Self::with_threads(0)
	}

	/// Creates a backend with `num_threads` workers; `0` means one per core.
	pub fn with_threads(num_threads: usize) -> Result<Self, Error> {
		let pool = ThreadPoolBuilder::new()
			.num_threads(num_threads)
			.build()
			.map_err(|err| Error::Backend(err.into()))?;
		Ok(Self { pool })
	}
}

impl ExecutionBackend for CpuBackend {
	#[instrument(skip_all, level = "debug", fields(lanes = lane_count))]
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
		check_dispatch_geometry(lane_count, lane_width, out)?;
		if lane_count == 0 {
			return Ok(());
		}
		self.pool.install(|| {
			out.par_chunks_exact_mut(lane_width)
				.enumerate()
				.for_each(|(i, slot)| lane(i, slot));
		});
		Ok(())
	}
}

/// Backend that runs lanes in index order on the calling thread.
///
/// Useful as a baseline for differential tests and for callers without a
/// worker pool; it upholds the same dispatch contract as [`CpuBackend`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialBackend;

impl ExecutionBackend for SerialBackend {
	#[instrument(skip_all, level = "debug", fields(lanes = lane_count))]
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
		check_dispatch_geometry(lane_count, lane_width, out)?;
		for (i, slot) in out.chunks_exact_mut(lane_width).enumerate() {
			lane(i, slot);
		}
		Ok(())
	}
}
