// Copyright 2025 Batchsha Contributors.

//! Execution backends for data-parallel lane dispatch.
//!
//! A backend runs a uniform per-lane function over `N` independent lanes,
//! giving each lane exclusive write access to a disjoint fixed-width slice of
//! one flat output buffer. Lanes share no mutable state and assume no
//! ordering, so correctness rests on the slice partition alone.

pub mod backend;
pub mod cpu;

pub use backend::{Error, ExecutionBackend};
pub use cpu::{CpuBackend, SerialBackend};
