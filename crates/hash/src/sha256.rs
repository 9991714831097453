// Copyright 2025 Batchsha Contributors.

//! SHA-256 with all working state held in fixed-size inline arrays.
//!
//! The hasher is a plain value: an 8-word running state, a 64-byte block
//! accumulator and a bit-length counter. It owns no heap memory, so a fresh
//! instance can live on the stack of every lane of a parallel dispatch.
//!
//! The type plugs into the RustCrypto [`digest`] trait family. Finalization
//! consumes the hasher ([`FixedOutput::finalize_into`]), so updating or
//! finalizing an already-finalized state is rejected by the compiler rather
//! than silently tolerated.

use core::fmt;

use digest::{
	core_api::BlockSizeUser,
	typenum::{U32, U64},
	FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
};

/// SHA-256 block size in bytes.
pub const BLOCK_LEN: usize = 64;

/// SHA-256 digest size in bytes.
pub const DIGEST_LEN: usize = 32;

/// Initial hash values, FIPS 180-4 §5.3.3.
const IV: [u32; 8] = [
	0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Round constants, FIPS 180-4 §4.2.2. Fixed by the standard.
#[rustfmt::skip]
const K: [u32; 64] = [
	0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
	0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
	0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
	0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
	0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
	0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
	0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
	0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

#[inline(always)]
const fn ch(x: u32, y: u32, z: u32) -> u32 {
	(x & (y ^ z)) ^ z
}

#[inline(always)]
const fn maj(x: u32, y: u32, z: u32) -> u32 {
	(x & (y | z)) | (y & z)
}

#[inline(always)]
const fn big_sigma_0(x: u32) -> u32 {
	x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
const fn big_sigma_1(x: u32) -> u32 {
	x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
const fn small_sigma_0(x: u32) -> u32 {
	x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
const fn small_sigma_1(x: u32) -> u32 {
	x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// One compression pass over a full 64-byte block.
fn compress(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
	let mut w = [0u32; 64];
	for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_be_bytes(bytes.try_into().expect("chunk is 4 bytes"));
	}
	for i in 16..64 {
		w[i] = small_sigma_1(w[i - 2])
			.wrapping_add(w[i - 7])
			.wrapping_add(small_sigma_0(w[i - 15]))
			.wrapping_add(w[i - 16]);
	}

	let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
	for i in 0..64 {
		let t1 = h
			.wrapping_add(big_sigma_1(e))
			.wrapping_add(ch(e, f, g))
			.wrapping_add(K[i])
			.wrapping_add(w[i]);
		let t2 = big_sigma_0(a).wrapping_add(maj(a, b, c));
		h = g;
		g = f;
		f = e;
		e = d.wrapping_add(t1);
		d = c;
		c = b;
		b = a;
		a = t1.wrapping_add(t2);
	}

	state[0] = state[0].wrapping_add(a);
	state[1] = state[1].wrapping_add(b);
	state[2] = state[2].wrapping_add(c);
	state[3] = state[3].wrapping_add(d);
	state[4] = state[4].wrapping_add(e);
	state[5] = state[5].wrapping_add(f);
	state[6] = state[6].wrapping_add(g);
	state[7] = state[7].wrapping_add(h);
}

/// SHA-256 hasher state.
///
/// Use through [`digest::Digest`]: `Sha256::digest(data)` for one-shot
/// hashing, or `new`/`update`/`finalize` for block-wise accumulation over
/// multiple slices.
#[derive(Clone)]
pub struct Sha256 {
	state: [u32; 8],
	block: [u8; BLOCK_LEN],
	// Fill cursor into `block`; always < BLOCK_LEN between calls.
	block_len: usize,
	// Bits consumed by completed compression passes.
	bit_len: u64,
}

impl Default for Sha256 {
	fn default() -> Self {
		Self {
			state: IV,
			block: [0u8; BLOCK_LEN],
			block_len: 0,
			bit_len: 0,
		}
	}
}

impl Sha256 {
	fn compress_block(&mut self) {
		let block = self.block;
		compress(&mut self.state, &block);
		self.bit_len += 8 * BLOCK_LEN as u64;
		self.block_len = 0;
	}

	fn finalize_inner(&mut self, out: &mut Output<Self>) {
		let total_bits = self.bit_len + 8 * self.block_len as u64;

		let fill = self.block_len;
		self.block[fill] = 0x80;
		if fill < 56 {
			self.block[fill + 1..56].fill(0);
		} else {
			// No room for the length field; pad out this block and start another.
			self.block[fill + 1..].fill(0);
			let block = self.block;
			compress(&mut self.state, &block);
			self.block[..56].fill(0);
		}
		self.block[56..].copy_from_slice(&total_bits.to_be_bytes());
		let block = self.block;
		compress(&mut self.state, &block);

		for (bytes, word) in out.chunks_exact_mut(4).zip(self.state.iter()) {
			bytes.copy_from_slice(&word.to_be_bytes());
		}
	}
}

impl HashMarker for Sha256 {}

impl BlockSizeUser for Sha256 {
	type BlockSize = U64;
}

impl OutputSizeUser for Sha256 {
	type OutputSize = U32;
}

impl Update for Sha256 {
	fn update(&mut self, mut data: &[u8]) {
		if self.block_len > 0 {
			let take = (BLOCK_LEN - self.block_len).min(data.len());
			self.block[self.block_len..self.block_len + take].copy_from_slice(&data[..take]);
			self.block_len += take;
			data = &data[take..];
			if self.block_len < BLOCK_LEN {
				return;
			}
			self.compress_block();
		}

		let mut blocks = data.chunks_exact(BLOCK_LEN);
		for block in &mut blocks {
			compress(&mut self.state, block.try_into().expect("chunk is a full block"));
			self.bit_len += 8 * BLOCK_LEN as u64;
		}

		let rem = blocks.remainder();
		if !rem.is_empty() {
			self.block[..rem.len()].copy_from_slice(rem);
			self.block_len = rem.len();
		}
	}
}

impl FixedOutput for Sha256 {
	fn finalize_into(mut self, out: &mut Output<Self>) {
		self.finalize_inner(out);
	}
}

impl FixedOutputReset for Sha256 {
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		self.finalize_inner(out);
		Reset::reset(self);
	}
}

impl Reset for Sha256 {
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl fmt::Debug for Sha256 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Sha256 { ... }")
	}
}
