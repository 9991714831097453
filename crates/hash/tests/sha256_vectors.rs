// Copyright 2025 Batchsha Contributors.

use batchsha_hash::{digest::Digest, Sha256, DIGEST_LEN};
use hex_literal::hex;

fn sha256(data: &[u8]) -> [u8; DIGEST_LEN] {
	Sha256::digest(data).into()
}

#[test]
fn test_empty_input() {
	let expected = hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
	assert_eq!(sha256(b""), expected);
}

#[test]
fn test_abc() {
	let expected = hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
	assert_eq!(sha256(b"abc"), expected);
}

#[test]
fn test_nist_two_block_vector() {
	let expected = hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1");
	assert_eq!(sha256(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"), expected);
}

#[test]
fn test_nist_four_block_vector() {
	let expected = hex!("cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1");
	let msg = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno\
		ijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
	assert_eq!(sha256(msg), expected);
}

#[test]
fn test_padding_boundaries() {
	// Lengths chosen to land on each side of the length-field cutoff at byte
	// 56 and the block boundary at byte 64, in both one- and two-block form.
	let cases: [(usize, [u8; DIGEST_LEN]); 5] = [
		(55, hex!("9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318")),
		(56, hex!("b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a")),
		(64, hex!("ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb")),
		(119, hex!("31eba51c313a5c08226adf18d4a359cfdfd8d2e816b13f4af952f7ea6584dcfb")),
		(120, hex!("2f3d335432c70b580af0e8e1b3674a7c020d683aa5f73aaaedfdc55af904c21c")),
	];
	for (len, expected) in cases {
		assert_eq!(sha256(&vec![b'a'; len]), expected, "length {len}");
	}
}

#[test]
fn test_million_a() {
	let expected = hex!("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0");
	let mut hasher = Sha256::new();
	for _ in 0..1000 {
		hasher.update([b'a'; 1000]);
	}
	let out: [u8; DIGEST_LEN] = hasher.finalize().into();
	assert_eq!(out, expected);
}

#[test]
fn test_single_byte() {
	let expected = hex!("ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb");
	assert_eq!(sha256(b"a"), expected);
}
