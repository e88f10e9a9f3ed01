// This file is part of Darwinia.
//
// Copyright (C) 2018-2022 Darwinia Network
// SPDX-License-Identifier: GPL-3.0
//
// Darwinia is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Darwinia is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Darwinia. If not, see <https://www.gnu.org/licenses/>.

//! The storage capability.
//!
//! Every state access goes through a [`Storage`] handle which is passed explicitly into each
//! operation. There is no global backend.

mod memory;
mod transactional;
mod types;

pub use memory::InMemoryStorage;
pub use transactional::{is_transactional, transaction_level, with_storage_layer, with_transaction};
pub use types::{StorageMap, StorageValue};

// --- crates.io ---
use codec::{Compact, Decode, Encode};
// --- paritytech ---
use sp_std::prelude::*;

/// A key/value backend with nested transactions.
pub trait Storage {
	fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

	fn set(&mut self, key: &[u8], value: &[u8]);

	fn clear(&mut self, key: &[u8]);

	fn exists(&self, key: &[u8]) -> bool {
		self.get(key).is_some()
	}

	/// Append an encoded item to the SCALE encoded vector stored under `key`.
	///
	/// The existing items are never decoded, only the length prefix is rewritten. A value which
	/// does not start with a valid length prefix is replaced.
	fn append(&mut self, key: &[u8], item: Vec<u8>) {
		let appended = match self.get(key) {
			Some(current) => {
				let mut input = &current[..];

				match <Compact<u32>>::decode(&mut input) {
					Ok(Compact(len)) => {
						let mut v = Compact(len.saturating_add(1)).encode();

						v.extend_from_slice(input);
						v.extend(item);

						v
					}
					Err(_) => {
						log::error!(
							target: "runtime::storage",
							"Value under {:?} is not an encoded vector, overwriting it",
							key,
						);

						fresh_vec(item)
					}
				}
			}
			None => fresh_vec(item),
		};

		self.set(key, &appended);
	}

	/// Open a new transaction layer.
	fn start_transaction(&mut self);

	/// Merge the innermost transaction layer into its parent.
	///
	/// Fails if there is no open transaction.
	fn commit_transaction(&mut self) -> Result<(), ()>;

	/// Discard the innermost transaction layer.
	///
	/// Fails if there is no open transaction.
	fn rollback_transaction(&mut self) -> Result<(), ()>;
}

fn fresh_vec(item: Vec<u8>) -> Vec<u8> {
	let mut v = Compact(1_u32).encode();

	v.extend(item);

	v
}

/// The location of a typed storage item.
pub trait StorageInstance {
	const PALLET: &'static str;
	const STORAGE: &'static str;

	fn prefix() -> [u8; 32] {
		let mut final_key = [0; 32];

		final_key[..16].copy_from_slice(&sp_crypto_hashing::twox_128(Self::PALLET.as_bytes()));
		final_key[16..].copy_from_slice(&sp_crypto_hashing::twox_128(Self::STORAGE.as_bytes()));

		final_key
	}
}

/// Hasher used to build the key of a map entry.
pub trait StorageHasher {
	fn hash(x: &[u8]) -> Vec<u8>;
}

/// `blake2_128(key) ++ key`, transparent and safe against user controlled keys.
#[allow(non_camel_case_types)]
pub struct Blake2_128Concat;
impl StorageHasher for Blake2_128Concat {
	fn hash(x: &[u8]) -> Vec<u8> {
		sp_crypto_hashing::blake2_128(x).iter().chain(x.iter()).cloned().collect()
	}
}
