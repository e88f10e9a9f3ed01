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

// --- crates.io ---
use codec::Encode;
// --- paritytech ---
use sp_runtime::RuntimeDebug;
use sp_std::{collections::btree_map::BTreeMap, prelude::*};
// --- darwinia-network ---
use super::Storage;

type Overlay = BTreeMap<Vec<u8>, Option<Vec<u8>>>;

/// A `BTreeMap` backed storage with a stack of transaction overlays.
#[derive(Clone, Default, RuntimeDebug)]
pub struct InMemoryStorage {
	top: BTreeMap<Vec<u8>, Vec<u8>>,
	// `None` marks a deletion.
	transactions: Vec<Overlay>,
}
impl InMemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of open transaction layers.
	pub fn transaction_depth(&self) -> usize {
		self.transactions.len()
	}

	/// The committed view with every open layer applied, sorted by key.
	pub fn pairs(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
		let mut flat = self.top.clone();

		for layer in &self.transactions {
			for (k, v) in layer {
				match v {
					Some(v) => {
						flat.insert(k.clone(), v.clone());
					}
					None => {
						flat.remove(k);
					}
				}
			}
		}

		flat.into_iter().collect()
	}

	/// All keys starting with `prefix`.
	pub fn keys_with_prefix(&self, prefix: &[u8]) -> Vec<Vec<u8>> {
		self.pairs()
			.into_iter()
			.filter_map(|(k, _)| if k.starts_with(prefix) { Some(k) } else { None })
			.collect()
	}

	/// `blake2_256` of the encoded sorted pairs.
	pub fn storage_root(&self) -> [u8; 32] {
		sp_crypto_hashing::blake2_256(&self.pairs().encode())
	}
}
impl Storage for InMemoryStorage {
	fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
		for layer in self.transactions.iter().rev() {
			if let Some(v) = layer.get(key) {
				return v.clone();
			}
		}

		self.top.get(key).cloned()
	}

	fn set(&mut self, key: &[u8], value: &[u8]) {
		if let Some(layer) = self.transactions.last_mut() {
			layer.insert(key.to_vec(), Some(value.to_vec()));
		} else {
			self.top.insert(key.to_vec(), value.to_vec());
		}
	}

	fn clear(&mut self, key: &[u8]) {
		if let Some(layer) = self.transactions.last_mut() {
			layer.insert(key.to_vec(), None);
		} else {
			self.top.remove(key);
		}
	}

	fn start_transaction(&mut self) {
		self.transactions.push(Overlay::new());
	}

	fn commit_transaction(&mut self) -> Result<(), ()> {
		let layer = self.transactions.pop().ok_or(())?;

		if let Some(parent) = self.transactions.last_mut() {
			parent.extend(layer);
		} else {
			for (k, v) in layer {
				match v {
					Some(v) => {
						self.top.insert(k, v);
					}
					None => {
						self.top.remove(&k);
					}
				}
			}
		}

		Ok(())
	}

	fn rollback_transaction(&mut self) -> Result<(), ()> {
		self.transactions.pop().map(|_| ()).ok_or(())
	}
}
