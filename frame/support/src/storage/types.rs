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

// --- core ---
use core::marker::PhantomData;
// --- crates.io ---
use codec::{DecodeAll, Encode, EncodeAppend, FullCodec};
// --- paritytech ---
use sp_std::prelude::*;
// --- darwinia-network ---
use super::{Blake2_128Concat, Storage, StorageHasher, StorageInstance};

fn read<V>(ext: &dyn Storage, key: &[u8]) -> Option<V>
where
	V: FullCodec,
{
	let raw = ext.get(key)?;

	match V::decode_all(&mut &raw[..]) {
		Ok(v) => Some(v),
		Err(e) => {
			log::error!(
				target: "runtime::storage",
				"Corrupted state at {:?}: {:?}",
				key,
				e,
			);

			None
		}
	}
}

/// A single typed value stored under `twox_128(pallet) ++ twox_128(storage)`.
///
/// An absent value reads as `V::default()`.
pub struct StorageValue<Prefix, V>(PhantomData<(Prefix, V)>);
impl<Prefix, V> StorageValue<Prefix, V>
where
	Prefix: StorageInstance,
	V: FullCodec + Default,
{
	pub fn hashed_key() -> [u8; 32] {
		Prefix::prefix()
	}

	pub fn exists(ext: &dyn Storage) -> bool {
		ext.exists(&Self::hashed_key())
	}

	pub fn get(ext: &dyn Storage) -> V {
		Self::try_get(ext).unwrap_or_default()
	}

	pub fn try_get(ext: &dyn Storage) -> Option<V> {
		read(ext, &Self::hashed_key())
	}

	pub fn put(ext: &mut dyn Storage, value: &V) {
		ext.set(&Self::hashed_key(), &value.encode());
	}

	pub fn kill(ext: &mut dyn Storage) {
		ext.clear(&Self::hashed_key());
	}

	pub fn take(ext: &mut dyn Storage) -> V {
		let value = Self::get(ext);

		Self::kill(ext);

		value
	}

	pub fn mutate<R>(ext: &mut dyn Storage, f: impl FnOnce(&mut V) -> R) -> R {
		let mut value = Self::get(ext);
		let r = f(&mut value);

		Self::put(ext, &value);

		r
	}

	/// Nothing is written if `f` fails.
	pub fn try_mutate<R, E>(
		ext: &mut dyn Storage,
		f: impl FnOnce(&mut V) -> Result<R, E>,
	) -> Result<R, E> {
		let mut value = Self::get(ext);
		let r = f(&mut value)?;

		Self::put(ext, &value);

		Ok(r)
	}

	/// Push an item onto a vector value without decoding the existing items.
	pub fn append<Item>(ext: &mut dyn Storage, item: &Item)
	where
		Item: Encode,
		V: EncodeAppend<Item = Item>,
	{
		ext.append(&Self::hashed_key(), item.encode());
	}
}

/// A typed map whose entries live under
/// `twox_128(pallet) ++ twox_128(storage) ++ blake2_128(key) ++ key`.
///
/// An absent entry reads as `V::default()`.
pub struct StorageMap<Prefix, K, V>(PhantomData<(Prefix, K, V)>);
impl<Prefix, K, V> StorageMap<Prefix, K, V>
where
	Prefix: StorageInstance,
	K: FullCodec,
	V: FullCodec + Default,
{
	pub fn hashed_key_for(key: &K) -> Vec<u8> {
		let prefix = Prefix::prefix();
		let key_hashed = Blake2_128Concat::hash(&key.encode());
		let mut final_key = Vec::with_capacity(prefix.len() + key_hashed.len());

		final_key.extend_from_slice(&prefix);
		final_key.extend(key_hashed);

		final_key
	}

	pub fn contains_key(ext: &dyn Storage, key: &K) -> bool {
		ext.exists(&Self::hashed_key_for(key))
	}

	pub fn get(ext: &dyn Storage, key: &K) -> V {
		Self::try_get(ext, key).unwrap_or_default()
	}

	pub fn try_get(ext: &dyn Storage, key: &K) -> Option<V> {
		read(ext, &Self::hashed_key_for(key))
	}

	pub fn insert(ext: &mut dyn Storage, key: &K, value: &V) {
		ext.set(&Self::hashed_key_for(key), &value.encode());
	}

	pub fn remove(ext: &mut dyn Storage, key: &K) {
		ext.clear(&Self::hashed_key_for(key));
	}

	pub fn take(ext: &mut dyn Storage, key: &K) -> V {
		let value = Self::get(ext, key);

		Self::remove(ext, key);

		value
	}

	pub fn mutate<R>(ext: &mut dyn Storage, key: &K, f: impl FnOnce(&mut V) -> R) -> R {
		let mut value = Self::get(ext, key);
		let r = f(&mut value);

		Self::insert(ext, key, &value);

		r
	}

	/// Nothing is written if `f` fails.
	pub fn try_mutate<R, E>(
		ext: &mut dyn Storage,
		key: &K,
		f: impl FnOnce(&mut V) -> Result<R, E>,
	) -> Result<R, E> {
		let mut value = Self::get(ext, key);
		let r = f(&mut value)?;

		Self::insert(ext, key, &value);

		Ok(r)
	}

	/// Mutate the entry, removing it if `f` leaves `None` behind.
	pub fn mutate_exists<R>(
		ext: &mut dyn Storage,
		key: &K,
		f: impl FnOnce(&mut Option<V>) -> R,
	) -> R {
		let mut maybe_value = Self::try_get(ext, key);
		let r = f(&mut maybe_value);

		match maybe_value {
			Some(ref value) => Self::insert(ext, key, value),
			None => Self::remove(ext, key),
		}

		r
	}

	/// Mutate the entry, removing it if `f` leaves `None` behind. Nothing is written if `f` fails.
	pub fn try_mutate_exists<R, E>(
		ext: &mut dyn Storage,
		key: &K,
		f: impl FnOnce(&mut Option<V>) -> Result<R, E>,
	) -> Result<R, E> {
		let mut maybe_value = Self::try_get(ext, key);
		let r = f(&mut maybe_value)?;

		match maybe_value {
			Some(ref value) => Self::insert(ext, key, value),
			None => Self::remove(ext, key),
		}

		Ok(r)
	}
}
