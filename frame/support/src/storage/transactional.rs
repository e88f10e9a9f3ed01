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

//! Nested storage layers.
//!
//! The current depth lives in storage under [`TRANSACTION_LEVEL_KEY`], outside of the layer it
//! counts, so a rollback never loses track of it.

// --- crates.io ---
use codec::{Decode, Encode};
// --- paritytech ---
use sp_runtime::{DispatchError, TransactionOutcome, TransactionalError};
// --- darwinia-network ---
use super::Storage;

/// The key that holds the current number of active layers.
pub const TRANSACTION_LEVEL_KEY: &[u8] = b":transaction_level:";
/// The maximum number of nested layers.
pub const TRANSACTIONAL_LIMIT: u32 = 255;

/// The current number of nested layers.
pub fn transaction_level(ext: &dyn Storage) -> u32 {
	ext.get(TRANSACTION_LEVEL_KEY)
		.and_then(|raw| u32::decode(&mut &raw[..]).ok())
		.unwrap_or(0)
}

/// Whether we are inside of a storage layer.
pub fn is_transactional(ext: &dyn Storage) -> bool {
	transaction_level(ext) > 0
}

fn set_transaction_level(ext: &mut dyn Storage, level: u32) {
	if level == 0 {
		ext.clear(TRANSACTION_LEVEL_KEY);
	} else {
		ext.set(TRANSACTION_LEVEL_KEY, &level.encode());
	}
}

fn inc_transaction_level(ext: &mut dyn Storage) -> Result<(), ()> {
	let existing_levels = transaction_level(ext);

	if existing_levels >= TRANSACTIONAL_LIMIT {
		return Err(());
	}

	set_transaction_level(ext, existing_levels + 1);

	Ok(())
}

fn dec_transaction_level(ext: &mut dyn Storage) {
	let existing_levels = transaction_level(ext);

	if existing_levels == 0 {
		log::warn!(
			target: "runtime::storage",
			"We are underflowing with calculating transactional levels. Not great, but let's not panic...",
		);
	} else {
		set_transaction_level(ext, existing_levels - 1);
	}
}

/// Execute `f` in a new storage layer which is committed or rolled back depending on the returned
/// [`TransactionOutcome`].
///
/// Fails with [`TransactionalError::LimitReached`] when [`TRANSACTIONAL_LIMIT`] layers are already
/// open, without calling `f`.
pub fn with_transaction<R, E>(
	ext: &mut dyn Storage,
	f: impl FnOnce(&mut dyn Storage) -> TransactionOutcome<Result<R, E>>,
) -> Result<R, E>
where
	E: From<DispatchError>,
{
	inc_transaction_level(ext)
		.map_err(|_| E::from(DispatchError::Transactional(TransactionalError::LimitReached)))?;
	ext.start_transaction();

	let (closed, result) = match f(ext) {
		TransactionOutcome::Commit(result) => (ext.commit_transaction(), result),
		TransactionOutcome::Rollback(result) => (ext.rollback_transaction(), result),
	};

	if closed.is_err() {
		log::error!(target: "runtime::storage", "Closing a storage layer which was never opened");
	}

	dec_transaction_level(ext);

	result
}

/// Execute `f` in a new storage layer, committing on `Ok` and rolling back on `Err`.
pub fn with_storage_layer<R, E>(
	ext: &mut dyn Storage,
	f: impl FnOnce(&mut dyn Storage) -> Result<R, E>,
) -> Result<R, E>
where
	E: From<DispatchError>,
{
	with_transaction(ext, |ext| {
		let r = f(ext);

		if r.is_ok() {
			TransactionOutcome::Commit(r)
		} else {
			TransactionOutcome::Rollback(r)
		}
	})
}
