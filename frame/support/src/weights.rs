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

//! Execution cost accounting.
//!
//! A [`Weight`] has two independent dimensions: `ref_time` is the computation time in picoseconds
//! on reference hardware and `proof_size` is the size of the storage proof in bytes.

// --- paritytech ---
pub use sp_weights::{ConstantMultiplier, IdentityFee, RuntimeDbWeight, Weight, WeightToFee};

pub mod constants {
	// --- paritytech ---
	pub use sp_weights::constants::*;
	// --- darwinia-network ---
	use super::{RuntimeDbWeight, Weight};

	/// Executing 10,000 System remarks (no-op) txs takes ~1.26 seconds -> ~125 µs per tx
	pub const EXTRINSIC_BASE_WEIGHT: Weight =
		Weight::from_parts(WEIGHT_REF_TIME_PER_MICROS.saturating_mul(125), 0);
	/// Importing a block with 0 txs takes ~5 ms
	pub const BLOCK_EXECUTION_WEIGHT: Weight =
		Weight::from_parts(WEIGHT_REF_TIME_PER_MILLIS.saturating_mul(5), 0);

	/// By default, Substrate uses RocksDB, so this will be the weight used throughout
	/// the runtime.
	pub const ROCKS_DB_WEIGHT: RuntimeDbWeight = RuntimeDbWeight {
		read: 25 * WEIGHT_REF_TIME_PER_MICROS,
		write: 100 * WEIGHT_REF_TIME_PER_MICROS,
	};
}
