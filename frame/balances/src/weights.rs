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

//! Weights for darwinia_balances.

#![allow(unused_parens)]
#![allow(unused_imports)]

// --- core ---
use core::marker::PhantomData;
// --- paritytech ---
use sp_runtime::traits::Get;
// --- darwinia-network ---
use darwinia_support::weights::{constants::ROCKS_DB_WEIGHT, Weight};

/// Weight functions needed for darwinia_balances.
pub trait WeightInfo {
	fn transfer() -> Weight;
	fn transfer_keep_alive() -> Weight;
	fn set_balance_creating() -> Weight;
	fn set_balance_killing() -> Weight;
	fn force_transfer() -> Weight;
	fn transfer_all() -> Weight;
	fn force_unreserve() -> Weight;
}

/// Weights for darwinia_balances using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: darwinia_system::Config> WeightInfo for SubstrateWeight<T> {
	// Storage: System Account (r:1 w:1)
	fn transfer() -> Weight {
		// Minimum execution time: 38_109 nanoseconds.
		Weight::from_parts(38_109_000, 3593)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}

	// Storage: System Account (r:1 w:1)
	fn transfer_keep_alive() -> Weight {
		// Minimum execution time: 28_143 nanoseconds.
		Weight::from_parts(28_143_000, 3593)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}

	// Storage: System Account (r:1 w:1)
	fn set_balance_creating() -> Weight {
		// Minimum execution time: 17_034 nanoseconds.
		Weight::from_parts(17_034_000, 3593)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}

	// Storage: System Account (r:1 w:1)
	fn set_balance_killing() -> Weight {
		// Minimum execution time: 19_415 nanoseconds.
		Weight::from_parts(19_415_000, 3593)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}

	// Storage: System Account (r:2 w:2)
	fn force_transfer() -> Weight {
		// Minimum execution time: 40_360 nanoseconds.
		Weight::from_parts(40_360_000, 6196)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(2))
	}

	// Storage: System Account (r:1 w:1)
	fn transfer_all() -> Weight {
		// Minimum execution time: 35_121 nanoseconds.
		Weight::from_parts(35_121_000, 3593)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}

	// Storage: System Account (r:1 w:1)
	fn force_unreserve() -> Weight {
		// Minimum execution time: 13_764 nanoseconds.
		Weight::from_parts(13_764_000, 3593)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

// For backwards compatibility and tests
impl WeightInfo for () {
	fn transfer() -> Weight {
		Weight::from_parts(38_109_000, 3593)
			.saturating_add(ROCKS_DB_WEIGHT.reads(1))
			.saturating_add(ROCKS_DB_WEIGHT.writes(1))
	}

	fn transfer_keep_alive() -> Weight {
		Weight::from_parts(28_143_000, 3593)
			.saturating_add(ROCKS_DB_WEIGHT.reads(1))
			.saturating_add(ROCKS_DB_WEIGHT.writes(1))
	}

	fn set_balance_creating() -> Weight {
		Weight::from_parts(17_034_000, 3593)
			.saturating_add(ROCKS_DB_WEIGHT.reads(1))
			.saturating_add(ROCKS_DB_WEIGHT.writes(1))
	}

	fn set_balance_killing() -> Weight {
		Weight::from_parts(19_415_000, 3593)
			.saturating_add(ROCKS_DB_WEIGHT.reads(1))
			.saturating_add(ROCKS_DB_WEIGHT.writes(1))
	}

	fn force_transfer() -> Weight {
		Weight::from_parts(40_360_000, 6196)
			.saturating_add(ROCKS_DB_WEIGHT.reads(2))
			.saturating_add(ROCKS_DB_WEIGHT.writes(2))
	}

	fn transfer_all() -> Weight {
		Weight::from_parts(35_121_000, 3593)
			.saturating_add(ROCKS_DB_WEIGHT.reads(1))
			.saturating_add(ROCKS_DB_WEIGHT.writes(1))
	}

	fn force_unreserve() -> Weight {
		Weight::from_parts(13_764_000, 3593)
			.saturating_add(ROCKS_DB_WEIGHT.reads(1))
			.saturating_add(ROCKS_DB_WEIGHT.writes(1))
	}
}
