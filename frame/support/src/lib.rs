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

//! Shared ledger primitives: the weight and dispatch model, the storage capability, typed storage
//! cells, currency traits and the call registry.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod dispatch;
pub mod macros;
pub mod registry;
pub mod storage;
pub mod structs;
#[cfg(any(feature = "testing", test))]
pub mod testing;
pub mod traits;
pub mod weights;


// --- crates.io ---
#[doc(hidden)]
pub use codec;
#[doc(hidden)]
pub use log;
#[doc(hidden)]
pub use scale_info;
// --- paritytech ---
#[doc(hidden)]
pub use sp_runtime;
#[doc(hidden)]
pub use sp_std;

/// The balance type of the ledger.
pub type Balance = u128;

pub mod balance {
	pub mod lock {
		// --- darwinia-network ---
		pub use crate::structs::{BalanceLock, LockReasons};
		pub use crate::traits::{LockIdentifier, LockableCurrency, WithdrawReasons};
	}

	// --- darwinia-network ---
	pub use crate::structs::FrozenBalance;
	pub use crate::traits::{
		Currency, ExistenceRequirement, Imbalance, OnUnbalanced, ReservableCurrency, SameOrOther,
	};
}

pub mod pallet_prelude {
	// --- crates.io ---
	pub use codec::{Decode, Encode, MaxEncodedLen};
	pub use scale_info::TypeInfo;
	// --- paritytech ---
	pub use sp_runtime::{
		traits::{BadOrigin, ConstU32, Get, StaticLookup, Zero},
		ArithmeticError, DispatchError, DispatchResult, ModuleError, RuntimeDebug,
	};
	pub use sp_std::prelude::*;
	// --- darwinia-network ---
	pub use crate::{
		dispatch::{
			DispatchClass, DispatchErrorWithPostInfo, DispatchInfo, DispatchResultWithPostInfo,
			Dispatchable, GetCallIndex, GetCallName, GetDispatchInfo, Pays, PostDispatchInfo,
		},
		ensure, fail,
		storage::{
			with_storage_layer, with_transaction, Blake2_128Concat, Storage, StorageInstance,
			StorageMap, StorageValue,
		},
		storage_prefix,
		traits::Parameter,
		weights::{RuntimeDbWeight, Weight},
		Balance,
	};
}
