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

//! DRML types shared between the runtime and the Node-side code.

#![cfg_attr(not(feature = "std"), no_std)]

// --- paritytech ---
use sp_runtime::{AccountId32, MultiAddress};

/// An index to a block.
/// 32-bits will allow for 136 years of blocks assuming 1 block per second.
pub type BlockNumber = u32;

/// Some way of identifying an account on the chain. We intentionally make it equivalent
/// to the public key of our transaction signing scheme.
pub type AccountId = AccountId32;

/// The type for looking up accounts. We don't expect more than 4 billion of them, but you
/// never know...
pub type AccountIndex = ();

/// Balance of an account.
pub type Balance = darwinia_support::Balance;

/// Index of a transaction in the chain.
pub type Nonce = u32;

/// The address format for describing accounts.
pub type Address = MultiAddress<AccountId, AccountIndex>;

/// Unit of the native token.
pub const UNIT: Balance = 1_000_000_000;
/// One thousandth of a [`UNIT`].
pub const MILLI: Balance = UNIT / 1_000;
/// One millionth of a [`UNIT`].
pub const MICRO: Balance = MILLI / 1_000;
