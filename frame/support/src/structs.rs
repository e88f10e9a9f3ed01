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
use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
// --- paritytech ---
use sp_runtime::RuntimeDebug;
use sp_std::ops::BitOr;
// --- darwinia-network ---
use crate::{
	traits::{LockIdentifier, WithdrawReasons},
	Balance,
};

/// Frozen balance information for an account.
#[derive(Clone, Copy, Default, PartialEq, Eq, RuntimeDebug)]
pub struct FrozenBalance {
	/// The amount that `free` may not drop below when withdrawing specifically for transaction
	/// fee payment.
	pub fee: Balance,
	/// The amount that `free` may not drop below when withdrawing for *anything except transaction
	/// fee payment*.
	pub misc: Balance,
}
impl FrozenBalance {
	/// The amount that this account's free balance may not be reduced beyond for the given
	/// `reasons`.
	pub fn frozen_for(self, reasons: LockReasons) -> Balance {
		match reasons {
			LockReasons::All => self.misc.max(self.fee),
			LockReasons::Misc => self.misc,
			LockReasons::Fee => self.fee,
		}
	}
}

/// Simplified reasons for withdrawing balance.
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub enum LockReasons {
	/// Paying system transaction fees.
	Fee = 0,
	/// Any reason other than paying system transaction fees.
	Misc = 1,
	/// Any reason at all.
	All = 2,
}
impl From<WithdrawReasons> for LockReasons {
	fn from(r: WithdrawReasons) -> LockReasons {
		if r == WithdrawReasons::TRANSACTION_PAYMENT {
			LockReasons::Fee
		} else if r.contains(WithdrawReasons::TRANSACTION_PAYMENT) {
			LockReasons::All
		} else {
			LockReasons::Misc
		}
	}
}
impl BitOr for LockReasons {
	type Output = LockReasons;

	fn bitor(self, other: LockReasons) -> LockReasons {
		if self == other {
			return self;
		}

		LockReasons::All
	}
}

/// A single lock on a balance. There can be many of these on an account and they "overlap", so the
/// same balance is frozen by multiple locks.
#[derive(Clone, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub struct BalanceLock {
	/// An identifier for this lock. Only one lock may be in existence for each identifier.
	pub id: LockIdentifier,
	/// The amount which the free balance may not drop below when this lock is in effect.
	pub amount: Balance,
	/// If true, then the lock remains in effect even for payment of transaction fees.
	pub reasons: LockReasons,
}
