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

//! # Balances Module
//!
//! The Balances module provides functionality for handling accounts and balances.
//!
//! - [`Config`]
//! - [`Call`]
//! - [`Pallet`]
//!
//! ## Overview
//!
//! The Balances module provides functions for:
//!
//! - Getting and setting free balances.
//! - Retrieving total, reserved and unreserved balances.
//! - Transferring a balance between accounts (when not reserved).
//! - Slashing an account balance.
//! - Account creation and removal.
//! - Managing total issuance.
//! - Setting and managing locks.
//!
//! ### Terminology
//!
//! - **Existential Deposit:** The minimum balance required to create or keep an account open.
//!   When the free plus the reserved balance (i.e. the total balance) fall below this, then the
//!   account is said to be dead and all information on it is removed from the state. No account
//!   should ever have a total balance that is strictly between 0 and the existential deposit.
//!
//! - **Total Issuance:** The total number of units in existence in a system.
//!
//! - **Dust:** The remainder of an account which dropped below the existential deposit. It is
//!   removed together with the account and handed to [`Config::DustRemoval`].
//!
//! - **Imbalance:** A condition when some funds were credited or debited without equal and
//!   opposite accounting. Functions that result in an imbalance return a [`PositiveImbalance`] or
//!   a [`NegativeImbalance`] which must be resolved against the storage, otherwise the total
//!   issuance drifts away from the sum of all balances.
//!
//! - **Lock:** A freeze on a specified amount of an account's free balance. Multiple locks always
//!   operate over the same funds, so they "overlay" rather than "stack".
//!
//! ## Interface
//!
//! ### Dispatchable Functions
//!
//! - `transfer` - Transfer some liquid free balance to another account.
//! - `set_balance` - Set the balances of a given account. The origin of this call must be root.
//! - `force_transfer` - Same as `transfer` but from any account. The origin must be root.
//! - `transfer_keep_alive` - Same as `transfer` but the sender may not be reaped.
//! - `transfer_all` - Transfer the whole transferable balance of the sender.
//! - `force_unreserve` - Move some reserved balance back to free. The origin must be root.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
mod tests_local;

pub mod weights;
pub use weights::WeightInfo;

pub mod imbalances {
	// --- core ---
	use core::{marker::PhantomData, mem};
	// --- paritytech ---
	use sp_runtime::RuntimeDebug;
	// --- darwinia-network ---
	use crate::{Config, TotalIssuance};
	use darwinia_support::{
		balance::{Imbalance, SameOrOther},
		storage::Storage,
		Balance,
	};

	/// Opaque, move-only struct with private fields that serves as a token denoting that
	/// funds have been created without any equal and opposite accounting.
	#[must_use]
	#[derive(PartialEq, Eq, RuntimeDebug)]
	pub struct PositiveImbalance<T: Config>(Balance, PhantomData<T>);
	impl<T: Config> PositiveImbalance<T> {
		/// Create a new positive imbalance from a balance.
		pub fn new(amount: Balance) -> Self {
			PositiveImbalance(amount, PhantomData)
		}
	}
	impl<T: Config> Default for PositiveImbalance<T> {
		fn default() -> Self {
			Self::zero()
		}
	}
	impl<T: Config> Imbalance for PositiveImbalance<T> {
		type Opposite = NegativeImbalance<T>;

		fn zero() -> Self {
			Self::new(0)
		}

		fn drop_zero(self) -> Result<(), Self> {
			if self.0 == 0 {
				mem::forget(self);

				Ok(())
			} else {
				Err(self)
			}
		}

		fn split(self, amount: Balance) -> (Self, Self) {
			let first = self.0.min(amount);
			let second = self.0 - first;

			mem::forget(self);

			(Self::new(first), Self::new(second))
		}

		fn merge(mut self, other: Self) -> Self {
			self.subsume(other);

			self
		}

		fn subsume(&mut self, other: Self) {
			self.0 = self.0.saturating_add(other.0);

			mem::forget(other);
		}

		fn offset(self, other: Self::Opposite) -> SameOrOther<Self, Self::Opposite> {
			let (a, b) = (self.0, other.0);

			mem::forget((self, other));

			if a > b {
				SameOrOther::Same(Self::new(a - b))
			} else if b > a {
				SameOrOther::Other(NegativeImbalance::new(b - a))
			} else {
				SameOrOther::None
			}
		}

		fn peek(&self) -> Balance {
			self.0
		}

		fn resolve(self, ext: &mut dyn Storage) {
			let amount = self.0;

			mem::forget(self);

			TotalIssuance::mutate(ext, |v| *v = v.saturating_add(amount));
		}
	}
	impl<T: Config> Drop for PositiveImbalance<T> {
		fn drop(&mut self) {
			if self.0 != 0 {
				unresolved("positive", self.0);
			}
		}
	}

	/// Opaque, move-only struct with private fields that serves as a token denoting that
	/// funds have been destroyed without any equal and opposite accounting.
	#[must_use]
	#[derive(PartialEq, Eq, RuntimeDebug)]
	pub struct NegativeImbalance<T: Config>(Balance, PhantomData<T>);
	impl<T: Config> NegativeImbalance<T> {
		/// Create a new negative imbalance from a balance.
		pub fn new(amount: Balance) -> Self {
			NegativeImbalance(amount, PhantomData)
		}
	}
	impl<T: Config> Default for NegativeImbalance<T> {
		fn default() -> Self {
			Self::zero()
		}
	}
	impl<T: Config> Imbalance for NegativeImbalance<T> {
		type Opposite = PositiveImbalance<T>;

		fn zero() -> Self {
			Self::new(0)
		}

		fn drop_zero(self) -> Result<(), Self> {
			if self.0 == 0 {
				mem::forget(self);

				Ok(())
			} else {
				Err(self)
			}
		}

		fn split(self, amount: Balance) -> (Self, Self) {
			let first = self.0.min(amount);
			let second = self.0 - first;

			mem::forget(self);

			(Self::new(first), Self::new(second))
		}

		fn merge(mut self, other: Self) -> Self {
			self.subsume(other);

			self
		}

		fn subsume(&mut self, other: Self) {
			self.0 = self.0.saturating_add(other.0);

			mem::forget(other);
		}

		fn offset(self, other: Self::Opposite) -> SameOrOther<Self, Self::Opposite> {
			let (a, b) = (self.0, other.0);

			mem::forget((self, other));

			if a > b {
				SameOrOther::Same(Self::new(a - b))
			} else if b > a {
				SameOrOther::Other(PositiveImbalance::new(b - a))
			} else {
				SameOrOther::None
			}
		}

		fn peek(&self) -> Balance {
			self.0
		}

		fn resolve(self, ext: &mut dyn Storage) {
			let amount = self.0;

			mem::forget(self);

			TotalIssuance::mutate(ext, |v| *v = v.saturating_sub(amount));
		}
	}
	impl<T: Config> Drop for NegativeImbalance<T> {
		fn drop(&mut self) {
			if self.0 != 0 {
				unresolved("negative", self.0);
			}
		}
	}

	// The total issuance can not be touched from `Drop` since there is no storage at hand.
	fn unresolved(kind: &str, amount: Balance) {
		log::error!(
			target: "runtime::balances",
			"Logic error: a {} imbalance of {} was dropped without being resolved",
			kind,
			amount,
		);

		fail_in_debug(kind, amount);
	}

	#[cfg(feature = "std")]
	fn fail_in_debug(kind: &str, amount: Balance) {
		if cfg!(debug_assertions) && !std::thread::panicking() {
			panic!("a {} imbalance of {} was dropped without being resolved", kind, amount);
		}
	}
	#[cfg(not(feature = "std"))]
	fn fail_in_debug(_: &str, _: Balance) {}
}
pub use imbalances::{NegativeImbalance, PositiveImbalance};

// --- core ---
use core::{convert::Infallible, marker::PhantomData};
// --- crates.io ---
use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
// --- paritytech ---
use sp_runtime::{
	traits::{Get, StaticLookup, Zero},
	ArithmeticError, DispatchError, DispatchResult, ModuleError, RuntimeDebug,
};
use sp_std::{collections::btree_set::BTreeSet, prelude::*};
// --- darwinia-network ---
use darwinia_support::{
	balance::{
		lock::{BalanceLock, LockIdentifier, LockReasons, LockableCurrency, WithdrawReasons},
		Currency, ExistenceRequirement, FrozenBalance, Imbalance, OnUnbalanced,
		ReservableCurrency,
	},
	dispatch::{
		dispatch_info_of, DispatchInfo, DispatchResultWithPostInfo, Dispatchable, FatalError,
		GetCallIndex, GetCallName, GetDispatchInfo,
	},
	ensure,
	storage::{with_storage_layer, Storage, StorageMap, StorageValue},
	storage_prefix,
	traits::StoredMap,
	Balance,
};
use darwinia_system::{ensure_root, ensure_signed, Origin};

/// All balance information for an account.
#[derive(
	Clone,
	Copy,
	Default,
	PartialEq,
	Eq,
	Encode,
	Decode,
	MaxEncodedLen,
	TypeInfo,
	RuntimeDebug,
)]
pub struct AccountData {
	/// Non-reserved part of the balance. There may still be restrictions on this, but it is the
	/// total pool what may in principle be transferred, reserved and used for tipping.
	///
	/// This is the only balance that matters in terms of most operations on tokens. It
	/// alone is used to determine the balance when in the contract execution environment.
	pub free: Balance,
	/// Balance which is reserved and may not be used at all.
	///
	/// This can still get slashed, but gets slashed last of all.
	///
	/// This balance is a 'reserve' balance that other subsystems use in order to set aside tokens
	/// that are still 'owned' by the account holder, but which are suspendable.
	pub reserved: Balance,
	/// The amount that `free` may not drop below when withdrawing for *anything except transaction
	/// fee payment*.
	pub misc_frozen: Balance,
	/// The amount that `free` may not drop below when withdrawing specifically for transaction
	/// fee payment.
	pub fee_frozen: Balance,
}
impl AccountData {
	/// The total balance in this account including any that is reserved and ignoring any frozen.
	pub fn total(&self) -> Balance {
		self.free.saturating_add(self.reserved)
	}

	/// The amount that this account's free balance may not be reduced beyond for the given
	/// `reasons`.
	pub fn frozen(&self, reasons: LockReasons) -> Balance {
		FrozenBalance { fee: self.fee_frozen, misc: self.misc_frozen }.frozen_for(reasons)
	}

	/// How much this account's balance can be reduced for the given `reasons`.
	pub fn usable(&self, reasons: LockReasons) -> Balance {
		self.free.saturating_sub(self.frozen(reasons))
	}
}

pub trait Config: darwinia_system::Config {
	/// The index of this module in the runtime, reported with every module error.
	const PALLET_INDEX: u8;

	/// The means of storing the balances of an account.
	type AccountStore: StoredMap<Self::AccountId, AccountData>;

	/// Handler for the unbalanced reduction when removing a dust account.
	type DustRemoval: OnUnbalanced<NegativeImbalance<Self>>;

	/// The minimum amount required to keep an account open.
	type ExistentialDeposit: Get<Balance>;

	/// The maximum number of locks that should exist on an account.
	/// Not strictly enforced, but used for weight estimation.
	type MaxLocks: Get<u32>;

	/// The maximum number of named reserves that can exist on an account.
	type MaxReserves: Get<u32>;

	/// The overarching event type.
	type RuntimeEvent: From<Event<Self>> + Into<<Self as darwinia_system::Config>::RuntimeEvent>;

	/// Weight information for extrinsics in this module.
	type WeightInfo: WeightInfo;
}

storage_prefix!(pub TotalIssuancePrefix, "Balances", "TotalIssuance");
storage_prefix!(pub LocksPrefix, "Balances", "Locks");

/// The total units issued in the system.
pub type TotalIssuance = StorageValue<TotalIssuancePrefix, Balance>;
/// Any liquidity locks on some account balances.
///
/// NOTE: Should only be accessed when setting, changing and freeing a lock.
pub type Locks<T> =
	StorageMap<LocksPrefix, <T as darwinia_system::Config>::AccountId, Vec<BalanceLock>>;

/// Event for the Balances module.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
#[scale_info(skip_type_params(T))]
pub enum Event<T: Config> {
	/// An account was created with some free balance.
	#[codec(index = 0)]
	Endowed { account: T::AccountId, free_balance: Balance },
	/// An account was removed whose balance was non-zero but below ExistentialDeposit,
	/// resulting in an outright loss.
	#[codec(index = 1)]
	DustLost { account: T::AccountId, amount: Balance },
	/// Transfer succeeded.
	#[codec(index = 2)]
	Transfer { from: T::AccountId, to: T::AccountId, amount: Balance },
	/// A balance was set by root.
	#[codec(index = 3)]
	BalanceSet { who: T::AccountId, free: Balance, reserved: Balance },
	/// Some balance was reserved (moved from free to reserved).
	#[codec(index = 4)]
	Reserved { who: T::AccountId, amount: Balance },
	/// Some balance was unreserved (moved from reserved to free).
	#[codec(index = 5)]
	Unreserved { who: T::AccountId, amount: Balance },
	/// Some amount was deposited (e.g. for transaction fees).
	#[codec(index = 7)]
	Deposit { who: T::AccountId, amount: Balance },
	/// Some amount was withdrawn from the account (e.g. for transaction fees).
	#[codec(index = 8)]
	Withdraw { who: T::AccountId, amount: Balance },
	/// Some amount was removed from the account (e.g. for misbehavior).
	#[codec(index = 9)]
	Slashed { who: T::AccountId, amount: Balance },
}

/// Error for the Balances module.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
#[scale_info(skip_type_params(T))]
pub enum Error<T> {
	#[doc(hidden)]
	#[codec(skip)]
	__Ignore(PhantomData<T>, Infallible),
	/// Vesting balance too high to send value.
	#[codec(index = 0)]
	VestingBalance,
	/// Account liquidity restrictions prevent withdrawal.
	#[codec(index = 1)]
	LiquidityRestrictions,
	/// Balance too low to send value.
	#[codec(index = 2)]
	InsufficientBalance,
	/// Value too low to create account due to existential deposit.
	#[codec(index = 3)]
	ExistentialDeposit,
	/// Transfer/payment would kill account.
	#[codec(index = 4)]
	KeepAlive,
	/// A vesting schedule already exists for this account.
	#[codec(index = 5)]
	ExistingVestingSchedule,
	/// Beneficiary account must pre-exist.
	#[codec(index = 6)]
	DeadAccount,
	/// Number of named reserves exceed MaxReserves.
	#[codec(index = 7)]
	TooManyReserves,
}
impl<T> Error<T> {
	fn index(&self) -> u8 {
		match self {
			Error::VestingBalance => 0,
			Error::LiquidityRestrictions => 1,
			Error::InsufficientBalance => 2,
			Error::ExistentialDeposit => 3,
			Error::KeepAlive => 4,
			Error::ExistingVestingSchedule => 5,
			Error::DeadAccount => 6,
			Error::TooManyReserves => 7,
			Error::__Ignore(_, never) => match *never {},
		}
	}

	/// The name of the error variant.
	pub fn as_str(&self) -> &'static str {
		match self {
			Error::VestingBalance => "VestingBalance",
			Error::LiquidityRestrictions => "LiquidityRestrictions",
			Error::InsufficientBalance => "InsufficientBalance",
			Error::ExistentialDeposit => "ExistentialDeposit",
			Error::KeepAlive => "KeepAlive",
			Error::ExistingVestingSchedule => "ExistingVestingSchedule",
			Error::DeadAccount => "DeadAccount",
			Error::TooManyReserves => "TooManyReserves",
			Error::__Ignore(_, never) => match *never {},
		}
	}
}
impl<T: Config> From<Error<T>> for DispatchError {
	fn from(e: Error<T>) -> Self {
		DispatchError::Module(ModuleError {
			index: T::PALLET_INDEX,
			error: [e.index(), 0, 0, 0],
			message: Some(e.as_str()),
		})
	}
}

/// The way a call refers to an account.
pub type AccountIdLookupOf<T> =
	<<T as darwinia_system::Config>::Lookup as StaticLookup>::Source;

/// Contains one variant per dispatchable that can be called by an extrinsic.
#[derive(Clone, PartialEq, Encode, Decode, TypeInfo, RuntimeDebug)]
#[scale_info(skip_type_params(T))]
#[allow(non_camel_case_types)]
pub enum Call<T: Config> {
	#[doc(hidden)]
	#[codec(skip)]
	__Ignore(PhantomData<T>, Infallible),
	/// Transfer some liquid free balance to another account.
	#[codec(index = 0)]
	transfer {
		dest: AccountIdLookupOf<T>,
		#[codec(compact)]
		value: Balance,
	},
	/// Set the balances of a given account.
	#[codec(index = 1)]
	set_balance {
		who: AccountIdLookupOf<T>,
		#[codec(compact)]
		new_free: Balance,
		#[codec(compact)]
		new_reserved: Balance,
	},
	/// Exactly as `transfer`, except the origin must be root and the source account may be
	/// specified.
	#[codec(index = 2)]
	force_transfer {
		source: AccountIdLookupOf<T>,
		dest: AccountIdLookupOf<T>,
		#[codec(compact)]
		value: Balance,
	},
	/// Same as the `transfer` call, but with a check that the transfer will not kill the
	/// origin account.
	#[codec(index = 3)]
	transfer_keep_alive {
		dest: AccountIdLookupOf<T>,
		#[codec(compact)]
		value: Balance,
	},
	/// Transfer the entire transferable balance from the caller account.
	#[codec(index = 4)]
	transfer_all { dest: AccountIdLookupOf<T>, keep_alive: bool },
	/// Unreserve some balance from a user by force.
	#[codec(index = 5)]
	force_unreserve { who: AccountIdLookupOf<T>, amount: Balance },
}
impl<T: Config> Eq for Call<T> where AccountIdLookupOf<T>: Eq {}
impl<T: Config> GetDispatchInfo for Call<T> {
	fn get_dispatch_info(&self) -> DispatchInfo {
		let base_weight = match self {
			Call::transfer { .. } => T::WeightInfo::transfer(),
			// Creates a new account or kills an existing one.
			Call::set_balance { .. } => {
				T::WeightInfo::set_balance_creating().max(T::WeightInfo::set_balance_killing())
			}
			Call::force_transfer { .. } => T::WeightInfo::force_transfer(),
			Call::transfer_keep_alive { .. } => T::WeightInfo::transfer_keep_alive(),
			Call::transfer_all { .. } => T::WeightInfo::transfer_all(),
			Call::force_unreserve { .. } => T::WeightInfo::force_unreserve(),
			Call::__Ignore(_, never) => match *never {},
		};

		dispatch_info_of(base_weight, ())
	}
}
impl<T: Config> GetCallIndex for Call<T> {
	fn get_call_indices() -> &'static [u8] {
		&[0, 1, 2, 3, 4, 5]
	}

	fn get_call_index(&self) -> u8 {
		match self {
			Call::transfer { .. } => 0,
			Call::set_balance { .. } => 1,
			Call::force_transfer { .. } => 2,
			Call::transfer_keep_alive { .. } => 3,
			Call::transfer_all { .. } => 4,
			Call::force_unreserve { .. } => 5,
			Call::__Ignore(_, never) => match *never {},
		}
	}
}
impl<T: Config> GetCallName for Call<T> {
	fn get_call_names() -> &'static [&'static str] {
		&[
			"transfer",
			"set_balance",
			"force_transfer",
			"transfer_keep_alive",
			"transfer_all",
			"force_unreserve",
		]
	}

	fn get_call_name(&self) -> &'static str {
		match self {
			Call::transfer { .. } => "transfer",
			Call::set_balance { .. } => "set_balance",
			Call::force_transfer { .. } => "force_transfer",
			Call::transfer_keep_alive { .. } => "transfer_keep_alive",
			Call::transfer_all { .. } => "transfer_all",
			Call::force_unreserve { .. } => "force_unreserve",
			Call::__Ignore(_, never) => match *never {},
		}
	}
}
impl<T: Config> Dispatchable for Call<T> {
	type RuntimeOrigin = Origin<T>;

	fn dispatch(
		self,
		ext: &mut dyn Storage,
		origin: Self::RuntimeOrigin,
	) -> DispatchResultWithPostInfo {
		match self {
			Call::transfer { dest, value } => <Pallet<T>>::transfer(ext, origin, dest, value),
			Call::set_balance { who, new_free, new_reserved } => {
				<Pallet<T>>::set_balance(ext, origin, who, new_free, new_reserved)
			}
			Call::force_transfer { source, dest, value } => {
				<Pallet<T>>::force_transfer(ext, origin, source, dest, value)
			}
			Call::transfer_keep_alive { dest, value } => {
				<Pallet<T>>::transfer_keep_alive(ext, origin, dest, value)
			}
			Call::transfer_all { dest, keep_alive } => {
				<Pallet<T>>::transfer_all(ext, origin, dest, keep_alive)
			}
			Call::force_unreserve { who, amount } => {
				<Pallet<T>>::force_unreserve(ext, origin, who, amount)
			}
			Call::__Ignore(_, never) => match never {},
		}
	}
}

/// The Balances module.
pub struct Pallet<T>(PhantomData<T>);
impl<T: Config> Pallet<T> {
	/// Transfer some liquid free balance to another account.
	///
	/// If the sender's account is below the existential deposit as a result of the transfer, the
	/// account will be reaped.
	///
	/// The dispatch origin for this call must be `Signed` by the transactor.
	pub fn transfer(
		ext: &mut dyn Storage,
		origin: Origin<T>,
		dest: AccountIdLookupOf<T>,
		value: Balance,
	) -> DispatchResultWithPostInfo {
		let transactor = ensure_signed(origin)?;
		let dest = T::Lookup::lookup(dest)?;

		<Self as Currency<_>>::transfer(
			ext,
			&transactor,
			&dest,
			value,
			ExistenceRequirement::AllowDeath,
		)?;

		Ok(().into())
	}

	/// Set the balances of a given account.
	///
	/// This will alter `free` and `reserved` of the account and adjust the total issuance by the
	/// difference. If the new total balance is below the existential deposit, the account is
	/// wiped out.
	///
	/// The dispatch origin for this call is `root`.
	pub fn set_balance(
		ext: &mut dyn Storage,
		origin: Origin<T>,
		who: AccountIdLookupOf<T>,
		new_free: Balance,
		new_reserved: Balance,
	) -> DispatchResultWithPostInfo {
		ensure_root(origin)?;

		let who = T::Lookup::lookup(who)?;
		let existential_deposit = T::ExistentialDeposit::get();
		let new_total = new_free.checked_add(new_reserved).ok_or(ArithmeticError::Overflow)?;
		let wipeout = new_total < existential_deposit;
		let new_free = if wipeout { Zero::zero() } else { new_free };
		let new_reserved = if wipeout { Zero::zero() } else { new_reserved };
		let new_total = new_free.saturating_add(new_reserved);

		// The total issuance must still cover every balance afterwards.
		<Self as Currency<_>>::total_issuance(ext)
			.saturating_sub(Self::account(ext, &who).total())
			.checked_add(new_total)
			.ok_or(ArithmeticError::Overflow)?;
		let (old_free, old_reserved) = Self::mutate_account(ext, &who, |account| {
			let old = (account.free, account.reserved);

			account.free = new_free;
			account.reserved = new_reserved;

			old
		})?;

		Self::resolve_delta(ext, old_free, new_free);
		Self::resolve_delta(ext, old_reserved, new_reserved);
		Self::deposit_event(
			ext,
			Event::BalanceSet { who, free: new_free, reserved: new_reserved },
		);

		Ok(().into())
	}

	/// Exactly as `transfer`, except the origin must be root and the source account may be
	/// specified.
	pub fn force_transfer(
		ext: &mut dyn Storage,
		origin: Origin<T>,
		source: AccountIdLookupOf<T>,
		dest: AccountIdLookupOf<T>,
		value: Balance,
	) -> DispatchResultWithPostInfo {
		ensure_root(origin)?;

		let source = T::Lookup::lookup(source)?;
		let dest = T::Lookup::lookup(dest)?;

		<Self as Currency<_>>::transfer(
			ext,
			&source,
			&dest,
			value,
			ExistenceRequirement::AllowDeath,
		)?;

		Ok(().into())
	}

	/// Same as the [`transfer`] call, but with a check that the transfer will not kill the
	/// origin account.
	///
	/// 99% of the time you want [`transfer`] instead.
	///
	/// [`transfer`]: struct.Pallet.html#method.transfer
	pub fn transfer_keep_alive(
		ext: &mut dyn Storage,
		origin: Origin<T>,
		dest: AccountIdLookupOf<T>,
		value: Balance,
	) -> DispatchResultWithPostInfo {
		let transactor = ensure_signed(origin)?;
		let dest = T::Lookup::lookup(dest)?;

		<Self as Currency<_>>::transfer(
			ext,
			&transactor,
			&dest,
			value,
			ExistenceRequirement::KeepAlive,
		)?;

		Ok(().into())
	}

	/// Transfer the entire transferable balance from the caller account.
	///
	/// NOTE: This function only attempts to transfer _transferable_ balances. This means that
	/// any locked, reserved, or existential deposits (when `keep_alive` is `true`), will not be
	/// transferred by this function.
	///
	/// - `dest`: The recipient of the transfer.
	/// - `keep_alive`: A boolean to determine if the `transfer_all` operation should send all of
	///   the funds the account has, causing the sender account to be killed (false), or transfer
	///   everything except at least the existential deposit (true).
	pub fn transfer_all(
		ext: &mut dyn Storage,
		origin: Origin<T>,
		dest: AccountIdLookupOf<T>,
		keep_alive: bool,
	) -> DispatchResultWithPostInfo {
		let transactor = ensure_signed(origin)?;
		let reducible_balance = Self::reducible_balance(ext, &transactor, keep_alive);
		let dest = T::Lookup::lookup(dest)?;
		let keep_alive = if keep_alive {
			ExistenceRequirement::KeepAlive
		} else {
			ExistenceRequirement::AllowDeath
		};

		<Self as Currency<_>>::transfer(ext, &transactor, &dest, reducible_balance, keep_alive)?;

		Ok(().into())
	}

	/// Unreserve some balance from a user by force.
	///
	/// Can only be called by ROOT.
	pub fn force_unreserve(
		ext: &mut dyn Storage,
		origin: Origin<T>,
		who: AccountIdLookupOf<T>,
		amount: Balance,
	) -> DispatchResultWithPostInfo {
		ensure_root(origin)?;

		let who = T::Lookup::lookup(who)?;
		let _leftover = <Self as ReservableCurrency<_>>::unreserve(ext, &who, amount);

		Ok(().into())
	}
}
impl<T: Config> Pallet<T> {
	/// Get both the free and reserved balances of an account.
	pub fn account(ext: &dyn Storage, who: &T::AccountId) -> AccountData {
		T::AccountStore::get(ext, who)
	}

	/// Any liquidity locks on the balance of `who`.
	pub fn locks(ext: &dyn Storage, who: &T::AccountId) -> Vec<BalanceLock> {
		<Locks<T>>::get(ext, who)
	}

	/// Get the maximum amount that `who` can withdraw/transfer successfully.
	///
	/// With `keep_alive` the existential deposit is always left behind.
	pub fn reducible_balance(ext: &dyn Storage, who: &T::AccountId, keep_alive: bool) -> Balance {
		let a = Self::account(ext, who);
		// Liquid balance is what is neither reserved nor locked/frozen.
		let liquid = a.free.saturating_sub(a.fee_frozen.max(a.misc_frozen));

		if <darwinia_system::Pallet<T>>::can_dec_provider(ext, who) && !keep_alive {
			liquid
		} else {
			// `must_remain_to_exist` is the part of liquid balance which must remain to keep total
			// over ED.
			let must_remain_to_exist =
				T::ExistentialDeposit::get().saturating_sub(a.total().saturating_sub(liquid));

			liquid.saturating_sub(must_remain_to_exist)
		}
	}

	/// Deposit one of this module's events.
	pub fn deposit_event(ext: &mut dyn Storage, event: Event<T>) {
		<darwinia_system::Pallet<T>>::deposit_event(ext, <T as Config>::RuntimeEvent::from(event));
	}

	fn resolve_delta(ext: &mut dyn Storage, old: Balance, new: Balance) {
		if new > old {
			<PositiveImbalance<T>>::new(new - old).resolve(ext);
		} else if new < old {
			<NegativeImbalance<T>>::new(old - new).resolve(ext);
		}
	}

	/// Handles any steps needed after mutating an account.
	///
	/// Returns the account to store, `None` if it has to go, and the dust left behind by an
	/// account that went below the existential deposit.
	fn post_mutation(new: AccountData) -> (Option<AccountData>, Option<Balance>) {
		let total = new.total();

		if total < T::ExistentialDeposit::get() {
			if total.is_zero() {
				(None, None)
			} else {
				(None, Some(total))
			}
		} else {
			(Some(new), None)
		}
	}

	/// Mutate an account to some new value, or delete it entirely with `None`. Will enforce
	/// `ExistentialDeposit` law, annulling the account as needed.
	///
	/// NOTE: LOW-LEVEL: This will not attempt to maintain total issuance. It is expected that
	/// the caller will do this.
	pub fn mutate_account<R>(
		ext: &mut dyn Storage,
		who: &T::AccountId,
		f: impl FnOnce(&mut AccountData) -> R,
	) -> Result<R, DispatchError> {
		Self::try_mutate_account(ext, who, |_, a, _| -> Result<R, DispatchError> { Ok(f(a)) })
	}

	/// Mutate an account to some new value, or delete it entirely with `None`. Will enforce
	/// `ExistentialDeposit` law, annulling the account as needed. This will do nothing if the
	/// result of `f` is an `Err`.
	///
	/// The dust of a reaped account is resolved right away.
	///
	/// NOTE: LOW-LEVEL: This will not attempt to maintain total issuance. It is expected that
	/// the caller will do this.
	pub fn try_mutate_account<R, E>(
		ext: &mut dyn Storage,
		who: &T::AccountId,
		f: impl FnOnce(&mut dyn Storage, &mut AccountData, bool) -> Result<R, E>,
	) -> Result<R, E>
	where
		E: From<DispatchError>,
	{
		let (result, dust_cleaner) = Self::try_mutate_account_with_dust(ext, who, f)?;

		dust_cleaner.resolve(ext);

		Ok(result)
	}

	/// Mutate an account to some new value, or delete it entirely with `None`. Will enforce
	/// `ExistentialDeposit` law, annulling the account as needed. This will do nothing if the
	/// result of `f` is an `Err`.
	///
	/// It returns both the result from the closure, and a `DustCleaner` which must be resolved
	/// once all nested mutations that could touch the items of the dust handler have completed.
	///
	/// `f` receives the account and whether it is new.
	///
	/// NOTE: LOW-LEVEL: This will not attempt to maintain total issuance. It is expected that
	/// the caller will do this.
	pub fn try_mutate_account_with_dust<R, E>(
		ext: &mut dyn Storage,
		who: &T::AccountId,
		f: impl FnOnce(&mut dyn Storage, &mut AccountData, bool) -> Result<R, E>,
	) -> Result<(R, DustCleaner<T>), E>
	where
		E: From<DispatchError>,
	{
		let (maybe_endowed, maybe_dust, result) =
			T::AccountStore::try_mutate_exists(ext, who, |ext, maybe_account| {
				let is_new = maybe_account.is_none();
				let mut account = maybe_account.take().unwrap_or_default();

				f(ext, &mut account, is_new).map(move |result| {
					let (maybe_account_after, maybe_dust) = Self::post_mutation(account);
					let maybe_endowed =
						if is_new { maybe_account_after.map(|a| a.free) } else { None };

					*maybe_account = maybe_account_after;

					(maybe_endowed, maybe_dust, result)
				})
			})?;

		if let Some(free_balance) = maybe_endowed {
			Self::deposit_event(ext, Event::Endowed { account: who.clone(), free_balance });
		}

		Ok((result, DustCleaner(maybe_dust.map(|dust| (who.clone(), dust)))))
	}

	/// Update the account entry for `who`, given the locks.
	fn update_locks(ext: &mut dyn Storage, who: &T::AccountId, locks: &[BalanceLock]) {
		if locks.len() as u32 > T::MaxLocks::get() {
			log::warn!(
				target: "runtime::balances",
				"Warning: A user has more currency locks than expected. \
				A runtime configuration adjustment may be needed."
			);
		}

		// No way this can fail since we do not alter the existential balances.
		if let Err(e) = Self::mutate_account(ext, who, |b| {
			b.misc_frozen = Zero::zero();
			b.fee_frozen = Zero::zero();

			for l in locks.iter() {
				if l.reasons == LockReasons::All || l.reasons == LockReasons::Misc {
					b.misc_frozen = b.misc_frozen.max(l.amount);
				}
				if l.reasons == LockReasons::All || l.reasons == LockReasons::Fee {
					b.fee_frozen = b.fee_frozen.max(l.amount);
				}
			}
		}) {
			log::error!(target: "runtime::balances", "Logic error: Unexpected {:?}", e);
		}

		let existed = <Locks<T>>::contains_key(ext, who);

		if locks.is_empty() {
			<Locks<T>>::remove(ext, who);

			if existed {
				<darwinia_system::Pallet<T>>::dec_consumers(ext, who);
			}
		} else {
			<Locks<T>>::insert(ext, who, &locks.to_vec());

			if !existed && <darwinia_system::Pallet<T>>::inc_consumers(ext, who).is_err() {
				// No providers for the locks. This is impossible under normal circumstances
				// since the funds that are under the lock will themselves be stored in the
				// account and therefore will need a reference.
				log::warn!(
					target: "runtime::balances",
					"Warning: Attempt to introduce lock consumer reference, yet no providers. \
					This is unexpected but should be safe."
				);
			}
		}
	}
}

impl<T: Config> Currency<T::AccountId> for Pallet<T> {
	type NegativeImbalance = NegativeImbalance<T>;
	type PositiveImbalance = PositiveImbalance<T>;

	fn total_balance(ext: &dyn Storage, who: &T::AccountId) -> Balance {
		Self::account(ext, who).total()
	}

	fn total_issuance(ext: &dyn Storage) -> Balance {
		TotalIssuance::get(ext)
	}

	fn minimum_balance() -> Balance {
		T::ExistentialDeposit::get()
	}

	fn free_balance(ext: &dyn Storage, who: &T::AccountId) -> Balance {
		Self::account(ext, who).free
	}

	// Ensure that an account can withdraw from their free balance given any existing withdrawal
	// restrictions like locks and vesting balance.
	// Is a no-op if amount to be withdrawn is zero.
	fn ensure_can_withdraw(
		ext: &dyn Storage,
		who: &T::AccountId,
		amount: Balance,
		reasons: WithdrawReasons,
		new_balance: Balance,
	) -> DispatchResult {
		if amount.is_zero() {
			return Ok(());
		}

		let min_balance = Self::account(ext, who).frozen(reasons.into());

		ensure!(new_balance >= min_balance, <Error<T>>::LiquidityRestrictions);

		Ok(())
	}

	// Transfer some free balance from `transactor` to `dest`, respecting existence requirements.
	// Is a no-op if value to be transferred is zero or the `transactor` is the same as `dest`.
	fn transfer(
		ext: &mut dyn Storage,
		transactor: &T::AccountId,
		dest: &T::AccountId,
		value: Balance,
		existence_requirement: ExistenceRequirement,
	) -> DispatchResult {
		if value.is_zero() || transactor == dest {
			return Ok(());
		}

		let (from_dust, to_dust) = with_storage_layer(ext, |ext| {
			Self::try_mutate_account_with_dust(
				ext,
				dest,
				|ext, to_account, _| -> Result<DustCleaner<T>, DispatchError> {
					Self::try_mutate_account_with_dust(
						ext,
						transactor,
						|ext, from_account, _| -> DispatchResult {
							from_account.free = from_account
								.free
								.checked_sub(value)
								.ok_or(<Error<T>>::InsufficientBalance)?;
							to_account.free = to_account
								.free
								.checked_add(value)
								.ok_or(ArithmeticError::Overflow)?;

							let ed = T::ExistentialDeposit::get();

							ensure!(to_account.total() >= ed, <Error<T>>::ExistentialDeposit);

							Self::ensure_can_withdraw(
								ext,
								transactor,
								value,
								WithdrawReasons::all(),
								from_account.free,
							)?;

							let allow_death =
								existence_requirement == ExistenceRequirement::AllowDeath
									&& <darwinia_system::Pallet<T>>::can_dec_provider(
										ext, transactor,
									);

							ensure!(
								allow_death || from_account.total() > ed,
								<Error<T>>::KeepAlive
							);

							Ok(())
						},
					)
					.map(|((), from_dust)| from_dust)
				},
			)
		})?;

		from_dust.resolve(ext);
		to_dust.resolve(ext);

		Self::deposit_event(
			ext,
			Event::Transfer { from: transactor.clone(), to: dest.clone(), amount: value },
		);

		Ok(())
	}

	/// Slash a target account `who`, returning the negative imbalance created and any left over
	/// amount that could not be slashed.
	///
	/// Is a no-op if `value` to be slashed is zero or the account does not exist.
	///
	/// NOTE: `slash()` prefers free balance, but assumes that reserve balance can be drawn
	/// from in extreme circumstances.
	fn slash(
		ext: &mut dyn Storage,
		who: &T::AccountId,
		value: Balance,
	) -> (Self::NegativeImbalance, Balance) {
		if value.is_zero() {
			return (NegativeImbalance::zero(), Zero::zero());
		}
		if Self::total_balance(ext, who).is_zero() {
			return (NegativeImbalance::zero(), value);
		}

		for attempt in 0..2 {
			if let Ok((slashed, remaining)) = Self::try_mutate_account(
				ext,
				who,
				|_, account, _| -> Result<(Balance, Balance), DispatchError> {
					// Best value is the most amount we can slash following liveness rules.
					let best_value = match attempt {
						// First attempt we try to slash the full amount, and see if liveness
						// issues happen.
						0 => value,
						// If acting as a critical provider (i.e. first attempt failed), then slash
						// as much as possible while leaving at least at ED.
						_ => value
							.min(account.total().saturating_sub(T::ExistentialDeposit::get())),
					};
					let free_slash = account.free.min(best_value);

					account.free -= free_slash;

					let reserved_slash = account.reserved.min(best_value - free_slash);

					account.reserved -= reserved_slash;

					let slashed = free_slash + reserved_slash;

					Ok((slashed, value - slashed))
				},
			) {
				Self::deposit_event(ext, Event::Slashed { who: who.clone(), amount: slashed });

				return (NegativeImbalance::new(slashed), remaining);
			}
		}

		// Should never get here. But we'll be defensive anyway.
		(NegativeImbalance::zero(), value)
	}

	/// Deposit some `value` into the free balance of an existing target account `who`.
	///
	/// Is a no-op if the `value` to be deposited is zero.
	fn deposit_into_existing(
		ext: &mut dyn Storage,
		who: &T::AccountId,
		value: Balance,
	) -> Result<Self::PositiveImbalance, DispatchError> {
		if value.is_zero() {
			return Ok(PositiveImbalance::zero());
		}

		Self::try_mutate_account(ext, who, |_, account, is_new| -> DispatchResult {
			ensure!(!is_new, <Error<T>>::DeadAccount);

			account.free = account.free.checked_add(value).ok_or(ArithmeticError::Overflow)?;

			Ok(())
		})?;

		Self::deposit_event(ext, Event::Deposit { who: who.clone(), amount: value });

		Ok(PositiveImbalance::new(value))
	}

	/// Deposit some `value` into the free balance of `who`, possibly creating a new account.
	///
	/// This function is a no-op if:
	/// - the `value` to be deposited is zero; or
	/// - the `value` to be deposited is less than the required ED and the account does not yet
	///   exist; or
	/// - `value` is so large it would cause the balance of `who` to overflow.
	fn deposit_creating(
		ext: &mut dyn Storage,
		who: &T::AccountId,
		value: Balance,
	) -> Self::PositiveImbalance {
		if value.is_zero() {
			return PositiveImbalance::zero();
		}

		let deposited = Self::try_mutate_account(ext, who, |_, account, is_new| -> DispatchResult {
			ensure!(
				value >= T::ExistentialDeposit::get() || !is_new,
				<Error<T>>::ExistentialDeposit
			);

			account.free = account.free.checked_add(value).ok_or(ArithmeticError::Overflow)?;

			Ok(())
		});

		if deposited.is_err() {
			return PositiveImbalance::zero();
		}

		Self::deposit_event(ext, Event::Deposit { who: who.clone(), amount: value });

		PositiveImbalance::new(value)
	}

	/// Withdraw some free balance from an account, respecting existence requirements.
	///
	/// Is a no-op if value to be withdrawn is zero.
	fn withdraw(
		ext: &mut dyn Storage,
		who: &T::AccountId,
		value: Balance,
		reasons: WithdrawReasons,
		liveness: ExistenceRequirement,
	) -> Result<Self::NegativeImbalance, DispatchError> {
		if value.is_zero() {
			return Ok(NegativeImbalance::zero());
		}

		Self::try_mutate_account(ext, who, |ext, account, _| -> DispatchResult {
			let new_free_account =
				account.free.checked_sub(value).ok_or(<Error<T>>::InsufficientBalance)?;
			// bail if we need to keep the account alive and this would kill it.
			let ed = T::ExistentialDeposit::get();
			let would_be_dead = new_free_account.saturating_add(account.reserved) < ed;
			let would_kill = would_be_dead && account.total() >= ed;

			ensure!(
				liveness == ExistenceRequirement::AllowDeath || !would_kill,
				<Error<T>>::KeepAlive
			);

			Self::ensure_can_withdraw(ext, who, value, reasons, new_free_account)?;

			account.free = new_free_account;

			Ok(())
		})?;

		Self::deposit_event(ext, Event::Withdraw { who: who.clone(), amount: value });

		Ok(NegativeImbalance::new(value))
	}
}

impl<T: Config> ReservableCurrency<T::AccountId> for Pallet<T> {
	/// Check if `who` can reserve `value` from their free balance.
	///
	/// Always `true` if value to be reserved is zero.
	fn can_reserve(ext: &dyn Storage, who: &T::AccountId, value: Balance) -> bool {
		if value.is_zero() {
			return true;
		}

		Self::account(ext, who).free.checked_sub(value).map_or(false, |new_balance| {
			Self::ensure_can_withdraw(ext, who, value, WithdrawReasons::RESERVE, new_balance)
				.is_ok()
		})
	}

	fn reserved_balance(ext: &dyn Storage, who: &T::AccountId) -> Balance {
		Self::account(ext, who).reserved
	}

	/// Move `value` from the free balance from `who` to their reserved balance.
	///
	/// Is a no-op if value to be reserved is zero.
	fn reserve(ext: &mut dyn Storage, who: &T::AccountId, value: Balance) -> DispatchResult {
		if value.is_zero() {
			return Ok(());
		}

		Self::try_mutate_account(ext, who, |ext, account, _| -> DispatchResult {
			account.free =
				account.free.checked_sub(value).ok_or(<Error<T>>::InsufficientBalance)?;
			account.reserved =
				account.reserved.checked_add(value).ok_or(ArithmeticError::Overflow)?;

			Self::ensure_can_withdraw(ext, who, value, WithdrawReasons::RESERVE, account.free)
		})?;

		Self::deposit_event(ext, Event::Reserved { who: who.clone(), amount: value });

		Ok(())
	}

	/// Unreserve some funds, returning any amount that was unable to be unreserved.
	///
	/// Is a no-op if the value to be unreserved is zero or the account does not exist.
	fn unreserve(ext: &mut dyn Storage, who: &T::AccountId, value: Balance) -> Balance {
		if value.is_zero() {
			return Zero::zero();
		}
		if Self::total_balance(ext, who).is_zero() {
			return value;
		}

		let actual = match Self::mutate_account(ext, who, |account| {
			let actual = account.reserved.min(value);

			account.reserved -= actual;
			// defensive only: this can never fail since total issuance which is at least
			// free+reserved fits into the same data type.
			account.free = account.free.saturating_add(actual);

			actual
		}) {
			Ok(x) => x,
			Err(_) => {
				// This should never happen since we don't alter the total amount in the account.
				// If it ever does, then we should fail gracefully though, indicating that nothing
				// could be done.
				return value;
			}
		};

		Self::deposit_event(ext, Event::Unreserved { who: who.clone(), amount: actual });

		value - actual
	}
}

impl<T: Config> LockableCurrency<T::AccountId> for Pallet<T> {
	type MaxLocks = T::MaxLocks;

	// Set a lock on the balance of `who`.
	// Is a no-op if lock amount is zero or `reasons` `is_none()`.
	fn set_lock(
		ext: &mut dyn Storage,
		id: LockIdentifier,
		who: &T::AccountId,
		amount: Balance,
		reasons: WithdrawReasons,
	) {
		if amount.is_zero() || reasons.is_empty() {
			return;
		}

		let mut new_lock = Some(BalanceLock { id, amount, reasons: reasons.into() });
		let mut locks = Self::locks(ext, who)
			.into_iter()
			.filter_map(|l| if l.id == id { new_lock.take() } else { Some(l) })
			.collect::<Vec<_>>();

		if let Some(lock) = new_lock {
			locks.push(lock)
		}

		Self::update_locks(ext, who, &locks);
	}

	// Extend a lock on the balance of `who`.
	// Is a no-op if lock amount is zero or `reasons` `is_none()`.
	fn extend_lock(
		ext: &mut dyn Storage,
		id: LockIdentifier,
		who: &T::AccountId,
		amount: Balance,
		reasons: WithdrawReasons,
	) {
		if amount.is_zero() || reasons.is_empty() {
			return;
		}

		let mut new_lock = Some(BalanceLock { id, amount, reasons: reasons.into() });
		let mut locks = Self::locks(ext, who)
			.into_iter()
			.filter_map(|l| {
				if l.id == id {
					new_lock.take().map(|nl| BalanceLock {
						id: l.id,
						amount: l.amount.max(nl.amount),
						reasons: l.reasons | nl.reasons,
					})
				} else {
					Some(l)
				}
			})
			.collect::<Vec<_>>();

		if let Some(lock) = new_lock {
			locks.push(lock)
		}

		Self::update_locks(ext, who, &locks);
	}

	fn remove_lock(ext: &mut dyn Storage, id: LockIdentifier, who: &T::AccountId) {
		let mut locks = Self::locks(ext, who);

		locks.retain(|l| l.id != id);

		Self::update_locks(ext, who, &locks);
	}

	fn usable_balance(ext: &dyn Storage, who: &T::AccountId) -> Balance {
		Self::account(ext, who).usable(LockReasons::Misc)
	}

	fn usable_balance_for_fees(ext: &dyn Storage, who: &T::AccountId) -> Balance {
		Self::account(ext, who).usable(LockReasons::Fee)
	}
}

/// The dust of a reaped account, waiting to be handed to [`Config::DustRemoval`].
#[must_use]
pub struct DustCleaner<T: Config>(Option<(T::AccountId, Balance)>);
impl<T: Config> DustCleaner<T> {
	/// Report the loss and hand the dust to the dust handler.
	pub fn resolve(self, ext: &mut dyn Storage) {
		if let Some((who, dust)) = self.0 {
			<Pallet<T>>::deposit_event(ext, Event::DustLost { account: who, amount: dust });

			T::DustRemoval::on_unbalanced(ext, NegativeImbalance::new(dust));
		}
	}
}

pub struct GenesisConfig<T: Config> {
	pub balances: Vec<(T::AccountId, Balance)>,
}
impl<T: Config> Default for GenesisConfig<T> {
	fn default() -> Self {
		Self { balances: Default::default() }
	}
}
impl<T: Config> GenesisConfig<T> {
	pub fn build(&self, ext: &mut dyn Storage) -> Result<(), FatalError> {
		let existential_deposit = T::ExistentialDeposit::get();

		if self.balances.iter().any(|(_, balance)| *balance < existential_deposit) {
			return Err(FatalError::InvalidGenesis(
				"the balance of any account should always be at least the existential deposit.",
			));
		}

		// ensure no duplicates exist.
		let endowed_accounts =
			self.balances.iter().map(|(x, _)| x).cloned().collect::<BTreeSet<_>>();

		if endowed_accounts.len() != self.balances.len() {
			return Err(FatalError::InvalidGenesis("duplicate balances in genesis."));
		}

		let total = self
			.balances
			.iter()
			.try_fold(Balance::zero(), |acc, (_, n)| acc.checked_add(*n))
			.ok_or(FatalError::InvalidGenesis("total issuance overflows in genesis."))?;

		TotalIssuance::put(ext, &total);

		for (who, free) in self.balances.iter() {
			let mut account_data = T::AccountStore::get(ext, who);

			account_data.free = *free;

			T::AccountStore::insert(ext, who, account_data)
				.map_err(|_| FatalError::InvalidGenesis("unable to store a genesis account."))?;
		}

		Ok(())
	}
}
