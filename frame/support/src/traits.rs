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
use core::fmt::Debug;
// --- crates.io ---
use codec::{Codec, Decode, Encode, EncodeLike, MaxEncodedLen};
use impl_trait_for_tuples::impl_for_tuples;
use scale_info::TypeInfo;
// --- paritytech ---
use sp_runtime::{traits::Get, DispatchError, DispatchResult, RuntimeDebug};
// --- darwinia-network ---
use crate::{storage::Storage, Balance};

/// A type that can be used as a parameter in a dispatchable function.
pub trait Parameter: Codec + EncodeLike + Clone + Eq + Debug + TypeInfo {}
impl<T> Parameter for T where T: Codec + EncodeLike + Clone + Eq + Debug + TypeInfo {}

/// An identifier for a lock. Used for disambiguating different locks so that
/// they can be individually replaced or removed.
pub type LockIdentifier = [u8; 8];

bitflags::bitflags! {
	/// Reasons for moving funds out of an account.
	#[derive(Encode, Decode, MaxEncodedLen)]
	pub struct WithdrawReasons: u8 {
		/// In order to pay for (system) transaction costs.
		const TRANSACTION_PAYMENT = 0b00000001;
		/// In order to transfer ownership.
		const TRANSFER = 0b00000010;
		/// In order to reserve some funds for a later return or repatriation.
		const RESERVE = 0b00000100;
		/// In order to pay some other (higher-level) fees.
		const FEE = 0b00001000;
		/// In order to tip a validator for transaction inclusion.
		const TIP = 0b00010000;
	}
}
impl WithdrawReasons {
	/// Every reason except `one`.
	pub fn except(one: WithdrawReasons) -> WithdrawReasons {
		let mut flags = Self::all();

		flags.toggle(one);

		flags
	}
}

/// Whether an account may be killed by an operation.
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
pub enum ExistenceRequirement {
	/// Operation must not result in the account going out of existence.
	///
	/// Note this implies that if the account never existed in the first place, then the operation
	/// may legitimately leave the account unchanged and still non-existent.
	KeepAlive,
	/// Operation may result in account going out of existence.
	AllowDeath,
}

/// Either a positive or a negative imbalance of the same size, or nothing.
pub enum SameOrOther<A, B> {
	None,
	Same(A),
	Other(B),
}
impl<A, B> SameOrOther<A, B> {
	pub fn try_same(self) -> Result<A, Self> {
		match self {
			SameOrOther::Same(a) => Ok(a),
			x => Err(x),
		}
	}
}

/// A balance delta that has not been reflected in the total issuance yet.
///
/// An imbalance must be consumed exactly once, either by combining it with other imbalances or
/// by [`Imbalance::resolve`]. Forgetting to do so breaks the total issuance.
#[must_use]
pub trait Imbalance: Sized {
	/// The oppositely imbalanced type. They come in pairs.
	type Opposite: Imbalance;

	/// The zero imbalance. Can be destroyed with `drop_zero`.
	fn zero() -> Self;

	/// Drop an instance cleanly. Only works if its `self.value()` is zero.
	fn drop_zero(self) -> Result<(), Self>;

	/// Consume `self` and return two independent instances; the first is guaranteed to be at most
	/// `amount` and the second will be the remainder.
	fn split(self, amount: Balance) -> (Self, Self);

	/// Consume `self` and an `other` to return a new instance that combines both.
	fn merge(self, other: Self) -> Self;

	/// Consume `other` to mutate `self` into a new instance that combines both.
	fn subsume(&mut self, other: Self);

	/// Consume self and along with an opposite counterpart to return a combined result.
	fn offset(self, other: Self::Opposite) -> SameOrOther<Self, Self::Opposite>;

	/// The raw value of self.
	fn peek(&self) -> Balance;

	/// Apply the delta to the total issuance.
	fn resolve(self, ext: &mut dyn Storage);

	/// Consume `self` and return the part above zero, if any.
	fn try_drop(self) -> Result<(), Self> {
		self.drop_zero()
	}
}

/// Handler for when some currency "account" decreased in balance for some reason.
///
/// The default implementation burns the imbalance against the total issuance.
pub trait OnUnbalanced<I>
where
	I: Imbalance,
{
	/// Handler for some imbalances. The different imbalances might have different origins or
	/// meanings, dependent on the context. Will default to simply calling on_unbalanced for all
	/// of them. Infallible.
	fn on_unbalanceds(ext: &mut dyn Storage, amounts: impl Iterator<Item = I>) {
		let mut sum = I::zero();

		amounts.for_each(|i| sum.subsume(i));

		Self::on_unbalanced(ext, sum);
	}

	/// Handler for some imbalance. Infallible.
	fn on_unbalanced(ext: &mut dyn Storage, amount: I) {
		if let Err(amount) = amount.drop_zero() {
			Self::on_nonzero_unbalanced(ext, amount);
		}
	}

	/// Actually handle a non-zero imbalance. You probably want to implement this rather than
	/// `on_unbalanced`.
	fn on_nonzero_unbalanced(ext: &mut dyn Storage, amount: I) {
		amount.resolve(ext);
	}
}
impl<I> OnUnbalanced<I> for ()
where
	I: Imbalance,
{
}

/// Abstraction over a fungible assets system.
pub trait Currency<AccountId> {
	/// The opaque token type for an imbalance. This is returned by unbalanced operations
	/// and must be dealt with. It may be dropped but cannot be cloned.
	type PositiveImbalance: Imbalance<Opposite = Self::NegativeImbalance>;

	/// The opaque token type for an imbalance. This is returned by unbalanced operations
	/// and must be dealt with. It may be dropped but cannot be cloned.
	type NegativeImbalance: Imbalance<Opposite = Self::PositiveImbalance>;

	/// The combined balance of `who`.
	fn total_balance(ext: &dyn Storage, who: &AccountId) -> Balance;

	/// The total amount of issuance in the system.
	fn total_issuance(ext: &dyn Storage) -> Balance;

	/// The minimum balance any single account may have.
	fn minimum_balance() -> Balance;

	/// The 'free' balance of a given account.
	fn free_balance(ext: &dyn Storage, who: &AccountId) -> Balance;

	/// Returns `Ok` iff the account is able to make a withdrawal of the given amount
	/// for the given reason. Basically, it's just a dry-run of `withdraw`.
	///
	/// `Err(...)` with the reason why not otherwise.
	fn ensure_can_withdraw(
		ext: &dyn Storage,
		who: &AccountId,
		amount: Balance,
		reasons: WithdrawReasons,
		new_balance: Balance,
	) -> DispatchResult;

	/// Transfer some liquid free balance to another staker.
	///
	/// This is a very high-level function. It will ensure all appropriate fees are paid
	/// and no imbalance in the system remains.
	fn transfer(
		ext: &mut dyn Storage,
		source: &AccountId,
		dest: &AccountId,
		value: Balance,
		existence_requirement: ExistenceRequirement,
	) -> DispatchResult;

	/// Deducts up to `value` from the combined balance of `who`, preferring to deduct from the
	/// free balance. This function cannot fail.
	///
	/// The resulting imbalance is the first item of the tuple returned.
	///
	/// As much funds up to `value` will be deducted as possible. If this is less than `value`,
	/// then a non-zero second item will be returned.
	fn slash(
		ext: &mut dyn Storage,
		who: &AccountId,
		value: Balance,
	) -> (Self::NegativeImbalance, Balance);

	/// Mints `value` to the free balance of `who`.
	///
	/// If `who` doesn't exist, nothing is done and an Err returned.
	fn deposit_into_existing(
		ext: &mut dyn Storage,
		who: &AccountId,
		value: Balance,
	) -> Result<Self::PositiveImbalance, DispatchError>;

	/// Adds up to `value` to the free balance of `who`. If `who` doesn't exist, it is created.
	///
	/// Infallible.
	fn deposit_creating(
		ext: &mut dyn Storage,
		who: &AccountId,
		value: Balance,
	) -> Self::PositiveImbalance;

	/// Removes some free balance from `who` account for `reason` if possible. If `liveness` is
	/// `KeepAlive`, then no less than `ExistentialDeposit` must be left remaining.
	///
	/// This checks any locks, vesting, and liquidity requirements. If the removal is not possible,
	/// then it returns `Err`.
	///
	/// If the operation is successful, this will return `Ok` with a `NegativeImbalance` whose value
	/// is `value`.
	fn withdraw(
		ext: &mut dyn Storage,
		who: &AccountId,
		value: Balance,
		reasons: WithdrawReasons,
		liveness: ExistenceRequirement,
	) -> Result<Self::NegativeImbalance, DispatchError>;
}

/// A currency where funds can be reserved from the user.
pub trait ReservableCurrency<AccountId>: Currency<AccountId> {
	/// Same result as `reserve(who, value)` (but without the side-effects) assuming there
	/// are no balance changes in the meantime.
	fn can_reserve(ext: &dyn Storage, who: &AccountId, value: Balance) -> bool;

	/// The amount of the balance of a given account that is externally reserved; this can still
	/// get slashed, but gets slashed last of all.
	fn reserved_balance(ext: &dyn Storage, who: &AccountId) -> Balance;

	/// Moves `value` from balance to reserved balance.
	///
	/// If the free balance is lower than `value`, then no funds will be moved and an `Err` will
	/// be returned to notify of this. This is different behavior than `unreserve`.
	fn reserve(ext: &mut dyn Storage, who: &AccountId, value: Balance) -> DispatchResult;

	/// Moves up to `value` from reserved balance to free balance. This function cannot fail.
	///
	/// As much funds up to `value` will be moved as possible. If the reserve balance of `who`
	/// is less than `value`, then the remaining amount will be returned.
	fn unreserve(ext: &mut dyn Storage, who: &AccountId, value: Balance) -> Balance;
}

/// A currency whose accounts can have liquidity restrictions.
pub trait LockableCurrency<AccountId>: Currency<AccountId> {
	/// The maximum number of locks a user should have on their account.
	type MaxLocks: Get<u32>;

	/// Create a new balance lock on account `who`.
	///
	/// If the new lock is valid (i.e. not already expired), it will push the struct to
	/// the `Locks` vec in storage. Note that you can lock more funds than a user has.
	///
	/// If the lock `id` already exists, this will update it.
	fn set_lock(
		ext: &mut dyn Storage,
		id: LockIdentifier,
		who: &AccountId,
		amount: Balance,
		reasons: WithdrawReasons,
	);

	/// Changes a balance lock (selected by `id`) so that it becomes less liquid in all
	/// parameters or creates a new one if it does not exist.
	///
	/// Calling `extend_lock` on an existing lock `id` differs from `set_lock` in that it
	/// applies the most severe constraints of the two, while `set_lock` replaces the lock
	/// with the new parameters. As in, `extend_lock` will set:
	/// - maximum `amount`
	/// - bitwise mask of all `reasons`
	fn extend_lock(
		ext: &mut dyn Storage,
		id: LockIdentifier,
		who: &AccountId,
		amount: Balance,
		reasons: WithdrawReasons,
	);

	/// Remove an existing lock.
	fn remove_lock(ext: &mut dyn Storage, id: LockIdentifier, who: &AccountId);

	/// Get the balance of an account that can be used for transfers, reservations, or any other
	/// non-locking, non-transaction-fee activity. Will be at most `free_balance`.
	fn usable_balance(ext: &dyn Storage, who: &AccountId) -> Balance;

	/// Get the balance of an account that can be used for paying transaction fees (not tipping,
	/// or any other kind of fees, though). Will be at most `free_balance`.
	fn usable_balance_for_fees(ext: &dyn Storage, who: &AccountId) -> Balance;
}

/// An abstraction of a value stored within storage, but possibly as part of a larger composite
/// item.
///
/// The mutation closures receive the storage handle so they can touch other items while the
/// value is checked out.
pub trait StoredMap<K, T>
where
	T: Default,
{
	/// Get the item, or its default if it doesn't yet exist; we make no distinction between the
	/// two.
	fn get(ext: &dyn Storage, k: &K) -> T;

	/// Maybe mutate the item only if an `Ok` value is returned from `f`. Do nothing if an `Err` is
	/// returned. It is removed or reset to default value if it has been mutated to `None`.
	fn try_mutate_exists<R, E>(
		ext: &mut dyn Storage,
		k: &K,
		f: impl FnOnce(&mut dyn Storage, &mut Option<T>) -> Result<R, E>,
	) -> Result<R, E>
	where
		E: From<DispatchError>;

	/// Mutate the item, removing or resetting to default value if it has been mutated to `None`.
	fn mutate_exists<R>(
		ext: &mut dyn Storage,
		k: &K,
		f: impl FnOnce(&mut Option<T>) -> R,
	) -> Result<R, DispatchError> {
		Self::try_mutate_exists(ext, k, |_, x| -> Result<R, DispatchError> { Ok(f(x)) })
	}

	/// Mutate the item.
	fn mutate<R>(
		ext: &mut dyn Storage,
		k: &K,
		f: impl FnOnce(&mut T) -> R,
	) -> Result<R, DispatchError> {
		Self::mutate_exists(ext, k, |maybe_account| {
			f(maybe_account.get_or_insert_with(Default::default))
		})
	}

	/// Set the item to something new.
	fn insert(ext: &mut dyn Storage, k: &K, t: T) -> Result<(), DispatchError> {
		Self::mutate(ext, k, |i| *i = t)
	}

	/// Remove the item or otherwise replace it with its default value; we don't care which.
	fn remove(ext: &mut dyn Storage, k: &K) -> Result<(), DispatchError> {
		Self::mutate_exists(ext, k, |x| *x = None)
	}
}

/// Handler for when a new account has been created.
#[impl_for_tuples(30)]
pub trait OnNewAccount<AccountId> {
	/// A new account `who` has been registered.
	fn on_new_account(ext: &mut dyn Storage, who: &AccountId);
}

/// The account with the given id was reaped.
#[impl_for_tuples(30)]
pub trait OnKilledAccount<AccountId> {
	/// The account with the given id was reaped.
	fn on_killed_account(ext: &mut dyn Storage, who: &AccountId);
}
