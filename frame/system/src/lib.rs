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

//! # System Module
//!
//! The System module provides low-level access to core types and cross-cutting utilities.
//!
//! It keeps the `AccountInfo` of every account, counts the references which keep an account
//! alive, collects the events of the current block and tracks the weight and length consumed by
//! its extrinsics.
//!
//! ## Reference counting
//!
//! - `providers`: the number of modules which allow this account to exist. An account with no
//!   provider is removed from storage.
//! - `consumers`: the number of modules which depend on this account to exist. As long as there
//!   is a consumer, the last provider may not go away.
//! - `sufficients`: the number of modules which let this account exist by themselves.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod extensions;
pub mod limits;
pub mod lookup;
pub mod weights;

#[cfg(test)]
mod mock;

pub use extensions::{check_nonce::CheckNonce, check_weight::CheckWeight};
pub use lookup::AccountIdLookup;
pub use weights::WeightInfo;

// --- core ---
use core::{convert::Infallible, fmt::Debug, marker::PhantomData};
// --- crates.io ---
use codec::{Decode, Encode, FullCodec, MaxEncodedLen};
use scale_info::TypeInfo;
// --- paritytech ---
use sp_runtime::{
	traits::{AtLeast32BitUnsigned, BadOrigin, Get, Member, One, Saturating, StaticLookup, Zero},
	DispatchError, RuntimeDebug,
};
use sp_std::prelude::*;
// --- darwinia-network ---
use darwinia_support::{
	dispatch::{
		dispatch_info_of, extract_actual_pays_fee, extract_actual_weight, DispatchClass,
		DispatchInfo, DispatchResultWithPostInfo, Dispatchable, GetCallIndex, GetCallName,
		GetDispatchInfo, PerDispatchClass,
	},
	storage::{Storage, StorageMap, StorageValue},
	storage_prefix,
	traits::{OnKilledAccount, OnNewAccount, Parameter, StoredMap},
	weights::{RuntimeDbWeight, Weight},
};

/// Type used to encode the number of references an account has.
pub type RefCount = u32;

/// Information of an account.
#[derive(Clone, Default, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub struct AccountInfo<Nonce, AccountData> {
	/// The number of transactions this account has sent.
	pub nonce: Nonce,
	/// The number of other modules that currently depend on this account's existence. The account
	/// cannot be reaped until this is zero.
	pub consumers: RefCount,
	/// The number of other modules that allow this account to exist. The account may not be reaped
	/// until this and `sufficients` are both zero.
	pub providers: RefCount,
	/// The number of modules that allow this account to exist for their own purposes only. The
	/// account may not be reaped until this and `providers` are both zero.
	pub sufficients: RefCount,
	/// The additional data that belongs to this account. Used to store the balance(s) in a lot of
	/// chains.
	pub data: AccountData,
}

/// A phase of a block's execution.
#[derive(
	Clone, Copy, Default, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug,
)]
pub enum Phase {
	/// Applying an extrinsic.
	ApplyExtrinsic(u32),
	/// Finalizing the block.
	Finalization,
	/// Initializing the block.
	#[default]
	Initialization,
}

/// Record of an event happening.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
pub struct EventRecord<E> {
	/// The phase of the block it happened in.
	pub phase: Phase,
	/// The event itself.
	pub event: E,
}

/// Origin for the System module.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
pub enum RawOrigin<AccountId> {
	/// The system itself ordained this dispatch to happen: this is the highest privilege level.
	Root,
	/// It is signed by some public key and we provide the `AccountId`.
	Signed(AccountId),
	/// It is signed by nobody, can be either:
	/// * included and agreed upon by the validators anyway,
	/// * or unsigned transaction validated by a module.
	None,
}
impl<AccountId> From<Option<AccountId>> for RawOrigin<AccountId> {
	fn from(s: Option<AccountId>) -> RawOrigin<AccountId> {
		match s {
			Some(who) => RawOrigin::Signed(who),
			None => RawOrigin::None,
		}
	}
}

/// Exposed origin for the System module.
pub type Origin<T> = RawOrigin<<T as Config>::AccountId>;

/// Ensure that the origin `o` represents a signed extrinsic (i.e. transaction).
/// Returns `Ok` with the account that signed the extrinsic or an `Err` otherwise.
pub fn ensure_signed<AccountId>(o: RawOrigin<AccountId>) -> Result<AccountId, BadOrigin> {
	match o {
		RawOrigin::Signed(t) => Ok(t),
		_ => Err(BadOrigin),
	}
}

/// Ensure that the origin `o` represents the root. Returns `Ok` or an `Err` otherwise.
pub fn ensure_root<AccountId>(o: RawOrigin<AccountId>) -> Result<(), BadOrigin> {
	match o {
		RawOrigin::Root => Ok(()),
		_ => Err(BadOrigin),
	}
}

/// Ensure that the origin `o` represents an unsigned extrinsic. Returns `Ok` or an `Err` otherwise.
pub fn ensure_none<AccountId>(o: RawOrigin<AccountId>) -> Result<(), BadOrigin> {
	match o {
		RawOrigin::None => Ok(()),
		_ => Err(BadOrigin),
	}
}

/// Some resultant status relevant to incrementing a provider/self-sufficient reference.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum IncRefStatus {
	/// Account was created.
	Created,
	/// Account already existed.
	Existed,
}

/// Some resultant status relevant to decrementing a provider/self-sufficient reference.
#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum DecRefStatus {
	/// Account was destroyed.
	Reaped,
	/// Account still exists.
	Exists,
}

pub trait Config: 'static + Sized + Clone + Eq + Debug {
	/// Data to be associated with an account (other than nonce/transaction counter, which this
	/// module does regardless).
	type AccountData: Member + FullCodec + Default + MaxEncodedLen + TypeInfo;

	/// The user account identifier type for the runtime.
	type AccountId: Parameter + Member + Ord + MaxEncodedLen;

	/// The maximum length of a block (in bytes).
	type BlockLength: Get<limits::BlockLength>;

	/// The block number type used by the runtime.
	type BlockNumber: Parameter + Member + AtLeast32BitUnsigned + Copy + Default + MaxEncodedLen;

	/// Block & extrinsics weights: base values and limits.
	type BlockWeights: Get<limits::BlockWeights>;

	/// The weight of runtime database operations the runtime can invoke.
	type DbWeight: Get<RuntimeDbWeight>;

	/// Converting trait to take a source type and convert to `AccountId`.
	///
	/// Used to define the type and conversion mechanism for referencing accounts in transactions.
	/// It's perfectly reasonable for this to be an identity conversion (with the source type being
	/// `AccountId`), but other modules (e.g. Indices module) may provide more functional/efficient
	/// alternatives.
	type Lookup: StaticLookup<Target = Self::AccountId>;

	/// This stores the number of previous transactions associated with a sender account.
	type Nonce: Parameter + Member + AtLeast32BitUnsigned + Copy + Default + MaxEncodedLen;

	/// A function that is invoked when an account has been determined to be dead.
	///
	/// All resources should be cleaned up associated with the given account.
	type OnKilledAccount: OnKilledAccount<Self::AccountId>;

	/// Handler for when a new account has just been created.
	type OnNewAccount: OnNewAccount<Self::AccountId>;

	/// The aggregated event type of the runtime.
	type RuntimeEvent: Parameter + Member + From<Event<Self>>;

	/// Weight information for the extrinsics of this module.
	type SystemWeightInfo: WeightInfo;
}

storage_prefix!(pub AccountPrefix, "System", "Account");
storage_prefix!(pub AllExtrinsicsLenPrefix, "System", "AllExtrinsicsLen");
storage_prefix!(pub BlockWeightPrefix, "System", "BlockWeight");
storage_prefix!(pub EventCountPrefix, "System", "EventCount");
storage_prefix!(pub EventsPrefix, "System", "Events");
storage_prefix!(pub ExecutionPhasePrefix, "System", "ExecutionPhase");
storage_prefix!(pub ExtrinsicCountPrefix, "System", "ExtrinsicCount");
storage_prefix!(pub ExtrinsicIndexPrefix, "System", "ExtrinsicIndex");
storage_prefix!(pub NumberPrefix, "System", "Number");

/// The full account information for a particular account ID.
pub type Account<T> = StorageMap<
	AccountPrefix,
	<T as Config>::AccountId,
	AccountInfo<<T as Config>::Nonce, <T as Config>::AccountData>,
>;
/// Total length (in bytes) for all extrinsics put together, for the current block.
pub type AllExtrinsicsLen = StorageValue<AllExtrinsicsLenPrefix, u32>;
/// The current weight for the block.
pub type BlockWeight = StorageValue<BlockWeightPrefix, PerDispatchClass<Weight>>;
/// The number of events in the `Events<T>` list.
pub type EventCount = StorageValue<EventCountPrefix, u32>;
/// Events deposited for the current block.
pub type Events<T> = StorageValue<EventsPrefix, Vec<EventRecord<<T as Config>::RuntimeEvent>>>;
/// The execution phase of the block.
pub type ExecutionPhase = StorageValue<ExecutionPhasePrefix, Phase>;
/// Total extrinsics count for the current block.
pub type ExtrinsicCount = StorageValue<ExtrinsicCountPrefix, u32>;
/// The index of the extrinsic being applied.
pub type ExtrinsicIndex = StorageValue<ExtrinsicIndexPrefix, u32>;
/// The current block number being processed.
pub type Number<T> = StorageValue<NumberPrefix, <T as Config>::BlockNumber>;

/// Event for the System module.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
#[scale_info(skip_type_params(T))]
pub enum Event<T: Config> {
	/// An extrinsic completed successfully.
	#[codec(index = 0)]
	ExtrinsicSuccess { dispatch_info: DispatchInfo },
	/// An extrinsic failed.
	#[codec(index = 1)]
	ExtrinsicFailed { dispatch_error: DispatchError, dispatch_info: DispatchInfo },
	/// A new account was created.
	#[codec(index = 3)]
	NewAccount { account: T::AccountId },
	/// An account was reaped.
	#[codec(index = 4)]
	KilledAccount { account: T::AccountId },
	/// On on-chain remark happened.
	#[codec(index = 5)]
	Remarked { sender: T::AccountId, hash: [u8; 32] },
}

/// Contains one variant per dispatchable that can be called by an extrinsic.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
#[scale_info(skip_type_params(T))]
#[allow(non_camel_case_types)]
pub enum Call<T: Config> {
	#[doc(hidden)]
	#[codec(skip)]
	__Ignore(PhantomData<T>, Infallible),
	/// Make some on-chain remark.
	#[codec(index = 0)]
	remark { remark: Vec<u8> },
	/// Make some on-chain remark and emit event.
	#[codec(index = 7)]
	remark_with_event { remark: Vec<u8> },
}
impl<T: Config> GetDispatchInfo for Call<T> {
	fn get_dispatch_info(&self) -> DispatchInfo {
		match self {
			Call::remark { remark } => {
				dispatch_info_of(T::SystemWeightInfo::remark(remark.len() as u32), ())
			}
			Call::remark_with_event { remark } => {
				dispatch_info_of(T::SystemWeightInfo::remark_with_event(remark.len() as u32), ())
			}
			Call::__Ignore(_, never) => match *never {},
		}
	}
}
impl<T: Config> GetCallIndex for Call<T> {
	fn get_call_indices() -> &'static [u8] {
		&[0, 7]
	}

	fn get_call_index(&self) -> u8 {
		match self {
			Call::remark { .. } => 0,
			Call::remark_with_event { .. } => 7,
			Call::__Ignore(_, never) => match *never {},
		}
	}
}
impl<T: Config> GetCallName for Call<T> {
	fn get_call_names() -> &'static [&'static str] {
		&["remark", "remark_with_event"]
	}

	fn get_call_name(&self) -> &'static str {
		match self {
			Call::remark { .. } => "remark",
			Call::remark_with_event { .. } => "remark_with_event",
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
			Call::remark { remark } => <Pallet<T>>::remark(ext, origin, remark),
			Call::remark_with_event { remark } => {
				<Pallet<T>>::remark_with_event(ext, origin, remark)
			}
			Call::__Ignore(_, never) => match never {},
		}
	}
}

/// The System module.
pub struct Pallet<T>(PhantomData<T>);
impl<T: Config> Pallet<T> {
	/// Make some on-chain remark.
	///
	/// Can be executed by every `origin`.
	pub fn remark(
		_ext: &mut dyn Storage,
		_origin: Origin<T>,
		_remark: Vec<u8>,
	) -> DispatchResultWithPostInfo {
		Ok(().into())
	}

	/// Make some on-chain remark and emit event.
	pub fn remark_with_event(
		ext: &mut dyn Storage,
		origin: Origin<T>,
		remark: Vec<u8>,
	) -> DispatchResultWithPostInfo {
		let sender = ensure_signed(origin)?;
		let hash = sp_crypto_hashing::blake2_256(&remark);

		Self::deposit_event(ext, Event::Remarked { sender, hash });

		Ok(().into())
	}

	/// The full account information of `who`.
	pub fn account(ext: &dyn Storage, who: &T::AccountId) -> AccountInfo<T::Nonce, T::AccountData> {
		<Account<T>>::get(ext, who)
	}

	/// An account is being created.
	fn on_created_account(ext: &mut dyn Storage, who: T::AccountId) {
		T::OnNewAccount::on_new_account(ext, &who);

		Self::deposit_event(ext, Event::NewAccount { account: who });
	}

	/// Do anything that needs to be done after an account has been killed.
	fn on_killed_account(ext: &mut dyn Storage, who: T::AccountId) {
		T::OnKilledAccount::on_killed_account(ext, &who);

		Self::deposit_event(ext, Event::KilledAccount { account: who });
	}

	/// Whether `who` has an `AccountInfo` in storage.
	pub fn account_exists(ext: &dyn Storage, who: &T::AccountId) -> bool {
		<Account<T>>::contains_key(ext, who)
	}

	/// Increment the reference counter on an account.
	pub fn inc_providers(ext: &mut dyn Storage, who: &T::AccountId) -> IncRefStatus {
		let mut account = <Account<T>>::get(ext, who);
		let status = if account.providers == 0 && account.sufficients == 0 {
			// Account is being created.
			account.providers = 1;

			IncRefStatus::Created
		} else {
			account.providers = account.providers.saturating_add(1);

			IncRefStatus::Existed
		};

		<Account<T>>::insert(ext, who, &account);

		if status == IncRefStatus::Created {
			Self::on_created_account(ext, who.clone());
		}

		status
	}

	/// Decrement the provider reference counter on an account.
	///
	/// This *MUST* only be done once for every time you called `inc_providers` on `who`.
	pub fn dec_providers(
		ext: &mut dyn Storage,
		who: &T::AccountId,
	) -> Result<DecRefStatus, DispatchError> {
		let mut account = if let Some(account) = <Account<T>>::try_get(ext, who) {
			account
		} else {
			log::error!(
				target: "runtime::system",
				"Logic error: Account already dead when reducing provider",
			);

			return Ok(DecRefStatus::Reaped);
		};

		if account.providers == 0 {
			// Logic error - cannot decrement beyond zero.
			log::error!(
				target: "runtime::system",
				"Logic error: Unexpected underflow in reducing provider",
			);

			account.providers = 1;
		}

		match (account.providers, account.consumers, account.sufficients) {
			(1, 0, 0) => {
				// No providers left (and no consumers) and no sufficients. Account dead.
				<Account<T>>::remove(ext, who);

				Self::on_killed_account(ext, who.clone());

				Ok(DecRefStatus::Reaped)
			}
			(1, c, _) if c > 0 => {
				// Cannot remove last provider if there are consumers.
				Err(DispatchError::ConsumerRemaining)
			}
			(x, _, _) => {
				// Account will continue to exist as there is either > 1 provider or
				// > 0 sufficients.
				account.providers = x - 1;

				<Account<T>>::insert(ext, who, &account);

				Ok(DecRefStatus::Exists)
			}
		}
	}

	/// The number of outstanding provider references for the account `who`.
	pub fn providers(ext: &dyn Storage, who: &T::AccountId) -> RefCount {
		<Account<T>>::get(ext, who).providers
	}

	/// The number of outstanding sufficient references for the account `who`.
	pub fn sufficients(ext: &dyn Storage, who: &T::AccountId) -> RefCount {
		<Account<T>>::get(ext, who).sufficients
	}

	/// Increment the reference counter on an account.
	///
	/// The account `who`'s `providers` must be non-zero or this will return an error.
	pub fn inc_consumers(ext: &mut dyn Storage, who: &T::AccountId) -> Result<(), DispatchError> {
		<Account<T>>::try_mutate(ext, who, |a| {
			if a.providers > 0 {
				a.consumers = a.consumers.saturating_add(1);

				Ok(())
			} else {
				Err(DispatchError::NoProviders)
			}
		})
	}

	/// Decrement the reference counter on an account. This *MUST* only be done once for every
	/// time you called `inc_consumers` on `who`.
	pub fn dec_consumers(ext: &mut dyn Storage, who: &T::AccountId) {
		<Account<T>>::mutate(ext, who, |a| {
			if a.consumers > 0 {
				a.consumers -= 1;
			} else {
				log::error!(
					target: "runtime::system",
					"Logic error: Unexpected underflow in reducing consumer",
				);
			}
		})
	}

	/// The number of outstanding references for the account `who`.
	pub fn consumers(ext: &dyn Storage, who: &T::AccountId) -> RefCount {
		<Account<T>>::get(ext, who).consumers
	}

	/// True if the account has some outstanding consumer references.
	pub fn is_provider_required(ext: &dyn Storage, who: &T::AccountId) -> bool {
		Self::consumers(ext, who) != 0
	}

	/// True if the account has no outstanding consumer references or more than one provider.
	pub fn can_dec_provider(ext: &dyn Storage, who: &T::AccountId) -> bool {
		let a = <Account<T>>::get(ext, who);

		a.consumers == 0 || a.providers > 1
	}

	/// Retrieve the account transaction counter from storage.
	pub fn account_nonce(ext: &dyn Storage, who: &T::AccountId) -> T::Nonce {
		<Account<T>>::get(ext, who).nonce
	}

	/// Increment a particular account's nonce by 1.
	pub fn inc_account_nonce(ext: &mut dyn Storage, who: &T::AccountId) {
		<Account<T>>::mutate(ext, who, |a| a.nonce = a.nonce.saturating_add(One::one()));
	}

	/// Deposits an event into this block's event record.
	///
	/// Events are not deposited on the genesis block.
	pub fn deposit_event(ext: &mut dyn Storage, event: impl Into<T::RuntimeEvent>) {
		let block_number = Self::block_number(ext);

		// Don't populate events on genesis.
		if block_number.is_zero() {
			return;
		}

		let phase = ExecutionPhase::get(ext);
		let event = EventRecord { phase, event: event.into() };
		let old_event_count = EventCount::get(ext);
		let new_event_count = match old_event_count.checked_add(1) {
			// We've reached the maximum number of events at this block, just
			// don't do anything and leave the event_count unaltered.
			None => return,
			Some(nc) => nc,
		};

		EventCount::put(ext, &new_event_count);
		<Events<T>>::append(ext, &event);
	}

	/// Get the current events deposited by the runtime.
	pub fn events(ext: &dyn Storage) -> Vec<EventRecord<T::RuntimeEvent>> {
		<Events<T>>::get(ext)
	}

	/// Get the current events deposited by the runtime, without the phases.
	pub fn read_events_no_consensus(ext: &dyn Storage) -> Vec<T::RuntimeEvent> {
		<Events<T>>::get(ext).into_iter().map(|r| r.event).collect()
	}

	/// Reset events.
	///
	/// This needs to be used in prior calling [`initialize`](Self::initialize) for each new block
	/// to clear events from previous block.
	pub fn reset_events(ext: &mut dyn Storage) {
		<Events<T>>::kill(ext);
		EventCount::kill(ext);
	}

	/// The current block number being processed.
	pub fn block_number(ext: &dyn Storage) -> T::BlockNumber {
		<Number<T>>::get(ext)
	}

	/// Set the block number to something in particular. Can be used as an alternative to
	/// `initialize` for tests that don't need to bother with the other environment entries.
	pub fn set_block_number(ext: &mut dyn Storage, n: T::BlockNumber) {
		<Number<T>>::put(ext, &n);
	}

	/// The current weight for the block.
	pub fn block_weight(ext: &dyn Storage) -> PerDispatchClass<Weight> {
		BlockWeight::get(ext)
	}

	/// Total length (in bytes) for all extrinsics put together, for the current block.
	pub fn all_extrinsics_len(ext: &dyn Storage) -> u32 {
		AllExtrinsicsLen::get(ext)
	}

	/// Gets the index of extrinsic that is currently executing.
	pub fn extrinsic_index(ext: &dyn Storage) -> Option<u32> {
		ExtrinsicIndex::try_get(ext)
	}

	/// Gets extrinsics count.
	pub fn extrinsic_count(ext: &dyn Storage) -> u32 {
		ExtrinsicCount::get(ext)
	}

	/// Inform the system module of some additional weight that should be accounted for, in the
	/// current block.
	///
	/// NOTE: use with extra care; this function does NOT take any action if the new sum of block
	/// weight is more than the block weight limit.
	pub fn register_extra_weight_unchecked(
		ext: &mut dyn Storage,
		weight: Weight,
		class: DispatchClass,
	) {
		BlockWeight::mutate(ext, |current_weight| current_weight.add(weight, class));
	}

	/// Start the execution of a particular block.
	pub fn initialize(ext: &mut dyn Storage, number: &T::BlockNumber) {
		// populate environment
		ExecutionPhase::put(ext, &Phase::Initialization);
		ExtrinsicIndex::put(ext, &0);
		<Number<T>>::put(ext, number);

		// Remove previous block data from storage
		BlockWeight::kill(ext);
	}

	/// To be called immediately after finishing the initialization of the block.
	pub fn note_finished_initialize(ext: &mut dyn Storage) {
		ExecutionPhase::put(ext, &Phase::ApplyExtrinsic(0));
	}

	/// Remove temporary "environment" entries in storage at the end of a block.
	pub fn finalize(ext: &mut dyn Storage) {
		ExecutionPhase::kill(ext);
		AllExtrinsicsLen::kill(ext);

		let block_weight = BlockWeight::get(ext);
		let extrinsic_count = ExtrinsicCount::take(ext);

		log::debug!(
			target: "runtime::system",
			"[{:?}] {} extrinsics / normal weight: {:?} / operational weight: {:?} / mandatory \
			weight: {:?}",
			Self::block_number(ext),
			extrinsic_count,
			block_weight.get(DispatchClass::Normal),
			block_weight.get(DispatchClass::Operational),
			block_weight.get(DispatchClass::Mandatory),
		);
	}

	/// To be called immediately after an extrinsic has been applied.
	///
	/// Emits an `ExtrinsicSuccess` or `ExtrinsicFailed` event depending on the outcome. The
	/// reported weight is the actual weight plus the base weight of its class.
	pub fn note_applied_extrinsic(
		ext: &mut dyn Storage,
		r: &DispatchResultWithPostInfo,
		mut info: DispatchInfo,
	) {
		info.weight = extract_actual_weight(r, &info)
			.saturating_add(T::BlockWeights::get().get(info.class).base_extrinsic);
		info.pays_fee = extract_actual_pays_fee(r, &info);

		let event = match r {
			Ok(_) => Event::ExtrinsicSuccess { dispatch_info: info },
			Err(err) => {
				log::trace!(
					target: "runtime::system",
					"Extrinsic failed at block({:?}): {:?}",
					Self::block_number(ext),
					err,
				);

				Event::ExtrinsicFailed { dispatch_error: err.error, dispatch_info: info }
			}
		};

		Self::deposit_event(ext, event);

		let next_extrinsic_index = Self::extrinsic_index(ext).unwrap_or_default() + 1;

		ExtrinsicIndex::put(ext, &next_extrinsic_index);
		ExecutionPhase::put(ext, &Phase::ApplyExtrinsic(next_extrinsic_index));
	}

	/// To be called immediately after `note_applied_extrinsic` of the last extrinsic of the block
	/// has been called.
	pub fn note_finished_extrinsics(ext: &mut dyn Storage) {
		let extrinsic_index = ExtrinsicIndex::take(ext);

		ExtrinsicCount::put(ext, &extrinsic_index);
		ExecutionPhase::put(ext, &Phase::Finalization);
	}
}

fn is_providing<T: Default + Eq>(d: &T) -> bool {
	d != &T::default()
}

/// Implement StoredMap for a simple single-item, provide-when-not-default system. This works fine
/// for storing a single item which allows the account to continue existing as long as it's not
/// empty/default.
///
/// Anything more complex will need more sophisticated logic.
impl<T: Config> StoredMap<T::AccountId, T::AccountData> for Pallet<T> {
	fn get(ext: &dyn Storage, k: &T::AccountId) -> T::AccountData {
		<Account<T>>::get(ext, k).data
	}

	fn try_mutate_exists<R, E>(
		ext: &mut dyn Storage,
		k: &T::AccountId,
		f: impl FnOnce(&mut dyn Storage, &mut Option<T::AccountData>) -> Result<R, E>,
	) -> Result<R, E>
	where
		E: From<DispatchError>,
	{
		let account = <Account<T>>::get(ext, k);
		let was_providing = is_providing(&account.data);
		let mut some_data = if was_providing { Some(account.data) } else { None };
		let result = f(ext, &mut some_data)?;
		let is_providing = some_data.is_some();

		if !was_providing && is_providing {
			Self::inc_providers(ext, k);
		} else if was_providing && !is_providing {
			match Self::dec_providers(ext, k)? {
				DecRefStatus::Reaped => return Ok(result),
				DecRefStatus::Exists => {
					// Update value as normal...
				}
			}
		} else if !was_providing && !is_providing {
			return Ok(result);
		}

		<Account<T>>::mutate(ext, k, |a| a.data = some_data.unwrap_or_default());

		Ok(result)
	}
}
