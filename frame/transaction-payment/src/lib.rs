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

//! # Transaction Payment Module
//!
//! This module provides the basic logic needed to pay the absolute minimum amount needed for a
//! transaction to be included. This includes:
//!   - _base fee_: This is the minimum amount a user pays for a transaction. It is declared
//! 	as a base _weight_ in the runtime and converted to a fee using `WeightToFee`.
//!   - _weight fee_: A fee proportional to amount of weight a transaction consumes.
//!   - _length fee_: A fee proportional to the encoded length of the transaction.
//!   - _tip_: An optional tip. Tip increases the priority of the transaction, giving it a higher
//!     chance to be included by the transaction queue.
//!
//! The base fee and adjusted weight and length fees constitute the _inclusion fee_, which is
//! the minimum fee for a transaction to be included in a block.
//!
//! The formula of final fee:
//!   ```ignore
//!   inclusion_fee = base_fee + length_fee + [targeted_fee_adjustment * weight_fee];
//!   final_fee = inclusion_fee + tip;
//!   ```
//!
//!   - `targeted_fee_adjustment`: This is a multiplier that can tune the final fee based on
//! 	the congestion of the network.
//!
//! Additionally, this module allows one to configure:
//!   - The mapping between one unit of weight to one unit of fee via [`Config::WeightToFee`].
//!   - A means of updating the fee for the next block, via defining a multiplier, based on the
//!     final state of the chain at the end of the previous block. This can be configured via
//!     [`Config::FeeMultiplierUpdate`]
//!   - How the fees are paid via [`Config::OnChargeTransaction`].

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
mod mock;
#[cfg(test)]
mod tests;

pub mod payment;
pub use payment::*;

pub mod types;
pub use types::{FeeDetails, InclusionFee, RuntimeDispatchInfo};

// --- core ---
use core::marker::PhantomData;
// --- crates.io ---
use codec::{Decode, Encode};
use scale_info::TypeInfo;
// --- paritytech ---
use sp_runtime::{
	traits::{Bounded, Get, One, SaturatedConversion, Saturating},
	transaction_validity::{
		InvalidTransaction, TransactionPriority, TransactionValidity, TransactionValidityError,
		ValidTransaction,
	},
	DispatchResult, FixedPointNumber, FixedU128, Perbill, Perquintill, RuntimeDebug,
	TransactionOutcome,
};
// --- darwinia-network ---
use darwinia_support::{
	dispatch::{DispatchClass, DispatchInfo, GetDispatchInfo, Pays, PostDispatchInfo},
	storage::{with_transaction, Storage, StorageValue},
	storage_prefix,
	weights::{Weight, WeightToFee},
	Balance,
};

/// Fee multiplier.
pub type Multiplier = FixedU128;

/// The value of the multiplier until the first block updates it.
pub const MULTIPLIER_DEFAULT_VALUE: Multiplier = Multiplier::from_u32(1);

/// A struct to update the weight multiplier per block. It implements `MultiplierUpdate`,
/// meaning that it can be used as the fee multiplier update of a runtime.
///
/// Given:
/// s = previous block weight
/// s'= ideal block weight
/// m = maximum block weight
/// diff = (s - s')/m
/// v = 0.00001
/// t1 = (v * diff)
/// t2 = (v * diff)^2 / 2
/// then:
/// next_multiplier = prev_multiplier * (1 + t1 + t2)
///
/// Where `(s', v)` must be given as the `Get` implementation of the `T` generic type. Moreover, `M`
/// must provide the minimum allowed value for the multiplier. Note that a runtime should ensure
/// with tests that the combination of this `M` and `V` is not such that the multiplier can drop
/// to zero and never recover.
///
/// Note that `s'` is interpreted as a portion in the _normal transaction_ capacity of the block.
/// For example, given `s' == 0.25` and `AvailableBlockRatio = 0.75`, then the target fullness is
/// _0.25 of the normal capacity_ and _0.1875 of the entire block_.
pub struct TargetedFeeAdjustment<T, S, V, M, X>(PhantomData<(T, S, V, M, X)>);

/// Something that can convert the current multiplier to the next one.
pub trait MultiplierUpdate {
	/// Minimum multiplier. Any outcome of the `convert` function should be at least this.
	fn min() -> Multiplier;
	/// Maximum multiplier. Any outcome of the `convert` function should be less or equal this.
	fn max() -> Multiplier;
	/// Target block saturation level
	fn target() -> Perquintill;
	/// Variability factor
	fn variability() -> Multiplier;
	/// The multiplier of the next block, given the one of the block being finalized.
	fn convert(ext: &dyn Storage, previous: Multiplier) -> Multiplier;
}
impl MultiplierUpdate for () {
	fn min() -> Multiplier {
		Default::default()
	}

	fn max() -> Multiplier {
		<Multiplier as Bounded>::max_value()
	}

	fn target() -> Perquintill {
		Default::default()
	}

	fn variability() -> Multiplier {
		Default::default()
	}

	fn convert(_: &dyn Storage, previous: Multiplier) -> Multiplier {
		previous
	}
}
impl<T, S, V, M, X> MultiplierUpdate for TargetedFeeAdjustment<T, S, V, M, X>
where
	T: darwinia_system::Config,
	S: Get<Perquintill>,
	V: Get<Multiplier>,
	M: Get<Multiplier>,
	X: Get<Multiplier>,
{
	fn min() -> Multiplier {
		M::get()
	}

	fn max() -> Multiplier {
		X::get()
	}

	fn target() -> Perquintill {
		S::get()
	}

	fn variability() -> Multiplier {
		V::get()
	}

	fn convert(ext: &dyn Storage, previous: Multiplier) -> Multiplier {
		// The multiplier in storage should always be at least the minimum. Nonetheless we recover
		// here, because any value below it would be stale and can never change.
		let min_multiplier = M::get();
		let max_multiplier = X::get();
		let previous = previous.max(min_multiplier);

		let weights = T::BlockWeights::get();
		// the computed ratio is only among the normal class.
		let normal_max_weight =
			weights.get(DispatchClass::Normal).max_total.unwrap_or(weights.max_block);
		let current_block_weight = <darwinia_system::Pallet<T>>::block_weight(ext);
		let normal_block_weight =
			current_block_weight.get(DispatchClass::Normal).min(normal_max_weight);

		// Normalize dimensions so they can be compared. Ensure max weight is non-zero.
		let normalized_ref_time = Perbill::from_rational(
			normal_block_weight.ref_time(),
			normal_max_weight.ref_time().max(1),
		);
		let normalized_proof_size = Perbill::from_rational(
			normal_block_weight.proof_size(),
			normal_max_weight.proof_size().max(1),
		);

		// Pick the limiting dimension.
		let (normal_limiting_dimension, max_limiting_dimension) =
			if normalized_ref_time < normalized_proof_size {
				(normal_block_weight.proof_size(), normal_max_weight.proof_size())
			} else {
				(normal_block_weight.ref_time(), normal_max_weight.ref_time())
			};

		let target_block_fullness = S::get();
		let adjustment_variable = V::get();

		let target_weight = (target_block_fullness * max_limiting_dimension) as u128;
		let block_weight = normal_limiting_dimension as u128;

		// determines if the first_term is positive
		let positive = block_weight >= target_weight;
		let diff_abs = block_weight.max(target_weight) - block_weight.min(target_weight);

		let diff = Multiplier::saturating_from_rational(diff_abs, max_limiting_dimension.max(1));
		let diff_squared = diff.saturating_mul(diff);

		let v_squared_2 = adjustment_variable.saturating_mul(adjustment_variable)
			/ Multiplier::saturating_from_integer(2);

		let first_term = adjustment_variable.saturating_mul(diff);
		let second_term = v_squared_2.saturating_mul(diff_squared);

		if positive {
			let excess = first_term.saturating_add(second_term).saturating_mul(previous);

			previous.saturating_add(excess).clamp(min_multiplier, max_multiplier)
		} else {
			// first_term > second_term
			let negative = first_term.saturating_sub(second_term).saturating_mul(previous);

			previous.saturating_sub(negative).clamp(min_multiplier, max_multiplier)
		}
	}
}

/// A struct to make the fee multiplier a constant.
pub struct ConstFeeMultiplier<M>(PhantomData<M>);
impl<M> MultiplierUpdate for ConstFeeMultiplier<M>
where
	M: Get<Multiplier>,
{
	fn min() -> Multiplier {
		M::get()
	}

	fn max() -> Multiplier {
		M::get()
	}

	fn target() -> Perquintill {
		Default::default()
	}

	fn variability() -> Multiplier {
		Default::default()
	}

	fn convert(_: &dyn Storage, _: Multiplier) -> Multiplier {
		Self::min()
	}
}

pub trait Config: darwinia_system::Config {
	/// The index of this module in the runtime.
	const PALLET_INDEX: u8;

	/// The overarching event type.
	type RuntimeEvent: From<Event<Self>> + Into<<Self as darwinia_system::Config>::RuntimeEvent>;

	/// Handler for withdrawing, refunding and depositing the transaction fee.
	/// Transaction fees are withdrawn before the transaction is executed.
	/// After the transaction was executed the transaction weight can be
	/// adjusted, depending on the used resources by the transaction. If the
	/// transaction weight is lower than expected, parts of the transaction fee
	/// might be refunded. In the end the fees can be deposited.
	type OnChargeTransaction: OnChargeTransaction<Self>;

	/// A fee multiplier for `Operational` extrinsics to compute "virtual tip" to boost their
	/// `priority`
	///
	/// This value is multiplied by the `final_fee` to obtain a "virtual tip" that is later
	/// added to a tip component in regular `priority` calculations.
	/// It means that a `Normal` transaction can front-run a similarly-sized `Operational`
	/// extrinsic (with no tip), by including a tip value greater than the virtual tip.
	type OperationalFeeMultiplier: Get<u8>;

	/// Convert a weight value into a deductible fee based on the currency type.
	type WeightToFee: WeightToFee<Balance = Balance>;

	/// Convert a length value into a deductible fee based on the currency type.
	type LengthToFee: WeightToFee<Balance = Balance>;

	/// Update the multiplier of the next block, based on the previous block's weight.
	type FeeMultiplierUpdate: MultiplierUpdate;
}

storage_prefix!(pub NextFeeMultiplierPrefix, "TransactionPayment", "NextFeeMultiplier");

/// The fee multiplier of the next extrinsic.
///
/// Read it through [`Pallet::next_fee_multiplier`], an absent cell means
/// [`MULTIPLIER_DEFAULT_VALUE`].
pub type NextFeeMultiplier = StorageValue<NextFeeMultiplierPrefix, Multiplier>;

#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
#[scale_info(skip_type_params(T))]
pub enum Event<T: Config> {
	/// A transaction fee `actual_fee`, of which `tip` was added to the minimum inclusion fee,
	/// has been paid by `who`.
	#[codec(index = 0)]
	TransactionFeePaid { who: T::AccountId, actual_fee: Balance, tip: Balance },
}

pub struct GenesisConfig {
	pub multiplier: Multiplier,
}
impl Default for GenesisConfig {
	fn default() -> Self {
		Self { multiplier: MULTIPLIER_DEFAULT_VALUE }
	}
}
impl GenesisConfig {
	pub fn build(&self, ext: &mut dyn Storage) {
		NextFeeMultiplier::put(ext, &self.multiplier);
	}
}

pub struct Pallet<T>(PhantomData<T>);
impl<T: Config> Pallet<T> {
	pub fn deposit_event(ext: &mut dyn Storage, event: Event<T>) {
		<darwinia_system::Pallet<T>>::deposit_event(ext, <T as Config>::RuntimeEvent::from(event));
	}

	pub fn next_fee_multiplier(ext: &dyn Storage) -> Multiplier {
		NextFeeMultiplier::try_get(ext).unwrap_or(MULTIPLIER_DEFAULT_VALUE)
	}

	/// Update the fee multiplier for the next block.
	pub fn on_finalize(ext: &mut dyn Storage) {
		let next = T::FeeMultiplierUpdate::convert(ext, Self::next_fee_multiplier(ext));

		NextFeeMultiplier::put(ext, &next);
	}

	/// Query the data that we know about the fee of a given `call`.
	///
	/// This pallet is not and cannot be aware of the internals of a signed extension, for example
	/// a tip. It only interprets the extrinsic as some encoded value and accounts for its weight
	/// and length, the runtime's extrinsic base weight, and the current fee multiplier.
	///
	/// All dispatchables must be annotated with weight and will have some fee info. This function
	/// always returns.
	pub fn query_info<C>(
		ext: &dyn Storage,
		call: &C,
		len: u32,
		signed: bool,
	) -> RuntimeDispatchInfo
	where
		C: GetDispatchInfo,
	{
		// The tip is part of the signed extra, which is unknown here.
		let dispatch_info = call.get_dispatch_info();
		let partial_fee = if signed { Self::compute_fee(ext, len, &dispatch_info, 0) } else { 0 };
		let DispatchInfo { weight, class, .. } = dispatch_info;

		RuntimeDispatchInfo { weight, class, partial_fee }
	}

	/// Query the detailed fee of a given `call`.
	pub fn query_fee_details<C>(ext: &dyn Storage, call: &C, len: u32, signed: bool) -> FeeDetails
	where
		C: GetDispatchInfo,
	{
		let dispatch_info = call.get_dispatch_info();

		if signed {
			Self::compute_fee_details(ext, len, &dispatch_info, 0)
		} else {
			// Unsigned extrinsics have no inclusion fee.
			FeeDetails { inclusion_fee: None, tip: 0 }
		}
	}

	/// Compute the final fee value for a particular transaction.
	pub fn compute_fee(ext: &dyn Storage, len: u32, info: &DispatchInfo, tip: Balance) -> Balance {
		Self::compute_fee_details(ext, len, info, tip).final_fee()
	}

	/// Compute the fee details for a particular transaction.
	pub fn compute_fee_details(
		ext: &dyn Storage,
		len: u32,
		info: &DispatchInfo,
		tip: Balance,
	) -> FeeDetails {
		Self::compute_fee_raw(ext, len, info.weight, tip, info.pays_fee, info.class)
	}

	/// Compute the actual post dispatch fee for a particular transaction.
	///
	/// Identical to `compute_fee` with the only difference that the post dispatch corrected
	/// weight is used for the weight fee calculation.
	pub fn compute_actual_fee(
		ext: &dyn Storage,
		len: u32,
		info: &DispatchInfo,
		post_info: &PostDispatchInfo,
		tip: Balance,
	) -> Balance {
		Self::compute_actual_fee_details(ext, len, info, post_info, tip).final_fee()
	}

	/// Compute the actual post dispatch fee details for a particular transaction.
	pub fn compute_actual_fee_details(
		ext: &dyn Storage,
		len: u32,
		info: &DispatchInfo,
		post_info: &PostDispatchInfo,
		tip: Balance,
	) -> FeeDetails {
		Self::compute_fee_raw(
			ext,
			len,
			post_info.calc_actual_weight(info),
			tip,
			post_info.pays_fee(info),
			info.class,
		)
	}

	fn compute_fee_raw(
		ext: &dyn Storage,
		len: u32,
		weight: Weight,
		tip: Balance,
		pays_fee: Pays,
		class: DispatchClass,
	) -> FeeDetails {
		if pays_fee == Pays::Yes {
			// the adjustable part of the fee.
			let unadjusted_weight_fee = Self::weight_to_fee(weight);
			let multiplier = Self::next_fee_multiplier(ext);
			// final adjusted weight fee.
			let adjusted_weight_fee = multiplier.saturating_mul_int(unadjusted_weight_fee);
			// length fee. this is adjusted via `LengthToFee`.
			let len_fee = Self::length_to_fee(len);
			let base_fee = Self::weight_to_fee(T::BlockWeights::get().get(class).base_extrinsic);

			FeeDetails {
				inclusion_fee: Some(InclusionFee { base_fee, len_fee, adjusted_weight_fee }),
				tip,
			}
		} else {
			FeeDetails { inclusion_fee: None, tip }
		}
	}

	/// Compute the length portion of a fee by invoking the configured `LengthToFee` impl.
	pub fn length_to_fee(length: u32) -> Balance {
		T::LengthToFee::weight_to_fee(&Weight::from_parts(length as u64, 0))
	}

	/// Compute the unadjusted portion of the weight fee by invoking the configured `WeightToFee`
	/// impl. Note that the input `weight` is capped by the maximum block weight before computation.
	pub fn weight_to_fee(weight: Weight) -> Balance {
		// cap the weight to the maximum defined in runtime, otherwise it will be the
		// `Bounded` maximum of its data type, which is not desired.
		let capped_weight = weight.min(T::BlockWeights::get().max_block);

		T::WeightToFee::weight_to_fee(&capped_weight)
	}
}

/// What `pre_dispatch` hands over to `post_dispatch`: the tip, the payer and the withdrawn fee.
pub type Pre<T> = (
	Balance,
	<T as darwinia_system::Config>::AccountId,
	<<T as Config>::OnChargeTransaction as OnChargeTransaction<T>>::LiquidityInfo,
);

/// Require the transactor pay for themselves and maybe include a tip to gain additional priority
/// in the queue.
///
/// # Transaction Validity
///
/// This extension sets the `priority` field of `TransactionValidity` depending on the amount
/// of tip being paid per weight unit.
///
/// Operational transactions will receive an additional priority bump, so that they are normally
/// considered before regular transactions.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
#[scale_info(skip_type_params(T))]
pub struct ChargeTransactionPayment<T: Config>(#[codec(compact)] Balance, PhantomData<T>);
impl<T: Config> ChargeTransactionPayment<T> {
	/// utility constructor. Used only in client/factory code.
	pub fn from(fee: Balance) -> Self {
		Self(fee, PhantomData)
	}

	/// Returns the tip as being chosen by the transaction sender.
	pub fn tip(&self) -> Balance {
		self.0
	}

	fn withdraw_fee(
		&self,
		ext: &mut dyn Storage,
		who: &T::AccountId,
		info: &DispatchInfo,
		len: usize,
	) -> Result<
		(Balance, <T::OnChargeTransaction as OnChargeTransaction<T>>::LiquidityInfo),
		TransactionValidityError,
	> {
		let tip = self.0;
		let fee = <Pallet<T>>::compute_fee(ext, len as u32, info, tip);

		<T::OnChargeTransaction as OnChargeTransaction<T>>::withdraw_fee(ext, who, info, fee, tip)
			.map(|i| (fee, i))
	}

	/// Get an appropriate priority for a transaction with the given `DispatchInfo`, encoded length
	/// and user-included tip.
	///
	/// The priority is based on the amount of `tip` the user is willing to pay per unit of either
	/// `weight` or `length`, depending which one is more limiting. For `Operational` extrinsics
	/// we add a "virtual tip" to the calculations.
	///
	/// The formula should simply be `tip / bounded_{weight|length}`, but since we are using
	/// integer division, we have no guarantees it's going to give results in any reasonable
	/// range (might simply end up being zero). Hence we use a scaling factor:
	/// `tip * (max_block_{weight|length} / bounded_{weight|length})`, since given current
	/// state of-the-art blockchains, number of per-block transactions is expected to be in a
	/// range reasonable enough to not saturate the `Balance` type while multiplying by the tip.
	pub fn get_priority(
		info: &DispatchInfo,
		len: usize,
		tip: Balance,
		final_fee: Balance,
	) -> TransactionPriority {
		// Calculate how many such extrinsics we could fit into an empty block and take the
		// limiting factor.
		let max_block_weight = T::BlockWeights::get().max_block;
		let max_block_length = (*T::BlockLength::get().max.get(info.class) as u64).max(1);

		// bounded_weight is used as a divisor later so we keep it non-zero.
		let bounded_weight = info.weight.max(Weight::from_parts(1, 1)).min(max_block_weight);
		let bounded_length = (len as u64).max(1).min(max_block_length);

		// returns the scarce resource, i.e. the one that is limiting the number of transactions.
		let max_tx_per_block_weight = max_block_weight
			.ref_time()
			.checked_div(bounded_weight.ref_time())
			.into_iter()
			.chain(max_block_weight.proof_size().checked_div(bounded_weight.proof_size()))
			.min()
			.unwrap_or(1);
		let max_tx_per_block_length = max_block_length / bounded_length;
		// Given our current knowledge this value is going to be in a reasonable range - i.e.
		// less than 10^9 (2^30), so multiplying by the `tip` value is unlikely to overflow the
		// balance type. We still use saturating ops obviously, but the point is to end up with some
		// `priority` distribution instead of having all transactions saturate the priority.
		let max_tx_per_block =
			max_tx_per_block_length.min(max_tx_per_block_weight).saturated_into::<Balance>();
		let max_reward = |val: Balance| val.saturating_mul(max_tx_per_block);

		// To distribute no-tip transactions a little bit, we increase the tip value by one.
		// This means that given two transactions without a tip, smaller one will be preferred.
		let tip = tip.saturating_add(One::one());
		let scaled_tip = max_reward(tip);

		match info.class {
			// For normal class we simply take the `tip_per_weight`.
			DispatchClass::Normal => scaled_tip,
			// Mandatory extrinsics should be prohibited (e.g. by the `CheckWeight` check), but
			// just to be safe let's return the same priority as `Normal` here.
			DispatchClass::Mandatory => scaled_tip,
			DispatchClass::Operational => {
				// A "virtual tip" value added to an `Operational` extrinsic.
				// This value should be kept high enough to allow `Operational` extrinsics
				// to get in even during congestion period, but at the same time low
				// enough to prevent a possible spam attack by sending invalid operational
				// extrinsics which push away regular transactions from the pool.
				let fee_multiplier = T::OperationalFeeMultiplier::get().saturated_into();
				let virtual_tip = final_fee.saturating_mul(fee_multiplier);
				let scaled_virtual_tip = max_reward(virtual_tip);

				scaled_tip.saturating_add(scaled_virtual_tip)
			}
		}
		.saturated_into::<TransactionPriority>()
	}

	/// Check that `who` can pay for the transaction and compute its priority.
	///
	/// The fee is withdrawn and settled inside a storage layer which is always rolled back.
	pub fn validate(
		&self,
		ext: &mut dyn Storage,
		who: &T::AccountId,
		info: &DispatchInfo,
		len: usize,
	) -> TransactionValidity {
		let final_fee = with_transaction(ext, |ext| {
			let r = self.withdraw_fee(ext, who, info, len).and_then(|(final_fee, imbalance)| {
				<T::OnChargeTransaction as OnChargeTransaction<T>>::correct_and_deposit_fee(
					ext,
					who,
					info,
					&PostDispatchInfo::default(),
					final_fee,
					self.0,
					imbalance,
				)
				.map(|_| final_fee)
			});

			TransactionOutcome::Rollback(Ok::<_, sp_runtime::DispatchError>(r))
		})
		.map_err(|e| {
			log::debug!(target: "runtime::transaction-payment", "validation aborted, {:?}", e);

			TransactionValidityError::from(InvalidTransaction::Payment)
		})??;

		Ok(ValidTransaction {
			priority: Self::get_priority(info, len, self.0, final_fee),
			..Default::default()
		})
	}

	/// Withdraw the fee of the transaction and keep it for [`Self::post_dispatch`].
	pub fn pre_dispatch(
		self,
		ext: &mut dyn Storage,
		who: &T::AccountId,
		info: &DispatchInfo,
		len: usize,
	) -> Result<Pre<T>, TransactionValidityError> {
		let (_fee, imbalance) = self.withdraw_fee(ext, who, info, len)?;

		Ok((self.0, who.clone(), imbalance))
	}

	/// Settle the fee withdrawn by [`Self::pre_dispatch`] against the actual weight of the
	/// dispatch.
	pub fn post_dispatch(
		ext: &mut dyn Storage,
		maybe_pre: Option<Pre<T>>,
		info: &DispatchInfo,
		post_info: &PostDispatchInfo,
		len: usize,
		_result: &DispatchResult,
	) -> Result<(), TransactionValidityError> {
		if let Some((tip, who, imbalance)) = maybe_pre {
			let actual_fee = <Pallet<T>>::compute_actual_fee(ext, len as u32, info, post_info, tip);

			<T::OnChargeTransaction as OnChargeTransaction<T>>::correct_and_deposit_fee(
				ext, &who, info, post_info, actual_fee, tip, imbalance,
			)?;
			<Pallet<T>>::deposit_event(ext, Event::TransactionFeePaid { who, actual_fee, tip });
		}

		Ok(())
	}
}
