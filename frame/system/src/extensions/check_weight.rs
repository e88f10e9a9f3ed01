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
use core::marker::PhantomData;
// --- paritytech ---
use sp_runtime::{
	traits::Get,
	transaction_validity::{
		InvalidTransaction, TransactionValidity, TransactionValidityError, ValidTransaction,
	},
};
// --- darwinia-network ---
use crate::{limits::BlockWeights, AllExtrinsicsLen, BlockWeight, Config};
use darwinia_support::{
	dispatch::{DispatchInfo, PerDispatchClass, PostDispatchInfo},
	storage::Storage,
	weights::Weight,
};

/// Block resource (weight) limit check.
///
/// The dispatch class decides which part of the block an extrinsic is charged against.
pub struct CheckWeight<T>(PhantomData<T>);
impl<T: Config> CheckWeight<T> {
	/// Checks if the current extrinsic does not exceed the maximum weight a single extrinsic
	/// with given `DispatchClass` can have.
	fn check_extrinsic_weight(info: &DispatchInfo) -> Result<(), TransactionValidityError> {
		let max = T::BlockWeights::get().get(info.class).max_extrinsic;

		match max {
			Some(max) if info.weight.any_gt(max) => {
				Err(InvalidTransaction::ExhaustsResources.into())
			}
			_ => Ok(()),
		}
	}

	/// Checks if the current extrinsic can fit into the block with respect to block length limits.
	///
	/// Upon successes, it returns the new block length as a `Result`.
	fn check_block_length(
		ext: &dyn Storage,
		info: &DispatchInfo,
		len: usize,
	) -> Result<u32, TransactionValidityError> {
		let length_limit = T::BlockLength::get();
		let current_len = AllExtrinsicsLen::get(ext);
		let added_len = len as u32;
		let next_len = current_len.saturating_add(added_len);

		if next_len > *length_limit.max.get(info.class) {
			Err(InvalidTransaction::ExhaustsResources.into())
		} else {
			Ok(next_len)
		}
	}

	/// Checks if the current extrinsic can fit into the block with respect to block weight limits.
	///
	/// Upon successes, it returns the new block weight as a `Result`.
	fn check_block_weight(
		ext: &dyn Storage,
		info: &DispatchInfo,
	) -> Result<PerDispatchClass<Weight>, TransactionValidityError> {
		let maximum_weight = T::BlockWeights::get();
		let all_weight = BlockWeight::get(ext);

		calculate_consumed_weight(&maximum_weight, all_weight, info)
	}

	/// Do the validate checks. This can be applied to both signed and unsigned.
	///
	/// It only checks that the block weight and length limit will not exceed.
	pub fn do_validate(ext: &dyn Storage, info: &DispatchInfo, len: usize) -> TransactionValidity {
		// ignore the next length. If they return `Ok`, then it is below the limit.
		let _ = Self::check_block_length(ext, info, len)?;
		// during validation we skip block limit check. Since the `validate_transaction`
		// call runs on an empty block anyway, by the time the tx is included,
		// it might be different.
		Self::check_extrinsic_weight(info)?;

		Ok(ValidTransaction::default())
	}

	/// Do the pre-dispatch checks. This can be applied to both signed and unsigned.
	///
	/// It checks and notes the new weight and length.
	pub fn do_pre_dispatch(
		ext: &mut dyn Storage,
		info: &DispatchInfo,
		len: usize,
	) -> Result<(), TransactionValidityError> {
		let next_len = Self::check_block_length(ext, info, len)?;

		Self::check_extrinsic_weight(info)?;

		let next_weight = Self::check_block_weight(ext, info)?;

		AllExtrinsicsLen::put(ext, &next_len);
		BlockWeight::put(ext, &next_weight);

		Ok(())
	}

	/// Give back the weight the extrinsic declared but did not use.
	pub fn do_post_dispatch(
		ext: &mut dyn Storage,
		info: &DispatchInfo,
		post_info: &PostDispatchInfo,
	) {
		let unspent = post_info.calc_unspent(info);

		if unspent.any_gt(Weight::zero()) {
			BlockWeight::mutate(ext, |current_weight| {
				current_weight.sub(unspent, info.class);
			});
		}
	}
}

/// Add the weight of an extrinsic of `info.class`, plus its base weight, to `all_weight`.
///
/// A class without any limit saturates. Otherwise the class may not go over its own `max_total`,
/// and once the whole block is full it may only keep going inside its `reserved` pool.
pub fn calculate_consumed_weight(
	maximum_weight: &BlockWeights,
	mut all_weight: PerDispatchClass<Weight>,
	info: &DispatchInfo,
) -> Result<PerDispatchClass<Weight>, TransactionValidityError> {
	let limit_per_class = maximum_weight.get(info.class);
	let extrinsic_weight = info.weight.saturating_add(limit_per_class.base_extrinsic);

	// add the weight. If class is unlimited, use saturating add instead of checked one.
	if limit_per_class.max_total.is_none() && limit_per_class.reserved.is_none() {
		all_weight.add(extrinsic_weight, info.class)
	} else {
		all_weight
			.checked_add(extrinsic_weight, info.class)
			.map_err(|_| InvalidTransaction::ExhaustsResources)?;
	}

	let per_class = *all_weight.get(info.class);

	// Check if we don't exceed per-class allowance
	match limit_per_class.max_total {
		Some(max) if per_class.any_gt(max) => {
			return Err(InvalidTransaction::ExhaustsResources.into())
		}
		// There is no `max_total` limit (`None`),
		// or we are below the limit.
		_ => {}
	}

	// In cases total block weight is exceeded, we need to fall back
	// to `reserved` pool if there is any.
	if all_weight.total().any_gt(maximum_weight.max_block) {
		match limit_per_class.reserved {
			// We are over the limit in reserved pool.
			Some(reserved) if per_class.any_gt(reserved) => {
				return Err(InvalidTransaction::ExhaustsResources.into())
			}
			// There is either no limit in reserved pool (`None`),
			// or we are below the limit.
			_ => {}
		}
	}

	Ok(all_weight)
}
