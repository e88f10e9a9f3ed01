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

//! Block resource limits configuration structures.
//!
//! Each [`DispatchClass`] gets its own share of the block length and weight. A class without a
//! `max_total` is unlimited, a class with a `reserved` pool may keep going after the block itself
//! is full until that pool is exhausted.

// --- core ---
use core::{iter, slice};
// --- crates.io ---
use codec::{Decode, Encode};
use scale_info::TypeInfo;
// --- paritytech ---
use sp_runtime::{Perbill, RuntimeDebug};
use sp_std::prelude::*;
// --- darwinia-network ---
use darwinia_support::{
	dispatch::{DispatchClass, PerDispatchClass},
	weights::{
		constants::{BLOCK_EXECUTION_WEIGHT, EXTRINSIC_BASE_WEIGHT},
		Weight,
	},
};

/// Block length limit configuration.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
pub struct BlockLength {
	/// Maximal total length in bytes for each extrinsic class.
	///
	/// In the worst case, the total block length is going to be:
	/// `MAX(max)`
	pub max: PerDispatchClass<u32>,
}
impl Default for BlockLength {
	fn default() -> Self {
		BlockLength::max_with_normal_ratio(5 * 1024 * 1024, DEFAULT_NORMAL_RATIO)
	}
}
impl BlockLength {
	/// Create new `BlockLength` with `max` for every class.
	pub fn max(max: u32) -> Self {
		Self { max: PerDispatchClass::new(|_| max) }
	}

	/// Create new `BlockLength` with `max` for `Operational` & `Mandatory`
	/// and `normal * max` for `Normal`.
	pub fn max_with_normal_ratio(max: u32, normal: Perbill) -> Self {
		Self {
			max: PerDispatchClass::new(|class| {
				if class == DispatchClass::Normal {
					normal * max
				} else {
					max
				}
			}),
		}
	}
}

/// The ratio of the block weight and length available to normal dispatches by default.
const DEFAULT_NORMAL_RATIO: Perbill = Perbill::from_percent(75);

/// The configuration is inconsistent.
#[derive(Clone, Default, PartialEq, Eq, RuntimeDebug)]
pub struct ValidationErrors {
	pub has_errors: bool,
	pub errors: Vec<&'static str>,
}

macro_rules! error_assert {
	($cond:expr, $err:expr, $class:expr, $msg:expr $(,)?) => {
		if !$cond {
			log::error!(target: "runtime::system", "[{:?}] {}", $class, $msg);

			$err.has_errors = true;
			$err.errors.push($msg);
		}
	};
}

/// A result of validating `BlockWeights` correctness.
pub type ValidationResult = Result<BlockWeights, ValidationErrors>;

/// `DispatchClass`-specific weight configuration.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
pub struct WeightsPerClass {
	/// Base weight of single extrinsic of given class.
	pub base_extrinsic: Weight,
	/// Maximal weight of single extrinsic. Should NOT include `base_extrinsic` cost.
	///
	/// `None` indicates that this class of extrinsics doesn't have a limit.
	pub max_extrinsic: Option<Weight>,
	/// Block maximal total weight for all extrinsics of given class.
	///
	/// `None` indicates that weight sum of this class of extrinsics is not
	/// restricted. Use this value carefully, since it might produce heavily oversized
	/// blocks.
	///
	/// In the worst case, the total weight consumed by the class is going to be:
	/// `MAX(max_total) + MAX(reserved)`.
	pub max_total: Option<Weight>,
	/// Block reserved allowance for all extrinsics of a particular class.
	///
	/// Setting to `None` indicates that extrinsics of that class are allowed
	/// to go over total block weight (but at most `max_total` for that class).
	/// Setting to `Some(x)` guarantees that at least `x` weight of particular class
	/// is processed in every block.
	pub reserved: Option<Weight>,
}

/// Block weight limits & base values configuration.
///
/// This object is responsible for defining weight limits and base weight values tracked
/// during extrinsic execution.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
pub struct BlockWeights {
	/// Base weight of block execution.
	pub base_block: Weight,
	/// Maximal total weight consumed by all kinds of extrinsics (without `reserved` space).
	pub max_block: Weight,
	/// Weight limits for extrinsics of given dispatch class.
	pub per_class: PerDispatchClass<WeightsPerClass>,
}
impl Default for BlockWeights {
	fn default() -> Self {
		Self::with_sensible_defaults(
			Weight::from_parts(
				darwinia_support::weights::constants::WEIGHT_REF_TIME_PER_SECOND,
				u64::MAX,
			),
			DEFAULT_NORMAL_RATIO,
		)
	}
}
impl BlockWeights {
	/// Get per-class weight settings.
	pub fn get(&self, class: DispatchClass) -> &WeightsPerClass {
		self.per_class.get(class)
	}

	/// Verifies correctness of this `BlockWeights` object.
	pub fn validate(self) -> ValidationResult {
		fn or_max(w: Option<Weight>) -> Weight {
			w.unwrap_or(Weight::MAX)
		}

		let mut error = ValidationErrors::default();

		for class in DispatchClass::all() {
			let weights = self.per_class.get(*class);
			let max_for_class = or_max(weights.max_total);
			let base_for_class = weights.base_extrinsic;
			let reserved = or_max(weights.reserved);

			error_assert!(
				(max_for_class.all_gt(self.base_block) && max_for_class.all_gt(base_for_class))
					|| max_for_class == Weight::zero(),
				error,
				class,
				"total has to be greater than base block and base extrinsic",
			);
			error_assert!(
				weights
					.max_extrinsic
					.unwrap_or(Weight::zero())
					.all_lte(max_for_class.saturating_sub(base_for_class)),
				error,
				class,
				"max extrinsic can't be greater than max total minus base extrinsic",
			);
			error_assert!(
				weights.max_extrinsic.unwrap_or(Weight::MAX).all_gt(Weight::zero()),
				error,
				class,
				"max extrinsic has to be greater than zero",
			);
			error_assert!(
				reserved.all_gt(base_for_class) || reserved == Weight::zero(),
				error,
				class,
				"reserved has to be greater than base extrinsic",
			);
			error_assert!(
				!weights.max_total.unwrap_or(Weight::zero()).any_gt(self.max_block),
				error,
				class,
				"max block has to be greater than max total",
			);
			error_assert!(
				self.max_block.all_gt(base_for_class.saturating_add(self.base_block)),
				error,
				class,
				"max block has to fit at least one extrinsic",
			);
		}

		if error.has_errors {
			Err(error)
		} else {
			Ok(self)
		}
	}

	/// Create new weights definition, with both `Normal` and `Operational`
	/// classes limited to given weight.
	///
	/// Note there is no reservation for `Operational` class, so this constructor
	/// is not suitable for production deployments.
	pub fn simple_max(block_weight: Weight) -> Self {
		Self::builder()
			.base_block(Weight::zero())
			.for_class(DispatchClass::all(), |weights| {
				weights.base_extrinsic = Weight::zero();
			})
			.for_class(DispatchClass::non_mandatory(), |weights| {
				weights.max_total = Some(block_weight);
			})
			.build_or_panic()
	}

	/// Create a sensible default weights system given only expected maximal block weight and the
	/// ratio that `Normal` extrinsics should occupy.
	///
	/// Assumptions:
	///  - Average block initialization is assumed to be `10%`.
	///  - `Operational` transactions have reserved allowance (`1.0 - normal_ratio`)
	pub fn with_sensible_defaults(expected_block_weight: Weight, normal_ratio: Perbill) -> Self {
		let normal_weight = portion(normal_ratio, expected_block_weight);

		Self::builder()
			.for_class(DispatchClass::Normal, |weights| {
				weights.max_total = Some(normal_weight);
			})
			.for_class(DispatchClass::Operational, |weights| {
				weights.max_total = Some(expected_block_weight);
				weights.reserved = Some(expected_block_weight.saturating_sub(normal_weight));
			})
			.avg_block_initialization(Perbill::from_percent(10))
			.build_or_panic()
	}

	/// Start constructing new `BlockWeights` object.
	///
	/// By default all kinds except of `Mandatory` extrinsics are disallowed.
	pub fn builder() -> BlockWeightsBuilder {
		BlockWeightsBuilder {
			weights: BlockWeights {
				base_block: BLOCK_EXECUTION_WEIGHT,
				max_block: Weight::zero(),
				per_class: PerDispatchClass::new(|class| {
					let initial =
						if class == DispatchClass::Mandatory { None } else { Some(Weight::zero()) };

					WeightsPerClass {
						base_extrinsic: EXTRINSIC_BASE_WEIGHT,
						max_extrinsic: None,
						max_total: initial,
						reserved: initial,
					}
				}),
			},
			init_cost: None,
		}
	}
}

/// An opinionated builder for `Weights` object.
pub struct BlockWeightsBuilder {
	weights: BlockWeights,
	init_cost: Option<Perbill>,
}
impl BlockWeightsBuilder {
	/// Set base block weight.
	pub fn base_block(mut self, base_block: Weight) -> Self {
		self.weights.base_block = base_block;

		self
	}

	/// Average block initialization weight cost.
	///
	/// This value is used to derive maximal allowed extrinsic weight for each
	/// class, based on the allowance.
	///
	/// This is to make sure that extrinsics don't stay forever in the pool,
	/// because they could seemingly fit the block (since they are below `max_block`),
	/// but the cost of calling `on_initialize` always prevents them from being included.
	pub fn avg_block_initialization(mut self, init_cost: Perbill) -> Self {
		self.init_cost = Some(init_cost);

		self
	}

	/// Set parameters for particular class.
	///
	/// Note: `None` values of `max_extrinsic` will be overwritten in `build` in case
	/// `avg_block_initialization` rate is set to a non-zero value.
	pub fn for_class(
		mut self,
		class: impl OneOrMany<DispatchClass>,
		action: impl Fn(&mut WeightsPerClass),
	) -> Self {
		for class in class.into_iter() {
			action(self.weights.per_class.get_mut(class));
		}

		self
	}

	/// Construct the `BlockWeights` object.
	pub fn build(self) -> ValidationResult {
		let Self {
			mut weights,
			init_cost,
		} = self;

		// compute max block size.
		for class in DispatchClass::all() {
			weights.max_block = match weights.per_class.get(*class).max_total {
				Some(max) => max.max(weights.max_block),
				_ => weights.max_block,
			};
		}
		// compute max size of single extrinsic
		if let Some(init_weight) = init_cost.map(|rate| portion(rate, weights.max_block)) {
			for class in DispatchClass::all() {
				let per_class = weights.per_class.get_mut(*class);

				if per_class.max_extrinsic.is_none() {
					per_class.max_extrinsic = per_class
						.max_total
						.map(|x| x.saturating_sub(init_weight))
						.map(|x| x.saturating_sub(per_class.base_extrinsic));
				}
			}
		}

		weights.validate()
	}

	/// Construct the `BlockWeights` object or panic if it's invalid.
	///
	/// This is a convenience method to be called whenever you construct a runtime.
	///
	/// # Panics
	///
	/// If the limits are inconsistent, see [`BlockWeights::validate`].
	pub fn build_or_panic(self) -> BlockWeights {
		match self.build() {
			Ok(weights) => weights,
			Err(e) => panic!(
				"Builder finished with `build_or_panic`; The panic is expected if runtime weights \
				are not correct; {:?}",
				e
			),
		}
	}
}

/// Either a single value or a list of them.
pub trait OneOrMany<T> {
	type Iter: Iterator<Item = T>;

	fn into_iter(self) -> Self::Iter;
}
impl OneOrMany<DispatchClass> for DispatchClass {
	type Iter = iter::Once<DispatchClass>;

	fn into_iter(self) -> Self::Iter {
		iter::once(self)
	}
}
impl<'a> OneOrMany<DispatchClass> for &'a [DispatchClass] {
	type Iter = iter::Cloned<slice::Iter<'a, DispatchClass>>;

	fn into_iter(self) -> Self::Iter {
		self.iter().cloned()
	}
}

fn portion(ratio: Perbill, weight: Weight) -> Weight {
	Weight::from_parts(ratio * weight.ref_time(), ratio * weight.proof_size())
}
