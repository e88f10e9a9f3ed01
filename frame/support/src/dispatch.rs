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

//! The outcome envelope of a dispatched call and the information needed before dispatching it.

// --- crates.io ---
use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
// --- paritytech ---
use sp_runtime::{
	transaction_validity::TransactionValidityError, DispatchError, DispatchResult, RuntimeDebug,
};
// --- darwinia-network ---
use crate::{storage::Storage, weights::Weight};

/// The result of a dispatch which also carries the post dispatch information.
pub type DispatchResultWithPostInfo = Result<PostDispatchInfo, DispatchErrorWithPostInfo>;

/// A generalized group of dispatch types.
#[derive(
	Clone, Copy, Default, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug,
)]
pub enum DispatchClass {
	/// A normal dispatch.
	#[default]
	Normal,
	/// An operational dispatch.
	Operational,
	/// A mandatory dispatch. These kinds of dispatch are always included regardless of their
	/// weight, therefore it is critical that they are separately validated to ensure that a
	/// malicious validator cannot craft a valid but impossibly heavy block.
	Mandatory,
}
impl DispatchClass {
	pub fn all() -> &'static [DispatchClass] {
		&[DispatchClass::Normal, DispatchClass::Operational, DispatchClass::Mandatory]
	}

	pub fn non_mandatory() -> &'static [DispatchClass] {
		&[DispatchClass::Normal, DispatchClass::Operational]
	}
}

/// A struct holding value for each `DispatchClass`.
#[derive(Clone, Default, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub struct PerDispatchClass<T> {
	normal: T,
	operational: T,
	mandatory: T,
}
impl<T> PerDispatchClass<T> {
	pub fn new(val: impl Fn(DispatchClass) -> T) -> Self {
		Self {
			normal: val(DispatchClass::Normal),
			operational: val(DispatchClass::Operational),
			mandatory: val(DispatchClass::Mandatory),
		}
	}

	pub fn get(&self, class: DispatchClass) -> &T {
		match class {
			DispatchClass::Normal => &self.normal,
			DispatchClass::Operational => &self.operational,
			DispatchClass::Mandatory => &self.mandatory,
		}
	}

	pub fn get_mut(&mut self, class: DispatchClass) -> &mut T {
		match class {
			DispatchClass::Normal => &mut self.normal,
			DispatchClass::Operational => &mut self.operational,
			DispatchClass::Mandatory => &mut self.mandatory,
		}
	}
}
impl PerDispatchClass<Weight> {
	/// Sum of all the classes.
	pub fn total(&self) -> Weight {
		self.normal.saturating_add(self.operational).saturating_add(self.mandatory)
	}

	pub fn add(&mut self, weight: Weight, class: DispatchClass) {
		self.get_mut(class).saturating_accrue(weight);
	}

	/// Fails without touching anything on overflow.
	pub fn checked_add(&mut self, weight: Weight, class: DispatchClass) -> Result<(), ()> {
		let value = self.get_mut(class);

		*value = value.checked_add(&weight).ok_or(())?;

		Ok(())
	}

	pub fn sub(&mut self, weight: Weight, class: DispatchClass) {
		self.get_mut(class).saturating_reduce(weight);
	}
}

/// Explicit enum to denote if a transaction pays fee or not.
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub enum Pays {
	/// Transactor will pay related fees.
	Yes,
	/// Transactor will NOT pay related fees.
	No,
}
impl Default for Pays {
	fn default() -> Self {
		Self::Yes
	}
}

/// A bundle of static information collected from the weight annotations of a call.
#[derive(Clone, Copy, Default, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
pub struct DispatchInfo {
	/// Weight of this transaction.
	pub weight: Weight,
	/// Class of this transaction.
	pub class: DispatchClass,
	/// Does this transaction pay fees.
	pub pays_fee: Pays,
}

/// Weight information that is only available post dispatch.
#[derive(Clone, Copy, Default, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
pub struct PostDispatchInfo {
	/// Actual weight consumed by a call or `None` which stands for the worst case static weight.
	pub actual_weight: Option<Weight>,
	/// Whether this transaction should pay fees when all is said and done.
	pub pays_fee: Pays,
}
impl PostDispatchInfo {
	/// Calculate how much (if any) weight was not used by the `Dispatchable`.
	pub fn calc_unspent(&self, info: &DispatchInfo) -> Weight {
		info.weight.saturating_sub(self.calc_actual_weight(info))
	}

	/// Calculate how much weight was actually spent by the `Dispatchable`.
	///
	/// Never more than the declared weight.
	pub fn calc_actual_weight(&self, info: &DispatchInfo) -> Weight {
		if let Some(actual_weight) = self.actual_weight {
			actual_weight.min(info.weight)
		} else {
			info.weight
		}
	}

	/// Determine if user should actually pay fees at the end of the dispatch.
	pub fn pays_fee(&self, info: &DispatchInfo) -> Pays {
		// If they originally were not paying fees, or the post dispatch info
		// says they should not pay fees, then they don't pay fees.
		if info.pays_fee == Pays::No || self.pays_fee == Pays::No {
			Pays::No
		} else {
			Pays::Yes
		}
	}
}
impl From<()> for PostDispatchInfo {
	fn from(_: ()) -> Self {
		Self { actual_weight: None, pays_fee: Default::default() }
	}
}
impl From<Option<Weight>> for PostDispatchInfo {
	fn from(actual_weight: Option<Weight>) -> Self {
		Self { actual_weight, pays_fee: Default::default() }
	}
}
impl From<Pays> for PostDispatchInfo {
	fn from(pays_fee: Pays) -> Self {
		Self { actual_weight: None, pays_fee }
	}
}

/// The error of a failed dispatch together with the weight it consumed before failing.
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
pub struct DispatchErrorWithPostInfo {
	/// Additional information about the `Dispatchable` which is only known post dispatch.
	pub post_info: PostDispatchInfo,
	/// The actual `DispatchResult` indicating whether the dispatch was successful.
	pub error: DispatchError,
}
impl<E> From<E> for DispatchErrorWithPostInfo
where
	E: Into<DispatchError>,
{
	fn from(error: E) -> Self {
		Self { post_info: Default::default(), error: error.into() }
	}
}

/// Attach a weight to an error.
pub trait WithPostDispatchInfo {
	fn with_weight(self, actual_weight: Weight) -> DispatchErrorWithPostInfo;
}
impl<T> WithPostDispatchInfo for T
where
	T: Into<DispatchError>,
{
	fn with_weight(self, actual_weight: Weight) -> DispatchErrorWithPostInfo {
		DispatchErrorWithPostInfo {
			post_info: PostDispatchInfo { actual_weight: Some(actual_weight), pays_fee: Pays::Yes },
			error: self.into(),
		}
	}
}

/// Extract the actual weight from a dispatch result if any or fall back to the default weight.
pub fn extract_actual_weight(result: &DispatchResultWithPostInfo, info: &DispatchInfo) -> Weight {
	match result {
		Ok(post_info) => post_info,
		Err(err) => &err.post_info,
	}
	.calc_actual_weight(info)
}

/// Extract the actual pays_fee from a dispatch result if any or fall back to the default.
pub fn extract_actual_pays_fee(result: &DispatchResultWithPostInfo, info: &DispatchInfo) -> Pays {
	match result {
		Ok(post_info) => post_info,
		Err(err) => &err.post_info,
	}
	.pays_fee(info)
}

/// Strip the post info from a dispatch result.
pub fn into_dispatch_result(result: DispatchResultWithPostInfo) -> DispatchResult {
	result.map(|_| ()).map_err(|e| e.error)
}

/// Means of weighing some particular kind of data (`T`).
pub trait WeighData<T> {
	/// Weigh the data `T` given by `target`. When implementing this for a dispatchable, `T` will be
	/// a tuple of all arguments given to the function (except origin).
	fn weigh_data(&self, target: T) -> Weight;
}

/// Means of classifying a dispatchable function.
pub trait ClassifyDispatch<T> {
	/// Classify the dispatch function based on input data `target` of type `T`. When implementing
	/// this for a dispatchable, `T` will be a tuple of all arguments given to the function (except
	/// origin).
	fn classify_dispatch(&self, target: T) -> DispatchClass;
}

/// Indicates if dispatch function should pay fees or not.
///
/// If set to `Pays::No`, the block resource limits are applied, yet no fee is deducted.
pub trait PaysFee<T> {
	fn pays_fee(&self, _target: T) -> Pays;
}

// A bare base weight only charges ref time, is a normal dispatch and pays its fee.
impl<T> WeighData<T> for Weight {
	fn weigh_data(&self, _: T) -> Weight {
		Weight::from_parts(self.ref_time(), 0)
	}
}
impl<T> ClassifyDispatch<T> for Weight {
	fn classify_dispatch(&self, _: T) -> DispatchClass {
		DispatchClass::Normal
	}
}
impl<T> PaysFee<T> for Weight {
	fn pays_fee(&self, _: T) -> Pays {
		Pays::Yes
	}
}

impl<T> WeighData<T> for (Weight, DispatchClass, Pays) {
	fn weigh_data(&self, args: T) -> Weight {
		self.0.weigh_data(args)
	}
}
impl<T> ClassifyDispatch<T> for (Weight, DispatchClass, Pays) {
	fn classify_dispatch(&self, _: T) -> DispatchClass {
		self.1
	}
}
impl<T> PaysFee<T> for (Weight, DispatchClass, Pays) {
	fn pays_fee(&self, _: T) -> Pays {
		self.2
	}
}

impl<T> WeighData<T> for (Weight, DispatchClass) {
	fn weigh_data(&self, args: T) -> Weight {
		self.0.weigh_data(args)
	}
}
impl<T> ClassifyDispatch<T> for (Weight, DispatchClass) {
	fn classify_dispatch(&self, _: T) -> DispatchClass {
		self.1
	}
}
impl<T> PaysFee<T> for (Weight, DispatchClass) {
	fn pays_fee(&self, _: T) -> Pays {
		Pays::Yes
	}
}

impl<T> WeighData<T> for (Weight, Pays) {
	fn weigh_data(&self, args: T) -> Weight {
		self.0.weigh_data(args)
	}
}
impl<T> ClassifyDispatch<T> for (Weight, Pays) {
	fn classify_dispatch(&self, _: T) -> DispatchClass {
		DispatchClass::Normal
	}
}
impl<T> PaysFee<T> for (Weight, Pays) {
	fn pays_fee(&self, _: T) -> Pays {
		self.1
	}
}

/// Build the dispatch info of a call from its base weight annotation and arguments.
pub fn dispatch_info_of<A, W>(base: W, args: A) -> DispatchInfo
where
	A: Copy,
	W: WeighData<A> + ClassifyDispatch<A> + PaysFee<A>,
{
	DispatchInfo {
		weight: base.weigh_data(args),
		class: base.classify_dispatch(args),
		pays_fee: base.pays_fee(args),
	}
}

/// A `Dispatchable` function (aka transaction) that can carry some static information along with
/// it, using the `#[pallet::weight]` attribute.
pub trait GetDispatchInfo {
	/// Return a `DispatchInfo`, containing relevant information of this dispatch.
	///
	/// This is done independently of its encoded size.
	fn get_dispatch_info(&self) -> DispatchInfo;
}

/// A call which can be dispatched against some storage.
pub trait Dispatchable {
	type RuntimeOrigin;

	fn dispatch(
		self,
		ext: &mut dyn Storage,
		origin: Self::RuntimeOrigin,
	) -> DispatchResultWithPostInfo;
}

/// The function index of a call within its module.
pub trait GetCallIndex {
	/// Return all call indices in the same order as [`GetCallName::get_call_names`].
	fn get_call_indices() -> &'static [u8];

	fn get_call_index(&self) -> u8;
}

/// The function name of a call.
pub trait GetCallName {
	/// Return all function names in the same order as [`GetCallIndex::get_call_indices`].
	fn get_call_names() -> &'static [&'static str];

	fn get_call_name(&self) -> &'static str;
}

/// Something unrecoverable happened while processing a block.
///
/// Kept apart from `DispatchError` so it can never be swallowed by a dispatch.
#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub enum FatalError {
	/// A mandatory call failed.
	BadMandatory(DispatchError),
	/// An extrinsic inside a block to execute is not valid.
	InvalidExtrinsic(TransactionValidityError),
	/// The genesis configuration is inconsistent.
	InvalidGenesis(&'static str),
}
