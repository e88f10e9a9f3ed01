//! Dispatches incoming extrinsic calls to the respective modules in the runtime.
//!
//! An extrinsic goes through the block limits, the nonce and the fee checks before its call is
//! dispatched inside of a storage layer. Whatever happens to the call, the fee is settled and the
//! outcome is noted by the system module afterwards. An extrinsic which is not valid leaves no
//! trace in storage.

// --- core ---
use core::marker::PhantomData;
// --- crates.io ---
use codec::{Decode, Encode};
use scale_info::TypeInfo;
// --- paritytech ---
use sp_runtime::{
	traits::Get,
	transaction_validity::{
		InvalidTransaction, TransactionValidity, TransactionValidityError, UnknownTransaction,
	},
	ApplyExtrinsicResult, DispatchError, RuntimeDebug, TransactionOutcome,
};
use sp_std::prelude::*;
// --- darwinia-network ---
use darwinia_support::{
	dispatch::{DispatchClass, DispatchInfo, Dispatchable, FatalError, GetDispatchInfo},
	registry::CallRegistry,
	storage::{with_storage_layer, with_transaction, Storage},
	Balance,
};
use darwinia_system::{CheckNonce, CheckWeight, Origin, RawOrigin};
use darwinia_transaction_payment::{ChargeTransactionPayment, Pre};

/// What a signer attaches to its call.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
pub struct SignedExtra<Nonce> {
	#[codec(compact)]
	pub nonce: Nonce,
	#[codec(compact)]
	pub tip: Balance,
}

/// An extrinsic whose signature, if any, has already been checked.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
pub struct CheckedExtrinsic<AccountId, Nonce, Call> {
	/// Who signed it and what it attached, `None` for an unsigned extrinsic.
	pub signed: Option<(AccountId, SignedExtra<Nonce>)>,
	/// The call to dispatch.
	pub function: Call,
}

/// Main entry point for certain runtime actions as e.g. `execute_block`.
///
/// Generic parameters:
/// - `T`: The runtime, configuring every module the executive touches.
/// - `Call`: The outer call type of the runtime.
pub struct Executive<T, Call>(PhantomData<(T, Call)>);
impl<T, Call> Executive<T, Call>
where
	T: darwinia_transaction_payment::Config,
	Call: Encode + GetDispatchInfo + Dispatchable<RuntimeOrigin = Origin<T>>,
{
	/// Start a new block.
	pub fn initialize_block(ext: &mut dyn Storage, number: &T::BlockNumber) {
		<darwinia_system::Pallet<T>>::reset_events(ext);
		<darwinia_system::Pallet<T>>::initialize(ext, number);
		<darwinia_system::Pallet<T>>::register_extra_weight_unchecked(
			ext,
			T::BlockWeights::get().base_block,
			DispatchClass::Mandatory,
		);
		<darwinia_system::Pallet<T>>::note_finished_initialize(ext);
	}

	/// Apply an extrinsic inside of the block execution.
	///
	/// `Ok(Err(_))` means the extrinsic is not valid and has been rolled back entirely. A failing
	/// mandatory call makes the whole block invalid, which is reported as a [`FatalError`].
	pub fn apply_extrinsic(
		ext: &mut dyn Storage,
		xt: CheckedExtrinsic<T::AccountId, T::Nonce, Call>,
		len: usize,
	) -> Result<ApplyExtrinsicResult, FatalError> {
		let applied = with_transaction(ext, |ext| {
			let r = Self::do_apply_extrinsic(ext, xt, len);

			match &r {
				Ok(Ok(_)) => TransactionOutcome::Commit(Ok::<_, DispatchError>(r)),
				_ => TransactionOutcome::Rollback(Ok(r)),
			}
		});

		match applied {
			Ok(r) => r,
			Err(e) => {
				log::error!(
					target: "runtime::executive",
					"Unable to open a storage layer, {:?}",
					e,
				);

				Ok(Err(InvalidTransaction::ExhaustsResources.into()))
			}
		}
	}

	/// Decode `call` through `registry` and apply it as signed by `signed`.
	///
	/// The length charged for is the one of the extrinsic carrying the call.
	pub fn apply_encoded(
		ext: &mut dyn Storage,
		registry: &CallRegistry<Call>,
		signed: Option<(T::AccountId, SignedExtra<T::Nonce>)>,
		call: &[u8],
	) -> Result<ApplyExtrinsicResult, FatalError> {
		let function = match registry.decode_all(call) {
			Ok(function) => function,
			Err(e) => {
				log::debug!(target: "runtime::executive", "Undecodable call, {:?}", e);

				return Ok(Err(InvalidTransaction::Call.into()));
			}
		};
		let len = signed.encoded_size().saturating_add(call.len());

		Self::apply_extrinsic(ext, CheckedExtrinsic { signed, function }, len)
	}

	/// Check a transaction for the pool. Never changes storage.
	pub fn validate_transaction(
		ext: &mut dyn Storage,
		xt: &CheckedExtrinsic<T::AccountId, T::Nonce, Call>,
		len: usize,
	) -> TransactionValidity {
		let info = xt.function.get_dispatch_info();

		if info.class == DispatchClass::Mandatory {
			return Err(InvalidTransaction::MandatoryValidation.into());
		}

		let valid = <CheckWeight<T>>::do_validate(ext, &info, len)?;

		match &xt.signed {
			Some((who, SignedExtra { nonce, tip })) => Ok(valid
				.combine_with(<CheckNonce<T>>::from(*nonce).validate(ext, who)?)
				.combine_with(
					<ChargeTransactionPayment<T>>::from(*tip).validate(ext, who, &info, len)?,
				)),
			None => Err(UnknownTransaction::NoUnsignedValidator.into()),
		}
	}

	/// Finalize the block, the fee multiplier of the next one is updated here.
	pub fn finalize_block(ext: &mut dyn Storage) {
		<darwinia_system::Pallet<T>>::note_finished_extrinsics(ext);
		<darwinia_transaction_payment::Pallet<T>>::on_finalize(ext);
		<darwinia_system::Pallet<T>>::finalize(ext);
	}

	/// Execute a whole block. Every extrinsic in it has to be valid.
	pub fn execute_block(
		ext: &mut dyn Storage,
		number: T::BlockNumber,
		extrinsics: Vec<CheckedExtrinsic<T::AccountId, T::Nonce, Call>>,
	) -> Result<(), FatalError> {
		Self::initialize_block(ext, &number);

		for xt in extrinsics {
			let len = xt.encoded_size();

			if let Err(e) = Self::apply_extrinsic(ext, xt, len)? {
				log::debug!(
					target: "runtime::executive",
					"Invalid extrinsic in block({:?}), {:?}",
					number,
					e,
				);

				return Err(FatalError::InvalidExtrinsic(e));
			}
		}

		Self::finalize_block(ext);

		Ok(())
	}

	fn do_apply_extrinsic(
		ext: &mut dyn Storage,
		xt: CheckedExtrinsic<T::AccountId, T::Nonce, Call>,
		len: usize,
	) -> Result<ApplyExtrinsicResult, FatalError> {
		let CheckedExtrinsic { signed, function } = xt;
		let info = function.get_dispatch_info();
		let (origin, maybe_pre) = match Self::pre_dispatch(ext, signed, &info, len) {
			Ok(checked) => checked,
			Err(e) => return Ok(Err(e)),
		};
		let r = with_storage_layer(ext, |ext| function.dispatch(ext, origin));
		let post_info = match &r {
			Ok(post_info) => *post_info,
			Err(e) => e.post_info,
		};
		let dispatch_result = r.as_ref().map(|_| ()).map_err(|e| e.error);

		<CheckWeight<T>>::do_post_dispatch(ext, &info, &post_info);

		if let Err(e) = <ChargeTransactionPayment<T>>::post_dispatch(
			ext,
			maybe_pre,
			&info,
			&post_info,
			len,
			&dispatch_result,
		) {
			return Ok(Err(e));
		}

		<darwinia_system::Pallet<T>>::note_applied_extrinsic(ext, &r, info);

		if info.class == DispatchClass::Mandatory {
			if let Err(e) = dispatch_result {
				log::error!(target: "runtime::executive", "Mandatory call failed, {:?}", e);

				return Err(FatalError::BadMandatory(e));
			}
		}

		Ok(Ok(dispatch_result))
	}

	#[allow(clippy::type_complexity)]
	fn pre_dispatch(
		ext: &mut dyn Storage,
		signed: Option<(T::AccountId, SignedExtra<T::Nonce>)>,
		info: &DispatchInfo,
		len: usize,
	) -> Result<(Origin<T>, Option<Pre<T>>), TransactionValidityError> {
		<CheckWeight<T>>::do_pre_dispatch(ext, info, len)?;

		match signed {
			Some((who, SignedExtra { nonce, tip })) => {
				// Mandatory calls are only ever put into a block by its author.
				if info.class == DispatchClass::Mandatory {
					return Err(InvalidTransaction::BadMandatory.into());
				}

				<CheckNonce<T>>::from(nonce).pre_dispatch(ext, &who)?;

				let pre =
					<ChargeTransactionPayment<T>>::from(tip).pre_dispatch(ext, &who, info, len)?;

				Ok((RawOrigin::Signed(who), Some(pre)))
			}
			None => Ok((RawOrigin::None, None)),
		}
	}
}
