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

//! Withdrawing and refunding the fee of a transaction.

// --- core ---
use core::marker::PhantomData;
// --- paritytech ---
use sp_runtime::{
	traits::Zero,
	transaction_validity::{InvalidTransaction, TransactionValidityError},
};
// --- darwinia-network ---
use crate::Config;
use darwinia_support::{
	balance::{
		lock::WithdrawReasons, Currency, ExistenceRequirement, Imbalance, OnUnbalanced,
		SameOrOther,
	},
	dispatch::{DispatchInfo, PostDispatchInfo},
	storage::Storage,
	Balance,
};

/// Handle withdrawing, refunding and depositing of transaction fees.
pub trait OnChargeTransaction<T: Config> {
	/// Whatever was withdrawn before the dispatch and has to be settled after it.
	type LiquidityInfo: Default;

	/// Before the transaction is executed the payment of the transaction fees needs to be secured.
	///
	/// Note: The `fee` already includes the `tip`.
	fn withdraw_fee(
		ext: &mut dyn Storage,
		who: &T::AccountId,
		dispatch_info: &DispatchInfo,
		fee: Balance,
		tip: Balance,
	) -> Result<Self::LiquidityInfo, TransactionValidityError>;

	/// After the transaction was executed the actual fee can be calculated.
	/// This function should refund any overpaid fees and optionally deposit
	/// the corrected amount.
	///
	/// Note: The `fee` already includes the `tip`.
	#[allow(clippy::too_many_arguments)]
	fn correct_and_deposit_fee(
		ext: &mut dyn Storage,
		who: &T::AccountId,
		dispatch_info: &DispatchInfo,
		post_info: &PostDispatchInfo,
		corrected_fee: Balance,
		tip: Balance,
		already_withdrawn: Self::LiquidityInfo,
	) -> Result<(), TransactionValidityError>;
}

/// Implements the transaction payment for a module implementing the `Currency`
/// trait (eg. the balances module) using an unbalance handler (implementing
/// `OnUnbalanced`).
///
/// The unbalance handler is given 2 unbalanceds in [`OnUnbalanced::on_unbalanceds`]: fee and
/// then tip.
pub struct CurrencyAdapter<C, OU>(PhantomData<(C, OU)>);
impl<T, C, OU> OnChargeTransaction<T> for CurrencyAdapter<C, OU>
where
	T: Config,
	C: Currency<T::AccountId>,
	OU: OnUnbalanced<C::NegativeImbalance>,
{
	type LiquidityInfo = Option<C::NegativeImbalance>;

	/// Withdraw the predicted fee from the transaction origin.
	///
	/// Note: The `fee` already includes the `tip`.
	fn withdraw_fee(
		ext: &mut dyn Storage,
		who: &T::AccountId,
		_dispatch_info: &DispatchInfo,
		fee: Balance,
		tip: Balance,
	) -> Result<Self::LiquidityInfo, TransactionValidityError> {
		if fee.is_zero() {
			return Ok(None);
		}

		let withdraw_reason = if tip.is_zero() {
			WithdrawReasons::TRANSACTION_PAYMENT
		} else {
			WithdrawReasons::TRANSACTION_PAYMENT | WithdrawReasons::TIP
		};

		match C::withdraw(ext, who, fee, withdraw_reason, ExistenceRequirement::KeepAlive) {
			Ok(imbalance) => Ok(Some(imbalance)),
			Err(_) => Err(InvalidTransaction::Payment.into()),
		}
	}

	/// Hand the fee and the tip over to the `OnUnbalanced` implementation.
	/// Since the predicted fee might have been too high, parts of the fee may
	/// be refunded.
	///
	/// Note: The `corrected_fee` already includes the `tip`.
	fn correct_and_deposit_fee(
		ext: &mut dyn Storage,
		who: &T::AccountId,
		_dispatch_info: &DispatchInfo,
		_post_info: &PostDispatchInfo,
		corrected_fee: Balance,
		tip: Balance,
		already_withdrawn: Self::LiquidityInfo,
	) -> Result<(), TransactionValidityError> {
		let paid = match already_withdrawn {
			Some(paid) => paid,
			None => return Ok(()),
		};
		// Calculate how much refund we should return.
		let refund_amount = paid.peek().saturating_sub(corrected_fee);
		// Refund to the account that paid the fees. If this fails, the account might have
		// dropped below the existential balance. In that case we don't refund anything.
		let refund_imbalance = C::deposit_into_existing(ext, who, refund_amount)
			.unwrap_or_else(|_| C::PositiveImbalance::zero());
		// Merge the imbalance caused by paying the fees and refunding parts of it again.
		let adjusted_paid = match paid.offset(refund_imbalance) {
			SameOrOther::Same(adjusted_paid) => adjusted_paid,
			SameOrOther::None => C::NegativeImbalance::zero(),
			SameOrOther::Other(over_refund) => {
				log::error!(
					target: "runtime::transaction-payment",
					"refunded {} more than {:?} has paid",
					over_refund.peek(),
					who,
				);

				over_refund.resolve(ext);

				return Err(InvalidTransaction::Payment.into());
			}
		};
		// Call someone else to handle the imbalance (fee and tip separately).
		let (tip, fee) = adjusted_paid.split(tip);

		OU::on_unbalanceds(ext, Some(fee).into_iter().chain(Some(tip)));

		Ok(())
	}
}
