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

// --- paritytech ---
use sp_runtime::{
	traits::{Bounded, One, Zero},
	transaction_validity::InvalidTransaction,
};
// --- darwinia-network ---
use crate::{mock::*, *};
use darwinia_balances::Call as BalancesCall;
use darwinia_support::{
	assert_noop, assert_ok, assert_storage_noop, balance::Currency, parameter_types,
};
use darwinia_system::RawOrigin;

fn charge(tip: Balance) -> ChargeTransactionPayment<Runtime> {
	ChargeTransactionPayment::from(tip)
}

#[test]
fn signed_extension_transaction_payment_work() {
	let mut ext =
		ExtBuilder::default().balance_factor(10).base_weight(Weight::from_parts(5, 0)).build();
	let len = 10;

	let pre = charge(0)
		.pre_dispatch(&mut ext, &1, &info_from_weight(Weight::from_parts(5, 0)), len)
		.unwrap();
	assert_eq!(Balances::free_balance(&ext, &1), 100 - 5 - 5 - 10);

	assert_ok!(ChargeTransactionPayment::<Runtime>::post_dispatch(
		&mut ext,
		Some(pre),
		&info_from_weight(Weight::from_parts(5, 0)),
		&default_post_info(),
		len,
		&Ok(())
	));
	assert_eq!(Balances::free_balance(&ext, &1), 100 - 5 - 5 - 10);
	assert_eq!(FeeUnbalancedAmount::get(), 5 + 5 + 10);
	assert_eq!(TipUnbalancedAmount::get(), 0);

	FeeUnbalancedAmount::set(0);

	let pre = charge(5)
		.pre_dispatch(&mut ext, &2, &info_from_weight(Weight::from_parts(100, 0)), len)
		.unwrap();
	assert_eq!(Balances::free_balance(&ext, &2), 200 - 5 - 10 - 100 - 5);

	assert_ok!(ChargeTransactionPayment::<Runtime>::post_dispatch(
		&mut ext,
		Some(pre),
		&info_from_weight(Weight::from_parts(100, 0)),
		&post_info_from_weight(Weight::from_parts(50, 0)),
		len,
		&Ok(())
	));
	assert_eq!(Balances::free_balance(&ext, &2), 200 - 5 - 10 - 50 - 5);
	assert_eq!(FeeUnbalancedAmount::get(), 5 + 10 + 50);
	assert_eq!(TipUnbalancedAmount::get(), 5);
	assert_eq!(Balances::total_issuance(&ext), 2100 - 20 - 70);
	assert!(events(&mut ext).contains(&RuntimeEvent::TransactionPayment(
		Event::TransactionFeePaid { who: 2, actual_fee: 70, tip: 5 }
	)));
}

#[test]
fn signed_extension_transaction_payment_multiplied_refund_works() {
	let mut ext =
		ExtBuilder::default().balance_factor(10).base_weight(Weight::from_parts(5, 0)).build();
	let len = 10;

	NextFeeMultiplier::put(&mut ext, &Multiplier::saturating_from_rational(3, 2));

	let pre = charge(5)
		.pre_dispatch(&mut ext, &2, &info_from_weight(Weight::from_parts(100, 0)), len)
		.unwrap();
	// 5 base fee, 10 byte fee, 3/2 * 100 weight fee, 5 tip
	assert_eq!(Balances::free_balance(&ext, &2), 200 - 5 - 10 - 150 - 5);

	assert_ok!(ChargeTransactionPayment::<Runtime>::post_dispatch(
		&mut ext,
		Some(pre),
		&info_from_weight(Weight::from_parts(100, 0)),
		&post_info_from_weight(Weight::from_parts(50, 0)),
		len,
		&Ok(())
	));
	// 75 (3/2 of the returned 50 units of weight) is refunded
	assert_eq!(Balances::free_balance(&ext, &2), 200 - 5 - 10 - 75 - 5);
}

#[test]
fn signed_extension_transaction_payment_is_bounded() {
	let mut ext = ExtBuilder::default().balance_factor(1000).byte_fee(0).build();
	let info = info_from_weight(Weight::MAX);

	// maximum weight possible
	let pre = charge(0).pre_dispatch(&mut ext, &1, &info, 10).unwrap();
	// fee will be proportional to what is the actual maximum weight in the runtime.
	assert_eq!(
		Balances::free_balance(&ext, &1),
		10000 - <Runtime as darwinia_system::Config>::BlockWeights::get().max_block.ref_time()
			as Balance
	);

	assert_ok!(ChargeTransactionPayment::<Runtime>::post_dispatch(
		&mut ext,
		Some(pre),
		&info,
		&default_post_info(),
		10,
		&Ok(())
	));
	assert_eq!(Balances::free_balance(&ext, &1), 10000 - 1024);
}

#[test]
fn signed_extension_allows_free_transactions() {
	let mut ext =
		ExtBuilder::default().base_weight(Weight::from_parts(100, 0)).balance_factor(0).build();

	// 1 ain't have a penny.
	assert_eq!(Balances::free_balance(&ext, &1), 0);

	let len = 100;
	// This is a completely free (and thus wholly insecure/DoS-ridden) transaction.
	let operational_transaction = DispatchInfo {
		weight: Weight::from_parts(0, 0),
		class: DispatchClass::Operational,
		pays_fee: Pays::No,
	};

	assert_ok!(charge(0).validate(&mut ext, &1, &operational_transaction, len));

	// like a InsecureFreeNormal
	let free_transaction = DispatchInfo {
		weight: Weight::from_parts(0, 0),
		class: DispatchClass::Normal,
		pays_fee: Pays::Yes,
	};

	assert_noop!(
		ext,
		charge(0).validate(&mut ext, &1, &free_transaction, len),
		TransactionValidityError::Invalid(InvalidTransaction::Payment)
	);
}

#[test]
fn length_fee_is_not_scaled_by_the_multiplier() {
	let mut ext =
		ExtBuilder::default().base_weight(Weight::from_parts(5, 0)).balance_factor(10).build();
	let info = info_from_weight(Weight::from_parts(3, 0));

	// only the weight fee is x1.5
	NextFeeMultiplier::put(&mut ext, &Multiplier::saturating_from_rational(3, 2));

	let len = 10;
	let pre = charge(10).pre_dispatch(&mut ext, &1, &info, len).unwrap();

	assert_eq!(
		Balances::free_balance(&ext, &1),
		100 // original
			- 10 // tip
			- 5 // base
			- 10 // len
			- (3 * 3 / 2) // adjusted weight
	);
	assert_ok!(ChargeTransactionPayment::<Runtime>::post_dispatch(
		&mut ext,
		Some(pre),
		&info,
		&default_post_info(),
		len,
		&Ok(())
	));
}

#[test]
fn query_info_and_fee_details_works() {
	let call = BalancesCall::<Runtime>::transfer { dest: 2, value: 69 };
	let info = call.get_dispatch_info();
	let len = 20;
	let mut ext =
		ExtBuilder::default().base_weight(Weight::from_parts(5, 0)).weight_fee(2).build();

	// all fees should be x1.5
	NextFeeMultiplier::put(&mut ext, &Multiplier::saturating_from_rational(3, 2));

	let adjusted_weight_fee = info
		.weight
		.min(<Runtime as darwinia_system::Config>::BlockWeights::get().max_block)
		.ref_time() as Balance
		* 2 * 3 / 2;

	assert_eq!(
		TransactionPayment::query_info(&ext, &call, len, true),
		RuntimeDispatchInfo {
			weight: info.weight,
			class: info.class,
			partial_fee: 5 * 2 /* base * weight_fee */
				+ len as Balance /* len * 1 */
				+ adjusted_weight_fee,
		},
	);
	assert_eq!(
		TransactionPayment::query_info(&ext, &call, len, false),
		RuntimeDispatchInfo { weight: info.weight, class: info.class, partial_fee: 0 },
	);
	assert_eq!(
		TransactionPayment::query_fee_details(&ext, &call, len, true),
		FeeDetails {
			inclusion_fee: Some(InclusionFee {
				base_fee: 5 * 2,
				len_fee: len as Balance,
				adjusted_weight_fee,
			}),
			tip: 0,
		},
	);
	assert_eq!(
		TransactionPayment::query_fee_details(&ext, &call, len, false),
		FeeDetails { inclusion_fee: None, tip: 0 },
	);
}

#[test]
fn compute_fee_works_without_multiplier() {
	let ext = ExtBuilder::default()
		.base_weight(Weight::from_parts(100, 0))
		.byte_fee(10)
		.balance_factor(0)
		.build();

	// Next fee multiplier is the default one
	assert!(!NextFeeMultiplier::exists(&ext));
	assert_eq!(TransactionPayment::next_fee_multiplier(&ext), Multiplier::one());

	// Tip only, no fees works
	let dispatch_info = DispatchInfo {
		weight: Weight::from_parts(0, 0),
		class: DispatchClass::Operational,
		pays_fee: Pays::No,
	};
	assert_eq!(TransactionPayment::compute_fee(&ext, 0, &dispatch_info, 10), 10);

	// No tip, only base fee works
	let dispatch_info = DispatchInfo {
		weight: Weight::from_parts(0, 0),
		class: DispatchClass::Operational,
		pays_fee: Pays::Yes,
	};
	assert_eq!(TransactionPayment::compute_fee(&ext, 0, &dispatch_info, 0), 100);
	// Tip + base fee works
	assert_eq!(TransactionPayment::compute_fee(&ext, 0, &dispatch_info, 69), 169);
	// Len (byte fee) + base fee works
	assert_eq!(TransactionPayment::compute_fee(&ext, 42, &dispatch_info, 0), 520);

	// Weight fee + base fee works
	let dispatch_info = DispatchInfo {
		weight: Weight::from_parts(1000, 0),
		class: DispatchClass::Operational,
		pays_fee: Pays::Yes,
	};
	assert_eq!(TransactionPayment::compute_fee(&ext, 0, &dispatch_info, 0), 1100);
}

#[test]
fn compute_fee_works_with_multiplier() {
	let mut ext = ExtBuilder::default()
		.base_weight(Weight::from_parts(100, 0))
		.byte_fee(10)
		.balance_factor(0)
		.build();

	// Add a next fee multiplier. Fees will be x3/2.
	NextFeeMultiplier::put(&mut ext, &Multiplier::saturating_from_rational(3, 2));

	// Base fee is unaffected by multiplier
	let dispatch_info = DispatchInfo {
		weight: Weight::from_parts(0, 0),
		class: DispatchClass::Operational,
		pays_fee: Pays::Yes,
	};
	assert_eq!(TransactionPayment::compute_fee(&ext, 0, &dispatch_info, 0), 100);

	// Everything works together :)
	let dispatch_info = DispatchInfo {
		weight: Weight::from_parts(123, 0),
		class: DispatchClass::Operational,
		pays_fee: Pays::Yes,
	};
	// 123 weight, 456 length, 100 base
	assert_eq!(
		TransactionPayment::compute_fee(&ext, 456, &dispatch_info, 789),
		100 + (3 * 123 / 2) + 4560 + 789,
	);
}

#[test]
fn compute_fee_works_with_negative_multiplier() {
	let mut ext = ExtBuilder::default()
		.base_weight(Weight::from_parts(100, 0))
		.byte_fee(10)
		.balance_factor(0)
		.build();

	// Add a next fee multiplier. All fees will be x1/2.
	NextFeeMultiplier::put(&mut ext, &Multiplier::saturating_from_rational(1, 2));

	// Base fee is unaffected by multiplier.
	let dispatch_info = DispatchInfo {
		weight: Weight::from_parts(0, 0),
		class: DispatchClass::Operational,
		pays_fee: Pays::Yes,
	};
	assert_eq!(TransactionPayment::compute_fee(&ext, 0, &dispatch_info, 0), 100);

	// Everything works together.
	let dispatch_info = DispatchInfo {
		weight: Weight::from_parts(123, 0),
		class: DispatchClass::Operational,
		pays_fee: Pays::Yes,
	};
	// 123 weight, 456 length, 100 base
	assert_eq!(
		TransactionPayment::compute_fee(&ext, 456, &dispatch_info, 789),
		100 + (123 / 2) + 4560 + 789,
	);
}

#[test]
fn compute_fee_does_not_overflow() {
	let ext = ExtBuilder::default()
		.base_weight(Weight::from_parts(100, 0))
		.byte_fee(10)
		.balance_factor(0)
		.build();

	// Overflow is handled
	let dispatch_info = DispatchInfo {
		weight: Weight::MAX,
		class: DispatchClass::Operational,
		pays_fee: Pays::Yes,
	};

	assert_eq!(
		TransactionPayment::compute_fee(&ext, u32::MAX, &dispatch_info, Balance::MAX),
		Balance::MAX
	);
}

#[test]
fn compute_fee_is_monotonic_in_length_and_weight() {
	let ext = ExtBuilder::default()
		.base_weight(Weight::from_parts(7, 0))
		.byte_fee(3)
		.weight_fee(2)
		.balance_factor(0)
		.build();
	let fee = |len: u32, weight: u64| {
		TransactionPayment::compute_fee(
			&ext,
			len,
			&info_from_weight(Weight::from_parts(weight, 0)),
			0,
		)
	};

	for len in [0, 1, 10, 100] {
		for weight in [0, 1, 100, 1024] {
			assert!(fee(len, weight) <= fee(len + 1, weight));
			assert!(fee(len, weight) <= fee(len, weight + 1));
		}
	}

	// anything above the maximum block weight costs the same
	assert_eq!(fee(10, 1024), fee(10, 5000));

	// a higher multiplier never makes the same transaction cheaper
	let mut ext = ext;
	let info = info_from_weight(Weight::from_parts(100, 0));
	let mut last = 0;
	for (n, d) in [(0, 1), (1, 2), (1, 1), (3, 2), (2, 1), (10, 1)] {
		NextFeeMultiplier::put(&mut ext, &Multiplier::saturating_from_rational(n, d));
		let fee = TransactionPayment::compute_fee(&ext, 10, &info, 0);
		assert!(fee >= last);
		last = fee;
	}
	// base and length fees stay fixed, only the weight fee is scaled by 10
	assert_eq!(last, 2 * 7 + 3 * 10 + 10 * 2 * 100);
}

#[test]
fn pre_dispatch_fails_without_funds() {
	let mut ext = ExtBuilder::default().balance_factor(1).build();

	// 10 length with no weight costs exactly the whole balance, the payer can not be reaped.
	assert_noop!(
		ext,
		charge(0).pre_dispatch(&mut ext, &1, &info_from_weight(Weight::zero()), 10),
		InvalidTransaction::Payment
	);
	assert_noop!(
		ext,
		charge(0).pre_dispatch(&mut ext, &1, &info_from_weight(Weight::from_parts(1000, 0)), 10),
		InvalidTransaction::Payment
	);
	// unknown account
	assert_noop!(
		ext,
		charge(0).pre_dispatch(&mut ext, &7, &info_from_weight(Weight::zero()), 1),
		InvalidTransaction::Payment
	);
}

#[test]
fn validate_never_changes_storage() {
	let mut ext = ExtBuilder::default().balance_factor(10).build();
	let info = info_from_weight(Weight::from_parts(5, 0));

	assert_storage_noop!(ext, {
		let validity = charge(5).validate(&mut ext, &1, &info, 10);

		assert!(validity.is_ok());
	});
	assert_eq!(Balances::free_balance(&ext, &1), 100);
	assert!(events(&mut ext).is_empty());
}

#[test]
fn post_dispatch_without_pre_is_a_no_op() {
	let mut ext = ExtBuilder::default().balance_factor(10).build();
	let info = info_from_weight(Weight::from_parts(5, 0));

	assert_storage_noop!(
		ext,
		assert_eq!(
			ChargeTransactionPayment::<Runtime>::post_dispatch(
				&mut ext,
				None,
				&info,
				&default_post_info(),
				10,
				&Ok(())
			),
			Ok(())
		)
	);
}

#[test]
fn refund_does_not_recreate_account() {
	let mut ext =
		ExtBuilder::default().balance_factor(10).base_weight(Weight::from_parts(5, 0)).build();
	let len = 10;
	let info = info_from_weight(Weight::from_parts(100, 0));

	let pre = charge(5).pre_dispatch(&mut ext, &2, &info, len).unwrap();
	assert_eq!(Balances::free_balance(&ext, &2), 200 - 5 - 10 - 100 - 5);

	// kill the account between pre and post dispatch
	assert_ok!(Balances::transfer(&mut ext, RawOrigin::Signed(2), 3, 80));
	assert_eq!(Balances::free_balance(&ext, &2), 0);

	assert_ok!(ChargeTransactionPayment::<Runtime>::post_dispatch(
		&mut ext,
		Some(pre),
		&info,
		&post_info_from_weight(Weight::from_parts(50, 0)),
		len,
		&Ok(())
	));
	assert_eq!(Balances::free_balance(&ext, &2), 0);
	assert!(!System::account_exists(&ext, &2));
	// nothing could be refunded, so the fee handler got everything except the tip
	assert_eq!(FeeUnbalancedAmount::get(), 115);
	assert_eq!(TipUnbalancedAmount::get(), 5);

	let events = events(&mut ext);

	assert!(events.contains(&RuntimeEvent::Balances(darwinia_balances::Event::Transfer {
		from: 2,
		to: 3,
		amount: 80,
	})));
	assert!(events.contains(&RuntimeEvent::System(darwinia_system::Event::KilledAccount {
		account: 2,
	})));
}

#[test]
fn actual_weight_higher_than_max_refunds_nothing() {
	let mut ext =
		ExtBuilder::default().balance_factor(10).base_weight(Weight::from_parts(5, 0)).build();
	let len = 10;
	let info = info_from_weight(Weight::from_parts(100, 0));

	let pre = charge(5).pre_dispatch(&mut ext, &2, &info, len).unwrap();
	assert_eq!(Balances::free_balance(&ext, &2), 200 - 5 - 10 - 100 - 5);

	// confirm that there is nothing to refund
	assert_ok!(ChargeTransactionPayment::<Runtime>::post_dispatch(
		&mut ext,
		Some(pre),
		&info,
		&post_info_from_weight(Weight::from_parts(101, 0)),
		len,
		&Ok(())
	));
	assert_eq!(Balances::free_balance(&ext, &2), 200 - 5 - 10 - 100 - 5);
}

#[test]
fn zero_transfer_on_free_transaction() {
	let mut ext =
		ExtBuilder::default().balance_factor(10).base_weight(Weight::from_parts(5, 0)).build();
	let len = 10;
	let dispatch_info = DispatchInfo {
		weight: Weight::from_parts(100, 0),
		pays_fee: Pays::No,
		class: DispatchClass::Normal,
	};
	let user = 69;

	let pre = charge(0).pre_dispatch(&mut ext, &user, &dispatch_info, len).unwrap();
	assert_eq!(Balances::total_balance(&ext, &user), 0);

	assert_ok!(ChargeTransactionPayment::<Runtime>::post_dispatch(
		&mut ext,
		Some(pre),
		&dispatch_info,
		&default_post_info(),
		len,
		&Ok(())
	));
	assert_eq!(Balances::total_balance(&ext, &user), 0);
	assert!(!System::account_exists(&ext, &user));
	assert_eq!(
		events(&mut ext),
		[RuntimeEvent::TransactionPayment(Event::TransactionFeePaid {
			who: user,
			actual_fee: 0,
			tip: 0,
		})]
	);
}

#[test]
fn refund_consistent_with_actual_weight() {
	let mut ext =
		ExtBuilder::default().balance_factor(10).base_weight(Weight::from_parts(7, 0)).build();
	let info = info_from_weight(Weight::from_parts(100, 0));
	let post_info = post_info_from_weight(Weight::from_parts(33, 0));
	let prev_balance = Balances::free_balance(&ext, &2);
	let len = 10;
	let tip = 5;

	NextFeeMultiplier::put(&mut ext, &Multiplier::saturating_from_rational(5, 4));

	let pre = charge(tip).pre_dispatch(&mut ext, &2, &info, len).unwrap();

	assert_ok!(ChargeTransactionPayment::<Runtime>::post_dispatch(
		&mut ext,
		Some(pre),
		&info,
		&post_info,
		len,
		&Ok(())
	));

	let refund_based_fee = prev_balance - Balances::free_balance(&ext, &2);
	let actual_fee =
		TransactionPayment::compute_actual_fee(&ext, len as u32, &info, &post_info, tip);

	// 33 weight, 10 length, 7 base, 5 tip
	assert_eq!(actual_fee, 7 + 10 + (33 * 5 / 4) + 5);
	assert_eq!(refund_based_fee, actual_fee);
}

#[test]
fn should_alter_operational_priority() {
	let tip = 5;
	let len = 10;
	let mut ext = ExtBuilder::default().balance_factor(100).build();
	let normal = DispatchInfo {
		weight: Weight::from_parts(100, 0),
		class: DispatchClass::Normal,
		pays_fee: Pays::Yes,
	};

	let priority = charge(tip).validate(&mut ext, &2, &normal, len).unwrap().priority;
	assert_eq!(priority, 60);

	let priority = charge(2 * tip).validate(&mut ext, &2, &normal, len).unwrap().priority;
	assert_eq!(priority, 110);

	let op = DispatchInfo {
		weight: Weight::from_parts(100, 0),
		class: DispatchClass::Operational,
		pays_fee: Pays::Yes,
	};

	let priority = charge(tip).validate(&mut ext, &2, &op, len).unwrap().priority;
	assert_eq!(priority, 5810);

	let priority = charge(2 * tip).validate(&mut ext, &2, &op, len).unwrap().priority;
	assert_eq!(priority, 6110);
}

#[test]
fn no_tip_has_some_priority() {
	let tip = 0;
	let len = 10;
	let mut ext = ExtBuilder::default().balance_factor(100).build();
	let normal = DispatchInfo {
		weight: Weight::from_parts(100, 0),
		class: DispatchClass::Normal,
		pays_fee: Pays::Yes,
	};

	let priority = charge(tip).validate(&mut ext, &2, &normal, len).unwrap().priority;
	assert_eq!(priority, 10);

	let op = DispatchInfo {
		weight: Weight::from_parts(100, 0),
		class: DispatchClass::Operational,
		pays_fee: Pays::Yes,
	};

	let priority = charge(tip).validate(&mut ext, &2, &op, len).unwrap().priority;
	assert_eq!(priority, 5510);
}

#[test]
fn higher_tip_have_higher_priority() {
	let get_priorities = |tip: Balance| {
		let mut ext = ExtBuilder::default().balance_factor(100).build();
		let len = 10;
		let normal = DispatchInfo {
			weight: Weight::from_parts(100, 0),
			class: DispatchClass::Normal,
			pays_fee: Pays::Yes,
		};
		let op = DispatchInfo { class: DispatchClass::Operational, ..normal };
		let pri1 = charge(tip).validate(&mut ext, &2, &normal, len).unwrap().priority;
		let pri2 = charge(tip).validate(&mut ext, &2, &op, len).unwrap().priority;

		(pri1, pri2)
	};
	let mut prev_priorities = get_priorities(0);

	for tip in 1..3 {
		let priorities = get_priorities(tip);

		assert!(prev_priorities.0 < priorities.0);
		assert!(prev_priorities.1 < priorities.1);

		prev_priorities = priorities;
	}
}

#[test]
fn post_info_can_change_pays_fee() {
	let mut ext =
		ExtBuilder::default().balance_factor(10).base_weight(Weight::from_parts(7, 0)).build();
	let info = info_from_weight(Weight::from_parts(100, 0));
	let post_info = post_info_from_pays(Pays::No);
	let prev_balance = Balances::free_balance(&ext, &2);
	let len = 10;
	let tip = 5;

	NextFeeMultiplier::put(&mut ext, &Multiplier::saturating_from_rational(5, 4));

	let pre = charge(tip).pre_dispatch(&mut ext, &2, &info, len).unwrap();

	assert_ok!(ChargeTransactionPayment::<Runtime>::post_dispatch(
		&mut ext,
		Some(pre),
		&info,
		&post_info,
		len,
		&Ok(())
	));

	let refund_based_fee = prev_balance - Balances::free_balance(&ext, &2);
	let actual_fee =
		TransactionPayment::compute_actual_fee(&ext, len as u32, &info, &post_info, tip);

	// Only 5 tip is paid
	assert_eq!(actual_fee, 5);
	assert_eq!(refund_based_fee, actual_fee);
}

#[test]
fn genesis_config_works() {
	let ext = ExtBuilder::default().with_initial_multiplier(Multiplier::from_u32(100)).build();

	assert_eq!(TransactionPayment::next_fee_multiplier(&ext), Multiplier::from_u32(100));
}

#[test]
fn genesis_default_works() {
	let mut ext = ExtBuilder::default().build();

	GenesisConfig::default().build(&mut ext);

	assert_eq!(TransactionPayment::next_fee_multiplier(&ext), Multiplier::one());
}

#[test]
fn on_finalize_keeps_the_multiplier_with_the_identity_update() {
	let mut ext = ExtBuilder::default().build();

	TransactionPayment::on_finalize(&mut ext);
	assert_eq!(NextFeeMultiplier::get(&ext), Multiplier::one());

	NextFeeMultiplier::put(&mut ext, &Multiplier::saturating_from_rational(3, 2));
	TransactionPayment::on_finalize(&mut ext);
	assert_eq!(NextFeeMultiplier::get(&ext), Multiplier::saturating_from_rational(3, 2));
}

parameter_types! {
	pub const Two: Multiplier = Multiplier::from_u32(2);
	pub TargetBlockFullness: Perquintill = Perquintill::from_percent(25);
	pub AdjustmentVariable: Multiplier = Multiplier::saturating_from_rational(1, 100);
	pub MinimumMultiplier: Multiplier = Multiplier::saturating_from_rational(1, 10);
	pub MaximumMultiplier: Multiplier = Bounded::max_value();
}

type SlowAdjustingFeeUpdate = TargetedFeeAdjustment<
	Runtime,
	TargetBlockFullness,
	AdjustmentVariable,
	MinimumMultiplier,
	MaximumMultiplier,
>;

#[test]
fn const_fee_multiplier_ignores_the_previous_value() {
	let ext = ExtBuilder::default().build();

	assert_eq!(
		<ConstFeeMultiplier<Two> as MultiplierUpdate>::convert(&ext, Multiplier::one()),
		Multiplier::from_u32(2)
	);
	assert_eq!(
		<ConstFeeMultiplier<Two> as MultiplierUpdate>::convert(&ext, Multiplier::from_u32(7)),
		Multiplier::from_u32(2)
	);
	assert_eq!(<ConstFeeMultiplier<Two> as MultiplierUpdate>::min(), Multiplier::from_u32(2));
	assert_eq!(<ConstFeeMultiplier<Two> as MultiplierUpdate>::max(), Multiplier::from_u32(2));
}

#[test]
fn targeted_fee_adjustment_follows_the_block_fullness() {
	let mut ext = ExtBuilder::default().build();

	// empty block, the fee goes down
	let next = SlowAdjustingFeeUpdate::convert(&ext, Multiplier::one());
	assert!(next < Multiplier::one());
	assert!(next >= MinimumMultiplier::get());

	// exactly on target, nothing changes
	System::register_extra_weight_unchecked(
		&mut ext,
		Weight::from_parts(256, 0),
		DispatchClass::Normal,
	);
	assert_eq!(SlowAdjustingFeeUpdate::convert(&ext, Multiplier::one()), Multiplier::one());

	// full block, the fee goes up
	System::register_extra_weight_unchecked(
		&mut ext,
		Weight::from_parts(768, 0),
		DispatchClass::Normal,
	);
	assert!(SlowAdjustingFeeUpdate::convert(&ext, Multiplier::one()) > Multiplier::one());

	// a stale multiplier below the minimum is recovered
	assert!(
		SlowAdjustingFeeUpdate::convert(&ext, Multiplier::zero()) >= MinimumMultiplier::get()
	);
}

#[test]
fn targeted_fee_adjustment_never_drops_below_the_minimum() {
	let ext = ExtBuilder::default().build();
	let mut multiplier = Multiplier::one();

	for _ in 0..1_000 {
		multiplier = SlowAdjustingFeeUpdate::convert(&ext, multiplier);
	}

	assert!(multiplier < Multiplier::one());
	assert!(multiplier >= MinimumMultiplier::get());
}
