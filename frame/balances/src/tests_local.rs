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

//! Test utilities

// --- paritytech ---
use sp_runtime::traits::{ConstU32, IdentityLookup};
// --- darwinia-network ---
use crate::{self as darwinia_balances, *};
use darwinia_support::{
	dispatch::{DispatchClass, Pays},
	parameter_types,
	weights::{constants, RuntimeDbWeight, Weight},
};
use darwinia_system::limits;

pub type AccountId = u64;

pub type System = darwinia_system::Pallet<Test>;
pub type Balances = Pallet<Test>;

#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub struct Test;

darwinia_support::impl_outer_event! {
	pub enum RuntimeEvent {
		0 => System(darwinia_system::Event<Test>),
		5 => Balances(darwinia_balances::Event<Test>),
	}
}

parameter_types! {
	pub BlockWeights: limits::BlockWeights =
		limits::BlockWeights::simple_max(Weight::from_parts(1024, u64::MAX));
	pub const DbWeight: RuntimeDbWeight = constants::ROCKS_DB_WEIGHT;
}
impl darwinia_system::Config for Test {
	type AccountData = AccountData;
	type AccountId = AccountId;
	type BlockLength = ();
	type BlockNumber = u64;
	type BlockWeights = BlockWeights;
	type DbWeight = DbWeight;
	type Lookup = IdentityLookup<Self::AccountId>;
	type Nonce = u64;
	type OnKilledAccount = ();
	type OnNewAccount = ();
	type RuntimeEvent = RuntimeEvent;
	type SystemWeightInfo = ();
}

parameter_types! {
	pub static ExistentialDeposit: Balance = 0;
	pub const MaxReserves: u32 = 2;
}
impl Config for Test {
	type AccountStore = System;
	type DustRemoval = ();
	type ExistentialDeposit = ExistentialDeposit;
	type MaxLocks = ConstU32<50>;
	type MaxReserves = MaxReserves;
	type RuntimeEvent = RuntimeEvent;
	type WeightInfo = ();

	const PALLET_INDEX: u8 = 5;
}

pub struct ExtBuilder {
	existential_deposit: Balance,
	monied: bool,
}
impl Default for ExtBuilder {
	fn default() -> Self {
		Self { existential_deposit: 1, monied: false }
	}
}
impl ExtBuilder {
	pub fn existential_deposit(mut self, existential_deposit: Balance) -> Self {
		self.existential_deposit = existential_deposit;

		self
	}

	pub fn monied(mut self, monied: bool) -> Self {
		self.monied = monied;

		if self.existential_deposit == 0 {
			self.existential_deposit = 1;
		}

		self
	}

	pub fn set_associated_constants(&self) {
		ExistentialDeposit::set(self.existential_deposit);
	}

	pub fn build(self) -> InMemoryStorage {
		self.set_associated_constants();

		let mut ext = InMemoryStorage::new();
		let balances = if self.monied {
			vec![
				(1, 10 * self.existential_deposit),
				(2, 20 * self.existential_deposit),
				(3, 30 * self.existential_deposit),
				(4, 40 * self.existential_deposit),
				(12, 10 * self.existential_deposit),
			]
		} else {
			vec![]
		};

		GenesisConfig::<Test> { balances }.build(&mut ext).unwrap();
		System::set_block_number(&mut ext, 1);

		ext
	}
}

pub fn events(ext: &mut InMemoryStorage) -> Vec<RuntimeEvent> {
	let events = System::read_events_no_consensus(ext);

	System::reset_events(ext);

	events
}

decl_tests! { Test, ExtBuilder, ExistentialDeposit }

#[test]
fn transfer_reaping_the_sender_emits_events_in_order() {
	let mut ext = ExtBuilder::default().existential_deposit(1).build();

	assert_ok!(Balances::set_balance(&mut ext, RawOrigin::Root, 1, 5, 0));
	System::reset_events(&mut ext);

	assert_ok!(<Balances as Currency<_>>::transfer(&mut ext, &1, &2, 5, AllowDeath));
	assert!(!System::account_exists(&ext, &1));
	assert_eq!(Balances::free_balance(&ext, &2), 5);
	assert_eq!(
		events(&mut ext),
		[
			RuntimeEvent::System(darwinia_system::Event::KilledAccount { account: 1 }),
			RuntimeEvent::System(darwinia_system::Event::NewAccount { account: 2 }),
			RuntimeEvent::Balances(Event::Endowed { account: 2, free_balance: 5 }),
			RuntimeEvent::Balances(Event::Transfer { from: 1, to: 2, amount: 5 }),
		]
	);
	assert_eq!(Balances::total_issuance(&ext), 5);
}

#[test]
fn transfer_keep_alive_of_everything_is_a_no_op() {
	let mut ext = ExtBuilder::default().existential_deposit(1).build();

	assert_ok!(Balances::set_balance(&mut ext, RawOrigin::Root, 1, 5, 0));
	System::reset_events(&mut ext);

	assert_noop!(
		ext,
		<Balances as Currency<_>>::transfer(&mut ext, &1, &2, 5, KeepAlive),
		Error::<Test>::KeepAlive
	);
	assert!(events(&mut ext).is_empty());
}

#[test]
fn transfer_emits_dust_lost_after_the_layer_commits() {
	let mut ext = ExtBuilder::default().existential_deposit(10).build();

	assert_ok!(Balances::set_balance(&mut ext, RawOrigin::Root, 1, 25, 0));
	System::reset_events(&mut ext);

	assert_ok!(Balances::transfer(&mut ext, RawOrigin::Signed(1), 2, 20));
	assert_eq!(
		events(&mut ext),
		[
			RuntimeEvent::System(darwinia_system::Event::KilledAccount { account: 1 }),
			RuntimeEvent::System(darwinia_system::Event::NewAccount { account: 2 }),
			RuntimeEvent::Balances(Event::Endowed { account: 2, free_balance: 20 }),
			RuntimeEvent::Balances(Event::DustLost { account: 1, amount: 5 }),
			RuntimeEvent::Balances(Event::Transfer { from: 1, to: 2, amount: 20 }),
		]
	);
	assert_eq!(Balances::total_issuance(&ext), 20);
}

#[test]
fn set_balance_to_zero_burns_everything() {
	let mut ext = ExtBuilder::default().existential_deposit(1).build();

	assert_ok!(Balances::set_balance(&mut ext, RawOrigin::Root, 1, 4, 3));
	assert_eq!(Balances::total_issuance(&ext), 7);
	System::reset_events(&mut ext);

	assert_ok!(Balances::set_balance(&mut ext, RawOrigin::Root, 1, 0, 0));
	assert!(!System::account_exists(&ext, &1));
	assert_eq!(Balances::total_issuance(&ext), 0);
	assert_eq!(
		events(&mut ext),
		[
			RuntimeEvent::System(darwinia_system::Event::KilledAccount { account: 1 }),
			RuntimeEvent::Balances(Event::BalanceSet { who: 1, free: 0, reserved: 0 }),
		]
	);
}

#[test]
fn set_balance_below_existential_deposit_wipes_the_account() {
	let mut ext = ExtBuilder::default().existential_deposit(10).build();

	assert_ok!(Balances::set_balance(&mut ext, RawOrigin::Root, 1, 50, 0));
	assert_ok!(Balances::set_balance(&mut ext, RawOrigin::Root, 1, 5, 4));
	assert!(!System::account_exists(&ext, &1));
	assert_eq!(Balances::total_issuance(&ext), 0);
	assert_noop!(
		ext,
		Balances::set_balance(&mut ext, RawOrigin::Signed(1), 1, 50, 0),
		BadOrigin
	);
}

#[test]
fn set_balance_never_overflows_the_total_issuance() {
	let mut ext = ExtBuilder::default().existential_deposit(1).build();

	assert_noop!(
		ext,
		Balances::set_balance(&mut ext, RawOrigin::Root, 1, Balance::MAX, 1),
		ArithmeticError::Overflow
	);
	assert_ok!(Balances::set_balance(&mut ext, RawOrigin::Root, 1, Balance::MAX - 1, 0));
	assert_noop!(
		ext,
		Balances::set_balance(&mut ext, RawOrigin::Root, 2, 2, 0),
		ArithmeticError::Overflow
	);
	// Replacing the balance of the same account is fine.
	assert_ok!(Balances::set_balance(&mut ext, RawOrigin::Root, 1, Balance::MAX - 2, 2));
	assert_eq!(Balances::total_issuance(&ext), Balance::MAX);
	assert_eq!(
		Balances::free_balance(&ext, &1) + Balances::reserved_balance(&ext, &1),
		Balances::total_issuance(&ext)
	);
}

#[test]
fn force_unreserve_moves_only_what_is_reserved() {
	let mut ext = ExtBuilder::default().existential_deposit(1).build();

	assert_ok!(Balances::set_balance(&mut ext, RawOrigin::Root, 1, 4, 3));
	System::reset_events(&mut ext);

	assert_noop!(
		ext,
		Balances::force_unreserve(&mut ext, RawOrigin::Signed(1), 1, 10),
		BadOrigin
	);
	assert_ok!(Balances::force_unreserve(&mut ext, RawOrigin::Root, 1, 10));
	assert_eq!(Balances::free_balance(&ext, &1), 7);
	assert_eq!(Balances::reserved_balance(&ext, &1), 0);
	assert_eq!(Balances::total_issuance(&ext), 7);
	assert_eq!(events(&mut ext), [RuntimeEvent::Balances(Event::Unreserved { who: 1, amount: 3 })]);
}

#[test]
fn calls_should_have_stable_indices_and_encoding() {
	let call = Call::<Test>::transfer { dest: 2, value: 69 };

	assert_eq!(call.get_call_index(), 0);
	assert_eq!(call.get_call_name(), "transfer");
	assert_eq!(call.encode(), vec![0, 2, 0, 0, 0, 0, 0, 0, 0, 0x15, 0x01]);
	assert_eq!(Call::<Test>::decode(&mut &call.encode()[..]).ok(), Some(call.clone()));
	assert_eq!(Call::<Test>::get_call_indices(), &[0, 1, 2, 3, 4, 5]);
	assert_eq!(
		Call::<Test>::get_call_names(),
		&[
			"transfer",
			"set_balance",
			"force_transfer",
			"transfer_keep_alive",
			"transfer_all",
			"force_unreserve",
		]
	);
	assert_eq!(Call::<Test>::force_unreserve { who: 1, amount: 1 }.get_call_index(), 5);

	// Outer calls of a runtime compare their inner calls with `Eq`.
	fn total_eq<E: Eq>(_: &E) {}

	total_eq(&call);
}

#[test]
fn calls_should_have_weights() {
	let info = Call::<Test>::transfer { dest: 2, value: 69 }.get_dispatch_info();

	// Only the ref time of the benchmarked weight is charged.
	assert_eq!(info.weight, Weight::from_parts(<() as WeightInfo>::transfer().ref_time(), 0));
	assert_eq!(info.class, DispatchClass::Normal);
	assert_eq!(info.pays_fee, Pays::Yes);

	let set_balance = <() as WeightInfo>::set_balance_creating()
		.max(<() as WeightInfo>::set_balance_killing())
		.ref_time();

	assert_eq!(
		Call::<Test>::set_balance { who: 1, new_free: 0, new_reserved: 0 }
			.get_dispatch_info()
			.weight,
		Weight::from_parts(set_balance, 0)
	);
}

#[test]
fn calls_should_dispatch() {
	let mut ext = ExtBuilder::default().existential_deposit(1).monied(true).build();

	assert_ok!(
		Call::<Test>::transfer { dest: 5, value: 3 }.dispatch(&mut ext, RawOrigin::Signed(1))
	);
	assert_eq!(Balances::free_balance(&ext, &5), 3);
	assert_noop!(
		ext,
		Call::<Test>::force_unreserve { who: 1, amount: 10 }
			.dispatch(&mut ext, RawOrigin::Signed(1)),
		BadOrigin
	);
}

#[test]
fn module_errors_carry_the_pallet_index() {
	assert_eq!(
		DispatchError::from(Error::<Test>::KeepAlive),
		DispatchError::Module(ModuleError {
			index: 5,
			error: [4, 0, 0, 0],
			message: Some("KeepAlive"),
		})
	);
	assert_eq!(Error::<Test>::TooManyReserves.as_str(), "TooManyReserves");
}
