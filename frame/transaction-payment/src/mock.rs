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
use sp_runtime::traits::{ConstU32, Get, IdentityLookup};
// --- darwinia-network ---
use crate::{self as darwinia_transaction_payment, *};
use darwinia_balances::{AccountData, NegativeImbalance};
use darwinia_support::{
	balance::{Imbalance, OnUnbalanced},
	parameter_types,
	storage::InMemoryStorage,
	weights::{constants, RuntimeDbWeight},
};
use darwinia_system::limits;

pub type AccountId = u64;

pub type System = darwinia_system::Pallet<Runtime>;
pub type Balances = darwinia_balances::Pallet<Runtime>;
pub type TransactionPayment = Pallet<Runtime>;

#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub struct Runtime;

darwinia_support::impl_outer_event! {
	pub enum RuntimeEvent {
		0 => System(darwinia_system::Event<Runtime>),
		5 => Balances(darwinia_balances::Event<Runtime>),
		6 => TransactionPayment(darwinia_transaction_payment::Event<Runtime>),
	}
}

parameter_types! {
	pub static ExtrinsicBaseWeight: Weight = Weight::zero();
}

pub struct BlockWeights;
impl Get<limits::BlockWeights> for BlockWeights {
	fn get() -> limits::BlockWeights {
		limits::BlockWeights::builder()
			.base_block(Weight::zero())
			.for_class(DispatchClass::all(), |weights| {
				weights.base_extrinsic = ExtrinsicBaseWeight::get();
			})
			.for_class(DispatchClass::non_mandatory(), |weights| {
				weights.max_total = Some(Weight::from_parts(1024, u64::MAX));
			})
			.build_or_panic()
	}
}

parameter_types! {
	pub const DbWeight: RuntimeDbWeight = constants::ROCKS_DB_WEIGHT;
}
impl darwinia_system::Config for Runtime {
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
	pub const ExistentialDeposit: Balance = 1;
}
impl darwinia_balances::Config for Runtime {
	type AccountStore = System;
	type DustRemoval = ();
	type ExistentialDeposit = ExistentialDeposit;
	type MaxLocks = ConstU32<50>;
	type MaxReserves = ConstU32<50>;
	type RuntimeEvent = RuntimeEvent;
	type WeightInfo = ();

	const PALLET_INDEX: u8 = 5;
}

parameter_types! {
	pub static WeightToFeeCoefficient: Balance = 1;
	pub static TransactionByteFee: Balance = 1;
	pub static OperationalFeeMultiplier: u8 = 5;
}

pub struct WeightToFee;
impl darwinia_support::weights::WeightToFee for WeightToFee {
	type Balance = Balance;

	fn weight_to_fee(weight: &Weight) -> Balance {
		(weight.ref_time() as Balance).saturating_mul(WeightToFeeCoefficient::get())
	}
}

pub struct LengthToFee;
impl darwinia_support::weights::WeightToFee for LengthToFee {
	type Balance = Balance;

	fn weight_to_fee(weight: &Weight) -> Balance {
		(weight.ref_time() as Balance).saturating_mul(TransactionByteFee::get())
	}
}

parameter_types! {
	pub static FeeUnbalancedAmount: Balance = 0;
	pub static TipUnbalancedAmount: Balance = 0;
}

/// Records the fee and the tip it is handed, then burns both.
pub struct DealWithFees;
impl OnUnbalanced<NegativeImbalance<Runtime>> for DealWithFees {
	fn on_unbalanceds(
		ext: &mut dyn Storage,
		mut fees_then_tips: impl Iterator<Item = NegativeImbalance<Runtime>>,
	) {
		if let Some(fees) = fees_then_tips.next() {
			FeeUnbalancedAmount::set(FeeUnbalancedAmount::get() + fees.peek());
			fees.resolve(ext);

			if let Some(tips) = fees_then_tips.next() {
				TipUnbalancedAmount::set(TipUnbalancedAmount::get() + tips.peek());
				tips.resolve(ext);
			}
		}
	}
}

impl Config for Runtime {
	type FeeMultiplierUpdate = ();
	type LengthToFee = LengthToFee;
	type OnChargeTransaction = CurrencyAdapter<Balances, DealWithFees>;
	type OperationalFeeMultiplier = OperationalFeeMultiplier;
	type RuntimeEvent = RuntimeEvent;
	type WeightToFee = WeightToFee;

	const PALLET_INDEX: u8 = 6;
}

pub struct ExtBuilder {
	balance_factor: Balance,
	base_weight: Weight,
	byte_fee: Balance,
	weight_to_fee: Balance,
	initial_multiplier: Option<Multiplier>,
}
impl Default for ExtBuilder {
	fn default() -> Self {
		Self {
			balance_factor: 1,
			base_weight: Weight::zero(),
			byte_fee: 1,
			weight_to_fee: 1,
			initial_multiplier: None,
		}
	}
}
impl ExtBuilder {
	pub fn base_weight(mut self, base_weight: Weight) -> Self {
		self.base_weight = base_weight;

		self
	}

	pub fn byte_fee(mut self, byte_fee: Balance) -> Self {
		self.byte_fee = byte_fee;

		self
	}

	pub fn weight_fee(mut self, weight_to_fee: Balance) -> Self {
		self.weight_to_fee = weight_to_fee;

		self
	}

	pub fn balance_factor(mut self, factor: Balance) -> Self {
		self.balance_factor = factor;

		self
	}

	pub fn with_initial_multiplier(mut self, multiplier: Multiplier) -> Self {
		self.initial_multiplier = Some(multiplier);

		self
	}

	fn set_constants(&self) {
		ExtrinsicBaseWeight::set(self.base_weight);
		TransactionByteFee::set(self.byte_fee);
		WeightToFeeCoefficient::set(self.weight_to_fee);
		FeeUnbalancedAmount::set(0);
		TipUnbalancedAmount::set(0);
	}

	pub fn build(self) -> InMemoryStorage {
		self.set_constants();

		let mut ext = InMemoryStorage::new();
		let balances = if self.balance_factor > 0 {
			vec![
				(1, 10 * self.balance_factor),
				(2, 20 * self.balance_factor),
				(3, 30 * self.balance_factor),
				(4, 40 * self.balance_factor),
				(5, 50 * self.balance_factor),
				(6, 60 * self.balance_factor),
			]
		} else {
			vec![]
		};

		darwinia_balances::GenesisConfig::<Runtime> { balances }.build(&mut ext).unwrap();

		if let Some(multiplier) = self.initial_multiplier {
			darwinia_transaction_payment::GenesisConfig { multiplier }.build(&mut ext);
		}

		System::set_block_number(&mut ext, 1);

		ext
	}
}

pub fn events(ext: &mut InMemoryStorage) -> Vec<RuntimeEvent> {
	let events = System::read_events_no_consensus(ext);

	System::reset_events(ext);

	events
}

/// create a transaction info struct from weight. Handy to avoid building the whole struct.
pub fn info_from_weight(w: Weight) -> DispatchInfo {
	// pays_fee: Pays::Yes -- class: DispatchClass::Normal
	DispatchInfo { weight: w, ..Default::default() }
}

pub fn post_info_from_weight(w: Weight) -> PostDispatchInfo {
	PostDispatchInfo { actual_weight: Some(w), pays_fee: Default::default() }
}

pub fn post_info_from_pays(p: Pays) -> PostDispatchInfo {
	PostDispatchInfo { actual_weight: None, pays_fee: p }
}

pub fn default_post_info() -> PostDispatchInfo {
	PostDispatchInfo { actual_weight: None, pays_fee: Default::default() }
}
