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
use sp_runtime::{traits::IdentityLookup, Perbill, RuntimeDebug};
// --- darwinia-network ---
use crate::{self as darwinia_system, *};
use darwinia_support::{parameter_types, storage::InMemoryStorage, weights::constants};

pub type AccountId = u64;
pub type BlockNumber = u64;

pub type System = Pallet<Test>;

const NORMAL_DISPATCH_RATIO: Perbill = Perbill::from_percent(75);
const MAX_BLOCK_WEIGHT: Weight = Weight::from_parts(1024, u64::MAX);

#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub struct Test;

darwinia_support::impl_outer_event! {
	pub enum RuntimeEvent {
		0 => System(darwinia_system::Event<Test>),
	}
}

parameter_types! {
	pub RuntimeBlockWeights: limits::BlockWeights = limits::BlockWeights::builder()
		.base_block(Weight::from_parts(10, 0))
		.for_class(DispatchClass::all(), |weights| {
			weights.base_extrinsic = Weight::from_parts(5, 0);
		})
		.for_class(DispatchClass::Normal, |weights| {
			weights.max_total = Some(Weight::from_parts(
				NORMAL_DISPATCH_RATIO * MAX_BLOCK_WEIGHT.ref_time(),
				NORMAL_DISPATCH_RATIO * MAX_BLOCK_WEIGHT.proof_size(),
			));
		})
		.for_class(DispatchClass::Operational, |weights| {
			weights.base_extrinsic = Weight::from_parts(10, 0);
			weights.max_total = Some(MAX_BLOCK_WEIGHT);
			weights.reserved = Some(Weight::from_parts(
				MAX_BLOCK_WEIGHT.ref_time() - NORMAL_DISPATCH_RATIO * MAX_BLOCK_WEIGHT.ref_time(),
				MAX_BLOCK_WEIGHT.proof_size()
					- NORMAL_DISPATCH_RATIO * MAX_BLOCK_WEIGHT.proof_size(),
			));
		})
		.avg_block_initialization(Perbill::from_percent(0))
		.build_or_panic();
	pub RuntimeBlockLength: limits::BlockLength =
		limits::BlockLength::max_with_normal_ratio(1024, NORMAL_DISPATCH_RATIO);
	pub const DbWeight: RuntimeDbWeight = constants::ROCKS_DB_WEIGHT;
}
impl Config for Test {
	type AccountData = u32;
	type AccountId = AccountId;
	type BlockLength = RuntimeBlockLength;
	type BlockNumber = BlockNumber;
	type BlockWeights = RuntimeBlockWeights;
	type DbWeight = DbWeight;
	type Lookup = IdentityLookup<Self::AccountId>;
	type Nonce = u64;
	type OnKilledAccount = ();
	type OnNewAccount = ();
	type RuntimeEvent = RuntimeEvent;
	type SystemWeightInfo = ();
}

pub fn new_test_ext() -> InMemoryStorage {
	let mut ext = InMemoryStorage::new();

	System::set_block_number(&mut ext, 1);

	ext
}

pub fn events(ext: &mut InMemoryStorage) -> Vec<Event<Test>> {
	let events = System::read_events_no_consensus(ext)
		.into_iter()
		.filter_map(|e| Event::<Test>::try_from(e).ok())
		.collect();

	System::reset_events(ext);

	events
}
