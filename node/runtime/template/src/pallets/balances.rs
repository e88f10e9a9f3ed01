// --- darwinia-network ---
use crate::*;
use darwinia_balances::{weights::SubstrateWeight, Config};

darwinia_support::parameter_types! {
	pub const ExistentialDeposit: Balance = 100 * MICRO;
	pub const MaxLocks: u32 = 50;
	pub const MaxReserves: u32 = 50;
}

impl Config for Runtime {
	type AccountStore = System;
	type DustRemoval = ();
	type ExistentialDeposit = ExistentialDeposit;
	type MaxLocks = MaxLocks;
	type MaxReserves = MaxReserves;
	type RuntimeEvent = RuntimeEvent;
	type WeightInfo = SubstrateWeight<Runtime>;

	const PALLET_INDEX: u8 = BALANCES_INDEX;
}
