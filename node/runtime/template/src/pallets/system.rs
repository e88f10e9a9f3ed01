// --- darwinia-network ---
use crate::*;
use darwinia_support::{
	dispatch::DispatchClass,
	weights::{
		constants::{BLOCK_EXECUTION_WEIGHT, EXTRINSIC_BASE_WEIGHT, ROCKS_DB_WEIGHT},
		RuntimeDbWeight,
	},
};
use darwinia_system::{
	limits::{BlockLength, BlockWeights},
	weights::SubstrateWeight,
	AccountIdLookup, Config,
};

darwinia_support::parameter_types! {
	pub const RocksDbWeight: RuntimeDbWeight = ROCKS_DB_WEIGHT;
	/// Maximum length of block. Up to 5MB.
	pub RuntimeBlockLength: BlockLength =
		BlockLength::max_with_normal_ratio(5 * 1024 * 1024, NORMAL_DISPATCH_RATIO);
	/// Block weights base values and limits.
	pub RuntimeBlockWeights: BlockWeights = BlockWeights::builder()
		.base_block(BLOCK_EXECUTION_WEIGHT)
		.for_class(DispatchClass::all(), |weights| {
			weights.base_extrinsic = EXTRINSIC_BASE_WEIGHT;
		})
		.for_class(DispatchClass::Normal, |weights| {
			weights.max_total = Some(normal_block_weight());
		})
		.for_class(DispatchClass::Operational, |weights| {
			weights.max_total = Some(MAXIMUM_BLOCK_WEIGHT);
			// Operational transactions have some extra reserved space, so that they
			// are included even if block reached `MAXIMUM_BLOCK_WEIGHT`.
			weights.reserved = Some(MAXIMUM_BLOCK_WEIGHT.saturating_sub(normal_block_weight()));
		})
		.avg_block_initialization(AVERAGE_ON_INITIALIZE_RATIO)
		.build_or_panic();
}

impl Config for Runtime {
	type AccountData = AccountData;
	type AccountId = AccountId;
	type BlockLength = RuntimeBlockLength;
	type BlockNumber = BlockNumber;
	type BlockWeights = RuntimeBlockWeights;
	type DbWeight = RocksDbWeight;
	type Lookup = AccountIdLookup<AccountId, AccountIndex>;
	type Nonce = Nonce;
	type OnKilledAccount = ();
	type OnNewAccount = ();
	type RuntimeEvent = RuntimeEvent;
	type SystemWeightInfo = SubstrateWeight<Runtime>;
}

fn normal_block_weight() -> Weight {
	Weight::from_parts(
		NORMAL_DISPATCH_RATIO * MAXIMUM_BLOCK_WEIGHT.ref_time(),
		NORMAL_DISPATCH_RATIO * MAXIMUM_BLOCK_WEIGHT.proof_size(),
	)
}
