//! The Template runtime. Wires the ledger modules together behind a single outer call and event
//! type and drives blocks through them with the [`Executive`].

#![cfg_attr(not(feature = "std"), no_std)]

pub mod executive;
pub mod pallets;
pub use pallets::*;


// --- crates.io ---
use codec::{Decode, Encode};
use scale_info::TypeInfo;
use static_assertions::const_assert;
// --- paritytech ---
use sp_runtime::{Perbill, RuntimeDebug};
// --- darwinia-network ---
use darwinia_balances::AccountData;
use darwinia_support::{
	dispatch::{
		DispatchInfo, DispatchResultWithPostInfo, Dispatchable, FatalError, GetDispatchInfo,
	},
	registry::CallRegistry,
	storage::Storage,
	weights::{constants::WEIGHT_REF_TIME_PER_SECOND, Weight},
};
use darwinia_system::RawOrigin;
use darwinia_transaction_payment::{FeeDetails, RuntimeDispatchInfo};
use drml_primitives::*;

pub type System = darwinia_system::Pallet<Runtime>;
pub type Balances = darwinia_balances::Pallet<Runtime>;
pub type TransactionPayment = darwinia_transaction_payment::Pallet<Runtime>;

pub type SystemCall = darwinia_system::Call<Runtime>;
pub type BalancesCall = darwinia_balances::Call<Runtime>;

pub type SignedExtra = executive::SignedExtra<Nonce>;
pub type CheckedExtrinsic = executive::CheckedExtrinsic<AccountId, Nonce, RuntimeCall>;
pub type Executive = executive::Executive<Runtime, RuntimeCall>;

pub const SYSTEM_INDEX: u8 = 0;
pub const BALANCES_INDEX: u8 = 5;
pub const TRANSACTION_PAYMENT_INDEX: u8 = 6;

/// We assume that an on-initialize consumes 10% of the weight on average, hence a single extrinsic
/// will not be allowed to consume more than `AvailableBlockRatio - 10%`.
pub const AVERAGE_ON_INITIALIZE_RATIO: Perbill = Perbill::from_percent(10);
/// We allow `Normal` extrinsics to fill up the block up to 75%, the rest can be used
/// by  Operational  extrinsics.
pub const NORMAL_DISPATCH_RATIO: Perbill = Perbill::from_percent(75);
/// We allow for 2 seconds of compute with a 6 second average block time.
pub const MAXIMUM_BLOCK_WEIGHT: Weight =
	Weight::from_parts(WEIGHT_REF_TIME_PER_SECOND.saturating_mul(2), u64::MAX);
const_assert!(NORMAL_DISPATCH_RATIO.deconstruct() >= AVERAGE_ON_INITIALIZE_RATIO.deconstruct());

#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub struct Runtime;

darwinia_support::impl_outer_event! {
	pub enum RuntimeEvent {
		0 => System(darwinia_system::Event<Runtime>),
		5 => Balances(darwinia_balances::Event<Runtime>),
		6 => TransactionPayment(darwinia_transaction_payment::Event<Runtime>),
	}
}

/// The outer call. The first encoded byte is the module index, followed by the module's own call.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, RuntimeDebug)]
pub enum RuntimeCall {
	#[codec(index = 0)]
	System(SystemCall),
	#[codec(index = 5)]
	Balances(BalancesCall),
}
impl From<SystemCall> for RuntimeCall {
	fn from(call: SystemCall) -> Self {
		RuntimeCall::System(call)
	}
}
impl From<BalancesCall> for RuntimeCall {
	fn from(call: BalancesCall) -> Self {
		RuntimeCall::Balances(call)
	}
}
impl GetDispatchInfo for RuntimeCall {
	fn get_dispatch_info(&self) -> DispatchInfo {
		match self {
			RuntimeCall::System(call) => call.get_dispatch_info(),
			RuntimeCall::Balances(call) => call.get_dispatch_info(),
		}
	}
}
impl Dispatchable for RuntimeCall {
	type RuntimeOrigin = RawOrigin<AccountId>;

	fn dispatch(
		self,
		ext: &mut dyn Storage,
		origin: Self::RuntimeOrigin,
	) -> DispatchResultWithPostInfo {
		match self {
			RuntimeCall::System(call) => call.dispatch(ext, origin),
			RuntimeCall::Balances(call) => call.dispatch(ext, origin),
		}
	}
}

/// Every module with calls, registered under its module index.
pub fn call_registry() -> CallRegistry<RuntimeCall> {
	let mut registry = CallRegistry::new();

	registry
		.register::<SystemCall>(SYSTEM_INDEX, "System")
		.register::<BalancesCall>(BALANCES_INDEX, "Balances");

	registry
}

#[derive(Default)]
pub struct GenesisConfig {
	pub balances: darwinia_balances::GenesisConfig<Runtime>,
	pub transaction_payment: darwinia_transaction_payment::GenesisConfig,
}
impl GenesisConfig {
	pub fn build(&self, ext: &mut dyn Storage) -> Result<(), FatalError> {
		self.balances.build(ext)?;
		self.transaction_payment.build(ext);

		Ok(())
	}
}

// The queries a node asks the runtime for outside of block execution.
impl Runtime {
	pub fn account_nonce(ext: &dyn Storage, account: &AccountId) -> Nonce {
		System::account_nonce(ext, account)
	}

	pub fn query_info(
		ext: &dyn Storage,
		call: &RuntimeCall,
		len: u32,
		signed: bool,
	) -> RuntimeDispatchInfo {
		TransactionPayment::query_info(ext, call, len, signed)
	}

	pub fn query_fee_details(
		ext: &dyn Storage,
		call: &RuntimeCall,
		len: u32,
		signed: bool,
	) -> FeeDetails {
		TransactionPayment::query_fee_details(ext, call, len, signed)
	}
}
