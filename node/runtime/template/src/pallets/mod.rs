pub mod system;
pub use system::*;

pub mod balances;
pub use balances::*;

pub mod transaction_payment;
pub use transaction_payment::*;
