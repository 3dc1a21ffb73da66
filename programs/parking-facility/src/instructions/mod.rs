pub mod initialize;
pub mod create_slot;
pub mod use_slot;
pub mod create_payment_record;
pub mod quote_fee;
pub mod deposit;
pub mod profits;

pub use initialize::*;
pub use create_slot::*;
pub use use_slot::*;
pub use create_payment_record::*;
pub use quote_fee::*;
pub use deposit::*;
pub use profits::*;
