pub mod admin_cap;
pub mod facility;
pub mod payment_record;
pub mod slot;

pub use admin_cap::*;
pub use facility::*;
pub use payment_record::*;
pub use slot::*;
