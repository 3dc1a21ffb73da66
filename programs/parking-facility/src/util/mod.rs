pub mod constants;
pub mod clock;
pub mod fee;
pub mod lamports;

pub use constants::*;
pub use clock::*;
pub use fee::*;
pub use lamports::*;
