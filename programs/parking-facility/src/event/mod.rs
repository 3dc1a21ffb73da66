pub mod facility;
pub mod occupancy;
pub mod treasury;

pub use facility::*;
pub use occupancy::*;
pub use treasury::*;
