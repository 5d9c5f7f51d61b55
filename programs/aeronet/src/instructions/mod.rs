pub mod data;
pub mod device;
pub mod reward;
pub mod token;

pub use data::*;
pub use device::*;
pub use reward::*;
pub use token::*;
