pub mod constant;
pub mod serialization;
pub mod utils;

pub use constant::*;
pub use serialization::*;
pub use utils::*;
