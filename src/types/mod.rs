pub mod data;
pub mod gamma;
pub mod pnl;

pub use data::*;
pub use gamma::*;
pub use pnl::*;
