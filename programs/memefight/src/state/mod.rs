pub mod competition;
pub mod config;
pub mod pool;

pub use competition::*;
pub use config::*;
pub use pool::*;
