pub mod pool;
pub mod pool_key;
pub mod position;
pub mod price;
pub mod token;

pub use pool::Pool;
pub use pool_key::PoolKey;
pub use position::{Position, PositionState};
pub use price::Price;
pub use token::*;
