mod bit_math;
pub use bit_math::most_significant_bit;

mod compute_pool_address;
pub use compute_pool_address::compute_pool_address;

mod encode_sqrt_ratio_x96;
pub use encode_sqrt_ratio_x96::encode_sqrt_ratio_x96;

pub mod fixed_point_96;
pub use fixed_point_96::{Q192, Q96};

mod liquidity_math;
pub use liquidity_math::add_delta;

mod max_liquidity_for_amounts;
pub use max_liquidity_for_amounts::*;

mod nearest_usable_tick;
pub use nearest_usable_tick::nearest_usable_tick;

mod price_tick_conversions;
pub use price_tick_conversions::*;

mod sqrt_price_math;
pub use sqrt_price_math::*;

mod tick_math;
pub use tick_math::*;

mod types;
pub use types::*;
