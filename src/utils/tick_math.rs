//! ## Tick Math
//! Conversion between tick indices and Q64.96 square root prices, reproducing the integer
//! semantics of the [TickMath library](https://github.com/uniswap/v3-core/blob/main/contracts/libraries/TickMath.sol)
//! bit for bit.

use super::most_significant_bit;
use crate::error::Error;
use alloy_primitives::{uint, U160, U256};

/// The minimum tick that can be passed to [`get_sqrt_ratio_at_tick`].
pub const MIN_TICK: i32 = -887272;
/// The maximum tick that can be passed to [`get_sqrt_ratio_at_tick`].
pub const MAX_TICK: i32 = -MIN_TICK;

/// The minimum value that can be returned from [`get_sqrt_ratio_at_tick`]. Equivalent to
/// `get_sqrt_ratio_at_tick(MIN_TICK)`
pub const MIN_SQRT_RATIO: U160 = uint!(4295128739_U160);
/// The maximum value that can be returned from [`get_sqrt_ratio_at_tick`]. Equivalent to
/// `get_sqrt_ratio_at_tick(MAX_TICK)`
pub const MAX_SQRT_RATIO: U160 = uint!(1461446703485210103287273052203988822378723970342_U160);

/// `2^128 / sqrt(1.0001)`, the Q128.128 ratio for bit 0 of `|tick|`.
const RATIO_BIT_0: U256 = uint!(0xfffcb933bd6fad37aa2d162d1a594001_U256);

/// `2^128 / sqrt(1.0001)^(2^i)` for bits 1 through 19 of `|tick|`. `MAX_TICK < 2^20`.
const RATIO_MULTIPLIERS: [U256; 19] = [
    uint!(0xfff97272373d413259a46990580e213a_U256),
    uint!(0xfff2e50f5f656932ef12357cf3c7fdcc_U256),
    uint!(0xffe5caca7e10e4e61c3624eaa0941cd0_U256),
    uint!(0xffcb9843d60f6159c9db58835c926644_U256),
    uint!(0xff973b41fa98c081472e6896dfb254c0_U256),
    uint!(0xff2ea16466c96a3843ec78b326b52861_U256),
    uint!(0xfe5dee046a99a2a811c461f1969c3053_U256),
    uint!(0xfcbe86c7900a88aedcffc83b479aa3a4_U256),
    uint!(0xf987a7253ac413176f2b074cf7815e54_U256),
    uint!(0xf3392b0822b70005940c7a398e4b70f3_U256),
    uint!(0xe7159475a2c29b7443b29c7fa6e889d9_U256),
    uint!(0xd097f3bdfd2022b8845ad8f792aa5825_U256),
    uint!(0xa9f746462d870fdf8a65dc1f90e061e5_U256),
    uint!(0x70d869a156d2a1b890bb3df62baf32f7_U256),
    uint!(0x31be135f97d08fd981231505542fcfa6_U256),
    uint!(0x9aa508b5b7a84e1c677de54f3e99bc9_U256),
    uint!(0x5d6af8dedb81196699c329225ee604_U256),
    uint!(0x2216e584f5fa1ea926041bedfe98_U256),
    uint!(0x48a170391f7dc42444e8fa2_U256),
];

/// `2^64 / log_2(sqrt(1.0001))`
const LOG_SQRT_10001_MULTIPLIER: U256 = uint!(255738958999603826347141_U256);
/// Error bound subtracted from the log estimate to obtain the lower tick candidate.
const TICK_LOW_OFFSET: U256 = uint!(3402992956809132418596140100660247210_U256);
/// Error bound added to the log estimate to obtain the upper tick candidate.
const TICK_HIGH_OFFSET: U256 = uint!(291339464771989622907027621153398088495_U256);

/// Returns the sqrt ratio as a Q64.96 for the given tick. The sqrt ratio is computed as
/// sqrt(1.0001)^tick
///
/// ## Arguments
///
/// * `tick`: the tick for which to compute the sqrt ratio
///
/// ## Returns
///
/// The sqrt ratio as a Q64.96, or [`Error::InvalidTick`] if `tick` is outside
/// `[MIN_TICK, MAX_TICK]`
#[inline]
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U160, Error> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(Error::InvalidTick(tick));
    }
    let abs_tick = tick.unsigned_abs();

    // Q128.128 accumulator of 1 / sqrt(1.0001)^|tick|
    let mut ratio = if abs_tick & 0x1 != 0 {
        RATIO_BIT_0
    } else {
        U256::from_limbs([0, 0, 1, 0])
    };
    for (i, multiplier) in RATIO_MULTIPLIERS.iter().enumerate() {
        if abs_tick & (0x2 << i) != 0 {
            ratio = (ratio * *multiplier) >> 128_usize;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up so that get_tick_at_sqrt_ratio of the result is always
    // consistent with the input tick.
    let round_up = !(ratio & U256::from(u32::MAX)).is_zero();
    let sqrt_ratio = (ratio >> 32_usize) + U256::from(round_up as u8);
    Ok(U160::saturating_from(sqrt_ratio))
}

/// Returns the greatest tick whose sqrt ratio is less than or equal to the given sqrt ratio,
/// i.e. `get_sqrt_ratio_at_tick(tick) <= sqrt_ratio_x96 < get_sqrt_ratio_at_tick(tick + 1)`
///
/// ## Arguments
///
/// * `sqrt_ratio_x96`: the sqrt ratio as a Q64.96 for which to compute the tick
///
/// ## Returns
///
/// The tick corresponding to the given sqrt ratio, or [`Error::InvalidSqrtPrice`] if it is
/// outside `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`
#[inline]
pub fn get_tick_at_sqrt_ratio(sqrt_ratio_x96: U160) -> Result<i32, Error> {
    if sqrt_ratio_x96 < MIN_SQRT_RATIO || sqrt_ratio_x96 > MAX_SQRT_RATIO {
        return Err(Error::InvalidSqrtPrice(U256::from(sqrt_ratio_x96)));
    }
    if sqrt_ratio_x96 == MAX_SQRT_RATIO {
        return Ok(MAX_TICK);
    }
    let sqrt_ratio = U256::from(sqrt_ratio_x96);

    // 160 > msb >= 32
    let msb = most_significant_bit(sqrt_ratio).ok_or(Error::InvalidSqrtPrice(sqrt_ratio))?;

    // Integer part of log_2(sqrt_ratio) as a 64.64 number in two's complement.
    let mut log_2_x64 = U256::from(msb).wrapping_sub(U256::from(96)) << 64_usize;

    // The 128 most significant bits of `sqrt_ratio_x96`, 2^128 > r >= 2^127. Shift left first to
    // keep precision.
    let mut r = (sqrt_ratio << 96_usize) >> (msb - 31);

    // Refine 14 fractional bits of the logarithm by repeated squaring: each square that reaches
    // 2^255 contributes a one bit and is halved back into range.
    let mut decimals = 0_u64;
    for bit in (50..64).rev() {
        let square = r * r;
        let f = square.as_limbs()[3] >> 63;
        r = square >> (127 + f as usize);
        decimals |= f << bit;
    }
    log_2_x64 |= U256::from(decimals);

    // tick = log_2(sqrt_ratio) / log_2(sqrt(1.0001))
    let log_sqrt10001 = log_2_x64.wrapping_mul(LOG_SQRT_10001_MULTIPLIER);
    let tick_low = (log_sqrt10001.wrapping_sub(TICK_LOW_OFFSET) >> 128_usize).as_limbs()[0] as i32;
    let tick_high = (log_sqrt10001.wrapping_add(TICK_HIGH_OFFSET) >> 128_usize).as_limbs()[0] as i32;

    if tick_low == tick_high || get_sqrt_ratio_at_tick(tick_high)? > sqrt_ratio_x96 {
        Ok(tick_low)
    } else {
        Ok(tick_high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Q96;
    use uniswap_v3_math::tick_math;

    #[test]
    fn min_tick() {
        assert_eq!(MIN_TICK, -887272);
    }

    #[test]
    fn max_tick() {
        assert_eq!(MAX_TICK, 887272);
    }

    #[test]
    fn get_sqrt_ratio_at_tick_throws_for_tick_too_small() {
        assert_eq!(
            get_sqrt_ratio_at_tick(MIN_TICK - 1),
            Err(Error::InvalidTick(-887273))
        );
    }

    #[test]
    fn get_sqrt_ratio_at_tick_throws_for_tick_too_large() {
        assert_eq!(
            get_sqrt_ratio_at_tick(MAX_TICK + 1),
            Err(Error::InvalidTick(887273))
        );
    }

    #[test]
    fn returns_correct_value_for_min_tick() {
        assert_eq!(get_sqrt_ratio_at_tick(MIN_TICK).unwrap(), MIN_SQRT_RATIO);
    }

    #[test]
    fn returns_correct_value_for_tick_zero() {
        assert_eq!(get_sqrt_ratio_at_tick(0).unwrap(), U160::from(Q96));
    }

    #[test]
    fn returns_correct_value_for_max_tick() {
        assert_eq!(get_sqrt_ratio_at_tick(MAX_TICK).unwrap(), MAX_SQRT_RATIO);
    }

    #[test]
    fn matches_reference_implementation() {
        for tick in (MIN_TICK..=MAX_TICK).step_by(1009).chain([-1, 1, MAX_TICK]) {
            let expected = tick_math::get_sqrt_ratio_at_tick(tick).unwrap();
            assert_eq!(U256::from(get_sqrt_ratio_at_tick(tick).unwrap()), expected);
        }
    }

    #[test]
    fn get_tick_at_sqrt_ratio_throws_for_too_low() {
        let sqrt_ratio = MIN_SQRT_RATIO - U160::from(1);
        assert_eq!(
            get_tick_at_sqrt_ratio(sqrt_ratio),
            Err(Error::InvalidSqrtPrice(U256::from(sqrt_ratio)))
        );
    }

    #[test]
    fn get_tick_at_sqrt_ratio_throws_for_too_high() {
        let sqrt_ratio = MAX_SQRT_RATIO + U160::from(1);
        assert_eq!(
            get_tick_at_sqrt_ratio(sqrt_ratio),
            Err(Error::InvalidSqrtPrice(U256::from(sqrt_ratio)))
        );
    }

    #[test]
    fn returns_correct_value_for_sqrt_ratio_at_min_tick() {
        assert_eq!(get_tick_at_sqrt_ratio(MIN_SQRT_RATIO).unwrap(), MIN_TICK);
    }

    #[test]
    fn returns_correct_value_for_sqrt_ratio_at_max_tick() {
        assert_eq!(
            get_tick_at_sqrt_ratio(MAX_SQRT_RATIO - U160::from(1)).unwrap(),
            MAX_TICK - 1
        );
        assert_eq!(get_tick_at_sqrt_ratio(MAX_SQRT_RATIO).unwrap(), MAX_TICK);
    }

    #[test]
    fn get_tick_at_sqrt_ratio_matches_reference_implementation() {
        for i in 33_usize..160 {
            let sqrt_ratio = U160::from(1) << i;
            if sqrt_ratio < MIN_SQRT_RATIO || sqrt_ratio >= MAX_SQRT_RATIO {
                continue;
            }
            let expected = tick_math::get_tick_at_sqrt_ratio(U256::from(sqrt_ratio)).unwrap();
            assert_eq!(get_tick_at_sqrt_ratio(sqrt_ratio).unwrap(), expected);
        }
    }

    #[test]
    fn round_trips_and_is_monotonic() {
        let mut previous: Option<U160> = None;
        for tick in (MIN_TICK..=MAX_TICK).step_by(101).chain([MAX_TICK]) {
            let sqrt_ratio = get_sqrt_ratio_at_tick(tick).unwrap();
            assert_eq!(get_tick_at_sqrt_ratio(sqrt_ratio).unwrap(), tick);
            if let Some(previous) = previous {
                assert!(previous < sqrt_ratio);
            }
            previous = Some(sqrt_ratio);
        }
    }

    #[test]
    fn rounds_down_between_ticks() {
        for tick in [-200_000, -1, 0, 1, 50_000, 600_000] {
            let sqrt_ratio = get_sqrt_ratio_at_tick(tick).unwrap();
            let next = get_sqrt_ratio_at_tick(tick + 1).unwrap();
            assert_eq!(get_tick_at_sqrt_ratio(next - U160::from(1)).unwrap(), tick);
            assert_eq!(get_tick_at_sqrt_ratio(sqrt_ratio + U160::from(1)).unwrap(), tick);
        }
    }
}
