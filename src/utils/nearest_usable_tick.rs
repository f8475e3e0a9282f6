//! ## Nearest usable tick
//! Rounds a tick to the closest multiple of a pool's tick spacing.

use super::tick_math::{MAX_TICK, MIN_TICK};
use crate::error::Error;
use num_integer::Integer;

/// Returns the closest tick that is nearest a given tick and usable for the given tick spacing
///
/// Halves round up, matching `round(tick / tick_spacing) * tick_spacing`. A result that falls
/// outside `[MIN_TICK, MAX_TICK]` is moved one spacing back inside.
///
/// ## Arguments
///
/// * `tick`: the target tick
/// * `tick_spacing`: the spacing of the pool
///
/// returns: i32
pub fn nearest_usable_tick(tick: i32, tick_spacing: i32) -> Result<i32, Error> {
    if tick_spacing <= 0 {
        return Err(Error::InvalidTickSpacing(tick_spacing));
    }
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(Error::InvalidTick(tick));
    }
    // floor(tick / tick_spacing + 1 / 2), in i64 so that wide spacings cannot overflow
    let (tick, tick_spacing) = (i64::from(tick), i64::from(tick_spacing));
    let rounded = (2 * tick + tick_spacing).div_floor(&(2 * tick_spacing)) * tick_spacing;
    let usable = if rounded < i64::from(MIN_TICK) {
        rounded + tick_spacing
    } else if rounded > i64::from(MAX_TICK) {
        rounded - tick_spacing
    } else {
        rounded
    };
    i32::try_from(usable).map_err(|_| Error::InvalidTickSpacing(tick_spacing as i32))
}
