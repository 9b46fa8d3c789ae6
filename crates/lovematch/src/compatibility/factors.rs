/// Decay constant applied to the letter score gap.
const DIFF_DECAY: f64 = 50.0;

/// `floor(exp(-difference / 50) * 100)`.
///
/// Reaches 0 once the gap exceeds roughly 230.
pub fn diff_factor(difference: u64) -> u8 {
    let decayed = (-(difference as f64) / DIFF_DECAY).exp() * 100.0;
    to_percent(decayed)
}

/// Floored share of common characters within the union.
///
/// The ratio is taken before scaling by 100; `1 / 3` floors to 33. An empty
/// union yields 0.
pub fn common_factor(common: usize, total_unique: usize) -> u8 {
    if total_unique == 0 {
        return 0;
    }
    let ratio = common as f64 / total_unique as f64;
    to_percent(ratio * 100.0)
}

/// Floored mean of both factors, clamped to `[0, 100]`.
pub fn blend(diff_factor: u8, common_factor: u8) -> u8 {
    let average = (u16::from(diff_factor) + u16::from(common_factor)) / 2;
    average.min(100) as u8
}

fn to_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.floor().clamp(0.0, 100.0) as u8
}
