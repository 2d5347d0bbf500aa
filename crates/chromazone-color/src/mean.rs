//! Weighted color averaging

use chromazone_core::Rgba;

/// Per-channel weighted mean of `colors`, rounded to the nearest integer.
///
/// `weights` of `None` weighs every color equally. When given, weights are
/// paired with colors positionally; missing trailing weights count as zero.
///
/// This is a total function: an empty input, or weights summing to zero,
/// yields the all-zero color (transparent black).
pub fn weighted_mean(colors: &[Rgba], weights: Option<&[u32]>) -> Rgba {
    let mut sum = [0u64; 4];
    let mut total = 0u64;

    for (i, c) in colors.iter().enumerate() {
        let w = match weights {
            Some(ws) => ws.get(i).copied().unwrap_or(0) as u64,
            None => 1,
        };
        if w == 0 {
            continue;
        }
        sum[0] += c.r as u64 * w;
        sum[1] += c.g as u64 * w;
        sum[2] += c.b as u64 * w;
        sum[3] += c.a as u64 * w;
        total += w;
    }

    if total == 0 {
        return Rgba::default();
    }

    let avg = |s: u64| ((s as f64 / total as f64).round()).min(255.0) as u8;
    Rgba::new(avg(sum[0]), avg(sum[1]), avg(sum[2]), avg(sum[3]))
}

/// Unweighted mean of `colors`.
#[inline]
pub fn mean(colors: &[Rgba]) -> Rgba {
    weighted_mean(colors, None)
}
