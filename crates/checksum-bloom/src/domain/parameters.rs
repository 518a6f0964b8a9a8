//! False positive rate estimation
//!
//! Formula: FPR = (1 - e^(-kn/m))^k
//!
//! Reporting only. Filters are sized by the caller, these numbers never feed
//! back into `m` or `k`.

/// Estimated false positive rate after `n` insertions into `m` bits with `k` hashes
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}

/// Fraction of bits currently set
pub fn fill_ratio(bits_set: usize, m: usize) -> f64 {
    if m == 0 {
        return 0.0;
    }
    bits_set as f64 / m as f64
}
