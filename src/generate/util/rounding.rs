/// Rounds `n` to the closest multiple of `m`, stepping the second candidate
/// away from zero in the direction of `n`'s sign. The comparison is strict,
/// so equidistant inputs resolve to the second candidate (1000 with m = 16
/// gives 1008, not 992). Dimension validation downstream depends on this
/// exact behavior, negative inputs included.
///
/// Returns None when a candidate multiple overflows i64; callers treat that
/// as an invalid dimension.
pub fn round_to_multiple(n: i64, m: i64) -> Option<i64> {
    let q = n / m;
    let a = m.checked_mul(q)?;
    let b = if n.signum() * m.signum() > 0 {
        m.checked_mul(q.checked_add(1)?)?
    } else {
        m.checked_mul(q.checked_sub(1)?)?
    };

    if (n - a).abs() < (n - b).abs() {
        Some(a)
    } else {
        Some(b)
    }
}
