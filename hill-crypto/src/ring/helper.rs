/// Greatest common divisor of two integers, always non-negative.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Extended Euclid: returns `(g, x, y)` with `a·x + b·y = g = gcd(a, b)` and `g >= 0`.
///
/// Used to find the inverse of a determinant modulo the alphabet size: when
/// `g == 1`, `x` is the inverse of `a` modulo `b` (up to normalization).
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_x, mut x) = (1i64, 0i64);
    let (mut old_y, mut y) = (0i64, 1i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
        (old_y, y) = (y, old_y - q * y);
    }

    if old_r < 0 {
        return (-old_r, -old_x, -old_y);
    }
    (old_r, old_x, old_y)
}
