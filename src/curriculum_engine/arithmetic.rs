//! Digit-level predicates, number theory, and text formatting shared by the
//! family constructors, the scorer, and the hint composer.

/// Number of decimal digits in `|n|` (0 has one digit).
pub fn digit_count(n: i64) -> u32 {
    let mut n = n.unsigned_abs();
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Decimal digits of `|n|`, least significant first.
pub fn digits_lsd(n: i64) -> Vec<u8> {
    let mut n = n.unsigned_abs();
    let mut out = vec![(n % 10) as u8];
    n /= 10;
    while n > 0 {
        out.push((n % 10) as u8);
        n /= 10;
    }
    out
}

/// True if column addition of `a + b` carries in any position.
pub fn has_carry(a: i64, b: i64) -> bool {
    let (da, db) = (digits_lsd(a), digits_lsd(b));
    // The first carrying column answers the question, so no carry propagation.
    (0..da.len().max(db.len())).any(|i| {
        da.get(i).copied().unwrap_or(0) + db.get(i).copied().unwrap_or(0) >= 10
    })
}

/// True if any digit column of `minuend - subtrahend` has a minuend digit
/// smaller than the subtrahend digit.
pub fn needs_borrow(minuend: i64, subtrahend: i64) -> bool {
    let (dm, ds) = (digits_lsd(minuend), digits_lsd(subtrahend));
    (0..dm.len().max(ds.len())).any(|i| {
        dm.get(i).copied().unwrap_or(0) < ds.get(i).copied().unwrap_or(0)
    })
}

/// True if any column of a multi-term column addition carries.
pub fn column_sum_carries(terms: &[i64]) -> bool {
    let columns = terms.iter().map(|t| digit_count(*t)).max().unwrap_or(1) as usize;
    let digits: Vec<Vec<u8>> = terms.iter().map(|t| digits_lsd(*t)).collect();
    (0..columns).any(|i| {
        let sum: u32 = digits.iter().map(|d| d.get(i).copied().unwrap_or(0) as u32).sum();
        sum >= 10
    })
}

/// Never panics; `gcd(i64::MIN, 0)` saturates to `i64::MAX`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    i64::try_from(a).unwrap_or(i64::MAX)
}

pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b) * b).abs()
}

pub fn factorial(n: i64) -> i64 {
    (2..=n.max(1)).product::<i64>().max(1)
}

/// n! / (n-r)!
pub fn permutations(n: i64, r: i64) -> i64 {
    if r < 0 || r > n {
        return 0;
    }
    ((n - r + 1)..=n).product::<i64>().max(1)
}

/// n choose r.
pub fn combinations(n: i64, r: i64) -> i64 {
    if r < 0 || r > n {
        return 0;
    }
    let r = r.min(n - r);
    let mut acc: i64 = 1;
    for i in 0..r {
        acc = acc * (n - i) / (i + 1);
    }
    acc
}

/// Saturating integer power.
pub fn ipow(base: i64, exp: i64) -> i64 {
    let mut acc: i64 = 1;
    for _ in 0..exp.max(0) {
        acc = acc.saturating_mul(base);
    }
    acc
}

/// Integer square root (floor) of a non-negative value.
pub fn isqrt(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    let mut x = (n as f64).sqrt() as i64;
    while x * x > n {
        x -= 1;
    }
    while (x + 1) * (x + 1) <= n {
        x += 1;
    }
    x
}

/// True if `n` has no square factor other than 1.
pub fn is_square_free(n: i64) -> bool {
    let n = n.abs();
    (2..=isqrt(n)).all(|k| n % (k * k) != 0)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Format a polynomial from `(coefficient, power)` terms in the given order,
/// e.g. `[(1, 2), (-5, 1), (6, 0)]` → `x^2 - 5x + 6`.
pub fn format_poly(terms: &[(i64, i64)], var: &str) -> String {
    let mut out = String::new();
    for &(coef, power) in terms {
        if coef == 0 {
            continue;
        }
        let body = match power {
            0 => coef.abs().to_string(),
            _ => {
                let var_part = if power == 1 { var.to_string() } else { format!("{var}^{power}") };
                if coef.abs() == 1 { var_part } else { format!("{}{}", coef.abs(), var_part) }
            }
        };
        if out.is_empty() {
            if coef < 0 {
                out.push('-');
            }
            out.push_str(&body);
        } else {
            out.push_str(if coef < 0 { " - " } else { " + " });
            out.push_str(&body);
        }
    }
    if out.is_empty() {
        "0".to_string()
    } else {
        out
    }
}

/// `x + 3`, `x - 4`, or `x` for a zero offset.
pub fn shifted(var: &str, offset: i64) -> String {
    match offset {
        0            => var.to_string(),
        o if o > 0   => format!("{var} + {o}"),
        o            => format!("{var} - {}", -o),
    }
}

/// Parenthesise negatives so `3 × (-4)` reads correctly.
pub fn paren(n: i64) -> String {
    if n < 0 { format!("({n})") } else { n.to_string() }
}

/// `a + bi` with sign handling.
pub fn format_complex(re: i64, im: i64) -> String {
    match (re, im) {
        (r, 0) => r.to_string(),
        (0, i) => format!("{}i", unit_coef(i)),
        (r, i) if i < 0 => format!("{r} - {}i", unit_coef(-i)),
        (r, i) => format!("{r} + {}i", unit_coef(i)),
    }
}

fn unit_coef(n: i64) -> String {
    match n {
        1  => String::new(),
        -1 => "-".to_string(),
        n  => n.to_string(),
    }
}

pub fn format_point(x: i64, y: i64) -> String {
    format!("({x}, {y})")
}

/// `{1, 3, 5}`; empty sets render as `{}`.
pub fn format_set(items: &[i64]) -> String {
    let body = items.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
    format!("{{{body}}}")
}

/// Row-major 2x2 matrix as `[[a, b], [c, d]]`.
pub fn format_matrix(m: &[i64]) -> String {
    let get = |i: usize| m.get(i).copied().unwrap_or(0);
    format!("[[{}, {}], [{}, {}]]", get(0), get(1), get(2), get(3))
}

/// Render a scaled integer (`units / 10^places`) with exactly `places` decimals.
pub fn format_scaled(units: i64, places: u32) -> String {
    if places == 0 {
        return units.to_string();
    }
    let scale = ipow(10, places as i64);
    let sign = if units < 0 { "-" } else { "" };
    let abs = units.abs();
    format!("{sign}{}.{:0width$}", abs / scale, abs % scale, width = places as usize)
}

/// `kπ/m` in lowest terms (`π`, `π/6`, `5π/4`, `2π`, `0`).
pub fn format_pi_fraction(num: i64, den: i64) -> String {
    let g = gcd(num, den).max(1);
    let (n, d) = (num / g, den / g);
    let top = match n {
        0  => return "0".to_string(),
        1  => "π".to_string(),
        -1 => "-π".to_string(),
        n  => format!("{n}π"),
    };
    if d == 1 { top } else { format!("{top}/{d}") }
}

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
    "seventeen", "eighteen", "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// English words for 0..=100; larger values fall back to digits.
pub fn number_words(n: i64) -> String {
    match n {
        0..=19   => ONES[n as usize].to_string(),
        20..=99  => {
            let (t, o) = ((n / 10) as usize, (n % 10) as usize);
            if o == 0 { TENS[t].to_string() } else { format!("{}-{}", TENS[t], ONES[o]) }
        }
        100      => "one hundred".to_string(),
        _        => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_helpers() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(-4321), 4);
        assert_eq!(digits_lsd(305), vec![5, 0, 3]);
    }

    #[test]
    fn carry_detection() {
        assert!(!has_carry(23, 45));
        assert!(has_carry(27, 45));
        assert!(has_carry(95, 10));
        assert!(!has_carry(0, 0));
        assert!(column_sum_carries(&[13, 24, 35]));
        assert!(!column_sum_carries(&[11, 22, 33]));
    }

    #[test]
    fn borrow_detection() {
        assert!(!needs_borrow(58, 23));
        assert!(needs_borrow(52, 27));
        assert!(needs_borrow(300, 1));
        assert!(!needs_borrow(7, 7));
    }

    #[test]
    fn number_theory() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-4, 6), 2);
        assert_eq!(gcd(i64::MIN, 6), 2);
        assert_eq!(gcd(i64::MIN, 0), i64::MAX);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(0), 1);
        assert_eq!(permutations(5, 2), 20);
        assert_eq!(combinations(6, 2), 15);
        assert_eq!(combinations(10, 0), 1);
        assert_eq!(isqrt(50), 7);
        assert!(is_square_free(6));
        assert!(!is_square_free(12));
    }

    #[test]
    fn polynomial_formatting() {
        assert_eq!(format_poly(&[(1, 2), (-5, 1), (6, 0)], "x"), "x^2 - 5x + 6");
        assert_eq!(format_poly(&[(-1, 1), (0, 0)], "x"), "-x");
        assert_eq!(format_poly(&[(0, 1)], "x"), "0");
        assert_eq!(shifted("x", -3), "x - 3");
    }

    #[test]
    fn misc_formatting() {
        assert_eq!(format_complex(3, -1), "3 - i");
        assert_eq!(format_complex(0, 2), "2i");
        assert_eq!(format_scaled(305, 2), "3.05");
        assert_eq!(format_scaled(-7, 1), "-0.7");
        assert_eq!(format_pi_fraction(3, 6), "π/2");
        assert_eq!(format_pi_fraction(4, 2), "2π");
        assert_eq!(number_words(47), "forty-seven");
        assert_eq!(format_set(&[]), "{}");
    }
}
