//! Number formatting for KPI tiles and table cells.

/// Insert thousands separators into a non-negative integer.
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Currency rounded to whole units: `$12,345`.
pub fn currency_whole(v: f64) -> String {
    format!("${}", thousands(v.round().max(0.0) as u64))
}

/// Currency with cents: `$12,345.67`.
pub fn currency_cents(v: f64) -> String {
    let cents = (v.max(0.0) * 100.0).round() as u64;
    format!("${}.{:02}", thousands(cents / 100), cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn currency_formats() {
        assert_eq!(currency_whole(1234.4), "$1,234");
        assert_eq!(currency_whole(1234.6), "$1,235");
        assert_eq!(currency_cents(50.0), "$50.00");
        assert_eq!(currency_cents(1234.567), "$1,234.57");
    }

    #[test]
    fn zero_kpis_render_as_zero() {
        assert_eq!(currency_whole(0.0), "$0");
        assert_eq!(currency_cents(0.0), "$0.00");
    }
}
