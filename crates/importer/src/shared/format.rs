/// Formats a number with thousands separators (spaces)
///
/// # Examples
/// ```
/// use importer::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1 234 567");
/// assert_eq!(format_number(42), "42");
/// assert_eq!(format_number(0), "0");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Formats a price in FCFA. Non-finite values collapse to 0,
/// like `Number(n || 0)` did in the admin console.
pub fn format_fcfa(n: f64) -> String {
    let v = if n.is_finite() { n } else { 0.0 };
    let sign = if v < 0.0 { "-" } else { "" };
    format!("{}{} FCFA", sign, format_number(v.abs().round() as u64))
}

/// Fixed 3-decimal display convention for cc / poidsKg.
/// Empty stays empty, non-numeric text is shown as typed.
pub fn fmt_decimal3(v: &str) -> String {
    if v.is_empty() {
        return String::new();
    }
    match v.parse::<f64>() {
        Ok(n) if n.is_finite() => format!("{:.3}", n),
        _ => v.to_string(),
    }
}

/// Em-dash placeholder for blank preview cells
pub fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "—"
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1 000");
        assert_eq!(format_number(15000), "15 000");
        assert_eq!(format_number(1234567890), "1 234 567 890");
    }

    #[test]
    fn test_format_fcfa() {
        assert_eq!(format_fcfa(15000.0), "15 000 FCFA");
        assert_eq!(format_fcfa(0.0), "0 FCFA");
        assert_eq!(format_fcfa(f64::NAN), "0 FCFA");
        assert_eq!(format_fcfa(-2500.0), "-2 500 FCFA");
    }

    #[test]
    fn test_fmt_decimal3() {
        assert_eq!(fmt_decimal3("0.482"), "0.482");
        assert_eq!(fmt_decimal3("3.3"), "3.300");
        assert_eq!(fmt_decimal3("12"), "12.000");
        assert_eq!(fmt_decimal3(""), "");
        assert_eq!(fmt_decimal3("abc"), "abc");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(""), "—");
        assert_eq!(or_dash("0.482"), "0.482");
    }
}
