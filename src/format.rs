//! Number formatting for the historical tables (pt-BR separators).

/// `1234560` -> `"1.234.560"`, `None` -> `"-"`
pub fn format_number(value: Option<i64>) -> String {
    match value {
        Some(n) => group_thousands(n),
        None => "-".to_string(),
    }
}

/// Rounded to whole reais: `Some(1203000.4)` -> `"R$ 1.203.000"`
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(amount) if amount.is_finite() => format!("R$ {}", group_thousands(amount.round() as i64)),
        _ => "-".to_string(),
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some(0)), "0");
        assert_eq!(format_number(Some(999)), "999");
        assert_eq!(format_number(Some(1000)), "1.000");
        assert_eq!(format_number(Some(1234560)), "1.234.560");
        assert_eq!(format_number(Some(-35211)), "-35.211");
        assert_eq!(format_number(None), "-");
    }

    #[test]
    fn test_format_currency_rounds() {
        assert_eq!(format_currency(Some(1203000.4)), "R$ 1.203.000");
        assert_eq!(format_currency(Some(799999.5)), "R$ 800.000");
        assert_eq!(format_currency(None), "-");
        assert_eq!(format_currency(Some(f64::NAN)), "-");
    }
}
