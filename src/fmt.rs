/// Format an amount with its currency symbol and thousands separators: `$ 1,234.56`
pub fn money(symbol: &str, val: f64) -> String {
    if !val.is_finite() {
        return format!("{symbol} {val}");
    }
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((&cents, "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("{symbol} -{with_commas}.{dec_part}")
    } else {
        format!("{symbol} {with_commas}.{dec_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money("$", 1234.56), "$ 1,234.56");
        assert_eq!(money("$", -500.00), "$ -500.00");
        assert_eq!(money("\u{20ac}", 0.0), "\u{20ac} 0.00");
        assert_eq!(money("A$", 1000000.99), "A$ 1,000,000.99");
        assert_eq!(money("$", 42.10), "$ 42.10");
    }

    #[test]
    fn test_money_passes_nan_through() {
        assert_eq!(money("$", f64::NAN), "$ NaN");
    }
}
