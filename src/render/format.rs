pub fn round5(value: f64) -> f64 {
    (value * 100_000.0).round() / 100_000.0
}

// Fixed 5-decimal rendering with '.' as thousands separator and ',' as
// decimal separator: 50000.123456 -> "50.000,12346". The swap is part of
// the output contract and independent of process locale.
pub fn decimal_comma(value: f64) -> String {
    let fixed = format!("{value:.5}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00000"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped},{frac_part}")
}
