/// Formats an amount in rand with thousands separators, e.g. `R12,500`.
pub fn format_rand(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let fraction = cents % 100;
    let body = if fraction == 0 {
        whole
    } else {
        format!("{}.{:02}", whole, fraction)
    };
    if negative {
        format!("-R{}", body)
    } else {
        format!("R{}", body)
    }
}

pub fn format_optional_rand(amount: Option<f64>) -> String {
    amount.map(format_rand).unwrap_or_else(|| "R-".to_string())
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parses a money input; blank, non-numeric and negative values are rejected.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn looks_like_email(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && trimmed.contains('@')
}
