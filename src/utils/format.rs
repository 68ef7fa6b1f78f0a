// Currency helpers for the cards. The backend reports everything in BRL.

/// Format a value as Brazilian real, e.g. `R$ 1.234,50`.
///
/// Non-finite input renders the zero string so a bad field can never take
/// a card down.
pub fn format_brl(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    format!("{}R$ {},{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Thousands separated with '.', pt-BR style.
fn group_thousands(mut n: u64) -> String {
    let mut parts: Vec<String> = Vec::new();
    loop {
        let chunk = n % 1000;
        n /= 1000;
        if n == 0 {
            parts.push(chunk.to_string());
            break;
        }
        parts.push(format!("{:03}", chunk));
    }
    parts.reverse();
    parts.join(".")
}
