/// Format a count with thousands separators ("4,078,324")
pub fn format_number(value: u64) -> String {
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

/// Format a summary gain: "+1,024", or "0" when nothing was gained
pub fn format_gain(gain: u64) -> String {
    if gain == 0 {
        "0".to_string()
    } else {
        format!("+{}", format_number(gain))
    }
}
