use serde_json::Value;

/// Convert a raw integer-like balance into a human-readable quantity.
///
/// Unparseable or empty input counts as zero.
pub fn raw_to_quantity(raw: &str, decimals: u32) -> f64 {
    let raw = raw.trim().parse::<f64>().unwrap_or(0.0);
    raw / 10f64.powi(decimals as i32)
}

/// Format an optional USD value, `-` when there is nothing to show
pub fn format_usd(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${:.2}", v),
        None => "-".to_string(),
    }
}

/// Text carried by a JSON field when it would count as "set".
///
/// Empty strings, `false`, `0` and `null` are treated as unset.
pub fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Escape text for insertion into HTML element content or attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Truncate a string to a maximum length
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Shorten a wallet address for log lines (`0x1985...5c87`)
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_to_quantity() {
        assert_eq!(raw_to_quantity("1000000000000000000", 18), 1.0);
        assert_eq!(raw_to_quantity("2000000", 6), 2.0);
        assert_eq!(raw_to_quantity("", 18), 0.0);
        assert_eq!(raw_to_quantity("not-a-number", 6), 0.0);
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(Some(2.0)), "$2.00");
        assert_eq!(format_usd(Some(1234.5678)), "$1234.57");
        assert_eq!(format_usd(None), "-");
    }

    #[test]
    fn test_truthy_text() {
        assert_eq!(truthy_text(None), None);
        assert_eq!(truthy_text(Some(&json!(null))), None);
        assert_eq!(truthy_text(Some(&json!(""))), None);
        assert_eq!(truthy_text(Some(&json!(false))), None);
        assert_eq!(truthy_text(Some(&json!("boom"))), Some("boom".to_string()));
        assert_eq!(truthy_text(Some(&json!(42))), Some("42".to_string()));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<img src=x onerror=\"alert('x')\">&"),
            "&lt;img src=x onerror=&quot;alert(&#39;x&#39;)&quot;&gt;&amp;"
        );
    }

    #[test]
    fn test_address_formatting() {
        assert_eq!(
            format_address("0x1985EA6E9c68E1C272d8209f3B478AC2Fdb25c87"),
            "0x1985...5c87"
        );
        assert_eq!(format_address("0xABC"), "0xABC");
        assert_eq!(truncate_string("abcdefghij", 6), "abc...");
        assert_eq!(truncate_string("abc", 6), "abc");
    }
}
