//! TypeScript literal rendering.

/// Renders a number literal.
///
/// Finite values use the shortest decimal that round-trips (`65`, `3.2`).
/// Missing values (`NaN`) and infinities use the global constants TypeScript
/// understands.
pub fn number_literal(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{value}")
    }
}

/// Renders a single-quoted string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_render_shortest() {
        assert_eq!(number_literal(65.0), "65");
        assert_eq!(number_literal(3.2), "3.2");
        assert_eq!(number_literal(1.03), "1.03");
        assert_eq!(number_literal(0.0), "0");
        assert_eq!(number_literal(-0.25), "-0.25");
    }

    #[test]
    fn non_finite_numbers_use_global_constants() {
        assert_eq!(number_literal(f64::NAN), "NaN");
        assert_eq!(number_literal(f64::INFINITY), "Infinity");
        assert_eq!(number_literal(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn strings_are_single_quoted() {
        assert_eq!(string_literal("Whole Milk (3.5%)"), "'Whole Milk (3.5%)'");
        assert_eq!(string_literal(""), "''");
    }

    #[test]
    fn strings_escape_quotes_and_backslashes() {
        assert_eq!(string_literal("Mom's Milk"), r"'Mom\'s Milk'");
        assert_eq!(string_literal(r"a\b"), r"'a\\b'");
        assert_eq!(string_literal("a\nb"), r"'a\nb'");
    }
}
