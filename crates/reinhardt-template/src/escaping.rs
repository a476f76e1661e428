//! HTML escaping for grid cells
//!
//! Escaped characters:
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&quot;`
//!
//! Single quotes are left alone.

use std::collections::HashMap;
use tera::{Result as TeraResult, Value};

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use reinhardt_template::escape_html;
///
/// assert_eq!(escape_html("<b>"), "&lt;b&gt;");
/// assert_eq!(escape_html("Hello & goodbye"), "Hello &amp; goodbye");
/// assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
/// assert_eq!(escape_html("it's"), "it's");
/// ```
pub fn escape_html(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			_ => out.push(c),
		}
	}
	out
}

/// Tera filter for HTML escaping grid values
///
/// Non-string values pass through untouched.
///
/// ```tera
/// {{ row.comment | escape_cell | safe }}
/// ```
pub fn escape_cell(value: &Value, _args: &HashMap<String, Value>) -> TeraResult<Value> {
	match value {
		Value::String(s) => Ok(Value::String(escape_html(s))),
		other => Ok(other.clone()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("<script>alert('XSS')</script>", "&lt;script&gt;alert('XSS')&lt;/script&gt;")]
	#[case(r#"<a href="test">link</a>"#, "&lt;a href=&quot;test&quot;&gt;link&lt;/a&gt;")]
	#[case("&lt;", "&amp;lt;")]
	#[case("normal text", "normal text")]
	fn test_escape_html(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_html(input), expected);
	}

	#[rstest]
	fn test_escape_cell_filter() {
		let escaped = escape_cell(&Value::String("<div>".to_string()), &HashMap::new()).unwrap();
		assert_eq!(escaped, Value::String("&lt;div&gt;".to_string()));

		let number = escape_cell(&Value::from(42), &HashMap::new()).unwrap();
		assert_eq!(number, Value::from(42));
	}
}
