//! printf-style results summary
//!
//! Supported conversions are `%s`, `%d`, `%i`, `%u` and `%f`; `%%` is a
//! literal percent sign. Any other `%` sequence is copied as-is and is not
//! counted as a placeholder.

use crate::error::{GridError, GridResult};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
	Literal(char),
	Percent,
	Placeholder(char),
}

fn tokenize(format: &str) -> Vec<Token> {
	let mut tokens = Vec::with_capacity(format.len());
	let mut chars = format.chars().peekable();
	while let Some(c) = chars.next() {
		if c != '%' {
			tokens.push(Token::Literal(c));
			continue;
		}
		match chars.peek().copied() {
			Some('%') => {
				chars.next();
				tokens.push(Token::Percent);
			}
			Some(conv @ ('s' | 'd' | 'i' | 'u' | 'f')) => {
				chars.next();
				tokens.push(Token::Placeholder(conv));
			}
			_ => tokens.push(Token::Literal('%')),
		}
	}
	tokens
}

/// Counts the conversions in `format`
///
/// # Examples
///
/// ```
/// use reinhardt_template::count_placeholders;
///
/// assert_eq!(count_placeholders("You have %s results in %s pages"), 2);
/// assert_eq!(count_placeholders("100%% of %d"), 1);
/// ```
pub fn count_placeholders(format: &str) -> usize {
	tokenize(format)
		.iter()
		.filter(|t| matches!(t, Token::Placeholder(_)))
		.count()
}

fn as_text(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

fn as_number(value: &Value) -> f64 {
	match value {
		Value::Number(n) => n.as_f64().unwrap_or_default(),
		Value::String(s) => s.trim().parse().unwrap_or_default(),
		Value::Bool(b) => f64::from(u8::from(*b)),
		_ => 0.0,
	}
}

/// Formats `args` into `format`
///
/// Missing arguments render as empty strings (or 0 for numeric
/// conversions); surplus arguments are ignored.
pub fn sprintf(format: &str, args: &[Value]) -> String {
	let mut out = String::with_capacity(format.len());
	let mut args = args.iter();
	for token in tokenize(format) {
		match token {
			Token::Literal(c) => out.push(c),
			Token::Percent => out.push('%'),
			Token::Placeholder(conv) => {
				let arg = args.next().unwrap_or(&Value::Null);
				match conv {
					's' => out.push_str(&as_text(arg)),
					'f' => out.push_str(&format!("{:.6}", as_number(arg))),
					'u' => out.push_str(&(as_number(arg).trunc().max(0.0) as u64).to_string()),
					_ => out.push_str(&(as_number(arg).trunc() as i64).to_string()),
				}
			}
		}
	}
	out
}

/// Builds the results summary line
///
/// Without `args` the format receives the total record count and the page
/// count, so it may hold at most two conversions. With `args` the number of
/// conversions must equal the number of arguments.
pub(crate) fn results_summary(
	format: &str,
	args: &[Value],
	total_records: usize,
	pages: usize,
) -> GridResult<String> {
	let placeholders = count_placeholders(format);

	if args.is_empty() {
		if placeholders > 2 {
			return Err(GridError::FormatMismatch {
				placeholders,
				arguments: 2,
			});
		}
		return Ok(sprintf(format, &[Value::from(total_records), Value::from(pages)]));
	}

	if placeholders != args.len() {
		return Err(GridError::FormatMismatch {
			placeholders,
			arguments: args.len(),
		});
	}
	Ok(sprintf(format, args))
}
