//! Link and query helpers shared by the drivers

use crate::config::PagerConfig;

/// Query pairs every link carries: extra vars minus excluded and `skip` names.
fn base_pairs<'a>(config: &'a PagerConfig, skip: &[&str]) -> Vec<(&'a str, &'a str)> {
	let excluded = &config.options.exclude_vars;
	config
		.options
		.extra_vars
		.iter()
		.filter(|(key, _)| !excluded.iter().any(|e| e == *key) && !skip.contains(&key.as_str()))
		.map(|(key, value)| (key.as_str(), value.as_str()))
		.collect()
}

fn encode(pairs: &[(&str, &str)]) -> String {
	// Encoding a slice of string pairs cannot fail.
	serde_urlencoded::to_string(pairs).unwrap_or_default()
}

/// URL of `page`, HTML-escaped for use in an attribute.
pub(crate) fn page_href(config: &PagerConfig, page: usize) -> String {
	let url_var = config.url_var();
	let page = page.to_string();
	let mut pairs = base_pairs(config, &[url_var]);
	pairs.push((url_var, &page));
	escape_attr(&format!("{}?{}", config.path, encode(&pairs)))
}

/// URL prefix the per-page selector appends the chosen size to.
pub(crate) fn per_page_href_prefix(config: &PagerConfig) -> String {
	let url_var = config.url_var();
	let per_page_var = config.options.per_page_var.as_str();
	let mut pairs = base_pairs(config, &[url_var, per_page_var]);
	pairs.push((url_var, "1"));
	escape_attr(&format!(
		"{}?{}&{}=",
		config.path,
		encode(&pairs),
		per_page_var
	))
}

pub(crate) fn anchor(href: &str, title: &str, content: &str) -> String {
	format!(r#"<a href="{}" title="{}">{}</a>"#, href, title, content)
}

pub(crate) fn page_link(config: &PagerConfig, page: usize) -> String {
	if page == config.current_page {
		format!(
			"{}{}{}",
			config.options.cur_page_span_pre, page, config.options.cur_page_span_post
		)
	} else {
		anchor(
			&page_href(config, page),
			&format!("page {}", page),
			&page.to_string(),
		)
	}
}

pub(crate) fn prev_link(config: &PagerConfig) -> Option<String> {
	(config.current_page > 1).then(|| {
		anchor(
			&page_href(config, config.current_page - 1),
			"previous page",
			&config.options.prev_img,
		)
	})
}

pub(crate) fn next_link(config: &PagerConfig) -> Option<String> {
	(config.current_page < config.total_pages()).then(|| {
		anchor(
			&page_href(config, config.current_page + 1),
			"next page",
			&config.options.next_img,
		)
	})
}

pub(crate) fn join_pages(config: &PagerConfig, pages: impl Iterator<Item = usize>) -> String {
	let separator = format!(" {} ", config.options.separator);
	pages
		.map(|page| page_link(config, page))
		.collect::<Vec<_>>()
		.join(&separator)
}

/// `<select>` offering the configured page sizes; shared by every driver.
pub(crate) fn per_page_select_box(config: &PagerConfig) -> String {
	let options = &config.options;
	let mut sizes = options.per_page_select.sizes();
	if config.per_page > 0 && !sizes.contains(&config.per_page) {
		sizes.push(config.per_page);
		sizes.sort_unstable();
	}

	let mut html = format!(
		r#"<select name="{}" onchange="document.location.href='{}' + this.value;">"#,
		escape_attr(&options.per_page_var),
		per_page_href_prefix(config)
	);
	for size in sizes {
		if size == config.per_page {
			html.push_str(&format!(
				r#"<option value="{0}" selected="selected">{0}</option>"#,
				size
			));
		} else {
			html.push_str(&format!(r#"<option value="{0}">{0}</option>"#, size));
		}
	}
	html.push_str("</select>");
	html
}

/// HTML-escapes an attribute value, single quotes included.
///
/// Unlike cell escaping, `'` must be encoded here: the per-page href prefix
/// is embedded in the single-quoted string of the selector's `onchange`.
pub(crate) fn escape_attr(s: &str) -> String {
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
