//! Sliding window pager
//!
//! Shows `delta` pages either side of the current page. Near the first or
//! last page the window shifts so it keeps `2 * delta + 1` pages. Pages
//! outside the window are reachable through first/last page links.
//!
//! ```text
//! << [1] ... 4 | 5 | 6 | 7 | 8 ... [12] >>
//! ```

use crate::config::PagerConfig;
use crate::driver::Pager;
use crate::links;

/// Sliding window pager driver
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingPager;

impl SlidingPager {
	/// Returns the first and last page of the window around the current page
	pub fn window(config: &PagerConfig) -> (usize, usize) {
		let pages = config.total_pages();
		let delta = config.options.delta;
		let width = 2 * delta + 1;
		if pages <= width {
			return (1, pages);
		}

		let current = config.current_page.clamp(1, pages);
		let start = current.saturating_sub(delta).max(1);
		let start = start.min(pages + 1 - width);
		(start, start + width - 1)
	}
}

impl Pager for SlidingPager {
	fn render_paging_links(&self, config: &PagerConfig) -> String {
		let pages = config.total_pages();
		if pages <= 1 {
			return String::new();
		}

		let options = &config.options;
		let (start, end) = Self::window(config);
		let mut parts = Vec::new();

		if let Some(prev) = links::prev_link(config) {
			parts.push(prev);
		}
		if start > 1 {
			let text = options
				.first_page_text
				.clone()
				.unwrap_or_else(|| "1".to_string());
			parts.push(links::anchor(
				&links::page_href(config, 1),
				"first page",
				&format!("{}{}{}", options.first_page_pre, text, options.first_page_post),
			));
			if start > 2 {
				parts.push("...".to_string());
			}
		}

		parts.push(links::join_pages(config, start..=end));

		if end < pages {
			if end + 1 < pages {
				parts.push("...".to_string());
			}
			let text = options
				.last_page_text
				.clone()
				.unwrap_or_else(|| pages.to_string());
			parts.push(links::anchor(
				&links::page_href(config, pages),
				"last page",
				&format!("{}{}{}", options.last_page_pre, text, options.last_page_post),
			));
		}
		if let Some(next) = links::next_link(config) {
			parts.push(next);
		}

		parts.join(" ")
	}

	fn render_per_page_selector(&self, config: &PagerConfig) -> String {
		links::per_page_select_box(config)
	}
}
