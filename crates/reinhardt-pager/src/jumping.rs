//! Jumping block pager
//!
//! Pages are grouped in fixed blocks of `delta`; the block holding the
//! current page is shown. Moving past the block edge jumps to the next one.
//!
//! ```text
//! << 6 | 7 | 8 | 9 | 10 >>
//! ```

use crate::config::PagerConfig;
use crate::driver::Pager;
use crate::links;

/// Jumping block pager driver
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpingPager;

impl JumpingPager {
	/// Returns the first and last page of the block holding the current page
	pub fn block(config: &PagerConfig) -> (usize, usize) {
		let pages = config.total_pages();
		let delta = config.options.delta.max(1);
		let current = config.current_page.clamp(1, pages.max(1));
		let start = (current - 1) / delta * delta + 1;
		(start, (start + delta - 1).min(pages))
	}
}

impl Pager for JumpingPager {
	fn render_paging_links(&self, config: &PagerConfig) -> String {
		if config.total_pages() <= 1 {
			return String::new();
		}

		let (start, end) = Self::block(config);
		let mut parts = Vec::new();
		if let Some(prev) = links::prev_link(config) {
			parts.push(prev);
		}
		parts.push(links::join_pages(config, start..=end));
		if let Some(next) = links::next_link(config) {
			parts.push(next);
		}
		parts.join(" ")
	}

	fn render_per_page_selector(&self, config: &PagerConfig) -> String {
		links::per_page_select_box(config)
	}
}
