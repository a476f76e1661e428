use reinhardt_pager::{
	PagerConfig, PagerOptions, PagerOptionsPatch, PagerRegistry, PerPageSelect,
};
use rstest::*;

#[fixture]
fn registry() -> PagerRegistry {
	PagerRegistry::with_defaults()
}

#[fixture]
fn sorted_options() -> PagerOptions {
	let mut options = PagerOptions::default();
	options.merge(PagerOptionsPatch {
		url_var: Some("dg_page".to_string()),
		extra_vars: Some(
			[
				("orderBy".to_string(), "surname".to_string()),
				("direction".to_string(), "DESC".to_string()),
			]
			.into_iter()
			.collect(),
		),
		..Default::default()
	});
	options
}

#[rstest]
fn test_sliding_links_keep_extra_vars(registry: PagerRegistry, sorted_options: PagerOptions) {
	let pager = registry.resolve("Sliding").unwrap();
	let config = PagerConfig::new(sorted_options, 1, 10, 18, "/people");

	let html = pager.render_paging_links(&config);
	assert_eq!(
		html,
		concat!(
			"<b>1</b> | ",
			r#"<a href="/people?orderBy=surname&amp;direction=DESC&amp;dg_page=2" title="page 2">2</a> "#,
			r#"<a href="/people?orderBy=surname&amp;direction=DESC&amp;dg_page=2" title="next page">&gt;&gt;</a>"#,
		)
	);
}

#[rstest]
fn test_per_page_selector(registry: PagerRegistry, sorted_options: PagerOptions) {
	let pager = registry.resolve("Jumping").unwrap();
	let mut options = sorted_options;
	options.per_page_select = PerPageSelect {
		start: 10,
		end: 30,
		step: 10,
	};
	let config = PagerConfig::new(options, 2, 20, 100, "/people");

	let html = pager.render_per_page_selector(&config);
	assert_eq!(
		html,
		concat!(
			r#"<select name="setPerPage" onchange="document.location.href='/people?orderBy=surname&amp;direction=DESC&amp;dg_page=1&amp;setPerPage=' + this.value;">"#,
			r#"<option value="10">10</option>"#,
			r#"<option value="20" selected="selected">20</option>"#,
			r#"<option value="30">30</option>"#,
			"</select>",
		)
	);
}

#[rstest]
fn test_custom_navigation_images(registry: PagerRegistry) {
	let mut options = PagerOptions::default();
	options.merge(PagerOptionsPatch {
		prev_img: Some(r#"<img src="images/nav_back_off.gif" alt="Previous Page">"#.to_string()),
		next_img: Some(r#"<img src="images/nav_forward_off.gif" alt="Next Page">"#.to_string()),
		..Default::default()
	});
	let config = PagerConfig::new(options, 2, 5, 18, "/");

	let html = registry
		.resolve("sliding")
		.unwrap()
		.render_paging_links(&config);
	assert!(html.starts_with(
		r#"<a href="/?page=1" title="previous page"><img src="images/nav_back_off.gif" alt="Previous Page"></a>"#
	));
	assert!(html.ends_with(
		r#"<a href="/?page=3" title="next page"><img src="images/nav_forward_off.gif" alt="Next Page"></a>"#
	));
}
