//! Reinhardt Grid Demo
//!
//! Renders an eighteen-row sample table through the Tera grid renderer and
//! prints the resulting page to stdout.
//!
//! ## Usage
//!
//! ```bash
//! reinhardt-grid-demo list
//! reinhardt-grid-demo static --page 2
//! reinhardt-grid-demo dynamic --order-by surname --direction DESC --per-page 5
//! reinhardt-grid-demo header-formatter --options grid.toml
//! reinhardt-grid-demo custom-results --show-source
//! ```

mod sample;
mod showcase;

use clap::Parser;
use reinhardt_tables::SortDirection;
use reinhardt_template::RenderOptionsPatch;
use showcase::{Example, GridQuery};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reinhardt-grid-demo")]
#[command(about = "Render the sample data grid through Tera templates", long_about = None)]
#[command(version)]
struct Cli {
	/// Example to render
	#[arg(value_enum, value_name = "EXAMPLE")]
	example: Example,

	/// TOML file with renderer options, applied after the example's own options
	#[arg(long, value_name = "FILE")]
	options: Option<PathBuf>,

	/// Directory to load templates from instead of the bundled ones
	#[arg(long, value_name = "DIR")]
	template_dir: Option<PathBuf>,

	/// Page to show (1-indexed)
	#[arg(long, default_value_t = 1)]
	page: usize,

	/// Rows per page
	#[arg(long, default_value_t = 10)]
	per_page: usize,

	/// Field to sort by
	#[arg(long, value_name = "FIELD")]
	order_by: Option<String>,

	/// Sort direction (ASC or DESC)
	#[arg(long, default_value = "ASC")]
	direction: SortDirection,

	/// Print the example's template source instead of rendering it
	#[arg(long)]
	show_source: bool,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbosity: u8,
}

impl Cli {
	fn query(&self) -> GridQuery {
		GridQuery {
			page: self.page,
			per_page: self.per_page,
			order_by: self.order_by.clone(),
			direction: self.direction,
		}
	}
}

fn init_tracing(verbosity: u8) {
	let level = match verbosity {
		0 => Level::WARN,
		1 => Level::INFO,
		2 => Level::DEBUG,
		_ => Level::TRACE,
	};
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
		.init();
}

fn run(cli: &Cli) -> anyhow::Result<String> {
	if cli.example == Example::List {
		return Ok(showcase::list());
	}

	if cli.show_source {
		let template = cli.example.template().unwrap_or_default();
		return showcase::template_source(cli.template_dir.as_deref(), template);
	}

	let overrides = cli
		.options
		.as_deref()
		.map(RenderOptionsPatch::from_toml_file)
		.transpose()?;
	let container = showcase::load_templates(cli.template_dir.as_deref())?;
	showcase::render(cli.example, container, &cli.query(), overrides)
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbosity);

	let output = run(&cli)?;
	print!("{}", output);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::fs;
	use tempfile::TempDir;

	fn parse(args: &[&str]) -> Cli {
		Cli::try_parse_from(std::iter::once("reinhardt-grid-demo").chain(args.iter().copied()))
			.unwrap()
	}

	#[rstest]
	fn test_defaults() {
		let cli = parse(&["static"]);
		assert_eq!(cli.example, Example::Static);
		assert_eq!(cli.query(), GridQuery::default());
		assert!(!cli.show_source);
	}

	#[rstest]
	fn test_query_arguments() {
		let cli = parse(&[
			"dynamic",
			"--page",
			"2",
			"--per-page",
			"5",
			"--order-by",
			"surname",
			"--direction",
			"desc",
		]);
		let query = cli.query();
		assert_eq!(query.page, 2);
		assert_eq!(query.per_page, 5);
		assert_eq!(query.order_by.as_deref(), Some("surname"));
		assert_eq!(query.direction, SortDirection::Desc);
	}

	#[rstest]
	fn test_unknown_example_rejected() {
		let result = Cli::try_parse_from(["reinhardt-grid-demo", "elastic"]);
		assert!(result.is_err());
	}

	#[rstest]
	fn test_run_list() {
		let output = run(&parse(&["list"])).unwrap();
		assert!(output.starts_with("static"));
	}

	#[rstest]
	fn test_run_show_source() {
		let output = run(&parse(&["formatted-results-arguments", "--show-source"])).unwrap();
		assert!(output.contains("getResults(format=\"Records %s - %s of %s\""));
	}

	#[rstest]
	fn test_run_with_options_file() {
		let dir = TempDir::new().unwrap();
		let options = dir.path().join("grid.toml");
		fs::write(
			&options,
			"resultsFormat = \"%s people\"\n\n[pagerOptions]\nmode = \"Jumping\"\n",
		)
		.unwrap();

		let cli = parse(&[
			"formatted-results-default",
			"--options",
			options.to_str().unwrap(),
		]);
		let output = run(&cli).unwrap();
		assert!(output.contains("18 people"));
	}

	#[rstest]
	fn test_run_with_template_dir() {
		let dir = TempDir::new().unwrap();
		for (name, source) in showcase::BUNDLED_TEMPLATES {
			fs::write(dir.path().join(name), source).unwrap();
		}
		fs::write(
			dir.path().join("static_list.html"),
			"{% for row in recordSet %}[{{ row.name }}]{% endfor %}",
		)
		.unwrap();

		let cli = parse(&[
			"static",
			"--per-page",
			"2",
			"--template-dir",
			dir.path().to_str().unwrap(),
		]);
		let output = run(&cli).unwrap();
		assert!(output.contains("[My Name][My Name2]"));
	}
}
