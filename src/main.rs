use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use curry_props::curry::{curry, element};
use curry_props::merge::MergePolicy;
use curry_props::template::{display_name_of, parse_props_file, parse_template_file};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "CURRY_LOG";

#[derive(Parser)]
#[command(name = "curry")]
#[command(
	author,
	version,
	about = "Curry base props into a template and merge them with call-site overrides"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Merge a template's props with an overrides file and print the result as JSON
	Merge {
		/// Template file (TOML, or JSON with a .json extension)
		template: PathBuf,

		/// Overrides file containing a bare props table
		overrides: PathBuf,

		/// Merge policy
		#[arg(long, value_enum, default_value_t = Mode::Soft)]
		mode: Mode,

		/// Let the template win for keys without a special rule (smart mode only)
		#[arg(long)]
		hard: bool,

		/// Display name for the curried template
		#[arg(long, value_name = "NAME")]
		display_name: Option<String>,
	},
	/// Print a template's display name, tag, prop types and base props
	Show {
		template: PathBuf,
	},
	/// Check template files for errors without merging anything
	Validate {
		#[arg(required = true)]
		templates: Vec<PathBuf>,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
	/// Overrides win on conflict
	Soft,
	/// Template wins on conflict
	Hard,
	/// Per-key strategies
	Smart,
}

fn main() -> ExitCode {
	init_logging();

	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging() {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Merge {
			template,
			overrides,
			mode,
			hard,
			display_name,
		} => handle_merge(&template, &overrides, mode, hard, display_name.as_deref()),
		Commands::Show { template } => handle_show(&template),
		Commands::Validate { templates } => handle_validate(&templates),
	}
}

fn handle_merge(
	template_path: &Path,
	overrides_path: &Path,
	mode: Mode,
	hard: bool,
	display_name: Option<&str>,
) -> Result<ExitCode> {
	let policy = match (mode, hard) {
		(Mode::Soft, false) => MergePolicy::Soft,
		(Mode::Hard, false) => MergePolicy::Hard,
		(Mode::Smart, hard) => MergePolicy::Smart { hard },
		(_, true) => anyhow::bail!("--hard only applies to --mode smart"),
	};

	let loaded = parse_template_file(template_path)
		.with_context(|| format!("Failed to load template {}", template_path.display()))?;
	let overrides = parse_props_file(overrides_path)
		.with_context(|| format!("Failed to load overrides {}", overrides_path.display()))?;

	let display_name = display_name.or(loaded.display_name.as_deref());
	let curried = curry(loaded.template, display_name, policy, element);
	let built = curried.apply(&overrides);

	let mut output = built.to_json();
	output["displayName"] = serde_json::Value::from(curried.display_name());
	let rendered = serde_json::to_string_pretty(&output).context("Failed to render JSON")?;
	println!("{}", rendered);

	Ok(ExitCode::SUCCESS)
}

fn handle_show(template_path: &Path) -> Result<ExitCode> {
	let loaded = parse_template_file(template_path)
		.with_context(|| format!("Failed to load template {}", template_path.display()))?;

	let curried = curry(
		loaded.template,
		loaded.display_name.as_deref(),
		MergePolicy::default(),
		element,
	);
	let template = curried.template();

	println!("# Source: {}", loaded.path.display());
	println!("# display-name: {}", curried.display_name());
	println!("# tag: {}", display_name_of(&template.tag));

	if let Some(prop_types) = curried.prop_types()
		&& !prop_types.is_empty()
	{
		println!("# prop-types:");
		for (name, kind) in prop_types {
			println!("    {}: {}", name, kind);
		}
	}

	println!("# props: {}", template.props.len());
	for (key, value) in &template.props {
		println!("    {} = {}", key, value.to_json());
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_validate(templates: &[PathBuf]) -> Result<ExitCode> {
	for path in templates {
		match parse_template_file(path) {
			Ok(loaded) => println!(
				"  {} ({} props)",
				loaded.path.display(),
				loaded.template.props.len()
			),
			Err(e) => {
				eprintln!("Template error: {}", e);
				return Ok(ExitCode::FAILURE);
			}
		}
	}

	println!("All templates are valid.");
	Ok(ExitCode::SUCCESS)
}
