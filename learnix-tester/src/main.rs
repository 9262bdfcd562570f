mod reports;
mod runner;
mod scenarios;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use learnix_core::SiteConfig;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::Instant;

use runner::{Runner, ScenarioResult};
use scenarios::{ScenarioCtx, expand_scenarios, get_scenario, list_scenarios};

#[derive(Debug, Parser)]
#[command(name = "learnix-tester", version)]
#[command(about = "Scenario checks for the Learnix page logic, no browser required")]
struct Args {
    /// Scenarios to run (comma-separated, `all` for the whole catalog)
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Number of iterations per scenario
    #[arg(long, default_value_t = 1)]
    iterations: usize,

    /// Site configuration JSON to test against instead of the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json", "markdown"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let ctx = ScenarioCtx {
        config: load_config(args.config.as_deref())?,
        verbose: args.verbose,
    };
    let results = run_scenarios(&ctx, &expand_scenarios(&args.scenarios), args.iterations);
    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:20} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🧭 Learnix Scenario Tester".bright_cyan().bold());
    println!("{}", "==========================".cyan());
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    let Some(path) = path else {
        return Ok(SiteConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = SiteConfig::from_json(&text)
        .with_context(|| format!("invalid site config in {}", path.display()))?;
    log::info!("using site config from {}", path.display());
    Ok(config)
}

fn run_scenarios(ctx: &ScenarioCtx, keys: &[String], iterations: usize) -> Vec<ScenarioResult> {
    let runner = Runner::new(ctx);
    let mut results = Vec::new();
    for key in keys {
        let Some(scenario) = get_scenario(key) else {
            eprintln!("⚠️  Unknown scenario: {}", key.yellow());
            continue;
        };
        results.push(runner.run(scenario, iterations));
    }
    results
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Learnix Scenario Results\n\n_No scenarios executed._"
                )?;
            } else {
                reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            scenarios: "all".to_string(),
            list_scenarios: false,
            iterations: 1,
            config: None,
            report: "json".to_string(),
            verbose: false,
            output: None,
        }
    }

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("learnix-tester-{label}-{}", std::process::id()))
    }

    #[test]
    fn list_is_skipped_unless_requested() {
        assert!(!maybe_list_scenarios(&base_args()).unwrap());
    }

    #[test]
    fn list_writes_every_scenario_to_output() {
        let path = temp_path("list");
        let args = Args {
            list_scenarios: true,
            output: Some(path.clone()),
            ..base_args()
        };
        assert!(maybe_list_scenarios(&args).unwrap());
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Available scenarios"));
        assert!(content.contains("submission-flow"));
    }

    #[test]
    fn unknown_scenarios_are_skipped() {
        let ctx = ScenarioCtx {
            config: SiteConfig::default(),
            verbose: false,
        };
        let results = run_scenarios(
            &ctx,
            &["nope".to_string(), "mobile-menu".to_string()],
            1,
        );
        assert_eq!(results.len(), 1);
        assert!(results[0].passed);
    }

    #[test]
    fn json_report_with_no_results_is_empty_array() {
        let path = temp_path("empty.json");
        let args = Args {
            output: Some(path.clone()),
            ..base_args()
        };
        write_reports(&args, &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content.trim(), "[]");
    }

    #[test]
    fn markdown_report_notes_empty_run() {
        let path = temp_path("empty.md");
        let args = Args {
            report: "markdown".to_string(),
            output: Some(path.clone()),
            ..base_args()
        };
        write_reports(&args, &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("_No scenarios executed._"));
    }

    #[test]
    fn config_file_overrides_defaults() {
        let path = temp_path("config.json");
        std::fs::write(&path, r#"{ "nav": { "desktop_breakpoint": 1024 } }"#).unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert!((config.nav.desktop_breakpoint - 1024.0).abs() < f64::EPSILON);
        assert_eq!(config.storage_key, "theme");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/learnix.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
