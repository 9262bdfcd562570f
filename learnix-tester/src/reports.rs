use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use crate::runner::ScenarioResult;

#[allow(clippy::cast_precision_loss)]
fn success_rate(results: &[ScenarioResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let passed = results.iter().filter(|r| r.passed).count();
    (passed as f64 / results.len() as f64) * 100.0
}

pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Scenario Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "===========================".cyan())?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "Total scenarios: {total}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(out, "{status} {}", result.scenario_name.bold())?;
        writeln!(
            out,
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "   Average time: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    writeln!(out, "{json}")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    writeln!(out, "# Learnix Scenario Results\n")?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total scenarios**: {total}")?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", total - passed)?;
    writeln!(out, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(out, "## Detailed Results\n")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(out, "### {status} {}\n", result.scenario_name)?;
        writeln!(
            out,
            "- **Iterations**: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "- **Average time**: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool) -> ScenarioResult {
        ScenarioResult {
            scenario_name: name.to_string(),
            passed,
            iterations_run: 2,
            successful_iterations: if passed { 2 } else { 1 },
            failures: if passed {
                Vec::new()
            } else {
                vec!["Iteration 2: theme did not persist".to_string()]
            },
            average_duration: Duration::from_micros(40),
        }
    }

    #[test]
    fn markdown_lists_failures_under_failing_scenario() {
        let mut buf = Vec::new();
        generate_markdown_report(&mut buf, &[result("form-validation", true), result("theme-preference", false)])
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("- **Passed**: 1"));
        assert!(text.contains("### ❌ theme-preference"));
        assert!(text.contains("  - Iteration 2: theme did not persist"));
        assert!(text.contains("- **Success rate**: 50.0%"));
    }

    #[test]
    fn console_report_counts_results() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        generate_console_report(&mut buf, &[result("mobile-menu", true)], Duration::from_millis(3))
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Total scenarios: 1"));
        assert!(text.contains("✅ PASS mobile-menu"));
    }

    #[test]
    fn json_report_is_an_array() {
        let mut buf = Vec::new();
        generate_json_report(&mut buf, &[result("toast-lifecycle", true)]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["scenario_name"], "toast-lifecycle");
    }
}
