use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::scenarios::{Scenario, ScenarioCtx};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct Runner<'a> {
    ctx: &'a ScenarioCtx,
}

impl<'a> Runner<'a> {
    pub const fn new(ctx: &'a ScenarioCtx) -> Self {
        Self { ctx }
    }

    pub fn run(&self, scenario: &Scenario, iterations: usize) -> ScenarioResult {
        if self.ctx.verbose {
            println!("🧪 Running scenario: {}", scenario.key.bright_white());
        }
        let mut failures = Vec::new();
        let mut timings = Vec::with_capacity(iterations);
        for i in 0..iterations {
            let start = Instant::now();
            let outcome = (scenario.run)(self.ctx);
            timings.push(start.elapsed());
            if let Err(err) = outcome {
                log::warn!("{} iteration {} failed: {err:#}", scenario.key, i + 1);
                failures.push(format!("Iteration {}: {err:#}", i + 1));
            }
        }

        let average_duration = if timings.is_empty() {
            Duration::ZERO
        } else {
            timings.iter().sum::<Duration>() / u32::try_from(timings.len()).unwrap_or(u32::MAX)
        };
        ScenarioResult {
            scenario_name: scenario.key.to_string(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: iterations - failures.len(),
            failures,
            average_duration,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(u64::MAX)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use learnix_core::SiteConfig;

    fn ctx() -> ScenarioCtx {
        ScenarioCtx {
            config: SiteConfig::default(),
            verbose: false,
        }
    }

    fn always_fails(_: &ScenarioCtx) -> anyhow::Result<()> {
        bail!("broken on purpose")
    }

    #[test]
    fn failing_scenario_records_every_iteration() {
        let scenario = Scenario {
            key: "broken",
            description: "",
            run: always_fails,
        };
        let ctx = ctx();
        let result = Runner::new(&ctx).run(&scenario, 3);
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 0);
        assert_eq!(result.failures.len(), 3);
        assert!(result.failures[0].contains("broken on purpose"));
    }

    #[test]
    fn zero_iterations_pass_with_zero_duration() {
        let scenario = Scenario {
            key: "noop",
            description: "",
            run: |_| Ok(()),
        };
        let ctx = ctx();
        let result = Runner::new(&ctx).run(&scenario, 0);
        assert!(result.passed);
        assert_eq!(result.average_duration, Duration::ZERO);
    }

    #[test]
    fn result_serializes_duration_as_micros() {
        let result = ScenarioResult {
            scenario_name: "x".to_string(),
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_micros(1500),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"average_duration\":1500"));
        let back: ScenarioResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.average_duration, result.average_duration);
    }
}
