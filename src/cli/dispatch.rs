// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::commit::CommitMessage;
use crate::config::{default as templates, ClintConfig, Severity};
use crate::error::{ClintError, ConfigError, Result, ResultExt, ValidationError};
use crate::rules::{EvaluationReport, RuleEngine, RuleKind};
use console::style;
use std::io::Read;

use super::args::{
    CheckArgs, Cli, Commands, ConfigPreset, InitArgs, LintArgs, OutputFormat, VerbsArgs,
};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        ClintConfig::load_from(config_path)?
    } else {
        ClintConfig::load()?
    };

    if !config.ui.color {
        console::set_colors_enabled(false);
    }

    // Dispatch to the appropriate command handler
    match cli.command.clone() {
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Lint(args) => run_lint(&cli, &config, args),
        Commands::Rules => run_rules(&cli, &config),
        Commands::Verbs(args) => run_verbs(&config, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &ClintConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let engine = RuleEngine::new(config)?;

    let reports = if args.target.contains("..") {
        engine.check_range(&args.target)?
    } else if args.range {
        engine.check_range(&format!("{}..HEAD", args.target))?
    } else {
        vec![engine.check_commit(&args.target)?]
    };

    if reports.is_empty() {
        match cli.format {
            Some(OutputFormat::Json) => println!("[]"),
            _ => println!("No commits to lint"),
        }
        return Ok(());
    }

    finish(&reports, cli.format, args.strict, config.ui.show_passed)
}

/// Run the lint command.
fn run_lint(cli: &Cli, config: &ClintConfig, args: LintArgs) -> Result<()> {
    tracing::debug!("Running lint command with args: {:?}", args);

    let engine = RuleEngine::new(config)?;

    let message = match args.edit {
        Some(ref path) => {
            let bytes =
                std::fs::read(path).context(format!("Failed to read {}", path.display()))?;
            CommitMessage::from_edit_file(&decode_message(&bytes, &path.display().to_string()))
        }
        None => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read message from stdin")?;
            CommitMessage::parse(&decode_message(&bytes, "stdin"))
        }
    };

    let report = engine.evaluate(&message);
    finish(
        std::slice::from_ref(&report),
        cli.format,
        args.strict,
        config.ui.show_passed,
    )
}

/// Message text from raw bytes; invalid UTF-8 is replaced rather than
/// rejected, as for commits read from git.
fn decode_message(bytes: &[u8], source: &str) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            tracing::warn!("Message from {} is not valid UTF-8", source);
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

/// Print reports and turn failures into an error.
fn finish(
    reports: &[EvaluationReport],
    format: Option<OutputFormat>,
    strict: bool,
    show_passed: bool,
) -> Result<()> {
    let failed = reports.iter().filter(|r| !r.passed(strict)).count();

    match format {
        Some(OutputFormat::Json) if reports.len() == 1 => {
            reports[0].print(format, show_passed, strict)
        }
        Some(OutputFormat::Json) => {
            let json: Vec<_> = reports.iter().map(|r| r.to_json(strict)).collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
        _ => {
            for report in reports {
                report.print(format, show_passed, strict);
            }
            let summary = format!(
                "{} message(s) checked, {} failed",
                reports.len(),
                failed
            );
            if failed == 0 {
                println!("{}", style(summary).green());
            } else {
                println!("{}", style(summary).red());
            }
        }
    }

    if failed > 0 {
        Err(ClintError::Validation(ValidationError::LintFailed {
            failed,
            checked: reports.len(),
        }))
    } else {
        Ok(())
    }
}

/// Run the rules command.
fn run_rules(cli: &Cli, config: &ClintConfig) -> Result<()> {
    tracing::debug!("Running rules command");

    let engine = RuleEngine::new(config)?;

    if cli.format == Some(OutputFormat::Json) {
        let json: Vec<_> = engine
            .rules()
            .iter()
            .map(|r| {
                serde_json::json!({
                    "rule": r.rule.name(),
                    "severity": r.setting.severity.as_str(),
                    "when": r.setting.when.as_str(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
        return Ok(());
    }

    for configured in engine.rules().iter() {
        let name = configured.rule.name();
        let description = name
            .parse::<RuleKind>()
            .map(|kind| kind.description())
            .unwrap_or("");
        let label = format!("{:<7}", configured.setting.severity.as_str());
        let severity = match configured.setting.severity {
            Severity::Error => style(label).red(),
            Severity::Warning => style(label).yellow(),
            Severity::Off => style(label).dim(),
        };
        println!(
            "{} {:<22} {:<6} {}",
            severity,
            name,
            configured.setting.when.as_str(),
            style(description).dim()
        );
    }

    Ok(())
}

/// Run the verbs command.
fn run_verbs(config: &ClintConfig, args: VerbsArgs) -> Result<()> {
    tracing::debug!("Running verbs command with args: {:?}", args);

    let engine = RuleEngine::new(config)?;
    let verbs = &engine.options().verbs;

    match args.check {
        Some(word) if verbs.contains(&word) => {
            println!("✓ '{}' is allowed", word);
            Ok(())
        }
        Some(word) => Err(ClintError::WithContext {
            context: "verbs".to_string(),
            message: format!("'{}' is not in the allowlist", word),
        }),
        None => {
            for verb in verbs.iter() {
                println!("{}", verb);
            }
            Ok(())
        }
    }
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("clint.toml");

    if config_path.exists() && !args.force {
        return Err(ClintError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    let config_content = match args.preset {
        Some(ConfigPreset::Minimal) => templates::minimal_config(),
        Some(ConfigPreset::Strict) => templates::strict_config(),
        Some(ConfigPreset::Standard) | None => templates::example_config(),
    };

    std::fs::write(config_path, config_content).context("Failed to write configuration")?;

    println!("✓ Created clint.toml");

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("clint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }
    if let Some(rustc) = crate::version::RUSTC_SEMVER {
        println!("rustc: {}", rustc);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_message_utf8() {
        assert_eq!(decode_message(b"dog: refill water bowl", "stdin"), "dog: refill water bowl");
    }

    #[test]
    fn test_decode_message_invalid_utf8_is_lossy() {
        let text = decode_message(b"dog: refill w\xffter bowl", "stdin");
        assert_eq!(text, "dog: refill w\u{FFFD}ter bowl");
    }
}
