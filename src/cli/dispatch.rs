// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;

use console::style;

use crate::config::CmlConfig;
use crate::error::{CmlError, LintError, Result, ResultExt};
use crate::rules::RuleSet;

use super::args::{CheckArgs, Cli, Commands, HooksAction, InitArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        CmlConfig::load_from(config_path)?
    } else {
        CmlConfig::load()?
    };

    if cli.no_color || !config.ui.color {
        console::set_colors_enabled(false);
    }

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Rules => run_rules(&cli, &config),
        Commands::Hooks(args) => run_hooks(args.action),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &CmlConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let rules = RuleSet::from_config(config);

    let reports = if args.stdin {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        vec![rules.evaluate_text(&buffer)]
    } else if let Some(ref path) = args.message_file {
        let text = std::fs::read_to_string(path).context("Failed to read message file")?;
        vec![rules.evaluate_text(&text)]
    } else if args.range || args.target.contains("..") {
        rules.check_range(&args.target)?
    } else {
        vec![rules.check_commit(&args.target)?]
    };

    let mut errors = 0;
    let mut warnings = 0;
    for report in &reports {
        errors += report.error_count();
        warnings += report.warning_count();
        report.print(cli.format);
    }

    if errors > 0 || (cli.strict && warnings > 0) {
        Err(CmlError::Lint(LintError::ChecksFailed { errors, warnings }))
    } else {
        Ok(())
    }
}

/// Run the rules command.
fn run_rules(cli: &Cli, config: &CmlConfig) -> Result<()> {
    let rules = RuleSet::from_config(config);

    if matches!(cli.format, Some(super::args::OutputFormat::Json)) {
        let json = rules
            .rules()
            .iter()
            .map(|rule| {
                serde_json::json!({
                    "rule": rule.id.as_str(),
                    "severity": rule.severity.as_str(),
                    "when": rule.when.as_str(),
                    "param": rule.param.describe(),
                })
            })
            .collect::<Vec<_>>();
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
        return Ok(());
    }

    for rule in rules.rules() {
        println!(
            "{:<28} {:<8} {:<7} {}",
            style(rule.id.as_str()).cyan(),
            rule.severity,
            rule.when,
            rule.param.describe()
        );
        println!("  {}", style(rule.id.description()).dim());
    }

    Ok(())
}

/// Run the hooks command.
fn run_hooks(action: HooksAction) -> Result<()> {
    use crate::hooks::HookManager;

    let manager = HookManager::new()?;

    match action {
        HooksAction::Install { hook, force } => {
            match hook {
                Some(ref name) => manager.install_hook(name, force)?,
                None => manager.install_all(force)?,
            }
            println!("{} Hooks installed", style("✓").green().bold());
            Ok(())
        }
        HooksAction::Uninstall { hook } => {
            match hook {
                Some(ref name) => manager.uninstall_hook(name)?,
                None => manager.uninstall_all()?,
            }
            println!("{} Hooks removed", style("✓").green().bold());
            Ok(())
        }
        HooksAction::Status => {
            for (name, installed) in manager.status()? {
                let marker = if installed {
                    style("✓").green().bold()
                } else {
                    style("✗").dim()
                };
                println!("{} {}", marker, name);
            }
            Ok(())
        }
        HooksAction::Run { hook, args } => manager.run_hook(&hook, &args),
    }
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    let path = std::path::Path::new("cml.toml");

    if path.exists() && !args.force {
        return Err(CmlError::WithContext {
            context: "init".to_string(),
            message: "cml.toml already exists (use --force to overwrite)".to_string(),
        });
    }

    std::fs::write(path, crate::config::default::example_config())?;
    println!(
        "{} Wrote {}",
        style("✓").green().bold(),
        style("cml.toml").cyan()
    );

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cml {}", crate::version::version_string());
    Ok(())
}
