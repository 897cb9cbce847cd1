// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;
use std::path::Path;

use crate::config::{default, resolve_config, LintConfig, ResolvedConfig};
use crate::error::{CclintError, CommitError, ConfigError, Result, ResultExt, ValidationError};
use crate::rules::{RuleEngine, TypeValidator, ValidationVerdict};

use super::args::{CheckTypeArgs, Cli, Commands, InitArgs, LintArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Lint(args) => run_lint(&cli, &load_resolved(&cli)?, args),
        Commands::CheckType(args) => run_check_type(&cli, &load_resolved(&cli)?, args),
        Commands::Types => run_types(&cli, &load_resolved(&cli)?),
        Commands::PrintConfig => run_print_config(&cli, &load_resolved(&cli)?),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Load and resolve the configuration once for the whole run.
fn load_resolved(cli: &Cli) -> Result<ResolvedConfig> {
    let config = if let Some(config_path) = &cli.config {
        LintConfig::load_from(config_path)?
    } else {
        LintConfig::load()?
    };

    resolve_config(&config)
}

/// Run the lint command.
fn run_lint(cli: &Cli, config: &ResolvedConfig, args: LintArgs) -> Result<()> {
    tracing::debug!("Running lint command with args: {:?}", args);

    let message = match (&args.edit, &args.message) {
        (Some(path), _) => read_message_file(path)?,
        (None, Some(message)) => message.clone(),
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read commit message from stdin")?;
            buffer
        }
    };

    let engine = RuleEngine::new(config.clone());
    let result = engine.lint(&message)?;
    result.print(cli.format);

    if !result.is_valid() || (args.strict && !result.warnings.is_empty()) {
        return Err(CclintError::Validation(ValidationError::Rejected {
            errors: result.errors.len(),
            warnings: result.warnings.len(),
        }));
    }

    Ok(())
}

fn read_message_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        CclintError::Commit(CommitError::ReadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    })
}

/// Run the check-type command.
fn run_check_type(cli: &Cli, config: &ResolvedConfig, args: CheckTypeArgs) -> Result<()> {
    let Some(validator) = TypeValidator::from_config(config) else {
        println!("type-enum is disabled, every type is accepted");
        return Ok(());
    };

    let verdict = validator.validate(&args.commit_type);

    if cli.json_output() {
        let severity = match &verdict {
            ValidationVerdict::Valid => None,
            ValidationVerdict::Invalid { severity, .. } => Some(severity.level()),
        };
        println!(
            "{}",
            serde_json::json!({
                "type": args.commit_type,
                "valid": verdict.is_valid(),
                "severity": severity,
            })
        );
    } else if verdict.is_valid() {
        println!("✓ '{}' is an allowed commit type", args.commit_type);
    } else {
        println!(
            "✗ '{}' is not one of {}",
            args.commit_type,
            validator.allowed_types()
        );
    }

    verdict.into_result().map_err(CclintError::from)
}

/// Run the types command.
fn run_types(cli: &Cli, config: &ResolvedConfig) -> Result<()> {
    let validator = TypeValidator::from_config(config);
    let types: Vec<&str> = validator
        .as_ref()
        .map(|v| v.allowed_types().iter().collect())
        .unwrap_or_default();

    if types.is_empty() {
        tracing::debug!("type-enum is disabled or empty");
    }

    if cli.json_output() {
        println!("{}", serde_json::json!(types));
    } else {
        for commit_type in types {
            println!("{}", commit_type);
        }
    }

    Ok(())
}

/// Run the print-config command.
fn run_print_config(cli: &Cli, config: &ResolvedConfig) -> Result<()> {
    let rendered = if cli.json_output() {
        serde_json::to_string_pretty(config).context("Failed to render configuration")?
    } else {
        toml::to_string(config).context("Failed to render configuration")?
    };

    println!("{}", rendered.trim_end());
    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let (config_path, content) = if args.json {
        (Path::new(".commitlintrc.json"), default::example_config_json()?)
    } else {
        (Path::new(".commitlintrc.toml"), default::example_config().to_string())
    };

    if config_path.exists() && !args.force {
        return Err(CclintError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, content).context("Failed to write configuration")?;

    println!("✓ Created {}", config_path.display());

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cclint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
