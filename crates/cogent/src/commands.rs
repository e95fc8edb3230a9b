//! Command handlers for the cogent CLI.

use std::io::Read;

use clap::ArgMatches;
use cogent_config::CogentConfig;
use cogent_core::bootstrap;
use cogent_core::hooks::{self, HookEvent, HookInput};
use tracing::warn;

/// Route a parsed invocation to its handler. Returns the process exit
/// code.
pub fn run_command(matches: &ArgMatches) -> Result<i32, Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("hook", sub)) => run_hook(sub),
        Some(("bootstrap", sub)) => run_bootstrap(sub),
        _ => Err("unknown command".into()),
    }
}

fn run_hook(matches: &ArgMatches) -> Result<i32, Box<dyn std::error::Error>> {
    let event_arg = matches
        .get_one::<String>("event")
        .ok_or("missing event name")?;

    let event = HookEvent::from_arg(event_arg)
        .ok_or_else(|| format!("unknown hook event '{event_arg}'"))?;

    let config = load_config_lossy();

    let mut text = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut text) {
        // Unreadable stdin is treated like an empty event, not a failure.
        warn!(event = "cli.hook.stdin_unreadable", error = %e);
    }
    let input = HookInput::from_stdin_text(&text);

    let output = hooks::dispatch(event, &input, &config);
    Ok(output.exit_code)
}

fn run_bootstrap(matches: &ArgMatches) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_config_lossy();
    bootstrap::run(&config);

    if let Some(mut command) = matches.get_many::<String>("command") {
        if let Some(program) = command.next() {
            let args: Vec<String> = command.cloned().collect();
            // Only returns on failure.
            let err = bootstrap::exec_process(program, &args);
            return Err(format!("failed to exec '{program}': {err}").into());
        }
    }

    Ok(0)
}

/// Load configuration, falling back to defaults on error.
///
/// Hooks must keep working (and exit 0) even when the operator
/// misconfigured the environment, so a load failure is a warning here,
/// not a fatal error.
fn load_config_lossy() -> CogentConfig {
    match CogentConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!(event = "cli.config.load_failed", error = %e);
            CogentConfig::default()
        }
    }
}
