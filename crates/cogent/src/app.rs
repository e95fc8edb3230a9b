use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    root_command()
        .subcommand(hook_command())
        .subcommand(bootstrap_command())
}

fn root_command() -> Command {
    Command::new("cogent")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bridge agent lifecycle events to NATS and guard tool calls")
        .long_about(
            "Cogent is invoked by the agent host runtime at lifecycle points \
             (session start, pre/post tool use, notifications). Each invocation \
             reads one JSON event from stdin, forwards it to the message bus, \
             and for pre-tool-use may block the pending tool call.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}

fn hook_command() -> Command {
    Command::new("hook")
        .about("Handle one lifecycle event (reads JSON from stdin)")
        .arg(
            Arg::new("event")
                .help("Event name: session-start, pre-tool-use, post-tool-use, notification")
                .required(true)
                .index(1),
        )
}

fn bootstrap_command() -> Command {
    Command::new("bootstrap")
        .about("Prepare the agent home, then optionally exec the agent process")
        .long_about(
            "Creates the agent home directories, installs the default settings \
             file if absent, symlinks skill and command content from the assets \
             directory, and resolves the credential context. All steps are \
             idempotent and best-effort. Arguments after the step list are \
             exec'd as the long-running process.",
        )
        .arg(
            Arg::new("command")
                .help("Command (and arguments) to exec after bootstrapping")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
}
