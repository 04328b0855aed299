//! Linewise - An interactive line-oriented text editor.
//!
//! # Usage
//!
//! ```bash
//! linewise
//! linewise notes.txt
//! linewise --no-menu --debug-log session.log notes.txt
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use linewise::app::App;
use linewise::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use linewise::perf;

/// An interactive line-oriented text editor
#[derive(Parser, Debug)]
#[command(name = "linewise", version, about, long_about = None)]
struct Cli {
    /// Text file to open at start
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Do not print the menu before each prompt
    #[arg(long)]
    no_menu: bool,

    /// Print timing information to stderr
    #[arg(long)]
    perf: bool,

    /// Write session events to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the prompts on stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    perf::set_enabled(effective.perf);
    let debug_log_path = effective
        .debug_log
        .clone()
        .or_else(|| std::env::var_os("LINEWISE_DEBUG_LOG").map(PathBuf::from));
    if let Some(path) = debug_log_path.as_deref()
        && let Err(err) = perf::set_debug_log_path(Some(path))
    {
        tracing::warn!(path = %path.display(), %err, "failed to open debug log");
    }
    if perf::is_debug_log_enabled() {
        tracing::debug!("session debug log enabled");
        let file = cli
            .file
            .as_deref()
            .map_or_else(|| "(none)".to_string(), |p| p.display().to_string());
        perf::log_event("session.start", format!("file={file}"));
    }

    let mut app = App::new()
        .with_initial_file(cli.file)
        .with_menu(!effective.no_menu);

    app.run().context("Editor session failed")
}
