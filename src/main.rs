mod cli;
mod config;
mod mixer;
mod paths;
mod testutil;
mod toggle;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.show_config_path {
        println!("{}", config::default_config_path()?.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => {
            let path = paths::expand_tilde(path);
            if cli.debug {
                eprintln!("[debug] config: loading {}", path.display());
            }
            config::load_config(&path)?
        }
        None => {
            if cli.debug {
                eprintln!(
                    "[debug] config: loading default {}",
                    config::default_config_path()?.display()
                );
            }
            config::load_default_config()?
        }
    };

    let overrides = config::Overrides {
        program: cli.program,
        device: cli.device,
        control: cli.control,
    };
    let cmd = config::resolve_command(&config, overrides)?;

    // Mixer failures are part of the result, never an exit code.
    let result = toggle::toggle_mute(&cmd, cli.debug);
    output(&result, cli.json, toggle::format_toggle_human)
}

fn output<T: serde::Serialize>(result: &T, json: bool, human_fn: fn(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        let text = human_fn(result);
        if !text.is_empty() {
            println!("{}", text);
        }
    }
    Ok(())
}
