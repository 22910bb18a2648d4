use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use keycalc::config::Config;
use keycalc::display::Display;
use keycalc::input::{CalculatorState, Keymap, parse_key_sequence};

#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("KEYCALC_GIT_HASH"), ")"),
    about = "Keypad calculator for the terminal"
)]
struct Cli {
    /// Key sequence to evaluate, e.g. "12+3<Enter>" (omit for interactive mode)
    #[arg(long, short = 'k', value_name = "SEQ")]
    keys: Option<String>,

    /// Path to the config file (defaults to ~/.config/keycalc/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Display width in columns (overrides the config file)
    #[arg(long, short = 'w', value_name = "N")]
    width: Option<u16>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file(cli.config.as_deref())?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.display.set_width(width);
    }

    let keymap = Keymap::from_config(&config.keybindings).context("Invalid keybindings")?;
    let display = Display::from_config(&config.display);
    let mut state = CalculatorState::new(config.symbols.clone(), keymap);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.keys {
        Some(keys) => {
            let presses = parse_key_sequence(&keys).context("Invalid key sequence")?;
            for press in presses {
                state.on_key_press(press);
                if state.should_exit {
                    break;
                }
            }
            display.write_to(&mut out, &state.registers())?;
        }
        None => run_interactive(&mut state, &display, &mut out)?,
    }

    Ok(())
}

/// Reads key sequences from stdin, one per line, until EOF or a quit key.
fn run_interactive<W: Write>(
    state: &mut CalculatorState,
    display: &Display,
    out: &mut W,
) -> anyhow::Result<()> {
    log::info!("Starting interactive session (Ctrl+Q or EOF to quit)");

    if state.take_redraw() {
        display.write_to(out, &state.registers())?;
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;

        let presses = match parse_key_sequence(&line) {
            Ok(presses) => presses,
            Err(err) => {
                log::warn!("Skipping malformed input line: {err}");
                eprintln!("keycalc: {err}");
                continue;
            }
        };

        for press in presses {
            state.on_key_press(press);
            if state.should_exit {
                break;
            }
        }

        if state.should_exit {
            break;
        }

        if state.take_redraw() {
            display.write_to(out, &state.registers())?;
        }
    }

    log::info!("Session ended");
    Ok(())
}
