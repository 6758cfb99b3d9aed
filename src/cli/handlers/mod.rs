use std::io::Read;

use chrono::Local;
use tracing::info;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::cli::script;
use crate::io::config_io;
use crate::model::config::GamifyConfig;
use crate::ops::Board;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli, config: GamifyConfig) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    match cli.command {
        None => crate::tui::run(config),
        Some(cmd) => match cmd {
            Commands::Replay(args) => cmd_replay(args, &config, json),
            Commands::Config => cmd_config(&config, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_replay(
    args: ReplayArgs,
    config: &GamifyConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = if args.script == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.script)
            .map_err(|e| format!("cannot read script '{}': {}", args.script, e))?
    };

    let now = Local::now().naive_local();
    let mut board = Board::new(config, now);
    board.tick(now);
    let results = script::run_script(&mut board, &text)?;
    info!(steps = results.len(), score = board.score(), "replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&replay_to_json(&results, &board))?);
    } else {
        println!("{}", format_board(&board));
    }
    Ok(())
}

fn cmd_config(config: &GamifyConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", config_io::render_config(config)?);
    }
    Ok(())
}
