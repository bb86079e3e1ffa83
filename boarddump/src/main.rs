use std::{env, path::PathBuf};

use anyhow::bail;
use colored::Colorize;
use libgame::{Game, boardsave::BoardSave, config::BoardConfig};

fn main() -> anyhow::Result<()> {
    let (output_path, config_path) = parse_args(env::args().skip(1))?;

    let config = match config_path {
        Some(config_path) => BoardConfig::load(config_path)?,
        None => BoardConfig::default(),
    };

    let game = Game::from_config(&config);
    print_summary(&game);

    BoardSave { config, game }.save(&output_path)?;
    println!("{}", output_path.display());

    Ok(())
}

/// Splits the command line into the output path and the optional config path.
fn parse_args<I>(args: I) -> anyhow::Result<(PathBuf, Option<String>)>
where
    I: IntoIterator<Item = String>,
{
    let args = args.into_iter().collect::<Vec<_>>();
    if args.len() > 2 {
        bail!("Usage: boarddump [output-path|-] [config-path]");
    }
    let mut args = args.into_iter();

    let output_path = args
        .next()
        .and_then(|path| (&path != "-").then_some(path))
        .map(PathBuf::from)
        .unwrap_or_else(default_output_path);

    Ok((output_path, args.next()))
}

fn default_output_path() -> PathBuf {
    let run_id = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
    PathBuf::from("boards").join(format!("{run_id}.json"))
}

fn print_summary(game: &Game) {
    let board = &game.board;
    let stats = &game.stats;

    let alive = format!("{}", stats.alive);
    let alive = if stats.alive == 0 {
        alive.bright_red()
    } else {
        alive.bright_green()
    };

    eprintln!(
        "{} {}x{} | {} / {} alive | {}",
        "board".bold(),
        board.width,
        board.height,
        alive,
        stats.cells,
        game.status.to_string().white(),
    );
}
