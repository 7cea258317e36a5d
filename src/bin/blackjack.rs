use blackjack_rs::config::{Cli, PlayerMode};
use blackjack_rs::console::{ConsoleTable, PromptedPlayer};
use blackjack_rs::session::play_rounds;
use blackjack_rs::shoe::Shoe;
use clap::Parser;
use std::io::{self, IsTerminal};

fn init_logging() {
    // Logs go to stderr so they never interleave with the table on stdout.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn main() -> io::Result<()> {
    init_logging();
    let config =
        Cli::parse().into_config().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    log::debug!("starting with {config:?}");

    let color = config.color && io::stdout().is_terminal();
    let mut table = ConsoleTable::new(io::stdout()).with_color(color);
    let mut shoe = Shoe::new(config.seed);

    let tally = match config.player {
        PlayerMode::Prompt => {
            let mut player = PromptedPlayer::new(io::stdin().lock(), io::stdout());
            table.welcome()?;
            if !player.wait_for_enter() {
                return Ok(());
            }
            play_rounds(config.rounds, &mut shoe, &mut player, &mut table)
        }
        PlayerMode::Auto(mut bot) => play_rounds(config.rounds, &mut shoe, &mut bot, &mut table),
    };

    if config.rounds > 1 {
        table.summary(&tally)?;
    }
    table.finish()?;
    Ok(())
}
