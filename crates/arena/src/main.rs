//! chessbot CLI
//!
//! Batch self-play between engines, or an interactive game in the terminal.

use anyhow::Context;
use arena::cli::{BatchArgs, Cli, Command, PlayArgs};
use arena::{
    game_seed, InteractiveGame, InteractiveOutcome, MatchRunner, RunConfig, TerminalContext,
    TerminalPresenter,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_batch(args: &BatchArgs) -> anyhow::Result<()> {
    let mut config = RunConfig::load_or_default(args.config.as_deref())
        .context("loading run configuration")?
        .batch;
    args.apply(&mut config);

    info!(
        games = config.games,
        depth = config.depth,
        white = %config.white,
        black = %config.black,
        seed = ?config.seed,
        "starting batch"
    );

    let runner = MatchRunner::new(config.match_config());
    let (white, black, seed) = (config.white, config.black, config.seed);
    let report = runner
        .run_batch_report(
            |game| white.build(seed.map(|s| game_seed(s, game, true))),
            |game| black.build(seed.map(|s| game_seed(s, game, false))),
        )
        .context("batch aborted")?;

    if let Some(path) = &args.output {
        report
            .save(path)
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    for line in report.tally.summary_lines() {
        println!("{line}");
    }
    Ok(())
}

fn run_play(args: &PlayArgs) -> anyhow::Result<()> {
    let mut config = RunConfig::load_or_default(args.config.as_deref())
        .context("loading run configuration")?
        .play;
    args.apply(&mut config);

    let mut interactive = InteractiveGame::from_config(&config).context("setting up the game")?;
    let mut context = TerminalContext::stdio(interactive.human());
    let mut presenter = TerminalPresenter::new(&mut context);

    match interactive.run(&mut presenter)? {
        InteractiveOutcome::Finished { termination, .. } => println!("Game over: {termination}"),
        InteractiveOutcome::Quit => println!("Game abandoned"),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    match &cli.command {
        Command::Batch(args) => run_batch(args),
        Command::Play(args) => run_play(args),
    }
}
