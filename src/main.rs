use clap::Parser;
use motifmark::{
    cli::{init_verbose, Cli, FULL_VERSION},
    commands::mark,
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    log::info!("Running {}-{}", env!("CARGO_PKG_NAME"), *FULL_VERSION);
    mark::motifmark(cli.args)?;
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
