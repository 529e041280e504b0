//! eyeframe command-line entry point.

mod commands;

use anyhow::Result;
use clap::Parser;
use eyeframe::cli::{Cli, Commands, ConfigCommands};
use eyeframe::logging;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::New { name, fps, dir } => commands::new::handle(&name, fps.as_deref(), dir),
        Commands::Scroll {
            text,
            output,
            fps,
            no_loop,
        } => commands::scroll::handle(&text, &output, fps.as_deref(), no_loop),
        Commands::Show { file, frame } => commands::show::handle(&file, frame),
        Commands::Info { file } => commands::info::handle(&file),
        Commands::Play { file, fps, cycles } => {
            commands::play::handle(&file, fps.as_deref(), cycles)
        }
        Commands::Normalize { file, output } => {
            commands::normalize::handle(&file, output.as_deref())
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
