use clap::Parser;
use lineup::cli::commands::Cli;
use lineup::cli::handlers;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = lineup::tui::run(cli.file.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(cmd) => {
            if let Err(e) = handlers::dispatch(cmd, cli.file.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
