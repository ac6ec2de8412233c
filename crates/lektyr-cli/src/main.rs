//! Lektyr CLI binary.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lektyr_cli::cli::{Cli, Command};
use lektyr_cli::config::CliConfig;
use lektyr_cli::{commands, config_handlers};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    if let Err(err) = run(args).await {
        if err.is_session_expired() {
            eprintln!("session expired; run `lektyr login` to continue");
        } else {
            eprintln!("error: {err}");
        }
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> lektyr_cli::Result<()> {
    let config_path = args.config.as_deref();

    match args.command {
        // Config commands work without a loaded config
        Command::Config { action } => config_handlers::handle_config_command(config_path, action),
        command => {
            let config = CliConfig::load(config_path)?;
            match command {
                Command::Login { username, password } => {
                    commands::cmd_login(&config, &username, password).await
                }
                Command::Logout => commands::cmd_logout(&config),
                Command::Whoami => commands::cmd_whoami(&config),
                Command::List(list) => commands::cmd_list(&config, list).await,
                Command::Show { id } => commands::cmd_show(&config, &id).await,
                Command::Add(add) => commands::cmd_add(&config, add).await,
                Command::Edit(edit) => commands::cmd_edit(&config, edit).await,
                Command::Rm { id, yes } => commands::cmd_rm(&config, &id, yes).await,
                Command::Config { .. } => unreachable!(),
            }
        }
    }
}
