// ===== hotkeyforge/src/main.rs =====
use clap::{Parser, Subcommand};
use hotkeyforge::api::EditorSession;
use hotkeyforge::config::Config;
use std::process;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    config: Config,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the configured keyboard profiles
    Profiles,
    /// Show the key layout and which keys are bound in the active profile
    Keys,
    /// Show every modifier entry of one key
    Show(cmd::show::ShowArgs),
    /// Assign an action to a key
    Assign(cmd::assign::AssignArgs),
    /// Remove the action of a key/modifier pair
    Clear(cmd::clear::ClearArgs),
    /// Enable or disable a key/modifier pair without touching its text
    Toggle(cmd::toggle::ToggleArgs),
    /// Print the compiled script
    Preview,
    /// Write the compiled script to disk
    Export(cmd::export::ExportArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut session = EditorSession::open(&cli.config);
    if let Some(warning) = session.take_load_warning() {
        eprintln!("⚠️  Settings load failed, starting with an empty mapping:");
        eprintln!("   {}", warning);
    }

    let result = match cli.command {
        Commands::Profiles => {
            reports::print_profiles(&session);
            Ok(())
        }
        Commands::Keys => {
            reports::print_key_sections(&session);
            Ok(())
        }
        Commands::Show(args) => cmd::show::run(args, &mut session),
        Commands::Assign(args) => cmd::assign::run(args, &mut session),
        Commands::Clear(args) => cmd::clear::run(args, &mut session),
        Commands::Toggle(args) => cmd::toggle::run(args, &mut session),
        Commands::Preview => {
            println!("{}", session.preview());
            Ok(())
        }
        Commands::Export(args) => cmd::export::run(args, &mut session),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
