use clap::Args;
use hotkeyforge::api::EditorSession;
use hotkeyforge::error::HfResult;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Destination file; remembered for later exports
    #[arg(short, long)]
    pub to: Option<PathBuf>,
}

pub fn run(args: ExportArgs, session: &mut EditorSession) -> HfResult<()> {
    let written = match args.to {
        Some(dest) => session.export_to(&dest)?,
        None => session.export()?,
    };
    println!("💾 Script written to {}", written.display());
    Ok(())
}
