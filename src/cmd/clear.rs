use super::parse_modifier;
use clap::Args;
use hotkeyforge::api::EditorSession;
use hotkeyforge::error::HfResult;
use hotkeyforge::modifier::Modifier;

#[derive(Args, Debug, Clone)]
pub struct ClearArgs {
    pub key: String,

    #[arg(short, long, value_parser = parse_modifier, default_value = "None")]
    pub modifier: Modifier,
}

pub fn run(args: ClearArgs, session: &mut EditorSession) -> HfResult<()> {
    session.select_key(&args.key);
    match session.clear(args.modifier)? {
        Some(_) => println!("🧹 Cleared {} + {}", args.modifier, args.key),
        None => println!("Nothing assigned to {} + {}", args.modifier, args.key),
    }
    Ok(())
}
