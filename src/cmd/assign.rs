use super::parse_modifier;
use clap::Args;
use hotkeyforge::api::EditorSession;
use hotkeyforge::error::{HfResult, HotkeyForgeError};
use hotkeyforge::modifier::Modifier;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct AssignArgs {
    pub key: String,

    /// Action body; may span several lines
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub action: Option<String>,

    /// Read the action body from a file
    #[arg(short = 'F', long)]
    pub file: Option<PathBuf>,

    #[arg(short, long, value_parser = parse_modifier, default_value = "None")]
    pub modifier: Modifier,

    /// Store the action but leave it out of the compiled script
    #[arg(long, default_value_t = false)]
    pub disabled: bool,
}

pub fn run(args: AssignArgs, session: &mut EditorSession) -> HfResult<()> {
    let text = match (&args.action, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            return Err(HotkeyForgeError::Validation(
                "An action text or --file is required".to_string(),
            ))
        }
    };

    session.select_key(&args.key);
    session.assign(args.modifier, &text, !args.disabled)?;

    let profile = session.current_profile().display_name().to_string();
    match session.bindings(&args.key).and_then(|b| b.get(&args.modifier)) {
        Some(entry) if entry.enabled => println!(
            "✅ {} + {} assigned in '{}'",
            args.modifier, args.key, profile
        ),
        Some(_) => println!(
            "⏸️  {} + {} stored disabled in '{}'",
            args.modifier, args.key, profile
        ),
        None => println!(
            "🧹 {} + {} has no action in '{}'",
            args.modifier, args.key, profile
        ),
    }
    Ok(())
}
