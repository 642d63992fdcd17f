use super::parse_modifier;
use clap::Args;
use hotkeyforge::api::EditorSession;
use hotkeyforge::error::HfResult;
use hotkeyforge::modifier::Modifier;

#[derive(Args, Debug, Clone)]
pub struct ToggleArgs {
    pub key: String,

    #[arg(short, long, value_parser = parse_modifier, default_value = "None")]
    pub modifier: Modifier,

    /// Force the entry on instead of flipping it
    #[arg(long, conflicts_with = "off")]
    pub on: bool,

    /// Force the entry off instead of flipping it
    #[arg(long)]
    pub off: bool,
}

pub fn run(args: ToggleArgs, session: &mut EditorSession) -> HfResult<()> {
    session.select_key(&args.key);
    let current = session
        .bindings(&args.key)
        .and_then(|b| b.get(&args.modifier))
        .map(|a| a.enabled)
        .unwrap_or(true);

    let enabled = match (args.on, args.off) {
        (true, _) => true,
        (_, true) => false,
        _ => !current,
    };

    session.set_enabled(args.modifier, enabled)?;
    println!(
        "{} {} + {}",
        if enabled { "▶️  Enabled" } else { "⏸️  Disabled" },
        args.modifier,
        args.key
    );
    Ok(())
}
