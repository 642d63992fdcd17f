use crate::reports;
use clap::Args;
use hotkeyforge::api::EditorSession;
use hotkeyforge::error::HfResult;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Key id, e.g. `f1` or `numpad5`
    pub key: String,
}

pub fn run(args: ShowArgs, session: &mut EditorSession) -> HfResult<()> {
    session.select_key(&args.key);
    reports::print_key_bindings(session, &args.key);
    session.save()
}
