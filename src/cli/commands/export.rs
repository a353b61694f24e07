use crate::cli::parser::SessionCommand;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::store::EntryStore;
use crate::errors::AppResult;
use std::io::BufRead;

pub fn handle<R: BufRead>(
    cmd: &SessionCommand,
    store: &mut EntryStore,
    cfg: &Config,
    input: &mut R,
) -> AppResult<()> {
    if let SessionCommand::Export {
        format,
        file,
        force,
    } = cmd
    {
        ExportLogic::export(store, cfg, *format, file.as_deref(), *force, input)?;
    }
    Ok(())
}
