//! Command dispatch and handlers.

pub mod backup;
pub mod bulk;
pub mod list;
pub mod stats;
pub mod tasks;
pub mod theme;

use chrono::Local;

use crate::cassette::session::RecordingSession;
use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::context::ServiceContext;
use crate::manager::TaskManager;

/// Dispatch a parsed command line to its handler.
///
/// When `TASKMASTER_REPLAY` names a cassette, every port is served from it.
/// Otherwise, when `TASKMASTER_RECORD` names a directory, all port
/// interactions are recorded to per-port cassette files under it.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(cli: &Cli, config: &AppConfig) -> Result<(), String> {
    if let Some(cassette) = &config.replay_cassette {
        let ctx = ServiceContext::replaying(cassette)?;
        return dispatch_with_context(&cli.command, &ctx, config);
    }

    let data_dir = cli.data_dir.as_deref().unwrap_or(&config.data_dir);
    let (ctx, session) = if let Some(base) = &config.record_dir {
        let (ctx, session) = ServiceContext::recording_at(data_dir, base)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(data_dir), None)
    };

    let result = dispatch_with_context(&cli.command, &ctx, config);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &AppConfig,
) -> Result<(), String> {
    let mut manager = TaskManager::load(ctx);
    match command {
        Command::Add { title, priority } => tasks::add(&mut manager, &joined(title), *priority),
        Command::List { filter, search, sort } => {
            manager.set_filter(*filter);
            manager.set_search(search.clone().unwrap_or_default());
            let now = ctx.clock.now().with_timezone(&Local);
            list::run(&manager, *sort, &now)
        }
        Command::Toggle { id } => tasks::toggle(&mut manager, id),
        Command::Edit { id, title } => tasks::edit(&mut manager, id, &joined(title)),
        Command::Delete { id, yes } => tasks::delete(&mut manager, id, *yes),
        Command::ClearCompleted { yes } => bulk::clear_completed(&mut manager, *yes),
        Command::CompleteAll => bulk::complete_all(&mut manager),
        Command::ClearAll { yes } => bulk::clear_all(&mut manager, *yes),
        Command::Stats => stats::run(&manager),
        Command::Storage => stats::storage(&manager),
        Command::Export { output } => {
            backup::export(&manager, output.as_deref().unwrap_or(&config.export_dir))
        }
        Command::Import { file } => backup::import(&mut manager, file),
        Command::Theme { action } => theme::run(&manager, *action),
    }
}

fn joined(words: &[String]) -> String {
    words.join(" ")
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
