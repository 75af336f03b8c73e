//! `taskmaster theme` command.

use crate::cli::ThemeAction;
use crate::manager::TaskManager;
use crate::store::Theme;

/// Execute the `theme` command: print the stored theme, or set or flip it.
///
/// # Errors
///
/// Currently infallible; returns `Result` for dispatch uniformity.
pub fn run(manager: &TaskManager<'_>, action: Option<ThemeAction>) -> Result<(), String> {
    let theme = match action {
        None => manager.theme(),
        Some(ThemeAction::Toggle) => manager.toggle_theme(),
        Some(ThemeAction::Light) => {
            manager.set_theme(Theme::Light);
            Theme::Light
        }
        Some(ThemeAction::Dark) => {
            manager.set_theme(Theme::Dark);
            Theme::Dark
        }
    };
    println!("Theme: {theme}");
    Ok(())
}
