use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use teamcal_core::SaveOutcome;

pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

pub fn notice(message: &str) {
    println!("{}", message.green());
}

pub fn warning(message: &str) {
    println!("{}", message.yellow());
}

/// Report where a save landed.
pub fn save_notice(outcome: &SaveOutcome, message: &str) {
    match outcome {
        SaveOutcome::Remote => notice(message),
        SaveOutcome::SavedLocally { .. } => warning(&format!("{message} (saved locally)")),
    }
}
