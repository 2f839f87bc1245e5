use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use teamcal_core::import::preview_import;

const PREVIEW_LINES: usize = 10;

pub fn run(file: &Path) -> Result<()> {
    let preview = preview_import(file, PREVIEW_LINES)?;

    println!(
        "{} ({} lines, {} bytes)",
        file.display().bold(),
        preview.line_count,
        preview.byte_count
    );
    for line in &preview.head {
        println!("  {}", line);
    }
    if preview.line_count > preview.head.len() {
        println!("  {}", "...".dimmed());
    }
    println!("{}", "Import preview only; the calendar was not changed.".dimmed());
    Ok(())
}
