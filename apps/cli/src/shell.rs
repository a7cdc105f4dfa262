//! Interactive shell - the whole tracker on one screen.
//!
//! Shows the list, then loops over a menu: add through the form, delete a
//! row through its delete control, export, import, clear.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use media_tracker_core::{render_rows, Config, DeleteControl, MediaController, MediaForm};
use std::path::PathBuf;

use crate::view::TerminalView;

const MENU: [&str; 6] = [
    "Add media",
    "Delete media",
    "Export",
    "Import",
    "Clear all",
    "Quit",
];

/// Prompt for the three form fields. Blank answers are allowed.
pub fn prompt_form(form: &mut MediaForm) -> Result<()> {
    let theme = ColorfulTheme::default();
    if form.title.trim().is_empty() {
        form.title = Input::with_theme(&theme)
            .with_prompt("Title")
            .allow_empty(true)
            .interact_text()?;
    }
    if form.kind.trim().is_empty() {
        form.kind = Input::with_theme(&theme)
            .with_prompt("Type")
            .allow_empty(true)
            .interact_text()?;
    }
    if form.status.trim().is_empty() {
        form.status = Input::with_theme(&theme)
            .with_prompt("Status")
            .allow_empty(true)
            .interact_text()?;
    }
    Ok(())
}

pub async fn run(config: &Config, ctl: &mut MediaController<TerminalView>) -> Result<()> {
    let theme = ColorfulTheme::default();
    ctl.render_list().await?;

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&MENU)
            .default(0)
            .interact()?;

        match MENU[choice] {
            "Add media" => {
                let mut form = MediaForm::default();
                prompt_form(&mut form)?;
                form.submit(ctl).await?;
            }
            "Delete media" => delete_row(ctl).await?,
            "Export" => {
                let path = config.export_path();
                let rows = ctl.export_to(&path).await?;
                println!(
                    "{} Exported {} items to {}",
                    "✓".green(),
                    rows,
                    path.display()
                );
            }
            "Import" => {
                let path: String = Input::with_theme(&theme)
                    .with_prompt("File to import")
                    .allow_empty(true)
                    .interact_text()?;
                if path.trim().is_empty() {
                    continue;
                }
                if let Err(e) = crate::import_and_report(ctl, &PathBuf::from(path.trim())).await {
                    eprintln!("{} {}", "✗".red(), e.to_string().red());
                }
            }
            "Clear all" => {
                let confirmed = Confirm::with_theme(&theme)
                    .with_prompt("Remove every media item?")
                    .default(false)
                    .interact()?;
                if confirmed {
                    ctl.clear_all().await?;
                    ctl.render_list().await?;
                }
            }
            _ => break,
        }
    }

    Ok(())
}

/// Pick a row and fire its delete control.
async fn delete_row(ctl: &mut MediaController<TerminalView>) -> Result<()> {
    let rows = render_rows(&ctl.list_items().await?);
    if rows.is_empty() {
        println!("  {}", "Nothing to delete.".dimmed());
        return Ok(());
    }

    let controls: Vec<DeleteControl> = rows.iter().map(|row| row.delete).collect();
    let labels: Vec<String> = rows.iter().map(|row| row.to_string()).collect();

    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Delete which item?")
        .items(&labels)
        .interact_opt()?;

    if let Some(index) = picked {
        ctl.delete_item(controls[index].id).await?;
    }
    Ok(())
}
