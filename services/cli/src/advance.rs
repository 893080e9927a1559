use clap::Args;
use gilded_rose::config::AppConfig;
use gilded_rose::error::AppError;
use gilded_rose::inventory::file::{read_items, read_items_from_path, write_items};
use gilded_rose::inventory::{advance_day_explained, InventoryFormat, Item, ItemUpdate};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct AdvanceArgs {
    /// Inventory file to read (defaults to stdin)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Inventory format: csv or json (defaults to the file extension, then GILDED_ROSE_FORMAT)
    #[arg(long)]
    pub(crate) format: Option<InventoryFormat>,
    /// Print a per-item explanation of the update to stderr
    #[arg(long)]
    pub(crate) explain: bool,
}

pub(crate) fn run_advance(args: AdvanceArgs, config: &AppConfig) -> Result<(), AppError> {
    let AdvanceArgs {
        input,
        format,
        explain,
    } = args;

    let format = resolve_format(format, input.as_deref(), config.inventory.format);
    let mut items = load_items(input.as_deref(), format)?;

    let updates = advance_day_explained(&mut items);
    info!(
        items = items.len(),
        exempt = updates.iter().filter(|update| update.is_exempt()).count(),
        %format,
        "inventory advanced"
    );

    if explain {
        for line in explain_lines(&updates) {
            eprintln!("{line}");
        }
    }

    let stdout = std::io::stdout();
    write_items(stdout.lock(), &items, format)?;
    Ok(())
}

fn resolve_format(
    explicit: Option<InventoryFormat>,
    input: Option<&Path>,
    configured: InventoryFormat,
) -> InventoryFormat {
    explicit
        .or_else(|| input.and_then(InventoryFormat::from_path))
        .unwrap_or(configured)
}

fn load_items(input: Option<&Path>, format: InventoryFormat) -> Result<Vec<Item>, AppError> {
    let items = match input {
        Some(path) => read_items_from_path(path, format)?,
        None => read_items(std::io::stdin().lock(), format)?,
    };
    Ok(items)
}

fn explain_lines(updates: &[ItemUpdate]) -> Vec<String> {
    updates.iter().map(ItemUpdate::summary).collect()
}
