use std::path::PathBuf;

use crate::cli::commands::{Commands, PosArgs};
use crate::io::recovery::{RecoveryCategory, RecoveryEntry, log_recovery};
use crate::io::{config_io, snapshot_io};
use crate::model::config::Config;
use crate::model::list::{Selection, TodoList};
use crate::ops::list_ops;

/// Default snapshot file, next to wherever lineup is run.
pub const DEFAULT_FILE: &str = "todo.md";

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(command: Commands, file: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let path = resolve_file(file);

    match command {
        Commands::List => cmd_list(&path),
        Commands::Add(args) => cmd_add(&path, &args.text),
        Commands::Top(args) => cmd_reorder(&path, args, "top", list_ops::move_to_top),
        Commands::Bottom(args) => cmd_reorder(&path, args, "bottom", list_ops::move_to_bottom),
        Commands::Raise(args) => cmd_reorder(&path, args, "raise", list_ops::raise),
        Commands::Lower(args) => cmd_reorder(&path, args, "lower", list_ops::lower),
        Commands::Rm(args) => cmd_reorder(&path, args, "rm", list_ops::remove),
    }
}

/// Resolve the snapshot path: `--file` flag, then `.lineup.toml`, then the
/// default. A broken config file is reported but never blocks the command.
pub fn resolve_file(flag: Option<&str>) -> PathBuf {
    if let Some(f) = flag {
        return PathBuf::from(f);
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match config_io::read_config(&cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: {e}; using defaults");
            Config::default()
        }
    };
    PathBuf::from(config.file.as_deref().unwrap_or(DEFAULT_FILE))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_list(path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let (list, warning) = snapshot_io::load_or_recover(path)?;
    if let Some(w) = warning {
        eprintln!("warning: {w}");
    }
    print_list(&list);
    Ok(())
}

fn cmd_add(path: &PathBuf, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (mut list, warning) = snapshot_io::load_or_recover(path)?;
    if let Some(w) = warning {
        eprintln!("warning: {w}");
    }

    list_ops::insert_front(&mut list, None, text);
    if !list.is_dirty() {
        eprintln!("nothing added: item text is blank");
        return Ok(());
    }

    save(path, &mut list)?;
    print_list(&list);
    Ok(())
}

fn cmd_reorder(
    path: &PathBuf,
    args: PosArgs,
    verb: &str,
    op: fn(&mut TodoList, Selection) -> Selection,
) -> Result<(), Box<dyn std::error::Error>> {
    let (mut list, warning) = snapshot_io::load_or_recover(path)?;
    if let Some(w) = warning {
        eprintln!("warning: {w}");
    }

    // 1-based on the command line, 0-based inside
    let index = args.pos.checked_sub(1).filter(|&i| i < list.len());
    op(&mut list, index);

    if !list.is_dirty() {
        // Out of range, or already at the boundary: permissive no-op
        eprintln!("{verb} {}: no change", args.pos);
        print_list(&list);
        return Ok(());
    }

    save(path, &mut list)?;
    print_list(&list);
    Ok(())
}

fn save(path: &PathBuf, list: &mut TodoList) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = snapshot_io::save_list(path, list) {
        log_recovery(
            path,
            RecoveryEntry::new(
                RecoveryCategory::WriteFailed,
                e.to_string(),
                crate::parse::serialize_snapshot(list),
            ),
        );
        return Err(Box::new(e));
    }
    list.mark_clean();
    Ok(())
}

fn print_list(list: &TodoList) {
    if list.is_empty() {
        println!("(empty)");
        return;
    }
    for (i, item) in list.items().iter().enumerate() {
        println!("{:>3}  {}", i + 1, item);
    }
}
