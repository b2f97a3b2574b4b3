//! Undo and history command handlers

use anyhow::Result;

use super::CliEngine;

pub fn cmd_undo(engine: &mut CliEngine) -> Result<()> {
    match engine.undo_last()? {
        Some(description) => println!("Undid: {description}"),
        None => println!("Nothing to undo."),
    }
    Ok(())
}

pub fn cmd_history(engine: &CliEngine) -> Result<()> {
    if engine.history().is_empty() {
        println!("History is empty.");
        return Ok(());
    }
    for entry in engine.history().iter() {
        println!(
            "{}  {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.description
        );
    }
    Ok(())
}
