//! Editor Session
//!
//! Walks through a short editing session the way a canvas front end would
//! drive the shell.
//!
//! Key concepts:
//! - Mounting restores from storage and starts mirroring changes
//! - Click-to-connect and drag gestures become store edits
//! - Undo/redo move through history without rewriting it
//! - Share links and exports are derived from the live document
//!
//! Run with: cargo run --example editor_session
//! Set RUST_LOG=stateboard=debug to see every commit.

use stateboard::persistence::MemoryStorage;
use stateboard::{EditorBuilder, EditorShell};
use tracing_subscriber::EnvFilter;

fn print_status(shell: &EditorShell) {
    let store = shell.store();
    println!(
        "  states: {}, transitions: {}, history: {} (at {:?}), undo: {}, redo: {}",
        store.nodes().len(),
        store.connections().len(),
        store.history().len(),
        store.history_index(),
        shell.can_undo(),
        shell.can_redo(),
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Editor Session ===\n");

    let storage = MemoryStorage::new();
    let mut shell = EditorBuilder::new().storage(storage.clone()).build()?;
    shell.mount(None);

    println!("Adding three states");
    let idle = shell.add_state();
    let running = shell.add_state();
    let done = shell.add_state();
    print_status(&shell);

    println!("\nConnecting Idle -> Running -> Done by clicking");
    shell.click_node(&idle);
    shell.click_node(&running);
    shell.click_node(&running);
    shell.click_node(&done);
    print_status(&shell);

    println!("\nDragging State 3 to the right");
    shell.drag_node(&done, 240.0, 0.0);
    print_status(&shell);

    println!("\nUndo twice, then redo once");
    shell.undo();
    shell.undo();
    shell.redo();
    print_status(&shell);

    println!("\nEdge geometry:");
    for edge in shell.edges() {
        println!(
            "  {} -> {}: ({:.0}, {:.0}) to ({:.0}, {:.0}) label {:?}",
            edge.from, edge.to, edge.start.x, edge.start.y, edge.end.x, edge.end.y, edge.label
        );
    }

    println!("\nExported machine:");
    println!("{}", shell.export_json()?);

    println!("\nShare path:\n  {}", shell.share_path()?);

    println!(
        "\nPersisted snapshot:\n  {}",
        storage.get("state-machine").unwrap_or_default()
    );

    println!("\nClearing (declined, then confirmed)");
    shell.clear(&mut |_: &str| false);
    print_status(&shell);
    shell.clear(&mut |_: &str| true);
    print_status(&shell);

    Ok(())
}
