//! List command implementation

use anyhow::Result;
use dbp_autopatchers::registry;

/// Run the list command
pub fn run() -> Result<()> {
    for patcher in registry::create_autopatchers(registry::autopatcher_ids())? {
        println!("{}", patcher.id());
        for file in patcher.existing_files() {
            println!("  modifies: {}", file);
        }
        for file in patcher.new_files() {
            println!("  creates:  {}", file);
        }
    }

    Ok(())
}
