use crate::cli::commands::NewArgs;
use crate::io::card_io;
use crate::io::lock::FileLock;
use crate::ops::init;
use crate::store::MemoryStore;

use super::Context;

/// Create the card file and seed it. Seeding happens here, once, rather
/// than on every later command.
pub fn cmd_new(ctx: &Context, args: NewArgs) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = ctx.card_path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)?;
    }
    let _lock = FileLock::acquire(&ctx.card_path, ctx.lock_timeout())?;

    let mut store = MemoryStore::new();
    init::initialize(&mut store, ctx.locale);
    card_io::create_card(&ctx.card_path, &store, args.force)?;

    if ctx.json {
        super::print_card(ctx, &store)?;
    } else {
        println!("Created {} ({})", ctx.card_path.display(), ctx.locale);
    }
    Ok(())
}
