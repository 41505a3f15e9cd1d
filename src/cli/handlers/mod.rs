mod new;
pub use new::cmd_new;

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::commands::*;
use crate::cli::output::{render_card, render_menu};
use crate::io::card_io::{self, DEFAULT_CARD_FILE};
use crate::io::config_io;
use crate::io::lock::FileLock;
use crate::io::watcher::CardWatcher;
use crate::model::card::{StatusFlag, TextField, is_palette_color};
use crate::model::config::CardConfig;
use crate::model::locale::Locale;
use crate::model::row::{RowId, Slot};
use crate::ops::menu::MenuOutcome;
use crate::ops::{init, menu, row_ops, status_ops, view};
use crate::store::MemoryStore;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Resolved settings shared by every command
pub struct Context {
    pub card_path: PathBuf,
    pub json: bool,
    /// Locale from --locale, else taskcard.toml
    pub locale: Locale,
    /// True when --locale was given explicitly
    locale_pinned: bool,
    pub config: CardConfig,
}

impl Context {
    pub fn lock_timeout(&self) -> Duration {
        Duration::from_millis(self.config.io.lock_timeout_ms)
    }

    /// Locale for rendering `store`: --locale, else the card's seeding locale
    fn locale_for(&self, store: &MemoryStore) -> Locale {
        if self.locale_pinned {
            return self.locale;
        }
        init::seeded_locale(store).unwrap_or(self.locale)
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let cwd = std::env::current_dir()?;
    let card_path = cli.file.unwrap_or_else(|| PathBuf::from(DEFAULT_CARD_FILE));
    let config = config_io::load_config(&card_path, &cwd)?;

    let pinned = match cli.locale {
        Some(ref s) => Some(
            Locale::parse_locale(s)
                .ok_or_else(|| format!("unknown locale '{}' (expected ko or en)", s))?,
        ),
        None => None,
    };
    let ctx = Context {
        card_path,
        json: cli.json,
        locale: pinned.unwrap_or(config.card.locale),
        locale_pinned: pinned.is_some(),
        config,
    };

    match cli.command {
        Commands::New(args) => cmd_new(&ctx, args),
        Commands::Show => cmd_show(&ctx),
        Commands::Row(cmd) => match cmd.action {
            RowAction::Add => cmd_row_add(&ctx),
            RowAction::Rm(args) => cmd_row_rm(&ctx, args),
            RowAction::Set(args) => cmd_row_set(&ctx, args),
            RowAction::Get(args) => cmd_row_get(&ctx, args),
        },
        Commands::Toggle(args) => cmd_toggle(&ctx, args),
        Commands::Set(args) => cmd_set(&ctx, args),
        Commands::Color(args) => cmd_color(&ctx, args),
        Commands::Menu(cmd) => match cmd.action {
            None => cmd_menu_list(&ctx),
            Some(MenuAction::Apply(args)) => cmd_menu_apply(&ctx, args),
        },
        Commands::Watch => cmd_watch(&ctx),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run one mutation under the card lock: load, apply, save.
fn mutate<T>(
    ctx: &Context,
    f: impl FnOnce(&mut MemoryStore) -> Result<T, Box<dyn std::error::Error>>,
) -> Result<T, Box<dyn std::error::Error>> {
    let _lock = FileLock::acquire(&ctx.card_path, ctx.lock_timeout())?;
    let mut store = card_io::load_card(&ctx.card_path)?;
    let out = f(&mut store)?;
    card_io::save_card(&ctx.card_path, &store)?;
    Ok(out)
}

fn print_card(ctx: &Context, store: &MemoryStore) -> CmdResult {
    let card = view::read_card(store);
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        print!("{}", render_card(&card, ctx.locale_for(store)));
    }
    Ok(())
}

fn print_value(ctx: &Context, key: &str, value: serde_json::Value) -> CmdResult {
    if ctx.json {
        let mut obj = serde_json::Map::new();
        obj.insert(key.to_string(), value);
        println!("{}", serde_json::to_string_pretty(&obj)?);
    } else {
        match value {
            serde_json::Value::String(s) => println!("{}", s),
            other => println!("{}: {}", key, other),
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_show(ctx: &Context) -> CmdResult {
    let store = card_io::load_card(&ctx.card_path)?;
    print_card(ctx, &store)
}

fn cmd_row_get(ctx: &Context, args: RowGetArgs) -> CmdResult {
    let slot = Slot::parse_slot(&args.slot)
        .ok_or_else(|| format!("unknown slot '{}' (expected header or body)", args.slot))?;
    let store = card_io::load_card(&ctx.card_path)?;
    let text = row_ops::get_content(&store, &RowId::from(args.id), slot);
    if ctx.json {
        print_value(ctx, &slot.to_string(), serde_json::Value::String(text))
    } else {
        println!("{}", text);
        Ok(())
    }
}

fn cmd_menu_list(ctx: &Context) -> CmdResult {
    let store = card_io::load_card(&ctx.card_path)?;
    let items = menu::menu_items(&store, ctx.locale_for(&store));
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print!("{}", render_menu(&items));
    }
    Ok(())
}

fn cmd_watch(ctx: &Context) -> CmdResult {
    let watcher = CardWatcher::start(&ctx.card_path)?;
    let store = card_io::load_card(&ctx.card_path)?;
    print_card(ctx, &store)?;
    loop {
        if !watcher.wait_for_change(Duration::from_secs(1)) {
            continue;
        }
        match card_io::load_card(&ctx.card_path) {
            Ok(store) => {
                println!();
                print_card(ctx, &store)?;
            }
            Err(e) => log::warn!("[taskcard.watch] reload failed: {}", e),
        }
    }
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_row_add(ctx: &Context) -> CmdResult {
    let id = mutate(ctx, |store| {
        Ok(row_ops::add_row(store, &mut rand::thread_rng())?)
    })?;
    print_value(ctx, "id", serde_json::Value::String(id.to_string()))
}

fn cmd_row_rm(ctx: &Context, args: RowIdArg) -> CmdResult {
    let id = RowId::from(args.id);
    let existed = mutate(ctx, |store| {
        let existed = row_ops::contains_row(store, &id);
        row_ops::delete_row(store, &id);
        Ok(existed)
    })?;
    if !existed {
        eprintln!("note: no row {}", id);
    }
    Ok(())
}

fn cmd_row_set(ctx: &Context, args: RowSetArgs) -> CmdResult {
    if args.header.is_none() && args.body.is_none() {
        return Err("nothing to set: pass --header and/or --body".into());
    }
    let id = RowId::from(args.id);
    let listed = mutate(ctx, |store| {
        if let Some(ref text) = args.header {
            row_ops::set_content(store, &id, Slot::Header, text);
        }
        if let Some(ref text) = args.body {
            row_ops::set_content(store, &id, Slot::Body, text);
        }
        Ok(row_ops::contains_row(store, &id))
    })?;
    if !listed {
        eprintln!("note: row {} is not in the table; text stored anyway", id);
    }
    Ok(())
}

fn cmd_toggle(ctx: &Context, args: ToggleArgs) -> CmdResult {
    let (name, value) = if args.what == "collapsed" {
        ("collapsed".to_string(), mutate(ctx, |store| Ok(status_ops::toggle_collapsed(store)))?)
    } else {
        let flag = StatusFlag::parse_flag(&args.what).ok_or_else(|| {
            format!(
                "unknown flag '{}' (expected collapsed, progress, trouble, or done)",
                args.what
            )
        })?;
        (flag.to_string(), mutate(ctx, |store| Ok(status_ops::toggle_flag(store, flag)))?)
    };
    print_value(ctx, &name, serde_json::Value::Bool(value))
}

fn cmd_set(ctx: &Context, args: SetArgs) -> CmdResult {
    let field = TextField::parse_field(&args.field).ok_or_else(|| {
        format!(
            "unknown field '{}' (expected author, manager, or content)",
            args.field
        )
    })?;
    mutate(ctx, |store| {
        status_ops::set_text(store, field, &args.text);
        Ok(())
    })
}

fn cmd_color(ctx: &Context, args: ColorArgs) -> CmdResult {
    if !is_palette_color(&args.color) {
        eprintln!("note: {} is not one of the card palette colors", args.color);
    }
    mutate(ctx, |store| {
        status_ops::set_color(store, &args.color);
        Ok(())
    })
}

fn cmd_menu_apply(ctx: &Context, args: MenuApplyArgs) -> CmdResult {
    let outcome = mutate(ctx, |store| {
        Ok(menu::apply_property(store, &args.property, args.value.as_deref()))
    })?;
    match outcome {
        MenuOutcome::Collapsed(value) => {
            print_value(ctx, "collapsed", serde_json::Value::Bool(value))
        }
        MenuOutcome::ColorSet(color) => print_value(ctx, "color", serde_json::Value::String(color)),
        MenuOutcome::Ignored => {
            eprintln!("note: property '{}' ignored", args.property);
            Ok(())
        }
    }
}
