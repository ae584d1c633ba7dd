//! # CLI Layer
//!
//! This module is one UI client for pokebox. It is the only place that knows
//! about the terminal: argument parsing, colours, stdout/stderr and exit codes.
//!
//! ## Structure
//!
//! - `run()`: parses arguments, opens the data root and dispatches
//! - `handle_*()`: per-command handlers that call the API and print the result
//!
//! ## Loading
//!
//! The collection is loaded once per invocation. When that fails, read-only
//! commands report the error and carry on with an empty collection, while
//! mutating commands stop before anything is written, so a file that could not
//! be read is never overwritten.

use super::render::{print_messages, render_record_details, render_record_list, render_text_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use colored::*;
use pokebox::api::{ConfigAction, PokeboxApi, RecordUpdate};
use pokebox::commands::lookup::autofill;
use pokebox::config::{PokeboxConfig, KEYS};
use pokebox::error::{PokeboxError, Result};
use pokebox::init::{data_root, initialize};
use pokebox::logging::init_logging;
use pokebox::model::{Record, ID, NAME};
use pokebox::store::fs::FileStore;

struct AppContext {
    api: PokeboxApi<FileStore>,
    config: PokeboxConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let root = data_root(cli.home.clone());
    tracing::debug!(root = %root.display(), "data root");
    let context = initialize(&root);

    let quiet_startup = matches!(cli.command, Some(Commands::Init | Commands::Config { .. }));
    if !quiet_startup {
        print_messages(&context.warnings);
    }

    let mut ctx = AppContext {
        api: context.api,
        config: context.config,
    };

    match cli.command {
        None | Some(Commands::List) => handle_list(&mut ctx),
        Some(Commands::View { ids }) => handle_view(&mut ctx, ids),
        Some(Commands::Add { id, name, set }) => handle_add(&mut ctx, id, name, set),
        Some(Commands::Edit { id, set }) => handle_edit(&mut ctx, id, set),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Lookup { queries }) => handle_lookup(&ctx, queries),
        Some(Commands::Sprite { ids }) => handle_sprite(&mut ctx, ids),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&mut ctx),
    }
}

/// Loads the collection for display. A failure is reported, not fatal.
fn load_for_reading(ctx: &mut AppContext) {
    if let Err(e) = ctx.api.load() {
        tracing::warn!(error = %e, "collection load failed");
        eprintln!(
            "{} {} ({})",
            "Could not load the collection:".red(),
            e,
            ctx.api.store().path().display()
        );
    }
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    load_for_reading(ctx);
    let result = ctx.api.list_records()?;
    print!("{}", render_record_list(&result.listed_records));
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    load_for_reading(ctx);
    let result = ctx.api.view_records(&ids)?;
    if !result.listed_records.is_empty() {
        print!("{}", render_record_details(&result.listed_records));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    id: Option<String>,
    name: Option<String>,
    set: Vec<(String, String)>,
) -> Result<()> {
    ctx.api.load()?;

    // A lone argument that is a known name rather than a known ID is the name.
    let (id, name) = match (id, name) {
        (Some(first), None)
            if ctx.api.resolve_name(&first).is_none()
                && ctx.api.resolve_id(&first).is_some() =>
        {
            (None, Some(first))
        }
        other => other,
    };

    let mut record = Record::from_pairs(set);
    if let Some(id) = id {
        record.set(ID, id);
    }
    if let Some(name) = name {
        record.set(NAME, name);
    }
    autofill(ctx.api.index(), &mut record);

    if record.id().is_empty() {
        return Err(PokeboxError::Api(
            "A record needs an ID (give one, or a name listed in the identifier file)".into(),
        ));
    }

    let result = ctx.api.create_record(record)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: String, set: Vec<(String, String)>) -> Result<()> {
    ctx.api.load()?;
    let update = RecordUpdate::new(id, Record::from_pairs(set));
    let result = ctx.api.update_records(&[update])?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    ctx.api.load()?;
    let result = ctx.api.delete_records(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_lookup(ctx: &AppContext, queries: Vec<String>) -> Result<()> {
    let result = ctx.api.lookup(&queries)?;
    let lines: Vec<String> = result
        .resolved
        .iter()
        .map(|r| format!("{}  {}", r.id.yellow(), r.name))
        .collect();
    if !lines.is_empty() {
        print!("{}", render_text_list(&lines, ""));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_sprite(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.sprite_paths(&ids)?;
    let lines: Vec<String> = result
        .sprite_paths
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    if !lines.is_empty() {
        print!("{}", render_text_list(&lines, ""));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            let lines: Vec<String> = KEYS
                .iter()
                .map(|key| format!("{} = {}", key, config.get(key).unwrap_or_default()))
                .collect();
            print!("{}", render_text_list(&lines, "No configuration."));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let config = ctx.config.clone();
    let result = ctx.api.init(&config)?;
    print_messages(&result.messages);
    Ok(())
}
