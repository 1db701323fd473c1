//! # CLI Layer
//!
//! One possible UI client for todos. `list`, `add`, `toggle` and `delete` act as the list
//! view: they open a [`TodoStore`] over the data directory. `show` and `edit` act as the
//! detail view: they go through [`TodoDetail`] and never open a list view. `theme` only
//! touches the config file, and prints the new palette from a [`ThemeState`] subscriber.
//!
//! This is the only place that prints, reads arguments or picks an exit code.

use super::print::{print_messages, print_theme, print_todo, print_todos};
use super::setup::{init_tracing, Cli, Commands, ThemeAction};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use todos::api::TodoStore;
use todos::config::TodoConfig;
use todos::detail::{resolve_target, TodoDetail};
use todos::error::{Result, TodoError};
use todos::store::fs_backend::FsBackend;
use todos::store::PersistenceGateway;
use todos::theme::{ColorScheme, ThemeState};
use tracing::debug;

struct AppContext {
    data_dir: PathBuf,
    config: TodoConfig,
    theme: ThemeState,
}

impl AppContext {
    fn gateway(&self) -> PersistenceGateway<FsBackend> {
        PersistenceGateway::new(FsBackend::new(&self.data_dir))
    }

    fn open_store(&self) -> TodoStore<FsBackend> {
        TodoStore::open(self.gateway())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Add { title }) => handle_add(&ctx, &title.join(" ")),
        Some(Commands::Toggle { id }) => handle_toggle(&ctx, id),
        Some(Commands::Delete { id }) => handle_delete(&ctx, id),
        Some(Commands::Show { target }) => handle_show(&ctx, &target),
        Some(Commands::Edit { target, title }) => handle_edit(&ctx, &target, &title.join(" ")),
        Some(Commands::Theme { action }) => handle_theme(&mut ctx, action),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "todos", "todos")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| TodoError::Api("Could not determine data dir".into()))?,
    };
    debug!(data_dir = %data_dir.display(), "using data dir");

    let config = TodoConfig::load(&data_dir)?;
    let theme = ThemeState::new(config.resolved_scheme());

    Ok(AppContext {
        data_dir,
        config,
        theme,
    })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let store = ctx.open_store();
    let result = store.list();
    print_todos(&result.listed_todos, ctx.theme.theme());
    Ok(())
}

fn handle_add(ctx: &AppContext, title: &str) -> Result<()> {
    let mut store = ctx.open_store();
    let result = store.add(title);
    if result.is_noop() && result.messages.is_empty() {
        return Err(TodoError::Api("Title cannot be empty".into()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_toggle(ctx: &AppContext, id: u64) -> Result<()> {
    let mut store = ctx.open_store();
    let result = store.toggle(id);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, id: u64) -> Result<()> {
    let mut store = ctx.open_store();
    let result = store.delete(id);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, target: &str) -> Result<()> {
    let id = resolve_target(target)?;
    let detail = TodoDetail::open(ctx.gateway(), id);
    match detail.item() {
        Some(todo) => print_todo(todo, ctx.theme.theme()),
        None => return Err(TodoError::TodoNotFound(id)),
    }
    detail.cancel();
    Ok(())
}

fn handle_edit(ctx: &AppContext, target: &str, title: &str) -> Result<()> {
    let id = resolve_target(target)?;
    let mut detail = TodoDetail::open(ctx.gateway(), id);
    detail.set_title(title);
    let result = detail.save()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, action: Option<ThemeAction>) -> Result<()> {
    let Some(action) = action else {
        print_theme(
            ctx.theme.scheme(),
            ctx.theme.theme(),
            ctx.config.color_scheme.is_none(),
        );
        return Ok(());
    };

    let chosen = match action {
        ThemeAction::Light => Some(ColorScheme::Light),
        ThemeAction::Dark => Some(ColorScheme::Dark),
        ThemeAction::Toggle => Some(ctx.theme.scheme().toggled()),
        ThemeAction::System => None,
    };

    ctx.config.color_scheme = chosen;
    ctx.config.save(&ctx.data_dir)?;

    let from_system = chosen.is_none();
    let subscription = ctx
        .theme
        .subscribe(move |scheme, theme| print_theme(scheme, theme, from_system));

    let scheme = ctx.config.resolved_scheme();
    if !ctx.theme.set_scheme(scheme) {
        print_theme(scheme, ctx.theme.theme(), from_system);
    }
    ctx.theme.unsubscribe(subscription);
    Ok(())
}
