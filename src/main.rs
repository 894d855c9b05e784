mod cli;

use clap::Parser;
use cli::{Cli, Command, SelectionAction};
use textinput::TextInputContext;
use textinput::backend::BackendError;
use textinput::backend::x11::selection::Selection;
use textinput::backend::x11::{X11Backend, X11Config};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = X11Config {
        display: cli.display,
        xclip_program: cli.xclip,
    };

    let (name, result) = match cli.command {
        Command::Clipboard { action } => {
            ("clipboard", run_selection(config, Selection::Clipboard, action))
        }
        Command::Primary { action } => ("primary", run_selection(config, Selection::Primary, action)),
        Command::Window => ("window", run_window(config)),
    };

    if let Err(e) = result {
        tracing::error!(command = name, error = %e, "command failed");
        eprintln!("textinput {name}: {e}");
        std::process::exit(1);
    }
}

fn run_selection(
    config: X11Config,
    selection: Selection,
    action: SelectionAction,
) -> Result<(), BackendError> {
    let mut ctx = TextInputContext::new(X11Backend::connect(config)?);

    match (selection, action) {
        (Selection::Clipboard, SelectionAction::Get) => print!("{}", ctx.clipboard_text()?),
        (Selection::Primary, SelectionAction::Get) => print!("{}", ctx.primary_selection_text()?),
        (Selection::Clipboard, SelectionAction::Set { text }) => ctx.set_clipboard_text(&text)?,
        (Selection::Primary, SelectionAction::Set { text }) => {
            ctx.set_primary_selection_text(&text)?
        }
        (Selection::Clipboard, SelectionAction::Clear) => ctx.set_clipboard_text("")?,
        (Selection::Primary, SelectionAction::Clear) => ctx.set_primary_selection_text("")?,
    }
    Ok(())
}

fn run_window(config: X11Config) -> Result<(), BackendError> {
    let backend = X11Backend::connect(config)?;
    match backend.active_window()? {
        Some(window) => {
            println!("{window}");
            Ok(())
        }
        None => Err(BackendError::Display(
            "window manager reports no active window".into(),
        )),
    }
}
