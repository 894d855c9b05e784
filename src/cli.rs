use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "textinput", about = "Clipboard and text-input helper for X11")]
pub struct Cli {
    /// X display to connect to (defaults to $DISPLAY)
    #[arg(long, global = true)]
    pub display: Option<String>,

    /// Program used to access X selections
    #[arg(long, global = true, default_value = "xclip")]
    pub xclip: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Read or write the CLIPBOARD selection
    Clipboard {
        #[command(subcommand)]
        action: SelectionAction,
    },

    /// Read or write the PRIMARY selection
    Primary {
        #[command(subcommand)]
        action: SelectionAction,
    },

    /// Print the handle of the focused window
    Window,
}

#[derive(Subcommand, Clone)]
pub enum SelectionAction {
    /// Print the selection text (empty if it holds none)
    Get,

    /// Replace the selection text
    Set {
        /// Text to store
        text: String,
    },

    /// Clear the selection
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clipboard_set() {
        let cli = Cli::try_parse_from(["textinput", "clipboard", "set", "hello"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Clipboard {
                action: SelectionAction::Set { ref text }
            } if text == "hello"
        ));
        assert_eq!(cli.xclip, "xclip");
        assert_eq!(cli.display, None);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["textinput", "primary", "get", "--display", ":1"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Primary {
                action: SelectionAction::Get
            }
        ));
        assert_eq!(cli.display.as_deref(), Some(":1"));
    }

    #[test]
    fn selection_action_required() {
        assert!(Cli::try_parse_from(["textinput", "clipboard"]).is_err());
    }
}
