use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "todos", bin_name = "todos", version = get_version())]
#[command(about = "A small local todo list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the todo list and config (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List todos, newest first
    #[command(alias = "ls")]
    List,

    /// Add a todo
    #[command(alias = "a")]
    Add {
        /// Title words, joined with spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        title: Vec<String>,
    },

    /// Mark a todo done, or open again
    #[command(alias = "t")]
    Toggle {
        /// Id of the todo
        id: u64,
    },

    /// Delete a todo
    #[command(alias = "rm")]
    Delete {
        /// Id of the todo
        id: u64,
    },

    /// Show one todo, read fresh from storage
    Show {
        /// Id (e.g. 3) or route (e.g. /todos/3)
        target: String,
    },

    /// Change the title of a todo
    #[command(alias = "e")]
    Edit {
        /// Id (e.g. 3) or route (e.g. /todos/3)
        target: String,

        /// New title words, joined with spaces (cut to 30 characters)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        title: Vec<String>,
    },

    /// Show or change the color scheme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
    /// Follow the operating system
    System,
}

/// Send `tracing` output to stderr. `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("todos").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_list() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn add_collects_title_words() {
        match parse(&["add", "Buy", "oat", "milk"]).command {
            Some(Commands::Add { title }) => assert_eq!(title.join(" "), "Buy oat milk"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rm_is_delete() {
        assert!(matches!(
            parse(&["rm", "4"]).command,
            Some(Commands::Delete { id: 4 })
        ));
    }

    #[test]
    fn edit_takes_a_route() {
        match parse(&["edit", "/todos/3", "Updated"]).command {
            Some(Commands::Edit { target, title }) => {
                assert_eq!(target, "/todos/3");
                assert_eq!(title, vec!["Updated"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn global_options_work_after_subcommand() {
        let cli = parse(&["list", "--data-dir", "/tmp/x", "-v"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
    }

    #[test]
    fn theme_action_is_optional() {
        assert!(matches!(
            parse(&["theme"]).command,
            Some(Commands::Theme { action: None })
        ));
        assert!(matches!(
            parse(&["theme", "toggle"]).command,
            Some(Commands::Theme {
                action: Some(ThemeAction::Toggle)
            })
        ));
    }

    #[test]
    fn toggle_rejects_non_numeric_ids() {
        assert!(Cli::try_parse_from(["todos", "toggle", "abc"]).is_err());
    }
}
