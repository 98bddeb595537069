//! Command-line arguments

use clap::Parser;

/// Create the board schema and seed the admin account.
///
/// The admin password is read from `ADMINPASS`.
#[derive(Debug, Parser)]
#[command(name = "board-setup", version)]
pub struct Cli {
    /// PostgreSQL connection string; overrides DATABASE_URL
    #[arg(env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_url() {
        let cli = Cli::try_parse_from(["board-setup", "postgres://localhost/board"]).unwrap();
        assert_eq!(cli.database_url.as_deref(), Some("postgres://localhost/board"));
    }

    #[test]
    fn test_empty_positional_is_kept_for_fallback() {
        let cli = Cli::try_parse_from(["board-setup", ""]).unwrap();
        assert_eq!(cli.database_url.as_deref(), Some(""));
    }

    #[test]
    fn test_extra_arguments_rejected() {
        assert!(Cli::try_parse_from(["board-setup", "a", "b"]).is_err());
    }
}
