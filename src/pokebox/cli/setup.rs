use clap::{Parser, Subcommand};
use pokebox::model::{canonical_field, FIELDS};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pokebox", bin_name = "pokebox", version)]
#[command(about = "Keep track of a personal Pokémon collection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $POKEBOX_HOME, then the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the collection
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Show every field of one or more records
    #[command(alias = "v", display_order = 2)]
    View {
        /// Record IDs (e.g. 025 133)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Add a record (the name is filled in from the ID when known, and vice versa)
    #[command(alias = "n", display_order = 3)]
    Add {
        /// Record ID, or a name from the identifier file
        id: Option<String>,

        /// Display name
        name: Option<String>,

        /// Set a field, e.g. --set Level=50 --set "Forme majeur=Alola"
        #[arg(short, long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },

    /// Change fields on every record with the given ID
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Record ID
        id: String,

        /// Field to change, e.g. --set Level=51
        #[arg(short, long = "set", value_name = "FIELD=VALUE", required = true, value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },

    /// Delete every record with the given IDs
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Record IDs (e.g. 025 133)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Resolve identifiers to names, or names to identifiers
    #[command(display_order = 6)]
    Lookup {
        /// IDs or names (e.g. 025 Eevee)
        #[arg(required = true, num_args = 1..)]
        queries: Vec<String>,
    },

    /// Print the sprite file for one or more IDs
    #[command(display_order = 7)]
    Sprite {
        /// Record IDs
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Get or set configuration
    #[command(display_order = 8)]
    Config {
        /// Configuration key (e.g., sprite-ext)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory, config and collection file
    #[command(display_order = 9)]
    Init,
}

/// Parses `FIELD=VALUE`, matching FIELD against the schema without regard to case.
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got {:?}", s))?;
    let field = canonical_field(field).ok_or_else(|| {
        format!(
            "unknown field {:?} (fields: {})",
            field.trim(),
            FIELDS.join(", ")
        )
    })?;
    Ok((field.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_uses_schema_spelling() {
        assert_eq!(
            parse_assignment("forme majeur=Alola").unwrap(),
            ("Forme majeur".to_string(), "Alola".to_string())
        );
    }

    #[test]
    fn assignment_keeps_equals_in_value() {
        assert_eq!(
            parse_assignment("Note=a=b").unwrap(),
            ("Note".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn assignment_allows_blank_value() {
        assert_eq!(parse_assignment("Ball=").unwrap().1, "");
    }

    #[test]
    fn assignment_rejects_unknown_or_malformed() {
        assert!(parse_assignment("Weight=6kg").is_err());
        assert!(parse_assignment("Level").is_err());
    }

    #[test]
    fn parses_add_with_sets() {
        let cli = Cli::try_parse_from([
            "pokebox", "add", "025", "--set", "Level=5", "-s", "method=Gift",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add { id, name, set }) => {
                assert_eq!(id.as_deref(), Some("025"));
                assert!(name.is_none());
                assert_eq!(set[1], ("Method".to_string(), "Gift".to_string()));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn edit_requires_a_change() {
        assert!(Cli::try_parse_from(["pokebox", "edit", "025"]).is_err());
    }

    #[test]
    fn no_command_is_allowed() {
        let cli = Cli::try_parse_from(["pokebox", "--home", "/tmp/box"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/box")));
    }
}
