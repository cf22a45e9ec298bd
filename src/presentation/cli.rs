//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config, --fixture) are
//! inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::Section;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Vitrine - render a headless-CMS portfolio in the terminal
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Store credentials come from vitrine.toml or VITRINE_BUCKET_SLUG / VITRINE_READ_KEY."
)]
pub struct Cli {
    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./vitrine.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read content from a JSON fixture instead of the remote store
    #[arg(long, global = true, value_name = "FILE")]
    pub fixture: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the whole page and render its sections
    Show {
        /// Sections to render (all by default, can be repeated)
        #[arg(short, long = "section", value_enum)]
        sections: Vec<Section>,
    },

    /// Show the portfolio settings
    Settings,

    /// List projects
    Projects {
        /// Only featured projects
        #[arg(long)]
        featured: bool,

        /// Show every detail of the project with this slug
        #[arg(long, value_name = "SLUG")]
        detail: Option<String>,
    },

    /// List skills grouped by category
    Skills,

    /// List experience, most relevant first
    Experience,

    /// Play the hero typing animation (Ctrl+C to stop)
    Hero {
        /// Stop after this many passes over the subtitles
        #[arg(long, value_name = "N")]
        cycles: Option<u32>,
    },

    /// Draft a contact email, or record a submission with --send
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        /// Create a contact submission in the store (needs a write key)
        #[arg(long)]
        send: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_show_sections() {
        let cli = Cli::try_parse_from(["vitrine", "show", "-s", "skills", "--section", "contact"])
            .unwrap();
        match cli.command {
            Commands::Show { sections } => {
                assert_eq!(sections, vec![Section::Skills, Section::Contact]);
            }
            _ => panic!("Expected show command"),
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vitrine",
            "projects",
            "--featured",
            "--json",
            "-vv",
            "--fixture",
            "content.json",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.fixture, Some(PathBuf::from("content.json")));
        assert!(matches!(
            cli.command,
            Commands::Projects {
                featured: true,
                detail: None
            }
        ));
    }

    #[test]
    fn test_cli_contact_requires_fields() {
        assert!(Cli::try_parse_from(["vitrine", "contact", "--name", "Ada"]).is_err());

        let cli = Cli::try_parse_from([
            "vitrine",
            "contact",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--message",
            "Hello",
            "--send",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Contact { send: true, .. }));
    }

    #[test]
    fn test_cli_rejects_unknown_section() {
        assert!(Cli::try_parse_from(["vitrine", "show", "--section", "blog"]).is_err());
    }

    #[test]
    fn test_cli_color_value_enum() {
        let cli = Cli::try_parse_from(["vitrine", "--color", "never", "skills"]).unwrap();
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }
}
