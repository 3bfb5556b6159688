//! CLI definitions for Clutch.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Clutch CLI.
#[derive(Parser)]
#[command(name = "clutch")]
#[command(about = "Turn a web page into a ready-to-use content angle")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.clutch/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Anthropic API key
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Only log to the console
    #[arg(long, global = true)]
    pub no_file_log: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Analyze a page and print a content angle
    Analyze(AnalyzeArgs),

    /// Check that the API key is accepted
    CheckKey,

    /// Show or check the effective configuration
    Config {
        /// Validate instead of printing
        #[arg(long)]
        check: bool,
    },
}

#[derive(clap::Args)]
pub(crate) struct AnalyzeArgs {
    /// File with the page's visible text (reads stdin when omitted)
    #[arg(short = 'f', long)]
    pub text_file: Option<PathBuf>,

    /// Page URL
    #[arg(long)]
    pub url: String,

    /// Page title
    #[arg(long, default_value = "")]
    pub title: String,

    /// First headline on the page
    #[arg(long, default_value = "")]
    pub headline: String,

    /// Meta description
    #[arg(long, default_value = "")]
    pub meta_description: String,

    /// Domain (derived from --url when omitted)
    #[arg(long)]
    pub domain: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "clutch",
            "analyze",
            "--url",
            "https://example.com/post",
            "--title",
            "Post",
            "-f",
            "page.txt",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.url, "https://example.com/post");
                assert_eq!(args.title, "Post");
                assert_eq!(args.text_file, Some(PathBuf::from("page.txt")));
                assert!(args.headline.is_empty());
                assert!(args.domain.is_none());
                assert!(args.json);
            }
            _ => panic!("Expected Analyze"),
        }
    }

    #[test]
    fn test_analyze_requires_url() {
        assert!(Cli::try_parse_from(["clutch", "analyze"]).is_err());
    }

    #[test]
    fn test_parse_check_key_with_global_flags() {
        let cli = Cli::try_parse_from([
            "clutch",
            "check-key",
            "--api-key",
            "sk-ant-x",
            "--config",
            "/tmp/c.toml",
            "--no-file-log",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::CheckKey));
        assert_eq!(cli.api_key.as_deref(), Some("sk-ant-x"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert!(cli.no_file_log);
    }

    #[test]
    fn test_parse_config_check() {
        let cli = Cli::try_parse_from(["clutch", "config", "--check"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { check: true }));
    }

    #[test]
    fn test_command_required() {
        assert!(Cli::try_parse_from(["clutch"]).is_err());
    }
}
