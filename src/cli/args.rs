//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `languages`: List supported languages, marking the active one
//! - `resolve`: Print the language a new session would start in
//! - `t`: Translate key paths with the active language
//! - `set`: Change and persist the active language
//! - `check`: Report key-path gaps between catalogs
//! - `init`: Initialize an .adi18nrc.json configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }

    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Languages(cmd)) => Some(&cmd.common),
            Some(Command::Resolve(cmd)) => Some(&cmd.common),
            Some(Command::Translate(cmd)) => Some(&cmd.common),
            Some(Command::Set(cmd)) => Some(&cmd.common),
            Some(Command::Check(cmd)) => Some(&cmd.common),
            Some(Command::Init) | None => None,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Catalog directory (overrides config file)
    #[arg(long)]
    pub messages_dir: Option<PathBuf>,

    /// Preference file holding the persisted language (overrides config file)
    #[arg(long, env = "AD_I18N_STORAGE")]
    pub storage: Option<PathBuf>,

    /// Ambient locale, e.g. "es-MX" (default: AD_I18N_LOCALE, then the OS locale)
    #[arg(long)]
    pub locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct LanguagesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Dot-separated key paths, e.g. hero.title
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Use this language for this invocation only (not persisted)
    #[arg(long)]
    pub lang: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SetCommand {
    /// Language code: en, es, zh, de, ru or hi
    pub code: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List supported languages
    Languages(LanguagesCommand),
    /// Print the language a new session starts in
    Resolve(ResolveCommand),
    /// Translate key paths, printing one result per line
    #[command(name = "t", alias = "translate")]
    Translate(TranslateCommand),
    /// Set and persist the active language
    Set(SetCommand),
    /// Check that every catalog has the same key paths as the primary language
    Check(CheckCommand),
    /// Initialize a new .adi18nrc.json configuration file
    Init,
}
