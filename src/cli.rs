use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "gmail-digest", version, about = "Daily Gmail digest from the command line")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "default",
        help = "Profile name to use"
    )]
    pub profile: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Auth(AuthArgs),
    List(ListArgs),
    Digest(DigestArgs),
}

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    Login,
    Status,
    Logout,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, default_value_t = 10, help = "Maximum threads to return")]
    pub limit: u32,
    #[arg(long, help = "Gmail search query (default: unread from the last day)")]
    pub q: Option<String>,
}

#[derive(Debug, Args)]
pub struct DigestArgs {
    #[arg(long, default_value_t = 50, help = "Maximum threads to digest")]
    pub limit: u32,
    #[arg(long, help = "Override the Gmail search query")]
    pub q: Option<String>,
    #[arg(long, help = "Markdown output path (default: digest-YYYY-MM-DD.md)")]
    pub out: Option<PathBuf>,
    #[arg(long, help = "Print only, skip writing the markdown file")]
    pub no_file: bool,
}
