//! # Slug Subcommand
//!
//! `jobboard slug encode <TITLE>` prints the URL slug of a title.
//! `jobboard slug decode <SLUG>` prints the approximate title of a slug.

use anyhow::Result;
use clap::{Args, Subcommand};

use jobboard_core::slug;

/// Arguments for the `jobboard slug` subcommand.
#[derive(Args, Debug)]
pub struct SlugArgs {
    #[command(subcommand)]
    pub command: SlugCommand,
}

/// Slug operations.
#[derive(Subcommand, Debug)]
pub enum SlugCommand {
    /// Turn a title into a URL slug.
    Encode {
        /// Title text. Multiple words may be passed unquoted.
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Turn a slug back into space-separated words.
    Decode {
        /// Slug text.
        slug: String,
    },
}

/// Execute the slug subcommand. Always exits 0.
pub fn run_slug(args: &SlugArgs) -> Result<u8> {
    println!("{}", render(&args.command));
    Ok(0)
}

fn render(command: &SlugCommand) -> String {
    match command {
        SlugCommand::Encode { title } => slug::encode(&title.join(" ")),
        SlugCommand::Decode { slug: s } => slug::decode(s),
    }
}
