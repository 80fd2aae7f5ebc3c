//! # Tools Command Group
//!
//! File: cli/src/commands/tools.rs
//!
//! ## Overview
//!
//! Runs the AI toolkit demos from the terminal:
//!
//! ```bash
//! elevated tools copy --kind press-release --track "Night Drive" --artist Nova --genre Synthwave
//! elevated tools cover-art --style abstract "neon skyline at dusk"
//! ```
//!
//! Both subcommands pause for the configured generation delay unless
//! `--no-delay` is given.
//!
use crate::core::config::{self, ToolkitConfig};
use crate::core::error::Result;
use crate::toolkit::{self, ArtStyle, CopyKind, CopyRequest, CoverArtRequest};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
pub struct ToolsArgs {
    #[command(subcommand)]
    command: ToolsCommand,

    /// Skip the simulated generation delay.
    #[arg(long, global = true)]
    no_delay: bool,
}

#[derive(Subcommand, Debug)]
enum ToolsCommand {
    /// Write marketing copy for a release.
    Copy(CopyArgs),
    /// Generate cover art from a description.
    CoverArt(CoverArtArgs),
}

#[derive(Parser, Debug)]
struct CopyArgs {
    #[arg(long, value_enum, default_value_t = CopyKind::PlaylistPitch)]
    kind: CopyKind,
    #[arg(long)]
    track: String,
    #[arg(long)]
    artist: String,
    #[arg(long, default_value = "")]
    genre: String,
}

#[derive(Parser, Debug)]
struct CoverArtArgs {
    #[arg(long, value_enum, default_value_t = ArtStyle::Photorealistic)]
    style: ArtStyle,
    /// Description of the artwork.
    #[arg(required = true, num_args = 1..)]
    prompt: Vec<String>,
}

pub async fn handle_tools(args: ToolsArgs) -> Result<()> {
    let toolkit_config = if args.no_delay {
        ToolkitConfig::instant()
    } else {
        config::load_config()?.toolkit
    };

    match args.command {
        ToolsCommand::Copy(copy) => {
            let request = CopyRequest {
                kind: copy.kind,
                track_name: copy.track,
                artist_name: copy.artist,
                genre: copy.genre,
            };
            let generated = toolkit::write_copy(&toolkit_config, &request).await?;
            println!("{}", generated.content);
        }
        ToolsCommand::CoverArt(art) => {
            let request = CoverArtRequest {
                prompt: art.prompt.join(" "),
                style: art.style,
            };
            let cover = toolkit::create_cover_art(&toolkit_config, &request).await?;
            println!("{}", cover.url);
        }
    }
    Ok(())
}
