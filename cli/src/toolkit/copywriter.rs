//! Marketing copy writer: fills a fixed template for the chosen copy kind.

use crate::core::error::{AppError, Result};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CopyKind {
    #[default]
    PlaylistPitch,
    SocialCaption,
    PressRelease,
    ArtistBio,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CopyRequest {
    #[serde(default)]
    pub kind: CopyKind,
    #[serde(default)]
    pub track_name: String,
    #[serde(default)]
    pub artist_name: String,
    /// May be blank.
    #[serde(default)]
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCopy {
    pub kind: CopyKind,
    pub content: String,
}

/// Builds the copy for `request`. Track and artist names must not be blank;
/// all fields are substituted as given.
pub fn generate_copy(request: &CopyRequest) -> Result<GeneratedCopy> {
    let track = request.track_name.as_str();
    let artist = request.artist_name.as_str();
    if track.trim().is_empty() || artist.trim().is_empty() {
        return Err(anyhow!(AppError::InvalidRequest(
            "Track name and artist name are required".to_string()
        )));
    }
    let genre = request.genre.as_str();

    let content = match request.kind {
        CopyKind::PlaylistPitch => format!(
            "🎵 Playlist Pitch for \"{track}\"\n\n\
             Hey there!\n\n\
             I'm {artist}, and I'd love to submit my latest {genre} track \"{track}\" for your consideration.\n\n\
             This track blends modern production with authentic emotion, creating a sound that resonates with fans of the genre while bringing something fresh to the table. The production quality is radio-ready, and early feedback from listeners has been overwhelmingly positive.\n\n\
             I believe \"{track}\" would be a great fit for your playlist because it captures that perfect balance of energy and emotion your listeners love.\n\n\
             Thank you for considering my music!\n\n\
             Best regards,\n\
             {artist}"
        ),
        CopyKind::SocialCaption => format!(
            "Just dropped my new {genre} track \"{track}\" 🔥\n\n\
             This one's special. Poured my heart into every beat, every lyric. Link in bio to stream now on all platforms! 🎧\n\n\
             #NewMusic #{genre} #IndependentArtist #MusicRelease #NowPlaying"
        ),
        CopyKind::PressRelease => format!(
            "FOR IMMEDIATE RELEASE\n\n\
             {artist} Releases New {genre} Single \"{track}\"\n\n\
             Emerging {genre} artist {artist} has released their latest single \"{track}\", now available on all major streaming platforms.\n\n\
             The track showcases {artist}'s signature sound while pushing creative boundaries. With its compelling production and authentic storytelling, \"{track}\" is poised to make waves in the {genre} scene.\n\n\
             \"{track}\" is available now on Spotify, Apple Music, and all major streaming platforms."
        ),
        CopyKind::ArtistBio => format!(
            "{artist} is an innovative {genre} artist known for crafting emotionally resonant music that connects with listeners on a deep level.\n\n\
             With a unique approach to songwriting and production, {artist} has been steadily building a dedicated fanbase through authentic storytelling and memorable melodies.\n\n\
             Their latest release, \"{track}\", continues to showcase their evolution as an artist while staying true to their {genre} roots."
        ),
    };

    Ok(GeneratedCopy {
        kind: request.kind,
        content,
    })
}
