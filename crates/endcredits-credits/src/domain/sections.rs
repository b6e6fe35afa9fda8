//! The three sections of the credits page.

use endcredits_submissions::domain::submission::Submission;
use serde::Serialize;

use super::aggregation::{CreditEntry, MIN_CREDITS, merge_credits};
use super::placeholders::PLACEHOLDERS;

/// Heading shown above all sections.
pub const CREDITS_TITLE: &str = "End Credits";

/// Playlist offered to visitors once they have submitted a credit.
pub const PLAYLIST: Playlist = Playlist {
    intro: "Here's a playlist collecting the collective submissions' songs:",
    title: "A Playlist to move on from limerence by listening to limerent songs",
    url: "https://open.spotify.com/playlist/3Dozjx4nvzvK7d3bfG8t0A?si=K4CABoDXSGKEuFiCYuHAqg",
};

/// A role/name pair in the cast section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastLine {
    pub role: Option<String>,
    pub name: Option<String>,
}

/// A note and its author in the special-thanks section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThanksLine {
    pub name: Option<String>,
    pub note: String,
}

/// A link shown under "A PLAYLIST FOR YOU", with the sentence introducing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Playlist {
    pub intro: &'static str,
    pub title: &'static str,
    pub url: &'static str,
}

/// Cast, soundtrack and special thanks, each in merged-list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditsSections {
    pub cast: Vec<CastLine>,
    pub soundtrack: Vec<String>,
    pub thanks: Vec<ThanksLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist: Option<Playlist>,
}

impl CreditsSections {
    /// Scans `entries` once per section. Every entry is cast; only entries
    /// with a non-empty song or note appear in the soundtrack or thanks.
    #[must_use]
    pub fn from_entries(entries: &[CreditEntry]) -> Self {
        let cast = entries
            .iter()
            .map(|entry| CastLine {
                role: entry.role.clone(),
                name: entry.name.clone(),
            })
            .collect();

        let soundtrack = entries
            .iter()
            .filter_map(|entry| non_empty(entry.song.as_deref()))
            .map(str::to_owned)
            .collect();

        let thanks = entries
            .iter()
            .filter_map(|entry| {
                non_empty(entry.note.as_deref()).map(|note| ThanksLine {
                    name: entry.name.clone(),
                    note: note.to_owned(),
                })
            })
            .collect();

        Self {
            cast,
            soundtrack,
            thanks,
            playlist: None,
        }
    }

    /// Attaches the playlist link.
    #[must_use]
    pub fn with_playlist(self) -> Self {
        Self {
            playlist: Some(PLAYLIST),
            ..self
        }
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

/// Builds the page from listed submissions using the built-in placeholders
/// and minimum. `submitted` adds the playlist.
#[must_use]
pub fn compose_credits(submissions: &[Submission], submitted: bool) -> CreditsSections {
    let merged = merge_credits(submissions, PLACEHOLDERS, MIN_CREDITS);
    let sections = CreditsSections::from_entries(&merged);
    if submitted {
        sections.with_playlist()
    } else {
        sections
    }
}
