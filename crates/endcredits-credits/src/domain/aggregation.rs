//! Merging real submissions with placeholders.

use endcredits_submissions::domain::submission::Submission;

use super::placeholders::Placeholder;

/// The page always shows at least this many credits.
pub const MIN_CREDITS: usize = 15;

/// One line of the merged credits list, real or placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreditEntry {
    pub name: Option<String>,
    pub role: Option<String>,
    pub note: Option<String>,
    pub song: Option<String>,
}

impl From<&Submission> for CreditEntry {
    fn from(submission: &Submission) -> Self {
        Self {
            name: submission.name.clone(),
            role: submission.role.clone(),
            note: submission.note.clone(),
            song: submission.song.clone(),
        }
    }
}

impl From<&Placeholder> for CreditEntry {
    fn from(placeholder: &Placeholder) -> Self {
        Self {
            name: Some(placeholder.name.to_owned()),
            role: Some(placeholder.role.to_owned()),
            note: placeholder.note.map(str::to_owned),
            song: placeholder.song.map(str::to_owned),
        }
    }
}

/// Returns every real submission, in order, followed by enough placeholders
/// to reach `minimum` entries. Placeholders repeat from the start of the
/// list when more are needed than exist; slot `i` gets
/// `placeholders[i % placeholders.len()]`. An empty placeholder list adds
/// nothing.
#[must_use]
pub fn merge_credits(
    submissions: &[Submission],
    placeholders: &[Placeholder],
    minimum: usize,
) -> Vec<CreditEntry> {
    let padding = minimum.saturating_sub(submissions.len());

    submissions
        .iter()
        .map(CreditEntry::from)
        .chain(placeholders.iter().cycle().take(padding).map(CreditEntry::from))
        .collect()
}
