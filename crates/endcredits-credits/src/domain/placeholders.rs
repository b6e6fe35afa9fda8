//! Pre-authored credits used to pad a short list.

/// A fixed credit entry compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub name: &'static str,
    pub role: &'static str,
    pub song: Option<&'static str>,
    pub note: Option<&'static str>,
}

impl Placeholder {
    const fn cast(name: &'static str, role: &'static str) -> Self {
        Self {
            name,
            role,
            song: None,
            note: None,
        }
    }

    const fn featured(
        name: &'static str,
        role: &'static str,
        song: &'static str,
        note: &'static str,
    ) -> Self {
        Self {
            name,
            role,
            song: Some(song),
            note: Some(note),
        }
    }
}

/// Placeholders in the order they fill empty slots.
pub const PLACEHOLDERS: &[Placeholder] = &[
    Placeholder::cast("Jay Tommy", "The Dreamer"),
    Placeholder::cast("Ophelia Duckings", "The Tragic Lover"),
    Placeholder::featured(
        "Werther Miller",
        "Freckled girl",
        "Creep - Radiohead",
        "You gave me strength.",
    ),
    Placeholder::featured(
        "Echo Batsky",
        "The Voice",
        "Dreams - Fleetwood Mac",
        "I'll always remember your kind words.",
    ),
    Placeholder::featured(
        "Dante Burtis",
        "The Pilgrim",
        "Video Games - Lana del Rey",
        "This was possible thanks to you.",
    ),
    Placeholder::cast("Orpheus Lee", "Salesman"),
    Placeholder::cast("Helga Pataki", "Woman in pink"),
    Placeholder::cast("Michael Reeds", "Construction Worker"),
    Placeholder::featured(
        "Stefano Rossi",
        "Poet on the street",
        "Mad World - Tears for Fears",
        "Great skills and a keen eye for detail.",
    ),
    Placeholder::cast("Fantine Pluck", "The Martyr"),
];
