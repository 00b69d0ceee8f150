//! Core trait definitions shared across the druggen crates.

/// A type that carries a composite integer score.
pub trait Scored {
    /// The score value.
    fn score(&self) -> u32;
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}
