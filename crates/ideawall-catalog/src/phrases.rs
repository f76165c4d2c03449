//! Loading phrases cycled while the kiosk waits on generation.

/// Phrases shown during idea generation.
pub const GENERAL_LOADING_PHRASES: &[&str] = &[
    "Brainstorming creative solutions...",
    "Exploring innovative possibilities...",
    "Connecting sustainable ideas...",
    "Thinking outside the turbine...",
    "Channeling renewable inspiration...",
    "Spinning up brilliant concepts...",
    "Harvesting creative energy...",
    "Generating fresh perspectives...",
    "Powering through possibilities...",
    "Transforming ideas into innovation...",
];

/// Phrases shown while a sketch renders.
pub const SKETCH_LOADING_PHRASES: &[&str] = &[
    "Sketching your vision...",
    "Bringing your idea to life...",
    "Drawing up the possibilities...",
    "Creating visual magic...",
    "Rendering your concept...",
    "Painting your innovation...",
    "Illustrating the future...",
    "Crafting your vision...",
    "Designing your dream...",
    "Visualizing brilliance...",
];

/// Cycling iterator over a phrase list.
#[derive(Debug, Clone)]
pub struct PhraseRotation {
    phrases: &'static [&'static str],
    next: usize,
}

impl PhraseRotation {
    /// Rotation over the general idea-generation phrases.
    pub fn general() -> Self {
        Self::over(GENERAL_LOADING_PHRASES)
    }

    /// Rotation over the sketch-rendering phrases.
    pub fn sketch() -> Self {
        Self::over(SKETCH_LOADING_PHRASES)
    }

    /// Rotation over an arbitrary static phrase list.
    pub fn over(phrases: &'static [&'static str]) -> Self {
        Self { phrases, next: 0 }
    }

    /// The next phrase, wrapping around at the end of the list.
    pub fn next_phrase(&mut self) -> Option<&'static str> {
        let phrase = self.phrases.get(self.next).copied()?;
        self.next = (self.next + 1) % self.phrases.len();
        Some(phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::{GENERAL_LOADING_PHRASES, PhraseRotation};
    use pretty_assertions::assert_eq;

    #[test]
    fn rotation_wraps_around() {
        let mut rotation = PhraseRotation::general();
        let first = rotation.next_phrase().expect("phrase");
        for _ in 1..GENERAL_LOADING_PHRASES.len() {
            rotation.next_phrase().expect("phrase");
        }
        assert_eq!(rotation.next_phrase(), Some(first));
    }

    #[test]
    fn empty_list_yields_nothing() {
        static EMPTY: &[&str] = &[];
        let mut rotation = PhraseRotation::over(EMPTY);
        assert_eq!(rotation.next_phrase(), None);
    }
}
