//! Pronunciation capability.

/// Text-to-speech output for Spanish headwords.
///
/// Implementations must cancel any utterance still playing before starting a
/// new one, and must treat a missing speech engine as a silent no-op.
pub trait Pronouncer {
    /// Whether the engine can currently produce audio.
    fn is_ready(&self) -> bool;

    /// Speak `text`, replacing any utterance in progress.
    fn speak(&mut self, text: &str);
}

impl<P: Pronouncer + ?Sized> Pronouncer for Box<P> {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn speak(&mut self, text: &str) {
        (**self).speak(text)
    }
}

/// Pronouncer for hosts without speech output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Pronouncer for Silent {
    fn is_ready(&self) -> bool {
        false
    }

    fn speak(&mut self, _text: &str) {}
}
