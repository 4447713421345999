/// One character slot of the secret word.
///
/// A letter starts hidden and is revealed at most once. Its `position` is the
/// slot index in the scene's word row, assigned by the game during setup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Letter {
    character: char,
    revealed: bool,
    position: usize,
}

impl Letter {
    /// Create a hidden puzzle letter. The position is assigned later by the
    /// game, one slot per letter in word order.
    pub fn new(character: char) -> Self {
        Letter {
            character,
            revealed: false,
            position: 0,
        }
    }

    pub fn character(&self) -> char {
        self.character
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_hidden(&self) -> bool {
        !self.revealed
    }

    /// Flip the letter to revealed. A no-op if it already is.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let letter = Letter::new('a');
        assert!(letter.is_hidden());
        assert!(!letter.is_revealed());
        assert_eq!(letter.character(), 'a');
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut letter = Letter::new('a');
        letter.reveal();
        assert!(letter.is_revealed());
        letter.reveal();
        assert!(letter.is_revealed());
    }

    #[test]
    fn equality_covers_all_fields() {
        let mut a = Letter::new('a');
        let b = Letter::new('a');
        assert_eq!(a, b);

        a.reveal();
        assert_ne!(a, b);

        let mut c = Letter::new('a');
        c.set_position(3);
        assert_ne!(b, c);
    }
}
