use std::fmt;

/// The seven art rows above the base line. Each is 8 columns wide; the word
/// padding is appended to the right so the word row can hold the letters.
const GALLOWS_ROWS: [&str; 7] = [
    "  ----- ",
    "  |   | ",
    "  |   | ",
    "  |     ",
    "  |     ",
    "  |     ",
    "  |     ",
];

const BASE_ROW: &str = "========";

/// Row holding the revealed letters of the word.
const WORD_ROW: usize = 6;
/// First word-letter column, directly above the base row's dashes.
const WORD_MARGIN: usize = 8;

/// The six gallows body parts, in the order they are drawn on wrong guesses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GallowsPart {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl GallowsPart {
    pub const DRAW_ORDER: [GallowsPart; 6] = [
        GallowsPart::Head,
        GallowsPart::Torso,
        GallowsPart::LeftArm,
        GallowsPart::RightArm,
        GallowsPart::LeftLeg,
        GallowsPart::RightLeg,
    ];

    pub fn symbol(self) -> char {
        match self {
            GallowsPart::Head => '0',
            GallowsPart::Torso => '|',
            GallowsPart::LeftArm | GallowsPart::LeftLeg => '/',
            GallowsPart::RightArm | GallowsPart::RightLeg => '\\',
        }
    }

    /// Fixed (row, column) cell of the part, below the rope at column 6.
    pub fn cell(self) -> (usize, usize) {
        match self {
            GallowsPart::Head => (3, 6),
            GallowsPart::Torso => (4, 6),
            GallowsPart::LeftArm => (4, 5),
            GallowsPart::RightArm => (4, 7),
            GallowsPart::LeftLeg => (5, 5),
            GallowsPart::RightLeg => (5, 7),
        }
    }
}

/// The ASCII scene: gallows art, the word row, and the base line.
///
/// A grid of character rows sized from the word length. Gallows parts and
/// revealed letters replace blanks in place, so the rendered text keeps a
/// constant length for the lifetime of a game.
#[derive(Clone, Debug)]
pub struct Scene {
    rows: Vec<Vec<char>>,
}

impl Scene {
    pub fn new(word_len: usize) -> Self {
        let mut rows: Vec<Vec<char>> = GALLOWS_ROWS
            .iter()
            .map(|art| {
                let mut row: Vec<char> = art.chars().collect();
                row.extend(std::iter::repeat(' ').take(word_len));
                row
            })
            .collect();

        // One dash per hidden letter, under the word row.
        let mut base: Vec<char> = BASE_ROW.chars().collect();
        base.extend(std::iter::repeat('-').take(word_len));
        rows.push(base);

        Scene { rows }
    }

    /// Draw a gallows body part at its fixed cell.
    pub fn draw_part(&mut self, part: GallowsPart) {
        let (row, col) = part.cell();
        self.rows[row][col] = part.symbol();
    }

    /// Show a revealed letter in the word row, above its base-line dash.
    pub fn reveal_letter(&mut self, slot: usize, character: char) {
        self.rows[WORD_ROW][WORD_MARGIN + slot] = character;
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for &c in row {
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(scene: &Scene) -> Vec<String> {
        scene.to_string().lines().map(str::to_string).collect()
    }

    #[test]
    fn empty_scene_for_three_letters() {
        let scene = Scene::new(3);
        let lines = lines(&scene);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "  -----    ");
        assert_eq!(lines[1], "  |   |    ");
        assert_eq!(lines[6], "  |        ");
        assert_eq!(lines[7], "========---");
    }

    #[test]
    fn parts_land_on_their_cells() {
        let mut scene = Scene::new(2);
        for part in GallowsPart::DRAW_ORDER {
            scene.draw_part(part);
        }
        let lines = lines(&scene);
        assert_eq!(lines[3], "  |   0   ");
        assert_eq!(lines[4], "  |  /|\\  ");
        assert_eq!(lines[5], "  |  / \\  ");
    }

    #[test]
    fn letters_align_with_base_dashes() {
        let mut scene = Scene::new(3);
        scene.reveal_letter(0, 'c');
        scene.reveal_letter(2, 't');
        let lines = lines(&scene);
        assert_eq!(lines[6], "  |     c t");
        assert_eq!(lines[7], "========---");
    }

    #[test]
    fn drawing_keeps_render_length_constant() {
        let mut scene = Scene::new(4);
        let before = scene.to_string().len();
        scene.draw_part(GallowsPart::Head);
        scene.reveal_letter(1, 'x');
        assert_eq!(scene.to_string().len(), before);
    }
}
