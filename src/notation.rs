use crate::error::{CdResult, CubeDeckError};
use std::fmt;
use std::str::FromStr;

/// The six cube faces, in the URFDLB order used by the facelet string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    pub fn from_letter(c: char) -> Option<Face> {
        match c {
            'U' => Some(Face::U),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    /// Offset of this face's block within the 54-char facelet string, /9.
    pub fn index(self) -> usize {
        match self {
            Face::U => 0,
            Face::R => 1,
            Face::F => 2,
            Face::D => 3,
            Face::L => 4,
            Face::B => 5,
        }
    }
}

/// Whole-cube rotation axes (lowercase x/y/z in notation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

/// Turn amount: bare token = clockwise, `2` = half turn, `'` = counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    Double,
    Counter,
}

impl Turn {
    pub fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::Double => "2",
            Turn::Counter => "'",
        }
    }

    pub fn quarter_turns(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Double => 2,
            Turn::Counter => 3,
        }
    }

    pub fn inverted(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::Counter,
            Turn::Double => Turn::Double,
            Turn::Counter => Turn::Clockwise,
        }
    }
}

/// A single move token: a face turn (`R`, `U'`, `F2`) or a whole-cube
/// rotation (`x`, `y2`, `z'`). Structural equality coincides with
/// token-text equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    FaceTurn(Face, Turn),
    Rotation(Axis, Turn),
}

impl Move {
    /// `X2` maps to itself, `X'` to `X`, `X` to `X'`. Pure and total.
    pub fn inverted(self) -> Move {
        match self {
            Move::FaceTurn(f, t) => Move::FaceTurn(f, t.inverted()),
            Move::Rotation(a, t) => Move::Rotation(a, t.inverted()),
        }
    }

    pub fn turn(self) -> Turn {
        match self {
            Move::FaceTurn(_, t) | Move::Rotation(_, t) => t,
        }
    }

    /// Relabel a solver-coordinate face turn into in-hand coordinates
    /// (the cube held with a different face forward): R->F, F->L, L->B,
    /// B->R, U and D unchanged. Rotations pass through.
    pub fn hand_remapped(self) -> Move {
        match self {
            Move::FaceTurn(f, t) => {
                let f = match f {
                    Face::R => Face::F,
                    Face::F => Face::L,
                    Face::L => Face::B,
                    Face::B => Face::R,
                    other => other,
                };
                Move::FaceTurn(f, t)
            }
            rot => rot,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Move::FaceTurn(face, t) => write!(f, "{}{}", face.letter(), t.suffix()),
            Move::Rotation(axis, t) => write!(f, "{}{}", axis.letter(), t.suffix()),
        }
    }
}

impl FromStr for Move {
    type Err = CubeDeckError;

    fn from_str(token: &str) -> CdResult<Move> {
        let mut chars = token.chars();
        let head = chars
            .next()
            .ok_or_else(|| CubeDeckError::InputFormat("Empty move token".to_string()))?;

        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "2" => Turn::Double,
            "'" => Turn::Counter,
            _ => {
                return Err(CubeDeckError::InputFormat(format!(
                    "Bad move token: '{}'",
                    token
                )))
            }
        };

        if let Some(face) = Face::from_letter(head) {
            return Ok(Move::FaceTurn(face, turn));
        }
        let axis = match head {
            'x' => Axis::X,
            'y' => Axis::Y,
            'z' => Axis::Z,
            _ => {
                return Err(CubeDeckError::InputFormat(format!(
                    "Bad move token: '{}'",
                    token
                )))
            }
        };
        Ok(Move::Rotation(axis, turn))
    }
}

/// An ordered move sequence. Printable as space-joined tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Algorithm(Vec<Move>);

impl Algorithm {
    pub fn new() -> Algorithm {
        Algorithm(Vec::new())
    }

    pub fn from_moves(moves: Vec<Move>) -> Algorithm {
        Algorithm(moves)
    }

    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, m: Move) {
        self.0.push(m);
    }

    /// Parse free text: typographic apostrophes become ASCII, whitespace
    /// runs collapse. Blank input parses to the empty algorithm.
    pub fn parse(text: &str) -> CdResult<Algorithm> {
        let cleaned: String = text
            .chars()
            .map(|c| match c {
                '\u{2019}' | '\u{2018}' | '`' => '\'',
                other => other,
            })
            .collect();

        let mut moves = Vec::new();
        for token in cleaned.split_whitespace() {
            moves.push(token.parse()?);
        }
        Ok(Algorithm(moves))
    }

    /// The mathematical inverse: reverse the order AND invert each move.
    pub fn reversed(&self) -> Algorithm {
        Algorithm(self.0.iter().rev().map(|m| m.inverted()).collect())
    }

    /// Token-wise solver-to-hand relabeling of the whole sequence.
    pub fn hand_remapped(&self) -> Algorithm {
        Algorithm(self.0.iter().map(|m| m.hand_remapped()).collect())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tokens: Vec<String> = self.0.iter().map(|m| m.to_string()).collect();
        write!(f, "{}", tokens.join(" "))
    }
}

impl FromStr for Algorithm {
    type Err = CubeDeckError;

    fn from_str(s: &str) -> CdResult<Algorithm> {
        Algorithm::parse(s)
    }
}

/// Reverse a textual move sequence: parse, then reverse-and-invert.
/// Blank input yields the empty algorithm, not an error.
pub fn reverse_algorithm(text: &str) -> CdResult<Algorithm> {
    Ok(Algorithm::parse(text)?.reversed())
}

const TURNS: [Turn; 3] = [Turn::Clockwise, Turn::Counter, Turn::Double];

/// Draw `n` moves independently and uniformly from the 18 face-turn
/// tokens. No adjacent-cancellation filtering: `R R'` can occur.
pub fn random_scramble(n: usize) -> Algorithm {
    let mut moves = Vec::with_capacity(n);
    for _ in 0..n {
        let face = Face::ALL[fastrand::usize(..Face::ALL.len())];
        let turn = TURNS[fastrand::usize(..TURNS.len())];
        moves.push(Move::FaceTurn(face, turn));
    }
    Algorithm(moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_is_involution() {
        for token in [
            "U", "U'", "U2", "D", "D'", "D2", "L", "L'", "L2", "R", "R'", "R2", "F", "F'", "F2",
            "B", "B'", "B2", "x", "x'", "x2", "y", "y'", "y2", "z", "z'", "z2",
        ] {
            let m: Move = token.parse().unwrap();
            assert_eq!(m.inverted().inverted(), m, "token {}", token);
        }
    }

    #[test]
    fn test_reverse_algorithm_sexy_prefix() {
        // Reverse order: R' U R, then invert each: R U' R'
        let rev = reverse_algorithm("R U R'").unwrap();
        assert_eq!(rev.to_string(), "R U' R'");
    }

    #[test]
    fn test_reverse_blank_is_empty() {
        let rev = reverse_algorithm("   ").unwrap();
        assert!(rev.is_empty());
        assert_eq!(rev.to_string(), "");
    }

    #[test]
    fn test_parse_normalizes_apostrophes_and_whitespace() {
        let alg = Algorithm::parse("R\u{2019}   U2\n F`").unwrap();
        assert_eq!(alg.to_string(), "R' U2 F'");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Algorithm::parse("R Q").is_err());
        assert!(Algorithm::parse("R3").is_err());
        assert!(Algorithm::parse("R2'").is_err());
    }

    #[test]
    fn test_hand_remap_cycle() {
        let alg = Algorithm::parse("R F' L2 B U D'").unwrap();
        assert_eq!(alg.hand_remapped().to_string(), "F L' B2 R U D'");
    }

    #[test]
    fn test_scramble_length_and_tokens() {
        let alg = random_scramble(20);
        assert_eq!(alg.len(), 20);
        for m in alg.moves() {
            assert!(matches!(m, Move::FaceTurn(_, _)));
        }
    }
}
