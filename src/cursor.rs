use crate::notation::{Algorithm, Move};

/// Position within a solution's move list, with forward/backward
/// navigation. The played prefix is always derived from the position,
/// so `played() == moves[0..step]` holds by construction.
#[derive(Debug, Clone, Default)]
pub struct StepCursor {
    moves: Algorithm,
    step: usize,
}

impl StepCursor {
    pub fn new(moves: Algorithm) -> StepCursor {
        StepCursor { moves, step: 0 }
    }

    pub fn moves(&self) -> &Algorithm {
        &self.moves
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn at_end(&self) -> bool {
        self.step == self.moves.len()
    }

    /// Step forward; no-op at the end. Returns the move just played.
    pub fn advance(&mut self) -> Option<Move> {
        let next = self.moves.moves().get(self.step).copied()?;
        self.step += 1;
        Some(next)
    }

    /// Step backward; no-op at the start. Returns the move undone.
    pub fn retreat(&mut self) -> Option<Move> {
        if self.step == 0 {
            return None;
        }
        self.step -= 1;
        Some(self.moves.moves()[self.step])
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }

    /// Exactly the first `step` moves of the solution.
    pub fn played(&self) -> Algorithm {
        Algorithm::from_moves(self.moves.moves()[..self.step].to_vec())
    }

    /// `"Step {step} / {total}"`, or empty when there is no solution.
    pub fn label(&self) -> String {
        if self.moves.is_empty() {
            String::new()
        } else {
            format!("Step {} / {}", self.step, self.moves.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::Algorithm;

    fn cursor(alg: &str) -> StepCursor {
        StepCursor::new(Algorithm::parse(alg).unwrap())
    }

    #[test]
    fn test_walk_forward_and_back() {
        let mut c = cursor("R U R'");
        assert_eq!(c.step(), 0);
        assert_eq!(c.played().to_string(), "");

        for _ in 0..3 {
            assert!(c.advance().is_some());
        }
        assert_eq!(c.step(), 3);
        assert_eq!(c.played().to_string(), "R U R'");

        assert!(c.retreat().is_some());
        assert_eq!(c.step(), 2);
        assert_eq!(c.played().to_string(), "R U");
    }

    #[test]
    fn test_advance_at_end_is_noop() {
        let mut c = cursor("R U R'");
        for _ in 0..3 {
            c.advance();
        }
        assert!(c.advance().is_none());
        assert_eq!(c.step(), 3);
    }

    #[test]
    fn test_retreat_at_start_is_noop() {
        let mut c = cursor("R U R'");
        assert!(c.retreat().is_none());
        assert_eq!(c.step(), 0);
    }

    #[test]
    fn test_reset() {
        let mut c = cursor("R U R'");
        c.advance();
        c.advance();
        c.reset();
        assert_eq!(c.step(), 0);
        assert_eq!(c.played().to_string(), "");
    }

    #[test]
    fn test_label() {
        let mut c = cursor("R U R'");
        assert_eq!(c.label(), "Step 0 / 3");
        c.advance();
        assert_eq!(c.label(), "Step 1 / 3");
        assert_eq!(cursor("").label(), "");
    }
}
