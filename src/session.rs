use crate::canonical::has_canonical_centers;
use crate::cursor::StepCursor;
use crate::error::{CdResult, CubeDeckError};
use crate::facelet::{self, FACELET_COUNT};
use crate::model::FaceletCube;
use crate::notation::{self, Algorithm, Move};
use crate::solver::SolverClient;
use crate::validation;
use crate::widget::{CubeView, SetupPose, TwistyState};
use tracing::{info, warn};

pub const DEFAULT_SCRAMBLE_LEN: usize = 20;

/// One live solving session: the cube model, the scramble that produced
/// it, the current solution with its step cursor, and the 3D view being
/// driven. All mutating operations either complete or leave the session
/// exactly as it was.
pub struct Session<V: CubeView> {
    cube: FaceletCube,
    scramble: Algorithm,
    solution: StepCursor,
    /// Facelet snapshot taken at solve-request time; the authoritative
    /// base position the solution applies to.
    base_facelets: Option<String>,
    view: V,
}

impl Default for Session<TwistyState> {
    fn default() -> Self {
        Session::new(TwistyState::new())
    }
}

impl<V: CubeView> Session<V> {
    pub fn new(view: V) -> Session<V> {
        let mut session = Session {
            cube: FaceletCube::solved(),
            scramble: Algorithm::new(),
            solution: StepCursor::default(),
            base_facelets: None,
            view,
        };
        session.view.show_static(&SetupPose::default());
        session
    }

    pub fn facelets(&self) -> String {
        self.cube.to_facelets()
    }

    pub fn scramble_alg(&self) -> &Algorithm {
        &self.scramble
    }

    pub fn solution(&self) -> &Algorithm {
        self.solution.moves()
    }

    pub fn base_facelets(&self) -> Option<&str> {
        self.base_facelets.as_deref()
    }

    pub fn step_label(&self) -> String {
        self.solution.label()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// The widget's base pose: the scramble algorithm when one is known,
    /// otherwise the serialized cube state.
    fn setup_pose(&self) -> SetupPose {
        if self.scramble.is_empty() && self.base_facelets.is_some() {
            SetupPose::Serialized(self.facelets())
        } else {
            SetupPose::Alg(self.scramble.clone())
        }
    }

    /// Back to a solved cube with everything cleared.
    pub fn reset(&mut self) {
        self.cube = FaceletCube::solved();
        self.scramble = Algorithm::new();
        self.solution = StepCursor::default();
        self.base_facelets = None;
        self.view.show_static(&SetupPose::default());
        info!("Session reset to solved cube");
    }

    /// Load a pasted move sequence as the new scramble. Blank or
    /// malformed input is an error and mutates nothing.
    pub fn load_moves(&mut self, text: &str) -> CdResult<()> {
        let alg = Algorithm::parse(text)?;
        if alg.is_empty() {
            return Err(CubeDeckError::InputFormat(
                "Please paste a move sequence".to_string(),
            ));
        }

        let mut cube = FaceletCube::solved();
        cube.apply(&alg);
        self.cube = cube;
        self.scramble = alg;
        self.solution = StepCursor::default();
        self.base_facelets = None;
        self.view
            .show_static(&SetupPose::Alg(self.scramble.clone()));
        info!("Moves applied: {}", self.scramble);
        Ok(())
    }

    /// Load a pasted cube string. It must normalize to exactly 54
    /// letters with valid face counts; otherwise nothing is mutated.
    pub fn load_cube_string(&mut self, text: &str) -> CdResult<()> {
        let normalized = facelet::normalize(text);
        if normalized.len() != FACELET_COUNT {
            return Err(CubeDeckError::InputFormat(format!(
                "Cube string must normalize to {} facelets, got {}",
                FACELET_COUNT,
                normalized.len()
            )));
        }
        if !facelet::has_valid_face_counts(&normalized) {
            return Err(CubeDeckError::InputFormat(
                "Each face letter must appear exactly 9 times".to_string(),
            ));
        }
        if !has_canonical_centers(&normalized) {
            warn!("Pasted cube string has non-canonical centers");
        }

        self.cube = FaceletCube::from_facelets(&normalized)?;
        self.scramble = Algorithm::new();
        self.solution = StepCursor::default();
        self.base_facelets = Some(normalized);
        self.view
            .show_static(&SetupPose::Serialized(self.facelets()));
        info!("Cube string loaded");
        Ok(())
    }

    /// Generate and apply a fresh random scramble, clearing any solution.
    pub fn scramble(&mut self, len: usize) -> &Algorithm {
        let alg = notation::random_scramble(len);
        let mut cube = FaceletCube::solved();
        cube.apply(&alg);
        self.cube = cube;
        self.scramble = alg;
        self.solution = StepCursor::default();
        self.base_facelets = None;
        self.view
            .show_static(&SetupPose::Alg(self.scramble.clone()));
        info!("Scramble: {}", self.scramble);
        &self.scramble
    }

    /// Snapshot the current position, validate it, and ask the external
    /// service for a solution. On success the cursor sits at step 0 with
    /// the scrambled pose shown and the solution loaded as the (empty,
    /// so far) animation. On any failure the session is untouched.
    pub async fn solve(&mut self, client: &SolverClient) -> CdResult<&Algorithm> {
        let snapshot = self.facelets();
        validation::ensure_solvable(&snapshot)?;

        let solution = client.solve(&snapshot).await?;
        info!("Solution: {}", solution);

        self.base_facelets = Some(snapshot);
        self.solution = StepCursor::new(solution);
        let setup = self.setup_pose();
        self.view.show_animation(&setup, &Algorithm::new());
        Ok(self.solution.moves())
    }

    /// The pasted text is the setup sequence that produced the current
    /// cube; its reversal is the solution to step through.
    pub fn load_reversed_solution(&mut self, text: &str) -> CdResult<()> {
        let setup = Algorithm::parse(text)?;
        if setup.is_empty() {
            return Err(CubeDeckError::InputFormat(
                "Please paste the setup sequence".to_string(),
            ));
        }

        let mut cube = FaceletCube::solved();
        cube.apply(&setup);
        self.cube = cube;
        self.base_facelets = Some(self.cube.to_facelets());
        self.scramble = setup;
        self.solution = StepCursor::new(self.scramble.reversed());
        let pose = SetupPose::Alg(self.scramble.clone());
        self.view.show_animation(&pose, &Algorithm::new());
        info!("Reversed solution ready: {}", self.solution.moves());
        Ok(())
    }

    /// Play the next solution move, if any.
    pub fn step_forward(&mut self) -> Option<Move> {
        let played = self.solution.advance()?;
        let setup = self.setup_pose();
        self.view.show_animation(&setup, &self.solution.played());
        Some(played)
    }

    /// Take back the most recently played move, if any.
    pub fn step_back(&mut self) -> Option<Move> {
        let undone = self.solution.retreat()?;
        let setup = self.setup_pose();
        self.view.show_animation(&setup, &self.solution.played());
        Some(undone)
    }

    /// Rewind to step 0 and freeze the widget at the base pose.
    pub fn reset_steps(&mut self) {
        self.solution.reset();
        let setup = self.setup_pose();
        self.view.show_static(&setup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::TwistyState;

    fn session() -> Session<TwistyState> {
        Session::default()
    }

    #[test]
    fn test_load_moves_sets_scramble_and_view() {
        let mut s = session();
        s.load_moves("R U R'").unwrap();
        assert_eq!(s.scramble_alg().to_string(), "R U R'");
        assert_eq!(s.view().setup_alg_attr(), "R U R'");
        assert_eq!(s.view().animation_attr(), "");
        assert!(!FaceletCube::from_facelets(&s.facelets()).unwrap().is_solved());
    }

    #[test]
    fn test_load_moves_blank_is_error_without_mutation() {
        let mut s = session();
        s.load_moves("R U").unwrap();
        let before = s.facelets();
        assert!(s.load_moves("   ").is_err());
        assert!(s.load_moves("R xyzzy").is_err());
        assert_eq!(s.facelets(), before);
        assert_eq!(s.scramble_alg().to_string(), "R U");
    }

    #[test]
    fn test_load_cube_string_validates() {
        let mut s = session();
        // Junk interleaved, lowercase: normalizes to the solved string.
        let text = format!(" {} ", s.facelets().to_lowercase());
        s.load_cube_string(&text).unwrap();
        assert_eq!(s.base_facelets().unwrap(), s.facelets());

        assert!(s.load_cube_string("UUU").is_err());
        let skewed = FaceletCube::solved().to_facelets().replacen('U', "R", 1);
        assert!(s.load_cube_string(&skewed).is_err());
    }

    #[test]
    fn test_scramble_clears_solution() {
        let mut s = session();
        s.load_reversed_solution("R U").unwrap();
        assert_eq!(s.solution().len(), 2);
        s.scramble(20);
        assert_eq!(s.scramble_alg().len(), 20);
        assert!(s.solution().is_empty());
        assert_eq!(s.step_label(), "");
    }

    #[test]
    fn test_reversed_solution_steps_to_solved_cube() {
        let mut s = session();
        s.load_reversed_solution("R U R' U R U2 R'").unwrap();
        assert_eq!(s.step_label(), "Step 0 / 7");

        let mut cube = FaceletCube::from_facelets(&s.facelets()).unwrap();
        while let Some(m) = s.step_forward() {
            cube.apply_move(m);
        }
        assert!(cube.is_solved());
        assert_eq!(s.step_label(), "Step 7 / 7");
    }

    #[test]
    fn test_stepping_drives_widget_animation() {
        let mut s = session();
        s.load_reversed_solution("R U").unwrap();
        s.step_forward();
        assert_eq!(s.view().animation_attr(), "U'");
        s.step_forward();
        assert_eq!(s.view().animation_attr(), "U' R'");
        assert!(s.step_forward().is_none());

        s.step_back();
        assert_eq!(s.view().animation_attr(), "U'");

        s.reset_steps();
        assert_eq!(s.view().animation_attr(), "");
        assert_eq!(s.view().setup_alg_attr(), "R U");
        assert_eq!(s.step_label(), "Step 0 / 2");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut s = session();
        s.load_reversed_solution("R U F2").unwrap();
        s.step_forward();
        s.reset();
        assert!(s.scramble_alg().is_empty());
        assert!(s.solution().is_empty());
        assert!(s.base_facelets().is_none());
        assert_eq!(s.step_label(), "");
        assert!(FaceletCube::from_facelets(&s.facelets()).unwrap().is_solved());
    }
}
