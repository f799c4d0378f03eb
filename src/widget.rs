use crate::notation::Algorithm;

/// How the widget's base pose is specified: a setup algorithm replayed
/// from solved, or a serialized cube state. The real player exposes
/// these as two attributes; only one may be populated at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupPose {
    Alg(Algorithm),
    Serialized(String),
}

impl Default for SetupPose {
    fn default() -> Self {
        SetupPose::Alg(Algorithm::new())
    }
}

/// The widget's two mutually exclusive display modes. Keeping them in
/// one enum makes stale concurrent attribute state unrepresentable:
/// entering either mode drops whatever the other mode owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetMode {
    /// Frozen at the base pose, nothing playing.
    StaticSetup { setup: SetupPose },
    /// Base pose plus an animation timeline scrubbed to `animation`.
    Animating { setup: SetupPose, animation: Algorithm },
}

impl Default for WidgetMode {
    fn default() -> Self {
        WidgetMode::StaticSetup {
            setup: SetupPose::default(),
        }
    }
}

/// Seam to the external 3D widget. The session drives any implementor;
/// `TwistyState` below is the attribute-level rendition used in tests
/// and by the CLI.
pub trait CubeView {
    /// Freeze the widget at `setup`, clearing any animation timeline.
    fn show_static(&mut self, setup: &SetupPose);

    /// Keep `setup` as the base pose and scrub the animation timeline
    /// to `animation` (the played prefix while stepping).
    fn show_animation(&mut self, setup: &SetupPose, animation: &Algorithm);
}

/// In-crate widget stand-in: records the attribute fields the real
/// twisty player exposes, with mode transitions clearing the fields the
/// other mode owned.
#[derive(Debug, Clone, Default)]
pub struct TwistyState {
    mode: WidgetMode,
}

impl TwistyState {
    pub fn new() -> TwistyState {
        TwistyState::default()
    }

    pub fn mode(&self) -> &WidgetMode {
        &self.mode
    }

    fn setup(&self) -> &SetupPose {
        match &self.mode {
            WidgetMode::StaticSetup { setup } | WidgetMode::Animating { setup, .. } => setup,
        }
    }

    /// The "setup algorithm" attribute; empty when the pose is serialized.
    pub fn setup_alg_attr(&self) -> String {
        match self.setup() {
            SetupPose::Alg(alg) => alg.to_string(),
            SetupPose::Serialized(_) => String::new(),
        }
    }

    /// The "setup serialized-state" attribute; empty when the pose is an
    /// algorithm.
    pub fn setup_serialized_attr(&self) -> String {
        match self.setup() {
            SetupPose::Alg(_) => String::new(),
            SetupPose::Serialized(state) => state.clone(),
        }
    }

    /// The "animation algorithm" attribute; empty when static.
    pub fn animation_attr(&self) -> String {
        match &self.mode {
            WidgetMode::StaticSetup { .. } => String::new(),
            WidgetMode::Animating { animation, .. } => animation.to_string(),
        }
    }
}

impl CubeView for TwistyState {
    fn show_static(&mut self, setup: &SetupPose) {
        self.mode = WidgetMode::StaticSetup {
            setup: setup.clone(),
        };
    }

    fn show_animation(&mut self, setup: &SetupPose, animation: &Algorithm) {
        self.mode = WidgetMode::Animating {
            setup: setup.clone(),
            animation: animation.clone(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::Algorithm;

    fn alg(s: &str) -> Algorithm {
        Algorithm::parse(s).unwrap()
    }

    #[test]
    fn test_static_clears_animation() {
        let setup = SetupPose::Alg(alg("R U R'"));

        let mut view = TwistyState::new();
        view.show_animation(&setup, &alg("F2"));
        assert_eq!(view.animation_attr(), "F2");

        view.show_static(&setup);
        assert_eq!(view.setup_alg_attr(), "R U R'");
        assert_eq!(view.animation_attr(), "");
    }

    #[test]
    fn test_animation_keeps_setup() {
        let setup = SetupPose::Alg(alg("D2 B"));

        let mut view = TwistyState::new();
        view.show_static(&setup);
        view.show_animation(&setup, &alg("R U"));
        assert_eq!(view.setup_alg_attr(), "D2 B");
        assert_eq!(view.animation_attr(), "R U");
    }

    #[test]
    fn test_setup_pose_kinds_are_exclusive() {
        let mut view = TwistyState::new();
        view.show_static(&SetupPose::Serialized("UUU...".to_string()));
        assert_eq!(view.setup_alg_attr(), "");
        assert_eq!(view.setup_serialized_attr(), "UUU...");

        view.show_static(&SetupPose::Alg(alg("R")));
        assert_eq!(view.setup_alg_attr(), "R");
        assert_eq!(view.setup_serialized_attr(), "");
    }
}
