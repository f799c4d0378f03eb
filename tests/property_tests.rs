use cubedeck::canonical::{canonicalize, has_canonical_centers};
use cubedeck::facelet::{has_valid_face_counts, FaceMap};
use cubedeck::model::FaceletCube;
use cubedeck::notation::{random_scramble, Algorithm, Move};
use cubedeck::validation::ensure_solvable;
use proptest::prelude::*;

const FACE_TURN_TOKENS: [&str; 18] = [
    "U", "U'", "U2", "D", "D'", "D2", "L", "L'", "L2", "R", "R'", "R2", "F", "F'", "F2", "B",
    "B'", "B2",
];

// Rotations the canonicalizer's candidate list can undo.
const ROTATIONS: [&str; 12] = [
    "", "x", "x'", "x2", "y", "y'", "y2", "z", "z'", "z2", "x y", "x' z",
];

fn arb_move() -> impl Strategy<Value = Move> {
    proptest::sample::select(FACE_TURN_TOKENS.to_vec()).prop_map(|t| t.parse().unwrap())
}

fn arb_algorithm() -> impl Strategy<Value = Algorithm> {
    proptest::collection::vec(arb_move(), 0..40).prop_map(Algorithm::from_moves)
}

fn solved_multiset() -> Vec<char> {
    FaceletCube::solved().to_facelets().chars().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_invert_is_involution(m in arb_move()) {
        prop_assert_eq!(m.inverted().inverted(), m);
    }

    #[test]
    fn prop_double_reversal_is_identity(alg in arb_algorithm()) {
        prop_assert_eq!(alg.reversed().reversed(), alg);
    }

    #[test]
    fn prop_reversal_is_semantic_inverse(alg in arb_algorithm()) {
        let mut cube = FaceletCube::solved();
        cube.apply(&alg);
        cube.apply(&alg.reversed());
        prop_assert!(cube.is_solved());
    }

    #[test]
    fn prop_moves_preserve_solvability(alg in arb_algorithm()) {
        let mut cube = FaceletCube::solved();
        cube.apply(&alg);
        prop_assert!(ensure_solvable(&cube.to_facelets()).is_ok());
    }

    #[test]
    fn prop_codec_round_trips_valid_strings(chars in Just(solved_multiset()).prop_shuffle()) {
        let s: String = chars.into_iter().collect();
        prop_assert!(has_valid_face_counts(&s));
        let map = FaceMap::decode(&s).unwrap();
        prop_assert_eq!(map.encode(), s);
    }

    #[test]
    fn prop_scramble_draws_from_face_turn_set(n in 0usize..60) {
        let alg = random_scramble(n);
        prop_assert_eq!(alg.len(), n);
        for m in alg.moves() {
            prop_assert!(FACE_TURN_TOKENS.contains(&m.to_string().as_str()));
        }
    }

    #[test]
    fn prop_canonicalize_undoes_rotation(
        alg in arb_algorithm(),
        rotation in proptest::sample::select(ROTATIONS.to_vec()),
    ) {
        let mut reference = FaceletCube::solved();
        reference.apply(&alg);

        let mut rotated = reference.clone();
        rotated.apply(&Algorithm::parse(rotation).unwrap());
        canonicalize(&mut rotated).unwrap();

        prop_assert!(has_canonical_centers(&rotated.to_facelets()));
        prop_assert_eq!(rotated.to_facelets(), reference.to_facelets());
    }
}
