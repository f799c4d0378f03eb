use crate::error::{CdResult, CubeDeckError};
use crate::facelet::{CENTER_INDICES, FACELET_COUNT, FACE_SIZE};
use crate::model::FaceletCube;
use crate::notation::{Algorithm, Face};
use std::collections::HashMap;
use tracing::error;

/// Whole-cube rotation candidates tried in order by `canonicalize`.
/// Identity first, then single-axis turns, then the composed forms.
const ROTATION_CANDIDATES: [&str; 37] = [
    "", "x", "x2", "x'", "y", "y2", "y'", "z", "z2", "z'", //
    "x y", "x y2", "x y'", //
    "x' y", "x' y2", "x' y'", //
    "x2 y", "x2 y2", "x2 y'", //
    "x z", "x z2", "x z'", //
    "x' z", "x' z2", "x' z'", //
    "y z", "y z2", "y z'", //
    "y' z", "y' z2", "y' z'", //
    "x y z", "x y z2", "x y z'", //
    "x' y z", "x' y z2", "x' y z'",
];

/// True iff the six centers read exactly U,R,F,D,L,B.
pub fn has_canonical_centers(facelets: &str) -> bool {
    let bytes = facelets.as_bytes();
    if bytes.len() != FACELET_COUNT {
        return false;
    }
    CENTER_INDICES
        .iter()
        .zip(Face::ALL)
        .all(|(&idx, face)| bytes[idx] == face.letter() as u8)
}

/// Search the fixed rotation list for one that places canonical colors
/// on all six centers. The first match is applied destructively to
/// `cube` and returned; each candidate is probed on a clone first. No
/// match leaves `cube` untouched and reports a canonicalization error
/// (a physically re-stickered or mis-scanned center arrangement).
pub fn canonicalize(cube: &mut FaceletCube) -> CdResult<Algorithm> {
    for candidate in ROTATION_CANDIDATES {
        let alg = Algorithm::parse(candidate)?;
        let mut probe = cube.clone();
        probe.apply(&alg);
        if has_canonical_centers(&probe.to_facelets()) {
            cube.apply(&alg);
            return Ok(alg);
        }
    }
    error!("Could not canonicalize cube orientation");
    Err(CubeDeckError::Canonicalization(
        "No whole-cube rotation places canonical colors on all six centers".to_string(),
    ))
}

/// Recolor a facelet string so its centers read canonically: build a
/// substitution from the current center letters to U,R,F,D,L,B and map
/// every facelet through it. This recolors rather than reorients, so it
/// is only appropriate when the centers are internally consistent but
/// mislabeled. Fails if the six centers are not six distinct letters.
pub fn remap_by_centers(facelets: &str) -> CdResult<String> {
    let chars: Vec<char> = facelets.chars().collect();
    if chars.len() != FACELET_COUNT {
        return Err(CubeDeckError::InputFormat(format!(
            "Facelet string must have length {}, got {}",
            FACELET_COUNT,
            chars.len()
        )));
    }

    let mut map: HashMap<char, char> = HashMap::new();
    for (&idx, face) in CENTER_INDICES.iter().zip(Face::ALL) {
        if map.insert(chars[idx], face.letter()).is_some() {
            return Err(CubeDeckError::Validation(format!(
                "Duplicate center letter '{}'",
                chars[idx]
            )));
        }
    }

    chars
        .iter()
        .map(|c| {
            map.get(c).copied().ok_or_else(|| {
                CubeDeckError::Validation(format!("Facelet letter '{}' matches no center", c))
            })
        })
        .collect()
}

/// Reorder the six 9-sticker face groups of a scanned string into
/// U,R,F,D,L,B order, keyed by each group's center sticker.
pub fn reorder_faces_by_centers(facelets: &str) -> CdResult<String> {
    let chars: Vec<char> = facelets.chars().collect();
    if chars.len() != FACELET_COUNT {
        return Err(CubeDeckError::InputFormat(format!(
            "Facelet string must have length {}, got {}",
            FACELET_COUNT,
            chars.len()
        )));
    }

    let mut by_center: HashMap<char, &[char]> = HashMap::new();
    for group in chars.chunks(FACE_SIZE) {
        by_center.insert(group[4], group);
    }

    let mut out = String::with_capacity(FACELET_COUNT);
    for face in Face::ALL {
        let group = by_center.get(&face.letter()).ok_or_else(|| {
            CubeDeckError::Validation(format!("Missing face with center '{}'", face.letter()))
        })?;
        out.extend(group.iter());
    }
    Ok(out)
}
