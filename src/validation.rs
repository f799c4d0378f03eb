use crate::error::{CdResult, CubeDeckError};
use crate::facelet::{has_valid_face_counts, FACELET_COUNT};

// Facelet indices of the 8 corner and 12 edge cubie positions, in the
// Kociemba reference order. Faces offset U=0, R=9, F=18, D=27, L=36,
// B=45.

// URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB
const CORNER_FACELETS: [[usize; 3]; 8] = [
    [8, 9, 20],
    [6, 18, 38],
    [0, 36, 47],
    [2, 45, 11],
    [29, 26, 15],
    [27, 44, 24],
    [33, 53, 42],
    [35, 17, 51],
];

const CORNER_COLORS: [[u8; 3]; 8] = [
    [b'U', b'R', b'F'],
    [b'U', b'F', b'L'],
    [b'U', b'L', b'B'],
    [b'U', b'B', b'R'],
    [b'D', b'F', b'R'],
    [b'D', b'L', b'F'],
    [b'D', b'B', b'L'],
    [b'D', b'R', b'B'],
];

// UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR
const EDGE_FACELETS: [[usize; 2]; 12] = [
    [5, 10],
    [7, 19],
    [3, 37],
    [1, 46],
    [32, 16],
    [28, 25],
    [30, 43],
    [34, 52],
    [23, 12],
    [21, 41],
    [50, 39],
    [48, 14],
];

const EDGE_COLORS: [[u8; 2]; 12] = [
    [b'U', b'R'],
    [b'U', b'F'],
    [b'U', b'L'],
    [b'U', b'B'],
    [b'D', b'R'],
    [b'D', b'F'],
    [b'D', b'L'],
    [b'D', b'B'],
    [b'F', b'R'],
    [b'F', b'L'],
    [b'B', b'L'],
    [b'B', b'R'],
];

/// Corner permutation + orientation, mirroring the FaceCube -> CubieCube
/// conversion: orientation is the index of the U/D-colored sticker.
fn extract_corners(facelets: &[u8]) -> CdResult<([usize; 8], [u8; 8])> {
    let mut cp = [usize::MAX; 8];
    let mut co = [0u8; 8];

    for i in 0..8 {
        let mut ori = 0;
        for o in 0..3 {
            let c = facelets[CORNER_FACELETS[i][o]];
            if c == b'U' || c == b'D' {
                ori = o;
                break;
            }
        }

        let c1 = facelets[CORNER_FACELETS[i][(ori + 1) % 3]];
        let c2 = facelets[CORNER_FACELETS[i][(ori + 2) % 3]];

        let cubie = (0..8).find(|&j| c1 == CORNER_COLORS[j][1] && c2 == CORNER_COLORS[j][2]);
        match cubie {
            Some(j) => {
                cp[i] = j;
                co[i] = ori as u8;
            }
            None => {
                return Err(CubeDeckError::Validation(format!(
                    "Invalid corner cubie colors at corner position {}",
                    i
                )))
            }
        }
    }

    let mut seen = [false; 8];
    for &j in &cp {
        seen[j] = true;
    }
    if seen.iter().any(|&s| !s) {
        return Err(CubeDeckError::Validation(
            "Corner permutation is invalid: duplicate or missing corner".to_string(),
        ));
    }
    Ok((cp, co))
}

fn extract_edges(facelets: &[u8]) -> CdResult<([usize; 12], [u8; 12])> {
    let mut ep = [usize::MAX; 12];
    let mut eo = [0u8; 12];

    for i in 0..12 {
        let c0 = facelets[EDGE_FACELETS[i][0]];
        let c1 = facelets[EDGE_FACELETS[i][1]];

        let mut found = false;
        for j in 0..12 {
            if c0 == EDGE_COLORS[j][0] && c1 == EDGE_COLORS[j][1] {
                ep[i] = j;
                eo[i] = 0;
                found = true;
                break;
            }
            if c0 == EDGE_COLORS[j][1] && c1 == EDGE_COLORS[j][0] {
                ep[i] = j;
                eo[i] = 1;
                found = true;
                break;
            }
        }
        if !found {
            return Err(CubeDeckError::Validation(format!(
                "Invalid edge cubie colors at edge position {}",
                i
            )));
        }
    }

    let mut seen = [false; 12];
    for &j in &ep {
        seen[j] = true;
    }
    if seen.iter().any(|&s| !s) {
        return Err(CubeDeckError::Validation(
            "Edge permutation is invalid: duplicate or missing edge".to_string(),
        ));
    }
    Ok((ep, eo))
}

/// 0 for an even permutation, 1 for odd, by cycle counting.
fn permutation_parity(p: &[usize]) -> usize {
    let mut visited = vec![false; p.len()];
    let mut parity = 0;
    for i in 0..p.len() {
        if !visited[i] {
            let mut cycle_len = 0;
            let mut j = i;
            while !visited[j] {
                visited[j] = true;
                j = p[j];
                cycle_len += 1;
            }
            parity += cycle_len - 1;
        }
    }
    parity % 2
}

/// Full solvability test for a 54-char facelet string: length, letter
/// counts, cubie identification, corner twist sum (mod 3), edge flip
/// sum (mod 2), and matching corner/edge permutation parity.
pub fn ensure_solvable(facelets: &str) -> CdResult<()> {
    if facelets.len() != FACELET_COUNT || !facelets.is_ascii() {
        return Err(CubeDeckError::Validation(format!(
            "Cube string must have length {}",
            FACELET_COUNT
        )));
    }
    if !has_valid_face_counts(facelets) {
        return Err(CubeDeckError::Validation(
            "Each face letter must appear exactly 9 times".to_string(),
        ));
    }

    let bytes = facelets.as_bytes();
    let (cp, co) = extract_corners(bytes)?;
    let (ep, eo) = extract_edges(bytes)?;

    if co.iter().map(|&o| o as usize).sum::<usize>() % 3 != 0 {
        return Err(CubeDeckError::Validation(
            "Corner orientation invalid: cube is unsolvable".to_string(),
        ));
    }
    if eo.iter().map(|&o| o as usize).sum::<usize>() % 2 != 0 {
        return Err(CubeDeckError::Validation(
            "Edge orientation invalid: cube is unsolvable".to_string(),
        ));
    }
    if permutation_parity(&cp) != permutation_parity(&ep) {
        return Err(CubeDeckError::Validation(
            "Corner and edge permutation parity do not match: cube is unsolvable".to_string(),
        ));
    }
    Ok(())
}
