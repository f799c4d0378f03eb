use crate::error::{CdResult, CubeDeckError};
use crate::notation::Face;
use serde::{Deserialize, Serialize};

pub const FACELET_COUNT: usize = 54;
pub const FACE_SIZE: usize = 9;

/// Positions of the six face centers in a 54-char facelet string.
/// Fixed points under any rotation that preserves face assignment.
pub const CENTER_INDICES: [usize; 6] = [4, 13, 22, 31, 40, 49];

/// Uppercase and strip every character outside {U,R,F,D,L,B}.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .flat_map(|c| c.to_uppercase())
        .filter(|c| matches!(c, 'U' | 'R' | 'F' | 'D' | 'L' | 'B'))
        .collect()
}

/// True iff each of the six letters appears exactly 9 times.
/// Length is the caller's separate responsibility.
pub fn has_valid_face_counts(s: &str) -> bool {
    let mut counts = [0usize; 6];
    for c in s.chars() {
        match Face::from_letter(c) {
            Some(face) => counts[face.index()] += 1,
            None => return false,
        }
    }
    counts.iter().all(|&n| n == FACE_SIZE)
}

/// Map a scanner sticker value to its canonical face letter. Accepts
/// face letters, single-letter colors (W/Y/G/B/R/O) and full color
/// names, case-insensitively. Green front, white up.
pub fn normalize_sticker(raw: &str) -> Option<char> {
    match raw.trim().to_uppercase().as_str() {
        "U" | "W" | "WHITE" => Some('U'),
        "D" | "Y" | "YELLOW" => Some('D'),
        "F" | "G" | "GREEN" => Some('F'),
        "B" | "BLUE" => Some('B'),
        "R" | "RED" => Some('R'),
        "L" | "O" | "ORANGE" => Some('L'),
        _ => None,
    }
}

/// The face-keyed form of a cube state, 9 stickers per face. This is the
/// shape the scan pipeline posts (`{"U": ["U", ...], ...}`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FaceMap {
    #[serde(rename = "U")]
    pub u: [char; 9],
    #[serde(rename = "R")]
    pub r: [char; 9],
    #[serde(rename = "F")]
    pub f: [char; 9],
    #[serde(rename = "D")]
    pub d: [char; 9],
    #[serde(rename = "L")]
    pub l: [char; 9],
    #[serde(rename = "B")]
    pub b: [char; 9],
}

impl FaceMap {
    /// Slice a 54-char string into six 9-char face groups in U,R,F,D,L,B
    /// order. Fails on any other length; letter counts are not re-checked
    /// here.
    pub fn decode(facelets: &str) -> CdResult<FaceMap> {
        let chars: Vec<char> = facelets.chars().collect();
        if chars.len() != FACELET_COUNT {
            return Err(CubeDeckError::InputFormat(format!(
                "Facelet string must have length {}, got {}",
                FACELET_COUNT,
                chars.len()
            )));
        }
        let group = |i: usize| -> [char; 9] {
            let mut out = ['U'; 9];
            out.copy_from_slice(&chars[i * FACE_SIZE..(i + 1) * FACE_SIZE]);
            out
        };
        Ok(FaceMap {
            u: group(0),
            r: group(1),
            f: group(2),
            d: group(3),
            l: group(4),
            b: group(5),
        })
    }

    /// Exact left inverse of `decode`: concatenate in U,R,F,D,L,B order.
    pub fn encode(&self) -> String {
        [self.u, self.r, self.f, self.d, self.l, self.b]
            .iter()
            .flat_map(|face| face.iter())
            .collect()
    }

    /// Resolve scanner color values to face letters and validate counts,
    /// producing a canonical 54-char facelet string.
    pub fn to_canonical_facelets(&self) -> CdResult<String> {
        let mut out = String::with_capacity(FACELET_COUNT);
        for face in [self.u, self.r, self.f, self.d, self.l, self.b] {
            for sticker in face {
                let c = normalize_sticker(&sticker.to_string()).ok_or_else(|| {
                    CubeDeckError::Validation(format!("Unknown sticker value: '{}'", sticker))
                })?;
                out.push(c);
            }
        }
        if !has_valid_face_counts(&out) {
            return Err(CubeDeckError::Validation(
                "Bad sticker counts: each face letter must appear exactly 9 times".to_string(),
            ));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    #[test]
    fn test_normalize_strips_and_uppercases() {
        assert_eq!(normalize(" ur f\nd1lb-"), "URFDLB");
    }

    #[test]
    fn test_face_counts() {
        assert!(has_valid_face_counts(SOLVED));
        // One U swapped to R: 8 U's, 10 R's.
        let skewed = SOLVED.replacen('U', "R", 1);
        assert!(!has_valid_face_counts(&skewed));
        assert!(!has_valid_face_counts("UUU"));
    }

    #[test]
    fn test_codec_round_trip() {
        let map = FaceMap::decode(SOLVED).unwrap();
        assert_eq!(map.encode(), SOLVED);
        assert_eq!(map.u, ['U'; 9]);
        assert_eq!(map.b, ['B'; 9]);
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert!(FaceMap::decode(&SOLVED[..53]).is_err());
        assert!(FaceMap::decode(&format!("{}U", SOLVED)).is_err());
    }

    #[test]
    fn test_color_names_resolve() {
        assert_eq!(normalize_sticker("white"), Some('U'));
        assert_eq!(normalize_sticker(" ORANGE "), Some('L'));
        assert_eq!(normalize_sticker("G"), Some('F'));
        assert_eq!(normalize_sticker("B"), Some('B'));
        assert_eq!(normalize_sticker("?"), None);
    }

    #[test]
    fn test_face_map_serde_shape() {
        let map = FaceMap::decode(SOLVED).unwrap();
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["U"][0], "U");
        assert_eq!(json["B"][8], "B");
        let back: FaceMap = serde_json::from_value(json).unwrap();
        assert_eq!(back, map);
    }
}
