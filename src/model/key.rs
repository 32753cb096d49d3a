//! Conversion of Spotify pitch class and mode codes into key names.

use std::convert::TryFrom;

pub const NO_KEY_AVAILABLE: &str = "No Key Available";

// Flats are preferred over sharps.
const PITCH_CLASSES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Converts a pitch class (`0..=11`) and an optional mode (`1` major, `0` minor)
/// into a key name such as `"E Major"`, `"D Minor"` or `"Gb"`.
///
/// Any pitch class outside `0..=11` yields [`NO_KEY_AVAILABLE`], whatever the mode.
/// A mode other than `0` or `1` leaves the bare letter name.
pub fn key_convert(key: i64, mode: Option<i64>) -> String {
    let letter = match usize::try_from(key).ok().and_then(|idx| PITCH_CLASSES.get(idx)) {
        Some(letter) => *letter,
        None => return NO_KEY_AVAILABLE.to_owned(),
    };

    match mode {
        Some(1) => format!("{} Major", letter),
        Some(0) => format!("{} Minor", letter),
        _ => letter.to_owned(),
    }
}
