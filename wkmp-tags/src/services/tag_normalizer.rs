//! Raw tag normalization
//!
//! Turns a reader's raw tag map into the canonical map stored per file:
//! - `duration` is derived from `lengthinmilliseconds` (seconds, 2 decimals)
//! - legacy/alternative spellings are appended onto their canonical tag
//!
//! Every other tag passes through untouched.

use crate::models::TagMap;

/// Raw tag carrying the track length in milliseconds
pub const LENGTH_MS_TAG: &str = "lengthinmilliseconds";

/// Canonical tag for the derived track length in seconds
pub const DURATION_TAG: &str = "duration";

/// Canonical tag name and the alternative names merged into it, in order
pub const ALTERNATIVE_TAGS: &[(&str, &[&str])] = &[
    ("title", &["titlesort"]),
    ("album", &["albumsort"]),
    ("artist", &["artistsort"]),
    ("tracknumber", &["trck", "_track"]),
];

/// Normalize a raw tag map into its canonical form
pub fn normalize(mut tags: TagMap) -> TagMap {
    if let Some(duration) = derive_duration(&tags) {
        tags.insert(DURATION_TAG, vec![duration]);
    }
    resolve_alternatives(&mut tags);
    tags
}

/// Track length in seconds formatted with two decimals
///
/// `None` when the length tag is absent, empty, unparsable or not positive.
/// The value is rounded at single precision, so `1335` ms gives `1.34`.
/// Surrounding whitespace makes the value unparsable.
pub fn derive_duration(tags: &TagMap) -> Option<String> {
    let raw = tags.first(LENGTH_MS_TAG)?;
    let millis: i64 = raw.parse().unwrap_or(0);
    let seconds = millis as f64 / 1000.0;
    (seconds > 0.0).then(|| format!("{:.2}", seconds as f32))
}

/// Append alternative tag values onto their canonical tags
///
/// Existing canonical values stay first. A canonical entry is only created
/// when at least one of its alternatives is present.
pub fn resolve_alternatives(tags: &mut TagMap) {
    for (canonical, alternatives) in ALTERNATIVE_TAGS {
        for alternative in alternatives.iter() {
            if let Some(values) = tags.get(alternative).map(<[String]>::to_vec) {
                tags.append(*canonical, values);
            }
        }
    }
}
