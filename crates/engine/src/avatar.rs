//! Avatar images.
//!
//! Accounts always have an avatar: either an uploaded image read into a
//! data URL, or a generated SVG placeholder. Placeholders are seeded by the
//! username so a user's color looks stable, but mix in a time component so
//! a regeneration (e.g. "remove image") is distinguishable from the old one.

use std::io;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;

/// Background palette for generated placeholders.
const PALETTE: [&str; 10] = [
    "#EF9A9A", "#F48FB1", "#CE93D8", "#9FA8DA", "#81D4FA", "#80DEEA", "#A5D6A7", "#E6EE9C",
    "#FFCC80", "#BCAAA4",
];

/// 31-shift string hash over UTF-16 code units.
///
/// Matches the hash existing persisted avatars were generated with, so the
/// palette choice stays consistent for data written by older builds.
fn hash_code(s: &str) -> i32 {
    let mut h: i32 = 0;
    for unit in s.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit));
    }
    h
}

/// Generate a placeholder avatar as a percent-encoded SVG data URL.
///
/// The background color is picked from [`PALETTE`] by hashing the seed plus
/// the current time; the glyph is the seed's first character uppercased, or
/// `?` for an empty seed.
#[must_use]
pub fn placeholder(seed: &str) -> String {
    let salted = format!("{seed}{}", Utc::now().timestamp_millis());
    let index = hash_code(&salted).unsigned_abs() as usize % PALETTE.len();
    let background = PALETTE.get(index).copied().unwrap_or("#9FA8DA");

    let initial = seed
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('?');

    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='200' height='200'>\
         <rect width='100%' height='100%' fill='{background}' rx='20'/>\
         <text x='50%' y='50%' font-size='96' dy='.35em' text-anchor='middle' \
         fill='white' font-family='Arial,Helvetica,sans-serif'>{initial}</text></svg>"
    );
    format!("data:image/svg+xml;utf8,{}", urlencoding::encode(&svg))
}

/// Read an image file into a base64 data URL.
///
/// This is the one asynchronous operation in the engine; callers await it
/// before persisting the record it populates.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be read.
pub async fn read_file_to_data_url(path: &Path) -> io::Result<String> {
    let bytes = tokio::fs::read(path).await?;
    let mime = mime_for_path(path);
    Ok(format!("data:{mime};base64,{}", BASE64.encode(bytes)))
}

/// Guess the MIME type from the file extension.
fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
