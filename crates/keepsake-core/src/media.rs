//! Media store collaborator: loads the per-year photo collections from a
//! directory tree laid out as `<root>/<year>/<image files>`.
//!
//! Runs once at startup; the resulting groups are read-only afterwards.
//! A missing year directory is not an error, it simply yields an empty
//! group so the timeline still renders a node for that year.

use std::path::Path;

use crate::error::KeepsakeError;
use crate::timeline::{Photo, YearGroup, MAX_PHOTOS_PER_YEAR};

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

/// Derive a display caption from a filename: strip the extension, turn
/// `-`/`_` runs into single spaces, and capitalize each word's first letter.
///
/// `"summer-fun_2021.JPG"` becomes `"Summer Fun 2021"`.
pub fn caption_from_filename(name: &str) -> String {
    let stem = name.rsplit_once('.').map(|(s, _)| s).unwrap_or(name);
    let spaced: String = stem
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();
    spaced
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Load photo groups for a fixed list of years. Files are sorted by name for
/// a stable base order and capped at [`MAX_PHOTOS_PER_YEAR`] per group.
pub fn scan_years(root: &Path, years: &[i32]) -> Result<Vec<YearGroup>, KeepsakeError> {
    years
        .iter()
        .map(|&year| {
            let photos = scan_year(root, year)?;
            Ok(YearGroup { year, photos })
        })
        .collect()
}

fn scan_year(root: &Path, year: i32) -> Result<Vec<Photo>, KeepsakeError> {
    let dir = root.join(year.to_string());
    if !dir.is_dir() {
        tracing::debug!("no media directory for {}, rendering empty group", year);
        return Ok(Vec::new());
    }

    let mut names: Vec<String> = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if has_image_extension(&name) {
            names.push(name);
        }
    }
    names.sort();
    names.truncate(MAX_PHOTOS_PER_YEAR);

    tracing::info!("loaded {} photos for {}", names.len(), year);
    Ok(names
        .into_iter()
        .map(|name| Photo {
            caption: caption_from_filename(&name),
            source_path: dir.join(&name).to_string_lossy().into_owned(),
            width: None,
            height: None,
        })
        .collect())
}

fn has_image_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn caption_examples() {
        assert_eq!(caption_from_filename("summer-fun_2021.JPG"), "Summer Fun 2021");
        assert_eq!(caption_from_filename("beach.png"), "Beach");
        assert_eq!(caption_from_filename("new__years--eve.jpeg"), "New Years Eve");
        assert_eq!(caption_from_filename("noextension"), "Noextension");
    }

    #[test]
    fn caption_strips_only_the_last_extension() {
        assert_eq!(caption_from_filename("trip.part-two.webp"), "Trip.part Two");
    }

    #[test]
    fn missing_year_yields_empty_group() {
        let tmp = tempfile::tempdir().unwrap();
        let groups = scan_years(tmp.path(), &[2019, 2020]).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].year, 2019);
        assert!(groups[0].photos.is_empty());
        assert!(groups[1].photos.is_empty());
    }

    #[test]
    fn scans_only_image_files_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("2021");
        fs::create_dir(&dir).unwrap();
        for name in ["b-day.jpg", "a_trip.PNG", "notes.txt", "clip.mp4"] {
            fs::write(dir.join(name), b"x").unwrap();
        }

        let groups = scan_years(tmp.path(), &[2021]).unwrap();
        let captions: Vec<&str> = groups[0].photos.iter().map(|p| p.caption.as_str()).collect();
        assert_eq!(captions, vec!["A Trip", "B Day"]);
    }

    #[test]
    fn caps_photos_per_year() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("2022");
        fs::create_dir(&dir).unwrap();
        for i in 0..30 {
            fs::write(dir.join(format!("photo-{i:02}.jpg")), b"x").unwrap();
        }

        let groups = scan_years(tmp.path(), &[2022]).unwrap();
        assert_eq!(groups[0].photos.len(), MAX_PHOTOS_PER_YEAR);
    }
}
