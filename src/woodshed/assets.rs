//! Resolves the PDF/WAV assets to open for a practice session.
//!
//! Recordings are instrument-agnostic while score PDFs are per
//! instrument, so the lookups prefer the complete WAV and the instrument
//! PDF, each with a fallback to the other variant.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::model::{PartRecord, SetRecord};

/// `(pdf, wav)` for a tune practiced on `instrument`.
pub fn tune_assets(
    set_path: &Path,
    tune_name: &str,
    instrument: &str,
) -> (Option<PathBuf>, Option<PathBuf>) {
    let complete_wav = set_path.join(format!("{}.wav", tune_name));
    let wav_path = if complete_wav.exists() {
        Some(complete_wav)
    } else {
        let instrument_wav = set_path.join(format!("{}_{}.wav", tune_name, instrument));
        if instrument_wav.exists() {
            warn!("no complete WAV for {}, using instrument WAV", tune_name);
            Some(instrument_wav)
        } else {
            None
        }
    };

    let instrument_pdf = set_path.join(format!("{}_{}.pdf", tune_name, instrument));
    let pdf_path = if instrument_pdf.exists() {
        Some(instrument_pdf)
    } else {
        let complete_pdf = set_path.join(format!("{}.pdf", tune_name));
        if complete_pdf.exists() {
            Some(complete_pdf)
        } else {
            None
        }
    };

    (pdf_path, wav_path)
}

/// `(pdf, wav)` for a set: the first tune's assets. The user practices a
/// set by starting at its first tune.
pub fn set_assets(set: &SetRecord, instrument: &str) -> (Option<PathBuf>, Option<PathBuf>) {
    match set.tunes.first() {
        Some(tune) => tune_assets(&set.path, &tune.name, instrument),
        None => (None, None),
    }
}

/// `(pdf, wav)` for a discovered part. Both halves are guaranteed by
/// pairing.
pub fn part_assets(part: &PartRecord) -> (PathBuf, PathBuf) {
    (part.pdf_path.clone(), part.wav_path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn prefers_complete_wav_and_instrument_pdf() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Tune.wav"), b"").unwrap();
        fs::write(dir.path().join("Tune_bass.wav"), b"").unwrap();
        fs::write(dir.path().join("Tune_bass.pdf"), b"").unwrap();
        fs::write(dir.path().join("Tune.pdf"), b"").unwrap();

        let (pdf, wav) = tune_assets(dir.path(), "Tune", "bass");
        assert!(pdf.unwrap().ends_with("Tune_bass.pdf"));
        assert!(wav.unwrap().ends_with("Tune.wav"));
    }

    #[test]
    fn falls_back_to_instrument_wav_and_complete_pdf() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Tune_bass.wav"), b"").unwrap();
        fs::write(dir.path().join("Tune.pdf"), b"").unwrap();

        let (pdf, wav) = tune_assets(dir.path(), "Tune", "bass");
        assert!(pdf.unwrap().ends_with("Tune.pdf"));
        assert!(wav.unwrap().ends_with("Tune_bass.wav"));
    }

    #[test]
    fn missing_assets_are_none() {
        let dir = TempDir::new().unwrap();
        let (pdf, wav) = tune_assets(dir.path(), "Tune", "bass");
        assert!(pdf.is_none());
        assert!(wav.is_none());
    }
}
