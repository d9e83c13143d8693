//! Report text canonicalization.
//!
//! Incident reports arrive copy-pasted from PDFs and web pages, and a
//! common corruption is UTF-8 text that was once decoded as an 8-bit
//! charset ("â€™" where "’" was meant). `decode_report` reverses that
//! round-trip and strips the escape artifacts it leaves behind, so the
//! same canonical text reaches both the model and the corpus.
//!
//! Line-break handling is context-dependent and therefore separate:
//! [`flatten_for_export`] for STIX export (breaks become spaces) and
//! [`flatten_for_corpus`] for the tab-delimited corpus (breaks become
//! tabs so a record stays on one line).

use once_cell::sync::Lazy;
use regex::Regex;
use triage_core::{TriageError, TriageResult};

/// Literal `\uXXXX` escape sequences that survive as text when a report
/// is transcribed through a JSON/console round-trip.
static ESCAPE_ARTIFACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\u[0-9a-fA-F]{4}").expect("escape artifact pattern"));

/// Any line break flavor: CRLF first so it is consumed as one break.
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern"));

/// Canonicalize raw report text.
///
/// Reverses the wrong-charset round-trip where possible and removes
/// transcription artifacts. Idempotent: already-clean text comes back
/// unchanged.
pub fn decode_report(raw: &str) -> TriageResult<String> {
    // U+FFFD means an upstream lossy decode already destroyed bytes;
    // nothing can be recovered from it.
    if raw.contains('\u{FFFD}') {
        return Err(TriageError::Decoding(
            "report contains replacement characters from a lossy decode".to_string(),
        ));
    }

    let repaired = reverse_mojibake(raw);
    let stripped = ESCAPE_ARTIFACT.replace_all(&repaired, "");
    Ok(stripped
        .chars()
        .filter(|c| !('\u{80}'..='\u{9f}').contains(c))
        .collect())
}

/// Prepare canonical text for STIX export: every line break collapses to
/// a single space.
pub fn flatten_for_export(text: &str) -> String {
    LINE_BREAK.replace_all(text, " ").into_owned()
}

/// Prepare canonical text for the tab-delimited corpus: every line break
/// becomes a horizontal tab so the record remains one line.
pub fn flatten_for_corpus(text: &str) -> String {
    LINE_BREAK.replace_all(text, "\t").into_owned()
}

/// Undo the classic UTF-8-read-as-windows-1252 corruption: take the
/// windows-1252 byte image of the string and re-decode it as UTF-8. If
/// the image is not valid UTF-8 the text was never mojibake and passes
/// through unchanged.
fn reverse_mojibake(text: &str) -> String {
    let (bytes, _, had_unmappable) = encoding_rs::WINDOWS_1252.encode(text);
    if had_unmappable {
        return text.to_string();
    }
    match std::str::from_utf8(&bytes) {
        Ok(repaired) => repaired.to_string(),
        Err(_) => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_is_untouched() {
        let text = "Adversary used spearphishing to gain initial access.";
        assert_eq!(decode_report(text).unwrap(), text);
    }

    #[test]
    fn reverses_wrong_charset_round_trip() {
        // "’" read through windows-1252 becomes "â€™".
        assert_eq!(decode_report("attackerâ€™s toolkit").unwrap(), "attacker’s toolkit");
        // "é" becomes "Ã©".
        assert_eq!(decode_report("rÃ©sumÃ©").unwrap(), "résumé");
    }

    #[test]
    fn idempotent_on_already_normalized_text() {
        let once = decode_report("attackerâ€™s â€œstagedâ€\u{9d} payload").unwrap();
        let twice = decode_report(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn strips_literal_escape_artifacts() {
        assert_eq!(
            decode_report("lateral\\u2019 movement observed").unwrap(),
            "lateral movement observed"
        );
    }

    #[test]
    fn replacement_characters_are_rejected() {
        let err = decode_report("broken \u{FFFD} input").unwrap_err();
        assert!(matches!(err, TriageError::Decoding(_)));
    }

    #[test]
    fn export_flattening_joins_lines_with_spaces() {
        assert_eq!(flatten_for_export("line1\r\nline2\nline3"), "line1 line2 line3");
        assert!(!flatten_for_export("a\r\nb").contains('\r'));
    }

    #[test]
    fn corpus_flattening_keeps_one_tsv_line() {
        let flat = flatten_for_corpus("line1\r\nline2\rline3");
        assert_eq!(flat, "line1\tline2\tline3");
        assert_eq!(flat.lines().count(), 1);
    }
}
