//! Similarity-score extraction from the comparison narrative.
//!
//! The model is asked to state a 0–100 similarity percentage somewhere in
//! its freeform reply. This module scrapes that number back out. The
//! algorithm is deliberately simple and must stay stable — exported scores
//! and charts depend on it:
//!
//! 1. Scan lines in order; pick the first one containing `%` and,
//!    case-insensitively, "similitud" or "porcentaje".
//! 2. Keep only decimal digits and `.` from that line, parse as a float.
//! 3. Anything else (no qualifying line, unparseable residue) → 50.0.
//!
//! The whole line is filtered, so a qualifying line that carries extra
//! digits (a list ordinal, a second percentage) produces residue like
//! "1.83.5" that fails to parse and falls back to the default. A parsed
//! value is returned as-is, even outside [0, 100] — the chart layer is
//! responsible for keeping its geometry sane.

/// Score used when no percentage can be recovered.
pub const DEFAULT_SIMILARITY: f64 = 50.0;

/// Extract the similarity percentage from a comparison narrative.
///
/// Total and deterministic: never fails, never panics.
pub fn extract_similarity(comparison_text: &str) -> f64 {
    for line in comparison_text.lines() {
        let lower = line.to_lowercase();
        if line.contains('%') && (lower.contains("similitud") || lower.contains("porcentaje")) {
            let filtered: String = line
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            return filtered.parse::<f64>().unwrap_or(DEFAULT_SIMILARITY);
        }
    }
    DEFAULT_SIMILARITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_clean_percentage_line() {
        let text = "Análisis completo.\nPorcentaje de similitud: 83.5%\nBien hecho.";
        assert!((extract_similarity(text) - 83.5).abs() < f64::EPSILON);
    }

    #[test]
    fn extracts_integer_percentage() {
        let text = "Porcentaje de similitud: 64%\nAspectos bien abordados...";
        assert!((extract_similarity(text) - 64.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_qualifying_line_defaults() {
        assert!((extract_similarity("Sin números aquí.") - DEFAULT_SIMILARITY).abs() < f64::EPSILON);
        assert!((extract_similarity("") - DEFAULT_SIMILARITY).abs() < f64::EPSILON);
    }

    #[test]
    fn percent_without_keyword_is_skipped() {
        // '%' alone does not qualify a line; the keyword must be present too.
        let text = "El avance fue del 90%\nLa similitud es alta";
        assert!((extract_similarity(text) - DEFAULT_SIMILARITY).abs() < f64::EPSILON);
    }

    #[test]
    fn keyword_without_percent_is_skipped() {
        let text = "La similitud es de 80 puntos\nPorcentaje final: 75%";
        // First line lacks '%'; the second qualifies via "porcentaje".
        assert!((extract_similarity(text) - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let text = "SIMILITUD: 42%";
        assert!((extract_similarity(text) - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn embedded_letters_are_filtered_not_rejected() {
        // "12a3" filters to "123" — parsed as-is, no bounds clamping.
        let text = "similitud del 12a3%";
        assert!((extract_similarity(text) - 123.0).abs() < f64::EPSILON);
    }

    #[test]
    fn noisy_line_with_extra_digits_defaults() {
        // A numbered list item contributes its ordinal: "1. ... 83.5%" filters
        // to "1.83.5", which does not parse — silent fallback to the default.
        let text = "1. Porcentaje de similitud conceptual: 83.5%";
        assert!((extract_similarity(text) - DEFAULT_SIMILARITY).abs() < f64::EPSILON);
    }

    #[test]
    fn first_qualifying_line_wins() {
        let text = "Porcentaje de similitud: 30%\nPorcentaje de similitud: 90%";
        assert!((extract_similarity(text) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_failure_on_first_qualifying_line_does_not_continue() {
        // A failed parse defaults immediately instead of scanning for a
        // later, cleaner line.
        let text = "similitud: 1.2.3%\nPorcentaje de similitud: 88%";
        assert!((extract_similarity(text) - DEFAULT_SIMILARITY).abs() < f64::EPSILON);
    }

    #[test]
    fn line_with_only_percent_sign_defaults() {
        // Qualifying line but no digits at all: residue is empty.
        let text = "porcentaje de similitud: alto %";
        assert!((extract_similarity(text) - DEFAULT_SIMILARITY).abs() < f64::EPSILON);
    }
}
