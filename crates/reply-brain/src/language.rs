//! Language detection for inbound guest messages.

use whatlang::Lang;

/// Language assumed when detection fails.
pub const DEFAULT_LANGUAGE: &str = "ro";

/// Detect the ISO 639-1 code of `text`.
///
/// Blank text and text the detector cannot classify yield [`DEFAULT_LANGUAGE`].
/// Languages outside the mapped set are reported as `en`.
pub fn detect_language(text: &str) -> &'static str {
    if text.trim().is_empty() {
        return DEFAULT_LANGUAGE;
    }

    match whatlang::detect(text) {
        Some(info) => iso_code(info.lang()),
        None => DEFAULT_LANGUAGE,
    }
}

fn iso_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Ron => "ro",
        Lang::Eng => "en",
        Lang::Deu => "de",
        Lang::Fra => "fr",
        Lang::Spa => "es",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Hun => "hu",
        Lang::Pol => "pl",
        _ => "en",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_defaults_to_romanian() {
        assert_eq!(detect_language(""), "ro");
        assert_eq!(detect_language("   \n"), "ro");
    }

    #[test]
    fn test_undetectable_defaults_to_romanian() {
        assert_eq!(detect_language("12345 !!!"), "ro");
    }

    #[test]
    fn test_common_languages() {
        assert_eq!(
            detect_language("Hello, what time can we check in tomorrow afternoon at the hotel?"),
            "en"
        );
        assert_eq!(
            detect_language("Guten Tag, wann können wir morgen Nachmittag im Hotel einchecken?"),
            "de"
        );
        assert_eq!(
            detect_language("Bonjour, à quelle heure pouvons-nous arriver demain à l'hôtel ?"),
            "fr"
        );
        assert_eq!(
            detect_language("Bună ziua, la ce oră putem face check-in mâine după-amiază la hotel?"),
            "ro"
        );
    }

    #[test]
    fn test_iso_mapping() {
        assert_eq!(iso_code(Lang::Spa), "es");
        assert_eq!(iso_code(Lang::Ita), "it");
        assert_eq!(iso_code(Lang::Hun), "hu");
        assert_eq!(iso_code(Lang::Jpn), "en");
    }
}
