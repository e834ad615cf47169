use super::*;

#[test]
fn test_every_language_has_every_key() {
    for lang in Language::ALL {
        let set = lang.translations();
        for key in TranslationKey::ALL {
            let val = set.get(key);
            assert!(
                !val.trim().is_empty(),
                "key {key:?} should not be empty for {}",
                lang.code()
            );
        }
    }
}

#[test]
fn test_non_english_sets_are_translated() {
    let en = Language::En.translations();
    for lang in Language::ALL.into_iter().filter(|l| *l != Language::En) {
        let set = lang.translations();
        assert_ne!(set.title, en.title, "{} title should be localized", lang.code());
        assert_ne!(
            set.chat_placeholder, en.chat_placeholder,
            "{} placeholder should be localized",
            lang.code()
        );
    }
}

#[test]
fn test_from_code_round_trips() {
    for lang in Language::ALL {
        assert_eq!(Language::from_code(lang.code()), Some(lang));
    }
    assert_eq!(Language::from_code(" HI "), Some(Language::Hi));
    assert_eq!(Language::from_code("fr"), None);
    assert_eq!(Language::from_code(""), None);
}

#[test]
fn test_parse_reports_known_codes() {
    assert_eq!("ta".parse::<Language>().unwrap(), Language::Ta);
    let err = "fr".parse::<Language>().unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    let msg = err.to_string();
    assert!(msg.contains("'fr'"), "{msg}");
    assert!(msg.contains("en, es, hi, ta, ml, te, kn"), "{msg}");
}

#[test]
fn test_unknown_code_falls_back_to_english() {
    assert_eq!(translations_for_code("fr"), Language::En.translations());
    assert_eq!(translations_for_code("es").title, "Panel de Agricultura Inteligente");
}

#[test]
fn test_locale_tags() {
    assert_eq!(Language::En.locale_tag(), "en-US");
    assert_eq!(Language::Es.locale_tag(), "es-ES");
    assert_eq!(Language::Hi.locale_tag(), "hi-IN");
    assert_eq!(Language::Ta.locale_tag(), "ta-IN");
    assert_eq!(Language::Ml.locale_tag(), "ml-IN");
    assert_eq!(Language::Te.locale_tag(), "te-IN");
    assert_eq!(Language::Kn.locale_tag(), "kn-IN");
}

#[test]
fn test_every_locale_is_distinct() {
    let mut tags: Vec<&str> = Language::ALL.iter().map(|l| l.locale_tag()).collect();
    tags.sort_unstable();
    tags.dedup();
    assert_eq!(tags.len(), Language::ALL.len());
}

#[test]
fn test_locale_for_unknown_code_is_an_error() {
    assert_eq!(locale_for_code("kn").unwrap(), "kn-IN");
    match locale_for_code("xx") {
        Err(Error::UnmappedLanguage(code)) => assert_eq!(code, "xx"),
        other => panic!("expected UnmappedLanguage, got {other:?}"),
    }
}

#[test]
fn test_next_and_prev_wrap() {
    assert_eq!(Language::En.next(), Language::Es);
    assert_eq!(Language::Kn.next(), Language::En);
    assert_eq!(Language::En.prev(), Language::Kn);
    for lang in Language::ALL {
        assert_eq!(lang.next().prev(), lang);
    }
}

#[test]
fn test_serde_uses_codes() {
    let json = serde_json::to_string(&Language::Ml).unwrap();
    assert_eq!(json, "\"ml\"");
    let lang: Language = serde_json::from_str("\"te\"").unwrap();
    assert_eq!(lang, Language::Te);
}
