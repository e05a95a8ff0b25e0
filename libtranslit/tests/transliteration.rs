use libtranslit::{
    reverse_transliterate, transliterate, transliterate_with, AnusvaraRules, ScriptMapping,
    ScriptRegistry, TranslitConfig, Transliterator,
};

#[test]
fn namah_in_iast() {
    assert_eq!(transliterate("नमः", "en"), "namaḥ");
}

#[test]
fn iast_conjuncts_and_vowels() {
    assert_eq!(transliterate("धर्मक्षेत्रे", "en"), "dharmakṣetre");
    assert_eq!(transliterate("कृष्ण", "en"), "kṛṣṇa");
    assert_eq!(transliterate("श्रीरामः", "en"), "śrīrāmaḥ");
    assert_eq!(transliterate("सोऽहम्", "en"), "so'ham");
    assert_eq!(transliterate("इति ॥", "en"), "iti ||");
}

#[test]
fn source_script_is_identity() {
    let text = "धर्मक्षेत्रे कुरुक्षेत्रे";
    assert_eq!(transliterate(text, "sa"), text);
    assert_eq!(transliterate("", "kn"), "");
}

#[test]
fn unknown_script_leaves_text_unchanged() {
    assert_eq!(transliterate("नमः", "xx"), "नमः");
    assert_eq!(reverse_transliterate("नमः", "xx"), "नमः");
}

#[test]
fn kannada_prefers_anusvara() {
    assert_eq!(transliterate("शङ्कर", "kn"), "ಶಂಕರ");
    assert_eq!(transliterate("अधिकरणम्", "kn"), "ಅಧಿಕರಣಂ");
    assert_eq!(transliterate("अधिकरणम्।", "kn"), "ಅಧಿಕರಣಂ।");
    // nasal kept before a semivowel
    assert_eq!(transliterate("सम्यक्", "kn"), "ಸಮ್ಯಕ್");
    // and before another nasal
    assert_eq!(transliterate("जन्म", "kn"), "ಜನ್ಮ");
}

#[test]
fn scripts_without_anusvara_rules_keep_nasals() {
    assert_eq!(transliterate("शङ्कर", "gu"), "શઙ્કર");
    assert_eq!(transliterate("अधिकरणम्", "gu"), "અધિકરણમ્");
}

#[test]
fn native_round_trip() {
    for code in ["kn", "te", "gu", "or", "pa"] {
        for word in ["नारायणः", "कृष्णः", "धर्मक्षेत्रे", "सम्यक्"] {
            let there = transliterate(word, code);
            assert_ne!(there, word, "{code} should convert {word}");
            assert_eq!(reverse_transliterate(&there, code), word, "{code}: {there}");
        }
    }
}

#[test]
fn iast_round_trip() {
    for word in ["नमः", "धर्मक्षेत्रे", "कृष्ण", "ज्ञानम्", "श्रीः"] {
        let roman = transliterate(word, "en");
        assert_eq!(reverse_transliterate(&roman, "en"), word, "{roman}");
    }
}

#[test]
fn output_is_stable_under_nfc() {
    use unicode_normalization::UnicodeNormalization;
    for code in ["en", "kn", "bn", "ml", "ta"] {
        let out = transliterate("कृष्णं वन्दे जगद्गुरुम्", code);
        assert_eq!(out.nfc().collect::<String>(), out, "{code}");
    }
}

#[test]
fn custom_registry_and_config() {
    let mut registry = ScriptRegistry::new();
    registry.register(
        ScriptMapping::from_tables("xx", "Test", &[("न", "n"), ("्", "_")], &[])
            .with_anusvara(AnusvaraRules::new("M", &["n_"]).collapse_final(true)),
    );
    assert_eq!(transliterate_with(&registry, "न्", "xx"), "M");
    assert_eq!(transliterate_with(&registry, "नमः", "kn"), "नमः");

    let dir = tempfile::tempdir().unwrap();
    let scripts = dir.path().join("scripts");
    std::fs::create_dir(&scripts).unwrap();
    std::fs::write(
        scripts.join("xx.toml"),
        "code = \"xx\"\nname = \"Test\"\nmapping = [[\"न\", \"n\"], [\"म\", \"m\"]]\n",
    )
    .unwrap();

    let config = TranslitConfig {
        scripts_dir: Some(scripts),
        ..TranslitConfig::default()
    };
    let t = Transliterator::from_config(&config).unwrap();
    assert_eq!(t.transliterate("नम", "xx"), "nm");
    assert_eq!(t.transliterate("नम", "kn"), "ನಮ");
    assert_eq!(t.registry().len(), 11);
}
