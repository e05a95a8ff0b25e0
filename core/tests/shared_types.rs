use libsanskrit_core::{
    chars, utils, Config, IdentityConverter, MatchSpan, MatchType, RulePosition, SandhiRules,
    ScriptConverter, SearchResults, Variant, VariantGenerator,
};

fn standard_rules() -> SandhiRules {
    let rules: Vec<String> = ["*म्=ं", "ः=ो", "ः=र्", "ः>श्", "त्=द्"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    SandhiRules::from_rules(&rules).with_homorganic_nasals(true)
}

#[test]
fn generator_trait_object_expands_phrases() {
    let generator: Box<dyn VariantGenerator> = Box::new(standard_rules());
    let out = generator.variations("रामः वनम्");
    let texts: Vec<&str> = out.iter().map(|v| v.text.as_str()).collect();
    assert!(texts.contains(&"रामो वनम्"));
    assert!(texts.contains(&"रामः वनं"));
    assert!(texts.contains(&"रामो वनं"));
    assert!(!texts.contains(&"रामः वनम्"));
    assert!(out.iter().any(|v| v.rule == "ः->ो,म्->ं"));
}

#[test]
fn closures_are_generators() {
    let suffix = |term: &str| vec![Variant::new(format!("{term}स्य"), "genitive")];
    assert_eq!(suffix.variations("देव"), vec![Variant::new("देवस्य", "genitive")]);
}

#[test]
fn rules_can_be_added_by_hand() {
    let mut rules = SandhiRules::new();
    assert!(rules.is_empty());
    rules.add_rule("ः", "ो", RulePosition::Final);
    rules.add_rule_unidirectional("न्", "ं", RulePosition::Anywhere);
    assert_eq!(rules.len(), 3);
    assert!(rules.is_equivalent("सन्तः", "संतः"));
    assert!(!rules.homorganic_nasals());
}

#[test]
fn spans_from_decomposed_text() {
    // क़ (U+0958) is stored as क + nukta once normalized
    let text = utils::nfc("\u{0958}मो नमः");
    assert_eq!(utils::char_len(&text), 8);
    let chars: Vec<char> = text.chars().collect();
    let span = MatchSpan::new(&chars, 5, 3, MatchType::Sandhi, 2);
    assert_eq!(span.matched_text, "नमः");
    assert_eq!(span.context.before, "ो ");
    assert_eq!(&text[span.byte_range(&text).unwrap()], "नमः");

    let mut results = SearchResults::for_term("नमः");
    assert!(results.push_unique_position(span.clone()));
    assert!(!results.push_unique_position(MatchSpan { length: 2, ..span }));
    results.finalize(0);
    assert_eq!(results.count, 1);
}

#[test]
fn marks_and_boundaries() {
    assert!(chars::ends_with_combining_mark("कृष्णः"));
    assert!(!chars::ends_with_combining_mark("कृष्ण"));
    assert!(chars::is_word_boundary('।'));
    assert!(!chars::is_word_boundary('-'));
    assert_eq!(chars::vowel_sign('ऋ'), Some('ृ'));
    assert_eq!(chars::independent_vowel('ौ'), Some('औ'));
}

#[test]
fn identity_converter_and_config() {
    assert_eq!(IdentityConverter.to_script("राम", "kn"), "राम");
    assert_eq!(IdentityConverter.to_devanagari("ರಾಮ", None), "ರಾಮ");

    let cfg = Config::from_toml_str("case_sensitive = true\nhighlight_class = \"hit\"").unwrap();
    assert!(cfg.case_sensitive);
    assert!(cfg.is_source_script("sa"));
    assert_eq!(cfg.highlight_class, "hit");
    assert_eq!(cfg.max_cache_size, 1000);
}
