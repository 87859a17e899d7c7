use bleiner_content::Language;

#[test]
fn german_is_the_default() {
    assert_eq!(Language::default(), Language::De);
}

#[test]
fn known_tags_parse() {
    assert_eq!(Language::parse("de"), Ok(Language::De));
    assert_eq!(Language::parse("en"), Ok(Language::En));
}

#[test]
fn unknown_tags_fail_closed() {
    assert!(Language::parse("fr").is_err());
    assert!(Language::parse("").is_err());
    assert!(Language::parse("de-AT").is_err());
}

#[test]
fn locale_matches_bundle_names() {
    assert_eq!(Language::De.locale(), "de");
    assert_eq!(Language::En.locale(), "en");
}
