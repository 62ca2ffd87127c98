use super::*;

fn literal(pattern: &str, case_sensitive: bool) -> FindSpec {
    FindSpec::literal(pattern, case_sensitive)
}

fn regex(pattern: &str, case_sensitive: bool) -> FindSpec {
    FindSpec::regex(pattern, case_sensitive)
}

/// 朴素的不重叠子串计数，用来对照 Literal + 大小写敏感路径
fn naive_count(text: &str, pattern: &str) -> usize {
    let mut count = 0;
    let mut rest = text;
    while let Some(pos) = rest.find(pattern) {
        count += 1;
        rest = &rest[pos + pattern.len()..];
    }
    count
}

#[test]
fn test_escape_pattern() {
    assert_eq!(escape_pattern("3.14"), r"3\.14");
    assert_eq!(escape_pattern("a+b"), r"a\+b");
    assert_eq!(
        escape_pattern(r".*+?^${}()|[]\"),
        r"\.\*\+\?\^\$\{\}\(\)\|\[\]\\"
    );
    assert_eq!(escape_pattern("plain-text #1"), "plain-text #1");
}

#[test]
fn test_literal_case_sensitive_split() {
    let spec = literal("a", true).with_replacement("X");
    let outcome = replace_all("aAaA", &spec).unwrap();
    assert_eq!(outcome.text, "XAXA");
    assert_eq!(outcome.count, 2);
}

#[test]
fn test_literal_case_insensitive_replace() {
    let spec = literal("a", false).with_replacement("X");
    let outcome = replace_all("aAaA", &spec).unwrap();
    assert_eq!(outcome.text, "XXXX");
    assert_eq!(outcome.count, 4);
}

#[test]
fn test_regex_replace() {
    let spec = regex("[ch]at", true).with_replacement("dog");
    let outcome = replace_all("cat hat bat", &spec).unwrap();
    assert_eq!(outcome.text, "dog dog bat");
    assert_eq!(outcome.count, 2);
}

#[test]
fn test_literal_dot_is_not_wildcard() {
    let spec = literal(".", true);
    assert_eq!(count_matches("3.14 is pi", &spec).unwrap(), 1);

    let outcome = replace_all("3.14 is pi", &spec.with_replacement("_")).unwrap();
    assert_eq!(outcome.text, "3_14 is pi");
    assert_eq!(outcome.count, 1);
}

#[test]
fn test_literal_metacharacters_match_verbatim() {
    let text = "f(a) + f(a) = [2*f(a)]";
    assert_eq!(count_matches(text, &literal("f(a)", true)).unwrap(), 3);
    assert_eq!(count_matches(text, &literal("[2*", false)).unwrap(), 1);
    assert_eq!(count_matches(r"C:\dir\file", &literal(r"\", true)).unwrap(), 2);
    assert_eq!(count_matches("$5 or $6", &literal("$", false)).unwrap(), 2);
}

#[test]
fn test_literal_case_sensitive_matches_naive_scan() {
    let cases = [
        ("hello world hello", "hello"),
        ("aaaa", "aa"),
        ("aaaaa", "aa"),
        ("abcabcab", "abcab"),
        ("Mississippi", "issi"),
        ("no match here", "xyz"),
        ("日本語日本語", "本語"),
        ("CaseCASEcase", "case"),
    ];
    for (text, pattern) in cases {
        let count = count_matches(text, &literal(pattern, true)).unwrap();
        assert_eq!(count, naive_count(text, pattern), "{text:?} / {pattern:?}");

        let outcome = replace_all(text, &literal(pattern, true).with_replacement("#")).unwrap();
        assert_eq!(outcome.count, count, "{text:?} / {pattern:?}");
    }
}

#[test]
fn test_case_insensitive_count_ignores_case() {
    let cases = [
        ("Hello HELLO hello", "hello", false),
        ("The cat sat on the Mat", "AT", false),
        ("abc ABC aBc", "[a-c]+", true),
        ("Foo.bar FOO.BAR", "foo.", false),
    ];
    for (text, pattern, use_regex) in cases {
        let spec = FindSpec::new(pattern, false, use_regex);
        let upper = FindSpec::new(pattern.to_uppercase(), false, use_regex);
        assert_eq!(
            count_matches(text, &spec).unwrap(),
            count_matches(&text.to_uppercase(), &upper).unwrap(),
            "{text:?} / {pattern:?}"
        );
    }
}

#[test]
fn test_replace_with_self_is_noop() {
    let text = "one two one three One";
    for case_sensitive in [true, false] {
        let spec = literal("one", case_sensitive);
        let expected = count_matches(text, &spec).unwrap();
        let outcome = replace_all(text, &spec.with_replacement("one")).unwrap();
        if case_sensitive {
            assert_eq!(outcome.text, text);
        } else {
            // 大小写不敏感时 "One" 也被替换成 "one"
            assert_eq!(outcome.text, "one two one three one");
        }
        assert_eq!(outcome.count, expected);
    }
}

#[test]
fn test_regex_replace_count_matches_find_count() {
    let cases = [
        ("cat hat bat", r"[ch]at"),
        ("a1b22c333", r"\d+"),
        ("baaac", "a*"),
        ("line1\nline2\n", "(?m)^line"),
        ("", r"\w+"),
    ];
    for (text, pattern) in cases {
        let spec = regex(pattern, true);
        let count = count_matches(text, &spec).unwrap();
        let outcome = replace_all(text, &spec.with_replacement("_")).unwrap();
        assert_eq!(outcome.count, count, "{text:?} / {pattern:?}");
    }
}

#[test]
fn test_regex_case_flag() {
    let text = "Cat CAT cat";
    assert_eq!(count_matches(text, &regex("cat", true)).unwrap(), 1);
    assert_eq!(count_matches(text, &regex("cat", false)).unwrap(), 3);
}

#[test]
fn test_regex_replacement_expands_groups() {
    let spec = regex(r"(\w+) (\w+)", true).with_replacement("$2 $1");
    let outcome = replace_all("John Smith", &spec).unwrap();
    assert_eq!(outcome.text, "Smith John");
    assert_eq!(outcome.count, 1);

    let spec = regex(r"(?P<n>\d+)", true).with_replacement("<${n}>");
    let outcome = replace_all("a1 b22", &spec).unwrap();
    assert_eq!(outcome.text, "a<1> b<22>");
    assert_eq!(outcome.count, 2);
}

#[test]
fn test_literal_replacement_is_not_expanded() {
    let spec = literal("A", false).with_replacement("$0");
    let outcome = replace_all("a b a", &spec).unwrap();
    assert_eq!(outcome.text, "$0 b $0");
    assert_eq!(outcome.count, 2);

    let spec = literal("a", true).with_replacement("$1");
    let outcome = replace_all("a-a", &spec).unwrap();
    assert_eq!(outcome.text, "$1-$1");
    assert_eq!(outcome.count, 2);
}

#[test]
fn test_empty_replacement_deletes_matches() {
    let spec = literal(", ", true).with_replacement("");
    let outcome = replace_all("a, b, c", &spec).unwrap();
    assert_eq!(outcome.text, "abc");
    assert_eq!(outcome.count, 2);
}

#[test]
fn test_split_join_multibyte() {
    let spec = literal("本", true).with_replacement("-");
    let outcome = replace_all("日本語日本", &spec).unwrap();
    assert_eq!(outcome.text, "日-語日-");
    assert_eq!(outcome.count, 2);
}

#[test]
fn test_no_match_returns_original() {
    let spec = literal("zzz", true).with_replacement("y");
    let outcome = replace_all("abc", &spec).unwrap();
    assert_eq!(outcome.text, "abc");
    assert_eq!(outcome.count, 0);
    assert_eq!(count_matches("abc", &literal("zzz", false)).unwrap(), 0);
}

#[test]
fn test_invalid_regex() {
    let err = count_matches("abc", &regex("[", false)).unwrap_err();
    assert!(matches!(err, SearchError::InvalidRegex(_)));

    let err = replace_all("abc", &regex("(unclosed", true).with_replacement("x")).unwrap_err();
    assert!(matches!(err, SearchError::InvalidRegex(_)));

    // 同样的字符在 Literal 模式下是合法的
    assert_eq!(count_matches("a[b", &literal("[", false)).unwrap(), 1);
}

#[test]
fn test_empty_pattern_rejected() {
    let err = count_matches("abc", &literal("", true)).unwrap_err();
    assert!(matches!(err, SearchError::EmptyPattern));

    let err = try_compile(&regex("", false)).unwrap_err();
    assert!(matches!(err, SearchError::EmptyPattern));
}

#[test]
fn test_matcher_reuse() {
    let matcher = try_compile(&literal("ab", false)).unwrap();
    assert_eq!(matcher.mode(), MatchMode::LiteralCaseInsensitive);
    assert_eq!(matcher.pattern(), "ab");
    assert_eq!(matcher.count("ab AB"), 2);
    assert_eq!(matcher.count("xyz"), 0);
    assert_eq!(matcher.replace_all("aB", "c").text, "c");
}

#[test]
fn test_size_limit_rejects_huge_pattern() {
    let engine = MatchEngine::new(EngineConfig {
        regex_size_limit: 100,
        ..EngineConfig::default()
    });
    let err = engine.count_matches("abc", &regex(r"\w{100}", true)).unwrap_err();
    assert!(matches!(err, SearchError::InvalidRegex(_)));
}
