use std::path::Path;

use crate::{Language, ParserCache, ParserError, SyntaxError, parse, parse_source, preorder};

fn kinds_with_depth(source: &str, language: Language, max_depth: Option<usize>) -> Vec<(String, usize)> {
    let parsed = parse_source(source, language).unwrap();
    preorder(parsed.root_node(), max_depth)
        .map(|(node, depth)| (node.kind().to_string(), depth))
        .collect()
}

#[test]
fn test_language_lookup() {
    assert_eq!(Language::from_extension("py"), Some(Language::Python));
    assert_eq!(Language::from_extension("JS"), Some(Language::JavaScript));
    assert_eq!(Language::from_extension("h"), Some(Language::C));
    assert_eq!(Language::from_extension("hpp"), Some(Language::Cpp));
    assert_eq!(Language::from_extension("rs"), None);

    assert_eq!(
        Language::from_path(Path::new("src/Main.java")),
        Some(Language::Java)
    );
    assert_eq!(Language::from_path(Path::new("Makefile")), None);

    assert_eq!(Language::from_name("C++"), Some(Language::Cpp));
    assert_eq!(Language::from_name("cpp"), Some(Language::Cpp));
    assert_eq!(Language::from_name(" python "), Some(Language::Python));
    assert_eq!(Language::from_name("js"), Some(Language::JavaScript));
    assert_eq!(Language::from_name("cobol"), None);

    assert_eq!(Language::Cpp.to_string(), "C++");
    assert_eq!(
        "cobol".parse::<Language>(),
        Err(ParserError::UnsupportedLanguage("cobol".to_string()))
    );
}

#[test]
fn test_root_kinds() {
    let cases = [
        (Language::Python, "print('hi')\n", "module"),
        (Language::JavaScript, "console.log('hi');\n", "program"),
        (Language::Java, "class A { void f() {} }\n", "program"),
        (Language::C, "int main(void) { return 0; }\n", "translation_unit"),
        (Language::Cpp, "int main() { return 0; }\n", "translation_unit"),
    ];

    let mut cache = ParserCache::new();
    for (language, source, root_kind) in cases {
        let parsed = parse(&mut cache, source, language).unwrap();
        assert_eq!(parsed.language(), language);
        assert_eq!(parsed.source(), source);
        assert_eq!(parsed.root_node().kind(), root_kind, "{language}");
        assert!(!parsed.has_errors(), "{language}");
        assert!(parsed.syntax_errors().is_empty(), "{language}");
    }
}

#[test]
fn test_parser_cache() {
    let mut cache = ParserCache::new();
    assert!(!cache.is_loaded(Language::Python));

    parse(&mut cache, "x = 1\n", Language::Python).unwrap();
    assert!(cache.is_loaded(Language::Python));
    assert!(!cache.is_loaded(Language::Java));

    // 同一个 parser 可以重复使用
    let second = parse(&mut cache, "y = 2\n", Language::Python).unwrap();
    assert_eq!(second.root_node().kind(), "module");

    let statuses = cache.initialize_all();
    assert_eq!(statuses.len(), Language::ALL.len());
    assert!(statuses.iter().all(|status| status.result.is_ok()));
    assert!(Language::ALL.iter().all(|lang| cache.is_loaded(*lang)));
}

#[test]
fn test_preorder() {
    let expected = vec![
        ("module".to_string(), 0),
        ("expression_statement".to_string(), 1),
        ("assignment".to_string(), 2),
        ("identifier".to_string(), 3),
        ("=".to_string(), 3),
        ("integer".to_string(), 3),
    ];
    assert_eq!(kinds_with_depth("x = 1\n", Language::Python, None), expected);

    assert_eq!(
        kinds_with_depth("x = 1\n", Language::Python, Some(1)),
        expected[..2].to_vec()
    );
    assert_eq!(
        kinds_with_depth("x = 1\n", Language::Python, Some(0)),
        expected[..1].to_vec()
    );
}

#[test]
fn test_syntax_errors() {
    let source = "def broken(:\n    return\n";
    let parsed = parse_source(source, Language::Python).unwrap();
    assert!(parsed.has_errors());

    let errors = parsed.syntax_errors();
    assert!(!errors.is_empty());
    for error in &errors {
        let span = error.span();
        assert!(span.offset() + span.len() <= source.len());
    }
}

#[test]
fn test_missing_node_is_reported() {
    // 缺少分号时 tree-sitter 会插入 MISSING 节点或 ERROR 节点
    let parsed = parse_source("int main(void) { return 0 }\n", Language::C).unwrap();
    let errors = parsed.syntax_errors();
    assert!(!errors.is_empty());
    assert!(errors.iter().all(|error| match error {
        SyntaxError::Missing { kind, .. } => !kind.is_empty(),
        SyntaxError::Unexpected { .. } => true,
    }));
}

#[test]
fn test_empty_source_parses() {
    let parsed = parse_source("", Language::JavaScript).unwrap();
    assert_eq!(parsed.root_node().kind(), "program");
    assert_eq!(parsed.root_node().child_count(), 0);
}
