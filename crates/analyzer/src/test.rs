use parser::{Language, parse_source};

use crate::{AstSummary, Position, summarize};

fn summary_of(source: &str, language: Language) -> AstSummary {
    let parsed = parse_source(source, language).unwrap();
    summarize(parsed.root_node())
}

#[test]
fn test_summary_counts() {
    let summary = summary_of("a = 1\nb = 2\nprint(a)\n", Language::Python);

    assert_eq!(summary.total_nodes, 18);
    assert_eq!(summary.max_depth, 4);
    assert_eq!(summary.node_types.get("identifier"), Some(&4));
    assert_eq!(summary.node_types.get("expression_statement"), Some(&3));
    // 匿名节点不计入类型统计
    assert_eq!(summary.node_types.get("="), None);
    assert_eq!(summary.node_types.get("("), None);

    let kinds: Vec<_> = summary
        .top_level_nodes
        .iter()
        .map(|node| node.kind.as_str())
        .collect();
    assert_eq!(kinds, ["expression_statement"; 3]);

    let third = &summary.top_level_nodes[2];
    assert_eq!(third.start, Position { line: 3, column: 0 });
    assert_eq!(third.end, Position { line: 3, column: 8 });
}

#[test]
fn test_type_distribution() {
    let summary = summary_of("a = 1\nb = 2\nprint(a)\n", Language::Python);

    assert_eq!(
        summary.type_distribution(10),
        vec![
            ("identifier", 4),
            ("expression_statement", 3),
            ("assignment", 2),
            ("integer", 2),
            ("argument_list", 1),
            ("call", 1),
            ("module", 1),
        ]
    );
    assert_eq!(
        summary.type_distribution(2),
        vec![("identifier", 4), ("expression_statement", 3)]
    );
}

#[test]
fn test_prompt_text() {
    let summary = summary_of("a = 1\nb = 2\nprint(a)\n", Language::Python);
    assert_eq!(
        summary.prompt_text(),
        "Total Nodes: 18\nTree Depth: 4\n\
         Top-level Nodes: expression_statement, expression_statement, expression_statement"
    );

    let source: String = (0..15).map(|i| format!("x{i} = {i}\n")).collect();
    let summary = summary_of(&source, Language::Python);
    assert_eq!(summary.top_level_nodes.len(), 15);
    let listed = summary.prompt_text();
    let last_line = listed.lines().last().unwrap();
    assert_eq!(last_line.matches("expression_statement").count(), 10);
}

#[test]
fn test_report() {
    let summary = summary_of("x = 1\n", Language::Python);
    let expected = concat!(
        "Total Nodes: 6\n",
        "Tree Depth: 3\n",
        "Top-level Nodes: 1\n",
        "\n",
        "Top-Level AST Nodes\n",
        "Node Type             Start Position  End Position\n",
        "expression_statement  1:0             1:5\n",
        "\n",
        "Node Type Distribution\n",
        "assignment            1  ####################\n",
        "expression_statement  1  ####################\n",
        "identifier            1  ####################\n",
        "integer               1  ####################\n",
        "module                1  ####################\n",
    );
    assert_eq!(summary.to_string(), expected);
}

#[test]
fn test_report_without_top_level_nodes() {
    let summary = summary_of("", Language::Python);
    assert_eq!(summary.total_nodes, 1);
    assert_eq!(summary.max_depth, 0);
    assert!(summary.top_level_nodes.is_empty());

    insta::assert_snapshot!(summary.to_string(), @r"
    Total Nodes: 1
    Tree Depth: 0
    Top-level Nodes: 0

    Top-Level AST Nodes
    No top-level nodes found.

    Node Type Distribution
    module  1  ####################
    ");
}

#[test]
fn test_summary_json() {
    let summary = summary_of("x = 1\n", Language::Python);
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["total_nodes"], 6);
    assert_eq!(json["max_depth"], 3);
    assert_eq!(json["node_types"]["assignment"], 1);
    assert_eq!(json["top_level_nodes"][0]["kind"], "expression_statement");
    assert_eq!(json["top_level_nodes"][0]["start"]["line"], 1);
    assert_eq!(json["top_level_nodes"][0]["end"]["column"], 5);
}
