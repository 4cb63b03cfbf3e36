use super::Node;

fn sample() -> Node {
    Node::List {
        marker: b'-',
        children: vec![
            Node::ListItem {
                children: vec![
                    Node::Link {
                        destination: "#foo".to_string(),
                        children: vec![Node::Text {
                            content: "Foo".to_string(),
                            raw: true,
                        }],
                    },
                    Node::List {
                        marker: b'-',
                        children: vec![Node::ListItem {
                            children: vec![Node::Text {
                                content: "Bar".to_string(),
                                raw: false,
                            }],
                        }],
                    },
                ],
            },
            Node::ListItem { children: vec![] },
        ],
    }
}

#[test]
fn test_children_of_text_are_empty() {
    let text = Node::Text {
        content: "x".to_string(),
        raw: true,
    };
    assert!(text.children().is_empty());
    assert_eq!(text.depth(), 0);
}

#[test]
fn test_kind_names() {
    let node = sample();
    assert_eq!(node.kind(), "list");
    assert_eq!(node.children()[0].kind(), "list_item");
    assert_eq!(node.children()[0].children()[0].kind(), "link");
    assert_eq!(node.children()[0].children()[0].children()[0].kind(), "text");
}

#[test]
fn test_depth_counts_nested_lists() {
    let node = sample();
    assert_eq!(node.depth(), 2);
    assert_eq!(node.children()[1].depth(), 0);
}

#[test]
fn test_dump_outline() {
    let expected = "\
List '-'
├── ListItem
│   ├── Link \"#foo\"
│   │   └── Text \"Foo\" (raw)
│   └── List '-'
│       └── ListItem
│           └── Text \"Bar\"
└── ListItem
";
    assert_eq!(sample().dump(), expected);
}

#[test]
fn test_dump_escapes_control_marker() {
    let node = Node::List {
        marker: 0x01,
        children: vec![],
    };
    assert_eq!(node.dump(), "List '\\u{1}'\n");
}

#[test]
fn test_json_form() {
    let json = serde_json::to_value(sample()).unwrap();

    assert_eq!(json["kind"], "list");
    assert_eq!(json["marker"], "-");
    assert_eq!(json["children"][0]["kind"], "list_item");

    let link = &json["children"][0]["children"][0];
    assert_eq!(link["kind"], "link");
    assert_eq!(link["destination"], "#foo");
    assert_eq!(link["children"][0]["content"], "Foo");
    assert_eq!(link["children"][0]["raw"], true);

    assert_eq!(json["children"][1]["children"], serde_json::json!([]));
}
