use crate::{ArrayNode, Node, ObjectNode, Status, TreeBuilder, Validator};

const SCENE: &str = concat!(
    r#"{"scene":{"instance":"","instance":"","instance":"","instance":"","#,
    r#""light":{"ambient":["0.8","0.8","0.8"],"spotangle":"180"}}}"#,
);

const SCENE_PRETTY: &str = "{\n  \"scene\":\n  {\n    \"instance\":\"\",\n    \"instance\":\"\",\n    \"instance\":\"\",\n    \"instance\":\"\",\n    \"light\":\n    {\n      \"ambient\":\n      [\n        \"0.8\",\n        \"0.8\",\n        \"0.8\"\n      ],\n      \"spotangle\":\"180\"\n    }\n  }\n}";

fn built(text: &str) -> Node {
    let mut builder = TreeBuilder::new();
    builder.feed(text).expect("every character accepted");
    builder.finish().expect("complete document")
}

fn rendered(text: &str) -> String {
    built(text).render()
}

#[test]
fn renders_a_nested_scene() {
    assert_eq!(rendered(SCENE), SCENE_PRETTY);
    // The pretty form streams back to the same tree and the same text.
    assert_eq!(rendered(SCENE_PRETTY), SCENE_PRETTY);
}

#[test]
fn pretty_prints_empty_containers() {
    assert_eq!(rendered("{}"), "{\n}");
    assert_eq!(rendered(r#"{"a":{}}"#), "{\n  \"a\":\n  {\n  }\n}");
    assert_eq!(
        rendered(r#"{"details" : [{}, {}, {}] }"#),
        "{\n  \"details\":\n  [\n    {\n    },\n    {\n    },\n    {\n    }\n  ]\n}"
    );
}

#[test]
fn renders_nested_arrays() {
    assert_eq!(
        rendered(r#"{"details" : [["1", "2"], ["1", "2"]] }"#),
        "{\n  \"details\":\n  [\n    [\n      \"1\",\n      \"2\"\n    ],\n    [\n      \"1\",\n      \"2\"\n    ]\n  ]\n}"
    );
}

// The splice on `]` appends positionally when the parent is itself an array.
#[test]
fn arrays_nest_inside_arrays() {
    assert_eq!(
        rendered(r#"{"a":[["1"],["2"]]}"#),
        "{\n  \"a\":\n  [\n    [\n      \"1\"\n    ],\n    [\n      \"2\"\n    ]\n  ]\n}"
    );
}

#[test]
fn renders_empty_string_values() {
    assert_eq!(rendered(r#"{"a":""}"#), "{\n  \"a\":\"\"\n}");
    assert_eq!(
        rendered(r#"{"name":["", ""]}"#),
        "{\n  \"name\":\n  [\n    \"\",\n    \"\"\n  ]\n}"
    );
}

#[test]
fn an_array_value_can_end_the_object() {
    assert_eq!(
        rendered(r#"{"a":[{},"d"]}"#),
        "{\n  \"a\":\n  [\n    {\n    },\n    \"d\"\n  ]\n}"
    );
}

#[test]
fn duplicate_keys_are_preserved_in_order() {
    assert_eq!(
        rendered(r#"{"k":"1","k":"2"}"#),
        "{\n  \"k\":\"1\",\n  \"k\":\"2\"\n}"
    );
}

#[test]
fn a_dangling_key_never_reaches_the_tree() {
    let tree = built(r#"{"v":"has:colon","k"}"#);
    assert_eq!(tree.render(), "{\n  \"v\":\"has:colon\"\n}");
    assert_eq!(tree.as_object().map(ObjectNode::len), Some(1));
}

#[test]
fn whitespace_controls_vanish_inside_keys() {
    let tree = built("{\"na\nme\":\"v\"}");
    let object = tree.as_object().expect("root object");
    assert_eq!(object.get("name"), Some(&Node::from("v")));
    assert_eq!(object.get("na"), None);
}

#[test]
fn spaces_in_values_survive_while_structural_spaces_vanish() {
    assert_eq!(
        rendered(r#"{ "name" : "Some Name" }"#),
        "{\n  \"name\":\"Some Name\"\n}"
    );
}

#[test]
fn chunked_and_character_feeds_build_the_same_tree() {
    let mut chunked = TreeBuilder::new();
    for chunk in SCENE.as_bytes().chunks(7) {
        let chunk = std::str::from_utf8(chunk).unwrap();
        chunked.feed(chunk).expect("accepted");
    }
    assert_eq!(chunked.finish(), Some(built(SCENE)));
}

#[test]
fn builder_and_validator_report_the_same_status() {
    let mut validator = Validator::new();
    let mut builder = TreeBuilder::new();
    assert_eq!(builder.status(), Status::Empty);
    for c in SCENE.chars() {
        validator.input(c).expect("accepted");
        builder.input(c).expect("accepted");
        assert_eq!(validator.output(), builder.status());
    }
    assert_eq!(builder.status(), Status::Valid);
}

#[test]
fn streamed_trees_match_hand_built_trees() {
    let mut flat = ObjectNode::new();
    flat.add("name", "some name").unwrap();
    flat.add("age", "some age").unwrap();
    assert_eq!(
        built(r#"{"name":"some name","age":"some age"}"#),
        Node::from(flat)
    );

    let mut ages = ArrayNode::new();
    ages.add("6");
    ages.add("9");
    let mut with_array = ObjectNode::new();
    with_array.add("name", "some name").unwrap();
    with_array.add("age", ages).unwrap();
    assert_eq!(
        built(r#"{"name":"some name","age":["6", "9"]}"#),
        Node::from(with_array)
    );

    let mut today = ObjectNode::new();
    today.add("today", "9").unwrap();
    let mut tomorrow = ObjectNode::new();
    tomorrow.add("tomorrow", "10").unwrap();
    let mut days = ArrayNode::new();
    days.add(today);
    days.add(tomorrow);
    let mut nested = ObjectNode::new();
    nested.add("name", "some name").unwrap();
    nested.add("age", days).unwrap();
    assert_eq!(
        built(r#"{"name":"some name","age":[{"today":"9"},{"tomorrow":"10"}]}"#),
        Node::from(nested)
    );
}

#[test]
fn output_borrows_and_finish_owns() {
    let mut builder = TreeBuilder::new();
    builder.feed(r#"{"a":"b"}"#).expect("accepted");
    let pretty = builder.output().map(|node| node.render());
    assert_eq!(pretty.as_deref(), Some("{\n  \"a\":\"b\"\n}"));
    let owned = builder.finish().expect("complete document");
    assert_eq!(owned.render(), "{\n  \"a\":\"b\"\n}");
}
