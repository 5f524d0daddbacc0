use pretty_assertions::assert_eq;
use serde_json::json;

use crate::context::Context;
use crate::template::Template;
use crate::value::Value;

use super::{render_template, Review};

fn render_json(content: &str, data: serde_json::Value) -> String {
    render_template(content, &Context::from_value(data).unwrap())
}

#[test]
fn iterates_over_arrays() {
    assert_eq!(render_json("{{#a}}{{.}}{{/a}}", json!({"a": [1, 2, 3]})), "123");
    assert_eq!(
        render_json("{{#a}}<{{name}}>{{/a}}", json!({"a": [{"name": "x"}, {"name": "y"}]})),
        "<x><y>"
    );
}

#[test]
fn iterates_over_nested_arrays() {
    let result = render_json(
        "{{#rows}}[{{#.}}{{.}}{{/.}}]{{/rows}}",
        json!({"rows": [[1, 2], [], [3]]}),
    );
    assert_eq!(result, "[12][][3]");
}

#[test]
fn inverted_sections() {
    let inputs = vec![
        (json!({"a": []}), "empty"),
        (json!({"a": [1]}), ""),
        (json!({"a": false}), "empty"),
        (json!({"a": true}), ""),
        (json!({"a": null}), "empty"),
        (json!({}), "empty"),
        (json!({"a": 0}), ""),
        (json!({"a": ""}), ""),
        (json!({"a": {}}), ""),
    ];

    for (data, expected) in inputs {
        println!("{:?} -> {:?}", data, expected);
        assert_eq!(render_json("{{^a}}empty{{/a}}", data), expected);
    }
}

#[test]
fn truthiness_of_sections() {
    let inputs = vec![
        (json!({"a": true}), "yes"),
        (json!({"a": false}), ""),
        (json!({"a": null}), ""),
        (json!({}), ""),
        (json!({"a": 0}), "yes"),
        (json!({"a": ""}), "yes"),
        (json!({"a": "text"}), "yes"),
        (json!({"a": {}}), "yes"),
        (json!({"a": []}), ""),
    ];

    for (data, expected) in inputs {
        println!("{:?} -> {:?}", data, expected);
        assert_eq!(render_json("{{#a}}yes{{/a}}", data), expected);
    }
}

#[test]
fn scalar_sections_dont_push_a_scope() {
    // `.` still refers to the enclosing scope
    assert_eq!(render_json("{{#a}}{{b}}{{/a}}", json!({"a": 1, "b": "B"})), "B");
    let tpl = Template::parse_str("{{#flag}}{{.}}{{/flag}}").unwrap();
    assert_eq!(tpl.render(&[Value::from("root"), Value::from(json!({"flag": true}))]), "root");
}

#[test]
fn map_sections_push_the_map() {
    let result =
        render_json("{{#user}}{{name}} {{age}}{{/user}}", json!({"user": {"name": "bob"}, "age": 3}));
    assert_eq!(result, "bob 3");
}

#[test]
fn inverted_sections_dont_push_a_scope() {
    assert_eq!(render_json("{{^a}}{{b}}{{/a}}", json!({"a": [], "b": "B"})), "B");
}

#[test]
fn nested_scopes_fall_back_outward() {
    let data = json!({
        "title": "T",
        "reviews": [
            {"title": "first", "tags": ["x", "y"]},
            {"tags": ["z"]},
        ],
    });
    let result = render_json("{{#reviews}}{{title}}:{{#tags}}{{.}}{{title}}{{/tags}};{{/reviews}}", data);
    assert_eq!(result, "first:xfirstyfirst;T:zT;");
}

#[test]
fn sections_of_serialized_structs() {
    let mut context = Context::new();
    context.insert("reviews", &vec![Review::new(), Review::new()]);

    let result = render_template(
        "{{#reviews}}{{title}}({{#paragraphs}}{{.}}{{/paragraphs}}){{/reviews}}",
        &context,
    );
    assert_eq!(result, "My review(ABC)My review(ABC)");
}

#[test]
fn standalone_section_tags_eat_one_newline() {
    let data = json!({"items": [1, 2]});
    assert_eq!(render_json("{{#items}}\n{{.}}\n{{/items}}\n", data.clone()), "1\n2\n\n");
    assert_eq!(render_json("{{#items}}\r\n{{.}},{{/items}}", data.clone()), "1,2,");
    assert_eq!(render_json("{{^none}}\n\nx{{/none}}", data), "\nx");
}

#[test]
fn same_name_nested_sections() {
    let data = json!({"a": {"a": [1, 2]}});
    assert_eq!(render_json("{{#a}}{{#a}}{{.}}{{/a}}{{/a}}", data), "12");
}
