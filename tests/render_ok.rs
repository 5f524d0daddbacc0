mod common;

use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use stache::{context, render_file, render_file_in_layout, Context, Template, Value};

use crate::common::{read_file, Product, Review};

fn page_context() -> Context {
    let mut context = Context::new();
    context.insert("product", &Product::new());
    context.insert("username", &"bob");
    context.insert("reviews", &vec![Review::new(), Review::new()]);
    let empty: Vec<Review> = Vec::new();
    context.insert("empty", &empty);
    context.insert("raw", &"<b>");
    context
}

#[test]
fn renders_page_with_partial() {
    let tpl = Template::from_file("tests/templates/page.mustache").unwrap();
    let rendered = tpl.render(&[page_context().into_value()]);
    assert_eq!(rendered, read_file("tests/expected/page.html"));
}

#[test]
fn render_file_matches_template() {
    let rendered = render_file("tests/templates/page.mustache", &[page_context().into_value()]);
    assert_eq!(rendered, read_file("tests/expected/page.html"));
}

#[test]
fn renders_file_in_layout() {
    let ctx = context! { "title" => "Home", "username" => "bob" };
    let rendered = render_file_in_layout(
        "tests/templates/short.mustache",
        "tests/templates/layout.mustache",
        &[ctx.into_value()],
    );
    assert_eq!(rendered, "<html><title>Home</title><body><p>bob</p></body></html>\n");
}

#[test]
fn partials_resolve_next_to_the_file_including_them() {
    let ctx = context! { "year" => 2024, "username" => "bob" };
    let rendered = render_file("tests/templates/nested.mustache", &[ctx.into_value()]);
    assert_eq!(rendered, "<main><footer>2024 (c) bob</footer></main>");
}

#[test]
fn delimiters_change_from_files() {
    let ctx = context! { "items" => vec!["a", "b"] };
    let tpl = Template::from_file("tests/templates/delimiters.mustache").unwrap();
    assert_eq!(tpl.render(&[ctx.into_value()]), "[a][b]{{ kept }}");
    assert_eq!(tpl.delimiters().open, "<%");
}

#[test]
fn later_contexts_fill_in_gaps() {
    let page = Context::from_value(serde_json::json!({ "username": "alice" })).unwrap();
    let rendered = render_file(
        "tests/templates/short.mustache",
        &[Value::Map(Default::default()), page.into_value()],
    );
    assert_eq!(rendered, "<p>alice</p>");
}

#[test]
fn renders_from_many_threads() {
    let tpl = Arc::new(Template::from_file("tests/templates/page.mustache").unwrap());
    let expected = read_file("tests/expected/page.html");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tpl = Arc::clone(&tpl);
            thread::spawn(move || tpl.render(&[page_context().into_value()]))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
