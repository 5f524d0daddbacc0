mod sections;

use serde_derive::Serialize;

use crate::context::Context;
use crate::renderer::IgnoreDiagnostics;
use crate::template::Template;

pub fn render_template(content: &str, context: &Context) -> String {
    let tpl = Template::parse_str(content).unwrap();
    tpl.render_with(&[context.clone().into_value()], &IgnoreDiagnostics)
}

#[allow(dead_code)]
#[derive(Debug, Serialize)]
pub struct NestedObject {
    pub label: String,
    pub parent: Option<Box<NestedObject>>,
    pub numbers: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct Review {
    title: String,
    paragraphs: Vec<String>,
}
impl Review {
    #[allow(dead_code)]
    pub fn new() -> Review {
        Review {
            title: "My review".to_owned(),
            paragraphs: vec!["A".to_owned(), "B".to_owned(), "C".to_owned()],
        }
    }
}
