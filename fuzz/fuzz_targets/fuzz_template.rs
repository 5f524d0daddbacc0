#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate stache;

use stache::{Template, Value};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tpl) = Template::parse_str_in(s, "/nonexistent") {
            let _ = tpl.render(&[Value::Null]);
        }
    }
});
