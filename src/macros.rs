/// Builds a `Context` out of `key => value` pairs, the values being anything
/// that implements `Serialize`.
///
/// ```rust
/// let context = stache::context! {
///     "name" => "Bob",
///     "numbers" => vec![1, 2, 3],
/// };
/// assert!(context.contains_key("numbers"));
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::Context::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut context = $crate::Context::new();
        $(
            context.insert($key, &$value);
        )+
        context
    }};
}
