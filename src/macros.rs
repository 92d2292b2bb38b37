/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Lists use `[...]`, documents `{ "key": value }`. Anything else is
/// converted with `Value::from`.
///
/// # Panics
///
/// Panics if a document key is not a valid MSF key.
///
/// # Examples
///
/// ```rust
/// use serde_msf::{msf, Value};
///
/// let value = msf!({ "port": 8080, "hosts": ["a", "b"], "tls": { "on": false } });
/// assert_eq!(
///     value.to_string(),
///     "{\nport = 8080;\nhosts = [\"a\", \"b\"];\ntls = {\non = false;\n};\n}"
/// );
/// ```
#[macro_export]
macro_rules! msf {
    (true) => {
        $crate::Value::Boolean(true)
    };

    (false) => {
        $crate::Value::Boolean(false)
    };

    ([]) => {
        $crate::Value::List(::std::vec::Vec::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::msf!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Document::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut doc = $crate::Document::new();
        $(
            doc.set($key, $crate::msf!($value)).expect("msf! key is not a valid MSF key");
        )*
        $crate::Value::Object(doc)
    }};

    ($e:expr) => {
        $crate::Value::from($e)
    };
}
