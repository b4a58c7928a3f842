//! Rendering of keys and values into argument tokens.
//!
//! With the default [`ArgumentStyle`] a scalar becomes `["--key", "value"]`
//! and a list becomes one such pair per element. [`TokenLayout::Joined`]
//! folds each pair into a single `--key=value` token instead.

use crate::field::ConfValue;
use crate::style::{ArgumentStyle, TokenLayout};

/// Append one key/value pair to `args`.
///
/// # Examples
///
/// ```
/// use action_conf::{ArgumentStyle, add_conf};
///
/// let mut args = Vec::new();
/// add_conf(&mut args, "jar", "app.jar", &ArgumentStyle::default());
/// assert_eq!(args, ["--jar", "app.jar"]);
/// ```
pub fn add_conf(args: &mut Vec<String>, key: &str, value: &str, style: &ArgumentStyle) {
    match style.layout {
        TokenLayout::Separate => {
            args.push(style.key_token(key));
            args.push(value.to_owned());
        }
        TokenLayout::Joined => args.push(format!("{}={value}", style.key_token(key))),
    }
}

/// Append one key/value pair per element of `values`, in iteration order.
///
/// An empty iterator appends nothing.
pub fn add_conf_list<I>(args: &mut Vec<String>, key: &str, values: I, style: &ArgumentStyle)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for value in values {
        add_conf(args, key, value.as_ref(), style);
    }
}

/// Append the tokens for a present value. [`ConfValue::Absent`] appends
/// nothing; deciding whether absence is an error is the collector's job.
pub fn render_value(args: &mut Vec<String>, key: &str, value: &ConfValue, style: &ArgumentStyle) {
    match value {
        ConfValue::Absent => {}
        ConfValue::Scalar(v) => add_conf(args, key, v, style),
        ConfValue::List(values) => add_conf_list(args, key, values, style),
    }
}
