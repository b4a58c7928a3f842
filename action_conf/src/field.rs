//! Static field descriptors and the values read through them.
//!
//! A context type exposes its tagged fields as a table of [`ConfField`]
//! entries: the static [`FieldSpec`] plus a reader returning the field's
//! current [`ConfValue`]. Derived contexts prepend their base's table to their
//! own, so visiting a table always walks ancestor fields first.

use std::fmt::Display;

use thiserror::Error;

use crate::ActionResult;

/// Shape of the tokens a field renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// One key/value pair.
    Scalar,
    /// One key/value pair per element.
    List,
}

/// Metadata attached to a tagged field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Token name emitted for the field.
    pub key: &'static str,
    /// Whether the field may be absent without error.
    pub nullable: bool,
    /// Scalar or list rendering.
    pub kind: ValueKind,
}

impl FieldSpec {
    /// A field that must carry a value.
    #[must_use]
    pub const fn required(key: &'static str, kind: ValueKind) -> Self {
        Self {
            key,
            nullable: false,
            kind,
        }
    }

    /// A field whose absence is skipped silently.
    #[must_use]
    pub const fn nullable(key: &'static str, kind: ValueKind) -> Self {
        Self {
            key,
            nullable: true,
            kind,
        }
    }
}

/// Runtime value of a tagged field, already converted to text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfValue {
    /// No value; fails unless the field is nullable.
    #[default]
    Absent,
    /// A single value.
    Scalar(String),
    /// An ordered list of values. May be empty.
    List(Vec<String>),
}

impl ConfValue {
    /// Render a scalar through its `Display` implementation.
    #[must_use]
    pub fn scalar(value: impl Display) -> Self {
        Self::Scalar(value.to_string())
    }

    /// Render every element of `values`, preserving iteration order.
    #[must_use]
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        Self::List(values.into_iter().map(|v| v.to_string()).collect())
    }

    /// Like [`ConfValue::scalar`], mapping `None` to [`ConfValue::Absent`].
    #[must_use]
    pub fn optional_scalar<T: Display + ?Sized>(value: Option<&T>) -> Self {
        value.map_or(Self::Absent, Self::scalar)
    }

    /// Like [`ConfValue::list`], mapping `None` to [`ConfValue::Absent`].
    #[must_use]
    pub fn optional_list<I>(values: Option<I>) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        values.map_or(Self::Absent, Self::list)
    }

    /// Render `key=value` entries, the format Flink actions expect for
    /// `catalog_conf`, `table_conf` and the connector configuration lists.
    ///
    /// # Examples
    ///
    /// ```
    /// use action_conf::ConfValue;
    /// use std::collections::BTreeMap;
    ///
    /// let conf = BTreeMap::from([("hostname", "127.0.0.1"), ("port", "3306")]);
    /// assert_eq!(
    ///     ConfValue::pairs(&conf),
    ///     ConfValue::List(vec!["hostname=127.0.0.1".into(), "port=3306".into()])
    /// );
    /// ```
    #[must_use]
    pub fn pairs<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Display,
        V: Display,
    {
        Self::List(
            entries
                .into_iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect(),
        )
    }

    /// Returns `true` for [`ConfValue::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The rendering shape of a present value.
    #[must_use]
    pub const fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Absent => None,
            Self::Scalar(_) => Some(ValueKind::Scalar),
            Self::List(_) => Some(ValueKind::List),
        }
    }
}

/// A field reader could not produce a value.
///
/// Readers generated for plain fields never fail; custom readers supplied
/// through `#[action_conf(with = ...)]` or hand-written tables may.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldAccessError {
    message: String,
}

impl FieldAccessError {
    /// Create an access error with a human-readable message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message passed at construction.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Reads a field's current value out of its owning context.
pub type FieldReader<T> = fn(&T) -> Result<ConfValue, FieldAccessError>;

/// One entry of a context's descriptor table.
pub struct ConfField<T> {
    /// Static metadata for the field.
    pub spec: FieldSpec,
    /// Accessor for the field's value.
    pub read: FieldReader<T>,
}

/// Receives each tagged field in table order.
pub trait FieldVisitor {
    /// Handle one field and its read result.
    ///
    /// # Errors
    ///
    /// Returning an error stops the walk; no further fields are visited.
    fn visit(
        &mut self,
        spec: &FieldSpec,
        value: Result<ConfValue, FieldAccessError>,
    ) -> ActionResult<()>;
}

impl<F> FieldVisitor for F
where
    F: FnMut(&FieldSpec, Result<ConfValue, FieldAccessError>) -> ActionResult<()>,
{
    fn visit(
        &mut self,
        spec: &FieldSpec,
        value: Result<ConfValue, FieldAccessError>,
    ) -> ActionResult<()> {
        self(spec, value)
    }
}

/// Types exposing a descriptor table of tagged fields.
///
/// Usually implemented with `#[derive(ActionConf)]`. A hand-written
/// implementation registers its table explicitly:
///
/// ```
/// use action_conf::{ActionResult, ConfField, ConfFields, ConfValue, FieldSpec, FieldVisitor, ValueKind, visit_table};
///
/// struct Savepoint {
///     path: Option<String>,
/// }
///
/// impl Savepoint {
///     const FIELDS: &'static [ConfField<Self>] = &[ConfField {
///         spec: FieldSpec::nullable("savepoint_path", ValueKind::Scalar),
///         read: |this: &Self| Ok(ConfValue::optional_scalar(this.path.as_ref())),
///     }];
/// }
///
/// impl ConfFields for Savepoint {
///     fn visit_fields(&self, visitor: &mut dyn FieldVisitor) -> ActionResult<()> {
///         visit_table(self, Self::FIELDS, visitor)
///     }
///
///     fn descriptor_table() -> Vec<FieldSpec> {
///         Self::FIELDS.iter().map(|f| f.spec).collect()
///     }
/// }
///
/// assert_eq!(Savepoint::descriptor_table()[0].key, "savepoint_path");
/// ```
pub trait ConfFields {
    /// Visit every tagged field, base context first, then this type's own
    /// fields in declaration order.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `visitor`.
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) -> ActionResult<()>;

    /// The flattened static table in visiting order.
    fn descriptor_table() -> Vec<FieldSpec>
    where
        Self: Sized;

    /// Location of the artefact that runs the action, such as a jar path.
    fn action_path(&self) -> Option<&str> {
        None
    }
}

/// Visit `table` against `target`, stopping at the first error.
///
/// # Errors
///
/// Propagates the first error returned by `visitor`.
pub fn visit_table<T>(
    target: &T,
    table: &[ConfField<T>],
    visitor: &mut dyn FieldVisitor,
) -> ActionResult<()> {
    for field in table {
        visitor.visit(&field.spec, (field.read)(target))?;
    }
    Ok(())
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests fail fast on unexpected errors")]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeSet;

    #[rstest]
    #[case::some(Some(&8081), ConfValue::Scalar("8081".into()))]
    #[case::none(None, ConfValue::Absent)]
    fn optional_scalar_maps_none_to_absent(#[case] input: Option<&u16>, #[case] expected: ConfValue) {
        assert_eq!(ConfValue::optional_scalar(input), expected);
    }

    #[rstest]
    fn list_preserves_iteration_order() {
        let value = ConfValue::list(["b.jar", "a.jar"]);
        assert_eq!(value, ConfValue::List(vec!["b.jar".into(), "a.jar".into()]));
        assert_eq!(value.kind(), Some(ValueKind::List));
    }

    #[rstest]
    fn list_accepts_borrowed_sets() {
        let tables = BTreeSet::from(["orders", "customers"]);
        assert_eq!(
            ConfValue::optional_list(Some(&tables)),
            ConfValue::List(vec!["customers".into(), "orders".into()])
        );
    }

    #[rstest]
    fn empty_list_is_present() {
        let value = ConfValue::list(Vec::<String>::new());
        assert!(!value.is_absent());
        assert_eq!(value, ConfValue::List(Vec::new()));
    }

    #[rstest]
    fn pairs_render_key_equals_value() {
        let value = ConfValue::pairs([("bucket", 4)]);
        assert_eq!(value, ConfValue::List(vec!["bucket=4".into()]));
    }

    struct Pair {
        first: &'static str,
        second: Option<&'static str>,
    }

    const PAIR_FIELDS: &[ConfField<Pair>] = &[
        ConfField {
            spec: FieldSpec::required("first", ValueKind::Scalar),
            read: |this: &Pair| Ok(ConfValue::scalar(this.first)),
        },
        ConfField {
            spec: FieldSpec::nullable("second", ValueKind::Scalar),
            read: |this: &Pair| Ok(ConfValue::optional_scalar(this.second)),
        },
    ];

    #[rstest]
    fn visit_table_walks_in_order() {
        let pair = Pair {
            first: "a",
            second: None,
        };
        let mut seen = Vec::new();
        let mut visitor = |spec: &FieldSpec,
                           value: Result<ConfValue, FieldAccessError>|
         -> ActionResult<()> {
            seen.push((spec.key, value));
            Ok(())
        };
        visit_table(&pair, PAIR_FIELDS, &mut visitor).expect("visit succeeds");
        assert_eq!(
            seen,
            vec![
                ("first", Ok(ConfValue::Scalar("a".into()))),
                ("second", Ok(ConfValue::Absent)),
            ]
        );
    }

    #[rstest]
    fn visit_table_stops_at_first_error() {
        let pair = Pair {
            first: "a",
            second: Some("b"),
        };
        let mut calls = 0;
        let mut visitor = |spec: &FieldSpec,
                           _: Result<ConfValue, FieldAccessError>|
         -> ActionResult<()> {
            calls += 1;
            Err(crate::ActionError::missing(spec.key))
        };
        let err = visit_table(&pair, PAIR_FIELDS, &mut visitor).expect_err("visitor fails");
        assert_eq!(err.key(), Some("first"));
        assert_eq!(calls, 1);
    }
}
