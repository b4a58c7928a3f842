//! Argument collection over descriptor tables.
//!
//! The collector applies the nullability policy to each visited field and
//! hands present values to the formatter. The first failure aborts the walk,
//! so callers never observe a partially populated sequence.

use tracing::{debug, trace, warn};

use crate::context::ActionContext;
use crate::error::{ActionError, ActionResult};
use crate::field::{ConfFields, ConfValue, FieldAccessError, FieldSpec, FieldVisitor};
use crate::format::render_value;
use crate::style::{AccessFailurePolicy, ArgumentStyle};

/// Visitor appending each visited field's tokens to a caller-supplied
/// sequence.
pub struct ArgumentCollector<'a> {
    args: &'a mut Vec<String>,
    style: &'a ArgumentStyle,
}

impl<'a> ArgumentCollector<'a> {
    /// Collect into `args` using `style`.
    #[must_use]
    pub const fn new(args: &'a mut Vec<String>, style: &'a ArgumentStyle) -> Self {
        Self { args, style }
    }

    fn resolve(
        &self,
        spec: &FieldSpec,
        value: Result<ConfValue, FieldAccessError>,
    ) -> ActionResult<ConfValue> {
        match value {
            Ok(value) => Ok(value),
            Err(source) => match self.style.access_failure {
                AccessFailurePolicy::Propagate => Err(ActionError::FieldAccess {
                    key: spec.key.to_owned(),
                    source,
                }),
                AccessFailurePolicy::TreatAsAbsent => {
                    warn!(key = spec.key, error = %source, "field read failed; treating value as absent");
                    Ok(ConfValue::Absent)
                }
            },
        }
    }
}

impl FieldVisitor for ArgumentCollector<'_> {
    fn visit(
        &mut self,
        spec: &FieldSpec,
        read: Result<ConfValue, FieldAccessError>,
    ) -> ActionResult<()> {
        let value = self.resolve(spec, read)?;
        if value.is_absent() {
            if spec.nullable {
                debug!(key = spec.key, "skipping absent nullable field");
                return Ok(());
            }
            return Err(ActionError::missing(spec.key));
        }
        if let Some(found) = value.kind().filter(|found| *found != spec.kind) {
            return Err(ActionError::KindMismatch {
                key: spec.key.to_owned(),
                expected: spec.kind,
                found,
            });
        }
        trace!(key = spec.key, kind = ?spec.kind, "emitting field");
        render_value(self.args, spec.key, &value, self.style);
        Ok(())
    }
}

/// Append the tokens for every tagged field of `target` to `args`.
///
/// Fields are appended base context first. On error `args` may already hold
/// tokens from earlier fields; [`collect_arguments`] discards them.
///
/// # Errors
///
/// Returns [`ActionError::MissingValue`] for a required field without a
/// value, [`ActionError::FieldAccess`] for a failed read under
/// [`AccessFailurePolicy::Propagate`] and [`ActionError::KindMismatch`] when
/// a reader returns a list for a scalar field or the reverse.
pub fn add_arguments<F>(args: &mut Vec<String>, target: &F, style: &ArgumentStyle) -> ActionResult<()>
where
    F: ConfFields + ?Sized,
{
    target.visit_fields(&mut ArgumentCollector::new(args, style))
}

/// Build the full argument vector for `context`: its name followed by the
/// tokens of every tagged field.
///
/// # Examples
///
/// ```
/// use action_conf::{ActionConf, ArgumentStyle, collect_arguments};
///
/// #[derive(ActionConf)]
/// #[action_conf(name = "run-job")]
/// struct RunJob {
///     #[action_conf]
///     jar: Option<String>,
///     #[action_conf(nullable)]
///     args: Option<Vec<String>>,
/// }
///
/// let job = RunJob { jar: Some("app.jar".into()), args: None };
/// let args = collect_arguments(&job, &ArgumentStyle::default()).unwrap();
/// assert_eq!(args, ["run-job", "--jar", "app.jar"]);
/// ```
///
/// # Errors
///
/// See [`add_arguments`].
pub fn collect_arguments<C>(context: &C, style: &ArgumentStyle) -> ActionResult<Vec<String>>
where
    C: ActionContext + ?Sized,
{
    let mut args = vec![context.name().to_owned()];
    add_arguments(&mut args, context, style)?;
    debug!(
        action = context.name(),
        tokens = args.len(),
        "collected action arguments"
    );
    Ok(args)
}
