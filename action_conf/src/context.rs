//! The action context abstraction consumed by process launchers.

use crate::collect::collect_arguments;
use crate::error::ActionResult;
use crate::field::ConfFields;
use crate::style::ArgumentStyle;

/// A configuration value describing one invocable action.
///
/// Implementors supply a name and a descriptor table (via
/// [`ConfFields`]); the argument vector is derived from both. The trait is
/// object safe, so launchers may hold `Box<dyn ActionContext>`.
pub trait ActionContext: ConfFields {
    /// Identifier emitted as the first token.
    fn name(&self) -> &str;

    /// Argument vector using the default [`ArgumentStyle`].
    ///
    /// # Errors
    ///
    /// Returns the first validation or access failure encountered; see
    /// [`collect_arguments`].
    fn arguments(&self) -> ActionResult<Vec<String>> {
        self.arguments_with(&ArgumentStyle::default())
    }

    /// Argument vector using an explicit style.
    ///
    /// # Errors
    ///
    /// See [`ActionContext::arguments`].
    fn arguments_with(&self, style: &ArgumentStyle) -> ActionResult<Vec<String>> {
        collect_arguments(self, style)
    }
}
