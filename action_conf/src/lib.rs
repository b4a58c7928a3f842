//! Flatten typed action contexts into command-line argument vectors.
//!
//! An action context is a struct describing one invocable action, such as a
//! Flink job submission. Fields tagged with `#[action_conf]` become
//! `--key value` pairs; the context's name always comes first. A context may
//! embed a parent context in a `base` field, whose arguments precede its own.
//!
//! ```
//! use action_conf::{ActionConf, ActionContext, ActionError};
//!
//! #[derive(ActionConf)]
//! struct JobBase {
//!     #[action_conf(key = "jar")]
//!     jar: Option<String>,
//! }
//!
//! #[derive(ActionConf)]
//! #[action_conf(name = "run-job")]
//! struct RunJob {
//!     #[action_conf(base)]
//!     base: JobBase,
//!     #[action_conf]
//!     classpath: Vec<String>,
//!     #[action_conf(nullable)]
//!     args: Option<Vec<String>>,
//!     scratch: u32,
//! }
//!
//! let job = RunJob {
//!     base: JobBase { jar: Some("app.jar".into()) },
//!     classpath: vec!["a.jar".into(), "b.jar".into()],
//!     args: None,
//!     scratch: 7,
//! };
//! assert_eq!(
//!     job.arguments()?,
//!     ["run-job", "--jar", "app.jar", "--classpath", "a.jar", "--classpath", "b.jar"]
//! );
//! # let _ = job.scratch;
//! # Ok::<(), ActionError>(())
//! ```
//!
//! Token layout and the handling of failed field reads are configured with
//! [`ArgumentStyle`], which can also be loaded from `ACTION_CONF_*`
//! environment variables.

pub use action_conf_macros::ActionConf;

pub mod actions;
mod collect;
mod context;
mod error;
mod field;
mod format;
mod style;

pub use collect::{ArgumentCollector, add_arguments, collect_arguments};
pub use context::ActionContext;
pub use error::{ActionError, ActionResult};
pub use field::{
    ConfField, ConfFields, ConfValue, FieldAccessError, FieldReader, FieldSpec, FieldVisitor,
    ValueKind, visit_table,
};
pub use format::{add_conf, add_conf_list, render_value};
pub use style::{AccessFailurePolicy, ArgumentStyle, ENV_PREFIX, TokenLayout};
