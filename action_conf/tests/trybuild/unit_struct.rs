//! Unit structs derive an action without arguments.
use action_conf::{ActionConf, ActionContext, ConfFields};

/// Action that takes no options.
#[derive(ActionConf)]
#[action_conf(name = "expire-snapshots")]
struct ExpireSnapshots;

fn main() {
    assert!(ExpireSnapshots::descriptor_table().is_empty());
    assert_eq!(ExpireSnapshots.action_path(), None);
    assert_eq!(
        ExpireSnapshots.arguments().expect("arguments"),
        ["expire-snapshots"]
    );
}
