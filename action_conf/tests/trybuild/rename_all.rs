//! Struct-level `rename_all` applies to fields without an explicit key.
use action_conf::{ActionConf, ActionContext};

/// Action using kebab-case option names.
#[derive(ActionConf)]
#[action_conf(name = "drop-partition", rename_all = "kebab-case")]
struct DropPartition {
    #[action_conf]
    warehouse_path: Option<String>,
    #[action_conf(key = "partition")]
    partitions: Vec<String>,
    #[action_conf]
    r#type: Option<String>,
}

fn main() {
    let action = DropPartition {
        warehouse_path: Some("/wh".into()),
        partitions: vec!["dt=2024-01-01".into()],
        r#type: Some("hive".into()),
    };
    assert_eq!(
        action.arguments().expect("arguments"),
        [
            "drop-partition",
            "--warehouse-path",
            "/wh",
            "--partition",
            "dt=2024-01-01",
            "--type",
            "hive",
        ]
    );
}
