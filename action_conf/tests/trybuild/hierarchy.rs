//! Three-level hierarchy with custom readers and a path field.
use action_conf::{ActionConf, ActionContext, ConfFields, ConfValue, FieldAccessError};

fn parallelism(value: &u16) -> Result<ConfValue, FieldAccessError> {
    Ok(ConfValue::scalar(value))
}

#[derive(ActionConf)]
struct Root {
    #[action_conf(path)]
    jar: String,
    #[action_conf(with = parallelism)]
    parallelism: u16,
}

#[derive(ActionConf)]
struct Middle {
    #[action_conf(base)]
    root: Root,
    #[action_conf(nullable)]
    savepoint: Option<String>,
}

/// Leaf action deriving its arguments from two ancestors.
#[derive(ActionConf)]
#[action_conf(name = "compact")]
struct Compact {
    #[action_conf(base)]
    middle: Middle,
    #[action_conf(key = "table")]
    target: Option<String>,
    #[action_conf(scalar)]
    order_by: String,
}

fn main() {
    let compact = Compact {
        middle: Middle {
            root: Root {
                jar: "/jars/paimon.jar".into(),
                parallelism: 4,
            },
            savepoint: None,
        },
        target: Some("orders".into()),
        order_by: "ts".into(),
    };
    assert_eq!(compact.action_path(), Some("/jars/paimon.jar"));
    assert_eq!(Compact::descriptor_table().len(), 4);
    let args = compact.arguments().expect("arguments");
    assert_eq!(
        args,
        ["compact", "--parallelism", "4", "--table", "orders", "--order_by", "ts"]
    );
}
