//! Derive resolving the runtime crate through an alias.
use action_conf as conf_alias;
use conf_alias::ActionContext;

/// Context whose expansion refers to `conf_alias` instead of `action_conf`.
#[derive(conf_alias::ActionConf)]
#[action_conf(crate = "conf_alias", name = "aliased")]
struct Aliased {
    #[action_conf]
    value: Option<String>,
}

fn main() {
    let aliased = Aliased {
        value: Some("x".into()),
    };
    assert_eq!(aliased.arguments().expect("arguments"), ["aliased", "--value", "x"]);
}
