//! A struct may embed at most one base context.
use action_conf::ActionConf;

#[derive(ActionConf)]
struct First;

#[derive(ActionConf)]
struct Second;

#[derive(ActionConf)]
#[action_conf(name = "merge")]
struct Merge {
    #[action_conf(base)]
    first: First,
    #[action_conf(base)] second: Second,
}

fn main() {
    let merge = Merge { first: First, second: Second };
    let _ = (&merge.first, &merge.second);
}
