use assert_cmd::Command;
use std::path::Path;

pub fn dayline_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dayline").unwrap();
    cmd.env_remove("DAYLINE_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside an initialized journal at `root`
#[allow(dead_code)]
pub fn journal_cmd(root: &Path) -> Command {
    let mut cmd = dayline_cmd();
    cmd.current_dir(root);
    cmd
}
