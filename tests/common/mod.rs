use assert_cmd::Command;

pub fn pintidy_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pintidy").unwrap();
    cmd.env_remove("PINTIDY_TOKEN");
    cmd.env_remove("RUST_LOG");
    cmd
}
