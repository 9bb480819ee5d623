use assert_cmd::Command;

pub fn jobdesk_cmd() -> Command {
    Command::cargo_bin("jobdesk").unwrap()
}
