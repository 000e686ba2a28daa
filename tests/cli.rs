use std::process::{Command, Output};

fn disassemble_hexdump(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_disassemble-hexdump"))
        .args(args)
        .env_remove("OBJDUMP")
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
pub fn test_empty_payload_message() {
    let output = disassemble_hexdump(&["bytes", ","]);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output)
            .contains("error: refusing to disassemble an empty payload"),
        "{}",
        stderr(&output)
    );
}

#[test]
pub fn test_invalid_byte_message() {
    let output = disassemble_hexdump(&["bytes", "0x55", "zz"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("error: invalid byte \"zz\""),
        "{}",
        stderr(&output)
    );
}

#[test]
pub fn test_unknown_sample_message() {
    let output = disassemble_hexdump(&["samples", "--only", "nope"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("error: no sample named \"nope\""),
        "{}",
        stderr(&output)
    );
}

#[test]
pub fn test_missing_tool_message() {
    let output = disassemble_hexdump(&[
        "bytes",
        "--objdump",
        "no-such-objdump-on-this-machine",
        "c3",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output)
            .contains("error: no-such-objdump-on-this-machine not found"),
        "{}",
        stderr(&output)
    );
}

#[cfg(unix)]
#[test]
pub fn test_samples_with_stand_in_tool() {
    let output = disassemble_hexdump(&["samples", "--objdump", "true"]);

    assert!(output.status.success(), "{}", stderr(&output));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("constant_return:"));
    assert!(stdout.contains("checked_call:"));
}

#[cfg(unix)]
#[test]
pub fn test_failing_tool_keeps_exit_code() {
    let output = disassemble_hexdump(&["bytes", "--objdump", "false", "c3"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("WARN: false exited with"));
}
