use std::path::PathBuf;
use std::process::{Command, Output};

const DB: &str = "\
# Linux
030000004c0500006802000011010000,PS3 Controller,a:b0,b:b1,dpup:h0.1,leftx:a0,lefty:a1,platform:Linux,
xinput,XInput Controller,a:b0,b:b1,platform:Windows,
";

fn run(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_padtable"))
        .args(args)
        .output()
        .expect("spawn padtable")
}

fn temp_db(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("padtable-cli-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn no_arguments_is_a_usage_error() {
    let out = run(&[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("usage"));
}

#[test]
fn two_arguments_is_a_usage_error() {
    let out = run(&["a.txt".as_ref(), "b.txt".as_ref()]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn prints_only_the_json_table() {
    let path = temp_db("ok.txt", DB);
    let out = run(&[path.as_os_str()]);
    std::fs::remove_file(&path).unwrap();

    assert!(out.status.success());
    let expected = padtable::convert_str(DB).unwrap().to_json().unwrap() + "\n";
    assert_eq!(String::from_utf8(out.stdout).unwrap(), expected);
    assert!(expected.starts_with("{\n    \"054c:0268\": \"b0 b1 x"));
}

#[test]
fn fatal_error_exits_without_output() {
    let db = format!("{DB}03000000de2800000112000001000000,Steam,dpup:h0.3,\n");
    let path = temp_db("bad-hat.txt", &db);
    let out = run(&[path.as_os_str()]);
    std::fs::remove_file(&path).unwrap();

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("line 4"));
}

#[test]
fn missing_file_exits_without_output() {
    let out = run(&["/nonexistent/gamecontrollerdb.txt".as_ref()]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}
