#![allow(unused_crate_dependencies)]

use std::{
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

const CMD: &str = env!("CARGO_BIN_EXE_shunt");

fn shunt(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(CMD)
        .args(args)
        .arg("--color=never")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

fn stderr(output: &Output) -> &str {
    std::str::from_utf8(&output.stderr).unwrap()
}

fn write_vars(dir: &Path, contents: &str) -> String {
    let path = dir.join("variables.txt");
    std::fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn evaluates_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let vars = write_vars(dir.path(), "5 10 15 20 25 30\n");
    let output = shunt(&["-f", &vars, "a+b*c/d-e+f", "a*(b+c)*(d-e)+f"], "");
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Postfix Expression: abc*d/+e-f+\nEvaluation Result: 17.5\n\
         Postfix Expression: abc+*de-*f+\nEvaluation Result: -595\n"
    );
}

#[test]
fn reads_stdin_until_quit() {
    let dir = tempfile::tempdir().unwrap();
    let vars = write_vars(dir.path(), "5 0 15 20 25 30");
    let output = shunt(&["--vars", &vars, "--emit=result"], "a+b\nb/a\nquit\na/b\n");
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "Evaluation Result: 5\nEvaluation Result: 0\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn failure_exit_code() {
    let output = shunt(&["a+", "(a"], "");
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "Postfix Expression: a+\nPostfix Expression: a(\n");
    let stderr = stderr(&output);
    assert!(stderr.contains("error: invalid postfix expression"), "{stderr}");
    assert!(stderr.contains("aborting due to 2 failed expression(s)"), "{stderr}");
}

#[test]
fn missing_variables_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let output = shunt(&["-f", missing.to_str().unwrap(), "a"], "");
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).starts_with("error: couldn't open"), "{}", stderr(&output));
}

#[test]
fn json_output() {
    let output = shunt(&["--error-format=json", "--emit=postfix,values", "(a+b)*c"], "");
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "{\"infix\":\"(a+b)*c\",\"postfix\":\"ab+c*\",\
         \"values\":{\"a\":0,\"b\":0,\"c\":0,\"d\":0,\"e\":0,\"f\":0}}\n"
    );
}

#[test]
fn usage_errors() {
    let output = shunt(&["--emit=result,result", "a"], "");
    assert!(!output.status.success());
    assert_eq!(stderr(&output), "error: cannot specify `--emit result` twice\n");

    let output = shunt(&["--emit=bytecode", "a"], "");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("bytecode"), "{}", stderr(&output));
}
