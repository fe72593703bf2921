use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const BARBAROSSA_KEY: [&str; 8] = [
    "--rotors",
    "II IV V",
    "--rings",
    "02 21 12",
    "--positions",
    "BLA",
    "--plugs",
    "AV BS CG DL FU HZ IN KM OW RX",
];

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_enigma-cli"))
}

fn run_ok(cmd: &mut Command) -> String {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).expect("utf-8 stdout")
}

fn run_err(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(!out.status.success(), "command unexpectedly succeeded");
    out
}

fn encipher(args: &[&str]) -> String {
    run_ok(cli().arg("encipher").args(args))
}

fn encipher_err(args: &[&str]) -> Output {
    run_err(cli().arg("encipher").args(args))
}

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn default_key_lenient_input() {
    let out = encipher(&["--text", "Hello, World!"]);
    assert_eq!(out, "ILBDAAMTAZ\n");
}

#[test]
fn grouped_output_deciphers_back() {
    let mut args = BARBAROSSA_KEY.to_vec();
    args.extend(["--text", "ANGRIFF IM WESTEN", "--group", "5"]);
    let cipher = encipher(&args);
    let groups: Vec<&str> = cipher.trim_end().split(' ').collect();
    assert_eq!(groups.len(), 3);
    assert!(groups[..2].iter().all(|g| g.len() == 5));

    let mut args = BARBAROSSA_KEY.to_vec();
    args.extend(["--text", cipher.trim_end()]);
    assert_eq!(encipher(&args), "ANGRIFFIMWESTEN\n");
}

#[test]
fn strict_mode_rejects_foreign_symbols() {
    let out = encipher_err(&["--strict", "--text", "hello"]);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("'h'"), "stderr was: {stderr}");

    let ok = encipher(&["--strict", "--text", "HELLO WORLD\n"]);
    assert_eq!(ok, "ILBDAAMTAZ\n");
}

#[test]
fn file_in_file_out() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("msg.txt");
    let output = dir.path().join("msg.enc");
    fs::write(&input, "hello\r\nworld\r\n").unwrap();

    let stdout = encipher(&["--in", path_str(&input), "--out", path_str(&output)]);
    assert!(stdout.is_empty());
    assert_eq!(fs::read_to_string(&output).unwrap(), "ILBDAAMTAZ\n");
}

#[test]
fn save_state_resumes_mid_message() {
    let dir = tempfile::tempdir().unwrap();
    let sheet = dir.path().join("state.eks");
    let sheet = path_str(&sheet);

    let head = encipher(&["--text", "HELLO", "--save-state", sheet]);
    assert_eq!(head, "ILBDA\n");

    let tail = encipher(&["--keysheet", sheet, "--text", "WORLD"]);
    assert_eq!(tail, "AMTAZ\n");
}

#[test]
fn machine_file_drives_the_key() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("machine.toml");
    fs::write(
        &cfg,
        r#"
reflector = "B"
plugboard = ["AB"]
rotors = [{ wheel = "I" }, { wheel = "II" }, { wheel = "III" }]
"#,
    )
    .unwrap();

    let out = encipher(&["--config", path_str(&cfg), "--text", "AAAAA"]);
    assert_eq!(out, "BJLCS\n");
}

#[test]
fn config_and_flags_conflict() {
    encipher_err(&["--config", "machine.toml", "--rotors", "I II III"]);
}

#[test]
fn bad_key_fails_before_output() {
    let out = encipher_err(&["--plugs", "AB BC", "--text", "AAAAA"]);
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("build machine"), "stderr was: {stderr}");
}
