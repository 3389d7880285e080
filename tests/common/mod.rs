use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("workspace");
        let home = tmp.path().join("home");
        fs::create_dir_all(&root).expect("create workspace");
        fs::create_dir_all(&home).expect("create isolated home");

        make_fixture_corpora(&root);

        Self {
            _tmp: tmp,
            root,
            home,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("paritas");
        cmd.current_dir(&self.root).env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// A gating run below threshold exits non-zero; capture stdout anyway.
    pub fn run_json_any_status(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .output()
            .expect("spawn paritas");
        serde_json::from_slice(&out.stdout).expect("valid json output")
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.root.join("paritas.toml"), contents).expect("write config");
    }

    pub fn artifact(&self, name: &str) -> Value {
        let raw = fs::read_to_string(self.root.join(name)).expect("read artifact");
        serde_json::from_str(&raw).expect("artifact json")
    }
}

/// Reference module with two public functions, one private function and one
/// class; candidate corpus covers `alpha` (upper-cased, so matching must be
/// case-insensitive) and `Delta` but not `gamma`.
fn make_fixture_corpora(root: &Path) {
    let reference = root.join("reference");
    fs::create_dir_all(&reference).expect("create reference dir");
    fs::write(
        reference.join("core.py"),
        "def alpha(x):\n    return x\n\ndef _beta(x):\n    return x\n\ndef gamma(x):\n    return x\n\nclass Delta(Base):\n    pass\n",
    )
    .expect("write reference module");

    fs::create_dir_all(root.join("include")).expect("create include dir");
    fs::create_dir_all(root.join("src")).expect("create src dir");
    fs::write(root.join("include/alpha.hpp"), "// ALPHA implementation\n")
        .expect("write candidate header");
    fs::write(root.join("src/delta.cpp"), "// Delta class\n").expect("write candidate source");

    fs::write(
        root.join("paritas.toml"),
        r#"[reference]
root = "reference"
modules = ["core.py"]

[[candidate]]
root = "include"
extensions = ["hpp", "h"]

[[candidate]]
root = "src"
extensions = ["cpp"]

[gate]
threshold = 90.0
policy = "gating"
"#,
    )
    .expect("write config");
}
