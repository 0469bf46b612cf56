#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde_json::json;
use vitae::Document;

pub fn sample_resume() -> Document {
    Document::from_value(json!({
        "basics": {
            "name": "Ada Lovelace",
            "label": "Engineer",
            "summary": "Engineer with a taste for analytical engines."
        },
        "work": [
            {"name": "Analytical Engines Ltd", "position": "Programmer"}
        ],
        "skills": [
            {"name": "Mathematics", "keywords": ["Calculus", "Algebra"]}
        ]
    }))
    .unwrap()
}

/// Files under `dir` whose names look like pipeline temp documents.
pub fn temp_documents(dir: &Path) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| {
            let name = p.file_name().unwrap().to_string_lossy();
            name.starts_with("resume-") && name.ends_with(".json")
        })
        .collect();
    out.sort();
    out
}

#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, body).unwrap();
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).unwrap();
}

/// A theme directory with an (empty) `cli.js` plus a fake `node` that records its arguments to
/// `args.log`, copies its input to `seen.json`, and writes a stub PDF.
#[cfg(unix)]
pub struct FakeTheme {
    pub dir: tempfile::TempDir,
}

#[cfg(unix)]
impl FakeTheme {
    pub fn succeeding() -> Self {
        Self::with_node_body(
            r#"set -eu
entry="$1"
shift
echo "$entry $*" > "$(dirname "$entry")/args.log"
while [ "$#" -gt 0 ]; do
  case "$1" in
    -i) shift; input="$1" ;;
    -o) shift; out="$1" ;;
    --tmp-dir) shift; scratch="$1" ;;
  esac
  shift
done
cp "$input" "$(dirname "$entry")/seen.json"
echo "%PDF-1.4 fake" > "$out"
echo "rendered $out"
"#,
        )
    }

    pub fn failing() -> Self {
        Self::with_node_body(
            r#"echo "partial output"
echo "theme exploded" >&2
exit 3
"#,
        )
    }

    fn with_node_body(body: &str) -> Self {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("cli.js"), "// stub\n").unwrap();
        write_script(&dir.path().join("node"), &format!("#!/bin/sh\n{body}"));
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn node(&self) -> PathBuf {
        self.dir.path().join("node")
    }

    pub fn args_log(&self) -> String {
        std::fs::read_to_string(self.dir.path().join("args.log")).unwrap()
    }

    pub fn seen_input(&self) -> serde_json::Value {
        let text = std::fs::read_to_string(self.dir.path().join("seen.json")).unwrap();
        serde_json::from_str(&text).unwrap()
    }
}
