#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn brag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("brag").unwrap();
    cmd.env_remove("BRAG_DIR");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// `brag` command pointed at `root` through BRAG_DIR
pub fn brag_at(root: &Path) -> Command {
    let mut cmd = brag_cmd();
    cmd.env("BRAG_DIR", root);
    cmd
}

/// Initialized brag directory with the given topics
pub fn init_with_topics(root: &Path, topics: &[&str]) {
    brag_at(root).arg("init").assert().success();
    for topic in topics {
        brag_at(root).args(["topic", "add", topic]).assert().success();
    }
}

pub fn week_file(root: &Path, year: i32, week: u32) -> PathBuf {
    root.join("entries")
        .join(year.to_string())
        .join(format!("week-{:02}.md", week))
}

pub const WEEK_48_2024: &str = "# Week 48 - 2024

## 2024-11-25
### Implemented authentication
- **Topic:** Project Alpha
- **Impact:** Secured user access
- **Tags:** security, feature

### Reviewed PRs
- **Topic:** Code Review
- **Impact:** Improved code quality

## 2024-11-26
### Updated API documentation
- **Topic:** Documentation
- **Impact:** Reduced support tickets by 20%
- **Tags:** docs, api
";

/// Write the sample week 48 file into an initialized root
pub fn seed_week_48(root: &Path) {
    let path = week_file(root, 2024, 48);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, WEEK_48_2024).unwrap();
}
