use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};

use crate::project::Language;

pub fn resolve_git_bin() -> Result<PathBuf> {
    if let Some(path) = env::var_os("AGENTSMITH_GIT_BIN") {
        return Ok(PathBuf::from(path));
    }

    which::which("git").context("git not found on PATH")
}

pub fn run_git_init(bin: &Path, root: &Path) -> Result<()> {
    let output = Command::new(bin)
        .arg("init")
        .arg(root)
        .output()
        .with_context(|| format!("failed to run git init for {}", root.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "git init failed for {} (status {}):\n{}",
            root.display(),
            output.status,
            tail_lines(&stderr, 20)
        );
    }

    Ok(())
}

pub fn package_manager(language: Language) -> &'static str {
    match language {
        Language::Typescript => "npm",
        Language::Python => "uv",
    }
}

pub fn detect_package_manager(language: Language) -> Option<PathBuf> {
    which::which(package_manager(language)).ok()
}

fn tail_lines(input: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = input.lines().collect();
    if lines.len() <= max_lines {
        return input.trim_end().to_string();
    }
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].join("\n")
}
