use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use walkdir::WalkDir;

use crate::cli::InitArgs;
use crate::diagnostics::{build_diagnostics, summarize, warning};
use crate::docs;
use crate::kickoff;
use crate::project::{ArtifactStatus, InputInfo, Manifest, ProjectConfig, Warning, WarningKind};
use crate::templates;
use crate::tools;
use crate::validate;
use crate::wizard;

pub fn run(args: &InitArgs) -> Result<()> {
    let root = args.path.clone();
    if root.is_file() {
        bail!("target {} is a file, expected a directory", root.display());
    }
    if !root.exists()
        && let Err(message) = validate::validate_project_dir(&root)
    {
        bail!(message);
    }

    let config = wizard::collect_config(args, root)?;
    init_project(&config, args)
}

pub fn init_project(config: &ProjectConfig, args: &InitArgs) -> Result<()> {
    let root = &config.root;
    let mut warnings: Vec<Warning> = Vec::new();

    if dir_not_empty(root)? {
        warnings.push(warning(
            WarningKind::TargetNotEmpty,
            format!(
                "{} is not empty, existing files are kept unless --force is given",
                root.display()
            ),
        ));
    }

    fs::create_dir_all(root)
        .with_context(|| format!("failed to create project root {}", root.display()))?;

    let source_dir = root.join(config.language.source_root());
    let prompts_dir = root.join("prompts");
    let evaluations_dir = root.join("tests").join("evaluations");
    let scenarios_dir = root.join("tests").join("scenarios");
    let state_dir = root.join(".agentsmith");

    fs::create_dir_all(&source_dir)
        .with_context(|| format!("failed to create {}", source_dir.display()))?;
    fs::create_dir_all(&prompts_dir)
        .with_context(|| format!("failed to create {}", prompts_dir.display()))?;
    fs::create_dir_all(&evaluations_dir)
        .with_context(|| format!("failed to create {}", evaluations_dir.display()))?;
    fs::create_dir_all(&scenarios_dir)
        .with_context(|| format!("failed to create {}", scenarios_dir.display()))?;
    fs::create_dir_all(&state_dir)
        .with_context(|| format!("failed to create {}", state_dir.display()))?;
    tracing::debug!(root = %root.display(), "created project layout");

    println!(
        "Scaffolding {} ({} + {}, {})",
        config.project_name(),
        config.language.label(),
        config.framework.label(),
        config.provider.label()
    );

    let mut artifacts = Vec::new();
    artifacts.push(templates::write_gitignore(config, args.force)?);
    artifacts.push(templates::write_entry_point(config, args.force)?);
    artifacts.push(templates::write_prompt_registry(config, args.force)?);
    artifacts.push(templates::write_sample_prompt(config, args.force)?);
    artifacts.push(templates::write_eval_notebook(config, args.force)?);
    artifacts.push(templates::write_sample_scenario(config, args.force)?);
    artifacts.extend(templates::write_env_files(config, args.force)?);
    artifacts.push(docs::write_agents_md(config)?);

    for artifact in &artifacts {
        if artifact.status == ArtifactStatus::Exists {
            warnings.push(warning(
                WarningKind::ArtifactExists,
                format!(
                    "{} already exists, left untouched (use --force to overwrite)",
                    artifact.rel_path
                ),
            ));
        }
    }

    if tools::detect_package_manager(config.language).is_none() {
        warnings.push(warning(
            WarningKind::ToolMissing,
            format!(
                "{} not found on PATH, install it before running the project",
                tools::package_manager(config.language)
            ),
        ));
    }

    if !args.no_git && !root.join(".git").exists() {
        match tools::resolve_git_bin() {
            Ok(bin) => match tools::run_git_init(&bin, root) {
                Ok(()) => println!("  git init: ok"),
                Err(err) => warnings.push(warning(
                    WarningKind::GitInit,
                    format!("git init failed: {err}"),
                )),
            },
            Err(err) => warnings.push(warning(
                WarningKind::ToolMissing,
                format!("skipping git init: {err}"),
            )),
        }
    }

    let written = artifacts
        .iter()
        .filter(|artifact| artifact.status != ArtifactStatus::Exists)
        .count();
    let skipped = artifacts.len() - written;
    let warnings_count = warnings.len();

    let manifest = Manifest {
        version: 1,
        generated_at: now_rfc3339(),
        input: InputInfo {
            project_root: root.clone(),
            language: config.language,
            framework: config.framework,
            provider: config.provider,
            api_key_env: config.provider.env_var().to_string(),
            goal: config.goal.clone(),
        },
        artifacts,
        warnings,
        diagnostics: build_diagnostics(
            root.clone(),
            config.language.entry_point().to_string(),
            written,
            skipped,
            count_files(root),
            warnings_count,
        ),
    };
    write_manifest(&state_dir, &manifest)?;

    println!();
    println!("{}", summarize(&manifest));
    println!();
    println!("{}", kickoff::next_steps(config));
    println!("Kick off your assistant with:");
    println!("  {}", kickoff::assistant_instruction(config));

    Ok(())
}

fn dir_not_empty(root: &Path) -> Result<bool> {
    if !root.is_dir() {
        return Ok(false);
    }
    let mut entries = fs::read_dir(root)
        .with_context(|| format!("failed to read {}", root.display()))?;
    Ok(entries.next().is_some())
}

fn count_files(root: &Path) -> usize {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| {
            entry.file_name() != ".git" && entry.file_name() != ".agentsmith"
        })
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .count()
}

fn write_manifest(state_dir: &Path, manifest: &Manifest) -> Result<()> {
    let path = state_dir.join("manifest.json");
    let json = serde_json::to_vec_pretty(&manifest)?;
    let mut file =
        fs::File::create(&path).with_context(|| format!("failed to write {}", path.display()))?;
    file.write_all(&json)?;
    file.write_all(b"\n")?;

    Ok(())
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn file_count_skips_git_and_state_dirs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::create_dir_all(dir.path().join(".agentsmith")).unwrap();
        fs::write(dir.path().join(".git").join("config"), "x").unwrap();
        fs::write(dir.path().join(".agentsmith").join("manifest.json"), "{}").unwrap();
        fs::write(dir.path().join("kept.txt"), "x").unwrap();

        assert_eq!(count_files(dir.path()), 1);
    }

    #[test]
    fn empty_and_missing_dirs_are_not_flagged() {
        let dir = TempDir::new().unwrap();
        assert!(!dir_not_empty(dir.path()).unwrap());
        assert!(!dir_not_empty(&dir.path().join("missing")).unwrap());

        fs::write(dir.path().join("a.txt"), "x").unwrap();
        assert!(dir_not_empty(dir.path()).unwrap());
    }
}
