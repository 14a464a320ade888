use std::fs;

use anyhow::{Context, Result};

use crate::knowledge;
use crate::project::{ArtifactRecord, ArtifactStatus, ProjectConfig};

pub const AGENTS_BEGIN: &str = "<!-- BEGIN GENERATED (agentsmith) -->";
pub const AGENTS_END: &str = "<!-- END GENERATED (agentsmith) -->";

pub fn write_agents_md(config: &ProjectConfig) -> Result<ArtifactRecord> {
    let path = config.root.join("AGENTS.md");
    let body = agents_section(config);
    let (contents, status) = if path.exists() {
        let existing = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        (
            replace_marked_section(&existing, AGENTS_BEGIN, AGENTS_END, &body),
            ArtifactStatus::Merged,
        )
    } else {
        (
            format!("{AGENTS_BEGIN}\n{body}\n{AGENTS_END}\n"),
            ArtifactStatus::Created,
        )
    };
    tracing::debug!(path = %path.display(), "writing agent handbook");
    fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    match status {
        ArtifactStatus::Merged => println!("  merged:  AGENTS.md"),
        _ => println!("  created: AGENTS.md"),
    }
    Ok(ArtifactRecord {
        rel_path: "AGENTS.md".to_string(),
        status,
    })
}

fn agents_section(config: &ProjectConfig) -> String {
    let framework = knowledge::framework(config.framework);
    let provider = knowledge::provider(config.provider);
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", config.project_name()));
    out.push_str(&format!("{}\n\n", config.goal));
    out.push_str("## Overview\n\n");
    out.push_str(&format!(
        "- Language: {} ({})\n",
        config.language.label(),
        config.framework.label()
    ));
    out.push_str(&format!(
        "- Provider: {} (`{}`, key in `{}`)\n",
        config.provider.label(),
        provider.default_model,
        config.provider.env_var()
    ));
    out.push_str(&format!(
        "- Entry point: `{}`\n",
        config.language.entry_point()
    ));
    out.push_str("- Prompts live in `prompts/` and are registered in `prompts.json`\n");
    out.push_str("- Evaluations in `tests/evaluations/`, scenarios in `tests/scenarios/`\n\n");
    out.push_str(&format!(
        "{} Docs: {}\n\n",
        framework.orientation, framework.docs_url
    ));
    out.push_str("## Principles\n\n");
    out.push_str("- Keep prompt text in `prompts/`, never inline in source.\n");
    out.push_str("- Register every prompt file in `prompts.json`.\n");
    out.push_str(&format!(
        "- Read the API key from `{}`, never hardcode it.\n",
        config.provider.env_var()
    ));
    out.push_str("- Small, reviewable changes; one prompt or tool per commit.\n\n");
    out.push_str("## Workflow\n\n");
    out.push_str("1. Change a prompt or the agent code.\n");
    out.push_str("2. Run the evaluation notebook in `tests/evaluations/` against it.\n");
    out.push_str("3. Capture new conversation flows as scenarios in `tests/scenarios/`.\n");
    out.push_str(&format!("4. Smoke-test with `{}`.", framework.run));
    out
}

pub fn replace_marked_section(existing: &str, begin: &str, end: &str, body: &str) -> String {
    let block = format!("{begin}\n{body}\n{end}");
    match (existing.find(begin), existing.find(end)) {
        (Some(start), Some(stop)) if stop > start => {
            let mut out = String::new();
            out.push_str(&existing[..start]);
            out.push_str(&block);
            out.push_str(&existing[stop + end.len()..]);
            out
        }
        _ => {
            let mut out = existing.trim_end().to_string();
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str(&block);
            out.push('\n');
            out
        }
    }
}
