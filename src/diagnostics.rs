use crate::project::{ArtifactStatus, Diagnostics, Manifest, Warning, WarningKind};

pub fn warning(kind: WarningKind, message: impl Into<String>) -> Warning {
    Warning {
        kind,
        message: message.into(),
    }
}

pub fn summarize(manifest: &Manifest) -> String {
    let diagnostics = &manifest.diagnostics;
    let mut output = String::new();
    output.push_str(&format!(
        "Project: {}\n",
        diagnostics.project_root.display()
    ));
    output.push_str(&format!(
        "Stack: {} + {} ({})\n",
        manifest.input.language.label(),
        manifest.input.framework.label(),
        manifest.input.provider.label()
    ));
    output.push_str(&format!("Entry point: {}\n", diagnostics.entry_point));

    output.push_str("Artifacts:\n");
    if manifest.artifacts.is_empty() {
        output.push_str("  (none)\n");
    } else {
        for artifact in &manifest.artifacts {
            output.push_str(&format!(
                "  - {} ({})\n",
                artifact.rel_path,
                format_status(artifact.status)
            ));
        }
    }

    output.push_str(&format!(
        "Written: {}, skipped: {}, files in project: {}\n",
        diagnostics.artifacts_written, diagnostics.artifacts_skipped, diagnostics.files_total
    ));
    output.push_str(&format!("Warnings: {}\n", diagnostics.warnings_count));

    for warning in manifest.warnings.iter().take(5) {
        output.push_str(&format!(
            "  - [{}] {}\n",
            format_kind(&warning.kind),
            warning.message
        ));
    }

    output.trim_end().to_string()
}

fn format_status(status: ArtifactStatus) -> &'static str {
    match status {
        ArtifactStatus::Created => "created",
        ArtifactStatus::Exists => "exists",
        ArtifactStatus::Overwritten => "overwritten",
        ArtifactStatus::Merged => "merged",
    }
}

fn format_kind(kind: &WarningKind) -> &'static str {
    match kind {
        WarningKind::TargetNotEmpty => "target_not_empty",
        WarningKind::ArtifactExists => "artifact_exists",
        WarningKind::ToolMissing => "tool_missing",
        WarningKind::GitInit => "git_init",
    }
}

pub fn build_diagnostics(
    project_root: std::path::PathBuf,
    entry_point: String,
    artifacts_written: usize,
    artifacts_skipped: usize,
    files_total: usize,
    warnings_count: usize,
) -> Diagnostics {
    Diagnostics {
        project_root,
        entry_point,
        artifacts_written,
        artifacts_skipped,
        files_total,
        warnings_count,
    }
}
