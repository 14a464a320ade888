use std::path::Path;

use crate::project::Provider;

pub fn validate_api_key(provider: Provider, key: &str) -> Result<(), String> {
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("{} API key must not be empty", provider.label()));
    }
    let prefix = provider.key_prefix();
    if !key.starts_with(prefix) {
        return Err(format!(
            "{} API keys start with \"{prefix}\"",
            provider.label()
        ));
    }
    Ok(())
}

pub fn validate_goal(goal: &str) -> Result<(), String> {
    if goal.trim().is_empty() {
        return Err("describe the agent's goal in at least a few words".to_string());
    }
    Ok(())
}

pub fn validate_project_dir(path: &Path) -> Result<(), String> {
    if path.is_file() {
        return Err(format!(
            "{} is a file, expected a directory",
            path.display()
        ));
    }
    let Some(name) = path.file_name() else {
        return Ok(());
    };
    let name = name.to_string_lossy();
    if name.starts_with('-') {
        return Err(format!("directory name {name} must not start with '-'"));
    }
    if name
        .chars()
        .any(|ch| !ch.is_ascii_alphanumeric() && !matches!(ch, '-' | '_' | '.'))
    {
        return Err(format!(
            "directory name {name} may only contain letters, digits, '-', '_' and '.'"
        ));
    }
    Ok(())
}
