use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Typescript,
    Python,
}

impl Language {
    pub fn label(self) -> &'static str {
        match self {
            Language::Typescript => "TypeScript",
            Language::Python => "Python",
        }
    }

    pub fn source_root(self) -> &'static str {
        match self {
            Language::Typescript => "src",
            Language::Python => "app",
        }
    }

    pub fn entry_point(self) -> &'static str {
        match self {
            Language::Typescript => "src/index.ts",
            Language::Python => "app/main.py",
        }
    }

    pub fn frameworks(self) -> &'static [Framework] {
        match self {
            Language::Typescript => &[Framework::Mastra, Framework::Voltagent],
            Language::Python => &[Framework::Langgraph, Framework::Crewai],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    Mastra,
    Voltagent,
    Langgraph,
    Crewai,
}

impl Framework {
    pub fn label(self) -> &'static str {
        match self {
            Framework::Mastra => "Mastra",
            Framework::Voltagent => "VoltAgent",
            Framework::Langgraph => "LangGraph",
            Framework::Crewai => "CrewAI",
        }
    }

    pub fn language(self) -> Language {
        match self {
            Framework::Mastra | Framework::Voltagent => Language::Typescript,
            Framework::Langgraph | Framework::Crewai => Language::Python,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Openai,
    Anthropic,
    Google,
}

impl Provider {
    pub fn label(self) -> &'static str {
        match self {
            Provider::Openai => "OpenAI",
            Provider::Anthropic => "Anthropic",
            Provider::Google => "Google",
        }
    }

    pub fn env_var(self) -> &'static str {
        match self {
            Provider::Openai => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
            Provider::Google => "GEMINI_API_KEY",
        }
    }

    pub fn key_prefix(self) -> &'static str {
        match self {
            Provider::Openai => "sk-",
            Provider::Anthropic => "sk-ant-",
            Provider::Google => "AIza",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub root: PathBuf,
    pub language: Language,
    pub framework: Framework,
    pub provider: Provider,
    pub api_key: String,
    pub goal: String,
}

impl ProjectConfig {
    pub fn project_name(&self) -> String {
        self.root
            .canonicalize()
            .unwrap_or_else(|_| self.root.clone())
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "agent-project".to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct Manifest {
    pub version: u8,
    pub generated_at: String,
    pub input: InputInfo,
    pub artifacts: Vec<ArtifactRecord>,
    pub warnings: Vec<Warning>,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Serialize)]
pub struct InputInfo {
    pub project_root: PathBuf,
    pub language: Language,
    pub framework: Framework,
    pub provider: Provider,
    pub api_key_env: String,
    pub goal: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct ArtifactRecord {
    pub rel_path: String,
    pub status: ArtifactStatus,
}

#[derive(Debug, Serialize, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactStatus {
    Created,
    Exists,
    Overwritten,
    Merged,
}

#[derive(Debug, Serialize, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    TargetNotEmpty,
    ArtifactExists,
    ToolMissing,
    GitInit,
}

#[derive(Debug, Serialize, Clone)]
pub struct Diagnostics {
    pub project_root: PathBuf,
    pub entry_point: String,
    pub artifacts_written: usize,
    pub artifacts_skipped: usize,
    pub files_total: usize,
    pub warnings_count: usize,
}
