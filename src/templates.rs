use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;

use crate::knowledge;
use crate::project::{ArtifactRecord, ArtifactStatus, Framework, Language, ProjectConfig};

pub const PROMPT_REGISTRY_PATH: &str = "prompts.json";
pub const SAMPLE_PROMPT_PATH: &str = "prompts/support-triage.prompt.yaml";
pub const EVAL_NOTEBOOK_PATH: &str = "tests/evaluations/prompt_eval.ipynb";
pub const SAMPLE_SCENARIO_PATH: &str = "tests/scenarios/first-conversation.scenario.yaml";

pub fn write_artifact(
    root: &Path,
    rel_path: &str,
    contents: &str,
    force: bool,
) -> Result<ArtifactRecord> {
    let path = root.join(rel_path);
    if path.exists() && !force {
        println!("  exists:  {rel_path}");
        return Ok(ArtifactRecord {
            rel_path: rel_path.to_string(),
            status: ArtifactStatus::Exists,
        });
    }
    let status = if path.exists() {
        ArtifactStatus::Overwritten
    } else {
        ArtifactStatus::Created
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tracing::debug!(path = %path.display(), "writing artifact");
    fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    match status {
        ArtifactStatus::Overwritten => println!("  updated: {rel_path}"),
        _ => println!("  created: {rel_path}"),
    }
    Ok(ArtifactRecord {
        rel_path: rel_path.to_string(),
        status,
    })
}

pub fn write_gitignore(config: &ProjectConfig, force: bool) -> Result<ArtifactRecord> {
    let language_block = match config.language {
        Language::Typescript => "node_modules/\ndist/\n",
        Language::Python => ".venv/\n__pycache__/\n*.pyc\n",
    };
    let contents = format!(".env\n.agentsmith/\n{language_block}");
    write_artifact(&config.root, ".gitignore", &contents, force)
}

pub fn write_entry_point(config: &ProjectConfig, force: bool) -> Result<ArtifactRecord> {
    let contents = match config.framework {
        Framework::Mastra => mastra_entry(config),
        Framework::Voltagent => voltagent_entry(config),
        Framework::Langgraph => langgraph_entry(config),
        Framework::Crewai => crewai_entry(config),
    };
    write_artifact(
        &config.root,
        config.language.entry_point(),
        &contents,
        force,
    )
}

fn mastra_entry(config: &ProjectConfig) -> String {
    let provider = knowledge::provider(config.provider);
    format!(
        r#"import {{ Agent }} from "@mastra/core/agent";
import {{ {model_fn} }} from "{package}";

export const agent = new Agent({{
  name: "{name}",
  instructions: "{goal}",
  model: {model_fn}("{model}"),
}});

async function main() {{
  const reply = await agent.generate("Introduce yourself and explain what you can do.");
  console.log(reply.text);
}}

main().catch((error) => {{
  console.error(error);
  process.exit(1);
}});
"#,
        model_fn = provider.ts_model_fn,
        package = provider.ts_package,
        name = escape(&config.project_name()),
        goal = escape(&config.goal),
        model = provider.default_model,
    )
}

fn voltagent_entry(config: &ProjectConfig) -> String {
    let provider = knowledge::provider(config.provider);
    format!(
        r#"import {{ VoltAgent, Agent }} from "@voltagent/core";
import {{ VercelAIProvider }} from "@voltagent/vercel-ai";
import {{ {model_fn} }} from "{package}";

const agent = new Agent({{
  name: "{name}",
  instructions: "{goal}",
  llm: new VercelAIProvider(),
  model: {model_fn}("{model}"),
}});

new VoltAgent({{
  agents: {{ agent }},
}});
"#,
        model_fn = provider.ts_model_fn,
        package = provider.ts_package,
        name = escape(&config.project_name()),
        goal = escape(&config.goal),
        model = provider.default_model,
    )
}

fn langgraph_entry(config: &ProjectConfig) -> String {
    let provider = knowledge::provider(config.provider);
    format!(
        r#"from langchain.chat_models import init_chat_model
from langgraph.prebuilt import create_react_agent

model = init_chat_model("{chat_model}")

agent = create_react_agent(
    model=model,
    tools=[],
    prompt="{goal}",
)


def main() -> None:
    result = agent.invoke(
        {{"messages": [{{"role": "user", "content": "Introduce yourself."}}]}}
    )
    print(result["messages"][-1].content)


if __name__ == "__main__":
    main()
"#,
        chat_model = provider.chat_model_id,
        goal = escape(&config.goal),
    )
}

fn crewai_entry(config: &ProjectConfig) -> String {
    let provider = knowledge::provider(config.provider);
    format!(
        r#"from crewai import Agent, Crew, Task

assistant = Agent(
    role="Assistant",
    goal="{goal}",
    backstory="A freshly scaffolded agent ready to be specialized.",
    llm="{model}",
)

intro = Task(
    description="Introduce yourself and explain what you can do.",
    expected_output="A short introduction.",
    agent=assistant,
)

crew = Crew(agents=[assistant], tasks=[intro])


def main() -> None:
    print(crew.kickoff())


if __name__ == "__main__":
    main()
"#,
        goal = escape(&config.goal),
        model = provider.litellm_id,
    )
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

pub fn write_prompt_registry(config: &ProjectConfig, force: bool) -> Result<ArtifactRecord> {
    let registry = json!({
        "version": 1,
        "prompts": [
            {
                "id": "support-triage",
                "path": SAMPLE_PROMPT_PATH,
                "description": "Starter triage prompt exercised by the sample evaluation notebook.",
            }
        ],
    });
    let contents = serde_json::to_string_pretty(&registry)
        .context("failed to serialize prompt registry")?
        + "\n";
    write_artifact(&config.root, PROMPT_REGISTRY_PATH, &contents, force)
}

#[derive(Serialize)]
struct PromptSpec {
    id: &'static str,
    model: &'static str,
    temperature: f64,
    system: String,
    user: &'static str,
}

pub fn write_sample_prompt(config: &ProjectConfig, force: bool) -> Result<ArtifactRecord> {
    let spec = PromptSpec {
        id: "support-triage",
        model: knowledge::provider(config.provider).default_model,
        temperature: 0.2,
        system: format!(
            "You are {}, an agent whose goal is: {}. Triage each incoming message and answer \
             with the next concrete step.",
            config.project_name(),
            config.goal
        ),
        user: "{{message}}",
    };
    let contents = serde_yaml_bw::to_string(&spec).context("failed to serialize prompt spec")?;
    write_artifact(&config.root, SAMPLE_PROMPT_PATH, &contents, force)
}

pub fn write_eval_notebook(config: &ProjectConfig, force: bool) -> Result<ArtifactRecord> {
    let (display_name, kernel_name, nb_language) = match config.language {
        Language::Typescript => ("Deno", "deno", "typescript"),
        Language::Python => ("Python 3", "python3", "python"),
    };
    let source: Vec<&str> = match config.language {
        Language::Typescript => vec![
            "const registry = JSON.parse(await Deno.readTextFile(\"../../prompts.json\"));\n",
            "for (const prompt of registry.prompts) {\n",
            "  console.log(`${prompt.id} -> ${prompt.path}`);\n",
            "}",
        ],
        Language::Python => vec![
            "import json\n",
            "from pathlib import Path\n",
            "\n",
            "registry = json.loads(Path(\"../../prompts.json\").read_text())\n",
            "for prompt in registry[\"prompts\"]:\n",
            "    print(prompt[\"id\"], \"->\", prompt[\"path\"])",
        ],
    };
    let notebook = json!({
        "cells": [
            {
                "cell_type": "markdown",
                "metadata": {},
                "source": [
                    format!("# Evaluating {}\n", config.project_name()),
                    "\n",
                    "Load the prompt registry, run each prompt against recorded inputs, and score the replies.",
                ],
            },
            {
                "cell_type": "code",
                "execution_count": null,
                "metadata": {},
                "outputs": [],
                "source": source,
            },
        ],
        "metadata": {
            "kernelspec": {
                "display_name": display_name,
                "language": nb_language,
                "name": kernel_name,
            },
        },
        "nbformat": 4,
        "nbformat_minor": 5,
    });
    let contents = serde_json::to_string_pretty(&notebook)
        .context("failed to serialize evaluation notebook")?
        + "\n";
    write_artifact(&config.root, EVAL_NOTEBOOK_PATH, &contents, force)
}

#[derive(Serialize)]
struct ScenarioSpec {
    name: &'static str,
    description: String,
    steps: Vec<ScenarioStep>,
}

#[derive(Serialize)]
struct ScenarioStep {
    user: &'static str,
    expect: Vec<Expectation>,
}

#[derive(Serialize)]
struct Expectation {
    contains: String,
}

pub fn write_sample_scenario(config: &ProjectConfig, force: bool) -> Result<ArtifactRecord> {
    let keyword = config
        .goal
        .split_whitespace()
        .next()
        .unwrap_or("help")
        .to_lowercase();
    let spec = ScenarioSpec {
        name: "first-conversation",
        description: format!(
            "A new user asks {} what it does; the reply should reflect the goal: {}.",
            config.project_name(),
            config.goal
        ),
        steps: vec![ScenarioStep {
            user: "Hello! What can you help me with?",
            expect: vec![Expectation { contains: keyword }],
        }],
    };
    let contents =
        serde_yaml_bw::to_string(&spec).context("failed to serialize scenario spec")?;
    write_artifact(&config.root, SAMPLE_SCENARIO_PATH, &contents, force)
}

pub fn write_env_files(config: &ProjectConfig, force: bool) -> Result<Vec<ArtifactRecord>> {
    let env_var = config.provider.env_var();
    let env = write_artifact(
        &config.root,
        ".env",
        &format!("{env_var}={}\n", config.api_key),
        force,
    )?;
    let example = write_artifact(&config.root, ".env.example", &format!("{env_var}=\n"), force)?;
    Ok(vec![env, example])
}
