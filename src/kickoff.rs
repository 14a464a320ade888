use std::path::Path;

use crate::knowledge;
use crate::project::ProjectConfig;

pub fn assistant_instruction(config: &ProjectConfig) -> String {
    let framework = knowledge::framework(config.framework);
    let provider = knowledge::provider(config.provider);
    format!(
        "You are working in {name}, a {language} project built on {framework_label}. \
         {orientation} The agent's goal: {goal}. Start from the entry point {entry}. Keep \
         prompt text in prompts/ and register each file in prompts.json. Add evaluations \
         under tests/evaluations/ and conversation scenarios under tests/scenarios/. Model \
         calls go through {provider_label} ({model}); the key is read from {env_var}, never \
         hardcoded. Framework docs: {docs_url}",
        name = config.project_name(),
        language = config.language.label(),
        framework_label = config.framework.label(),
        orientation = framework.orientation,
        goal = config.goal,
        entry = config.language.entry_point(),
        provider_label = config.provider.label(),
        model = provider.default_model,
        env_var = config.provider.env_var(),
        docs_url = framework.docs_url,
    )
}

pub fn next_steps(config: &ProjectConfig) -> String {
    let framework = knowledge::framework(config.framework);
    let mut steps = Vec::new();
    if config.root != Path::new(".") {
        steps.push(format!("cd {}", config.root.display()));
    }
    steps.push(knowledge::install_command(
        config.framework,
        config.provider,
    ));
    steps.push(framework.run.to_string());

    let mut out = String::from("Next steps:\n");
    for (idx, step) in steps.iter().enumerate() {
        out.push_str(&format!("  {}. {step}\n", idx + 1));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::project::{Framework, Provider};

    fn config(root: &str, framework: Framework, provider: Provider) -> ProjectConfig {
        ProjectConfig {
            root: PathBuf::from(root),
            language: framework.language(),
            framework,
            provider,
            api_key: "sk-test123".to_string(),
            goal: "summarize nightly build failures".to_string(),
        }
    }

    #[test]
    fn instruction_combines_goal_framework_and_provider() {
        let text = assistant_instruction(&config("demo", Framework::Langgraph, Provider::Google));
        assert!(text.contains("summarize nightly build failures"));
        assert!(text.contains("LangGraph"));
        assert!(text.contains("Python"));
        assert!(text.contains("app/main.py"));
        assert!(text.contains("gemini-2.0-flash"));
        assert!(text.contains("GEMINI_API_KEY"));
        assert!(text.contains("langchain-ai.github.io"));
    }

    #[test]
    fn instruction_is_a_single_line() {
        let text = assistant_instruction(&config("demo", Framework::Mastra, Provider::Openai));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn next_steps_skip_cd_for_current_dir() {
        let steps = next_steps(&config(".", Framework::Mastra, Provider::Openai));
        assert!(!steps.contains("cd "));
        assert!(steps.contains("1. npm install"));
        assert!(steps.contains("npx tsx src/index.ts"));

        let steps = next_steps(&config("demo", Framework::Crewai, Provider::Openai));
        assert!(steps.contains("1. cd demo"));
        assert!(steps.contains("2. uv pip install crewai"));
        assert!(steps.contains("3. python app/main.py"));
    }
}
