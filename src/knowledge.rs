use crate::project::{Framework, Provider};

pub struct FrameworkKnowledge {
    pub run: &'static str,
    pub docs_url: &'static str,
    pub orientation: &'static str,
}

pub fn framework(framework: Framework) -> &'static FrameworkKnowledge {
    match framework {
        Framework::Mastra => &FrameworkKnowledge {
            run: "npx tsx src/index.ts",
            docs_url: "https://mastra.ai/docs",
            orientation: "Agents are declared with new Agent({...}) and registered on a Mastra \
                          instance; tools and workflows hang off the same instance.",
        },
        Framework::Voltagent => &FrameworkKnowledge {
            run: "npx tsx src/index.ts",
            docs_url: "https://voltagent.dev/docs",
            orientation: "Agents are declared with new Agent({...}) and served by a VoltAgent \
                          instance; the Vercel AI provider adapts model calls.",
        },
        Framework::Langgraph => &FrameworkKnowledge {
            run: "python app/main.py",
            docs_url: "https://langchain-ai.github.io/langgraph/",
            orientation: "Agents are graphs of nodes over a shared state; \
                          create_react_agent gives a prebuilt tool-calling loop.",
        },
        Framework::Crewai => &FrameworkKnowledge {
            run: "python app/main.py",
            docs_url: "https://docs.crewai.com",
            orientation: "Work is organized as a Crew of role-playing Agents executing Tasks; \
                          crew.kickoff() runs the pipeline.",
        },
    }
}

pub fn install_command(fw: Framework, llm: Provider) -> String {
    let info = provider(llm);
    match fw {
        Framework::Mastra => format!("npm install @mastra/core {}", info.ts_package),
        Framework::Voltagent => format!(
            "npm install @voltagent/core @voltagent/vercel-ai {}",
            info.ts_package
        ),
        Framework::Langgraph => format!("uv pip install langgraph langchain {}", info.py_package),
        Framework::Crewai => "uv pip install crewai".to_string(),
    }
}

pub struct ProviderKnowledge {
    pub default_model: &'static str,
    pub ts_package: &'static str,
    pub ts_model_fn: &'static str,
    pub py_package: &'static str,
    pub chat_model_id: &'static str,
    pub litellm_id: &'static str,
}

pub fn provider(provider: Provider) -> &'static ProviderKnowledge {
    match provider {
        Provider::Openai => &ProviderKnowledge {
            default_model: "gpt-4o",
            ts_package: "@ai-sdk/openai",
            ts_model_fn: "openai",
            py_package: "langchain-openai",
            chat_model_id: "openai:gpt-4o",
            litellm_id: "openai/gpt-4o",
        },
        Provider::Anthropic => &ProviderKnowledge {
            default_model: "claude-sonnet-4-5",
            ts_package: "@ai-sdk/anthropic",
            ts_model_fn: "anthropic",
            py_package: "langchain-anthropic",
            chat_model_id: "anthropic:claude-sonnet-4-5",
            litellm_id: "anthropic/claude-sonnet-4-5",
        },
        Provider::Google => &ProviderKnowledge {
            default_model: "gemini-2.0-flash",
            ts_package: "@ai-sdk/google",
            ts_model_fn: "google",
            py_package: "langchain-google-genai",
            chat_model_id: "google_genai:gemini-2.0-flash",
            litellm_id: "gemini/gemini-2.0-flash",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_model_ids_carry_the_default_model() {
        for p in [Provider::Openai, Provider::Anthropic, Provider::Google] {
            let info = provider(p);
            assert!(info.chat_model_id.ends_with(info.default_model));
            assert!(info.litellm_id.ends_with(info.default_model));
        }
    }

    #[test]
    fn run_commands_match_the_framework_language() {
        for f in [Framework::Mastra, Framework::Voltagent] {
            assert!(framework(f).run.contains("src/index.ts"));
        }
        for f in [Framework::Langgraph, Framework::Crewai] {
            assert!(framework(f).run.contains("app/main.py"));
        }
    }

    #[test]
    fn install_commands_pull_the_provider_package() {
        let cmd = install_command(Framework::Mastra, Provider::Anthropic);
        assert!(cmd.starts_with("npm install"));
        assert!(cmd.contains("@ai-sdk/anthropic"));

        let cmd = install_command(Framework::Langgraph, Provider::Google);
        assert!(cmd.starts_with("uv pip install"));
        assert!(cmd.contains("langchain-google-genai"));

        assert_eq!(
            install_command(Framework::Crewai, Provider::Openai),
            "uv pip install crewai"
        );
    }
}
