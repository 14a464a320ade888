use std::env;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};

use crate::cli::InitArgs;
use crate::project::{Language, ProjectConfig, Provider};
use crate::validate;

pub fn collect_config(args: &InitArgs, root: PathBuf) -> Result<ProjectConfig> {
    let mut stdin = io::stdin().lock();
    collect_config_from(args, root, &mut stdin)
}

pub fn collect_config_from(
    args: &InitArgs,
    root: PathBuf,
    input: &mut dyn BufRead,
) -> Result<ProjectConfig> {
    let language = match args.language {
        Some(language) => language,
        None => prompt_choice(
            input,
            "Which language should the project use?",
            &[Language::Typescript, Language::Python],
        )?,
    };

    let framework = match args.framework {
        Some(framework) => {
            if framework.language() != language {
                bail!(
                    "{} is a {} framework, not available for {}",
                    framework.label(),
                    framework.language().label(),
                    language.label()
                );
            }
            framework
        }
        None => prompt_choice(
            input,
            &format!("Which {} agent framework?", language.label()),
            language.frameworks(),
        )?,
    };

    let provider = match args.provider {
        Some(provider) => provider,
        None => prompt_choice(
            input,
            "Which LLM provider?",
            &[Provider::Openai, Provider::Anthropic, Provider::Google],
        )?,
    };

    let api_key = resolve_api_key(input, provider, args.api_key.as_deref())?;

    let goal = match &args.goal {
        Some(goal) => {
            validate::validate_goal(goal).map_err(|message| anyhow!(message))?;
            goal.trim().to_string()
        }
        None => prompt_validated(
            input,
            "What should the agent accomplish? ",
            validate::validate_goal,
        )?,
    };

    Ok(ProjectConfig {
        root,
        language,
        framework,
        provider,
        api_key,
        goal,
    })
}

fn resolve_api_key(
    input: &mut dyn BufRead,
    provider: Provider,
    flag: Option<&str>,
) -> Result<String> {
    if let Some(key) = flag {
        validate::validate_api_key(provider, key).map_err(|message| anyhow!(message))?;
        return Ok(key.trim().to_string());
    }

    let env_var = provider.env_var();
    if let Ok(key) = env::var(env_var)
        && !key.trim().is_empty()
    {
        match validate::validate_api_key(provider, &key) {
            Ok(()) => {
                println!("Using {env_var} from the environment.");
                return Ok(key.trim().to_string());
            }
            Err(message) => println!("Ignoring {env_var}: {message}"),
        }
    }

    prompt_validated(input, &format!("{} API key: ", provider.label()), |key| {
        validate::validate_api_key(provider, key)
    })
}

fn prompt_choice<T: Copy + fmt::Display>(
    input: &mut dyn BufRead,
    question: &str,
    options: &[T],
) -> Result<T> {
    println!("{question}");
    for (idx, option) in options.iter().enumerate() {
        println!("  {}) {option}", idx + 1);
    }
    loop {
        let line = prompt_line(input, &format!("Select 1-{} [1]: ", options.len()))?;
        if line.is_empty() {
            return Ok(options[0]);
        }
        match line.parse::<usize>() {
            Ok(n) if n >= 1 && n <= options.len() => return Ok(options[n - 1]),
            _ => println!("Please enter a number between 1 and {}.", options.len()),
        }
    }
}

fn prompt_validated(
    input: &mut dyn BufRead,
    prompt: &str,
    validate: impl Fn(&str) -> Result<(), String>,
) -> Result<String> {
    loop {
        let line = prompt_line(input, prompt)?;
        match validate(&line) {
            Ok(()) => return Ok(line),
            Err(message) => println!("{message}"),
        }
    }
}

fn prompt_line(input: &mut dyn BufRead, prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;
    if read == 0 {
        bail!("input ended before all questions were answered");
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::Path;

    use super::*;
    use crate::project::Framework;

    fn args_with(api_key: Option<&str>, goal: Option<&str>) -> InitArgs {
        InitArgs {
            path: PathBuf::from("."),
            language: Some(Language::Typescript),
            framework: Some(Framework::Mastra),
            provider: Some(Provider::Openai),
            api_key: api_key.map(str::to_string),
            goal: goal.map(str::to_string),
            force: false,
            no_git: false,
        }
    }

    #[test]
    fn choice_reasks_until_a_listed_number_arrives() {
        let mut input = Cursor::new("0\nseven\n2\n");
        let picked = prompt_choice(
            &mut input,
            "Which language should the project use?",
            &[Language::Typescript, Language::Python],
        )
        .unwrap();
        assert_eq!(picked, Language::Python);
    }

    #[test]
    fn empty_choice_takes_the_first_option() {
        let mut input = Cursor::new("\n");
        let picked = prompt_choice(
            &mut input,
            "Which language should the project use?",
            &[Language::Typescript, Language::Python],
        )
        .unwrap();
        assert_eq!(picked, Language::Typescript);
    }

    #[test]
    fn validated_prompt_reasks_on_error_strings() {
        let mut input = Cursor::new("\n  \nanswer support tickets\n");
        let goal = prompt_validated(&mut input, "Goal: ", validate::validate_goal).unwrap();
        assert_eq!(goal, "answer support tickets");
    }

    #[test]
    fn prompt_line_fails_on_exhausted_input() {
        let mut input = Cursor::new("");
        let err = prompt_line(&mut input, "Goal: ").unwrap_err();
        assert!(err.to_string().contains("input ended"));
    }

    #[test]
    fn flags_bypass_all_prompts() {
        let args = args_with(Some("sk-test123"), Some("triage inbound email"));
        let mut input = Cursor::new("");
        let config =
            collect_config_from(&args, PathBuf::from("demo"), &mut input).unwrap();
        assert_eq!(config.language, Language::Typescript);
        assert_eq!(config.framework, Framework::Mastra);
        assert_eq!(config.api_key, "sk-test123");
        assert_eq!(config.goal, "triage inbound email");
        assert_eq!(config.root, Path::new("demo"));
    }

    #[test]
    fn invalid_api_key_flag_fails_instead_of_prompting() {
        let args = args_with(Some("not-a-key"), Some("triage inbound email"));
        let mut input = Cursor::new("");
        let err = collect_config_from(&args, PathBuf::from("demo"), &mut input).unwrap_err();
        assert!(err.to_string().contains("sk-"));
    }

    #[test]
    fn framework_flag_must_match_language_flag() {
        let mut args = args_with(Some("sk-test123"), Some("triage inbound email"));
        args.framework = Some(Framework::Crewai);
        let mut input = Cursor::new("");
        let err = collect_config_from(&args, PathBuf::from("demo"), &mut input).unwrap_err();
        assert!(err.to_string().contains("CrewAI"));
        assert!(err.to_string().contains("Python"));
    }
}
