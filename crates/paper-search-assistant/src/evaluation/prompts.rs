//! Canned evaluation prompts and critic instructions.

use std::path::Path;

/// Prompts exercised by the evaluation harness, from well-formed requests to
/// ambiguous, impossible and empty ones.
pub const CANNED_PROMPTS: &[&str] = &[
    "Find research papers on 'machine learning in healthcare' published after 2020 with at least 50 citations.",
    "Search for articles about 'quantum computing algorithms' published in 2022.",
    "Show me papers on 'renewable energy sources' with a focus on solar power, minimum 20 citations.",
    "I need some good AI papers.",
    "Find me something about new tech.",
    "Latest developments in science.",
    "Find papers on 'the impact of social media on adolescent mental health' published before 2019, authored by 'Dr. Jane Doe' or 'Dr. John Smith', with over 100 citations.",
    "I'm looking for review articles on 'CRISPR gene editing applications in cancer therapy', preferably published in high-impact journals in the last 3 years.",
    "Find papers on 'time travel to the Jurassic period'.",
    "Search for research published tomorrow.",
    "Papers about 'the best programming language' with exactly 7 citations.",
    "",
];

/// System message of the critic.
pub const CRITIC_SYSTEM_MESSAGE: &str = "You are an AI assistant that evaluates the responses of a paper search agent. \
Your evaluation should be based on the following criteria: Completeness, Quality, Robustness, Consistency, and Specificity. \
Provide your evaluation in JSON format.";

const CRITIC_TEMPLATE: &str = "
You are evaluating an AI paper search agent.

Evaluate the agent's response based on these criteria, using a scale of 1-5 (1=Poor, 5=Excellent):
- Completeness: Did the agent fully address every aspect of the user's prompt? (e.g., topic, year, citations, number of papers)
- Quality: Was the response accurate (correct papers, correct details), clear, well-organized, and easy to understand?
- Robustness: How well did the agent handle ambiguous, incorrect, or challenging inputs? (e.g., did it ask for clarification, or state inability if appropriate?)
- Consistency: If multiple constraints were given, are the results consistent with all of them?
- Specificity: Did the agent offer precise details (title, authors, year, citations, URL) for each paper?

Additionally:
- Check if the agent clearly stated when no papers were found or if parameters were ignored.
- Assess if the agent interpreted ambiguous prompts reasonably or asked for clarification.
- Note if the agent defaulted to a reasonable number of results if not specified.

User Prompt: {prompt}
Agent Response: {agent_response}

Provide your evaluation as a JSON object with the following fields:
- completeness (integer, 1-5)
- quality (integer, 1-5)
- robustness (integer, 1-5)
- consistency (integer, 1-5)
- specificity (integer, 1-5)
- feedback (string, a brief descriptive explanation of the ratings, including specific examples or issues from the response. Note if the agent TERMINATED as expected.)
";

/// Fill the rubric with a prompt and the agent's response.
#[must_use]
pub fn critic_prompt(prompt: &str, agent_response: &str) -> String {
    // Substitute the response last so braces inside the prompt are never rescanned.
    let (head, tail) = CRITIC_TEMPLATE
        .split_once("{agent_response}")
        .unwrap_or((CRITIC_TEMPLATE, ""));
    let head = head.replacen("{prompt}", prompt, 1);
    format!("{head}{agent_response}{tail}")
}

/// The built-in prompt list as owned strings.
#[must_use]
pub fn default_prompts() -> Vec<String> {
    CANNED_PROMPTS.iter().map(|p| (*p).to_string()).collect()
}

/// Load prompts from a file, one per line.
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns error if the file cannot be read or holds no prompts.
pub fn load_prompts(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    let prompts: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if prompts.is_empty() {
        anyhow::bail!("no prompts found in {}", path.display());
    }
    Ok(prompts)
}
