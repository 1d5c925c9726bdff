use std::collections::HashMap;
use anyhow::{anyhow, Context, Result};

use crate::model::task::Priority;

pub const KNOWN_KEYS: &[&str] = &["priority"];

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub title: String,
    pub metadata: HashMap<String, String>,
}

/// A task described on the command line, not yet in a store.
#[derive(Debug, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub priority: Priority,
}

pub fn parse_args<S: AsRef<str>>(args: &[S]) -> ParsedInput {
    let mut title_parts = Vec::new();
    let mut metadata = HashMap::new();

    for arg in args {
        let arg = arg.as_ref();
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                metadata.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        title_parts.push(arg);
    }

    ParsedInput {
        title: title_parts.join(" "),
        metadata,
    }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

/// Parses `"Buy milk pri:high"` style input.
pub fn parse_task_spec(spec: &str) -> Result<NewTask> {
    let words: Vec<&str> = spec.split_whitespace().collect();
    let parsed = parse_args(&words);

    if parsed.title.is_empty() {
        return Err(anyhow!("Task title is required in '{}'", spec));
    }

    let mut priority = Priority::default();
    for (key, value) in &parsed.metadata {
        match expand_key(key, KNOWN_KEYS)?.as_str() {
            "priority" => {
                priority = Priority::parse_alias(value)
                    .with_context(|| format!("Invalid priority in '{}'", spec))?;
            }
            other => return Err(anyhow!("Unhandled key: '{}'", other)),
        }
    }

    Ok(NewTask {
        title: parsed.title,
        priority,
    })
}
