//! Collecting answers from files and `--set` flags.

use std::path::Path;

use anyhow::{bail, Context, Result};
use polimap_common::entities::ResponseVector;

/// Parse one `ID=VALUE` pair.
pub fn parse_assignment(raw: &str) -> Result<(String, i32)> {
    let Some((id, value)) = raw.split_once('=') else {
        bail!("expected ID=VALUE, got '{raw}'");
    };
    let id = id.trim();
    if id.is_empty() {
        bail!("missing question id in '{raw}'");
    }
    let value = value
        .trim()
        .parse::<i32>()
        .with_context(|| format!("answer for '{id}' is not an integer"))?;
    Ok((id.to_string(), value))
}

/// Read a JSON (by extension) or YAML answers file: a flat map of id → answer.
pub fn read_answers_file(path: &Path) -> Result<ResponseVector> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading answers from {}", path.display()))?;
    let responses: ResponseVector = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content)?,
        _ => serde_yaml::from_str(&content)?,
    };
    Ok(responses)
}

/// Merge file answers with `--set` pairs; later pairs win.
pub fn collect_answers(file: Option<&Path>, sets: &[String]) -> Result<ResponseVector> {
    let mut pairs: Vec<(String, i32)> = Vec::new();
    if let Some(path) = file {
        let from_file = read_answers_file(path)?;
        pairs.extend(
            from_file
                .question_ids()
                .filter_map(|id| from_file.get(id).map(|v| (id.to_string(), v))),
        );
    }
    for raw in sets {
        pairs.push(parse_assignment(raw)?);
    }
    Ok(pairs.into_iter().collect())
}
