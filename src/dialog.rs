use std::fs;

use tracing::warn;

use crate::config::Config;

/// Scripted inputs for a non-interactive run. Empty means "read stdin".
pub fn load_inputs(cfg: &Config) -> Vec<String> {
    if let Some(path) = cfg.inputs.as_deref() {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let lines = non_empty_lines(contents.lines());
                if !lines.is_empty() {
                    return lines;
                }
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read inputs file");
            }
        }
    }

    if let Some(script) = cfg.script.as_ref() {
        let parts = non_empty_lines(script.split(';'));
        if !parts.is_empty() {
            return parts;
        }
    }

    Vec::new()
}

fn non_empty_lines<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    items
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}
