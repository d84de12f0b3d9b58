//! `.env` loading (KEY=VALUE lines). Variables already set win.

use std::path::PathBuf;

/// Load the first `.env` found in the current directory or the workspace root.
pub fn load_dotenv() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        PathBuf::from(".env"),
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for (key, value) in parse_dotenv(&contents) {
                if std::env::var_os(&key).is_none() {
                    std::env::set_var(key, value);
                }
            }
            return;
        }
    }
}

/// Parse `.env` content. Blank lines, comments, and lines without `=` are skipped.
pub fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_lines() {
        let vars = parse_dotenv("OPENAI_API_KEY=sk-1\nOPENAI_MODEL = o1\n");
        assert_eq!(
            vars,
            vec![
                ("OPENAI_API_KEY".to_string(), "sk-1".to_string()),
                ("OPENAI_MODEL".to_string(), "o1".to_string()),
            ]
        );
    }

    #[test]
    fn skips_comments_blanks_and_garbage() {
        let vars = parse_dotenv("# comment\n\nnot a pair\n=novalue\nA=1\n");
        assert_eq!(vars, vec![("A".to_string(), "1".to_string())]);
    }

    #[test]
    fn strips_quotes_and_export() {
        let vars = parse_dotenv("export A=\"x y\"\nB='z'\n");
        assert_eq!(vars[0], ("A".to_string(), "x y".to_string()));
        assert_eq!(vars[1], ("B".to_string(), "z".to_string()));
    }

    #[test]
    fn value_may_contain_equals() {
        let vars = parse_dotenv("URL=http://host/?a=b\n");
        assert_eq!(vars[0].1, "http://host/?a=b");
    }
}
