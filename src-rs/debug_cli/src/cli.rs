use std::env;

use crate::models::{CLIConfig, CaptionRequest};

const DEFAULT_URL: &str = "http://localhost:8080";

pub fn parse_config() -> CLIConfig {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args(&args, env_or("CAPTION_URL", DEFAULT_URL.to_string()))
}

fn parse_args(args: &[String], base_url: String) -> CLIConfig {
    let mut cfg = CLIConfig {
        base_url,
        form: CaptionRequest::default(),
    };

    let mut idx = 0;
    while idx < args.len() {
        let value = args.get(idx + 1).cloned();
        let consumed = match args[idx].as_str() {
            "--base" => value.map(|v| cfg.base_url = v).is_some(),
            "--business" => value.map(|v| cfg.form.business = Some(v)).is_some(),
            "--goal" => value.map(|v| cfg.form.goal = Some(v)).is_some(),
            "--tone" => value.map(|v| cfg.form.tone = Some(v)).is_some(),
            "--notes" => value.map(|v| cfg.form.notes = Some(v)).is_some(),
            _ => false,
        };
        idx += if consumed { 2 } else { 1 };
    }

    cfg
}

fn env_or(key: &str, fallback: String) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flags_fill_the_form() {
        let cfg = parse_args(
            &args(&["--business", "padaria", "--goal", "vendas", "--tone", "divertido", "--notes", "pão de queijo"]),
            DEFAULT_URL.to_string(),
        );
        assert_eq!(cfg.base_url, DEFAULT_URL);
        assert_eq!(cfg.form.business.as_deref(), Some("padaria"));
        assert_eq!(cfg.form.goal.as_deref(), Some("vendas"));
        assert_eq!(cfg.form.tone.as_deref(), Some("divertido"));
        assert_eq!(cfg.form.notes.as_deref(), Some("pão de queijo"));
    }

    #[test]
    fn base_flag_overrides_default_and_unknown_flags_are_skipped() {
        let cfg = parse_args(&args(&["--verbose", "--base", "http://127.0.0.1:3000", "--tone"]), DEFAULT_URL.to_string());
        assert_eq!(cfg.base_url, "http://127.0.0.1:3000");
        assert!(cfg.form.tone.is_none());
        assert!(cfg.form.business.is_none());
    }
}
