use crate::models::CLIConfig;

pub fn banner(cfg: &CLIConfig) {
    println!("Caption Debug CLI");
    println!("API: {}", cfg.base_url);
}

/// Splits generated text on `---` lines into trimmed, non-empty variations.
pub fn split_variations(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for line in text.lines() {
        if line.trim() == "---" {
            push_block(&mut out, &current);
            current.clear();
        } else {
            current.push(line);
        }
    }
    push_block(&mut out, &current);
    out
}

fn push_block(out: &mut Vec<String>, lines: &[&str]) {
    let block = lines.join("\n").trim().to_string();
    if !block.is_empty() {
        out.push(block);
    }
}

pub fn captions(text: &str) {
    for (idx, variation) in split_variations(text).iter().enumerate() {
        println!();
        println!("[{}]", idx + 1);
        println!("{}", variation);
    }
}

pub fn error(msg: &str) {
    eprintln!("error: {}", msg);
}
