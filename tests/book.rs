use std::fs;

use dyad::session::Session;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dyad_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(message) = run_block(&code) {
                panic!("dyad example {} in {:?} failed:\n{}\n{}",
                       i + 1,
                       path,
                       code,
                       message);
            }
        }
    }

    assert!(count > 0, "No dyad examples found in book/src");
}

/// Feeds one fenced block through a fresh session, line by line, and fails on
/// the first line that reports a diagnostic.
fn run_block(code: &str) -> Result<(), String> {
    let mut session = Session::new();

    for line in code.lines() {
        session.submit(line);
        if !session.interpreter.diagnostics.is_empty() {
            return Err(format!("line {:?} reported: {:?}",
                               line,
                               session.interpreter.diagnostics.entries()));
        }
    }

    Ok(())
}

fn extract_dyad_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```dyad") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}
