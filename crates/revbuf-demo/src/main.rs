#![forbid(unsafe_code)]

//! Replays a short editing session and prints the content after each step.
//!
//! Set `RUST_LOG=revbuf=trace` to see every recorded edit and undo.

use revbuf::Editor;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Run the walkthrough, returning `(content, label)` after every step.
fn walkthrough() -> revbuf::Result<Vec<(String, &'static str)>> {
    let mut steps = Vec::new();
    let mut editor = Editor::from_text("Hello");
    let mut record = |editor: &Editor, label: &'static str| {
        info!(content = %editor, depth = editor.history_depth(), "{label}");
        steps.push((editor.to_string(), label));
    };

    record(&editor, "initial state");
    editor.undo();
    record(&editor, "Undo on initial state");
    editor.append('!');
    record(&editor, "Append '!'");
    editor.undo();
    record(&editor, "Undo appending '!'");
    editor.append('!');
    record(&editor, "Append '!' once again");
    editor.insert(5, ", World")?;
    record(&editor, "Insert ', World'");
    editor.undo();
    record(&editor, "Undo inserting ', World'");
    editor.undo();
    record(&editor, "Undo appending '!'");
    editor.undo();
    record(&editor, "Undo on initial state again");

    Ok(steps)
}

/// `RUST_LOG` when it is set and parses, otherwise `info`.
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> revbuf::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    for (content, label) in walkthrough()? {
        println!("{content} - {label}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn log_filter_respects_rust_log() {
        assert_eq!(
            log_filter(Some("warn".to_string())).max_level_hint(),
            Some(LevelFilter::WARN)
        );
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            log_filter(Some("revbuf=loudest".to_string())).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn walkthrough_outputs() {
        let lines: Vec<String> = walkthrough()
            .unwrap()
            .into_iter()
            .map(|(content, label)| format!("{content} - {label}"))
            .collect();
        assert_eq!(
            lines,
            vec![
                "Hello - initial state",
                "Hello - Undo on initial state",
                "Hello! - Append '!'",
                "Hello - Undo appending '!'",
                "Hello! - Append '!' once again",
                "Hello, World! - Insert ', World'",
                "Hello! - Undo inserting ', World'",
                "Hello - Undo appending '!'",
                "Hello - Undo on initial state again",
            ]
        );
    }
}
