use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use log::debug;
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::Editor;

fn history_file() -> Result<PathBuf> {
    let dir = directories::ProjectDirs::from("github", "jagged", "jagged")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_default();
    fs::create_dir_all(&dir)?;
    Ok(dir.join("history"))
}

/// The REPL over rustyline, keeping line history between runs.
pub fn drive() -> Result<()> {
    let history = history_file()?;
    let mut editor = Editor::<()>::new()?;
    if history.exists() {
        editor.load_history(&history)?;
    }
    editor.set_auto_add_history(true);

    super::repl(|| match editor.readline("   ") {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
        Err(other) => Err(other.into()),
    })?;

    debug!("saving history to {}", history.display());
    editor.save_history(&history)?;
    Ok(())
}
