//! Interactive session on top of rustyline

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::session::{Action, Session};

const PROMPT: &str = "trellis> ";

/// Read commands until `quit` or end of input.
pub fn run(session: &mut Session) -> Result<()> {
    let mut editor = DefaultEditor::new()?;

    println!(
        "{}x{} trellis, slots a-{}. Type 'help' for commands.",
        session.trellis.height(),
        session.trellis.width(),
        session.trellis.alphabet().last()
    );
    println!("{}", session.trellis.render(session.style));

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                match Action::parse_line(&line) {
                    Ok(None) => {}
                    Ok(Some(Action::Quit)) => break,
                    Ok(Some(action)) => match session.execute(action) {
                        Ok(out) if out.is_empty() => {}
                        Ok(out) => println!("{}", out),
                        Err(err) => eprintln!("error: {:#}", err),
                    },
                    Err(err) => eprintln!("error: {}", err),
                }
            }
            Err(ReadlineError::Interrupted) => {
                log::debug!("interrupted at prompt");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
