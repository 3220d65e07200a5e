use std::io::{self, Write};

use anyhow::Result;
use verbtab::RenderOutput;

/// Write rows as plain text, one verb per line with matches in brackets.
pub(crate) fn write_rows(out: &mut impl Write, output: &RenderOutput) -> Result<()> {
    match output {
        RenderOutput::Rows(rows) => {
            for row in rows {
                writeln!(out, "{}", row.marked_line())?;
            }
        }
        RenderOutput::Empty => writeln!(out, "{}", verbtab::render::EMPTY_MESSAGE)?,
        RenderOutput::Error(message) => writeln!(out, "Error: {message}")?,
    }
    Ok(())
}

pub(crate) fn print_rows(output: &RenderOutput) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_rows(&mut handle, output)?;
    handle.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use verbtab::{Renderer, VerbCollection, VerbRecord};

    use super::*;

    #[test]
    fn rows_are_written_with_markers() {
        let verbs: VerbCollection = vec![VerbRecord::new("go", "went", "gone", "идти")].into();
        let output = Renderer::new().render(&verbs, "go", false);
        let mut buffer = Vec::new();
        write_rows(&mut buffer, &output).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "[go] | went | [go]ne | идти\n"
        );
    }

    #[test]
    fn empty_output_prints_message() {
        let mut buffer = Vec::new();
        write_rows(&mut buffer, &RenderOutput::Empty).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "No verbs found\n");
    }
}
