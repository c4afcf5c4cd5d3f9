use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

/// Bottom-of-screen area that is redrawn in place (spinner lines)
#[derive(Debug, Default)]
pub struct LiveRegion {
    last_lines: usize,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> usize {
        self.last_lines
    }

    pub fn clear(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.update(out, "")
    }

    /// Print `line` above the region so it scrolls away normally, then redraw
    /// `content` below it
    pub fn println(&mut self, out: &mut impl Write, line: &str, content: &str) -> io::Result<()> {
        self.erase(out)?;
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        self.last_lines = 0;
        self.update(out, content)
    }

    pub fn update(&mut self, out: &mut impl Write, content: &str) -> io::Result<()> {
        self.erase(out)?;

        let mut content = content.to_string();
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        out.write_all(content.as_bytes())?;
        out.flush()?;

        self.last_lines = content.matches('\n').count();
        Ok(())
    }

    fn erase(&mut self, out: &mut impl Write) -> io::Result<()> {
        let lines = self.last_lines.min(u16::MAX as usize) as u16;
        if lines == 0 {
            return Ok(());
        }

        out.queue(cursor::MoveUp(lines))?;
        for _ in 0..lines {
            out.queue(cursor::MoveToColumn(0))?;
            out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
            out.queue(cursor::MoveDown(1))?;
        }
        out.queue(cursor::MoveUp(lines))?;
        out.queue(cursor::MoveToColumn(0))?;
        self.last_lines = 0;
        Ok(())
    }
}
