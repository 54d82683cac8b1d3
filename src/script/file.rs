//! Command stream files

use super::parser::parse_line;
use crate::{
    errors::{LineError, SimpleError},
    turtle::{Cursor, DrawCommand},
};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::Path,
};

/// Parsed command stream
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandScript {
    commands: Vec<DrawCommand>,
    /// Source line of each command
    lines: Vec<u64>,
}

impl CommandScript {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LineError> {
        let path = path.as_ref();
        let fd = File::open(path).map_err(|e| {
            SimpleError(format!("Can't open '{}': {e}", path.display())).no_line()
        })?;
        Self::read(BufReader::new(fd))
    }

    pub fn parse(text: &str) -> Result<Self, LineError> {
        Self::read(text.as_bytes())
    }

    fn read(fd: impl BufRead) -> Result<Self, LineError> {
        let mut script = Self::default();
        for (n, line) in (1..).zip(fd.lines()) {
            let line = line.map_err(|e| SimpleError(format!("Read error: {e}")).at_line(n))?;
            if let Some(cmd) = parse_line(&line).map_err(|e| e.at_line(n))? {
                script.commands.push(cmd);
                script.lines.push(n);
            }
        }
        Ok(script)
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands along with their source line numbers
    pub fn numbered(&self) -> impl Iterator<Item = (u64, &DrawCommand)> + '_ {
        self.lines.iter().copied().zip(&self.commands)
    }

    /// Execute every command on `cursor`, failing at the offending line
    pub fn replay(&self, cursor: &mut Cursor) -> Result<(), LineError> {
        for (line, cmd) in self.numbered() {
            cursor
                .execute(cmd)
                .map_err(|e| SimpleError::from(e).at_line(line))?;
        }
        Ok(())
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Write `commands` in the line format, preceded by a comment header
    pub fn write(commands: &[DrawCommand], mut fd: impl Write) -> io::Result<()> {
        writeln!(fd, "# koch-polygon command stream, {} commands", commands.len())?;
        for cmd in commands {
            writeln!(fd, "{cmd}")?;
        }
        fd.flush()
    }

    pub fn save(commands: &[DrawCommand], path: impl AsRef<Path>) -> io::Result<()> {
        let fd = File::create(path)?;
        Self::write(commands, io::BufWriter::new(fd))
    }
}
