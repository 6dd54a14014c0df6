use std::io::{
    BufRead,
    Write,
};

use anyhow::Context;
use log::debug;
use serde::Serialize;

use crate::data_structs::Gff3Record;

/// Reads one JSON-encoded [`Gff3Record`] per line. Blank lines are skipped.
pub struct RecordReader<R: BufRead> {
    reader:      R,
    line:        String,
    line_number: usize,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
        }
    }

    /// Number of lines consumed so far.
    pub fn line_number(&self) -> usize { self.line_number }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = anyhow::Result<Gff3Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {},
                Err(e) => {
                    return Some(Err(e).with_context(|| {
                        format!("Failed to read line {}", self.line_number + 1)
                    }))
                },
            }
            self.line_number += 1;

            let trimmed = self.line.trim();
            if trimmed.is_empty() {
                continue;
            }
            return Some(
                serde_json::from_str::<Gff3Record>(trimmed).with_context(|| {
                    format!("Malformed record on line {}", self.line_number)
                }),
            );
        }
    }
}

/// Writes one JSON object per line.
pub struct ItemWriter<W: Write> {
    writer:  W,
    written: usize,
}

impl<W: Write> ItemWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
        }
    }

    pub fn write_item<T: Serialize>(
        &mut self,
        item: &T,
    ) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.writer, item)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    pub fn write_all<'a, T, I>(
        &mut self,
        items: I,
    ) -> anyhow::Result<()>
    where
        T: Serialize + 'a,
        I: IntoIterator<Item = &'a T>, {
        for item in items {
            self.write_item(item)?;
        }
        Ok(())
    }

    pub fn written(&self) -> usize { self.written }

    /// Flushes the underlying writer and returns the number of items
    /// written.
    pub fn finish(mut self) -> anyhow::Result<usize> {
        self.writer.flush()?;
        debug!("Wrote {} items", self.written);
        Ok(self.written)
    }
}
