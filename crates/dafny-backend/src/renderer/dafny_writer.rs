// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Simple writer for generating Dafny text.

use std::fmt::{self, Display, Write};

/// Writer context for generating Dafny code.
pub struct DafnyWriter<W: Write> {
    out: W,
}

impl<W: Write> DafnyWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a string.
    pub fn write(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }

    /// Write a displayable value.
    pub fn emit(&mut self, value: impl Display) -> fmt::Result {
        write!(self.out, "{value}")
    }

    pub fn newline(&mut self) -> fmt::Result {
        self.out.write_char('\n')
    }

    /// Write items with a separator, using a custom render function for each item.
    /// Example: `w.sep_with(", ", &items, |w, item| w.write(&item.name))`
    pub fn sep_with<I, T, F>(&mut self, separator: &str, items: I, mut render: F) -> fmt::Result
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut Self, T) -> fmt::Result,
    {
        let mut first = true;
        for item in items {
            if !first {
                self.write(separator)?;
            }
            first = false;
            render(self, item)?;
        }
        Ok(())
    }

    /// Write items each on their own line using a render function.
    pub fn lines_with<I, T, F>(&mut self, items: I, mut render: F) -> fmt::Result
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut Self, T) -> fmt::Result,
    {
        for item in items {
            render(self, item)?;
            self.newline()?;
        }
        Ok(())
    }

    /// Get the underlying writer (consumes self).
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render to a string.
pub fn render_to_string<F>(f: F) -> String
where
    F: FnOnce(&mut DafnyWriter<String>) -> fmt::Result,
{
    let mut writer = DafnyWriter::new(String::new());
    // Writing into a String cannot fail
    let _ = f(&mut writer);
    writer.into_inner()
}
