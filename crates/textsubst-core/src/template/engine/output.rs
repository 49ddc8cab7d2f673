//! Output sink with evaluator-visible formatting state

use std::fmt::Display;
use std::io::{self, Write};

/// Placement of a value inside a padded field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    #[default]
    Right,
    Center,
}

/// Formatting applied by [`Output::put`]
///
/// The default writes values exactly as their `Display` impl does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    /// Minimum field width in characters
    pub width: usize,
    pub precision: Option<usize>,
    pub fill: char,
    pub align: Align,
    /// Always print a sign for numbers
    pub sign_plus: bool,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            width: 0,
            precision: None,
            fill: ' ',
            align: Align::Right,
            sign_plus: false,
        }
    }
}

impl Format {
    fn is_plain(&self) -> bool {
        self.width == 0 && self.precision.is_none() && !self.sign_plus
    }
}

/// Where a template expands to
///
/// Wraps any `io::Write` and carries a [`Format`] that evaluators may change
/// freely: the template restores it after every evaluator returns, so a
/// width set for one variable never leaks into the next.
pub struct Output<'w> {
    writer: &'w mut dyn Write,
    format: Format,
}

impl<'w> Output<'w> {
    pub fn new(writer: &'w mut dyn Write) -> Self {
        Self::with_format(writer, Format::default())
    }

    pub fn with_format(writer: &'w mut dyn Write, format: Format) -> Self {
        Self { writer, format }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn format_mut(&mut self) -> &mut Format {
        &mut self.format
    }

    pub fn set_format(&mut self, format: Format) {
        self.format = format;
    }

    pub fn set_width(&mut self, width: usize) -> &mut Self {
        self.format.width = width;
        self
    }

    pub fn set_precision(&mut self, precision: Option<usize>) -> &mut Self {
        self.format.precision = precision;
        self
    }

    pub fn set_fill(&mut self, fill: char) -> &mut Self {
        self.format.fill = fill;
        self
    }

    pub fn set_align(&mut self, align: Align) -> &mut Self {
        self.format.align = align;
        self
    }

    pub fn set_sign_plus(&mut self, sign_plus: bool) -> &mut Self {
        self.format.sign_plus = sign_plus;
        self
    }

    /// Write text verbatim, ignoring the current format
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    /// Write raw bytes, ignoring the current format
    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)
    }

    /// Write `value` through the current format
    pub fn put<T: Display + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        let format = self.format;
        if format.is_plain() {
            return write!(self.writer, "{}", value);
        }

        let body = match (format.precision, format.sign_plus) {
            (Some(precision), true) => format!("{:+.*}", precision, value),
            (Some(precision), false) => format!("{:.*}", precision, value),
            (None, true) => format!("{:+}", value),
            (None, false) => value.to_string(),
        };
        self.write_padded(&body, format)
    }

    fn write_padded(&mut self, body: &str, format: Format) -> io::Result<()> {
        let len = body.chars().count();
        if len >= format.width {
            return self.write_str(body);
        }

        let pad = format.width - len;
        let (before, after) = match format.align {
            Align::Left => (0, pad),
            Align::Right => (pad, 0),
            Align::Center => (pad / 2, pad - pad / 2),
        };

        let mut field = String::with_capacity(body.len() + pad * format.fill.len_utf8());
        field.extend(std::iter::repeat(format.fill).take(before));
        field.push_str(body);
        field.extend(std::iter::repeat(format.fill).take(after));
        self.write_str(&field)
    }
}

impl Write for Output<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
