//! Output sinks for value enumeration.
//!
//! `print_vertex_vals` does not care where values go; it only needs something
//! that accepts one value at a time. Writing lines to standard output is the
//! usual choice, collecting into a `Vec` is what tests want, and `Tee` does
//! both at once.

use core::convert::Infallible;
use core::fmt::Display;
use std::io::{self, Write};

/// Something that accepts a stream of vertex values.
pub trait VertexSink<T: ?Sized> {
    /// Error raised when a value cannot be accepted.
    type Error;

    /// Accepts one value.
    ///
    /// # Errors
    /// Returns `Self::Error` if the underlying destination rejects the value.
    fn emit(&mut self, value: &T) -> Result<(), Self::Error>;
}

impl<T: Clone> VertexSink<T> for Vec<T> {
    type Error = Infallible;

    #[inline]
    fn emit(&mut self, value: &T) -> Result<(), Self::Error> {
        self.push(value.clone());
        Ok(())
    }
}

impl<T: ?Sized, S: VertexSink<T> + ?Sized> VertexSink<T> for &mut S {
    type Error = S::Error;

    #[inline]
    fn emit(&mut self, value: &T) -> Result<(), Self::Error> {
        (**self).emit(value)
    }
}

/// Writes each value on its own line using its `Display` form.
#[derive(Debug)]
pub struct LineSink<W> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flushes and returns the writer.
    ///
    /// # Errors
    /// Returns the I/O error from the final flush.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl LineSink<io::Stdout> {
    /// A sink over the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<T: Display + ?Sized, W: Write> VertexSink<T> for LineSink<W> {
    type Error = io::Error;

    fn emit(&mut self, value: &T) -> Result<(), Self::Error> {
        writeln!(self.writer, "{value}")
    }
}

/// Forwards every value to two sinks, first `A` then `B`.
#[derive(Debug)]
pub struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A, B> Tee<A, B> {
    /// Pairs two sinks.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Splits the tee back into its sinks.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

/// Which half of a [`Tee`] failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeeError<A, B> {
    /// The first sink rejected the value; the second never saw it.
    First(A),
    /// The second sink rejected the value after the first accepted it.
    Second(B),
}

impl<A: Display, B: Display> Display for TeeError<A, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TeeError::First(err) => write!(f, "first sink failed: {err}"),
            TeeError::Second(err) => write!(f, "second sink failed: {err}"),
        }
    }
}

impl<A, B> std::error::Error for TeeError<A, B>
where
    A: std::error::Error + 'static,
    B: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TeeError::First(err) => Some(err),
            TeeError::Second(err) => Some(err),
        }
    }
}

impl<T, A, B> VertexSink<T> for Tee<A, B>
where
    T: ?Sized,
    A: VertexSink<T>,
    B: VertexSink<T>,
{
    type Error = TeeError<A::Error, B::Error>;

    fn emit(&mut self, value: &T) -> Result<(), Self::Error> {
        self.first.emit(value).map_err(TeeError::First)?;
        self.second.emit(value).map_err(TeeError::Second)
    }
}
