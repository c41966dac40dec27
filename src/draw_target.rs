use std::fmt;
use std::fs::File;
use std::io::{self, Write};

use console::{measure_text_width, Term};

use crate::TermLike;

/// Target for draw operations
///
/// This tells a progress tracker where to paint to. Every kind receives exactly the same bytes;
/// they only differ in how the write is made durable afterwards:
///
/// * terminals and term-likes are flushed,
/// * files are synced to disk with [`File::sync_data`],
/// * arbitrary writers are flushed with [`Write::flush`],
/// * hidden targets drop everything.
///
/// A failing flush or sync is reported the same way as a failing write.
pub struct DrawTarget {
    kind: TargetKind,
    /// Visible width of the last line written, zero if nothing has been drawn yet.
    last_line_width: usize,
}

enum TargetKind {
    Term(Term),
    File(File),
    Writer(Box<dyn Write + Send>),
    TermLike(Box<dyn TermLike>),
    Hidden,
}

impl DrawTarget {
    /// Draw to stdout. This is the default draw target for trackers.
    pub fn stdout() -> Self {
        Self::term(Term::stdout())
    }

    /// Draw to stderr.
    pub fn stderr() -> Self {
        Self::term(Term::stderr())
    }

    /// Draw to a [`console::Term`].
    ///
    /// The bar is drawn even when the terminal is not user attended.
    pub fn term(term: Term) -> Self {
        Self::new(TargetKind::Term(term))
    }

    /// Draw to a file, syncing it to disk after each line.
    pub fn file(file: File) -> Self {
        Self::new(TargetKind::File(file))
    }

    /// Draw to any writer, flushing it after each line.
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Self::new(TargetKind::Writer(Box::new(writer)))
    }

    /// Draw to a boxed object that implements the [`TermLike`] trait.
    pub fn term_like(term_like: Box<dyn TermLike>) -> Self {
        Self::new(TargetKind::TermLike(term_like))
    }

    /// A hidden draw target.
    ///
    /// This forces a progress tracker to be not rendered at all. Writes never fail.
    pub fn hidden() -> Self {
        Self::new(TargetKind::Hidden)
    }

    fn new(kind: TargetKind) -> Self {
        Self {
            kind,
            last_line_width: 0,
        }
    }

    /// Returns true if the draw target is hidden.
    pub fn is_hidden(&self) -> bool {
        matches!(self.kind, TargetKind::Hidden)
    }

    /// True once a line has been drawn that has not been cleared since.
    pub(crate) fn has_drawn(&self) -> bool {
        self.last_line_width > 0
    }

    /// Writes `line` and makes it durable according to the target kind.
    pub(crate) fn draw(&mut self, line: &str) -> io::Result<()> {
        self.write_flushed(line)?;
        self.last_line_width = measure_text_width(line.trim_start_matches('\r'));
        Ok(())
    }

    /// Blanks out the last drawn line and moves the cursor back to its start.
    pub(crate) fn clear(&mut self) -> io::Result<()> {
        if !self.has_drawn() {
            return Ok(());
        }
        let blank = format!("\r{}\r", " ".repeat(self.last_line_width));
        self.write_flushed(&blank)?;
        self.last_line_width = 0;
        Ok(())
    }

    fn write_flushed(&mut self, s: &str) -> io::Result<()> {
        match self.kind {
            TargetKind::Term(ref term) => {
                term.write_str(s)?;
                term.flush()
            }
            TargetKind::File(ref mut file) => {
                file.write_all(s.as_bytes())?;
                file.sync_data()
            }
            TargetKind::Writer(ref mut writer) => {
                writer.write_all(s.as_bytes())?;
                writer.flush()
            }
            TargetKind::TermLike(ref term_like) => {
                term_like.write_str(s)?;
                term_like.flush()
            }
            TargetKind::Hidden => Ok(()),
        }
    }
}

impl Default for DrawTarget {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for DrawTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            TargetKind::Term(_) => "Term",
            TargetKind::File(_) => "File",
            TargetKind::Writer(_) => "Writer",
            TargetKind::TermLike(_) => "TermLike",
            TargetKind::Hidden => "Hidden",
        };
        f.debug_struct("DrawTarget")
            .field("kind", &kind)
            .field("last_line_width", &self.last_line_width)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Seek, SeekFrom};
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn hidden_swallows_everything() {
        let mut target = DrawTarget::hidden();
        assert!(target.is_hidden());
        target.draw("\r  10% |    |").unwrap();
        target.clear().unwrap();
    }

    #[test]
    fn clear_blanks_the_previous_line() {
        let buffer = Buffer::default();
        let mut target = DrawTarget::writer(buffer.clone());
        assert!(!target.has_drawn());

        target.clear().unwrap();
        assert!(buffer.0.lock().unwrap().is_empty());

        target.draw("\r 50% |██  |").unwrap();
        assert!(target.has_drawn());
        target.clear().unwrap();
        assert!(!target.has_drawn());

        let written = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, format!("\r 50% |██  |\r{}\r", " ".repeat(11)));
    }

    struct UnflushableWriter;

    impl Write for UnflushableWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn flush_errors_fail_the_draw() {
        let mut target = DrawTarget::writer(UnflushableWriter);
        let err = target.draw("\r  10% |#   |").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(!target.has_drawn());
    }

    #[test]
    fn file_target_is_written() {
        let path = std::env::temp_dir().join(format!("linebar-draw-target-{}", std::process::id()));
        let file = File::options()
            .create(true)
            .truncate(true)
            .read(true)
            .write(true)
            .open(&path)
            .unwrap();
        let mut reader = file.try_clone().unwrap();
        let mut target = DrawTarget::file(file);
        target.draw("\r 100% |#|").unwrap();

        let mut contents = String::new();
        reader.seek(SeekFrom::Start(0)).unwrap();
        reader.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "\r 100% |#|");
        std::fs::remove_file(path).unwrap();
    }
}
