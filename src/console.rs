use std::io::{self, Write};

use tracing::warn;

use centros_search::{Container, DisplayRegion, Element};

// results container that echoes every render to stdout
#[derive(Clone, Debug, Default)]
pub struct ConsoleRegion {
    inner: Container,
}

impl ConsoleRegion {
    pub fn new() -> Self {
        Self::default()
    }
}

fn print_lines<'a>(
    out: &mut impl Write,
    header: bool,
    lines: impl IntoIterator<Item = &'a Element>,
) -> io::Result<()> {
    if header {
        writeln!(out, "---")?;
    }
    for element in lines {
        writeln!(out, "{}", element.text)?;
    }
    out.flush()
}

impl DisplayRegion for ConsoleRegion {
    fn clear(&self) {
        self.inner.clear();
    }

    fn append_child(&self, element: Element) {
        if let Err(error) = print_lines(&mut io::stdout().lock(), false, [&element]) {
            warn!(%error, "Failed to print result");
        }
        self.inner.append_child(element);
    }

    fn children(&self) -> Vec<Element> {
        self.inner.children()
    }

    fn replace_children(&self, elements: Vec<Element>) {
        // stdout stays locked so two renders never interleave their lines
        let mut out = io::stdout().lock();

        if let Err(error) = print_lines(&mut out, true, &elements) {
            warn!(%error, "Failed to print results");
        }

        self.inner.replace_children(elements);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn prints_separator_then_lines() {
        let mut out = Vec::new();
        let elements = vec![Element::text("A - X"), Element::text("B - Y")];

        print_lines(&mut out, true, &elements).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "---\nA - X\nB - Y\n");
    }

    #[test]
    fn write_errors_are_returned() {
        let err = print_lines(&mut BrokenPipe, true, &[Element::text("A - X")]).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
