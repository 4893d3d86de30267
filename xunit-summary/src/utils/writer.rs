use std::io::{Stderr, Stdout, Write};

/// Pair of output buffers: the report goes to `out`, diagnostics to `err`.
/// Tests swap both for in-memory vectors.
pub struct Writer {
    out: WriteBuffer,
    err: WriteBuffer,
}

impl Writer {
    pub fn new(out: WriteBuffer, err: WriteBuffer) -> Self {
        Self { out, err }
    }

    pub fn write_err(&mut self, message: String) -> std::io::Result<()> {
        writeln!(self.err, "{message}")
    }

    pub fn out_to_string(&self) -> std::io::Result<String> {
        self.out.contents()
    }

    pub fn err_to_string(&self) -> std::io::Result<String> {
        self.err.contents()
    }

    /// Report text with ANSI color sequences removed.
    pub fn stripped(&self) -> std::io::Result<String> {
        strip(self.out.contents()?)
    }

    pub fn err_to_stripped(&self) -> std::io::Result<String> {
        strip(self.err.contents()?)
    }
}

fn strip(content: String) -> std::io::Result<String> {
    let bytes = strip_ansi_escapes::strip(content)?;
    String::from_utf8(bytes).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

impl Write for Writer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }
}

pub enum WriteBuffer {
    Stdout(Stdout),
    Stderr(Stderr),
    Vec(Vec<u8>),
}

impl WriteBuffer {
    fn contents(&self) -> std::io::Result<String> {
        match self {
            WriteBuffer::Stdout(..) | WriteBuffer::Stderr(..) => Err(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "standard streams cannot be read back",
            )),
            WriteBuffer::Vec(vec) => String::from_utf8(vec.clone())
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
        }
    }
}

impl Write for WriteBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            WriteBuffer::Stdout(stdout) => stdout.write(buf),
            WriteBuffer::Stderr(stderr) => stderr.write(buf),
            WriteBuffer::Vec(vec) => vec.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            WriteBuffer::Stdout(stdout) => stdout.flush(),
            WriteBuffer::Stderr(stderr) => stderr.flush(),
            WriteBuffer::Vec(vec) => vec.flush(),
        }
    }
}
