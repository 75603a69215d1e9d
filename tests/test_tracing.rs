#![cfg(feature = "tracing")]

#[macro_use]
mod common;

use std::io;
use std::sync::{Arc, Mutex};

use common::*;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

#[test]
fn test_log() {
    let error = SError::wrap(SError::new("inner"), "outer").args(args!["a", 1, "b", "x"]);
    let output = capture(|| error.log());
    assert!(output.contains("ERROR"), "{}", output);
    assert!(output.contains("outer [a=1] [b='x']; inner"), "{}", output);
    assert!(output.contains("attrs=a=1 b='x'"), "{}", output);
}

#[test]
fn test_cycle_trace() {
    let error = SError::new("loop");
    let error = error.clone().err(error);
    let output = capture(|| {
        assert_str_eq!(error.to_string(), "loop");
    });
    assert!(output.contains("TRACE"), "{}", output);
    assert!(output.contains("skipped rendering of cyclic cause"), "{}", output);
}
