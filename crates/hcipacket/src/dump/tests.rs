//! Unit tests for hex dump formatting and diagnostic sinks

use super::sink::write_line;
use super::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::{self, Write};
use std::sync::Mutex;

/// Logger capturing records from the dump target
struct CaptureLogger {
    records: Mutex<Vec<(Level, String, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target() != "hcipacket::dump" {
            return;
        }
        if let Ok(mut records) = self.records.lock() {
            records.push((
                record.level(),
                record.target().to_string(),
                record.args().to_string(),
            ));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

/// Writer whose every write fails like a closed pipe
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "Broken pipe"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "Broken pipe"))
    }
}

#[test]
fn test_hex_dump_format() {
    assert_eq!(hex_dump(&[0x01, 0x02, 0x03], 3), "01 02 03");
    assert_eq!(hex_dump(&[0xAB, 0xcd, 0x0f], 3), "AB CD 0F");

    // Single byte has no separator
    assert_eq!(hex_dump(&[0xFF], 1), "FF");
}

#[test]
fn test_hex_dump_respects_length() {
    let buffer = [0x10, 0x20, 0x30, 0x40];

    assert_eq!(hex_dump(&buffer, 2), "10 20");
    assert_eq!(hex_dump(&buffer, 0), "");

    // Length past the end of the buffer is clamped
    assert_eq!(hex_dump(&buffer, 10), "10 20 30 40");
    assert_eq!(hex_dump(&[], 4), "");
}

#[test]
fn test_hex_dump_config() {
    let config = HexDumpConfig {
        uppercase: false,
        separator: ":".to_string(),
    };
    assert_eq!(hex_dump_with(&[0xDE, 0xAD, 0xBE, 0xEF], 4, &config), "de:ad:be:ef");

    let config = HexDumpConfig {
        uppercase: true,
        separator: String::new(),
    };
    assert_eq!(hex_dump_with(&[0xDE, 0xAD], 2, &config), "DEAD");

    let default = HexDumpConfig::default();
    assert!(default.uppercase);
    assert_eq!(default.separator, " ");
}

#[test]
fn test_vec_sink_collects_lines() {
    let mut sink: Vec<String> = Vec::new();
    sink.emit("first");
    sink.emit("second");

    assert_eq!(sink, vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn test_log_sink_level() {
    assert_eq!(LogSink::default().level, Level::Debug);
    assert_eq!(LogSink::new(Level::Info).level, Level::Info);
}

#[test]
fn test_log_sink_forwards_records() {
    // Only this test installs a logger in the test binary
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut sink = LogSink::new(Level::Info);
    sink.emit("Packet 4, channel 0, len 1: 0E");

    let mut sink = LogSink::default();
    sink.emit("Packet 1, channel 2, len 0: ");

    let records = LOGGER.records.lock().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0],
        (
            Level::Info,
            "hcipacket::dump".to_string(),
            "Packet 4, channel 0, len 1: 0E".to_string()
        )
    );
    assert_eq!(records[1].0, Level::Debug);
    assert_eq!(records[1].2, "Packet 1, channel 2, len 0: ");
}

#[test]
fn test_write_sink_collects_output() {
    let mut sink = WriteSink::new(Vec::<u8>::new());
    sink.emit("first");
    sink.emit("second");

    assert_eq!(sink.into_inner(), b"first\nsecond\n".to_vec());
}

#[test]
fn test_write_failure_does_not_panic() {
    assert!(!write_line(&mut BrokenPipe, "Packet 4, channel 0, len 0: "));
    assert!(write_line(&mut Vec::<u8>::new(), "ok"));

    // A sink over a closed pipe drops lines quietly
    let mut sink = WriteSink::new(BrokenPipe);
    sink.emit("dropped");
    sink.emit("dropped again");
}

#[test]
fn test_hex_dump_covers_every_byte() {
    let buffer: Vec<u8> = (0..=u8::MAX).collect();
    let dump = hex_dump(&buffer, buffer.len());

    assert_eq!(dump.len(), 256 * 3 - 1);
    assert!(dump.starts_with("00 01 02"));
    assert!(dump.ends_with("FD FE FF"));
    assert_eq!(dump.split(' ').count(), 256);

    let config = HexDumpConfig {
        uppercase: false,
        separator: ", ".to_string(),
    };
    assert_eq!(hex_dump_with(&[0x0A, 0xB0], 2, &config), "0a, b0");
}

#[test]
fn test_sink_as_trait_object() {
    let mut lines: Vec<String> = Vec::new();
    {
        let sink: &mut dyn DiagnosticSink = &mut lines;
        sink.emit("via dyn");
    }
    assert_eq!(lines, vec!["via dyn".to_string()]);

    let mut stdout: Box<dyn DiagnosticSink> = Box::new(StdoutSink);
    stdout.emit("stdout sink line");
}
