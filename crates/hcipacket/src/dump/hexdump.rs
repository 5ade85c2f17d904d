//! Hex dump formatting

/// Hex dump output options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexDumpConfig {
    /// Render digits A-F in upper case
    pub uppercase: bool,
    /// Placed between bytes, never after the last one
    pub separator: String,
}

impl Default for HexDumpConfig {
    fn default() -> Self {
        HexDumpConfig {
            uppercase: true,
            separator: " ".to_string(),
        }
    }
}

/// Render the first `length` bytes of `buffer` as `"01 02 03"`
///
/// `length` is clamped to the buffer size, so the dump covers
/// `min(length, buffer.len())` bytes.
pub fn hex_dump(buffer: &[u8], length: usize) -> String {
    hex_dump_with(buffer, length, &HexDumpConfig::default())
}

/// Render the first `length` bytes of `buffer` using `config`
///
/// `length` is clamped to the buffer size, as in `hex_dump`.
pub fn hex_dump_with(buffer: &[u8], length: usize, config: &HexDumpConfig) -> String {
    let bytes = &buffer[..length.min(buffer.len())];
    let encoded = if config.uppercase {
        hex::encode_upper(bytes)
    } else {
        hex::encode(bytes)
    };

    let separators = config.separator.len() * bytes.len().saturating_sub(1);
    let mut dump = String::with_capacity(encoded.len() + separators);

    // hex output is ASCII, two characters per byte
    for (i, pair) in encoded.as_bytes().chunks(2).enumerate() {
        if i > 0 {
            dump.push_str(&config.separator);
        }
        dump.extend(pair.iter().map(|&c| c as char));
    }
    dump
}
