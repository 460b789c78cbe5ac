use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

const BOM: char = '\u{feff}';

/// Text encoding of a seed file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SeedEncoding {
	/// UTF-8, a leading byte-order mark is dropped
	#[default]
	Utf8,
	/// UTF-16, endianness taken from the byte-order mark (little-endian without one)
	Utf16,
	Utf16Le,
	Utf16Be,
}

impl fmt::Display for SeedEncoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			SeedEncoding::Utf8 => "utf-8",
			SeedEncoding::Utf16 => "utf-16",
			SeedEncoding::Utf16Le => "utf-16le",
			SeedEncoding::Utf16Be => "utf-16be",
		};
		f.write_str(name)
	}
}

impl FromStr for SeedEncoding {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"utf-8" | "utf8" => Ok(SeedEncoding::Utf8),
			"utf-16" | "utf16" => Ok(SeedEncoding::Utf16),
			"utf-16le" | "utf16le" => Ok(SeedEncoding::Utf16Le),
			"utf-16be" | "utf16be" => Ok(SeedEncoding::Utf16Be),
			_ => Err(format!("unknown encoding '{s}', expected utf-8, utf-16, utf-16le or utf-16be")),
		}
	}
}

/// Reads a line-delimited seed file and returns one word per line.
///
/// - Reads the entire file into memory and decodes it with `encoding`
/// - Splits on `\n` / `\r\n`
/// - Strips trailing whitespace; empty lines are kept as empty words
pub(crate) fn read_seed_words<P: AsRef<Path>>(filename: P, encoding: SeedEncoding) -> Result<Vec<String>> {
	let bytes = std::fs::read(filename)?;
	let contents = decode(&bytes, encoding)?;
	let contents = contents.strip_prefix(BOM).unwrap_or(&contents);

	Ok(contents.lines().map(|line| line.trim_end().to_owned()).collect())
}

fn decode(bytes: &[u8], encoding: SeedEncoding) -> Result<String> {
	let decode_error = |reason: String| Error::Decode { encoding, reason };

	let little_endian = match encoding {
		SeedEncoding::Utf8 => {
			return String::from_utf8(bytes.to_vec()).map_err(|e| decode_error(e.to_string()));
		}
		SeedEncoding::Utf16 => !bytes.starts_with(&[0xfe, 0xff]),
		SeedEncoding::Utf16Le => true,
		SeedEncoding::Utf16Be => false,
	};

	if bytes.len() % 2 != 0 {
		return Err(decode_error(format!("odd number of bytes ({})", bytes.len())));
	}

	let units = bytes.chunks_exact(2).map(|pair| {
		let pair = [pair[0], pair[1]];
		if little_endian { u16::from_le_bytes(pair) } else { u16::from_be_bytes(pair) }
	});

	char::decode_utf16(units)
		.collect::<std::result::Result<String, _>>()
		.map_err(|e| decode_error(e.to_string()))
}
