// src/partition.rs
use crate::error::{PtblError, Result};
use log::{debug, warn};
use std::borrow::Cow;
use std::ffi::OsStr;

/// One partition as given on the command line: volume label, size in
/// 512-byte blocks and an opaque type tag such as `Apple_PRODOS`.
/// Label and type are kept as raw bytes, so MacRoman names pass through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionSpec {
    pub name: Vec<u8>,
    pub blocks: u32,
    pub part_type: Vec<u8>,
}

impl PartitionSpec {
    pub fn new(name: impl Into<Vec<u8>>, blocks: u32, part_type: impl Into<Vec<u8>>) -> Self {
        PartitionSpec { name: name.into(), blocks, part_type: part_type.into() }
    }

    pub fn display_name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    pub fn display_type(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.part_type)
    }
}

/// How numeric arguments are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Plain decimal digits only (no sign), and the argument count must
    /// match exactly.
    #[default]
    Strict,
    /// `%i`-style: hex and octal prefixes, longest numeric prefix,
    /// 0 when nothing parses. Surplus arguments are ignored.
    Legacy,
}

impl ParsePolicy {
    fn number(self, field: &str, value: &OsStr) -> Result<u32> {
        let value = value.to_string_lossy();
        match self {
            ParsePolicy::Strict => {
                let digits_only = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());
                digits_only.then(|| value.parse::<u32>().ok()).flatten().ok_or_else(|| {
                    PtblError::MalformedNumber { field: field.to_string(), value: value.to_string() }
                })
            }
            ParsePolicy::Legacy => {
                let parsed = parse_c_int(&value);
                if parsed.is_none() {
                    warn!("{} '{}' is not a number, using 0", field, value);
                }
                // Values outside the int range wrap the way a C int would.
                Ok(parsed.unwrap_or(0) as i32 as u32)
            }
        }
    }
}

/// Parses `<count> <name> <size> <type> ...` into partition specs.
/// Names and types are taken byte for byte.
pub fn parse_partitions<S: AsRef<OsStr>>(count: &str, fields: &[S], policy: ParsePolicy) -> Result<Vec<PartitionSpec>> {
    let count = policy.number("partition count", OsStr::new(count))?;
    if count == 0 {
        return Err(PtblError::NoPartitions);
    }

    let needed = (count as usize).checked_mul(3).unwrap_or(usize::MAX);
    let mismatch = match policy {
        ParsePolicy::Strict => fields.len() != needed,
        ParsePolicy::Legacy => fields.len() < needed,
    };
    if mismatch {
        return Err(PtblError::CountMismatch { expected: count, needed, supplied: fields.len() });
    }
    if fields.len() > needed {
        warn!("Ignoring {} surplus argument(s)", fields.len() - needed);
    }

    fields[..needed]
        .chunks_exact(3)
        .enumerate()
        .map(|(i, triple)| {
            let name = triple[0].as_ref().as_encoded_bytes();
            let part_type = triple[2].as_ref().as_encoded_bytes();
            let blocks = policy.number(&format!("size of partition {}", i + 1), triple[1].as_ref())?;
            let spec = PartitionSpec::new(name, blocks, part_type);
            if blocks == 0 {
                return Err(PtblError::ZeroSize { name: spec.display_name().into_owned() });
            }
            debug!("Partition {}: '{}' {} blocks, type '{}'", i + 1, spec.display_name(), blocks, spec.display_type());
            Ok(spec)
        })
        .collect()
}

/// Reads an integer the way `sscanf("%i")` does: leading whitespace, an
/// optional sign, then hex (`0x`), octal (leading `0`) or decimal digits.
/// Trailing garbage is ignored. `None` if no digits were found.
fn parse_c_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if rest.len() > 2 && (rest.starts_with("0x") || rest.starts_with("0X"))
        && rest.as_bytes()[2].is_ascii_hexdigit()
    {
        (16, &rest[2..])
    } else if rest.starts_with('0') {
        (8, rest)
    } else {
        (10, rest)
    };

    let end = digits.find(|c: char| !c.is_digit(radix)).unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end]
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0i64, |acc, d| acc.saturating_mul(radix as i64).saturating_add(d as i64));
    Some(if negative { -magnitude } else { magnitude })
}
