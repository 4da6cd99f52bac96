//! Best-effort numeric parsing for ASCII payloads
//!
//! Follows the C library conventions the peer firmware was written against
//! (`strtol` with a 32-bit `long`, and `atoi`): skip leading whitespace,
//! accept an optional sign, read digits until the first byte that is not
//! one, and saturate on overflow. A payload without digits reads as zero.
//!
//! Every parse also reports whether the input was clean, so strict links can
//! reject what lenient links tolerate.

/// Result of a best-effort parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Parsed {
    /// Parsed value, saturated to the `i32` range
    pub value: i32,
    /// At least one digit was read, nothing but digits followed the prefix,
    /// and the value fit in an `i32`
    pub exact: bool,
}

/// Largest magnitude kept while accumulating digits (`|i32::MIN|`)
const MAGNITUDE_LIMIT: i64 = i32::MAX as i64 + 1;

/// Parse a base-16 integer
///
/// A `0x`/`0X` prefix is accepted but not required.
pub fn parse_hex(input: &[u8]) -> Parsed {
    parse_radix(input, 16)
}

/// Parse a base-10 integer
pub fn parse_decimal(input: &[u8]) -> Parsed {
    parse_radix(input, 10)
}

fn parse_radix(input: &[u8], radix: u32) -> Parsed {
    let mut rest = input;
    while let [first, tail @ ..] = rest {
        if !first.is_ascii_whitespace() {
            break;
        }
        rest = tail;
    }

    let negative = match rest {
        [b'-', tail @ ..] => {
            rest = tail;
            true
        }
        [b'+', tail @ ..] => {
            rest = tail;
            false
        }
        _ => false,
    };

    if radix == 16 {
        if let [b'0', b'x' | b'X', tail @ ..] = rest {
            if tail.first().is_some_and(|b| (*b as char).is_digit(16)) {
                rest = tail;
            }
        }
    }

    let mut magnitude: i64 = 0;
    let mut digits = 0usize;
    let mut overflowed = false;
    for &byte in rest {
        let Some(digit) = (byte as char).to_digit(radix) else {
            break;
        };
        // Clamp early so long inputs cannot overflow the accumulator
        let next = magnitude * radix as i64 + digit as i64;
        overflowed |= next > MAGNITUDE_LIMIT;
        magnitude = next.min(MAGNITUDE_LIMIT);
        digits += 1;
    }

    let signed = if negative { -magnitude } else { magnitude };
    let value = signed.clamp(i32::MIN as i64, i32::MAX as i64);
    let saturated = overflowed || value != signed;
    Parsed {
        value: value as i32,
        exact: digits > 0 && digits == rest.len() && !saturated,
    }
}
