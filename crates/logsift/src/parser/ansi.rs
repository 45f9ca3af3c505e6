/// ANSI escape code stripping
///
/// Command output captured from a TTY-aware tool often carries color codes.
/// They are removed before format detection and pattern matching so that
/// neither has to account for them.

use std::borrow::Cow;

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Strip ANSI escape codes from a line
///
/// Handles:
/// - CSI sequences: `\x1b[...m`
/// - OSC sequences: `\x1b]...` terminated by BEL or `\x1b\`
/// - Simple Fe sequences: `\x1b` followed by one byte in `@`..`_`
///
/// Returns Cow::Borrowed if no codes were found,
/// or Cow::Owned if stripping occurred.
pub fn strip_ansi_codes(input: &str) -> Cow<'_, str> {
    if !input.contains(ESC) {
        return Cow::Borrowed(input);
    }

    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != ESC {
            output.push(c);
            continue;
        }

        match chars.peek().copied() {
            // Lone trailing ESC, incomplete sequence
            None => {}
            Some('[') => {
                chars.next();
                // Parameters run until the final byte (0x40-0x7E)
                for b in chars.by_ref() {
                    if ('\x40'..='\x7e').contains(&b) {
                        break;
                    }
                }
            }
            Some(']') => {
                chars.next();
                while let Some(b) = chars.next() {
                    if b == BEL {
                        break;
                    }
                    if b == ESC && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            Some(next) if ('\x40'..='\x5f').contains(&next) => {
                chars.next();
            }
            // Not a sequence we know, keep the ESC
            Some(_) => output.push(c),
        }
    }

    Cow::Owned(output)
}
