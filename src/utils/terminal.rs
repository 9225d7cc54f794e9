//! Terminal output sanitization
//!
//! Assistant replies and profile text are printed straight to the terminal, both by the
//! CLI and inside the TUI. Neither source is trusted: escape sequences in a reply could
//! clear the screen, move the cursor or set the window title. Everything shown goes through
//! [`sanitize_for_terminal`] first.

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Removes escape sequences and control characters, keeping tabs and newlines
///
/// Handles CSI (`ESC [ ... letter`) and OSC (`ESC ] ... BEL` or `ESC ] ... ESC \`)
/// sequences. Carriage returns are dropped so `\r\n` replies render as plain newlines.
///
/// # Examples
///
/// ```
/// use portfolio_explorer::utils::terminal::sanitize_for_terminal;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(sanitize_for_terminal(text), "Red text");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.peek() {
                Some('[') => {
                    chars.next();
                    // CSI ends at the first ASCII letter
                    for next_ch in chars.by_ref() {
                        if next_ch.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    // OSC ends at BEL or ST (ESC \)
                    while let Some(next_ch) = chars.next() {
                        if next_ch == BEL {
                            break;
                        }
                        if next_ch == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' {
            continue;
        }

        result.push(ch);
    }

    result
}
