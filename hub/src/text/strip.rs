use crate::text::formatting::{CODE_PREFIX, Formatting};

/// Removes every `§`+code pair from `input`.
///
/// Pairs that only become adjacent once an inner pair is removed are removed
/// as well, so `"§§cc"` strips to `""`. The output therefore never contains a
/// `§`+code pair, which makes the function idempotent. A `§` followed by
/// anything else, or ending the input, is kept.
///
/// ```rust
/// use rusty_hub::strip_formatting;
///
/// assert_eq!(strip_formatting("§cDanger"), "Danger");
/// assert_eq!(strip_formatting("§l§nTitle§r body"), "Title body");
/// assert_eq!(strip_formatting("100§"), "100§");
/// ```
pub fn strip_formatting(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if out.ends_with(CODE_PREFIX) && Formatting::is_code(c) {
            out.pop();
        } else {
            out.push(c);
        }
    }
    out
}
