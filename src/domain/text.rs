//! Word capitalization.

/// Uppercases the first non-whitespace character of the string and the first
/// non-whitespace character after every whitespace run. Everything else,
/// including the whitespace itself, is copied through unchanged.
///
/// Case mapping is the locale-independent one from `char::to_uppercase`.
/// Characters whose uppercase form is longer than one character (`ß` -> `SS`)
/// are left alone, so the output always has the same number of characters as
/// the input.
///
/// ```
/// use small_textkit::capitalize;
///
/// assert_eq!(capitalize("hello world"), "Hello World");
/// assert_eq!(capitalize("  hello"), "  Hello");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    // 字串開頭視同前面是空白
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
            continue;
        }

        if at_word_start {
            out.push(simple_uppercase(c));
        } else {
            out.push(c);
        }
        at_word_start = false;
    }

    out
}

fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
