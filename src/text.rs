//! Small string helpers used when preparing prompts and rendering replies.

const TAB_SIZE: usize = 8;

/// Keep at most `max` characters (not bytes) of `s`.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Wrap `text` into lines of at most `width` characters joined with `\n`.
///
/// Follows the classic greedy paragraph filler:
/// - tabs expand to 8-column stops, then every whitespace character becomes
///   one space, so runs of whitespace inside a line are kept as-is;
/// - whitespace is dropped at the end of a line and at the start of every line
///   but the first;
/// - a line may break after a hyphen inside a word (`state-of-the-art`);
/// - words wider than the line are split, at their last hyphen when possible.
pub fn fill(text: &str, width: usize) -> String {
    wrap(text, width).join("\n")
}

pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut chunks = split_chunks(text);
    chunks.reverse();

    let mut lines = Vec::new();
    while !chunks.is_empty() {
        let mut line: Vec<String> = Vec::new();
        let mut line_len = 0;

        if !lines.is_empty() && chunks.last().is_some_and(|c| is_blank(c)) {
            chunks.pop();
        }

        while let Some(chunk) = chunks.pop() {
            let len = chunk.chars().count();
            if line_len + len > width {
                chunks.push(chunk);
                break;
            }
            line_len += len;
            line.push(chunk);
        }

        if let Some(chunk) = chunks.last_mut() {
            if chunk.chars().count() > width {
                let (head, tail) = split_long_chunk(chunk, width - line_len);
                line.push(head);
                *chunk = tail;
            }
        }

        if line.last().is_some_and(|c| is_blank(c)) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.concat());
        }
    }

    lines
}

fn is_space(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0b' | '\x0c' | '\r' | ' ')
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_letter(c: char) -> bool {
    is_word(c) && !c.is_numeric()
}

fn is_word_punct(c: char) -> bool {
    is_word(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}

fn is_blank(chunk: &str) -> bool {
    chunk.trim().is_empty()
}

fn expand_tabs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Split into alternating whitespace runs and words, with hyphenated words
/// further split after each breakable hyphen and em-dashes (`--`) on their own.
fn split_chunks(text: &str) -> Vec<String> {
    let chars: Vec<char> = expand_tabs(text)
        .chars()
        .map(|c| if is_space(c) { ' ' } else { c })
        .collect();

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = if chars[start] == ' ' {
            start + chars[start..].iter().take_while(|&&c| c == ' ').count()
        } else {
            word_chunk_end(&chars, start)
        };
        chunks.push(chars[start..end].iter().collect());
        start = end;
    }
    chunks
}

fn word_chunk_end(chars: &[char], start: usize) -> usize {
    if let Some(len) = em_dash_at(chars, start) {
        return start + len;
    }

    let run_end = chars[start..]
        .iter()
        .position(|&c| c == ' ')
        .map_or(chars.len(), |p| start + p);

    for pos in start + 1..run_end {
        if chars[pos] == '-' && hyphen_breaks_after(chars, pos) {
            return pos + 1;
        }
        if em_dash_at(chars, pos).is_some() {
            return pos;
        }
    }
    run_end
}

/// Length of a `--`-style dash starting at `pos`, when it sits between words.
fn em_dash_at(chars: &[char], pos: usize) -> Option<usize> {
    let before = pos.checked_sub(1).map(|i| chars[i])?;
    if !is_word_punct(before) {
        return None;
    }
    let dashes = chars[pos..].iter().take_while(|&&c| c == '-').count();
    let after = chars.get(pos + dashes).copied()?;
    (dashes >= 2 && is_word(after)).then_some(dashes)
}

/// A hyphen is a break point after two letters (or letter-hyphen-letter) and
/// before two more letters, optionally hyphen-separated.
fn hyphen_breaks_after(chars: &[char], pos: usize) -> bool {
    let letter = |i: Option<usize>| i.and_then(|i| chars.get(i)).is_some_and(|&c| is_letter(c));
    let hyphen = |i: Option<usize>| i.and_then(|i| chars.get(i)) == Some(&'-');

    let behind = letter(pos.checked_sub(1))
        && (letter(pos.checked_sub(2))
            || (hyphen(pos.checked_sub(2)) && letter(pos.checked_sub(3))));
    let ahead = letter(Some(pos + 1))
        && (letter(Some(pos + 2)) || (hyphen(Some(pos + 2)) && letter(Some(pos + 3))));

    behind && ahead
}

/// Take as much of an oversized chunk as fits in `space_left`, preferring to
/// end right after its last hyphen.
fn split_long_chunk(chunk: &str, space_left: usize) -> (String, String) {
    let chars: Vec<char> = chunk.chars().collect();
    let mut end = space_left.min(chars.len());

    if let Some(h) = chars[..end].iter().rposition(|&c| c == '-') {
        if h > 0 && chars[..h].iter().any(|&c| c != '-') {
            end = h + 1;
        }
    }

    (chars[..end].iter().collect(), chars[end..].iter().collect())
}
