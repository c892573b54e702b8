use crate::token::TokenQueue;

const QUOTE: char = '"';

/// Read a value that may have been split across argv entries by a quoted
/// space, e.g. `"C:\Program` `Files\foo.dll"`.
///
/// `first` is the value part of the current token (switch prefix already
/// removed). Continuation tokens are pulled from `rest` and joined with a
/// single space. An unterminated quote swallows the rest of the queue.
pub(crate) fn read_possibly_quoted(first: &str, rest: &mut TokenQueue) -> String {
    let quotes = first.matches(QUOTE).count();
    if quotes == 0 {
        return first.to_string();
    }

    let mut value = strip_quotes(first);
    if quotes > 1 {
        return value;
    }

    while let Some(next) = rest.next_token() {
        value.push(' ');
        value.push_str(&strip_quotes(&next));
        if next.contains(QUOTE) {
            break;
        }
    }
    value
}

fn strip_quotes(s: &str) -> String {
    s.replace(QUOTE, "")
}
