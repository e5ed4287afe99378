//! Empty element pruning.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_EMPTY_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(<([a-zA-Z][a-zA-Z0-9:-]*)(?:\s[^>]*)?>)((?:\s|&(?:nbsp|#160|#x[aA]0);)*)</([a-zA-Z][a-zA-Z0-9:-]*)\s*>",
    )
    .unwrap()
});

/// Removes element pairs whose content is empty or whitespace until nothing
/// more can be removed.
///
/// A removed pair is replaced by its whitespace content so neighbouring words
/// stay apart. Every pass that removes something shortens the text, so the
/// loop always terminates.
pub fn prune_empty_elements(html: &str) -> (String, usize) {
    let mut text = html.to_string();
    let mut total = 0;
    let mut passes = 0;

    loop {
        let (next, removed) = prune_pass(&text);
        if removed == 0 {
            break;
        }
        passes += 1;
        total += removed;
        text = next;
        log::trace!("prune pass {}: removed {} element(s)", passes, removed);
    }

    (text, total)
}

/// One scan over the text, removing every empty pair visible in it.
fn prune_pass(html: &str) -> (String, usize) {
    let mut removed = 0;
    let text = RE_EMPTY_PAIR
        .replace_all(html, |caps: &Captures<'_>| {
            let same_name = caps[2].eq_ignore_ascii_case(&caps[4]);
            if !same_name || caps[1].ends_with("/>") {
                return caps[0].to_string();
            }
            removed += 1;
            caps[3].to_string()
        })
        .into_owned();
    (text, removed)
}
