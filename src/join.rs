// Copyright (c) 2026 CyberNestSticks LLC
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Author: Lawrence (Larry) Foard

//! Joining `Display` sequences with a separator.

use std::fmt::{self, Write};

/// Joins the `Display` renderings of `parts` with `sep`, writing every item
/// straight into the output buffer.
///
/// Works over anything iterable, including numeric spans.
///
/// ### Example
/// ```
/// # use zcstrutil::join;
/// assert_eq!(join(["foo", "bar", "baz"], "-"), "foo-bar-baz");
///
/// let nums = [1, 2, 3, 4, 5];
/// assert_eq!(join(&nums[..], ", "), "1, 2, 3, 4, 5");
/// ```
pub fn join<I>(parts: I, sep: &str) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    join_format(parts, sep, |out, item| {
        // writing to a String cannot fail
        let _ = write!(out, "{}", item);
    })
}

/// Joins `parts` with `sep`, rendering each item through `render`.
///
/// Use this when items need a custom rendering, like key-value pairs.
///
/// ### Example
/// ```
/// # use zcstrutil::{join_format, str_append};
/// let pairs = [("a", 1), ("b", 2)];
/// let rendered = join_format(pairs, ",", |out, (k, v)| {
///     str_append![out, k, '=', v];
/// });
/// assert_eq!(rendered, "a=1,b=2");
/// ```
pub fn join_format<I, F>(parts: I, sep: &str, mut render: F) -> String
where
    I: IntoIterator,
    F: FnMut(&mut String, I::Item),
{
    let mut out = String::new();
    for (i, item) in parts.into_iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        render(&mut out, item);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_item_sequences() {
        assert_eq!(join(Vec::<String>::new(), "-"), "");
        assert_eq!(join(["solo"], "-"), "solo");
    }

    #[test]
    fn separator_only_between_items() {
        assert_eq!(join(["a", "b"], "--"), "a--b");
        assert_eq!(join([""; 3], ","), ",,");
    }
}
