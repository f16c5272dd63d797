// Copyright (c) 2026 CyberNestSticks LLC
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Author: Lawrence (Larry) Foard

//! One-pass replacement of multiple patterns.

/// Replaces every non-overlapping occurrence of each `from` pattern with its
/// `to` replacement, in a single left-to-right pass.
///
/// At each step the earliest match across all patterns is applied; ties at
/// the same position go to the longest pattern, then to list order. Replaced
/// text is never rescanned. Empty `from` patterns are ignored.
///
/// ### Example
/// ```
/// # use zcstrutil::replace_all;
/// assert_eq!(replace_all("banana bandana", &[("ana", "o")]), "bona bando");
///
/// let cleaned = replace_all("a<b>&c", &[("<", "&lt;"), (">", "&gt;"), ("&", "&amp;")]);
/// assert_eq!(cleaned, "a&lt;b&gt;&amp;c");
/// ```
pub fn replace_all<S, T>(text: &str, replacements: &[(S, T)]) -> String
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let mut out = String::with_capacity(text.len());
    apply(text, replacements, &mut out);
    out
}

/// In-place variant of [`replace_all`], returning the number of
/// substitutions made. The target is left untouched when nothing matches.
///
/// ### Example
/// ```
/// # use zcstrutil::replace_all_in;
/// let mut s = String::from("one two two");
/// assert_eq!(replace_all_in(&mut s, &[("two", "2")]), 2);
/// assert_eq!(s, "one 2 2");
/// ```
pub fn replace_all_in<S, T>(target: &mut String, replacements: &[(S, T)]) -> usize
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let mut out = String::with_capacity(target.len());
    let count = apply(target, replacements, &mut out);
    if count > 0 {
        *target = out;
    }
    count
}

fn apply<S, T>(text: &str, replacements: &[(S, T)], out: &mut String) -> usize
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let mut rest = text;
    let mut count = 0;
    while !rest.is_empty() {
        // earliest match across all patterns; ties go to the longest
        let mut hit: Option<(usize, &str, &str)> = None;
        for (from, to) in replacements {
            let from = from.as_ref();
            if from.is_empty() {
                continue;
            }
            if let Some(at) = rest.find(from) {
                let better = match hit {
                    None => true,
                    Some((best_at, best_from, _)) => {
                        at < best_at || (at == best_at && from.len() > best_from.len())
                    }
                };
                if better {
                    hit = Some((at, from, to.as_ref()));
                }
            }
        }
        match hit {
            Some((at, from, to)) => {
                out.push_str(&rest[..at]);
                out.push_str(to);
                rest = &rest[at + from.len()..];
                count += 1;
            }
            None => break,
        }
    }
    out.push_str(rest);
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaced_text_is_not_rescanned() {
        // the "aa" produced by the first substitution must survive
        assert_eq!(replace_all("ba", &[("ba", "aa"), ("aa", "!")]), "aa");
    }

    #[test]
    fn longest_pattern_wins_position_ties() {
        assert_eq!(replace_all("aaa bb", &[("a", "1"), ("aa", "2")]), "21 bb");
    }

    #[test]
    fn list_order_breaks_remaining_ties() {
        assert_eq!(replace_all("ab", &[("ab", "first"), ("ab", "second")]), "first");
    }
}
