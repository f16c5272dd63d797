// Copyright (c) 2026 CyberNestSticks LLC
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Author: Lawrence (Larry) Foard

use zcstrutil::StrView;

#[test]
fn views_derived_from_a_source_share_its_buffer() {
    let source = StrView::from("cats and dogs");
    let cats = source.substr(0..4);
    assert_eq!(cats, "cats");
    assert!(source.source_of(&cats));

    // equal contents from elsewhere are not the same buffer
    let foreign = StrView::from("cats");
    assert_eq!(foreign, "cats");
    assert!(!source.source_of(&foreign));
}

#[test]
fn view_of_reuses_or_allocates() {
    let source = StrView::from("hello world");
    let world = source.view_of(&source[6..]);
    assert_eq!(world, "world");
    assert!(source.source_of(&world));

    let elsewhere = source.view_of("world");
    assert_eq!(elsewhere, "world");
    assert!(!source.source_of(&elsewhere));
}

#[test]
fn detach_leaves_the_source_buffer() {
    let source = StrView::from("hello world");
    let world = source.substr(6..);
    let detached = world.detach();
    assert_eq!(detached, "world");
    assert!(!source.source_of(&detached));
}

#[test]
fn trimming_and_stripping_stay_zero_copy() {
    let padded = StrView::from("  zero-copy  ");
    let trimmed = padded.trim();
    assert_eq!(trimmed, "zero-copy");
    assert!(padded.source_of(&trimmed));
    assert_eq!(padded.trim_start(), "zero-copy  ");
    assert_eq!(padded.trim_end(), "  zero-copy");

    let greeting = StrView::from("Hello, World!");
    let rest = greeting.strip_prefix("Hello, ").unwrap();
    assert_eq!(rest, "World!");
    assert!(greeting.source_of(&rest));
    assert!(greeting.strip_prefix("Goodbye").is_none());

    // empty pattern always strips; nothing strips from an empty view
    assert_eq!(greeting.strip_prefix("").unwrap(), "Hello, World!");
    assert!(StrView::new().strip_prefix("a").is_none());

    assert_eq!(greeting.strip_suffix("!").unwrap(), "Hello, World");
}

#[test]
fn split_yields_zero_copy_views() {
    let source = StrView::from("1 23 456 789 0");
    let fields: Vec<StrView> = source.split(' ').collect();
    assert_eq!(fields.len(), 5);
    assert_eq!(fields[2], "456");
    assert!(fields.iter().all(|f| source.source_of(f)));
}

#[test]
fn view_split_supports_options() {
    let source = StrView::from(" a , b ,, c ");
    let fields: Vec<StrView> = source.split(',').trim().skip_empty().collect();
    assert_eq!(fields, ["a", "b", "c"]);
    assert!(fields.iter().all(|f| source.source_of(f)));
}

#[test]
fn lines_iterates_views() {
    let source = StrView::from("line1\nline2\nline3");
    let mut lines = source.lines();
    assert_eq!(lines.next().unwrap(), "line1");
    assert_eq!(lines.next().unwrap(), "line2");
    assert_eq!(lines.next().unwrap(), "line3");
    assert!(lines.next().is_none());
}

#[test]
fn equality_surface_matches_str_and_string() {
    let view = StrView::from("abc");
    assert_eq!(view, "abc");
    assert_eq!("abc", view);
    assert_eq!(view, String::from("abc"));
    assert_eq!(String::from("abc"), view);
}

#[test]
fn str_api_reaches_through_deref() {
    let view = StrView::from("abc");
    assert!(view.starts_with(""));
    assert!(!StrView::new().starts_with("a"));
    assert!(view.contains("b"));
    assert_eq!(view.to_ascii_uppercase(), "ABC");
    assert_eq!(view.replace('b', "-"), "a-c");
}

#[cfg(feature = "std")]
#[test]
fn from_file_loads_whole_contents() {
    let mut path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path.push("from_file_test.txt");
    let contents = StrView::from_file(path).unwrap();
    assert_eq!(contents, "xyzzy");
}

#[cfg(feature = "std")]
#[test]
fn from_file_reports_missing_files() {
    let missing = StrView::from_file("definitely/not/here.txt");
    assert!(matches!(missing, Err(zcstrutil::ReadError::Io(_))));
}

#[cfg(feature = "serde")]
#[test]
fn serde_renders_views_as_plain_strings() {
    let view = StrView::from("cat");
    assert_eq!(serde_json::to_string(&view).unwrap(), r#""cat""#);

    let back: StrView = serde_json::from_str(r#""dog""#).unwrap();
    assert_eq!(back, "dog");
}
