// Copyright (c) 2026 CyberNestSticks LLC
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Author: Lawrence (Larry) Foard

use rustc_hash::FxHashMap;
use std::error::Error;
use std::path::PathBuf;
use zcstrutil::{Delimiter, StrView};

fn main() -> Result<(), Box<dyn Error>> {
    let mut word_counts: FxHashMap<&str, i32> = FxHashMap::default();
    word_counts.insert("apple", 5);
    word_counts.insert("banana", 10);
    word_counts.insert("cherry", 3);
    // overwrites the earlier count
    word_counts.insert("cherry", 7);

    println!("word_counts demo:");
    for (word, count) in &word_counts {
        println!("  {}: {}", word, count);
    }

    if word_counts.contains_key("apple") {
        println!("  found 'apple'!");
    }

    // same idea, but counting words straight out of a file through
    // zero-copy views of the loaded buffer
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path.push("fruit_basket.txt");
    let text = StrView::from_file(path)?;

    let mut counts: FxHashMap<StrView, i32> = FxHashMap::default();
    for word in text.split(Delimiter::AnyOf(" \n")).skip_empty() {
        *counts.entry(word).or_insert(0) += 1;
    }

    println!("counted from file:");
    for (word, count) in &counts {
        println!("  {}: {} (zero-copy: {})", word, count, text.source_of(word));
    }

    Ok(())
}
