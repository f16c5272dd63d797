// Copyright (c) 2026 CyberNestSticks LLC
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Author: Lawrence (Larry) Foard

use arcstr::literal;
use zcstrutil::{replace_all, split, StrView};

fn main() {
    let csv = "a,,b,c,";
    let all: Vec<&str> = split(csv, ',').collect();
    let kept: Vec<&str> = split(csv, ',').skip_empty().collect();
    println!("split {:?} on ',': {:?}", csv, all);
    println!("        keeping non-empty: {:?}", kept);

    let source: StrView = literal!(
        r#"
        cats
        dogs
        frogs
    "#
    )
    .into();

    source
        .lines()
        // trim each line without copying it
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .for_each(|line| println!("{:?} zero-copy: {}", line, source.source_of(&line)));

    let rewritten = replace_all("banana bandana", &[("ana", "o")]);
    println!("replace_all: banana bandana -> {}", rewritten);
}
