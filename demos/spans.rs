// Copyright (c) 2026 CyberNestSticks LLC
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Author: Lawrence (Larry) Foard

use zcstrutil::join;

fn main() {
    let nums = vec![1, 2, 3, 4, 5];

    // a non-owning view over the vector's storage
    let num_span: &[i32] = &nums;

    match num_span.first() {
        Some(first) => println!("span demo (first element): {}", first),
        None => println!("span demo (first element): empty"),
    }

    // join renders straight off the span, no intermediate strings
    println!("span demo (joined): {}", join(num_span, ", "));

    // a window into the middle is still the same storage
    let middle = &num_span[1..4];
    println!("span demo (middle window): {}", join(middle, ", "));
}
