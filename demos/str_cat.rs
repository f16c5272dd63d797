// Copyright (c) 2026 CyberNestSticks LLC
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Author: Lawrence (Larry) Foard

use std::mem::size_of;
use zcstrutil::{str_append, str_cat, StrView};

fn main() {
    let s1 = StrView::from("Hello, ");
    let s2 = "zcstrutil!";
    let year = 2025;

    // one pre-sized buffer regardless of how mixed the pieces are
    let message = str_cat![s1, s2, " Welcome to ", year];
    println!("str_cat demo: {}", message);

    let mut report = str_cat!["pi is roughly ", 3.14159f64];
    str_append![&mut report, ", e is roughly ", 2.71828f64];
    println!("str_append demo: {}", report);

    // how big is a StrView member in a structure as compared to &str?

    // we expect the same size. Why? &str is a fat pointer and StrView
    // is a Substr which is a thin pointer to an ArcStr plus a range
    // consisting of two u32s
    println!("size_of &str: {}", size_of::<&str>());
    println!("size_of StrView: {}", size_of::<StrView>());
}
