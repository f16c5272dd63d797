// Copyright (c) 2026 CyberNestSticks LLC
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Author: Lawrence (Larry) Foard

//! # zcstrutil
//!
//! `zcstrutil` is a small string-utilities crate: mixed-type concatenation,
//! joining, configurable splitting, multi-pattern replacement, and the
//! [`StrView`] zero-copy string view backed by [`arcstr::Substr`].
//!
//! Where the standard library already owns a behavior (`starts_with`,
//! `contains`, case conversion, single-pattern `replace`) this crate does not
//! wrap it; [`StrView`] derefs to `str` so all of that remains reachable.
//! The crate supplies what `std` lacks:
//!
//! ## Main Functionality
//! - **[`str_cat!`] / [`str_append!`]**: concatenate string slices, owned
//!   strings, views, chars, bools, integers, and floats into one pre-sized
//!   buffer via the [`Piece`] trait.
//! - **[`join`] / [`join_format`]**: join any `Display` iterator (including
//!   numeric spans) with a separator, writing items straight into the output.
//! - **[`split`]**: split on a string, char, or char set, with `skip_empty`
//!   and `trim` options; on a [`StrView`] the pieces are zero-copy views.
//! - **[`replace_all`]**: one-pass replacement of multiple `(from, to)`
//!   pairs, earliest match first.
//!
//! ## Crate Features
//!
//! * **`default`** By default, serde and std are enabled.
//! * **`serde`** (Optional): Enables `Serialize`/`Deserialize` for [`StrView`].
//! * **`std`** (Optional): Enables `String` conversions and [`StrView::from_file`].
//!
//! ## Example
//!
//! ```rust
//! use zcstrutil::{replace_all, split, str_cat, StrView};
//!
//! let greeting = str_cat!["Hello, ", "World!", " Welcome to ", 2025];
//! assert_eq!(greeting, "Hello, World! Welcome to 2025");
//!
//! let kept: Vec<&str> = split("a,,b,c,", ',').skip_empty().collect();
//! assert_eq!(kept, ["a", "b", "c"]);
//!
//! assert_eq!(replace_all("banana bandana", &[("ana", "o")]), "bona bando");
//!
//! // splitting a view yields views of the same buffer, no copies
//! let source = StrView::from("cats and dogs");
//! let words: Vec<StrView> = source.split(' ').collect();
//! assert!(words.iter().all(|w| source.source_of(w)));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod cat;
mod join;
mod replace;
mod split;
mod view;

pub use cat::Piece;
#[doc(hidden)]
pub use cat::__cat_into;
pub use join::{join, join_format};
pub use replace::{replace_all, replace_all_in};
pub use split::{split, Delimiter, Split};
#[cfg(feature = "std")]
pub use view::ReadError;
pub use view::{StrView, Views};
