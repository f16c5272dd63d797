// Copyright (c) 2026 CyberNestSticks LLC
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Author: Lawrence (Larry) Foard

//! [`StrView`], a cheaply clonable substring handle over a shared buffer.

use arcstr::{literal, ArcStr, Substr};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};
use std::ops::{Deref, RangeBounds};

#[cfg(feature = "std")]
use std::io::Read;

use crate::split::{Delimiter, Split};

// error for file loading
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("IO failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 encoding failure: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A refcounted view into a shared string buffer.
///
/// Cloning, slicing with [`substr`](StrView::substr), trimming, stripping,
/// and splitting all reuse the original buffer; nothing is copied until
/// [`detach`](StrView::detach) asks for it. `StrView` derefs to `str`, so
/// the full `str` API (`starts_with`, `contains`, case conversion, ...)
/// applies directly.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StrView(Substr);

impl StrView {
    /// Creates a new, empty `StrView`.
    pub fn new() -> Self {
        StrView::from(literal!(""))
    }

    /// Creates a `StrView` by allocating a fresh buffer holding a copy
    /// of `s`.
    pub fn copied_from(s: &str) -> Self {
        StrView(Substr::from(ArcStr::from(s)))
    }

    /// Create an independent allocated copy of the underlying string
    /// buffer detached from the original string buffer.
    ///
    /// ```
    /// # use zcstrutil::StrView;
    /// let large_source = StrView::from("..."); // imagine 1GB of text
    /// let small_slice = large_source.substr(0..2);
    ///
    /// // Detach from the big buffer to allow it to be garbage collected
    /// let owned_slice = small_slice.detach();
    /// assert!(!large_source.source_of(&owned_slice));
    /// ```
    pub fn detach(&self) -> Self {
        // create a new allocation
        StrView::copied_from(self.as_str())
    }

    /// Returns `true` if the string slice `s` physically resides within the
    /// memory bounds of this `StrView`.
    ///
    /// ### Example
    /// ```
    /// # use zcstrutil::StrView;
    /// let root = StrView::from("hello world");
    /// let sub = &root[0..5];
    /// assert!(root.source_of(sub));
    /// assert!(!root.source_of("hello"));
    /// ```
    pub fn source_of(&self, s: &str) -> bool {
        match (s.as_ptr() as usize).checked_sub(self.0.as_ptr() as usize) {
            Some(offset) => offset + s.len() <= self.0.len(),
            // s starts below our buffer
            None => false,
        }
    }

    /// Creates a view of `s`, reusing this view's buffer when `s` points
    /// into it and allocating a copy otherwise.
    pub fn view_of(&self, s: &str) -> Self {
        match (s.as_ptr() as usize).checked_sub(self.0.as_ptr() as usize) {
            Some(offset) if offset + s.len() <= self.0.len() => {
                self.substr(offset..offset + s.len())
            }
            _ => StrView::copied_from(s),
        }
    }

    /// Returns a sub-slice of this `StrView` as a new `StrView`.
    pub fn substr(&self, range: impl RangeBounds<usize>) -> Self {
        StrView(self.0.substr(range))
    }

    /// Transforms the current view through a borrowing closure, keeping the
    /// result zero-copy whenever the closure returns a sub-slice.
    ///
    /// ### Example
    /// ```
    /// # use zcstrutil::StrView;
    /// let padded = StrView::from("  zero-copy  ");
    ///
    /// let trimmed = padded.map(|s| s.trim());
    ///
    /// assert_eq!(trimmed, "zero-copy");
    /// assert!(padded.source_of(&trimmed));
    /// ```
    pub fn map<F>(&self, f: F) -> StrView
    where
        F: FnOnce(&str) -> &str,
    {
        self.view_of(f(self))
    }

    /// Returns a view with leading and trailing whitespace removed, sharing
    /// this view's buffer.
    pub fn trim(&self) -> StrView {
        self.map(|s| s.trim())
    }

    /// Returns a view with leading whitespace removed.
    pub fn trim_start(&self) -> StrView {
        self.map(|s| s.trim_start())
    }

    /// Returns a view with trailing whitespace removed.
    pub fn trim_end(&self) -> StrView {
        self.map(|s| s.trim_end())
    }

    /// Returns the view past `prefix`, or `None` if the view does not start
    /// with `prefix`. Zero-copy; an empty prefix always strips.
    ///
    /// ### Example
    /// ```
    /// # use zcstrutil::StrView;
    /// let greeting = StrView::from("Hello, World!");
    /// let rest = greeting.strip_prefix("Hello, ").unwrap();
    /// assert_eq!(rest, "World!");
    /// assert!(greeting.source_of(&rest));
    /// ```
    pub fn strip_prefix(&self, prefix: &str) -> Option<StrView> {
        self.as_str()
            .strip_prefix(prefix)
            .map(|rest| self.view_of(rest))
    }

    /// Returns the view before `suffix`, or `None` if the view does not end
    /// with `suffix`. Zero-copy.
    pub fn strip_suffix(&self, suffix: &str) -> Option<StrView> {
        self.as_str()
            .strip_suffix(suffix)
            .map(|rest| self.view_of(rest))
    }

    /// Splits this view on `delim`, yielding `StrView` pieces that share
    /// this view's buffer. Accepts the same delimiters and options as
    /// [`split`](crate::split()).
    ///
    /// ### Example
    /// ```
    /// # use zcstrutil::StrView;
    /// let source = StrView::from("1 23 456 789 0");
    ///
    /// let fields: Vec<StrView> = source.split(' ').collect();
    ///
    /// assert_eq!(fields[2], "456");
    /// // every field points back into source
    /// assert!(fields.iter().all(|f| source.source_of(f)));
    /// ```
    pub fn split<'a>(&'a self, delim: impl Into<Delimiter<'a>>) -> Views<'a, Split<'a>> {
        let delim = delim.into();
        self.iter_views(move |s| crate::split(s, delim))
    }

    /// Splits this view into lines, yielding zero-copy `StrView`s.
    pub fn lines(&self) -> Views<'_, std::str::Lines<'_>> {
        self.iter_views(|s| s.lines())
    }

    /// Wraps a standard string iterator to produce [`StrView`] items instead
    /// of `&str`.
    ///
    /// This lets existing [`str`] iteration logic (like `.split_whitespace()`
    /// or `.lines()`) run unchanged while every yielded slice is promoted to
    /// a view of this buffer, which stays alive as long as any item does.
    ///
    /// ### Example
    /// ```
    /// # use zcstrutil::StrView;
    /// let text = StrView::from("one two three");
    ///
    /// let mut words = text.iter_views(|s| s.split_whitespace());
    ///
    /// assert_eq!(words.next().unwrap(), "one");
    /// assert_eq!(words.next().unwrap(), "two");
    /// ```
    pub fn iter_views<'a, F, I>(&'a self, f: F) -> Views<'a, I>
    where
        F: FnOnce(&'a str) -> I,
        I: Iterator<Item = &'a str>,
    {
        Views {
            source: self.clone(),
            inner: f(self.as_str()),
            _marker: std::marker::PhantomData,
        }
    }

    /// Borrows the view's contents.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    /// Create a StrView by reading an entire file. The contents must be
    /// valid UTF-8.
    ///
    /// ### Example
    /// ```
    /// # use zcstrutil::StrView;
    /// # use std::path::PathBuf;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // Construct path relative to the project root
    /// let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    /// path.push("demos");
    /// path.push("from_file_test.txt");
    /// let r = StrView::from_file(path)?;
    /// assert_eq!(r, "xyzzy");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<StrView, ReadError> {
        let mut bytes = Vec::new();
        std::fs::File::open(path)?.read_to_end(&mut bytes)?;
        Ok(StrView::from(String::from_utf8(bytes)?))
    }
}

impl Default for StrView {
    fn default() -> Self {
        StrView::new()
    }
}

impl PartialEq<str> for StrView {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StrView {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<StrView> for &str {
    fn eq(&self, other: &StrView) -> bool {
        *self == other.0
    }
}

#[cfg(feature = "std")]
impl PartialEq<String> for StrView {
    fn eq(&self, other: &String) -> bool {
        self.0 == *other
    }
}

#[cfg(feature = "std")]
impl PartialEq<StrView> for String {
    fn eq(&self, other: &StrView) -> bool {
        *self == other.0
    }
}

impl Deref for StrView {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StrView {
    fn as_ref(&self) -> &str {
        self
    }
}

impl std::borrow::Borrow<str> for StrView {
    fn borrow(&self) -> &str {
        self
    }
}

impl std::fmt::Display for StrView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::fmt::Debug for StrView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.0, f)
    }
}

impl From<&str> for StrView {
    #[inline]
    fn from(s: &str) -> Self {
        StrView::copied_from(s)
    }
}

impl From<ArcStr> for StrView {
    #[inline]
    fn from(s: ArcStr) -> Self {
        StrView(Substr::from(s))
    }
}

impl From<Substr> for StrView {
    #[inline]
    fn from(s: Substr) -> Self {
        StrView(s)
    }
}

#[cfg(feature = "std")]
impl From<String> for StrView {
    #[inline]
    fn from(s: String) -> Self {
        StrView(Substr::from(ArcStr::from(s)))
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for StrView {
    /// Deserializes a string into a freshly allocated view.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StrViewVisitor;

        impl<'de> serde::de::Visitor<'de> for StrViewVisitor {
            type Value = StrView;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(StrView::copied_from(s))
            }
        }

        deserializer.deserialize_str(StrViewVisitor)
    }
}

/// str iterator wrapper automatically converting `&str` items to [`StrView`]s
/// of the source buffer.
///
/// Created by [`StrView::iter_views`], [`StrView::split`], and
/// [`StrView::lines`].
pub struct Views<'a, I> {
    source: StrView,
    inner: I,
    _marker: std::marker::PhantomData<&'a str>,
}

impl<'a> Views<'a, Split<'a>> {
    /// Drops empty pieces, like [`Split::skip_empty`].
    pub fn skip_empty(mut self) -> Self {
        self.inner = self.inner.skip_empty();
        self
    }

    /// Trims whitespace from every piece, like [`Split::trim`].
    pub fn trim(mut self) -> Self {
        self.inner = self.inner.trim();
        self
    }
}

impl<'a, I> Iterator for Views<'a, I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = StrView;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slice| self.source.view_of(slice))
    }
}
