use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::Arc;

use regex::{CaptureMatches, Captures, Regex};

use crate::bind::{Binding, bind};
use crate::builder::MatcherBuilder;
use crate::errors::{Error, Result};
use crate::populate::populate;
use crate::record::Record;
use crate::registry;

/// A compiled pattern together with the bindings of its capture groups onto
/// the fields of `T`.
///
/// Matchers are immutable once built. Cloning is cheap and every match
/// operation takes `&self`, so one matcher can serve any number of threads.
/// All [`Regex`] methods stay reachable through `Deref`.
pub struct Matcher<T> {
    regex: Regex,
    tag: Arc<str>,
    bindings: Arc<[Binding]>,
    _record: PhantomData<fn() -> T>,
}

/// Compiles `pattern` and binds its named groups to the fields of `T` tagged
/// with `tag`.
pub fn compile<T: Record + 'static>(pattern: &str, tag: &str) -> Result<Matcher<T>> {
    Matcher::new(pattern, tag)
}

/// Like [`compile`] but panics on error. Meant for statics and other
/// initialization where a bad pattern is a bug.
#[track_caller]
pub fn must_compile<T: Record + 'static>(pattern: &str, tag: &str) -> Matcher<T> {
    match Matcher::new(pattern, tag) {
        Ok(matcher) => matcher,
        Err(err) => panic!("rxbind: cannot compile `{pattern}`: {err}"),
    }
}

impl<T: Record + 'static> Matcher<T> {
    pub fn new(pattern: &str, tag: &str) -> Result<Self> {
        if tag.is_empty() {
            return Err(Error::EmptyTag);
        }
        Self::from_regex(Regex::new(pattern)?, tag)
    }

    /// Starts a [`MatcherBuilder`] for engine options.
    pub fn builder(pattern: &str) -> MatcherBuilder<T> {
        MatcherBuilder::new(pattern)
    }

    /// Binds an already compiled regex.
    pub fn from_regex(regex: Regex, tag: &str) -> Result<Self> {
        if tag.is_empty() {
            return Err(Error::EmptyTag);
        }
        let map = registry::resolved::<T>(tag)?;
        let bindings = bind(&map, regex.capture_names());

        // Replay every path once so a Fields impl that disagrees with its
        // schema fails here instead of during a match.
        let mut scratch = T::default();
        for binding in &bindings {
            if let Err(source) = binding.path.locate(&mut scratch) {
                return Err(Error::Path {
                    group: binding.name.clone(),
                    source,
                });
            }
        }

        log::debug!(
            "compiled matcher for {}: {} of {} capture groups bound under tag `{}`",
            std::any::type_name::<T>(),
            bindings.len(),
            regex.captures_len() - 1,
            tag
        );

        Ok(Self {
            regex,
            tag: Arc::from(tag),
            bindings: bindings.into(),
            _record: PhantomData,
        })
    }
}

impl<T: Record> Matcher<T> {
    /// Returns a record built from the leftmost match, or `None`.
    pub fn find(&self, haystack: &str) -> Option<T> {
        let captures = self.regex.captures(haystack)?;
        Some(self.record(&captures))
    }

    /// Writes the leftmost match into an existing record.
    ///
    /// Fields without a bound group keep their values. Returns `false`, leaving
    /// `target` untouched, when nothing matches.
    pub fn find_into(&self, haystack: &str, target: &mut T) -> bool {
        match self.regex.captures(haystack) {
            Some(captures) => {
                self.fill(&captures, target);
                true
            }
            None => false,
        }
    }

    /// Returns one record per successive non-overlapping match, at most
    /// `limit` of them when given.
    pub fn find_all(&self, haystack: &str, limit: Option<usize>) -> Vec<T> {
        let records = self.iter(haystack);
        match limit {
            Some(limit) => records.take(limit).collect(),
            None => records.collect(),
        }
    }

    /// Lazily yields one record per successive non-overlapping match.
    pub fn iter<'m, 'h>(&'m self, haystack: &'h str) -> Records<'m, 'h, T> {
        Records {
            matcher: self,
            matches: self.regex.captures_iter(haystack),
        }
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    fn record(&self, captures: &Captures<'_>) -> T {
        let mut record = T::default();
        self.fill(captures, &mut record);
        record
    }

    // Paths were replayed against `T::default()` when the matcher was built.
    fn fill(&self, captures: &Captures<'_>, target: &mut T) {
        if let Err(err) = populate(captures, &self.bindings, target) {
            panic!(
                "rxbind: Fields impl of {} changed shape after compilation: {err}",
                std::any::type_name::<T>()
            );
        }
    }
}

impl<T> Clone for Matcher<T> {
    fn clone(&self) -> Self {
        Self {
            regex: self.regex.clone(),
            tag: Arc::clone(&self.tag),
            bindings: Arc::clone(&self.bindings),
            _record: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("record", &std::any::type_name::<T>())
            .field("pattern", &self.regex.as_str())
            .field("tag", &self.tag)
            .field("bindings", &self.bindings)
            .finish()
    }
}

impl<T> Deref for Matcher<T> {
    type Target = Regex;

    fn deref(&self) -> &Regex {
        &self.regex
    }
}

/// Iterator returned by [`Matcher::iter`].
pub struct Records<'m, 'h, T> {
    matcher: &'m Matcher<T>,
    matches: CaptureMatches<'m, 'h>,
}

impl<T: Record> Iterator for Records<'_, '_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let captures = self.matches.next()?;
        Some(self.matcher.record(&captures))
    }
}
