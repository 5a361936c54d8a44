use std::marker::PhantomData;

use regex::RegexBuilder;

use crate::errors::{Error, Result};
use crate::matcher::Matcher;
use crate::record::Record;

/// Tag key used by [`MatcherBuilder`] unless [`tag`](MatcherBuilder::tag) is called.
pub const DEFAULT_TAG: &str = "rx";

/// Configures the regex engine before binding a pattern to `T`.
///
/// Engine options are passed straight to [`RegexBuilder`].
pub struct MatcherBuilder<T> {
    builder: RegexBuilder,
    tag: String,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record + 'static> MatcherBuilder<T> {
    pub fn new(pattern: &str) -> Self {
        Self {
            builder: RegexBuilder::new(pattern),
            tag: DEFAULT_TAG.to_string(),
            _record: PhantomData,
        }
    }

    pub fn tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tag = tag.into();
        self
    }

    pub fn case_insensitive(&mut self, yes: bool) -> &mut Self {
        self.builder.case_insensitive(yes);
        self
    }

    pub fn multi_line(&mut self, yes: bool) -> &mut Self {
        self.builder.multi_line(yes);
        self
    }

    pub fn dot_matches_new_line(&mut self, yes: bool) -> &mut Self {
        self.builder.dot_matches_new_line(yes);
        self
    }

    pub fn ignore_whitespace(&mut self, yes: bool) -> &mut Self {
        self.builder.ignore_whitespace(yes);
        self
    }

    pub fn unicode(&mut self, yes: bool) -> &mut Self {
        self.builder.unicode(yes);
        self
    }

    /// Approximate size limit, in bytes, of the compiled program.
    pub fn size_limit(&mut self, bytes: usize) -> &mut Self {
        self.builder.size_limit(bytes);
        self
    }

    pub fn build(&self) -> Result<Matcher<T>> {
        if self.tag.is_empty() {
            return Err(Error::EmptyTag);
        }
        Matcher::from_regex(self.builder.build()?, &self.tag)
    }
}
