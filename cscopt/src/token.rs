use std::borrow::Cow;
use std::collections::VecDeque;
use std::ffi::{OsStr, OsString};

/// Conversion of one argv entry into the string the parser works on.
///
/// A missing entry (`None`) becomes the empty string. OS strings that are
/// not valid UTF-8 are converted lossily.
pub trait IntoToken {
    fn into_token(self) -> String;
}

impl IntoToken for String {
    fn into_token(self) -> String {
        self
    }
}

impl IntoToken for &str {
    fn into_token(self) -> String {
        self.to_string()
    }
}

impl IntoToken for &String {
    fn into_token(self) -> String {
        self.clone()
    }
}

impl IntoToken for Cow<'_, str> {
    fn into_token(self) -> String {
        self.into_owned()
    }
}

impl IntoToken for OsString {
    fn into_token(self) -> String {
        match self.into_string() {
            Ok(s) => s,
            Err(raw) => raw.to_string_lossy().into_owned(),
        }
    }
}

impl IntoToken for &OsStr {
    fn into_token(self) -> String {
        self.to_string_lossy().into_owned()
    }
}

impl<T: IntoToken> IntoToken for Option<T> {
    fn into_token(self) -> String {
        self.map(IntoToken::into_token).unwrap_or_default()
    }
}

/// FIFO of the tokens still to be classified.
#[derive(Debug, Clone, Default)]
pub struct TokenQueue {
    tokens: VecDeque<String>,
}

impl TokenQueue {
    pub fn new<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoToken,
    {
        TokenQueue {
            tokens: args.into_iter().map(IntoToken::into_token).collect(),
        }
    }

    pub fn next_token(&mut self) -> Option<String> {
        self.tokens.pop_front()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.tokens.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
