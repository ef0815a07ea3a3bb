// codebuild-rs: CodeBuild CI integration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable specification parser.
//!
//! # Format
//!
//! ```text
//! spec      := WS* ( "[" WS* pair-list WS* "]" )? WS*
//! pair-list := pair ( WS* "," WS* pair )*
//! pair      := "{" WS* token WS* "," WS* token WS* "}"
//! token     := chars except , { } [ ]   (edges trimmed, non-empty)
//! ```
//!
//! # Scanner
//!
//! ```text
//!            '{'                ','                 '}'
//! ExpectPair ---> InName(start) ---> InValue(start) ---> ExpectCommaOrEnd
//!     ^                                                       |
//!     +---------------------------- ',' ----------------------+
//!
//! accept: end of interior in ExpectCommaOrEnd
//! ```
//!
//! A missing or blank spec is an empty list. An explicit `[]` is rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EnvSpecError;

/// One `{name, value}` entry of a specification.
///
/// Both tokens are non-empty, carry no edge whitespace and contain none of
/// `, { } [ ]`, so every pair can be written back in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPair")]
pub struct NameValuePair {
    name: String,
    value: String,
}

#[derive(Deserialize)]
struct RawPair {
    name: String,
    value: String,
}

impl TryFrom<RawPair> for NameValuePair {
    type Error = EnvSpecError;

    fn try_from(raw: RawPair) -> Result<Self, Self::Error> {
        Self::try_new(raw.name, raw.value)
    }
}

impl NameValuePair {
    /// Builds a pair from tokens the scanner already validated.
    pub(crate) fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Builds a pair, applying the same token rules as the parser.
    ///
    /// # Errors
    ///
    /// Returns [`EnvSpecError::InvalidSpecification`] if either token is
    /// empty, has surrounding whitespace or contains a delimiter.
    pub fn try_new(
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, EnvSpecError> {
        let (name, value) = (name.into(), value.into());
        if is_canonical_token(&name) && is_canonical_token(&value) {
            Ok(Self { name, value })
        } else {
            Err(EnvSpecError::InvalidSpecification)
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Ordered list of parsed pairs.
///
/// Duplicate names are kept in input order; this is not a map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvVarSpec(Vec<NameValuePair>);

impl EnvVarSpec {
    /// Parses a raw specification string.
    ///
    /// `None`, `""` and whitespace-only input yield an empty spec.
    ///
    /// # Errors
    ///
    /// Returns [`EnvSpecError::InvalidSpecification`] for any malformed input,
    /// including the explicitly empty list `[]`.
    ///
    /// # Example
    ///
    /// ```
    /// use codebuild_rs::envspec::EnvVarSpec;
    ///
    /// let spec = EnvVarSpec::parse(Some("[{STAGE, beta}, {REGION, us-east-1}]"))?;
    /// assert_eq!(spec.len(), 2);
    /// assert_eq!(spec.pairs()[0].name(), "STAGE");
    /// # Ok::<(), codebuild_rs::error::EnvSpecError>(())
    /// ```
    pub fn parse(raw: Option<&str>) -> Result<Self, EnvSpecError> {
        parse(raw)
    }

    #[must_use]
    pub fn pairs(&self) -> &[NameValuePair] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NameValuePair> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_pairs(self) -> Vec<NameValuePair> {
        self.0
    }
}

impl From<Vec<NameValuePair>> for EnvVarSpec {
    fn from(pairs: Vec<NameValuePair>) -> Self {
        Self(pairs)
    }
}

impl<'a> IntoIterator for &'a EnvVarSpec {
    type Item = &'a NameValuePair;
    type IntoIter = std::slice::Iter<'a, NameValuePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Canonical form: `[{n, v}, {n2, v2}]`, or the empty string for no pairs.
impl fmt::Display for EnvVarSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        f.write_str("[")?;
        for (i, pair) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{{{}, {}}}", pair.name, pair.value)?;
        }
        f.write_str("]")
    }
}

impl FromStr for EnvVarSpec {
    type Err = EnvSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(Some(s))
    }
}

/// Scanner position within the bracket interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// After `[` or a separating comma.
    ExpectPair,
    /// Inside `{`, before the pair's comma. Holds the token start offset.
    InName(usize),
    /// After the pair's comma, before `}`.
    InValue(usize),
    /// After `}`.
    ExpectCommaOrEnd,
}

/// Internal rejection reason, only surfaced through tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reject {
    MissingEnvelope,
    EmptyList,
    NestedPair,
    BracketInPair,
    MissingComma,
    ExtraComma,
    EmptyToken,
    StrayContent,
    Unterminated,
}

impl Reject {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingEnvelope => "not enclosed in [ ]",
            Self::EmptyList => "empty list",
            Self::NestedPair => "nested pair",
            Self::BracketInPair => "bracket inside pair",
            Self::MissingComma => "pair without name/value separator",
            Self::ExtraComma => "more than two tokens in pair",
            Self::EmptyToken => "empty name or value",
            Self::StrayContent => "content outside of a pair",
            Self::Unterminated => "unterminated list",
        }
    }
}

/// Parses a raw specification string into ordered pairs.
///
/// # Errors
///
/// Returns [`EnvSpecError::InvalidSpecification`] if the input is not a
/// bracketed list of `{name, value}` pairs.
pub fn parse(raw: Option<&str>) -> Result<EnvVarSpec, EnvSpecError> {
    let Some(raw) = raw else {
        return Ok(EnvVarSpec::default());
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(EnvVarSpec::default());
    }

    scan(trimmed).map(EnvVarSpec).map_err(|reason| {
        tracing::debug!(reason = reason.as_str(), "rejected environment variable specification");
        EnvSpecError::InvalidSpecification
    })
}

fn scan(trimmed: &str) -> Result<Vec<NameValuePair>, Reject> {
    let interior = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(Reject::MissingEnvelope)?;
    if interior.trim().is_empty() {
        return Err(Reject::EmptyList);
    }

    let mut pairs = Vec::new();
    let mut name: &str = "";
    let mut state = State::ExpectPair;

    for (i, c) in interior.char_indices() {
        state = match (state, c) {
            (State::ExpectPair | State::ExpectCommaOrEnd, c) if c.is_whitespace() => state,
            (State::ExpectPair, '{') => State::InName(i + 1),
            (State::ExpectCommaOrEnd, ',') => State::ExpectPair,
            (State::ExpectPair | State::ExpectCommaOrEnd, _) => {
                return Err(Reject::StrayContent);
            }

            (State::InName(_) | State::InValue(_), '{') => return Err(Reject::NestedPair),
            (State::InName(_) | State::InValue(_), '[' | ']') => {
                return Err(Reject::BracketInPair);
            }
            (State::InName(_), '}') => return Err(Reject::MissingComma),
            (State::InName(start), ',') => {
                name = token(&interior[start..i])?;
                State::InValue(i + 1)
            }
            (State::InValue(_), ',') => return Err(Reject::ExtraComma),
            (State::InValue(start), '}') => {
                let value = token(&interior[start..i])?;
                pairs.push(NameValuePair::new(name, value));
                State::ExpectCommaOrEnd
            }
            (State::InName(_) | State::InValue(_), _) => state,
        };
    }

    if state == State::ExpectCommaOrEnd {
        Ok(pairs)
    } else {
        Err(Reject::Unterminated)
    }
}

fn is_canonical_token(token: &str) -> bool {
    !token.is_empty()
        && token.trim() == token
        && !token.contains([',', '{', '}', '[', ']'])
}

fn token(raw: &str) -> Result<&str, Reject> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(Reject::EmptyToken)
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests;
