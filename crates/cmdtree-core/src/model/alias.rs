use serde::Serialize;

/// Case-normalized set of tokens routing to one child node
///
/// Aliases are lower-cased and de-duplicated on construction; insertion order
/// of first occurrence is kept so descriptors list them as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AliasSet {
    aliases: Vec<String>,
}

impl AliasSet {
    /// Normalize the given aliases into a set
    ///
    /// Returns `None` when no aliases are given.
    pub fn new<I, S>(aliases: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for alias in aliases {
            let alias = normalize(alias.as_ref());
            if !normalized.contains(&alias) {
                normalized.push(alias);
            }
        }

        if normalized.is_empty() {
            None
        } else {
            Some(Self {
                aliases: normalized,
            })
        }
    }

    /// Case-insensitive membership test
    pub fn contains(&self, token: &str) -> bool {
        self.contains_normalized(&normalize(token))
    }

    /// Membership test for a token already passed through `normalize`
    pub(crate) fn contains_normalized(&self, token: &str) -> bool {
        self.aliases.iter().any(|alias| alias == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.aliases.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Always false for a constructed set; provided for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Case-fold a token one character at a time
///
/// Each character is upper-cased, then lower-cased, using only one-to-one
/// mappings. `İ` folds to `i` and the Kelvin sign to `k`; `ß` stays `ß`
/// rather than expanding to `ss`. Folded tokens keep their character count.
pub(crate) fn normalize(token: &str) -> String {
    token.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let upper = single(c.to_uppercase()).unwrap_or(c);
    upper.to_lowercase().next().unwrap_or(upper)
}

fn single(mut mapping: impl Iterator<Item = char>) -> Option<char> {
    let first = mapping.next()?;
    mapping.next().is_none().then_some(first)
}
