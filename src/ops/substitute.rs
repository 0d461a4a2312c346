//! Literal find-and-replace of the manifest's version fragment.

/// Version searched for and used when no version is supplied.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// The literal text searched for and the text written in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragments {
    pub find: String,
    pub replace: String,
}

impl Fragments {
    /// Builds the fragments for a new version.
    ///
    /// The find fragment always targets [`DEFAULT_VERSION`]; only the
    /// replacement follows `version`.
    pub fn for_version(version: &str) -> Self {
        Self {
            find: version_fragment(DEFAULT_VERSION),
            replace: version_fragment(version),
        }
    }
}

fn version_fragment(value: &str) -> String {
    format!("version = \"{}\"", value)
}

/// Rewritten content and the number of fragments replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub content: String,
    pub replacements: usize,
}

/// Replaces every occurrence of `fragments.find` with `fragments.replace`.
///
/// Works line by line and keeps each line's terminator, so the line count
/// and any `\r\n` endings survive. Matches are substrings, not keys:
/// `other_version = "0.0.0"` is rewritten too.
pub fn substitute(content: &str, fragments: &Fragments) -> Substitution {
    let mut out = String::with_capacity(content.len());
    let mut replacements = 0;

    for line in content.split_inclusive('\n') {
        let hits = line.matches(fragments.find.as_str()).count();
        if hits == 0 {
            out.push_str(line);
            continue;
        }
        replacements += hits;
        out.push_str(&line.replace(&fragments.find, &fragments.replace));
    }

    Substitution {
        content: out,
        replacements,
    }
}
