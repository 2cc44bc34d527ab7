use std::path::Path;

use anyhow::{Context, Error};

/// Ordered list of textual substitutions applied to a template.
///
/// The tokens are plain substrings, not patterns, and they are replaced in insertion order: the
/// value of a token is not protected from the replacements that follow it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    pairs: Vec<(String, String)>,
}

impl Replacements {
    /// Make an empty set of replacements.
    pub fn new() -> Replacements {
        Default::default()
    }

    /// Add a replacement of `token` with `value`. If the token is already present its value is
    /// updated in place.
    pub fn insert<S: Into<String>, T: Into<String>>(&mut self, token: S, value: T) -> &mut Self {
        let token = token.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(t, _)| *t == token) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((token, value)),
        }
        self
    }

    /// Apply all the replacements to `text`.
    pub fn apply(&self, text: &str) -> String {
        let mut text = text.to_string();
        for (token, value) in &self.pairs {
            text = text.replace(token.as_str(), value);
        }
        text
    }

    /// Iterate over the `(token, value)` pairs, in the order they are applied.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }
}

/// Load the template `name` from `templates_dir`, apply the replacements and write the result to
/// `output`.
pub fn fill_template<P: AsRef<Path>, Q: AsRef<Path>>(
    templates_dir: P,
    name: &str,
    output: Q,
    replacements: &Replacements,
) -> Result<(), Error> {
    let template_path = templates_dir.as_ref().join(name);
    let output = output.as_ref();
    let template = std::fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read template {}", template_path.display()))?;
    debug!(
        "Filling template {} into {}",
        template_path.display(),
        output.display()
    );
    std::fs::write(output, replacements.apply(&template))
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
