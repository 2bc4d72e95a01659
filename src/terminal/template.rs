use std::collections::BTreeMap;

use crate::foundation::rng::Rng64;

/// Tokenized view of a typed command.
#[derive(Clone, Debug)]
pub(crate) struct CommandInfo<'a> {
    pub text: &'a str,
    pub lower: String,
    pub words: Vec<&'a str>,
}

impl<'a> CommandInfo<'a> {
    pub(crate) fn parse(command: &'a str) -> Self {
        let text = command.trim();
        Self {
            text,
            lower: text.to_lowercase(),
            words: text.split_whitespace().collect(),
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive substring test over the whole command.
    pub(crate) fn contains(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }

    /// Case-insensitive whole-word test.
    pub(crate) fn has_word(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.eq_ignore_ascii_case(word))
    }

    pub(crate) fn program(&self) -> &'a str {
        self.words.first().copied().unwrap_or("")
    }

    /// Last positional (non-flag) word after the program name.
    pub(crate) fn last_arg(&self) -> Option<&'a str> {
        self.words
            .iter()
            .skip(1)
            .rev()
            .find(|w| !w.starts_with('-'))
            .copied()
    }

    /// Word following `flag`, e.g. the tag after `-t`.
    pub(crate) fn flag_value(&self, flag: &str) -> Option<&'a str> {
        let pos = self.words.iter().position(|w| *w == flag)?;
        self.words.get(pos + 1).copied()
    }

    /// Text inside the first pair of matching quotes.
    pub(crate) fn quoted(&self) -> Option<&'a str> {
        let text = self.text;
        let start = text.find(['"', '\''])?;
        let quote = text[start..].chars().next()?;
        let rest = &text[start + 1..];
        let end = rest.find(quote)?;
        Some(&rest[..end])
    }

    /// Repository name from a clone URL or path argument.
    pub(crate) fn repo_name(&self) -> Option<&'a str> {
        let arg = self
            .words
            .iter()
            .skip(1)
            .find(|w| w.contains('/') || w.ends_with(".git"))?;
        let tail = arg.trim_end_matches('/').rsplit(['/', ':']).next()?;
        let name = tail.strip_suffix(".git").unwrap_or(tail);
        (!name.is_empty()).then_some(name)
    }

    /// Everything after the program name with surrounding quotes removed.
    pub(crate) fn echo_text(&self) -> String {
        let rest = self
            .text
            .strip_prefix(self.program())
            .unwrap_or("")
            .trim();
        rest.chars().filter(|c| *c != '"' && *c != '\'').collect()
    }
}

/// Lazily generated substitution values for one command's output templates.
///
/// A value is generated the first time a key is seen and reused afterwards, so a hash
/// printed on two lines of the same response matches.
pub(crate) struct Fill<'a> {
    info: &'a CommandInfo<'a>,
    rng: Rng64,
    cache: BTreeMap<String, String>,
}

impl<'a> Fill<'a> {
    pub(crate) fn new(info: &'a CommandInfo<'a>) -> Self {
        Self {
            info,
            rng: Rng64::from_bytes(info.text.as_bytes()),
            cache: BTreeMap::new(),
        }
    }

    fn generate(&mut self, key: &str) -> Option<String> {
        let info = self.info;
        let value = match key {
            "hash" | "hash2" | "hash3" => self.rng.hex(7),
            "id" => self.rng.hex(12),
            "digest" => self.rng.hex(64),
            "cmd" => info.text.to_owned(),
            "program" => info.program().to_owned(),
            "arg" => info.last_arg().unwrap_or("").to_owned(),
            "msg" => info.quoted().unwrap_or("update").to_owned(),
            "echo" => info.echo_text(),
            "repo" => info.repo_name().unwrap_or("project").to_owned(),
            "project" => info.repo_name().unwrap_or("my-app").to_owned(),
            "image" => info
                .flag_value("-t")
                .or_else(|| info.last_arg().filter(|a| *a != "." && !a.contains('/')))
                .unwrap_or("app")
                .split(':')
                .next()
                .unwrap_or("app")
                .to_owned(),
            "branch" => info
                .last_arg()
                .filter(|a| !matches!(*a, "checkout" | "switch" | "branch"))
                .unwrap_or("main")
                .to_owned(),
            "n" => self.rng.range_u64(40, 1400).to_string(),
            "audited" => {
                let n: u64 = self.value("n").and_then(|v| v.parse().ok()).unwrap_or(0);
                (n + 1).to_string()
            }
            "funding" => self.rng.range_u64(3, 60).to_string(),
            "files" => self.rng.range_u64(1, 12).to_string(),
            "ins" => self.rng.range_u64(5, 300).to_string(),
            "del" => self.rng.range_u64(0, 80).to_string(),
            "objects" => self.rng.range_u64(10, 400).to_string(),
            "tests" => self.rng.range_u64(4, 60).to_string(),
            "kb" => format!("{:.2}", self.rng.range_f64(12.0, 480.0)),
            "secs" => format!("{:.1}", self.rng.range_f64(0.8, 6.0)),
            "ms" => self.rng.range_u64(120, 900).to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Value for `key`, generated and cached on first use. `None` for unknown keys.
    pub(crate) fn value(&mut self, key: &str) -> Option<String> {
        if let Some(v) = self.cache.get(key) {
            return Some(v.clone());
        }
        let v = self.generate(key)?;
        self.cache.insert(key.to_owned(), v.clone());
        Some(v)
    }

    /// Replace every `{key}` in `template`. Unknown keys and stray braces are kept verbatim.
    pub(crate) fn render(&mut self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 16);
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let resolved = after
                .find('}')
                .filter(|&close| is_key(&after[..close]))
                .and_then(|close| self.value(&after[..close]).map(|v| (close, v)));
            match resolved {
                Some((close, v)) => {
                    out.push_str(&v);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

fn is_key(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

#[cfg(test)]
#[path = "../../tests/unit/terminal/template.rs"]
mod tests;
