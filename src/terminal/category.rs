use std::fmt;

/// Bucket used to pick a plausible simulated output for a typed command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandCategory {
    /// npm, yarn, pnpm.
    PackageManager,
    /// git.
    Git,
    /// docker and docker compose.
    Docker,
    /// Test runners.
    Testing,
    /// Build and dev-server tasks.
    Development,
    /// Hosting CLIs.
    Deployment,
    /// Basic shell builtins and file utilities.
    System,
    /// Anything else.
    General,
}

impl CommandCategory {
    /// Canonical kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PackageManager => "package-manager",
            Self::Git => "git",
            Self::Docker => "docker",
            Self::Testing => "testing",
            Self::Development => "development",
            Self::Deployment => "deployment",
            Self::System => "system",
            Self::General => "general",
        }
    }
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification rules in priority order. Tool names come before action words, so
/// `npm run build` is a package-manager command rather than a development one.
const RULES: &[(CommandCategory, &[&str])] = &[
    (CommandCategory::PackageManager, &["npm", "yarn", "pnpm"]),
    (CommandCategory::Git, &["git"]),
    (CommandCategory::Docker, &["docker"]),
    (CommandCategory::System, &["ls", "cd", "mkdir", "touch", "cat"]),
    (CommandCategory::Testing, &["test", "jest", "cypress"]),
    (CommandCategory::Development, &["build", "dev", "start"]),
    (CommandCategory::Deployment, &["deploy", "vercel", "netlify"]),
];

/// Classify a command by case-insensitive substring match; the first matching rule wins.
pub fn classify(command: &str) -> CommandCategory {
    let lower = command.to_lowercase();
    RULES
        .iter()
        .find(|(_, needles)| needles.iter().any(|n| lower.contains(n)))
        .map(|(category, _)| *category)
        .unwrap_or(CommandCategory::General)
}

#[cfg(test)]
#[path = "../../tests/unit/terminal/category.rs"]
mod tests;
