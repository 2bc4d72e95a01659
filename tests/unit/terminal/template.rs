use super::*;

#[test]
fn parse_trims_and_splits() {
    let info = CommandInfo::parse("  git   commit -m \"first commit\"  ");
    assert_eq!(info.text, "git   commit -m \"first commit\"");
    assert_eq!(info.program(), "git");
    assert_eq!(info.words.len(), 5);
    assert!(info.has_word("COMMIT"));
    assert!(info.contains("first"));
    assert!(!info.is_blank());
    assert!(CommandInfo::parse("   ").is_blank());
}

#[test]
fn quoted_text_and_args() {
    let info = CommandInfo::parse("git commit -m 'fix: typo'");
    assert_eq!(info.quoted(), Some("fix: typo"));
    assert_eq!(CommandInfo::parse("git commit").quoted(), None);
    assert_eq!(CommandInfo::parse("git checkout -b feature").last_arg(), Some("feature"));
    assert_eq!(CommandInfo::parse("ls -la").last_arg(), None);
    assert_eq!(CommandInfo::parse("docker build -t web .").flag_value("-t"), Some("web"));
}

#[test]
fn repo_names_from_urls() {
    let https = CommandInfo::parse("git clone https://github.com/acme/rocket.git");
    assert_eq!(https.repo_name(), Some("rocket"));
    let ssh = CommandInfo::parse("git clone git@github.com:acme/widgets.git");
    assert_eq!(ssh.repo_name(), Some("widgets"));
    let slash = CommandInfo::parse("git clone https://example.com/team/site/");
    assert_eq!(slash.repo_name(), Some("site"));
    assert_eq!(CommandInfo::parse("git clone").repo_name(), None);
}

#[test]
fn echo_strips_quotes() {
    assert_eq!(CommandInfo::parse("echo \"Hello, world\"").echo_text(), "Hello, world");
    assert_eq!(CommandInfo::parse("echo").echo_text(), "");
}

#[test]
fn render_substitutes_known_keys_only() {
    let info = CommandInfo::parse("git clone https://github.com/acme/rocket.git");
    let mut fill = Fill::new(&info);
    assert_eq!(fill.render("Cloning into '{repo}'..."), "Cloning into 'rocket'...");
    assert_eq!(fill.render("{unknown} and {} and {"), "{unknown} and {} and {");
    assert_eq!(fill.render("json {\"a\": 1}"), "json {\"a\": 1}");
}

#[test]
fn generated_values_are_cached_per_command() {
    let info = CommandInfo::parse("git commit -m 'init'");
    let mut fill = Fill::new(&info);
    let a = fill.render("[main {hash}] {msg}");
    let b = fill.render("{hash}");
    assert!(a.ends_with("] init"));
    assert!(a.contains(&b));
    assert_eq!(b.len(), 7);
    assert_ne!(fill.render("{hash2}"), b);
}

#[test]
fn generation_is_seeded_by_command_text() {
    let info = CommandInfo::parse("docker run -d nginx");
    let a = Fill::new(&info).render("{id} {secs}");
    let b = Fill::new(&info).render("{id} {secs}");
    assert_eq!(a, b);
}

#[test]
fn audited_follows_added_count() {
    let info = CommandInfo::parse("npm install");
    let mut fill = Fill::new(&info);
    let n: u64 = fill.render("{n}").parse().unwrap();
    let audited: u64 = fill.render("{audited}").parse().unwrap();
    assert_eq!(audited, n + 1);
    assert!((40..=1400).contains(&n));
}

#[test]
fn image_and_branch_defaults() {
    let build = CommandInfo::parse("docker build -t web:dev .");
    assert_eq!(Fill::new(&build).render("{image}"), "web");
    let pull = CommandInfo::parse("docker pull nginx:latest");
    assert_eq!(Fill::new(&pull).render("{image}"), "nginx");
    let checkout = CommandInfo::parse("git checkout");
    assert_eq!(Fill::new(&checkout).render("{branch}"), "main");
}
