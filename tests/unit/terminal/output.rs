use super::*;
use crate::terminal::category::classify;

fn texts(lines: &[OutputLine]) -> Vec<&str> {
    lines.iter().map(|l| l.text.as_str()).collect()
}

#[test]
fn unknown_general_command_is_not_found() {
    let lines = simulate("foobar --help", CommandCategory::General);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "foobar --help: command not found");
    assert_eq!(lines[0].severity, Severity::Error);
}

#[test]
fn not_found_uses_trimmed_text() {
    let lines = simulate("   hello   world  ", CommandCategory::General);
    assert_eq!(texts(&lines), vec!["hello   world: command not found"]);
}

#[test]
fn echo_repeats_its_argument() {
    let lines = simulate("echo \"Hello, world\"", CommandCategory::General);
    assert_eq!(texts(&lines), vec!["Hello, world"]);
    assert_eq!(lines[0].severity, Severity::Output);
}

#[test]
fn blank_and_silent_commands_print_nothing() {
    assert!(simulate("", CommandCategory::General).is_empty());
    assert!(simulate("   ", CommandCategory::Git).is_empty());
    assert!(simulate("clear", CommandCategory::General).is_empty());
    assert!(simulate("exit", CommandCategory::General).is_empty());
    assert!(simulate("git add .", CommandCategory::Git).is_empty());
    assert!(simulate("cd src", CommandCategory::System).is_empty());
}

#[test]
fn git_commit_uses_message_and_hash() {
    let lines = simulate("git commit -m 'initial commit'", CommandCategory::Git);
    assert_eq!(lines.len(), 2);
    let first = &lines[0].text;
    assert!(first.starts_with("[main "), "{first}");
    assert!(first.ends_with("] initial commit"), "{first}");
    assert!(lines.iter().all(|l| !l.text.contains('{')));
}

#[test]
fn clone_names_the_repository() {
    let (category, lines) = simulate_command("git clone https://github.com/acme/rocket.git");
    assert_eq!(category, CommandCategory::Git);
    assert_eq!(lines[0].text, "Cloning into 'rocket'...");
    assert_eq!(lines.last().map(|l| l.severity), Some(Severity::Success));
}

#[test]
fn npm_install_reports_counts() {
    let lines = simulate("npm install react", CommandCategory::PackageManager);
    let added = lines
        .iter()
        .find(|l| l.text.starts_with("added "))
        .expect("added line");
    assert_eq!(added.severity, Severity::Success);
    let warn = lines
        .iter()
        .find(|l| l.severity == Severity::Warning)
        .expect("deprecation warning");
    assert!(warn.text.starts_with("npm WARN deprecated"));
    assert!(warn.delay_secs <= added.delay_secs);
    assert!(lines.iter().any(|l| l.is_blank()));
    assert_eq!(lines.last().map(|l| l.text.as_str()), Some("found 0 vulnerabilities"));
}

#[test]
fn simulation_is_deterministic() {
    let cmds = [
        "npm install",
        "git push origin main",
        "docker run -d nginx",
        "vercel --prod",
        "npx cypress run",
    ];
    for cmd in cmds {
        let category = classify(cmd);
        assert_eq!(simulate(cmd, category), simulate(cmd, category), "{cmd}");
    }
}

#[test]
fn delays_are_ordered_for_classified_commands() {
    let cmds = [
        "yarn",
        "pnpm run build",
        "git pull",
        "docker compose up",
        "cat package.json",
        "jest",
        "npm run dev",
        "netlify deploy --prod",
        "echo ready",
    ];
    for cmd in cmds {
        let (_, lines) = simulate_command(cmd);
        assert!(!lines.is_empty(), "{cmd}");
        assert!(
            lines.windows(2).all(|w| w[0].delay_secs <= w[1].delay_secs),
            "{cmd}"
        );
    }
}

#[test]
fn severity_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&Severity::Success).unwrap(), "\"success\"");
    assert_eq!(Severity::default(), Severity::Output);
}
