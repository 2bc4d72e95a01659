use super::*;

#[test]
fn tool_keywords_classify() {
    assert_eq!(classify("npm install react"), CommandCategory::PackageManager);
    assert_eq!(classify("yarn add lodash"), CommandCategory::PackageManager);
    assert_eq!(classify("pnpm i"), CommandCategory::PackageManager);
    assert_eq!(classify("git push origin main"), CommandCategory::Git);
    assert_eq!(classify("docker ps"), CommandCategory::Docker);
    assert_eq!(classify("ls -la"), CommandCategory::System);
    assert_eq!(classify("jest --watch"), CommandCategory::Testing);
    assert_eq!(classify("vite build"), CommandCategory::Development);
    assert_eq!(classify("vercel --prod"), CommandCategory::Deployment);
}

#[test]
fn fallback_is_general() {
    assert_eq!(classify("echo hello"), CommandCategory::General);
    assert_eq!(classify(""), CommandCategory::General);
    assert_eq!(classify("   "), CommandCategory::General);
    assert_eq!(classify("whoami"), CommandCategory::General);
}

#[test]
fn earlier_rules_win_ties() {
    assert_eq!(classify("npm run build"), CommandCategory::PackageManager);
    assert_eq!(classify("npm test"), CommandCategory::PackageManager);
    assert_eq!(classify("git clone https://x/docker.git"), CommandCategory::Git);
    assert_eq!(classify("cat test.txt"), CommandCategory::System);
    assert_eq!(classify("run-tests --build"), CommandCategory::Testing);
    assert_eq!(classify("netlify deploy --build"), CommandCategory::Development);
}

#[test]
fn matching_ignores_case() {
    assert_eq!(classify("NPM INSTALL"), CommandCategory::PackageManager);
    assert_eq!(classify("Git Status"), CommandCategory::Git);
}

#[test]
fn names_are_kebab_case() {
    assert_eq!(CommandCategory::PackageManager.to_string(), "package-manager");
    let json = serde_json::to_string(&CommandCategory::PackageManager).unwrap();
    assert_eq!(json, "\"package-manager\"");
}
