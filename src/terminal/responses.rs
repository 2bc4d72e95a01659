//! Canned response tables for the command output simulator.
//!
//! Each [`Response`] maps to a fixed `&'static` list of line templates; selection is a pure
//! function of the command category and the command text.

use crate::terminal::category::CommandCategory;
use crate::terminal::output::Severity::{Error, Info, Output, Success, Warning};
use crate::terminal::output::{LineTemplate, line};
use crate::terminal::template::CommandInfo;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Response {
    NpmInstall,
    YarnInstall,
    ScriptBuild,
    ScriptDev,
    ScriptTest,
    PackageDone,
    GitClone,
    GitAdd,
    GitCommit,
    GitPush,
    GitPull,
    GitStatus,
    GitCheckout,
    GitLog,
    GitBranch,
    DockerBuild,
    DockerRun,
    DockerPs,
    DockerPull,
    ComposeUp,
    List,
    CatManifest,
    CatReadme,
    CatMissing,
    Jest,
    Cypress,
    ProductionBuild,
    DevServer,
    Vercel,
    Netlify,
    Deploy,
    Echo,
    Silent,
    Done,
    NotFound,
}

impl Response {
    /// Second-level rule set: pick a response table within `category`.
    pub(crate) fn select(category: CommandCategory, cmd: &CommandInfo<'_>) -> Self {
        match category {
            CommandCategory::PackageManager => select_package(cmd),
            CommandCategory::Git => select_git(cmd),
            CommandCategory::Docker => select_docker(cmd),
            CommandCategory::System => select_system(cmd),
            CommandCategory::Testing => {
                if cmd.contains("cypress") {
                    Self::Cypress
                } else if cmd.contains("jest") || cmd.contains("test") {
                    Self::Jest
                } else {
                    Self::Done
                }
            }
            CommandCategory::Development => {
                if cmd.contains("build") {
                    Self::ProductionBuild
                } else if cmd.contains("dev") || cmd.contains("start") {
                    Self::DevServer
                } else {
                    Self::Done
                }
            }
            CommandCategory::Deployment => {
                if cmd.contains("vercel") {
                    Self::Vercel
                } else if cmd.contains("netlify") {
                    Self::Netlify
                } else if cmd.contains("deploy") {
                    Self::Deploy
                } else {
                    Self::Done
                }
            }
            CommandCategory::General => select_general(cmd),
        }
    }

    pub(crate) fn lines(self) -> &'static [LineTemplate] {
        match self {
            Self::NpmInstall => NPM_INSTALL,
            Self::YarnInstall => YARN_INSTALL,
            Self::ScriptBuild => SCRIPT_BUILD,
            Self::ScriptDev => SCRIPT_DEV,
            Self::ScriptTest => SCRIPT_TEST,
            Self::PackageDone => PACKAGE_DONE,
            Self::GitClone => GIT_CLONE,
            Self::GitAdd | Self::Silent => &[],
            Self::GitCommit => GIT_COMMIT,
            Self::GitPush => GIT_PUSH,
            Self::GitPull => GIT_PULL,
            Self::GitStatus => GIT_STATUS,
            Self::GitCheckout => GIT_CHECKOUT,
            Self::GitLog => GIT_LOG,
            Self::GitBranch => GIT_BRANCH,
            Self::DockerBuild => DOCKER_BUILD,
            Self::DockerRun => DOCKER_RUN,
            Self::DockerPs => DOCKER_PS,
            Self::DockerPull => DOCKER_PULL,
            Self::ComposeUp => COMPOSE_UP,
            Self::List => LIST,
            Self::CatManifest => CAT_MANIFEST,
            Self::CatReadme => CAT_README,
            Self::CatMissing => CAT_MISSING,
            Self::Jest => JEST,
            Self::Cypress => CYPRESS,
            Self::ProductionBuild => PRODUCTION_BUILD,
            Self::DevServer => DEV_SERVER,
            Self::Vercel => VERCEL,
            Self::Netlify => NETLIFY,
            Self::Deploy => DEPLOY,
            Self::Echo => ECHO,
            Self::Done => DONE,
            Self::NotFound => NOT_FOUND,
        }
    }
}

fn select_package(cmd: &CommandInfo<'_>) -> Response {
    let installs = ["install", "i", "add", "ci"]
        .iter()
        .any(|w| cmd.has_word(w));
    if installs || cmd.words.len() == 1 {
        if cmd.program().eq_ignore_ascii_case("yarn") {
            Response::YarnInstall
        } else {
            Response::NpmInstall
        }
    } else if cmd.contains("build") {
        Response::ScriptBuild
    } else if cmd.contains("dev") || cmd.contains("start") {
        Response::ScriptDev
    } else if cmd.contains("test") {
        Response::ScriptTest
    } else {
        Response::PackageDone
    }
}

fn select_git(cmd: &CommandInfo<'_>) -> Response {
    // Order matters: `git commit -m "add x"` must not read as `git add`.
    const RULES: &[(&str, Response)] = &[
        ("clone", Response::GitClone),
        ("commit", Response::GitCommit),
        ("push", Response::GitPush),
        ("pull", Response::GitPull),
        ("status", Response::GitStatus),
        ("checkout", Response::GitCheckout),
        ("switch", Response::GitCheckout),
        ("log", Response::GitLog),
        ("branch", Response::GitBranch),
        ("add", Response::GitAdd),
    ];
    RULES
        .iter()
        .find(|(needle, _)| cmd.contains(needle))
        .map(|(_, r)| *r)
        .unwrap_or(Response::Done)
}

fn select_docker(cmd: &CommandInfo<'_>) -> Response {
    if cmd.contains("compose") && cmd.has_word("up") {
        Response::ComposeUp
    } else if cmd.contains("build") {
        Response::DockerBuild
    } else if cmd.contains("pull") {
        Response::DockerPull
    } else if cmd.contains("run") {
        Response::DockerRun
    } else if cmd.has_word("ps") {
        Response::DockerPs
    } else {
        Response::Done
    }
}

fn select_system(cmd: &CommandInfo<'_>) -> Response {
    match cmd.program().to_ascii_lowercase().as_str() {
        "ls" => Response::List,
        "cat" if cmd.contains("package.json") => Response::CatManifest,
        "cat" if cmd.contains("readme") => Response::CatReadme,
        "cat" => Response::CatMissing,
        "cd" | "mkdir" | "touch" => Response::Silent,
        _ => Response::Done,
    }
}

fn select_general(cmd: &CommandInfo<'_>) -> Response {
    match cmd.program().to_ascii_lowercase().as_str() {
        "echo" => Response::Echo,
        "clear" | "exit" => Response::Silent,
        _ => Response::NotFound,
    }
}

const NPM_INSTALL: &[LineTemplate] = &[
    line("⠙ reify: timing idealTree Completed in {ms}ms", Info, 0.4),
    line(
        "npm WARN deprecated inflight@1.0.6: This module is not supported, and leaks memory.",
        Warning,
        0.9,
    ),
    line(
        "added {n} packages, and audited {audited} packages in {secs}s",
        Success,
        1.2,
    ),
    line("", Output, 1.2),
    line("{funding} packages are looking for funding", Output, 1.3),
    line("  run `npm fund` for details", Output, 1.3),
    line("", Output, 1.3),
    line("found 0 vulnerabilities", Success, 1.5),
];

const YARN_INSTALL: &[LineTemplate] = &[
    line("yarn install v1.22.19", Output, 0.1),
    line("[1/4] 🔍  Resolving packages...", Info, 0.3),
    line("[2/4] 🚚  Fetching packages...", Info, 0.7),
    line("[3/4] 🔗  Linking dependencies...", Info, 1.1),
    line("[4/4] 🔨  Building fresh packages...", Info, 1.4),
    line("success Saved lockfile.", Success, 1.6),
    line("✨  Done in {secs}s.", Success, 1.7),
];

const SCRIPT_BUILD: &[LineTemplate] = &[
    line("> {project}@1.0.0 build", Output, 0.1),
    line("> vite build", Output, 0.1),
    line("", Output, 0.2),
    line("vite v5.0.0 building for production...", Info, 0.4),
    line("✓ {objects} modules transformed.", Success, 1.2),
    line("dist/index.html                 0.46 kB", Output, 1.4),
    line("dist/assets/index-{hash}.js   {kb} kB", Output, 1.5),
    line("✓ built in {secs}s", Success, 1.7),
];

const SCRIPT_DEV: &[LineTemplate] = &[
    line("> {project}@1.0.0 dev", Output, 0.1),
    line("> vite", Output, 0.1),
    line("", Output, 0.2),
    line("  VITE v5.0.0  ready in {ms} ms", Success, 0.8),
    line("", Output, 0.8),
    line("  ➜  Local:   http://localhost:5173/", Info, 0.9),
    line("  ➜  Network: use --host to expose", Output, 1.0),
];

const SCRIPT_TEST: &[LineTemplate] = &[
    line("> {project}@1.0.0 test", Output, 0.1),
    line("> jest", Output, 0.1),
    line("", Output, 0.2),
    line("PASS  src/App.test.js", Success, 1.0),
    line("PASS  src/utils/format.test.js", Success, 1.3),
    line("", Output, 1.4),
    line("Test Suites: 2 passed, 2 total", Success, 1.5),
    line("Tests:       {tests} passed, {tests} total", Success, 1.5),
    line("Time:        {secs} s", Output, 1.6),
];

const PACKAGE_DONE: &[LineTemplate] = &[line("✨ Done in {secs}s.", Success, 0.6)];

const GIT_CLONE: &[LineTemplate] = &[
    line("Cloning into '{repo}'...", Output, 0.1),
    line("remote: Enumerating objects: {objects}, done.", Output, 0.5),
    line(
        "remote: Counting objects: 100% ({objects}/{objects}), done.",
        Output,
        0.8,
    ),
    line("remote: Compressing objects: 100%, done.", Output, 1.0),
    line(
        "Receiving objects: 100% ({objects}/{objects}), {kb} KiB | 2.10 MiB/s, done.",
        Output,
        1.5,
    ),
    line("Resolving deltas: 100%, done.", Success, 1.8),
];

const GIT_COMMIT: &[LineTemplate] = &[
    line("[main {hash}] {msg}", Output, 0.2),
    line(
        " {files} files changed, {ins} insertions(+), {del} deletions(-)",
        Output,
        0.3,
    ),
];

const GIT_PUSH: &[LineTemplate] = &[
    line("Enumerating objects: {objects}, done.", Output, 0.3),
    line("Counting objects: 100% ({objects}/{objects}), done.", Output, 0.5),
    line(
        "Writing objects: 100% ({objects}/{objects}), {kb} KiB | 1.20 MiB/s, done.",
        Output,
        0.9,
    ),
    line("To github.com:you/{project}.git", Output, 1.1),
    line("   {hash}..{hash2}  main -> main", Success, 1.2),
];

const GIT_PULL: &[LineTemplate] = &[
    line("remote: Enumerating objects: {objects}, done.", Output, 0.4),
    line("Updating {hash}..{hash2}", Output, 0.8),
    line("Fast-forward", Output, 0.9),
    line(
        " {files} files changed, {ins} insertions(+), {del} deletions(-)",
        Success,
        1.0,
    ),
];

const GIT_STATUS: &[LineTemplate] = &[
    line("On branch main", Output, 0.1),
    line("Your branch is up to date with 'origin/main'.", Output, 0.1),
    line("", Output, 0.1),
    line("nothing to commit, working tree clean", Success, 0.2),
];

const GIT_CHECKOUT: &[LineTemplate] = &[line("Switched to a new branch '{branch}'", Success, 0.2)];

const GIT_LOG: &[LineTemplate] = &[
    line("{hash} (HEAD -> main, origin/main) Add animated terminal", Info, 0.1),
    line("{hash2} Tune wave layer opacity", Output, 0.2),
    line("{hash3} Initial commit", Output, 0.3),
];

const GIT_BRANCH: &[LineTemplate] = &[
    line("* main", Success, 0.1),
    line("  develop", Output, 0.1),
    line("  feature/terminal-animation", Output, 0.1),
];

const DOCKER_BUILD: &[LineTemplate] = &[
    line("[+] Building {secs}s (8/8) FINISHED", Info, 0.4),
    line(" => [internal] load build definition from Dockerfile", Output, 0.6),
    line(" => [1/4] FROM docker.io/library/node:20-alpine", Output, 0.9),
    line(" => [2/4] WORKDIR /app", Output, 1.1),
    line(" => [3/4] RUN npm ci", Output, 1.6),
    line(" => [4/4] COPY . .", Output, 1.9),
    line(" => exporting to image", Output, 2.2),
    line(" => => naming to docker.io/library/{image}:latest", Success, 2.4),
];

const DOCKER_RUN: &[LineTemplate] = &[line("{digest}", Output, 0.6)];

const DOCKER_PS: &[LineTemplate] = &[
    line(
        "CONTAINER ID   IMAGE        STATUS         PORTS",
        Output,
        0.1,
    ),
    line(
        "{id}   {image}:latest   Up 2 minutes   0.0.0.0:3000->3000/tcp",
        Output,
        0.2,
    ),
];

const DOCKER_PULL: &[LineTemplate] = &[
    line("Using default tag: latest", Output, 0.2),
    line("latest: Pulling from library/{image}", Output, 0.4),
    line("{id}: Pull complete", Output, 1.0),
    line("Digest: sha256:{digest}", Output, 1.3),
    line("Status: Downloaded newer image for {image}:latest", Success, 1.4),
    line("docker.io/library/{image}:latest", Output, 1.4),
];

const COMPOSE_UP: &[LineTemplate] = &[
    line("[+] Running 3/3", Info, 0.4),
    line(" ✔ Network {project}_default  Created", Success, 0.7),
    line(" ✔ Container {project}-db-1   Started", Success, 1.1),
    line(" ✔ Container {project}-web-1  Started", Success, 1.4),
];

const LIST: &[LineTemplate] = &[line(
    "README.md  package.json  public  src  node_modules",
    Output,
    0.1,
)];

const CAT_MANIFEST: &[LineTemplate] = &[
    line("{", Output, 0.1),
    line("  \"name\": \"{project}\",", Output, 0.1),
    line("  \"version\": \"1.0.0\",", Output, 0.1),
    line("  \"scripts\": {", Output, 0.1),
    line("    \"dev\": \"vite\",", Output, 0.1),
    line("    \"build\": \"vite build\"", Output, 0.1),
    line("  }", Output, 0.1),
    line("}", Output, 0.1),
];

const CAT_README: &[LineTemplate] = &[
    line("# {project}", Output, 0.1),
    line("", Output, 0.1),
    line("Animated SVGs for your documentation.", Output, 0.1),
];

const CAT_MISSING: &[LineTemplate] = &[line("cat: {arg}: No such file or directory", Error, 0.1)];

const JEST: &[LineTemplate] = &[
    line("PASS  src/App.test.js", Success, 0.8),
    line("PASS  src/utils/format.test.js", Success, 1.1),
    line("", Output, 1.2),
    line("Test Suites: 2 passed, 2 total", Success, 1.3),
    line("Tests:       {tests} passed, {tests} total", Success, 1.3),
    line("Snapshots:   0 total", Output, 1.4),
    line("Time:        {secs} s", Output, 1.4),
    line("Ran all test suites.", Output, 1.5),
];

const CYPRESS: &[LineTemplate] = &[
    line("  Running:  login.cy.js                    (1 of 2)", Info, 0.6),
    line("    ✓ renders the login form ({ms}ms)", Success, 1.2),
    line("    ✓ signs in with valid credentials", Success, 1.6),
    line("  Running:  checkout.cy.js                 (2 of 2)", Info, 2.0),
    line("    ✓ completes a purchase", Success, 2.6),
    line("", Output, 2.7),
    line("  ✔  All specs passed!       {secs}s     3     3", Success, 2.9),
];

const PRODUCTION_BUILD: &[LineTemplate] = &[
    line("Creating an optimized production build...", Info, 0.3),
    line("Compiled successfully.", Success, 1.6),
    line("", Output, 1.6),
    line("File sizes after gzip:", Output, 1.7),
    line("  {kb} kB  build/static/js/main.{hash}.js", Output, 1.8),
];

const DEV_SERVER: &[LineTemplate] = &[
    line("  VITE v5.0.0  ready in {ms} ms", Success, 0.6),
    line("", Output, 0.6),
    line("  ➜  Local:   http://localhost:5173/", Info, 0.7),
    line("  ➜  Network: use --host to expose", Output, 0.8),
];

const VERCEL: &[LineTemplate] = &[
    line("Vercel CLI 33.0.1", Output, 0.1),
    line(
        "🔍  Inspect: https://vercel.com/you/{project}/{hash} [{ms}ms]",
        Info,
        0.8,
    ),
    line(
        "✅  Production: https://{project}.vercel.app [{secs}s]",
        Success,
        2.2,
    ),
];

const NETLIFY: &[LineTemplate] = &[
    line("Deploy path:        /app/dist", Output, 0.2),
    line("Deploying to main site URL...", Info, 0.5),
    line("✔ Finished hashing {objects} files", Output, 1.0),
    line("✔ CDN requesting 3 files", Output, 1.4),
    line("✔ Deploy is live!", Success, 2.0),
    line("Website URL:       https://{project}.netlify.app", Info, 2.1),
];

const DEPLOY: &[LineTemplate] = &[
    line("🚀 Deploying {project}...", Info, 0.3),
    line("✓ Build completed", Success, 1.4),
    line("✓ Deployed to production", Success, 2.0),
];

const ECHO: &[LineTemplate] = &[line("{echo}", Output, 0.05)];

const DONE: &[LineTemplate] = &[line("✓ Done", Success, 0.3)];

const NOT_FOUND: &[LineTemplate] = &[line("{cmd}: command not found", Error, 0.1)];

#[cfg(test)]
pub(crate) const ALL: &[Response] = &[
    Response::NpmInstall,
    Response::YarnInstall,
    Response::ScriptBuild,
    Response::ScriptDev,
    Response::ScriptTest,
    Response::PackageDone,
    Response::GitClone,
    Response::GitAdd,
    Response::GitCommit,
    Response::GitPush,
    Response::GitPull,
    Response::GitStatus,
    Response::GitCheckout,
    Response::GitLog,
    Response::GitBranch,
    Response::DockerBuild,
    Response::DockerRun,
    Response::DockerPs,
    Response::DockerPull,
    Response::ComposeUp,
    Response::List,
    Response::CatManifest,
    Response::CatReadme,
    Response::CatMissing,
    Response::Jest,
    Response::Cypress,
    Response::ProductionBuild,
    Response::DevServer,
    Response::Vercel,
    Response::Netlify,
    Response::Deploy,
    Response::Echo,
    Response::Silent,
    Response::Done,
    Response::NotFound,
];

#[cfg(test)]
#[path = "../../tests/unit/terminal/responses.rs"]
mod tests;
