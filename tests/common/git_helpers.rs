//! Git plumbing for building test workspaces.
//!
//! gobot only ever reads repos through the `git` CLI, so fixtures are built
//! with it too: a bare remote per repo, clones in the workspace, and extra
//! clones for pushing "upstream" commits the workspace has not seen yet.

use std::fs;
use std::path::Path;
use std::process::Command;

pub fn init_bare_repo(path: &Path) {
    fs::create_dir_all(path).unwrap();
    git(path, &["init", "--bare", "-b", "main"]);
}

/// Fresh repo on `main` with a committer identity.
pub fn init_repo(path: &Path) {
    fs::create_dir_all(path).unwrap();
    git(path, &["init", "-b", "main"]);
    set_identity(path);
}

/// Clone `url` into `dest` and give the clone a committer identity, since
/// `pull --rebase` and fixture commits need one even without global config.
pub fn clone_repo(url: &str, dest: &Path) {
    let parent = dest.parent().expect("clone destination has a parent");
    git(parent, &["clone", url, dest.to_str().unwrap()]);
    set_identity(dest);
}

/// Write `filename`, commit it as `message`, and return the new HEAD.
pub fn commit_file(repo: &Path, filename: &str, content: &str, message: &str) -> String {
    fs::write(repo.join(filename), content).unwrap();
    git(repo, &["add", filename]);
    git(repo, &["commit", "-m", message]);
    get_head_sha(repo)
}

pub fn create_branch(repo: &Path, branch: &str) {
    git(repo, &["checkout", "-b", branch]);
}

pub fn checkout(repo: &Path, reference: &str) {
    git(repo, &["checkout", reference]);
}

pub fn add_remote(repo: &Path, name: &str, url: &str) {
    git(repo, &["remote", "add", name, url]);
}

pub fn push_upstream(repo: &Path, remote: &str, branch: &str) {
    git(repo, &["push", "-u", remote, branch]);
}

pub fn push(repo: &Path) {
    git(repo, &["push"]);
}

/// What gobot prints inside the parentheses of `<dir>(<branch>)`.
pub fn current_branch(repo: &Path) -> String {
    git(repo, &["rev-parse", "--abbrev-ref", "HEAD"])
}

pub fn get_head_sha(repo: &Path) -> String {
    git(repo, &["rev-parse", "HEAD"])
}

/// HEAD abbreviated the same way `git log --oneline` abbreviates it.
pub fn get_short_sha(repo: &Path) -> String {
    git(repo, &["rev-parse", "--short", "HEAD"])
}

fn set_identity(repo: &Path) {
    git(repo, &["config", "user.email", "gobot@example.com"]);
    git(repo, &["config", "user.name", "gobot tests"]);
}

/// Run git in `dir`, panicking with its stderr on failure. Returns trimmed stdout.
fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("could not spawn git {:?}: {}", args, e));
    if !output.status.success() {
        panic!(
            "git {} in {} failed:\n{}",
            args.join(" "),
            dir.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
