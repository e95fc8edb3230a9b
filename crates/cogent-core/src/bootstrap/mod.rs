//! Container startup: materialize the agent home, then hand off.
//!
//! Every step is idempotent and best-effort: a failed step is logged
//! and the remaining steps still run, because a partially prepared home
//! is more useful than a dead container. Existing files and links are
//! never overwritten.

use std::path::Path;

use cogent_config::{AuthConfig, CogentConfig};
use cogent_paths::CogentPaths;
use tracing::{info, warn};

/// Run all bootstrap steps against the resolved agent home.
///
/// Never fails: each step warns and continues on error.
pub fn run(config: &CogentConfig) {
    let paths = match CogentPaths::resolve() {
        Ok(p) => p,
        Err(e) => {
            warn!(event = "core.bootstrap.paths_unresolved", error = %e);
            return;
        }
    };
    run_with_paths(config, &paths);
}

/// Run all bootstrap steps against an explicit agent home. Use in tests.
pub fn run_with_paths(config: &CogentConfig, paths: &CogentPaths) {
    info!(
        event = "core.bootstrap.started",
        agent_home = %paths.agent_home().display(),
        assets_dir = %config.assets_dir.display(),
    );

    if let Err(msg) = ensure_directories(paths) {
        warn!(event = "core.bootstrap.directories_failed", error = %msg);
    }

    match ensure_default_settings(paths, &config.assets_dir) {
        Ok(true) => info!(event = "core.bootstrap.settings_installed"),
        Ok(false) => info!(event = "core.bootstrap.settings_already_present"),
        Err(msg) => warn!(event = "core.bootstrap.settings_failed", error = %msg),
    }

    for (source, target, kind) in [
        (
            CogentPaths::assets_skills_dir(&config.assets_dir),
            paths.skills_dir(),
            "skills",
        ),
        (
            CogentPaths::assets_commands_dir(&config.assets_dir),
            paths.commands_dir(),
            "commands",
        ),
    ] {
        match link_assets(&source, &target) {
            Ok(linked) => info!(event = "core.bootstrap.assets_linked", kind = kind, linked = linked),
            Err(msg) => warn!(event = "core.bootstrap.assets_link_failed", kind = kind, error = %msg),
        }
    }

    report_credentials(&config.auth);

    if let Err(msg) = write_marker(paths) {
        warn!(event = "core.bootstrap.marker_failed", error = %msg);
    }

    info!(event = "core.bootstrap.completed");
}

/// Create the agent home directory tree.
pub fn ensure_directories(paths: &CogentPaths) -> Result<(), String> {
    for dir in [
        paths.agent_home().to_path_buf(),
        paths.skills_dir(),
        paths.commands_dir(),
    ] {
        std::fs::create_dir_all(&dir)
            .map_err(|e| format!("failed to create {}: {}", dir.display(), e))?;
    }
    Ok(())
}

/// Install the default settings file if none exists yet.
///
/// Returns `Ok(true)` when the file was installed, `Ok(false)` when a
/// settings file (or no default) was already in place. Never overwrites
/// user edits.
pub fn ensure_default_settings(paths: &CogentPaths, assets_dir: &Path) -> Result<bool, String> {
    let target = paths.settings_file();
    if target.exists() {
        return Ok(false);
    }

    let source = CogentPaths::assets_settings(assets_dir);
    if !source.exists() {
        return Ok(false);
    }

    std::fs::copy(&source, &target).map_err(|e| {
        format!(
            "failed to copy {} to {}: {}",
            source.display(),
            target.display(),
            e
        )
    })?;

    Ok(true)
}

/// Symlink every entry of `source_dir` into `target_dir`.
///
/// Entries whose target already exists (link, file, or directory) are
/// left untouched. A missing source directory is not an error; the
/// image may ship without skills or commands.
pub fn link_assets(source_dir: &Path, target_dir: &Path) -> Result<usize, String> {
    if !source_dir.is_dir() {
        return Ok(0);
    }

    std::fs::create_dir_all(target_dir)
        .map_err(|e| format!("failed to create {}: {}", target_dir.display(), e))?;

    let entries = std::fs::read_dir(source_dir)
        .map_err(|e| format!("failed to read {}: {}", source_dir.display(), e))?;

    let mut linked = 0;
    for entry in entries {
        let entry = entry.map_err(|e| format!("failed to read entry: {e}"))?;
        let link = target_dir.join(entry.file_name());

        // symlink_metadata so an existing dangling link still counts
        if link.symlink_metadata().is_ok() {
            continue;
        }

        #[cfg(unix)]
        std::os::unix::fs::symlink(entry.path(), &link)
            .map_err(|e| format!("failed to link {}: {}", link.display(), e))?;

        #[cfg(not(unix))]
        let _ = &link;

        linked += 1;
    }

    Ok(linked)
}

/// Log which credential the agent runtime will use.
pub fn report_credentials(auth: &AuthConfig) {
    match auth.preferred_method() {
        Some(method) => info!(event = "core.bootstrap.auth_resolved", method = %method),
        None => warn!(
            event = "core.bootstrap.auth_missing",
            hint = "set CLAUDE_CODE_OAUTH_TOKEN or ANTHROPIC_API_KEY",
        ),
    }
}

/// Drop the bootstrap marker if it is not already there.
pub fn write_marker(paths: &CogentPaths) -> Result<(), String> {
    let marker = paths.bootstrap_marker();
    if marker.exists() {
        return Ok(());
    }
    std::fs::write(&marker, "bootstrapped\n")
        .map_err(|e| format!("failed to write {}: {}", marker.display(), e))
}

/// Replace this process with the long-running command.
///
/// Only returns on failure. On non-Unix targets this degrades to
/// spawn-and-wait.
pub fn exec_process(command: &str, args: &[String]) -> std::io::Error {
    info!(event = "core.bootstrap.exec", command = command);

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        std::process::Command::new(command).args(args).exec()
    }

    #[cfg(not(unix))]
    {
        match std::process::Command::new(command).args(args).status() {
            Ok(status) => std::process::exit(status.code().unwrap_or(1)),
            Err(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_setup() -> (tempfile::TempDir, CogentPaths, CogentConfig) {
        let tmp = tempfile::TempDir::new().unwrap();
        let paths = CogentPaths::from_dir(tmp.path().join(".claude"));
        let assets = tmp.path().join("assets");
        std::fs::create_dir_all(&assets).unwrap();
        let config = CogentConfig {
            assets_dir: assets,
            ..CogentConfig::default()
        };
        (tmp, paths, config)
    }

    fn snapshot(dir: &Path) -> Vec<PathBuf> {
        let mut entries = Vec::new();
        if !dir.exists() {
            return entries;
        }
        let mut stack = vec![dir.to_path_buf()];
        while let Some(current) = stack.pop() {
            for entry in std::fs::read_dir(&current).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() && !path.is_symlink() {
                    stack.push(path.clone());
                }
                entries.push(path);
            }
        }
        entries.sort();
        entries
    }

    #[test]
    fn test_ensure_directories_creates_tree() {
        let (_tmp, paths, _config) = test_setup();
        ensure_directories(&paths).unwrap();
        assert!(paths.agent_home().is_dir());
        assert!(paths.skills_dir().is_dir());
        assert!(paths.commands_dir().is_dir());
    }

    #[test]
    fn test_ensure_directories_idempotent() {
        let (_tmp, paths, _config) = test_setup();
        ensure_directories(&paths).unwrap();
        ensure_directories(&paths).unwrap();
        assert!(paths.skills_dir().is_dir());
    }

    #[test]
    fn test_default_settings_installed_once() {
        let (_tmp, paths, config) = test_setup();
        ensure_directories(&paths).unwrap();
        std::fs::write(
            CogentPaths::assets_settings(&config.assets_dir),
            r#"{"permissions": {}}"#,
        )
        .unwrap();

        assert!(ensure_default_settings(&paths, &config.assets_dir).unwrap());
        assert!(!ensure_default_settings(&paths, &config.assets_dir).unwrap());
    }

    #[test]
    fn test_default_settings_never_overwrites_user_edits() {
        let (_tmp, paths, config) = test_setup();
        ensure_directories(&paths).unwrap();
        std::fs::write(CogentPaths::assets_settings(&config.assets_dir), "{}").unwrap();
        std::fs::write(paths.settings_file(), r#"{"user": "edited"}"#).unwrap();

        assert!(!ensure_default_settings(&paths, &config.assets_dir).unwrap());
        let content = std::fs::read_to_string(paths.settings_file()).unwrap();
        assert_eq!(content, r#"{"user": "edited"}"#);
    }

    #[test]
    fn test_default_settings_ok_when_asset_missing() {
        let (_tmp, paths, config) = test_setup();
        ensure_directories(&paths).unwrap();
        assert!(!ensure_default_settings(&paths, &config.assets_dir).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_link_assets_creates_symlinks() {
        let (_tmp, paths, config) = test_setup();
        let skills_src = CogentPaths::assets_skills_dir(&config.assets_dir);
        std::fs::create_dir_all(skills_src.join("review")).unwrap();
        std::fs::write(skills_src.join("review").join("SKILL.md"), "# review").unwrap();

        let linked = link_assets(&skills_src, &paths.skills_dir()).unwrap();
        assert_eq!(linked, 1);

        let link = paths.skills_dir().join("review");
        assert!(link.is_symlink());
        assert_eq!(
            std::fs::read_to_string(link.join("SKILL.md")).unwrap(),
            "# review"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_link_assets_preserves_existing_entries() {
        let (_tmp, paths, config) = test_setup();
        let skills_src = CogentPaths::assets_skills_dir(&config.assets_dir);
        std::fs::create_dir_all(&skills_src).unwrap();
        std::fs::write(skills_src.join("notes.md"), "from assets").unwrap();

        std::fs::create_dir_all(paths.skills_dir()).unwrap();
        std::fs::write(paths.skills_dir().join("notes.md"), "user copy").unwrap();

        let linked = link_assets(&skills_src, &paths.skills_dir()).unwrap();
        assert_eq!(linked, 0);
        assert_eq!(
            std::fs::read_to_string(paths.skills_dir().join("notes.md")).unwrap(),
            "user copy"
        );
    }

    #[test]
    fn test_link_assets_missing_source_is_noop() {
        let (_tmp, paths, config) = test_setup();
        let missing = CogentPaths::assets_skills_dir(&config.assets_dir);
        assert_eq!(link_assets(&missing, &paths.skills_dir()).unwrap(), 0);
    }

    #[test]
    fn test_write_marker_idempotent() {
        let (_tmp, paths, _config) = test_setup();
        ensure_directories(&paths).unwrap();
        write_marker(&paths).unwrap();
        let first = std::fs::metadata(paths.bootstrap_marker()).unwrap().modified().unwrap();
        write_marker(&paths).unwrap();
        let second = std::fs::metadata(paths.bootstrap_marker()).unwrap().modified().unwrap();
        assert_eq!(first, second, "marker must not be rewritten");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_twice_produces_same_end_state() {
        let (_tmp, paths, config) = test_setup();
        let skills_src = CogentPaths::assets_skills_dir(&config.assets_dir);
        std::fs::create_dir_all(skills_src.join("triage")).unwrap();
        std::fs::write(
            CogentPaths::assets_settings(&config.assets_dir),
            r#"{"default": true}"#,
        )
        .unwrap();

        run_with_paths(&config, &paths);
        let first = snapshot(paths.agent_home());

        run_with_paths(&config, &paths);
        let second = snapshot(paths.agent_home());

        assert_eq!(first, second, "bootstrap must be idempotent");
        assert_eq!(
            std::fs::read_to_string(paths.settings_file()).unwrap(),
            r#"{"default": true}"#
        );
    }

    #[test]
    fn test_run_survives_missing_assets_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let paths = CogentPaths::from_dir(tmp.path().join(".claude"));
        let config = CogentConfig {
            assets_dir: tmp.path().join("no-such-assets"),
            ..CogentConfig::default()
        };
        // Must not panic
        run_with_paths(&config, &paths);
        assert!(paths.agent_home().is_dir());
    }
}
