use std::fs;
use std::path::{Path, PathBuf};

pub fn create_fake_git(dir: &Path) -> PathBuf {
    if cfg!(windows) {
        let path = dir.join("git.cmd");
        let contents = r#"@echo off
set CMD=%1
shift
if "%CMD%"=="init" goto doinit
exit /b 1

:doinit
set TARGET=%~1
if "%TARGET%"=="" set TARGET=.
if not exist "%TARGET%\.git" mkdir "%TARGET%\.git"
echo ref: refs/heads/main> "%TARGET%\.git\HEAD"
exit /b 0
"#;
        fs::write(&path, contents).unwrap();
        path
    } else {
        let path = dir.join("git");
        let contents = r#"#!/usr/bin/env bash
set -euo pipefail
cmd="${1:-}"
shift || true

case "$cmd" in
  init)
    target="${1:-.}"
    mkdir -p "$target/.git"
    printf "ref: refs/heads/main\n" > "$target/.git/HEAD"
    ;;
  *)
    echo "unknown command" >&2
    exit 1
    ;;
esac
"#;
        fs::write(&path, contents).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path).unwrap().permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms).unwrap();
        }
        path
    }
}

pub fn create_failing_git(dir: &Path) -> PathBuf {
    if cfg!(windows) {
        let path = dir.join("git.cmd");
        let contents = "@echo off\r\necho fatal: refusing to init 1>&2\r\nexit /b 1\r\n";
        fs::write(&path, contents).unwrap();
        path
    } else {
        let path = dir.join("git");
        let contents = "#!/usr/bin/env bash\necho \"fatal: refusing to init\" >&2\nexit 1\n";
        fs::write(&path, contents).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path).unwrap().permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms).unwrap();
        }
        path
    }
}
