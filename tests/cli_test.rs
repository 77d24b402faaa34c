//! Integration tests for the netlaunch and netdetect binaries.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Copy the launcher into a fresh install directory.
///
/// The launcher looks for its target next to itself, so each test gets its
/// own copy instead of running from `target/`.
fn install_launcher() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let exe = temp
        .path()
        .join(format!("netlaunch{}", std::env::consts::EXE_SUFFIX));
    fs::copy(cargo_bin("netlaunch"), &exe).unwrap();
    (temp, exe)
}

#[cfg(unix)]
fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("#!/bin/sh\n{}", body)).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
fn wait_for(path: &Path) -> String {
    use std::time::{Duration, Instant};

    let deadline = Instant::now() + Duration::from_secs(10);
    while !path.exists() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(20));
    }
    fs::read_to_string(path).unwrap()
}

#[cfg(not(windows))]
#[test]
fn launcher_reports_missing_target() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp, exe) = install_launcher();
    let mut cmd = Command::new(exe);
    cmd.env("NO_COLOR", "1");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Unable to find PEBakery"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn launcher_forwards_args_to_target() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, exe) = install_launcher();
    write_script(
        &temp.path().join("Binary").join("PEBakery"),
        "for a in \"$@\"; do echo \"[$a]\"; done > args.tmp\nmv args.tmp args.txt\n",
    );

    let mut cmd = Command::new(exe);
    cmd.args(["--", "-h", "two words"]);
    cmd.assert().success();

    // The target runs with the install directory as working directory
    let out = wait_for(&temp.path().join("args.txt"));
    assert_eq!(out, "[--]\n[-h]\n[two words]\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn launcher_honours_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, exe) = install_launcher();
    fs::write(
        temp.path().join("netlaunch.yml"),
        "product: MyApp\ntarget: myapp\nbinary_dir: bin\nprerequisite:\n  kind: none\n",
    )?;
    write_script(&temp.path().join("bin").join("myapp"), "touch started\n");

    let mut cmd = Command::new(exe);
    cmd.assert().success();

    wait_for(&temp.path().join("started"));
    Ok(())
}

#[cfg(not(windows))]
#[test]
fn launcher_config_names_product_in_dialog() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, exe) = install_launcher();
    fs::write(temp.path().join("netlaunch.yml"), "product: MyApp\n")?;

    let mut cmd = Command::new(exe);
    cmd.env("NO_COLOR", "1");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Unable to find MyApp"));
    Ok(())
}

#[test]
fn launcher_rejects_malformed_config() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, exe) = install_launcher();
    fs::write(temp.path().join("netlaunch.yml"), "prerequisite: [oops")?;

    let mut cmd = Command::new(exe);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid launcher config"));
    Ok(())
}

#[test]
fn netdetect_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("netdetect"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--req-major"));
    Ok(())
}

#[test]
fn netdetect_requires_req_major() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("netdetect"));
    cmd.assert().code(1);
    Ok(())
}

#[test]
fn netdetect_rejects_low_major() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("netdetect"));
    cmd.args(["--req-major", "3"]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("too low"));
    Ok(())
}

#[test]
fn netdetect_without_dotnet_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("netdetect"));
    cmd.env("NETDETECT_DOTNET", "/nonexistent/path/to/dotnet");
    cmd.args(["--req-major", "6"]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains(".NET Runtime is not installed"));
    Ok(())
}

#[cfg(unix)]
mod fake_dotnet {
    use super::*;

    const LIST: &str = "\
echo 'Microsoft.NETCore.App 6.0.2 [/usr/share/dotnet/shared/Microsoft.NETCore.App]'
echo 'Microsoft.NETCore.App 6.0.14 [/usr/share/dotnet/shared/Microsoft.NETCore.App]'
echo 'Microsoft.NETCore.App 8.0.1 [/usr/share/dotnet/shared/Microsoft.NETCore.App]'
echo 'Microsoft.WindowsDesktop.App 6.0.2 [/usr/share/dotnet/shared/Microsoft.WindowsDesktop.App]'
";

    fn netdetect(temp: &TempDir) -> Command {
        let dotnet = temp.path().join("dotnet");
        write_script(&dotnet, LIST);
        let mut cmd = Command::new(cargo_bin("netdetect"));
        cmd.env("NETDETECT_DOTNET", dotnet);
        cmd
    }

    #[test]
    fn prints_latest_of_major() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        netdetect(&temp)
            .args(["--req-major", "6"])
            .assert()
            .success()
            .stdout("6.0.14\n");
        Ok(())
    }

    #[test]
    fn prints_patch_only() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        netdetect(&temp)
            .args(["--req-major", "8", "--res-patch"])
            .assert()
            .success()
            .stdout("1\n");
        Ok(())
    }

    #[test]
    fn desktop_limits_to_shared_versions() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        netdetect(&temp)
            .args(["--req-major", "6", "--win-desktop"])
            .assert()
            .success()
            .stdout("6.0.2\n");
        Ok(())
    }

    #[test]
    fn missing_major_fails() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        netdetect(&temp)
            .args(["--req-major", "7"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "ERR: .NET [Microsoft.NETCore.App] runtime v[7.x] is not installed.",
            ));
        Ok(())
    }

    #[test]
    fn preview_only_install_is_reported_as_preview() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let dotnet = temp.path().join("dotnet");
        write_script(
            &dotnet,
            "echo 'Microsoft.NETCore.App 9.0.0-preview.3.24172.9 [/usr/share/dotnet/shared/Microsoft.NETCore.App]'\n",
        );

        Command::new(cargo_bin("netdetect"))
            .env("NETDETECT_DOTNET", dotnet)
            .args(["--req-major", "9"])
            .assert()
            .success()
            .stdout("9.0.0-preview.3\n");
        Ok(())
    }
}
