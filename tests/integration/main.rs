//! Integration tests for mountkeeper

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use mountkeeper::config::Config;
    use mountkeeper::unit::escape_path;
    use predicates::prelude::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// A fake home and cache directory with a config file pointing at them
    struct Fixture {
        _root: TempDir,
        home: PathBuf,
        cache: PathBuf,
        config: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let root = TempDir::new().unwrap();
            let home = root.path().join("home");
            let cache = home.join(".cache");
            fs::create_dir_all(&cache).unwrap();

            let mut config = Config::default();
            config.poll.interval_ms = 10;
            config.paths.home_dir = Some(home.clone());
            config.paths.cache_dir = Some(cache.clone());

            let config_path = root.path().join("config.toml");
            fs::write(&config_path, toml::to_string_pretty(&config).unwrap()).unwrap();

            Self {
                _root: root,
                home,
                cache,
                config: config_path,
            }
        }

        fn cmd(&self) -> Command {
            let mut cmd = cargo_bin_cmd!("mountkeeper");
            cmd.env("MOUNTKEEPER_CONFIG", &self.config);
            cmd
        }

        /// Create a mountpoint under home and register it in the daemon cache
        fn known_mount(&self, name: &str) -> PathBuf {
            let mountpoint = self.home.join(name);
            fs::create_dir_all(&mountpoint).unwrap();
            let entry = escape_path(&mountpoint.to_string_lossy());
            fs::create_dir_all(self.cache.join("onedriver").join(entry)).unwrap();
            mountpoint
        }
    }

    fn mark_live(mountpoint: &Path, account: &str) {
        fs::write(
            mountpoint.join(".xdg-volume-info"),
            format!("[Volume Info]\nName={}\n", account),
        )
        .unwrap();
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("mountkeeper")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("mountpoint helper"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("mountkeeper")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("mountkeeper"));
    }

    #[test]
    fn path_round_trip() {
        let fx = Fixture::new();
        let drive = fx.home.join("OneDrive");

        fx.cmd()
            .args(["path", "abbreviate"])
            .arg(&drive)
            .assert()
            .success()
            .stdout("~/OneDrive\n");

        fx.cmd()
            .args(["path", "expand", "~/OneDrive"])
            .assert()
            .success()
            .stdout(format!("{}\n", drive.display()));
    }

    #[test]
    fn path_outside_home_unchanged() {
        let fx = Fixture::new();
        fx.cmd()
            .args(["path", "abbreviate", "/srv/drive"])
            .assert()
            .success()
            .stdout("/srv/drive\n");
    }

    #[test]
    fn list_empty() {
        let fx = Fixture::new();
        fx.cmd()
            .arg("list")
            .assert()
            .success()
            .stdout("")
            .stderr(predicate::str::contains("No known mounts"));
    }

    #[test]
    fn list_empty_json() {
        let fx = Fixture::new();
        fx.cmd()
            .args(["list", "--format", "json"])
            .assert()
            .success()
            .stdout("[]\n");
    }

    #[test]
    fn list_known_mount() {
        let fx = Fixture::new();
        let mountpoint = fx.known_mount("OneDrive");
        mark_live(&mountpoint, "jane@example.com");

        fx.cmd()
            .args(["list", "--format", "plain"])
            .assert()
            .success()
            .stdout(format!("{}\n", mountpoint.display()));

        fx.cmd()
            .args(["list", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"display\": \"~/OneDrive\""))
            .stdout(predicate::str::contains("\"account\": \"jane@example.com\""));
    }

    #[test]
    fn list_skips_stale_mount() {
        let fx = Fixture::new();
        let mountpoint = fx.known_mount("Gone");
        fs::remove_dir(&mountpoint).unwrap();

        fx.cmd()
            .args(["list", "--format", "plain"])
            .assert()
            .success()
            .stdout("");
    }

    #[test]
    fn check_empty_directory() {
        let fx = Fixture::new();
        fs::create_dir(fx.home.join("Fresh")).unwrap();

        fx.cmd()
            .args(["check", "~/Fresh"])
            .assert()
            .success()
            .stdout("")
            .stderr(predicate::str::contains("Valid mountpoint"));
    }

    #[test]
    fn check_non_empty_directory() {
        let fx = Fixture::new();
        let dir = fx.home.join("Used");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("file.txt"), "data").unwrap();

        fx.cmd()
            .args(["check", "~/Used"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("directory is not empty"));
    }

    #[test]
    fn account_prints_name() {
        let fx = Fixture::new();
        let mountpoint = fx.known_mount("OneDrive");
        mark_live(&mountpoint, "Jane Doe");

        fx.cmd()
            .args(["account", "~/OneDrive"])
            .assert()
            .success()
            .stdout("Jane Doe\n");
    }

    #[test]
    fn account_missing_marker() {
        let fx = Fixture::new();
        fx.known_mount("OneDrive");

        fx.cmd()
            .args(["account", "~/OneDrive"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Could not open marker file"));
    }

    #[test]
    fn wait_ready() {
        let fx = Fixture::new();
        let mountpoint = fx.known_mount("OneDrive");
        mark_live(&mountpoint, "Jane Doe");

        fx.cmd()
            .args(["wait", "~/OneDrive", "--timeout", "5"])
            .assert()
            .success()
            .stdout("")
            .stderr(predicate::str::contains("is mounted"));
    }

    #[test]
    fn wait_missing_mountpoint() {
        let fx = Fixture::new();
        fx.cmd()
            .args(["wait", "~/Nowhere", "--timeout", "5"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Mountpoint does not exist"));
    }

    #[test]
    fn wait_times_out() {
        let fx = Fixture::new();
        fx.known_mount("OneDrive");

        fx.cmd()
            .args(["wait", "~/OneDrive", "--timeout", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Timed out"));
    }

    #[test]
    fn unit_name() {
        let fx = Fixture::new();
        fx.cmd()
            .args(["unit", "/home/jane/OneDrive"])
            .assert()
            .success()
            .stdout("onedriver@home-jane-OneDrive.service\n");
    }

    #[test]
    fn config_path() {
        let fx = Fixture::new();
        fx.cmd()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let fx = Fixture::new();
        fx.cmd()
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[daemon]"))
            .stdout(predicate::str::contains("interval_ms = 10"));
    }

    #[test]
    fn invalid_config_reported() {
        let fx = Fixture::new();
        fs::write(&fx.config, "[poll]\ntimeout_secs = \"never\"\n").unwrap();

        fx.cmd()
            .arg("list")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn zero_poll_interval_rejected() {
        let fx = Fixture::new();
        let mut config: Config = toml::from_str(&fs::read_to_string(&fx.config).unwrap()).unwrap();
        config.poll.interval_ms = 0;
        fs::write(&fx.config, toml::to_string_pretty(&config).unwrap()).unwrap();

        fx.cmd()
            .args(["wait", "~/OneDrive"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("poll.interval_ms"));
    }

    #[test]
    fn config_init_keeps_existing_file() {
        let fx = Fixture::new();
        let before = fs::read_to_string(&fx.config).unwrap();

        fx.cmd()
            .args(["config", "init"])
            .assert()
            .success()
            .stdout("")
            .stderr(predicate::str::contains("--force"));
        assert_eq!(fs::read_to_string(&fx.config).unwrap(), before);
    }
}
