use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Working directory with a stand-in `java` that records its arguments.
///
/// The fake writes one argument per line to `java-args.log` and exits with
/// `$FAKE_JAVA_EXIT` (0 when unset).
pub struct FakeJavaDir {
    dir: TempDir,
}

impl FakeJavaDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let fake = Self { dir };
        fake.write_fake_java();
        fs::write(fake.path().join("SuperCC.jar"), b"").expect("Failed to create jar");
        fake
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn java(&self) -> PathBuf {
        self.path().join("bin").join("java")
    }

    pub fn log_path(&self) -> PathBuf {
        self.path().join("java-args.log")
    }

    /// Arguments seen by the fake java, or `None` if it never ran.
    pub fn recorded_args(&self) -> Option<Vec<String>> {
        let contents = fs::read_to_string(self.log_path()).ok()?;
        Some(contents.lines().map(str::to_string).collect())
    }

    /// The forwarder binary, pointed at the fake java and run inside this directory.
    pub fn forwarder(&self) -> Command {
        let mut cmd = Command::cargo_bin("succ-forward").unwrap();
        cmd.current_dir(self.path())
            .env("SUCC_FORWARD_JAVA", self.java())
            .env_remove("SUCC_FORWARD_JAR")
            .env_remove("SUCC_FORWARD_LEVEL_ARGUMENT")
            .env_remove("RUST_LOG")
            .env("FAKE_JAVA_LOG", self.log_path());
        cmd
    }

    #[cfg(unix)]
    fn write_fake_java(&self) {
        use std::os::unix::fs::PermissionsExt;

        let java = self.java();
        fs::create_dir_all(java.parent().unwrap()).expect("Failed to create bin directory");
        fs::write(
            &java,
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$FAKE_JAVA_LOG\"\nexit \"${FAKE_JAVA_EXIT:-0}\"\n",
        )
        .expect("Failed to write fake java");
        fs::set_permissions(&java, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake java executable");
    }

    #[cfg(not(unix))]
    fn write_fake_java(&self) {}
}
