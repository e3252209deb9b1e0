use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};

/// A scratch working directory and an `envview` command that runs in it
/// with an otherwise empty environment.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn new_cmd(&self, name: &str) -> Command {
        let mut this = Command::cargo_bin("envview").expect("failed to find local envview binary");
        this.env_clear().current_dir(self.dir.path()).arg(name);
        this
    }

    pub fn write(&self, name: &str, contents: &str) -> &Self {
        self.dir.child(name).write_str(contents).unwrap();
        self
    }
}
