use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::{fixture::ChildPath, prelude::*, TempDir};
use std::{fs, path::Path};

pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Seeds `images/logo.svg` from the fixture under `tests/assets`.
    pub fn add_logo(&self) -> ChildPath {
        let file = self.dir.child("images/logo.svg");
        file.write_binary(&read_test_asset("logo.svg")).unwrap();
        file
    }

    pub fn output(&self, file_name: &str) -> ChildPath {
        self.dir.child(format!("images/{file_name}"))
    }

    pub fn run(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!();
        cmd.current_dir(self.dir.path());
        cmd
    }
}

fn read_test_asset(file_name: &str) -> Vec<u8> {
    let path = Path::new("tests").join("assets").join(file_name);
    fs::read(&path).unwrap()
}
