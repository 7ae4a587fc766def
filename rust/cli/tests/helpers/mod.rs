#![allow(dead_code)]

use std::io::Cursor;

pub const CONFIG_VARS: [&str; 4] = [
    "HANDSORT_CONFIG",
    "HANDSORT_UNIVERSE",
    "HANDSORT_SCOPE",
    "HANDSORT_TRIGGER",
];

/// Output of one CLI invocation
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str], stdin: &str) -> CliResult {
    let mut argv = vec!["handsort"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let exit_code = handsort_cli::run_with_stdin(argv, &mut out, &mut err, &mut input);
    CliResult {
        exit_code,
        stdout: String::from_utf8(out).expect("stdout is UTF-8"),
        stderr: String::from_utf8(err).expect("stderr is UTF-8"),
    }
}

/// Clears every config variable on creation and restores them on drop.
pub struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    pub fn clean() -> Self {
        let saved = CONFIG_VARS
            .iter()
            .map(|&key| (key, std::env::var(key).ok()))
            .collect();
        for key in CONFIG_VARS {
            unsafe {
                std::env::remove_var(key);
            }
        }
        Self { saved }
    }

    pub fn set(&self, key: &str, value: impl AsRef<std::ffi::OsStr>) {
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => unsafe { std::env::set_var(key, v) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}
