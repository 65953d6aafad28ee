
use std::env;
use std::ffi::OsString;

use tempfile::TempDir;

/// Sets one environment variable for the lifetime of the guard.
///
/// Tests that use it must be `#[serial]`.
pub(crate) struct EnvGuard {
    key: &'static str,
    previous: Option<OsString>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let previous = env::var_os(key);
        // SAFETY: env-mutating tests run serially
        unsafe { env::set_var(key, value) };
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        // SAFETY: env-mutating tests run serially
        unsafe {
            match previous {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Fresh config directory with PC_CONFIG_DIR pointing at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("PC_CONFIG_DIR", &temp.path().to_string_lossy());
    (temp, guard)
}

pub(crate) fn write_config(temp: &TempDir, contents: &str) {
    std::fs::write(temp.path().join("config.toml"), contents).unwrap();
}
