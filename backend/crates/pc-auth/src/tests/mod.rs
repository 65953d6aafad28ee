
use pc_core::Identity;

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) fn identity(raw: &str) -> Identity {
    Identity::parse(raw).unwrap()
}
