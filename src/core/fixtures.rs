//! Fixture recording for `test-mode` builds.
//!
//! With `MF_RECORD=1`, every response body fetched through `net::get_text` is
//! written to `tests/fixtures/{endpoint}_{key}.{ext}` so offline tests can
//! replay it.

use std::{env, fs, io, path::PathBuf};

pub(crate) fn record_fixture(endpoint: &str, key: &str, ext: &str, body: &str) -> io::Result<()> {
    let dir = env::var("MF_FIXTURE_DIR")
        .map_or_else(|_| PathBuf::from("tests/fixtures"), PathBuf::from);
    fs::create_dir_all(&dir)?;
    fs::write(dir.join(format!("{endpoint}_{key}.{ext}")), body)
}
