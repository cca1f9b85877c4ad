// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Missing git metadata (e.g. building from a tarball) is not fatal;
    // vergen falls back to placeholder values.
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .rustc_semver()
        .emit()?;
    Ok(())
}
