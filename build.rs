//! Build script for termclean - embeds git commit hash for dev builds
//!
//! When the `release` feature is NOT set (default dev builds):
//! - Emits `VERGEN_GIT_SHA`, shown by `termclean --version`
//!
//! When the `release` feature IS set (CI/official builds):
//! - Emits no git info; `--version` prints the bare package version

fn main() {
    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        // The SHA is the only git fact the version string needs
        let git = GitclBuilder::default()
            .sha(true)
            .build()
            .expect("Failed to configure git info");

        if let Err(e) = Emitter::default()
            .add_instructions(&git)
            .expect("Failed to add git instructions")
            .emit()
        {
            // Not in a git checkout (e.g. a crates.io tarball)
            eprintln!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }

    // Release builds read nothing from git, so only a change to this script
    // needs to rerun it
    #[cfg(feature = "release")]
    {
        println!("cargo:rerun-if-changed=build.rs");
    }
}
