use std::fs;
use std::path::{Path, PathBuf};

use clap::CommandFactory;

// cli.rs deliberately depends on nothing but clap + clap_complete, both of
// which are also build-dependencies, so it can be included here without
// compiling the rest of the crate.
#[path = "src/cli.rs"]
mod cli;

fn main() {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir: PathBuf = std::env::var_os("OUT_DIR")
        .expect("OUT_DIR not set by Cargo")
        .into();
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).expect("failed to create man output directory");

    write_man_tree(&cli::Cli::command(), &man_dir);
}

/// Emit `calcdash.1` plus one `calcdash-<sub>.1` per visible subcommand,
/// recursing so nested subcommands (e.g. `config init`) get pages too.
fn write_man_tree(cmd: &clap::Command, dir: &Path) {
    let name = cmd.get_name().to_owned();
    let page = dir.join(format!("{name}.1"));

    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd.clone())
        .render(&mut buf)
        .unwrap_or_else(|e| panic!("failed to render man page for `{name}`: {e}"));
    fs::write(&page, buf).unwrap_or_else(|e| panic!("failed to write {}: {e}", page.display()));

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        // Man page convention: dashed names for subcommand pages.
        let sub = sub.clone().name(format!("{name}-{}", sub.get_name()));
        write_man_tree(&sub, dir);
    }
}
