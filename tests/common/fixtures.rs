//! Test fixture helpers for creating synthetic component libraries
//!
//! Provides utilities for laying out realistic library source trees, built
//! output trees with known sizes, and a stub bundler executable so build
//! runs end-to-end without a real bundler installed.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Creates a component library source tree with the conventional layout
///
/// # Returns
///
/// The TempDir holding the project root - it must be kept alive
pub fn create_component_library(components: &[&str]) -> anyhow::Result<TempDir> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join("src"))?;

    let exports: Vec<String> = components
        .iter()
        .map(|name| format!("export {{ default as {} }} from './components/{}';", name, name))
        .collect();
    fs::write(temp.path().join("src/index.js"), exports.join("\n"))?;

    for name in components {
        let dir = temp.path().join("src/components").join(name);
        fs::create_dir_all(&dir)?;
        fs::write(
            dir.join("index.js"),
            format!("export default {{ name: '{}' }};", name),
        )?;
        fs::write(dir.join("style.css"), format!(".{} {{}}\n", name))?;
    }

    Ok(temp)
}

/// Installs a stub bundler script into the project root
///
/// The stub parses `--outdir=...` from its arguments and writes an
/// `index.js` plus `style.css` there. With `fail_on` set, it exits 1
/// whenever the entry path contains that substring, simulating a bundler
/// error for one specific target.
#[cfg(unix)]
pub fn install_stub_bundler(root: &Path, fail_on: Option<&str>) -> anyhow::Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let bundler = root.join("stub-bundler.sh");
    let fail_check = match fail_on {
        Some(needle) => format!(
            "case \"$1\" in *{}*) echo 'stub bundler: forced failure' >&2; exit 1;; esac\n",
            needle
        ),
        None => String::new(),
    };

    let script = format!(
        r#"#!/bin/sh
outdir=""
for arg in "$@"; do
  case "$arg" in
    --outdir=*) outdir="${{arg#--outdir=}}" ;;
  esac
done
{fail_check}mkdir -p "$outdir"
printf 'bundled %s\n' "$1" > "$outdir/index.js"
printf '/* bundled css */\n' > "$outdir/style.css"
"#
    );

    fs::write(&bundler, script)?;
    let mut perms = fs::metadata(&bundler)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&bundler, perms)?;

    Ok(bundler)
}

/// Writes a `.bundle-split.toml` pointing at the given bundler executable
pub fn write_config(root: &Path, bundler: &Path) -> anyhow::Result<()> {
    fs::write(
        root.join(".bundle-split.toml"),
        format!("bundler = \"{}\"\n", bundler.display()),
    )?;
    Ok(())
}

/// Creates a built output tree with known sizes under `<root>/lib`
///
/// Sizes: main index.js 50 KB + style.css 10 KB; button 8 KB + 2 KB;
/// dialog 12 KB + 3 KB.
pub fn create_output_tree(root: &Path) -> anyhow::Result<PathBuf> {
    let lib = root.join("lib");
    fs::create_dir_all(&lib)?;
    fs::write(lib.join("index.js"), vec![b'j'; 50 * 1024])?;
    fs::write(lib.join("style.css"), vec![b'c'; 10 * 1024])?;

    for (name, js_kb, css_kb) in [("button", 8, 2), ("dialog", 12, 3)] {
        let dir = lib.join(name);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("index.js"), vec![b'j'; js_kb * 1024])?;
        fs::write(dir.join("style.css"), vec![b'c'; css_kb * 1024])?;
    }

    Ok(lib)
}
