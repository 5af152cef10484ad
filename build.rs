use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=assets/slides/");

    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("builtin_slides.rs");
    let mut f = fs::File::create(&dest_path).unwrap();

    let slide_dir = Path::new(&manifest_dir).join("assets").join("slides");
    if !slide_dir.exists() {
        writeln!(f, "pub const BUILTIN_SLIDES: &[&str] = &[];").unwrap();
        return;
    }

    // One markdown file per slide; file name order is slide order (01-, 02-, ...)
    let mut entries: Vec<_> = fs::read_dir(&slide_dir)
        .unwrap()
        .map(|res| res.unwrap().path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "md"))
        .collect();

    entries.sort();

    writeln!(f, "pub const BUILTIN_SLIDES: &[&str] = &[").unwrap();
    for path in &entries {
        println!("cargo:rerun-if-changed={}", path.display());
        // Debug formatting escapes backslashes in Windows paths
        writeln!(f, "    include_str!({:?}),", path.display().to_string()).unwrap();
    }
    writeln!(f, "];").unwrap();
}
