use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_blog_sources(&out_dir);

    println!("cargo:rerun-if-changed=blogs");
}

/// Embed every `blogs/*.md` file as a `(file name, contents)` pair
fn generate_blog_sources(out_dir: &str) {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let blog_dir = Path::new(&manifest_dir).join("blogs");

    // Sorted for deterministic output
    let mut posts: Vec<_> = fs::read_dir(&blog_dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
                .collect()
        })
        .unwrap_or_default();
    posts.sort();

    let path = Path::new(out_dir).join("blog_sources.rs");
    let mut file = BufWriter::new(fs::File::create(&path).unwrap());

    writeln!(file, "pub static BLOG_SOURCES: &[(&str, &str)] = &[").unwrap();
    for post in &posts {
        let name = post.file_name().unwrap().to_string_lossy();
        println!("cargo:rerun-if-changed={}", post.display());
        writeln!(file, "    ({:?}, include_str!({:?})),", name, post.display().to_string()).unwrap();
    }
    writeln!(file, "];").unwrap();
}
