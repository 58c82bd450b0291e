//! Basic page generation example.
//!
//! Run with: `cargo run --example basic_page`

use launchpad_page::{PageHooks, PageOptions, catalog::Catalog, render_page};

fn main() {
    // Built-in catalogs: 3 projects, 6 features
    let catalog = Catalog::default();

    // Wire two of the controls, leave the rest inert
    let options = PageOptions {
        hooks: PageHooks::default()
            .on_view_all(|| Some("/projects".into()))
            .on_view_details(|project| Some(format!("/projects/{}", project.slug()))),
        ..Default::default()
    };

    let html = render_page(&catalog, &options);

    let output_path = "launchpad.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
