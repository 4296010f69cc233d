//! `gdlink classify <link>` – show provenance and file id.

use gdlink_core::classify;

use crate::cli::output;

pub fn run_classify(link: &str) {
    print!("{}", output::render_classification(&classify(link.trim())));
}
