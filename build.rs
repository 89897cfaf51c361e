//! Build script for the Code Lens Tauri app.
//!
//! Nothing beyond the standard Tauri codegen — the backend is pure Rust.

fn main() {
    tauri_build::build();
}
