//! Code Lens — Tauri application entry point.
//!
//! This is the app shell that wires together the explanation engine and
//! commands. No business logic lives here — only module declarations,
//! state management, and the command registry.
//!
//! Commands are split across:
//!   - commands.rs          — simple one-step commands (state reads, clipboard, examples)
//!   - pipeline.rs          — the multi-step explain orchestration
//!   - settings_commands.rs — credential management + connection test

mod commands;
pub mod llm;
mod pipeline;
pub mod settings_commands;
mod snippets;

/// Entry point — called by the Tauri runtime.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Load .env.local → .env from the project root. CARGO_MANIFEST_DIR is
    // compile-time, so this works regardless of the binary's working
    // directory.
    let project_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    'env_load: for env_file in [".env.local", ".env"] {
        let path = project_root.join(env_file);
        if path.exists() {
            match dotenvy::from_path(&path) {
                Ok(_) => eprintln!("[STARTUP] Loaded {}", path.display()),
                Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
            }
            break 'env_load;
        }
    }

    env_logger::init();

    tauri::Builder::default()
        .manage(llm::ExplainState::new())
        .invoke_handler(tauri::generate_handler![
            // Simple commands (commands.rs)
            commands::get_languages,
            commands::get_explanation,
            commands::copy_explanation,
            commands::load_example,
            commands::clear_session,
            // Pipeline command (pipeline.rs)
            pipeline::explain_code,
            // Settings commands (settings_commands.rs)
            settings_commands::get_provider_config,
            settings_commands::save_api_key,
            settings_commands::test_provider,
        ])
        .setup(|_app| {
            log::info!("Code Lens starting up");
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("Error running Code Lens");
}
