//! REST Completion Extension for Zed Editor
//!
//! This extension offers context-sensitive completions while editing `.http`
//! and `.rest` request files: request methods, header names, content types,
//! authorization schemes, `# @` meta directives and references to other
//! named requests in the same file.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **models**: The structural document model and completion candidates
//! - **parser**: Splits a file into request regions and classifies their lines
//! - **grammar**: The meta directive catalogue
//! - **completion**: Line classification, candidate tables and filtering
//! - **config**: User settings for which completions are offered
//! - **lsp_server** (feature `lsp`): The language server hosting the engine
//!
//! The WASM extension itself only tells Zed how to start the
//! `completion-server` binary; all completion work happens in that process.
//!
//! # Usage
//!
//! ```
//! use rest_completion::completion::provide_completions;
//! use rest_completion::parser::parse_document;
//!
//! let document = parse_document("# @name login\nPOST https://example.com/login\n\n###\n# @ref ");
//! let candidates = provide_completions("# @ref ", 4, Some(&document));
//! assert_eq!(candidates.last().unwrap().name, "login");
//! ```

use zed_extension_api as zed;

pub mod completion;
pub mod config;
pub mod grammar;
#[cfg(feature = "lsp")]
pub mod lsp_server;
pub mod models;
pub mod parser;

/// Name of the language server binary
const SERVER_BINARY_NAME: &str = "completion-server";

/// Returns the platform-specific file name of the language server binary.
fn server_binary_name() -> String {
    if cfg!(target_os = "windows") {
        format!("{}.exe", SERVER_BINARY_NAME)
    } else {
        SERVER_BINARY_NAME.to_string()
    }
}

/// REST completion extension for Zed.
struct RestCompletionExtension;

impl zed::Extension for RestCompletionExtension {
    fn new() -> Self {
        Self
    }

    fn language_server_command(
        &mut self,
        _language_server_id: &zed::LanguageServerId,
        worktree: &zed::Worktree,
    ) -> zed::Result<zed::Command> {
        let binary_name = server_binary_name();

        // Prefer a binary on PATH, then the one installed alongside extension.wasm
        let command = worktree.which(&binary_name).unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                format!(".\\{}", binary_name)
            } else {
                format!("./{}", binary_name)
            }
        });

        Ok(zed::Command {
            command,
            args: vec![],
            env: vec![],
        })
    }

    fn language_server_initialization_options(
        &mut self,
        language_server_id: &zed::LanguageServerId,
        worktree: &zed::Worktree,
    ) -> zed::Result<Option<zed::serde_json::Value>> {
        let settings = zed::settings::LspSettings::for_worktree(language_server_id.as_ref(), worktree)
            .ok()
            .and_then(|settings| settings.initialization_options);
        Ok(settings)
    }
}

zed::register_extension!(RestCompletionExtension);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_binary_name() {
        let name = server_binary_name();
        assert!(name.starts_with("completion-server"));
        if cfg!(target_os = "windows") {
            assert!(name.ends_with(".exe"));
        }
    }
}
