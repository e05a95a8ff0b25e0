//! libtranslit crate root
//!
//! Table-driven conversion of Devanagari Sanskrit into nine other scripts
//! (IAST, Kannada, Telugu, Tamil, Malayalam, Gujarati, Odia, Bengali,
//! Gurmukhi) and back.
//!
//! Public API exported here:
//! - `transliterate` / `reverse_transliterate` over the built-in registry
//! - `Transliterator`, which implements core's `ScriptConverter`
//! - `ScriptMapping` / `AnusvaraRules` / `ScriptRegistry`
//! - `TranslitConfig`

pub mod config;
pub mod engine;
pub mod mapping;
pub mod registry;
pub mod reverse;
pub mod scripts;

pub use config::TranslitConfig;
pub use engine::{transliterate, transliterate_with, Transliterator};
pub use mapping::{AnusvaraRules, ScriptMapping};
pub use registry::{ScriptRegistry, BUILTIN};
pub use reverse::{detect_script, reverse_transliterate, reverse_transliterate_with, to_devanagari};
