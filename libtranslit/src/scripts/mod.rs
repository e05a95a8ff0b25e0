//! Built-in script tables.
//!
//! One module per target script. Each exposes `mapping()`, which builds the
//! `ScriptMapping` registered under its language code.

use crate::mapping::ScriptMapping;

pub mod bn;
pub mod en;
pub mod gu;
pub mod kn;
pub mod ml;
pub mod or;
pub mod pa;
pub mod ta;
pub mod te;

/// All built-in target scripts (the source script is registered separately).
pub fn all() -> Vec<ScriptMapping> {
    vec![
        en::mapping(),
        kn::mapping(),
        te::mapping(),
        ta::mapping(),
        ml::mapping(),
        gu::mapping(),
        or::mapping(),
        bn::mapping(),
        pa::mapping(),
    ]
}
