#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_draw_list_to_png, RenderConfig};

/// Spawn data for the demos, relative to this crate.
pub const SAMPLE_MAP: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_island.json");
pub const SAMPLE_MOD: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_mod.json");
