//! unitconv Plugin System
//!
//! Provides the seam between the engine and the conversion data:
//! - `ConversionDomain`: a named bundle of units and conversions
//! - `EngineBuilder`: installs domains and freezes them into an `Engine`
//! - `Engine`: resolve, search and apply over the installed domains

mod traits;
mod builder;
mod engine;

pub use traits::{ConversionDomain, DomainMeta, UnitDef, ConversionDef};
pub use builder::EngineBuilder;
pub use engine::Engine;

/// Re-export core types for domain authors
pub mod prelude {
    pub use crate::{
        ConversionDomain, DomainMeta, UnitDef, ConversionDef,
        EngineBuilder, Engine,
    };
    pub use unitconv_core::prelude::*;
}
