//! Lookup tables - Pure mappings from numeric readings to labels
//!
//! All tables are static slices or ordered range lists. None of the
//! lookups can fail: inputs outside the known ranges map to an explicit
//! fallback entry.

mod air_quality;
mod compass;
mod uv_index;
mod weather_code;

pub use air_quality::AqiCategory;
pub use compass::CompassDirection;
pub use uv_index::UvCategory;
pub use weather_code::{WeatherCategory, WeatherCode};

/// 24-bit RGB colors used by reply embeds
pub mod colors {
    pub const DARK_RED: u32 = 0x7F_00_00;
    pub const RED: u32 = 0xFF_00_00;
    pub const ORANGE: u32 = 0xFF_A5_00;
    pub const YELLOW: u32 = 0xFF_FF_00;
    pub const GREEN: u32 = 0x00_FF_00;
    pub const BLUE: u32 = 0x00_00_FF;
    pub const NAVY: u32 = 0x00_00_80;
    pub const WHITE: u32 = 0xFF_FF_FF;
    pub const GOLD: u32 = 0xFF_D7_00;
    pub const PURPLE: u32 = 0x80_00_80;
    pub const VERY_DARK_GRAY: u32 = 0x66_66_66;
    pub const SPRING_GREEN: u32 = 0x00_FF_7F;
    pub const BLURPLE: u32 = 0x72_89_DA;
}
