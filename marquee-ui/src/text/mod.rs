//! Text measurement, paint and direction for marquee rendering

pub mod cosmic;
pub mod direction;
pub mod metrics;
pub mod paint;

pub use cosmic::CosmicMetrics;
pub use direction::{is_ltr_text, text_direction};
pub use metrics::{FontMetrics, MonospaceMetrics, TextMetrics};
pub use paint::{Color, EnabledState, FontStyle, TextColor, TextPaint};
