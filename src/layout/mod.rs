// Purpose: spatial allocation of the matrix among channels and notes

pub mod engine;
pub mod palette;
pub mod rect;
pub mod tiling;

pub use engine::{ChannelEntry, LayoutEngine, NoteEntry};
pub use palette::{Rgb, CHANNEL_PALETTE};
pub use rect::Rect;
