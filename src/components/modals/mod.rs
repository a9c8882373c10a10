pub mod command_palette;
pub mod helpers;

pub use command_palette::{
    answer_area, max_answer_scroll, palette_layout, suggestion_rects, CommandPaletteModal,
    PaletteLayout,
};
