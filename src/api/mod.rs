pub mod palette;
pub mod themes;

pub use palette::{handle_palette, PaletteRequest, PaletteResponse, __path_handle_palette};
pub use themes::{
    handle_theme_css, handle_themes, ThemeQuery, ThemesRequest, ThemesResponse,
    __path_handle_theme_css, __path_handle_themes,
};
