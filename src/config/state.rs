// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Store,
    Catalog,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Store, Tab::Catalog];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Store => "AliExpress",
            Tab::Catalog => "Catalog",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Initial viewport size
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab
    pub current_tab: Tab,

    /// Dev tools window visibility
    pub devtools_open: bool,

    // Text fields (mapped to options on use)
    pub address_text: String,
    pub out_dir_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1280,
            window_h: 800,
            current_tab: Tab::default(),
            devtools_open: false,
            address_text: s!(),
            out_dir_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
