// src/config/consts.rs

// Page context
pub const DEFAULT_START_URL: &str = "https://www.aliexpress.com/p/order/index.html";
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("order_scrape/", env!("CARGO_PKG_VERSION"));
pub const OUTLINE_LINES: usize = 200; // text blocks kept for the page preview

// Surface layout
pub const REFERENCE_WIDTH: f32 = 1200.0; // width of the "maximal" surface
pub const SURFACE_HEIGHT_FRACTION: f32 = 0.9; // of viewport height

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const JSON_FILE: &str = "orders.json";
pub const CSV_FILE: &str = "orders.csv";
pub const CSV_HEADER: [&str; 4] = ["Назва товару", "Посилання", "Варіація", "Кількість"];

// Display
pub const TABLE_HEADERS: [&str; 4] = ["Title", "URL", "Variation", "Count"];

// CLI
pub const EXTRACT_TIMEOUT_SECS: u64 = 30;
