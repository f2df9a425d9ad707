/// URL base del backend REST (solo si USE_MOCK_API=false)
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

pub const DEFAULT_MOCK_LATENCY_MS: u32 = 80;
pub const DEFAULT_HISTORY_LIMIT: usize = 100;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Claves de localStorage
pub const STORAGE_KEY_TOKEN: &str = "sc_token";
pub const STORAGE_KEY_USER: &str = "sc_user";

/// Tamaño de página por defecto de /items
pub const DEFAULT_PAGE_SIZE: u32 = 24;
/// Tamaño de página de la galería de obras
pub const ARTWORKS_PAGE_SIZE: u32 = 48;
