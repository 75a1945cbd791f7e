pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const PLAYERS_PATH: &str = "players";
pub const WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";
pub const NO_INFORMATION_AVAILABLE: &str = "No information available";
pub const ERROR_FETCHING_INFORMATION: &str = "Error fetching information";
