pub const SERVER_NAME: &str = "setlist";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const API_PREFIX: &str = "/rest";
