//! Bodies of the `{error}` envelope. Clients match on these strings.

pub const NOT_FOUND: &str = "Not Found";
pub const INTERNAL_ERROR: &str = "Internal Server Error!";
