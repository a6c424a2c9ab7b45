// Route path constants - single source of truth for all API paths

pub const HELLO: &str = "/hello";
pub const SET: &str = "/set";
pub const GET_ITEM: &str = "/get/{key}";
pub const DIVIDE: &str = "/divide";
pub const DOCS: &str = "/docs";
pub const OPENAPI: &str = "/openapi.json";

/// Anchored patterns for every path the gate lets through, in match order
pub const ALLOWED_PATHS: [&str; 6] = [
    r"^/hello$",
    r"^/get/\w+$",
    r"^/set$",
    r"^/divide$",
    r"^/docs$",
    r"^/openapi\.json$",
];
