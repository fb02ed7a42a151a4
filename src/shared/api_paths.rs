//! Endpoint Paths
//!
//! Paths are opaque strings configured centrally; the router and the client
//! both read them from here so they cannot drift apart.

pub const LIST_FORMS: &str = "/api/forms/list";
pub const FETCH_FORM: &str = "/api/forms/fetch";
pub const SAVE_FORM: &str = "/api/forms/save";
pub const SUBMIT_ANSWERS: &str = "/api/forms/submit";
pub const DELETE_FORM: &str = "/api/forms/delete";
pub const HEALTH: &str = "/health";
