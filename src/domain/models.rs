use serde::{Deserialize, Serialize};

/// A person from the user directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: Name,
    pub email: String,
    pub picture: Picture,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Name {
    pub title: String,
    pub first: String,
    pub last: String,
}

/// Pre-rendered profile picture URLs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.name.title, self.name.first, self.name.last)
    }
}

// --- API Response Structures ---

/// One page of the user directory
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UsersResponse {
    pub results: Vec<User>,
    pub info: ResponseInfo,
}

/// Page metadata; the server sends more fields than we read
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResponseInfo {
    pub page: u32,
}

/// Query parameters of a page request, in the order they go on the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParams {
    pub page: u32,
    pub results: u32,
}

impl QueryParams {
    pub fn pairs(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("results", self.results.to_string()),
        ]
    }
}
