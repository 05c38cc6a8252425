use serde::{Deserialize, Serialize};

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Body for `PATCH /users/:id`. Passwords are not editable here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Body for `POST /projects` and `PATCH /projects/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub name: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub technologies: Vec<String>,
    pub budget: f64,
    pub start_date: String,
    pub end_date: String,
    pub team_members: Vec<String>,
}

/// Split a comma-separated technology list, dropping blanks.
pub fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
