//! Client-side form rules. Each field reports only its first failing rule.

use crate::error::AppError;
use crate::models::{ProjectPriority, ProjectStatus, Project, UserRecord};
use crate::permissions::Role;
use crate::requests::{split_technologies, CreateUserRequest, ProjectRequest, UpdateUserRequest};
use chrono::NaiveDate;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

pub const MAX_BUDGET: f64 = 999_999_999.0;

const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Whether a form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn fail(code: &'static str, message: &'static str) -> Result<(), ValidationError> {
    Err(rule(code, message))
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn check_full_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return fail("required", "Full name is required");
    }
    if char_len(name) < 2 {
        return fail("min_length", "Name must be at least 2 characters");
    }
    if char_len(name) > 50 {
        return fail("max_length", "Name must be less than 50 characters");
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return fail("required", "Email is required");
    }
    if !is_valid_email(email) {
        return fail("email", "Please enter a valid email address");
    }
    Ok(())
}

fn check_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return fail("required", "Password is required");
    }
    if char_len(password) < 8 {
        return fail("min_length", "Password must be at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return fail("uppercase", "Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return fail("lowercase", "Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return fail("number", "Password must contain at least one number");
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return fail("special", "Password must contain at least one special character");
    }
    Ok(())
}

fn check_role(role: &str) -> Result<(), ValidationError> {
    match Role::parse(role) {
        Some(_) => Ok(()),
        None => fail("required", "Please select a role"),
    }
}

fn check_project_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return fail("required", "Project name is required");
    }
    if char_len(name) < 3 {
        return fail("min_length", "Project name must be at least 3 characters");
    }
    if char_len(name) > 100 {
        return fail("max_length", "Project name must be less than 100 characters");
    }
    Ok(())
}

fn check_description(description: &str) -> Result<(), ValidationError> {
    let description = description.trim();
    if !description.is_empty() && char_len(description) < 10 {
        return fail("min_length", "Description must be at least 10 characters");
    }
    if char_len(description) > 500 {
        return fail("max_length", "Description must be less than 500 characters");
    }
    Ok(())
}

fn check_status(status: &str) -> Result<(), ValidationError> {
    match ProjectStatus::parse(status) {
        Some(_) => Ok(()),
        None => fail("required", "Please select a status"),
    }
}

fn check_priority(priority: &str) -> Result<(), ValidationError> {
    match ProjectPriority::parse(priority) {
        Some(_) => Ok(()),
        None => fail("required", "Please select a priority"),
    }
}

fn check_budget(budget: &str) -> Result<(), ValidationError> {
    let budget = budget.trim();
    if budget.is_empty() {
        return Ok(());
    }
    let Ok(value) = budget.parse::<f64>() else {
        return fail("number", "Budget must be a number");
    };
    if !value.is_finite() {
        return fail("number", "Budget must be a number");
    }
    if value < 0.0 {
        return fail("negative", "Budget cannot be negative");
    }
    if value > MAX_BUDGET {
        return fail("max", "Budget exceeds maximum limit");
    }
    Ok(())
}

fn check_start_date(date: &str) -> Result<(), ValidationError> {
    if date.trim().is_empty() {
        return fail("required", "Start date is required");
    }
    Ok(())
}

fn check_end_date(date: &str) -> Result<(), ValidationError> {
    if date.trim().is_empty() {
        return fail("required", "End date is required");
    }
    Ok(())
}

/// True when `end` falls before `start`. Dates that are not ISO `YYYY-MM-DD`
/// are compared as text.
pub fn ends_before_start(start: &str, end: &str) -> bool {
    match (
        NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d"),
        NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d"),
    ) {
        (Ok(start), Ok(end)) => end < start,
        _ => end.trim() < start.trim(),
    }
}

/// Create/edit user form state.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct UserForm {
    #[validate(custom(function = "check_full_name"))]
    pub name: String,
    #[validate(custom(function = "check_email"))]
    pub email: String,
    pub password: String,
    #[validate(custom(function = "check_role"))]
    pub role: String,
}

impl UserForm {
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: Role::parse(&user.role)
                .map(|r| r.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    /// Validate for `mode`. The password is only checked when creating.
    pub fn check(&self, mode: FormMode) -> Result<(), AppError> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if mode == FormMode::Create {
            if let Err(err) = check_password(&self.password) {
                errors.add("password", err);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }

    pub fn create_request(&self) -> CreateUserRequest {
        CreateUserRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role.clone(),
        }
    }

    pub fn update_request(&self) -> UpdateUserRequest {
        UpdateUserRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role.clone(),
        }
    }
}

/// Create/edit project form state. Text inputs are kept as typed.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ProjectForm {
    #[validate(custom(function = "check_project_name"))]
    pub name: String,
    #[validate(custom(function = "check_description"))]
    pub description: String,
    #[validate(custom(function = "check_status"))]
    pub status: String,
    #[validate(custom(function = "check_priority"))]
    pub priority: String,
    /// Comma separated.
    pub technologies: String,
    #[validate(custom(function = "check_budget"))]
    pub budget: String,
    #[validate(custom(function = "check_start_date"))]
    pub start_date: String,
    #[validate(custom(function = "check_end_date"))]
    pub end_date: String,
    pub team_members: Vec<String>,
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone().unwrap_or_default(),
            status: project.status.clone(),
            priority: project.priority.clone(),
            technologies: project.technologies.join(", "),
            budget: project.budget.map(|b| b.to_string()).unwrap_or_default(),
            start_date: date_input_value(project.start_date.as_deref()),
            end_date: date_input_value(project.end_or_due_date()),
            team_members: project
                .team()
                .iter()
                .filter_map(|m| m.member_id().map(str::to_string))
                .collect(),
        }
    }

    pub fn check(&self) -> Result<(), AppError> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        let dates_present = !errors.field_errors().contains_key("start_date")
            && !errors.field_errors().contains_key("end_date");
        if dates_present && ends_before_start(&self.start_date, &self.end_date) {
            errors.add(
                "end_date",
                rule("order", "End date must be after start date"),
            );
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }

    pub fn to_request(&self) -> ProjectRequest {
        ProjectRequest {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            status: self.status.clone(),
            priority: self.priority.clone(),
            technologies: split_technologies(&self.technologies),
            budget: self.budget.trim().parse::<f64>().unwrap_or(0.0),
            start_date: self.start_date.trim().to_string(),
            end_date: self.end_date.trim().to_string(),
            team_members: self.team_members.clone(),
        }
    }
}

/// Trim a server timestamp down to the `YYYY-MM-DD` a date input expects.
fn date_input_value(raw: Option<&str>) -> String {
    raw.map(|s| s.get(..10).unwrap_or(s).to_string())
        .unwrap_or_default()
}
