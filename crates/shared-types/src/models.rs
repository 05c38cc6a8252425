use crate::permissions::Role;
use serde::{Deserialize, Deserializer, Serialize};

/// Accept an identifier sent either as a JSON string or a JSON number.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "deserialize_id")] String);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(id)| id))
}

/// Primary key of a record. Backends send `id`, `_id` or both; `id` wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IdKeys", into = "IdKeys")]
pub struct RecordKey(String);

impl RecordKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Wire form of [`RecordKey`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdKeys {
    #[serde(default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        rename = "_id",
        deserialize_with = "deserialize_opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub mongo_id: Option<String>,
}

impl TryFrom<IdKeys> for RecordKey {
    type Error = &'static str;

    fn try_from(keys: IdKeys) -> Result<Self, Self::Error> {
        keys.id
            .or(keys.mongo_id)
            .map(RecordKey)
            .ok_or("missing field `id`")
    }
}

impl From<RecordKey> for IdKeys {
    fn from(key: RecordKey) -> Self {
        IdKeys {
            id: Some(key.0),
            mongo_id: None,
        }
    }
}

/// Lifecycle of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
        ProjectStatus::Cancelled,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "planning" => Some(ProjectStatus::Planning),
            "in_progress" => Some(ProjectStatus::InProgress),
            "on_hold" => Some(ProjectStatus::OnHold),
            "completed" => Some(ProjectStatus::Completed),
            "cancelled" => Some(ProjectStatus::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPriority {
    Low,
    Medium,
    High,
}

impl ProjectPriority {
    pub const ALL: [ProjectPriority; 3] = [
        ProjectPriority::Low,
        ProjectPriority::Medium,
        ProjectPriority::High,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(ProjectPriority::Low),
            "medium" => Some(ProjectPriority::Medium),
            "high" => Some(ProjectPriority::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectPriority::Low => "low",
            ProjectPriority::Medium => "medium",
            ProjectPriority::High => "high",
        }
    }
}

/// A user account as listed by `GET /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(flatten)]
    pub key: RecordKey,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl UserRecord {
    pub fn id(&self) -> &str {
        self.key.as_str()
    }

    /// Explicit `isActive` wins, then a `status` string, otherwise active.
    pub fn is_active(&self) -> bool {
        if let Some(active) = self.is_active {
            return active;
        }
        match &self.status {
            Some(status) => status.eq_ignore_ascii_case("active"),
            None => true,
        }
    }

    pub fn role(&self) -> Role {
        Role::from_str_or_default(&self.role)
    }

    /// Case-insensitive match against name or email. An empty term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
    }
}

/// Owner reference; the backend sends either a bare name or an object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OwnerRef {
    Name(String),
    Record {
        #[serde(default)]
        name: String,
        #[serde(default, deserialize_with = "deserialize_opt_id")]
        id: Option<String>,
        #[serde(default, rename = "_id", deserialize_with = "deserialize_opt_id")]
        mongo_id: Option<String>,
        #[serde(default)]
        email: Option<String>,
    },
}

impl OwnerRef {
    pub fn name(&self) -> &str {
        match self {
            OwnerRef::Name(name) => name,
            OwnerRef::Record { name, .. } => name,
        }
    }
}

/// A project team member. Field names vary between endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,
    #[serde(
        default,
        rename = "_id",
        deserialize_with = "deserialize_opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub mongo_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_role: Option<String>,
    #[serde(default)]
    pub project_role: Option<String>,
    #[serde(default)]
    pub joined_at: Option<String>,
}

impl TeamMember {
    pub fn member_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or(self.mongo_id.as_deref())
            .or(self.user_id.as_deref())
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.user_name.as_deref())
            .unwrap_or("Unknown")
    }

    pub fn display_email(&self) -> Option<&str> {
        self.email.as_deref().or(self.user_email.as_deref())
    }
}

/// `members` is a head count on list endpoints and a roster on detail endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Members {
    Count(u64),
    Roster(Vec<TeamMember>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(flatten)]
    pub key: RecordKey,
    #[serde(default, alias = "title")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub members: Option<Members>,
    #[serde(default)]
    pub team_members: Option<Vec<TeamMember>>,
    #[serde(default)]
    pub owner: Option<OwnerRef>,
    #[serde(default)]
    pub created_by: Option<OwnerRef>,
}

impl Project {
    pub fn id(&self) -> &str {
        self.key.as_str()
    }

    /// Owner field first, then the creator.
    pub fn owner_name(&self) -> Option<&str> {
        self.owner
            .as_ref()
            .or(self.created_by.as_ref())
            .map(OwnerRef::name)
            .filter(|name| !name.is_empty())
    }

    pub fn member_count(&self) -> usize {
        match &self.members {
            Some(Members::Count(n)) => *n as usize,
            Some(Members::Roster(list)) => list.len(),
            None => self.team_members.as_ref().map_or(0, Vec::len),
        }
    }

    /// The team roster, from `teamMembers` or a roster-shaped `members`.
    pub fn team(&self) -> &[TeamMember] {
        if let Some(team) = &self.team_members {
            return team;
        }
        match &self.members {
            Some(Members::Roster(list)) => list,
            _ => &[],
        }
    }

    pub fn has_member(&self, user_id: &str) -> bool {
        self.team().iter().any(|m| m.member_id() == Some(user_id))
    }

    /// Case-insensitive match against name or owner name.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
            || self
                .owner_name()
                .is_some_and(|owner| owner.to_lowercase().contains(&term))
    }

    pub fn end_or_due_date(&self) -> Option<&str> {
        self.end_date.as_deref().or(self.due_date.as_deref())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct StatusBreakdown {
    pub planning: u64,
    pub in_progress: u64,
    pub on_hold: u64,
    pub completed: u64,
    pub cancelled: u64,
}

impl StatusBreakdown {
    pub fn count(&self, status: ProjectStatus) -> u64 {
        match status {
            ProjectStatus::Planning => self.planning,
            ProjectStatus::InProgress => self.in_progress,
            ProjectStatus::OnHold => self.on_hold,
            ProjectStatus::Completed => self.completed,
            ProjectStatus::Cancelled => self.cancelled,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PriorityBreakdown {
    pub low: u64,
    pub medium: u64,
    pub high: u64,
}

impl PriorityBreakdown {
    pub fn count(&self, priority: ProjectPriority) -> u64 {
        match priority {
            ProjectPriority::Low => self.low,
            ProjectPriority::Medium => self.medium,
            ProjectPriority::High => self.high,
        }
    }
}

/// `GET /projects/statistics`. Missing figures read as zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectStatistics {
    pub total: u64,
    pub by_status: StatusBreakdown,
    pub by_priority: PriorityBreakdown,
}

/// `GET /users/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(flatten)]
    pub key: RecordKey,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Profile {
    pub fn id(&self) -> &str {
        self.key.as_str()
    }
}

/// The `user` object embedded in a login response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginUser {
    #[serde(flatten)]
    pub key: RecordKey,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
}

impl LoginUser {
    pub fn id(&self) -> &str {
        self.key.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: LoginUser,
}
