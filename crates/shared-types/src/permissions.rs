use std::fmt;

/// Role claim carried by the session. Ordered by privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Role {
    #[default]
    User,
    Admin,
    SuperAdmin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Admin, Role::SuperAdmin];

    /// Case-insensitive parse of the wire form. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            "super-admin" => Some(Role::SuperAdmin),
            _ => None,
        }
    }

    /// Parse a role claim. Unknown values fall back to the least privileged role.
    pub fn from_str_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Wire form, as sent to and received from the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::SuperAdmin => "super-admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
            Role::SuperAdmin => "Super Admin",
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Role::User => 0,
            Role::Admin => 1,
            Role::SuperAdmin => 2,
        }
    }

    /// Returns true if this role is at least as privileged as `required`.
    pub fn satisfies(&self, required: Role) -> bool {
        self.rank() >= required.rank()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability flags derived from a role. Never stored; recompute from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PermissionSet {
    pub is_admin: bool,
    pub is_super_admin: bool,
    pub can_view_users: bool,
    pub can_create_project: bool,
    pub can_edit_project: bool,
    pub can_delete_project: bool,
    pub can_delete_user: bool,
    pub can_toggle_user_status: bool,
}

impl PermissionSet {
    pub fn for_role(role: Role) -> Self {
        let is_super_admin = role == Role::SuperAdmin;
        let is_admin = role.satisfies(Role::Admin);
        Self {
            is_admin,
            is_super_admin,
            can_view_users: is_admin,
            can_create_project: is_admin,
            can_edit_project: is_admin,
            can_delete_project: is_super_admin,
            can_delete_user: is_super_admin,
            can_toggle_user_status: is_admin,
        }
    }

    /// Adding and removing project team members is reserved for admins.
    pub fn can_manage_members(&self) -> bool {
        self.is_admin
    }

    /// Creating and editing user accounts is reserved for admins.
    pub fn can_manage_users(&self) -> bool {
        self.is_admin
    }
}

/// Resolve a raw role claim into its capability set.
///
/// Total over every input: anything other than a recognized role,
/// compared case-insensitively, resolves to the all-false set.
pub fn resolve(role: &str) -> PermissionSet {
    match Role::parse(role) {
        Some(role) => PermissionSet::for_role(role),
        None => PermissionSet::default(),
    }
}
