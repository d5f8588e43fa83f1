use std::fmt::{Display, Formatter};
use std::str::FromStr;

use atelier_core::AppError;
use serde::{Deserialize, Serialize};

/// Kinds of resources guarded by the permission catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Uploaded photos, videos and other content items.
    Media,
    /// Scheduled posts and publishing slots.
    Scheduling,
    /// Engagement and revenue analytics rows.
    Analytics,
    /// Invoices, payouts and billing configuration.
    Billing,
    /// Platform user accounts.
    Users,
    /// Studio roster of assigned creators.
    Studio,
}

impl ResourceKind {
    /// Returns a stable storage value for this resource kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Media => "media",
            Self::Scheduling => "scheduling",
            Self::Analytics => "analytics",
            Self::Billing => "billing",
            Self::Users => "users",
            Self::Studio => "studio",
        }
    }
}

/// Permissions enforced by access policy checks.
///
/// The catalog is closed: adding a variant forces every exhaustive match in
/// the role matrix and decision code to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Permission {
    /// Allows viewing media items.
    MediaRead,
    /// Allows uploading and editing media items.
    MediaWrite,
    /// Allows deleting media items.
    MediaDelete,
    /// Allows viewing scheduled posts.
    SchedulingRead,
    /// Allows creating and editing scheduled posts.
    SchedulingWrite,
    /// Allows cancelling scheduled posts.
    SchedulingDelete,
    /// Allows reading analytics.
    AnalyticsRead,
    /// Allows viewing invoices and payouts.
    BillingRead,
    /// Allows changing platform-wide billing configuration.
    BillingManage,
    /// Allows managing platform user accounts.
    UsersManage,
    /// Allows managing the creators assigned to a studio.
    StudioManageModels,
}

impl Permission {
    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MediaRead => "media.read",
            Self::MediaWrite => "media.write",
            Self::MediaDelete => "media.delete",
            Self::SchedulingRead => "scheduling.read",
            Self::SchedulingWrite => "scheduling.write",
            Self::SchedulingDelete => "scheduling.delete",
            Self::AnalyticsRead => "analytics.read",
            Self::BillingRead => "billing.read",
            Self::BillingManage => "billing.manage",
            Self::UsersManage => "users.manage",
            Self::StudioManageModels => "studio.manageModels",
        }
    }

    /// Returns the resource kind this permission applies to.
    #[must_use]
    pub fn resource_kind(&self) -> ResourceKind {
        match self {
            Self::MediaRead | Self::MediaWrite | Self::MediaDelete => ResourceKind::Media,
            Self::SchedulingRead | Self::SchedulingWrite | Self::SchedulingDelete => {
                ResourceKind::Scheduling
            }
            Self::AnalyticsRead => ResourceKind::Analytics,
            Self::BillingRead | Self::BillingManage => ResourceKind::Billing,
            Self::UsersManage => ResourceKind::Users,
            Self::StudioManageModels => ResourceKind::Studio,
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::MediaRead,
            Permission::MediaWrite,
            Permission::MediaDelete,
            Permission::SchedulingRead,
            Permission::SchedulingWrite,
            Permission::SchedulingDelete,
            Permission::AnalyticsRead,
            Permission::BillingRead,
            Permission::BillingManage,
            Permission::UsersManage,
            Permission::StudioManageModels,
        ];

        ALL
    }

    /// Parses a transport value into a permission.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl Display for Permission {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|permission| permission.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown permission value '{value}'")))
    }
}

impl TryFrom<String> for Permission {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<Permission> for &'static str {
    fn from(value: Permission) -> Self {
        value.as_str()
    }
}
