use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;
use std::sync::LazyLock;

use crate::{Permission, Role};

const STUDIO_GRANTS: &[Permission] = &[
    Permission::MediaRead,
    Permission::MediaWrite,
    Permission::MediaDelete,
    Permission::SchedulingRead,
    Permission::SchedulingWrite,
    Permission::SchedulingDelete,
    Permission::AnalyticsRead,
    Permission::BillingRead,
    Permission::StudioManageModels,
];

const MODEL_GRANTS: &[Permission] = &[
    Permission::MediaRead,
    Permission::MediaWrite,
    Permission::MediaDelete,
    Permission::SchedulingRead,
    Permission::SchedulingWrite,
    Permission::SchedulingDelete,
    Permission::AnalyticsRead,
    Permission::BillingRead,
];

static STANDARD_MATRIX: LazyLock<RolePermissionMatrix> =
    LazyLock::new(RolePermissionMatrix::build);

static NO_PERMISSIONS: BTreeSet<Permission> = BTreeSet::new();

/// Fixed mapping from each role to the permissions it holds.
///
/// Built once per process and shared by reference; there is no mutation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePermissionMatrix {
    grants: BTreeMap<Role, BTreeSet<Permission>>,
}

impl RolePermissionMatrix {
    /// Returns the process-wide matrix.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_MATRIX
    }

    fn build() -> Self {
        let grants = Role::all()
            .iter()
            .map(|role| (*role, role_grants(*role).iter().copied().collect()))
            .collect();

        Self { grants }
    }

    /// Returns the immutable permission set held by a role.
    #[must_use]
    pub fn permissions_for(&self, role: Role) -> &BTreeSet<Permission> {
        self.grants.get(&role).unwrap_or(&NO_PERMISSIONS)
    }

    /// Returns the permission set for a raw role claim.
    ///
    /// Unrecognized role values hold no permission at all.
    #[must_use]
    pub fn permissions_for_claim(&self, role_claim: &str) -> &BTreeSet<Permission> {
        Role::from_str(role_claim).map_or(&NO_PERMISSIONS, |role| self.permissions_for(role))
    }

    /// Returns whether the role holds the permission.
    #[must_use]
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.permissions_for(role).contains(&permission)
    }

    /// Returns whether the role holds every requested permission.
    ///
    /// An empty request is vacuously satisfied.
    #[must_use]
    pub fn has_all_permissions(&self, role: Role, permissions: &[Permission]) -> bool {
        let held = self.permissions_for(role);
        permissions.iter().all(|permission| held.contains(permission))
    }

    /// Returns whether the role holds at least one requested permission.
    ///
    /// An empty request is never satisfied.
    #[must_use]
    pub fn has_any_permission(&self, role: Role, permissions: &[Permission]) -> bool {
        let held = self.permissions_for(role);
        permissions.iter().any(|permission| held.contains(permission))
    }
}

fn role_grants(role: Role) -> &'static [Permission] {
    match role {
        Role::Admin => Permission::all(),
        Role::Studio => STUDIO_GRANTS,
        Role::Model => MODEL_GRANTS,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::RolePermissionMatrix;
    use crate::{Permission, Role};

    fn any_role() -> impl Strategy<Value = Role> {
        prop::sample::select(Role::all())
    }

    fn any_permission() -> impl Strategy<Value = Permission> {
        prop::sample::select(Permission::all())
    }

    #[test]
    fn admin_holds_a_superset_of_every_role() {
        let matrix = RolePermissionMatrix::standard();
        let admin = matrix.permissions_for(Role::Admin);

        for role in Role::all() {
            assert!(matrix.permissions_for(*role).is_subset(admin));
        }
        assert_eq!(admin.len(), Permission::all().len());
    }

    #[test]
    fn model_holds_no_management_permission() {
        let matrix = RolePermissionMatrix::standard();
        for permission in [
            Permission::UsersManage,
            Permission::StudioManageModels,
            Permission::BillingManage,
        ] {
            assert!(!matrix.has_permission(Role::Model, permission));
        }
    }

    #[test]
    fn studio_manages_models_but_not_platform_settings() {
        let matrix = RolePermissionMatrix::standard();
        assert!(matrix.has_permission(Role::Studio, Permission::StudioManageModels));
        assert!(!matrix.has_permission(Role::Studio, Permission::BillingManage));
        assert!(!matrix.has_permission(Role::Studio, Permission::UsersManage));
    }

    #[test]
    fn unrecognized_role_claim_holds_nothing() {
        let matrix = RolePermissionMatrix::standard();
        assert!(matrix.permissions_for_claim("superuser").is_empty());
        assert!(matrix.permissions_for_claim("").is_empty());
        assert_eq!(
            matrix.permissions_for_claim("studio"),
            matrix.permissions_for(Role::Studio)
        );
    }

    #[test]
    fn standard_matrix_is_shared() {
        assert!(std::ptr::eq(
            RolePermissionMatrix::standard(),
            RolePermissionMatrix::standard()
        ));
    }

    #[test]
    fn empty_requests_are_vacuous() {
        let matrix = RolePermissionMatrix::standard();
        for role in Role::all() {
            assert!(matrix.has_all_permissions(*role, &[]));
            assert!(!matrix.has_any_permission(*role, &[]));
        }
    }

    #[test]
    fn all_and_any_follow_individual_grants() {
        let matrix = RolePermissionMatrix::standard();
        let mixed = [Permission::MediaRead, Permission::BillingManage];

        assert!(!matrix.has_all_permissions(Role::Studio, &mixed));
        assert!(matrix.has_any_permission(Role::Studio, &mixed));
        assert!(matrix.has_all_permissions(Role::Admin, &mixed));
        assert!(!matrix.has_any_permission(
            Role::Model,
            &[Permission::UsersManage, Permission::StudioManageModels]
        ));
    }

    proptest! {
        #[test]
        fn has_permission_is_set_membership(role in any_role(), permission in any_permission()) {
            let matrix = RolePermissionMatrix::standard();
            prop_assert_eq!(
                matrix.has_permission(role, permission),
                matrix.permissions_for(role).contains(&permission)
            );
        }

        #[test]
        fn all_implies_any_for_non_empty_requests(
            role in any_role(),
            permissions in prop::collection::vec(any_permission(), 1..6),
        ) {
            let matrix = RolePermissionMatrix::standard();
            if matrix.has_all_permissions(role, &permissions) {
                prop_assert!(matrix.has_any_permission(role, &permissions));
            }
        }
    }
}
