//! Which existing authorizations the targeted strategy removes.

use std::collections::HashSet;

use crate::{ANY_RESOURCE, AuthorizationRecord, PermissionKind, ResourceKind};

/// Search criteria for one class of generated authorizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchScope {
    pub resource_type: ResourceKind,
    pub resource_id: Option<&'static str>,
    /// Only records reporting exactly the granted permission set are removable.
    pub exact_permissions: bool,
}

/// Every process-definition authorization.
pub const PROCESS_DEFINITION_SCOPE: SearchScope = SearchScope {
    resource_type: ResourceKind::ProcessDefinition,
    resource_id: None,
    exact_permissions: true,
};

/// Wildcard process-instance authorizations.
pub const PROCESS_INSTANCE_SCOPE: SearchScope = SearchScope {
    resource_type: ResourceKind::ProcessInstance,
    resource_id: Some(ANY_RESOURCE),
    exact_permissions: false,
};

impl SearchScope {
    /// Permission set this tool grants within the scope.
    pub fn expected_permissions(&self) -> &'static [PermissionKind] {
        self.resource_type.granted_permissions()
    }

    /// Permission set passed to [`select_for_removal`] for this scope.
    pub fn removal_filter(&self) -> Option<&'static [PermissionKind]> {
        self.exact_permissions.then(|| self.expected_permissions())
    }
}

/// Ids to delete from a set of search results.
///
/// Administrator-owned records are always kept. When `expected` is given, a
/// record reporting a different permission set is kept as well; records that
/// report no permissions are not narrowed.
pub fn select_for_removal<'a, I>(records: I, expected: Option<&[PermissionKind]>) -> Vec<String>
where
    I: IntoIterator<Item = &'a AuthorizationRecord>,
{
    let expected: Option<HashSet<&str>> =
        expected.map(|perms| perms.iter().map(PermissionKind::as_str).collect());

    records
        .into_iter()
        .filter(|record| !record.is_protected())
        .filter(|record| match (&expected, &record.permissions) {
            (Some(expected), Some(actual)) => {
                actual.iter().map(String::as_str).collect::<HashSet<_>>() == *expected
            }
            _ => true,
        })
        .map(|record| record.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_records_are_never_selected() {
        let records = vec![
            AuthorizationRecord::new("authId1", "citizen"),
            AuthorizationRecord::new("authId2", "officer"),
            AuthorizationRecord::new("authId33", "camunda-admin"),
        ];

        let ids = select_for_removal(&records, None);
        assert_eq!(ids, vec!["authId1", "authId2"]);
    }

    #[test]
    fn admin_records_are_kept_even_with_matching_permissions() {
        let records = vec![
            AuthorizationRecord::new("a", "camunda-admin").with_permissions(["CREATE"]),
        ];

        let ids = select_for_removal(
            &records,
            Some(PROCESS_INSTANCE_SCOPE.expected_permissions()),
        );
        assert!(ids.is_empty());
    }

    #[test]
    fn permission_narrowing_compares_sets() {
        let records = vec![
            AuthorizationRecord::new("same", "officer")
                .with_permissions(["READ", "CREATE_INSTANCE"]),
            AuthorizationRecord::new("wider", "officer").with_permissions(["ALL"]),
            AuthorizationRecord::new("subset", "officer").with_permissions(["READ"]),
            AuthorizationRecord::new("unknown", "officer"),
        ];

        let ids = select_for_removal(&records, PROCESS_DEFINITION_SCOPE.removal_filter());
        assert_eq!(ids, vec!["same", "unknown"]);
    }

    #[test]
    fn only_definition_scope_narrows_by_permissions() {
        assert_eq!(
            PROCESS_DEFINITION_SCOPE.removal_filter(),
            Some(&[PermissionKind::CreateInstance, PermissionKind::Read][..])
        );
        assert_eq!(PROCESS_INSTANCE_SCOPE.removal_filter(), None);

        let records = vec![
            AuthorizationRecord::new("generated", "officer").with_permissions(["CREATE"]),
            AuthorizationRecord::new("manual", "auditor").with_permissions(["ALL"]),
        ];
        assert_eq!(
            select_for_removal(&records, PROCESS_INSTANCE_SCOPE.removal_filter()),
            vec!["generated", "manual"]
        );
    }

    #[test]
    fn records_without_group_are_selected() {
        let records = vec![AuthorizationRecord {
            id: "user-scoped".into(),
            group_id: None,
            permissions: None,
        }];

        assert_eq!(select_for_removal(&records, None), vec!["user-scoped"]);
    }
}
