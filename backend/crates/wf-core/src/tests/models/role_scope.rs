use crate::RoleScope;

use std::str::FromStr;

#[test]
fn test_role_scope_as_str() {
    assert_eq!(RoleScope::Global.as_str(), "global");
    assert_eq!(RoleScope::Workflow.as_str(), "workflow");
    assert_eq!(RoleScope::Credential.as_str(), "credential");
}

#[test]
fn test_role_scope_from_str() {
    assert_eq!(RoleScope::from_str("global").unwrap(), RoleScope::Global);
    assert_eq!(RoleScope::from_str("workflow").unwrap(), RoleScope::Workflow);
    assert_eq!(
        RoleScope::from_str("credential").unwrap(),
        RoleScope::Credential
    );
    assert!(RoleScope::from_str("tenant").is_err());
}
