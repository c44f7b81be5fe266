use crate::{DEFAULT_MEMBERSHIP_ROLE, Membership};

#[test]
fn test_member_uses_default_role() {
    let membership = Membership::member(10, 1);

    assert_eq!(membership.user_id, 10);
    assert_eq!(membership.company_id, 1);
    assert_eq!(membership.role, DEFAULT_MEMBERSHIP_ROLE);
    assert_eq!(membership.role, "Member");
}
