use crate::NewCompany;

#[test]
fn test_new_company_has_name_ignores_blank() {
    assert!(!NewCompany::default().has_name());

    let blank = NewCompany {
        name: "   ".into(),
        website: "https://acme.example".into(),
        ..Default::default()
    };
    assert!(!blank.has_name());

    let named = NewCompany {
        name: "Acme".into(),
        ..Default::default()
    };
    assert!(named.has_name());
}

#[test]
fn test_new_company_trimmed() {
    let company = NewCompany {
        name: "  Beta ".into(),
        category: " DeFi".into(),
        ..Default::default()
    }
    .trimmed();

    assert_eq!(company.name, "Beta");
    assert_eq!(company.category, "DeFi");
}
