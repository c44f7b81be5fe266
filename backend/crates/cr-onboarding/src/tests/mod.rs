mod profile_validator;

use crate::SaveRequest;

use cr_core::{NewCompany, ProfileFields, TelegramId};

use std::collections::BTreeSet;

pub(crate) fn request(selected: &[i64], new_company: Option<&str>) -> SaveRequest {
    SaveRequest {
        telegram_id: TelegramId::parse("12345").unwrap(),
        profile: ProfileFields {
            first_name: "Ada".to_string(),
            ..Default::default()
        },
        new_company: new_company.map(|name| NewCompany {
            name: name.to_string(),
            ..Default::default()
        }),
        selected_company_ids: selected.iter().copied().collect::<BTreeSet<_>>(),
    }
}
