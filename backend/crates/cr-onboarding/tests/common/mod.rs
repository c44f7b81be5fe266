use cr_core::{NewCompany, ProfileFields, TelegramId};
use cr_onboarding::{IdentityResolver, ProfileValidator, SaveRequest, UpsertWorkflow};
use cr_store::MemoryStore;

use std::collections::BTreeSet;
use std::sync::Arc;

pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub resolver: IdentityResolver,
    pub workflow: UpsertWorkflow,
}

pub fn harness() -> Harness {
    let store = Arc::new(MemoryStore::new());
    Harness {
        resolver: IdentityResolver::new(store.clone()),
        workflow: UpsertWorkflow::new(store.clone(), ProfileValidator::new(256)),
        store,
    }
}

pub fn tg(value: &str) -> TelegramId {
    TelegramId::parse(value).unwrap()
}

pub fn save(telegram_id: &str, selected: &[i64], new_company: Option<&str>) -> SaveRequest {
    SaveRequest {
        telegram_id: tg(telegram_id),
        profile: ProfileFields {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            telegram_handle: "ada".to_string(),
            linkedin_url: String::new(),
        },
        new_company: new_company.map(|name| NewCompany {
            name: name.to_string(),
            ..Default::default()
        }),
        selected_company_ids: selected.iter().copied().collect::<BTreeSet<_>>(),
    }
}

pub fn ids(values: &[i64]) -> BTreeSet<i64> {
    values.iter().copied().collect()
}
