use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum CardEvent {
    Initialized,
    Upgraded(u32),
    Mint(u64, Address),
    Transfer(u64, Address, Address),
    ApprovalSet(Address, bool),
}

impl CardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CardEvent::Initialized => stringify!(Initialized),
            CardEvent::Upgraded(..) => stringify!(Upgraded),
            CardEvent::Mint(..) => stringify!(Mint),
            CardEvent::Transfer(..) => stringify!(Transfer),
            CardEvent::ApprovalSet(..) => stringify!(ApprovalSet),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            CardEvent::Initialized => {}
            CardEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            CardEvent::Mint(card_id, owner) => {
                v.push_back(card_id.into_val(env));
                v.push_back(owner.into_val(env));
            }
            CardEvent::Transfer(card_id, from, to) => {
                v.push_back(card_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
            }
            CardEvent::ApprovalSet(owner, approved) => {
                v.push_back(owner.into_val(env));
                v.push_back(approved.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
