multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_MEMBER, ERR_UNAUTHORIZED};

/// Committee registry. Members administer rounds and vote.
/// The set only grows; there is no removal.
#[multiversx_sc::module]
pub trait CommitteeModule: crate::events::EventsModule {
    #[endpoint(addCommitteeMember)]
    fn add_committee_member(&self, account: ManagedAddress) {
        self.require_committee();
        require!(self.committee().insert(account.clone()), ERR_ALREADY_MEMBER);

        self.committee_member_added_event(&account);
    }

    /// Guard clause for committee-only endpoints. Returns the caller.
    fn require_committee(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.committee().contains(&caller), ERR_UNAUTHORIZED);
        caller
    }

    #[view(isCommittee)]
    fn is_committee(&self, account: &ManagedAddress) -> bool {
        self.committee().contains(account)
    }

    #[view(committeeCount)]
    fn committee_count(&self) -> u64 {
        self.committee().len() as u64
    }

    #[view(getCommitteeMembers)]
    fn get_committee_members(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.committee().iter() {
            result.push(member);
        }
        result
    }

    #[storage_mapper("committee")]
    fn committee(&self) -> UnorderedSetMapper<ManagedAddress>;
}
