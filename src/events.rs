multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("committeeMemberAdded")]
    fn committee_member_added_event(&self, #[indexed] account: &ManagedAddress);

    #[event("applicationSubmitted")]
    fn application_submitted_event(
        &self,
        #[indexed] round: u64,
        #[indexed] application_id: u64,
        #[indexed] applicant: &ManagedAddress,
        metadata_uri: &ManagedBuffer,
    );

    #[event("donated")]
    fn donated_event(&self, #[indexed] donor: &ManagedAddress, amount: &BigUint);

    #[event("votingStarted")]
    fn voting_started_event(&self, #[indexed] round: u64, #[indexed] timestamp: u64);

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] round: u64,
        #[indexed] application_id: u64,
        #[indexed] voter: &ManagedAddress,
    );

    #[event("winnerSelected")]
    fn winner_selected_event(
        &self,
        #[indexed] round: u64,
        #[indexed] winner: &ManagedAddress,
        payout: &BigUint,
    );

    #[event("newRoundStarted")]
    fn new_round_started_event(&self, #[indexed] round: u64);

    #[event("phaseDurationsUpdated")]
    fn phase_durations_updated_event(
        &self,
        #[indexed] application_duration: u64,
        #[indexed] voting_duration: u64,
        #[indexed] enforced: bool,
    );
}
