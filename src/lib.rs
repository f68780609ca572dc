#![no_std]

multiversx_sc::imports!();

pub mod committee;
pub mod errors;
pub mod events;
pub mod scholarship_proxy;
pub mod types;

use errors::*;
use types::{Application, Phase, RoundInfo};

/// First round number after deployment
const FIRST_ROUND: u64 = 1;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait ScholarshipRounds: committee::CommitteeModule + events::EventsModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    #[payable("EGLD")]
    fn init(
        &self,
        application_duration: u64,
        voting_duration: u64,
        enforce_phase_durations: bool,
        committee: MultiValueEncoded<ManagedAddress>,
    ) {
        require!(!committee.is_empty(), ERR_EMPTY_COMMITTEE);
        let seed = self.call_value().egld_value().clone_value();
        require!(seed > 0u64, ERR_ZERO_SEED);

        for member in committee {
            self.committee().insert(member);
        }

        self.application_duration().set(application_duration);
        self.voting_duration().set(voting_duration);
        self.enforce_phase_durations().set(enforce_phase_durations);

        self.treasury().set(&seed);
        self.total_donated().set(BigUint::zero());

        let now = self.blockchain().get_block_timestamp();
        self.current_round().set(FIRST_ROUND);
        self.phase().set(Phase::Applications);
        self.round_started_at().set(now);
        self.voting_started_at().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: configurePhaseDurations
    // ========================================================

    #[endpoint(configurePhaseDurations)]
    fn configure_phase_durations(
        &self,
        application_duration: u64,
        voting_duration: u64,
        enforce: bool,
    ) {
        self.require_committee();

        self.application_duration().set(application_duration);
        self.voting_duration().set(voting_duration);
        self.enforce_phase_durations().set(enforce);

        self.phase_durations_updated_event(application_duration, voting_duration, enforce);
    }

    // ========================================================
    // ENDPOINT: applyFor
    // Any non-committee account, once per round.
    // ========================================================

    #[endpoint(applyFor)]
    fn apply_for(&self, metadata_uri: ManagedBuffer) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(!self.committee().contains(&caller), ERR_FORBIDDEN);
        self.require_phase(Phase::Applications, ERR_NOT_APPLICATIONS_PHASE);

        let round = self.current_round().get();
        require!(
            !self.has_applied(round, &caller).get(),
            ERR_DUPLICATE_APPLICATION
        );

        let application_id = self.application_count(round).get() + 1;
        let application = Application {
            id: application_id,
            applicant: caller.clone(),
            metadata_uri,
            vote_count: 0,
            submitted_at: self.blockchain().get_block_timestamp(),
        };

        self.applications(round, application_id).set(&application);
        self.application_count(round).set(application_id);
        self.has_applied(round, &caller).set(true);

        self.application_submitted_event(
            round,
            application_id,
            &caller,
            &application.metadata_uri,
        );

        application_id
    }

    // ========================================================
    // ENDPOINT: donate
    // Accepted in any phase. Pools into the single treasury.
    // ========================================================

    #[endpoint(donate)]
    #[payable("EGLD")]
    fn donate(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_ZERO_DONATION);

        self.treasury().update(|balance| *balance += &amount);
        self.total_donated().update(|total| *total += &amount);
        self.donor_total(&caller).update(|total| *total += &amount);

        self.donated_event(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: startVoting
    // Applications → Voting
    // ========================================================

    #[endpoint(startVoting)]
    fn start_voting(&self) {
        self.require_committee();
        self.require_phase(Phase::Applications, ERR_NOT_APPLICATIONS_PHASE);

        let now = self.blockchain().get_block_timestamp();
        if self.enforce_phase_durations().get() {
            let ends_at = self
                .round_started_at()
                .get()
                .saturating_add(self.application_duration().get());
            require!(now >= ends_at, ERR_APPLICATION_PERIOD_ACTIVE);
        }

        self.phase().set(Phase::Voting);
        self.voting_started_at().set(now);

        self.voting_started_event(self.current_round().get(), now);
    }

    // ========================================================
    // ENDPOINT: vote
    // One non-retractable vote per committee member per round.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, application_id: u64) {
        let caller = self.require_committee();
        self.require_phase(Phase::Voting, ERR_NOT_VOTING_PHASE);

        let round = self.current_round().get();
        require!(
            !self.applications(round, application_id).is_empty(),
            ERR_UNKNOWN_APPLICATION
        );
        require!(!self.has_voted(round, &caller).get(), ERR_DUPLICATE_VOTE);

        self.applications(round, application_id)
            .update(|application| application.vote_count += 1);
        self.has_voted(round, &caller).set(true);
        self.votes_cast(round).update(|count| *count += 1);

        self.vote_cast_event(round, application_id, &caller);
    }

    // ========================================================
    // ENDPOINT: selectWinner
    // Voting → Closed. Pays the whole treasury to the winner.
    // ========================================================

    #[endpoint(selectWinner)]
    fn select_winner(&self) -> ManagedAddress {
        self.require_committee();
        self.require_phase(Phase::Voting, ERR_NOT_VOTING_PHASE);

        if self.enforce_phase_durations().get() {
            let now = self.blockchain().get_block_timestamp();
            let ends_at = self
                .voting_started_at()
                .get()
                .saturating_add(self.voting_duration().get());
            require!(now >= ends_at, ERR_VOTING_PERIOD_ACTIVE);
        }

        let round = self.current_round().get();
        let winning_application = self.leading_application(round);
        let winner = winning_application.applicant;

        // All bookkeeping before the transfer; the transfer goes last.
        let payout = self.treasury().take();
        self.phase().set(Phase::Closed);
        self.round_winner(round).set(&winner);
        self.round_payout(round).set(&payout);

        self.winner_selected_event(round, &winner, &payout);

        if payout > 0u64 {
            self.send().direct_egld(&winner, &payout);
        }

        winner
    }

    // ========================================================
    // ENDPOINT: startNextRound
    // Closed → Applications of round + 1
    // ========================================================

    #[endpoint(startNextRound)]
    fn start_next_round(&self) -> u64 {
        self.require_committee();
        self.require_phase(Phase::Closed, ERR_NOT_CLOSED_PHASE);

        // Applications, votes and markers are keyed by round, so the new
        // round starts with an empty book and tally.
        let next_round = self.current_round().get() + 1;
        let now = self.blockchain().get_block_timestamp();

        self.current_round().set(next_round);
        self.phase().set(Phase::Applications);
        self.round_started_at().set(now);
        self.voting_started_at().set(0u64);

        self.new_round_started_event(next_round);

        next_round
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_phase(&self, expected: Phase, err_msg: &str) {
        require!(self.phase().get() == expected, err_msg);
    }

    /// Highest vote count wins; ties go to the lowest id.
    fn leading_application(&self, round: u64) -> Application<Self::Api> {
        let count = self.application_count(round).get();
        require!(count > 0, ERR_NO_APPLICATIONS);

        let mut leader = self.applications(round, 1).get();
        for id in 2..=count {
            let candidate = self.applications(round, id).get();
            if candidate.vote_count > leader.vote_count {
                leader = candidate;
            }
        }
        leader
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getRoundInfo)]
    fn get_round_info(&self) -> RoundInfo<Self::Api> {
        let round = self.current_round().get();
        let has_winner = !self.round_winner(round).is_empty();
        let winner = if has_winner {
            self.round_winner(round).get()
        } else {
            ManagedAddress::zero()
        };

        RoundInfo {
            round,
            phase: self.phase().get(),
            application_count: self.application_count(round).get(),
            started_at: self.round_started_at().get(),
            voting_started_at: self.voting_started_at().get(),
            votes_cast: self.votes_cast(round).get(),
            has_winner,
            winner,
            treasury: self.treasury().get(),
        }
    }

    #[view(getApplication)]
    fn get_application(&self, round: u64, application_id: u64) -> Application<Self::Api> {
        require!(
            !self.applications(round, application_id).is_empty(),
            ERR_UNKNOWN_APPLICATION
        );
        self.applications(round, application_id).get()
    }

    #[view(getApplications)]
    fn get_applications(&self, round: u64) -> MultiValueEncoded<Application<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let count = self.application_count(round).get();
        for id in 1..=count {
            result.push(self.applications(round, id).get());
        }
        result
    }

    #[view(getRoundResult)]
    fn get_round_result(&self, round: u64) -> MultiValue2<ManagedAddress, BigUint> {
        require!(!self.round_winner(round).is_empty(), ERR_ROUND_HAS_NO_WINNER);
        (self.round_winner(round).get(), self.round_payout(round).get()).into()
    }

    #[view(hasApplied)]
    fn has_account_applied(&self, round: u64, account: &ManagedAddress) -> bool {
        self.has_applied(round, account).get()
    }

    #[view(hasVoted)]
    fn has_member_voted(&self, round: u64, member: &ManagedAddress) -> bool {
        self.has_voted(round, member).get()
    }

    #[view(getTreasuryBalance)]
    fn get_treasury_balance(&self) -> BigUint {
        self.treasury().get()
    }

    #[view(getDonorTotal)]
    fn get_donor_total(&self, donor: &ManagedAddress) -> BigUint {
        self.donor_total(donor).get()
    }

    #[view(getConfig)]
    fn get_config(&self) -> MultiValue3<u64, u64, bool> {
        (
            self.application_duration().get(),
            self.voting_duration().get(),
            self.enforce_phase_durations().get(),
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(applicationDuration)]
    #[storage_mapper("applicationDuration")]
    fn application_duration(&self) -> SingleValueMapper<u64>;

    #[view(votingDuration)]
    #[storage_mapper("votingDuration")]
    fn voting_duration(&self) -> SingleValueMapper<u64>;

    #[view(arePhaseDurationsEnforced)]
    #[storage_mapper("enforcePhaseDurations")]
    fn enforce_phase_durations(&self) -> SingleValueMapper<bool>;

    // ── Round ledger ──

    #[view(getCurrentRound)]
    #[storage_mapper("currentRound")]
    fn current_round(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("phase")]
    fn phase(&self) -> SingleValueMapper<Phase>;

    #[storage_mapper("roundStartedAt")]
    fn round_started_at(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("votingStartedAt")]
    fn voting_started_at(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("roundWinner")]
    fn round_winner(&self, round: u64) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("roundPayout")]
    fn round_payout(&self, round: u64) -> SingleValueMapper<BigUint>;

    // ── Applications ──

    #[storage_mapper("applicationCount")]
    fn application_count(&self, round: u64) -> SingleValueMapper<u64>;

    #[storage_mapper("applications")]
    fn applications(&self, round: u64, id: u64) -> SingleValueMapper<Application<Self::Api>>;

    #[storage_mapper("hasApplied")]
    fn has_applied(&self, round: u64, account: &ManagedAddress) -> SingleValueMapper<bool>;

    // ── Votes ──

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, round: u64, member: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("votesCast")]
    fn votes_cast(&self, round: u64) -> SingleValueMapper<u64>;

    // ── Treasury ──

    #[storage_mapper("treasury")]
    fn treasury(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalDonated)]
    #[storage_mapper("totalDonated")]
    fn total_donated(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("donorTotal")]
    fn donor_total(&self, donor: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
