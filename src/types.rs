multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Phase — round lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Non-committee accounts may apply.
    Applications,
    /// Committee members may cast one vote each.
    Voting,
    /// Winner paid. Waiting for the next round to be opened.
    Closed,
}

// ============================================================
// Application — one submission per applicant per round
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Application<M: ManagedTypeApi> {
    /// Sequential within the round, starting at 1
    pub id: u64,
    pub applicant: ManagedAddress<M>,
    pub metadata_uri: ManagedBuffer<M>,
    pub vote_count: u64,
    pub submitted_at: u64,
}

// ============================================================
// RoundInfo — point-in-time snapshot of the current round
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct RoundInfo<M: ManagedTypeApi> {
    pub round: u64,
    pub phase: Phase,
    pub application_count: u64,
    pub started_at: u64,
    /// 0 until voting starts
    pub voting_started_at: u64,
    pub votes_cast: u64,
    pub has_winner: bool,
    /// Zero address while `has_winner` is false
    pub winner: ManagedAddress<M>,
    pub treasury: BigUint<M>,
}
