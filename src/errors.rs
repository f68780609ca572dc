pub const ERR_UNAUTHORIZED: &str = "Unauthorized: caller is not a committee member";
pub const ERR_FORBIDDEN: &str = "Forbidden: committee members cannot apply";
pub const ERR_NOT_APPLICATIONS_PHASE: &str = "InvalidPhase: round is not accepting applications";
pub const ERR_NOT_VOTING_PHASE: &str = "InvalidPhase: round is not in voting";
pub const ERR_NOT_CLOSED_PHASE: &str = "InvalidPhase: round is not closed";
pub const ERR_APPLICATION_PERIOD_ACTIVE: &str = "InvalidPhase: application period has not ended";
pub const ERR_VOTING_PERIOD_ACTIVE: &str = "InvalidPhase: voting period has not ended";
pub const ERR_ROUND_HAS_NO_WINNER: &str = "InvalidPhase: round has no winner";
pub const ERR_ZERO_DONATION: &str = "InvalidAmount: donation must be > 0";
pub const ERR_EMPTY_COMMITTEE: &str = "InvalidConfig: committee must not be empty";
pub const ERR_ZERO_SEED: &str = "InvalidConfig: seed funding must be > 0";
pub const ERR_DUPLICATE_APPLICATION: &str = "DuplicateApplication: already applied this round";
pub const ERR_DUPLICATE_VOTE: &str = "DuplicateVote: already voted this round";
pub const ERR_UNKNOWN_APPLICATION: &str = "UnknownApplication: application does not exist";
pub const ERR_NO_APPLICATIONS: &str = "NoApplications: no applications this round";
pub const ERR_ALREADY_MEMBER: &str = "AlreadyMember: account is already on the committee";
