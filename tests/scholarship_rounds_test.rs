// Whitebox tests for the scholarship rounds contract.
//
// These run lambdas in the contract's own context to inspect storage and
// internal helpers directly. Endpoint behavior as seen by callers is covered
// by the blackbox scenarios in scholarship_rounds_blackbox_test.rs.

use multiversx_sc_scenario::imports::*;

use scholarship_rounds::committee::CommitteeModule;
use scholarship_rounds::scholarship_proxy;
use scholarship_rounds::types::{Application, Phase};
use scholarship_rounds::ScholarshipRounds;

const CODE_PATH: MxscPath = MxscPath::new("output/scholarship-rounds.mxsc.json");
const SC_ADDRESS: TestSCAddress = TestSCAddress::new("scholarship");

const DEPLOYER: TestAddress = TestAddress::new("deployer");
const COMMITTEE_1: TestAddress = TestAddress::new("committee1");
const COMMITTEE_2: TestAddress = TestAddress::new("committee2");
const APPLICANT: TestAddress = TestAddress::new("applicant");
const OTHER_APPLICANT: TestAddress = TestAddress::new("other-applicant");

/// 0.01 EGLD
const SEED: u64 = 10_000_000_000_000_000;
const DEPLOYER_BALANCE: u64 = 1_000_000_000_000_000_000;
const DEPLOY_TIMESTAMP: u64 = 500;

fn deployed_world() -> ScenarioWorld {
    let mut world = ScenarioWorld::new();
    world.register_contract(CODE_PATH, scholarship_rounds::ContractBuilder);

    world.account(DEPLOYER).nonce(1).balance(DEPLOYER_BALANCE);
    world.account(COMMITTEE_1).nonce(1);
    world.account(COMMITTEE_2).nonce(1);
    world.account(APPLICANT).nonce(1);
    world.account(OTHER_APPLICANT).nonce(1);
    world.current_block().block_timestamp(DEPLOY_TIMESTAMP);

    let mut committee = MultiValueEncoded::<StaticApi, ManagedAddress<StaticApi>>::new();
    committee.push(COMMITTEE_1.to_managed_address());
    committee.push(COMMITTEE_2.to_managed_address());

    world
        .tx()
        .from(DEPLOYER)
        .typed(scholarship_proxy::ScholarshipProxy)
        .init(60u64, 120u64, false, committee)
        .egld(SEED)
        .code(CODE_PATH)
        .new_address(SC_ADDRESS)
        .run();

    world
}

#[test]
fn init_writes_round_one_state() {
    let mut world = deployed_world();

    world
        .tx()
        .from(COMMITTEE_1)
        .to(SC_ADDRESS)
        .whitebox(scholarship_rounds::contract_obj, |sc| {
            assert_eq!(sc.current_round().get(), 1);
            assert_eq!(sc.phase().get(), Phase::Applications);
            assert_eq!(sc.round_started_at().get(), DEPLOY_TIMESTAMP);
            assert_eq!(sc.voting_started_at().get(), 0);
            assert_eq!(sc.treasury().get(), SEED);
            assert_eq!(sc.total_donated().get(), 0u64);

            assert_eq!(sc.application_duration().get(), 60);
            assert_eq!(sc.voting_duration().get(), 120);
            assert!(!sc.enforce_phase_durations().get());

            assert_eq!(sc.committee().len(), 2);
            assert!(sc.committee().contains(&COMMITTEE_1.to_managed_address()));
            assert!(sc.committee().contains(&COMMITTEE_2.to_managed_address()));
        });
}

#[test]
fn leading_application_prefers_lowest_id_on_tie() {
    let mut world = deployed_world();

    world
        .tx()
        .from(COMMITTEE_1)
        .to(SC_ADDRESS)
        .whitebox(scholarship_rounds::contract_obj, |sc| {
            for (id, vote_count) in [(1u64, 3u64), (2, 5), (3, 5), (4, 1)] {
                sc.applications(1, id).set(Application {
                    id,
                    applicant: APPLICANT.to_managed_address(),
                    metadata_uri: ManagedBuffer::new(),
                    vote_count,
                    submitted_at: DEPLOY_TIMESTAMP,
                });
            }
            sc.application_count(1).set(4u64);

            let leader = sc.leading_application(1);
            assert_eq!(leader.id, 2);
            assert_eq!(leader.vote_count, 5);
        });
}

#[test]
fn select_winner_settles_bookkeeping_and_pays_out() {
    let mut world = deployed_world();

    world
        .tx()
        .from(APPLICANT)
        .to(SC_ADDRESS)
        .whitebox(scholarship_rounds::contract_obj, |sc| {
            assert_eq!(sc.apply_for(ManagedBuffer::from("ipfs://a")), 1);
        });
    world
        .tx()
        .from(OTHER_APPLICANT)
        .to(SC_ADDRESS)
        .whitebox(scholarship_rounds::contract_obj, |sc| {
            assert_eq!(sc.apply_for(ManagedBuffer::from("ipfs://b")), 2);
        });

    world
        .tx()
        .from(COMMITTEE_1)
        .to(SC_ADDRESS)
        .whitebox(scholarship_rounds::contract_obj, |sc| {
            sc.start_voting();
            sc.vote(2);
        });

    world
        .tx()
        .from(COMMITTEE_2)
        .to(SC_ADDRESS)
        .whitebox(scholarship_rounds::contract_obj, |sc| {
            let winner = sc.select_winner();
            assert_eq!(winner, OTHER_APPLICANT.to_managed_address());

            assert_eq!(sc.phase().get(), Phase::Closed);
            assert!(sc.treasury().is_empty());
            assert_eq!(sc.round_winner(1).get(), OTHER_APPLICANT.to_managed_address());
            assert_eq!(sc.round_payout(1).get(), SEED);
            assert_eq!(sc.votes_cast(1).get(), 1);
        });

    world.check_account(OTHER_APPLICANT).balance(SEED);
    world.check_account(SC_ADDRESS).balance(0u64);
}
