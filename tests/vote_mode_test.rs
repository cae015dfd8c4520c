// Threshold arithmetic for the two vote modes, checked without a VM.
//
// The blackbox tests drive the same thresholds through openAccount / poll /
// execute; these pin the numbers for every committee size up to 9.

use committee_controller::types::VoteMode;
use multiversx_sc_scenario::api::DebugApi;

type ControllerContract = committee_controller::ContractObj<DebugApi>;

#[test]
fn test_contract_builds() {
    let _: fn() -> ControllerContract = committee_controller::contract_obj;
}

#[test]
fn majority_threshold_is_two_thirds_rounded_up() {
    let expected = [1u64, 2, 2, 3, 4, 4, 5, 6, 6];
    for (size, threshold) in (1u64..=9).zip(expected) {
        assert_eq!(VoteMode::Majority.threshold(size), threshold, "committee of {size}");
    }
}

#[test]
fn omni_threshold_is_whole_committee() {
    for size in 1u64..=9 {
        assert_eq!(VoteMode::Omni.threshold(size), size);
    }
}
