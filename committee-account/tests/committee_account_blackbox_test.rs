use multiversx_sc_scenario::imports::*;

use call_target::call_target_proxy::CallTargetProxy;
use committee_account::committee_account_proxy::CommitteeAccountProxy;

const ACCOUNT_CODE_PATH: MxscPath = MxscPath::new("output/committee-account.mxsc.json");
const CALL_TARGET_CODE_PATH: MxscPath =
    MxscPath::new("../test-contracts/call-target/output/call-target.mxsc.json");

const CONTROLLER: TestAddress = TestAddress::new("controller");
const INTRUDER: TestAddress = TestAddress::new("intruder");
const RECEIVER: TestAddress = TestAddress::new("receiver");
const ACCOUNT: TestSCAddress = TestSCAddress::new("committee-account");
const CALL_TARGET: TestSCAddress = TestSCAddress::new("call-target");

const INITIAL_BALANCE: u64 = 1_000_000;
const FUNDS: u64 = 500;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(ACCOUNT_CODE_PATH, committee_account::ContractBuilder);
    blockchain.register_contract(CALL_TARGET_CODE_PATH, call_target::ContractBuilder);
    blockchain
}

fn managed(address: TestAddress) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address.to_address())
}

fn managed_sc(address: TestSCAddress) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address.to_address())
}

fn no_arguments() -> ManagedVec<StaticApi, ManagedBuffer<StaticApi>> {
    ManagedVec::new()
}

/// Deploys an account bound to `CONTROLLER` and funds it.
fn setup() -> ScenarioWorld {
    let mut world = world();

    world.account(CONTROLLER).nonce(1).balance(INITIAL_BALANCE);
    world.account(INTRUDER).nonce(1).balance(INITIAL_BALANCE);
    world.account(RECEIVER).nonce(1);

    world
        .tx()
        .from(CONTROLLER)
        .typed(CommitteeAccountProxy)
        .init()
        .code(ACCOUNT_CODE_PATH)
        .new_address(ACCOUNT)
        .run();

    world
        .tx()
        .from(CONTROLLER)
        .typed(CallTargetProxy)
        .init()
        .code(CALL_TARGET_CODE_PATH)
        .new_address(CALL_TARGET)
        .run();

    world
        .tx()
        .from(CONTROLLER)
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .initialize(managed(CONTROLLER), 7u64)
        .run();

    world
        .tx()
        .from(INTRUDER)
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .deposit()
        .egld(BigUint::<StaticApi>::from(FUNDS))
        .run();

    world
}

#[test]
fn initialize_binds_once() {
    let mut world = setup();

    let controller: ManagedAddress<StaticApi> = world
        .query()
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .controller()
        .returns(ReturnsResult)
        .run();
    assert_eq!(controller, managed(CONTROLLER));

    let account_number: u64 = world
        .query()
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .account_number()
        .returns(ReturnsResult)
        .run();
    assert_eq!(account_number, 7);

    world
        .tx()
        .from(INTRUDER)
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .initialize(managed(INTRUDER), 8u64)
        .returns(ExpectError(4, "Already initialized"))
        .run();
}

#[test]
fn uninitialized_account_refuses_everyone() {
    let mut world = world();
    world.account(CONTROLLER).nonce(1).balance(INITIAL_BALANCE);
    world.account(RECEIVER).nonce(1);

    world
        .tx()
        .from(CONTROLLER)
        .typed(CommitteeAccountProxy)
        .init()
        .code(ACCOUNT_CODE_PATH)
        .new_address(ACCOUNT)
        .run();

    world
        .tx()
        .from(CONTROLLER)
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .raw_transfer(managed(RECEIVER), BigUint::<StaticApi>::from(1u64))
        .returns(ExpectError(4, "Un-authorized call"))
        .run();
}

#[test]
fn only_controller_may_act() {
    let mut world = setup();

    world
        .tx()
        .from(INTRUDER)
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .raw_transfer(managed(INTRUDER), BigUint::<StaticApi>::from(FUNDS))
        .returns(ExpectError(4, "Un-authorized call"))
        .run();

    world
        .tx()
        .from(INTRUDER)
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .raw_call(
            managed_sc(CALL_TARGET),
            BigUint::<StaticApi>::zero(),
            ManagedBuffer::<StaticApi>::from("bump"),
            no_arguments(),
        )
        .returns(ExpectError(4, "Un-authorized call"))
        .run();

    world
        .tx()
        .from(INTRUDER)
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .set_successor(managed(INTRUDER))
        .returns(ExpectError(4, "Un-authorized call"))
        .run();

    world.check_account(ACCOUNT).balance(FUNDS);
}

#[test]
fn raw_transfer_moves_funds() {
    let mut world = setup();

    let sent: bool = world
        .tx()
        .from(CONTROLLER)
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .raw_transfer(managed(RECEIVER), BigUint::<StaticApi>::from(200u64))
        .returns(ReturnsResult)
        .run();
    assert!(sent);

    world.check_account(RECEIVER).balance(200u64);
    world.check_account(ACCOUNT).balance(FUNDS - 200);
}

#[test]
fn raw_transfer_over_balance_returns_false() {
    let mut world = setup();

    let sent: bool = world
        .tx()
        .from(CONTROLLER)
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .raw_transfer(managed(RECEIVER), BigUint::<StaticApi>::from(FUNDS + 1))
        .returns(ReturnsResult)
        .run();
    assert!(!sent);

    world.check_account(RECEIVER).balance(0u64);
    world.check_account(ACCOUNT).balance(FUNDS);
}

#[test]
fn raw_call_forwards_arguments_and_value() {
    let mut world = setup();

    let mut arguments = ManagedVec::<StaticApi, ManagedBuffer<StaticApi>>::new();
    arguments.push(ManagedBuffer::from(&[9u8][..]));
    let called: bool = world
        .tx()
        .from(CONTROLLER)
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .raw_call(
            managed_sc(CALL_TARGET),
            BigUint::<StaticApi>::zero(),
            ManagedBuffer::<StaticApi>::from("setCount"),
            arguments,
        )
        .returns(ReturnsResult)
        .run();
    assert!(called);

    let called: bool = world
        .tx()
        .from(CONTROLLER)
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .raw_call(
            managed_sc(CALL_TARGET),
            BigUint::<StaticApi>::from(100u64),
            ManagedBuffer::<StaticApi>::from("acceptFunds"),
            no_arguments(),
        )
        .returns(ReturnsResult)
        .run();
    assert!(called);

    let count: u64 = world
        .query()
        .to(CALL_TARGET)
        .typed(CallTargetProxy)
        .count()
        .returns(ReturnsResult)
        .run();
    assert_eq!(count, 10);
    world.check_account(CALL_TARGET).balance(100u64);
    world.check_account(ACCOUNT).balance(FUNDS - 100);
}

#[test]
fn balance_view_reports_holdings() {
    let mut world = setup();

    let balance: BigUint<StaticApi> = world
        .query()
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .balance()
        .returns(ReturnsResult)
        .run();
    assert_eq!(balance, BigUint::from(FUNDS));
}

#[test]
fn raw_call_with_value_over_balance_is_refused() {
    let mut world = setup();

    let called: bool = world
        .tx()
        .from(CONTROLLER)
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .raw_call(
            managed_sc(CALL_TARGET),
            BigUint::<StaticApi>::from(FUNDS + 1),
            ManagedBuffer::<StaticApi>::from("acceptFunds"),
            no_arguments(),
        )
        .returns(ReturnsResult)
        .run();
    assert!(!called);

    let count: u64 = world
        .query()
        .to(CALL_TARGET)
        .typed(CallTargetProxy)
        .count()
        .returns(ReturnsResult)
        .run();
    assert_eq!(count, 0);
    world.check_account(ACCOUNT).balance(FUNDS);
    world.check_account(CALL_TARGET).balance(0u64);
}

#[test]
fn raw_call_to_itself_is_refused() {
    let mut world = setup();

    let called: bool = world
        .tx()
        .from(CONTROLLER)
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .raw_call(
            managed_sc(ACCOUNT),
            BigUint::<StaticApi>::zero(),
            ManagedBuffer::<StaticApi>::from("rawTransfer"),
            no_arguments(),
        )
        .returns(ReturnsResult)
        .run();
    assert!(!called);
    world.check_account(ACCOUNT).balance(FUNDS);
}

#[test]
fn failing_callee_aborts_raw_call() {
    let mut world = setup();

    world
        .tx()
        .from(CONTROLLER)
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .raw_call(
            managed_sc(CALL_TARGET),
            BigUint::<StaticApi>::zero(),
            ManagedBuffer::<StaticApi>::from("willRevert"),
            no_arguments(),
        )
        .returns(ExpectError(4, "will revert"))
        .run();
}

#[test]
fn set_successor_is_recorded() {
    let mut world = setup();

    world
        .tx()
        .from(CONTROLLER)
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .set_successor(managed_sc(CALL_TARGET))
        .run();

    let successor: ManagedAddress<StaticApi> = world
        .query()
        .to(ACCOUNT)
        .typed(CommitteeAccountProxy)
        .successor()
        .returns(ReturnsResult)
        .run();
    assert_eq!(successor, managed_sc(CALL_TARGET));
}
