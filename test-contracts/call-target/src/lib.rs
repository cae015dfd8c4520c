#![no_std]

multiversx_sc::imports!();

pub mod call_target_proxy;

/// Counter contract that committee wallet scenarios point proposals at.
#[multiversx_sc::contract]
pub trait CallTarget {
    #[init]
    fn init(&self) {
        self.count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setCount)]
    fn set_count(&self, count: u64) {
        self.count().set(count);
    }

    #[endpoint(bump)]
    fn bump(&self) {
        self.count().update(|count| *count += 1);
    }

    #[endpoint(willRevert)]
    fn will_revert(&self) {
        sc_panic!("will revert");
    }

    #[payable("EGLD")]
    #[endpoint(acceptFunds)]
    fn accept_funds(&self) {
        self.bump();
    }

    /// Bumps, then calls `execute` on the controller for the same proposal
    /// that dispatched this call.
    #[endpoint(reenterExecute)]
    fn reenter_execute(&self, controller: ManagedAddress, account_number: u64, proposal_number: u64) {
        self.bump();
        self.tx()
            .to(&controller)
            .raw_call("execute")
            .argument(&account_number)
            .argument(&proposal_number)
            .sync_call();
    }

    #[endpoint(reenterPoll)]
    fn reenter_poll(&self, controller: ManagedAddress, account_number: u64, proposal_number: u64) {
        self.bump();
        self.tx()
            .to(&controller)
            .raw_call("poll")
            .argument(&account_number)
            .argument(&proposal_number)
            .argument(&true)
            .sync_call();
    }

    #[view(getCount)]
    #[storage_mapper("count")]
    fn count(&self) -> SingleValueMapper<u64>;
}
