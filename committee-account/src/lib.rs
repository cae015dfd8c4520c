#![no_std]

multiversx_sc::imports!();

pub mod committee_account_proxy;

const ERR_UNAUTHORIZED: &str = "Un-authorized call";
const ERR_ALREADY_INITIALIZED: &str = "Already initialized";

/// Holds the EGLD of one committee wallet account and acts on it only when
/// the committee controller tells it to.
#[multiversx_sc::contract]
pub trait CommitteeAccount {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: initialize
    // Binds the contract to its controller and account number.
    // ========================================================

    #[endpoint(initialize)]
    fn initialize(&self, controller: ManagedAddress, account_number: u64) {
        require!(self.controller().is_empty(), ERR_ALREADY_INITIALIZED);

        self.controller().set(&controller);
        self.account_number().set(account_number);

        self.initialized_event(&controller, account_number);
    }

    // ========================================================
    // ENDPOINT: rawCall
    // Returns false instead of calling when the target is this
    // contract or the value exceeds the balance. A failing callee
    // aborts the whole transaction.
    // ========================================================

    #[endpoint(rawCall)]
    fn raw_call(
        &self,
        target: ManagedAddress,
        value: BigUint,
        endpoint: ManagedBuffer,
        arguments: ManagedVec<ManagedBuffer>,
    ) -> bool {
        self.require_controller();

        if target == self.blockchain().get_sc_address() {
            self.call_refused_event(&target, &endpoint);
            return false;
        }

        if value > self.balance() {
            self.call_refused_event(&target, &endpoint);
            return false;
        }

        let mut arg_buffer = ManagedArgBuffer::new();
        for argument in arguments.iter() {
            arg_buffer.push_arg_raw(argument.clone_value());
        }

        let call = self
            .tx()
            .to(&target)
            .raw_call(endpoint.clone())
            .arguments_raw(arg_buffer);
        if value > 0u64 {
            call.egld(&value).sync_call();
        } else {
            call.sync_call();
        }

        self.call_performed_event(&target, &endpoint, &value);
        true
    }

    // ========================================================
    // ENDPOINT: rawTransfer
    // ========================================================

    #[endpoint(rawTransfer)]
    fn raw_transfer(&self, target: ManagedAddress, amount: BigUint) -> bool {
        self.require_controller();

        if amount > self.balance() {
            return false;
        }

        self.tx().to(&target).egld(&amount).transfer();
        self.transfer_performed_event(&target, &amount);
        true
    }

    // ========================================================
    // ENDPOINT: setSuccessor
    // Records which contract represents the account after an upgrade.
    // ========================================================

    #[endpoint(setSuccessor)]
    fn set_successor(&self, successor: ManagedAddress) {
        self.require_controller();

        self.successor().set(&successor);
        self.successor_set_event(&successor, self.account_number().get());
    }

    #[payable("EGLD")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        self.deposit_event(&caller, &amount);
    }

    fn require_controller(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            !self.controller().is_empty() && self.controller().get() == caller,
            ERR_UNAUTHORIZED
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getBalance)]
    fn balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    #[view(getController)]
    #[storage_mapper("controller")]
    fn controller(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getAccountNumber)]
    #[storage_mapper("accountNumber")]
    fn account_number(&self) -> SingleValueMapper<u64>;

    #[view(getSuccessor)]
    #[storage_mapper("successor")]
    fn successor(&self) -> SingleValueMapper<ManagedAddress>;

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("initialized")]
    fn initialized_event(&self, #[indexed] controller: &ManagedAddress, account_number: u64);

    #[event("callPerformed")]
    fn call_performed_event(
        &self,
        #[indexed] target: &ManagedAddress,
        #[indexed] endpoint: &ManagedBuffer,
        value: &BigUint,
    );

    #[event("callRefused")]
    fn call_refused_event(&self, #[indexed] target: &ManagedAddress, endpoint: &ManagedBuffer);

    #[event("transferPerformed")]
    fn transfer_performed_event(&self, #[indexed] target: &ManagedAddress, amount: &BigUint);

    #[event("successorSet")]
    fn successor_set_event(&self, #[indexed] successor: &ManagedAddress, account_number: u64);

    #[event("deposit")]
    fn deposit_event(&self, #[indexed] depositor: &ManagedAddress, amount: &BigUint);
}
