#![no_std]

multiversx_sc::imports!();

pub mod committee_controller_proxy;
pub mod errors;
pub mod types;

use committee_account::committee_account_proxy::CommitteeAccountProxy;
use errors::*;
use types::{
    Account, ContractCall, MultiCallBatch, Proposal, ProposalContent, ProposalType, VoteMode,
};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait CommitteeController {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// `account_template` is a deployed committee account whose code is
    /// cloned for every new account.
    #[init]
    fn init(&self, account_template: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&account_template),
            "Account template must be a contract"
        );
        self.account_template().set(&account_template);
        self.account_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: openAccount
    // Any caller can open an account; the caller becomes founder.
    // ========================================================

    #[endpoint(openAccount)]
    fn open_account(
        &self,
        vote_mode: VoteMode,
        account_alias: ManagedByteArray<Self::Api, 32>,
        committee: MultiValueEncoded<ManagedAddress>,
    ) -> u64 {
        let founder = self.blockchain().get_caller();
        require!(!committee.is_empty(), ERR_EMPTY_COMMITTEE);

        let account_number = self.account_count().get() + 1u64;

        let mut members = ManagedVec::new();
        for member in committee.into_iter() {
            require!(
                self.committee_members(account_number).insert(member.clone()),
                ERR_DUPLICATE_MEMBER
            );
            members.push(member);
        }

        let account_address = self.deploy_committee_account(account_number);

        let account = Account {
            account_number,
            committee: members,
            founder: founder.clone(),
            vote_mode,
            num_proposals: 0u64,
            account_alias,
            account_address,
        };

        self.accounts(account_number).set(&account);
        self.account_count().set(account_number);

        for member in account.committee.iter() {
            self.committee_member_event(account_number, &member);
        }
        self.account_opened_event(
            account_number,
            &founder,
            account.committee.len() as u64,
            vote_mode,
            &account.account_address,
            &account.account_alias,
        );

        account_number
    }

    // ========================================================
    // ENDPOINT: submitProposal
    // The advocate's vote is cast together with the proposal.
    // ========================================================

    #[endpoint(submitProposal)]
    fn submit_proposal(&self, content: ProposalContent<Self::Api>, approval: bool) -> u64 {
        let account_number = content.account_number;
        let caller = self.member_call_sanity_check(account_number);

        let mut account = self.accounts(account_number).get();
        let proposal_number = account.num_proposals + 1u64;

        let proposal = Proposal {
            account_number,
            proposal_number,
            executed: false,
            yah: if approval { 1u64 } else { 0u64 },
            nay: if approval { 0u64 } else { 1u64 },
            advocate: caller.clone(),
            content,
        };

        self.proposals(account_number, proposal_number).set(&proposal);
        self.vote_history(&caller, account_number, proposal_number)
            .set(true);
        account.num_proposals = proposal_number;
        self.accounts(account_number).set(&account);

        self.proposal_submitted_event(
            account_number,
            proposal_number,
            &proposal.content.target,
            &caller,
            approval,
        );

        proposal_number
    }

    // ========================================================
    // ENDPOINT: poll
    // ========================================================

    #[endpoint(poll)]
    fn poll(&self, account_number: u64, proposal_number: u64, approval: bool) {
        let caller = self.member_call_sanity_check(account_number);
        let mut proposal = self.proposal_sanity_check(account_number, proposal_number);

        let vote_history = self.vote_history(&caller, account_number, proposal_number);
        require!(!vote_history.get(), ERR_DOUBLE_VOTING);

        if approval {
            proposal.yah += 1;
        } else {
            proposal.nay += 1;
        }

        vote_history.set(true);
        self.proposals(account_number, proposal_number).set(&proposal);

        self.poll_event(account_number, proposal_number, approval, &caller);
    }

    // ========================================================
    // ENDPOINT: execute
    // `executed` is stored before anything leaves this contract, so a
    // call that re-enters sees the proposal as executed.
    // ========================================================

    #[endpoint(execute)]
    fn execute(&self, account_number: u64, proposal_number: u64) {
        let caller = self.member_call_sanity_check(account_number);
        let mut proposal = self.proposal_sanity_check(account_number, proposal_number);

        require!(
            proposal.yah >= self.get_account_majority_threshold(account_number),
            ERR_NOT_ENOUGH_YAH
        );

        proposal.executed = true;
        self.proposals(account_number, proposal_number).set(&proposal);

        let content = proposal.content;
        match content.proposal_type {
            ProposalType::Transfer => self.dispatch_transfer(&content),
            ProposalType::ContractInteraction => self.dispatch_contract_interaction(&content),
            ProposalType::MultiCall => self.dispatch_multi_call(&content),
            ProposalType::AccountContractUpgrade => self.dispatch_account_upgrade(&content),
        }

        self.proposal_executed_event(
            account_number,
            proposal_number,
            content.proposal_type,
            &caller,
            &content.target,
        );
    }

    // ========================================================
    // ENDPOINT: depositNative
    // Forwards the EGLD to the account's committee account.
    // ========================================================

    #[endpoint(depositNative)]
    #[payable("EGLD")]
    fn deposit_native(&self, account_number: u64) {
        require!(
            !self.accounts(account_number).is_empty(),
            ERR_NON_EXISTING_ACCOUNT
        );
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        let account_address = self.account_address(account_number);
        self.tx()
            .to(&account_address)
            .typed(CommitteeAccountProxy)
            .deposit()
            .egld(&payment_amount)
            .sync_call();

        self.deposit_event(account_number, &caller, &payment_amount);
    }

    // ========================================================
    // INTERNAL: sanity checks
    // ========================================================

    /// Returns the caller once it is known to sit on the account's committee.
    fn member_call_sanity_check(&self, account_number: u64) -> ManagedAddress {
        require!(
            !self.accounts(account_number).is_empty(),
            ERR_NON_EXISTING_ACCOUNT
        );
        let caller = self.blockchain().get_caller();
        require!(
            self.committee_members(account_number).contains(&caller),
            ERR_NOT_COMMITTEE_MEMBER
        );
        caller
    }

    fn proposal_sanity_check(
        &self,
        account_number: u64,
        proposal_number: u64,
    ) -> Proposal<Self::Api> {
        let proposal_mapper = self.proposals(account_number, proposal_number);
        require!(!proposal_mapper.is_empty(), ERR_NON_EXISTING_PROPOSAL);

        let proposal = proposal_mapper.get();
        require!(!proposal.executed, ERR_PROPOSAL_EXECUTED);
        require!(
            self.blockchain().get_block_nonce() <= proposal.content.deadline,
            ERR_POLL_PAST_DEADLINE
        );
        proposal
    }

    // ========================================================
    // INTERNAL: dispatch per proposal type
    // ========================================================

    fn dispatch_transfer(&self, content: &ProposalContent<Self::Api>) {
        let amount: BigUint = self.decode_payload(&content.data);
        require!(amount > 0u64, ERR_INVALID_TRANSFER_AMOUNT);

        let sent = self
            .tx()
            .to(self.account_address(content.account_number))
            .typed(CommitteeAccountProxy)
            .raw_transfer(content.target.clone(), amount)
            .returns(ReturnsResult)
            .sync_call();
        require!(sent, ERR_NOT_ENOUGH_BALANCE);
    }

    fn dispatch_contract_interaction(&self, content: &ProposalContent<Self::Api>) {
        let call: ContractCall<Self::Api> = self.decode_payload(&content.data);

        let success = self
            .tx()
            .to(self.account_address(content.account_number))
            .typed(CommitteeAccountProxy)
            .raw_call(
                content.target.clone(),
                call.value,
                call.endpoint,
                call.arguments,
            )
            .returns(ReturnsResult)
            .sync_call();
        require!(success, ERR_CALL_FAILED);
    }

    /// Any shortfall fails the whole transaction, which also undoes the
    /// sub-calls that did go through.
    fn dispatch_multi_call(&self, content: &ProposalContent<Self::Api>) {
        let batch: MultiCallBatch<Self::Api> = self.decode_payload(&content.data);
        let account_address = self.account_address(content.account_number);

        let mut successes = 0u64;
        for sub_call in batch.calls.iter() {
            let success = self
                .tx()
                .to(&account_address)
                .typed(CommitteeAccountProxy)
                .raw_call(
                    sub_call.target.clone(),
                    BigUint::zero(),
                    sub_call.endpoint.clone(),
                    sub_call.arguments.clone(),
                )
                .returns(ReturnsResult)
                .sync_call();
            if success {
                successes += 1;
            }
        }

        require!(
            successes >= batch.required_successes,
            ERR_NOT_ENOUGH_SUCCESSFUL_CALLS
        );
    }

    /// Repoints the registry; funds stay where they are. A target without the
    /// committee account views aborts with the host's invalid-function error.
    fn dispatch_account_upgrade(&self, content: &ProposalContent<Self::Api>) {
        let new_address = &content.target;
        require!(
            self.blockchain().is_smart_contract(new_address),
            ERR_INVALID_UPGRADE_TARGET
        );

        let target_account_number = self
            .tx()
            .to(new_address)
            .typed(CommitteeAccountProxy)
            .account_number()
            .returns(ReturnsResult)
            .sync_call();
        let target_controller = self
            .tx()
            .to(new_address)
            .typed(CommitteeAccountProxy)
            .controller()
            .returns(ReturnsResult)
            .sync_call();
        require!(
            target_account_number == content.account_number
                && target_controller == self.blockchain().get_sc_address(),
            ERR_INVALID_UPGRADE_TARGET
        );

        let mut account = self.accounts(content.account_number).get();
        require!(
            &account.account_address != new_address,
            ERR_INVALID_UPGRADE_TARGET
        );

        self.tx()
            .to(&account.account_address)
            .typed(CommitteeAccountProxy)
            .set_successor(new_address.clone())
            .sync_call();

        let previous_address = account.account_address.clone();
        account.account_address = new_address.clone();
        self.accounts(content.account_number).set(&account);

        self.account_upgraded_event(content.account_number, &previous_address, new_address);
    }

    fn decode_payload<T: TopDecode>(&self, data: &ManagedBuffer) -> T {
        match T::top_decode(data.clone()) {
            Ok(payload) => payload,
            Err(_) => sc_panic!(ERR_MALFORMED_DATA),
        }
    }

    fn account_address(&self, account_number: u64) -> ManagedAddress {
        self.accounts(account_number).get().account_address
    }

    fn deploy_committee_account(&self, account_number: u64) -> ManagedAddress {
        let new_address = self
            .tx()
            .typed(CommitteeAccountProxy)
            .init()
            .from_source(self.account_template().get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::PAYABLE_BY_SC)
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        self.tx()
            .to(&new_address)
            .typed(CommitteeAccountProxy)
            .initialize(self.blockchain().get_sc_address(), account_number)
            .sync_call();

        new_address
    }

    // ========================================================
    // VIEWS: read-only queries
    // ========================================================

    #[view(totalAccounts)]
    fn total_accounts(&self) -> u64 {
        self.account_count().get()
    }

    #[view(getAccount)]
    fn get_account(&self, account_number: u64) -> Account<Self::Api> {
        require!(
            !self.accounts(account_number).is_empty(),
            ERR_NON_EXISTING_ACCOUNT
        );
        self.accounts(account_number).get()
    }

    #[view(getProposal)]
    fn get_proposal(&self, account_number: u64, proposal_number: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(account_number, proposal_number).is_empty(),
            ERR_NON_EXISTING_PROPOSAL
        );
        self.proposals(account_number, proposal_number).get()
    }

    #[view(getProposals)]
    fn get_proposals(
        &self,
        account_number: u64,
        from: u64,
        count: u64,
    ) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 || self.accounts(account_number).is_empty() {
            return result;
        }
        let total = self.accounts(account_number).get().num_proposals;
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for proposal_number in start..=end {
            result.push(self.proposals(account_number, proposal_number).get());
        }
        result
    }

    /// Proposals that can still be polled or executed.
    #[view(getActiveProposals)]
    fn get_active_proposals(&self, account_number: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if self.accounts(account_number).is_empty() {
            return result;
        }
        let total = self.accounts(account_number).get().num_proposals;
        let block_nonce = self.blockchain().get_block_nonce();

        for proposal_number in 1..=total {
            let proposal = self.proposals(account_number, proposal_number).get();
            if !proposal.executed && block_nonce <= proposal.content.deadline {
                result.push(proposal);
            }
        }
        result
    }

    #[view(getBalance)]
    fn get_balance(&self, account_number: u64) -> BigUint {
        require!(
            !self.accounts(account_number).is_empty(),
            ERR_NON_EXISTING_ACCOUNT
        );
        self.tx()
            .to(self.account_address(account_number))
            .typed(CommitteeAccountProxy)
            .balance()
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(doesOwnAccount)]
    fn does_own_account(&self, address: ManagedAddress, account_number: u64) -> bool {
        self.committee_members(account_number).contains(&address)
    }

    #[view(getVoteHistory)]
    fn get_vote_history(
        &self,
        address: ManagedAddress,
        account_number: u64,
        proposal_number: u64,
    ) -> bool {
        self.vote_history(&address, account_number, proposal_number)
            .get()
    }

    /// Recomputed from the current committee on every call.
    #[view(getAccountMajorityThreshold)]
    fn get_account_majority_threshold(&self, account_number: u64) -> u64 {
        require!(
            !self.accounts(account_number).is_empty(),
            ERR_NON_EXISTING_ACCOUNT
        );
        let vote_mode = self.accounts(account_number).get().vote_mode;
        let committee_size = self.committee_members(account_number).len() as u64;
        vote_mode.threshold(committee_size)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("committeeMember")]
    fn committee_member_event(
        &self,
        #[indexed] account_number: u64,
        #[indexed] member: &ManagedAddress,
    );

    #[event("accountOpened")]
    fn account_opened_event(
        &self,
        #[indexed] account_number: u64,
        #[indexed] founder: &ManagedAddress,
        #[indexed] num_members: u64,
        #[indexed] vote_mode: VoteMode,
        #[indexed] account_address: &ManagedAddress,
        account_alias: &ManagedByteArray<Self::Api, 32>,
    );

    #[event("proposalSubmitted")]
    fn proposal_submitted_event(
        &self,
        #[indexed] account_number: u64,
        #[indexed] proposal_number: u64,
        #[indexed] target: &ManagedAddress,
        #[indexed] advocate: &ManagedAddress,
        approval: bool,
    );

    #[event("poll")]
    fn poll_event(
        &self,
        #[indexed] account_number: u64,
        #[indexed] proposal_number: u64,
        #[indexed] approval: bool,
        member: &ManagedAddress,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] account_number: u64,
        #[indexed] proposal_number: u64,
        #[indexed] proposal_type: ProposalType,
        #[indexed] executor: &ManagedAddress,
        target: &ManagedAddress,
    );

    #[event("accountUpgraded")]
    fn account_upgraded_event(
        &self,
        #[indexed] account_number: u64,
        #[indexed] previous_address: &ManagedAddress,
        new_address: &ManagedAddress,
    );

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] account_number: u64,
        #[indexed] depositor: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(getAccountTemplate)]
    #[storage_mapper("accountTemplate")]
    fn account_template(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Accounts ──

    #[storage_mapper("accountCount")]
    fn account_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("accounts")]
    fn accounts(&self, account_number: u64) -> SingleValueMapper<Account<Self::Api>>;

    #[storage_mapper("committeeMembers")]
    fn committee_members(&self, account_number: u64) -> UnorderedSetMapper<ManagedAddress>;

    // ── Proposals ──

    #[storage_mapper("proposals")]
    fn proposals(
        &self,
        account_number: u64,
        proposal_number: u64,
    ) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voteHistory")]
    fn vote_history(
        &self,
        member: &ManagedAddress,
        account_number: u64,
        proposal_number: u64,
    ) -> SingleValueMapper<bool>;
}
