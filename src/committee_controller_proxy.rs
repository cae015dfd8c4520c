use multiversx_sc::proxy_imports::*;

use crate::types::{Account, Proposal, ProposalContent, VoteMode};

pub struct CommitteeControllerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CommitteeControllerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CommitteeControllerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CommitteeControllerProxyMethods { wrapped_tx: tx }
    }
}

pub struct CommitteeControllerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> CommitteeControllerProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        account_template: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&account_template)
            .original_result()
    }
}

impl<Env, From, To, Gas> CommitteeControllerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn open_account<
        Arg0: ProxyArg<VoteMode>,
        Arg1: ProxyArg<ManagedByteArray<Env::Api, 32>>,
        Arg2: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        vote_mode: Arg0,
        account_alias: Arg1,
        committee: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("openAccount")
            .argument(&vote_mode)
            .argument(&account_alias)
            .argument(&committee)
            .original_result()
    }

    pub fn submit_proposal<
        Arg0: ProxyArg<ProposalContent<Env::Api>>,
        Arg1: ProxyArg<bool>,
    >(
        self,
        content: Arg0,
        approval: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("submitProposal")
            .argument(&content)
            .argument(&approval)
            .original_result()
    }

    pub fn poll<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<bool>,
    >(
        self,
        account_number: Arg0,
        proposal_number: Arg1,
        approval: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("poll")
            .argument(&account_number)
            .argument(&proposal_number)
            .argument(&approval)
            .original_result()
    }

    pub fn execute<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        account_number: Arg0,
        proposal_number: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("execute")
            .argument(&account_number)
            .argument(&proposal_number)
            .original_result()
    }

    pub fn deposit_native<Arg0: ProxyArg<u64>>(
        self,
        account_number: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("depositNative")
            .argument(&account_number)
            .original_result()
    }

    pub fn total_accounts(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("totalAccounts")
            .original_result()
    }

    pub fn get_account<Arg0: ProxyArg<u64>>(
        self,
        account_number: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Account<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAccount")
            .argument(&account_number)
            .original_result()
    }

    pub fn get_proposal<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        account_number: Arg0,
        proposal_number: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Proposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&account_number)
            .argument(&proposal_number)
            .original_result()
    }

    pub fn get_proposals<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        account_number: Arg0,
        from: Arg1,
        count: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Proposal<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposals")
            .argument(&account_number)
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_active_proposals<Arg0: ProxyArg<u64>>(
        self,
        account_number: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Proposal<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getActiveProposals")
            .argument(&account_number)
            .original_result()
    }

    pub fn get_balance<Arg0: ProxyArg<u64>>(
        self,
        account_number: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBalance")
            .argument(&account_number)
            .original_result()
    }

    pub fn does_own_account<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        address: Arg0,
        account_number: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("doesOwnAccount")
            .argument(&address)
            .argument(&account_number)
            .original_result()
    }

    pub fn get_vote_history<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
    >(
        self,
        address: Arg0,
        account_number: Arg1,
        proposal_number: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVoteHistory")
            .argument(&address)
            .argument(&account_number)
            .argument(&proposal_number)
            .original_result()
    }

    pub fn get_account_majority_threshold<Arg0: ProxyArg<u64>>(
        self,
        account_number: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAccountMajorityThreshold")
            .argument(&account_number)
            .original_result()
    }

    pub fn account_template(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAccountTemplate")
            .original_result()
    }
}
