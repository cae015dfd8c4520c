multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Vote Mode: how many yah votes a proposal needs
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteMode {
    /// Two thirds of the committee, rounded up.
    Majority,
    /// Every committee member.
    Omni,
}

impl VoteMode {
    /// Yah votes required to execute a proposal for a committee of `committee_size`.
    pub fn threshold(&self, committee_size: u64) -> u64 {
        match self {
            VoteMode::Majority => (committee_size * 2 + 2) / 3,
            VoteMode::Omni => committee_size,
        }
    }
}

// ============================================================
// Proposal Type: selects the payload decoder at execution
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalType {
    /// Send EGLD from the account to `target`. Payload: `BigUint` amount.
    Transfer,
    /// Call an endpoint on `target`. Payload: `ContractCall`.
    ContractInteraction,
    /// Repoint the account to the committee account at `target`. Payload ignored.
    AccountContractUpgrade,
    /// Sequence of calls. Payload: `MultiCallBatch`.
    MultiCall,
}

// ============================================================
// Account: one governed wallet
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Account<M: ManagedTypeApi> {
    pub account_number: u64,
    pub committee: ManagedVec<M, ManagedAddress<M>>,
    pub founder: ManagedAddress<M>,
    pub vote_mode: VoteMode,
    pub num_proposals: u64,
    pub account_alias: ManagedByteArray<M, 32>,
    /// Committee account contract currently holding the funds
    pub account_address: ManagedAddress<M>,
}

// ============================================================
// Proposal: content is stored verbatim, decoded on execution
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProposalContent<M: ManagedTypeApi> {
    pub account_number: u64,
    pub proposal_type: ProposalType,
    pub target: ManagedAddress<M>,
    pub data: ManagedBuffer<M>,
    /// Last block nonce at which polls and execution are accepted
    pub deadline: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub account_number: u64,
    pub proposal_number: u64,
    /// Terminal once set.
    pub executed: bool,
    pub yah: u64,
    pub nay: u64,
    pub advocate: ManagedAddress<M>,
    pub content: ProposalContent<M>,
}

// ============================================================
// Payloads
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ContractCall<M: ManagedTypeApi> {
    /// EGLD sent along with the call, taken from the account balance
    pub value: BigUint<M>,
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Debug,
)]
pub struct SubCall<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct MultiCallBatch<M: ManagedTypeApi> {
    pub required_successes: u64,
    pub calls: ManagedVec<M, SubCall<M>>,
}
