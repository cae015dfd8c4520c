pub const ERR_EMPTY_COMMITTEE: &str = "Empty committee";
pub const ERR_DUPLICATE_MEMBER: &str = "Duplicate committee member";
pub const ERR_NON_EXISTING_ACCOUNT: &str = "Non-existing account";
pub const ERR_NOT_COMMITTEE_MEMBER: &str = "Sender not in the committee";
pub const ERR_NON_EXISTING_PROPOSAL: &str = "Non-existing proposal";
pub const ERR_PROPOSAL_EXECUTED: &str = "Proposal executed";
pub const ERR_POLL_PAST_DEADLINE: &str = "Poll passing deadline";
pub const ERR_DOUBLE_VOTING: &str = "Double voting";
pub const ERR_NOT_ENOUGH_YAH: &str = "Not enough yah";
pub const ERR_INVALID_TRANSFER_AMOUNT: &str = "Invalid transfer amount";
pub const ERR_NOT_ENOUGH_BALANCE: &str = "Not enough balance";
pub const ERR_MALFORMED_DATA: &str = "Malformed proposal data";
pub const ERR_CALL_FAILED: &str = "Call failed";
pub const ERR_NOT_ENOUGH_SUCCESSFUL_CALLS: &str = "Not enough successful calls";
pub const ERR_INVALID_UPGRADE_TARGET: &str = "Invalid upgrade target";
