use soroban_sdk::{contracterror, contracttype, Address, BytesN};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Campaign,
    ParticipantCount,
    Entitlement,
    TotalClaimed,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Participant(u32),
    Winners,
    Joined(Address),
    Claim(Address),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum CampaignState {
    Created,
    Funded,
    Open,
    Closed,
    WinnersSelected,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct RandomnessConfig {
    pub oracle: Address,
    pub key_hash: BytesN<32>,
    pub subscription_id: u64,
}

// Campaign details
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub owner: Address,
    pub reward_token: Address,
    pub total_reward_amount: i128, // pulled from the owner once, at funding
    pub end_time: u64,
    pub max_winners: u32,
    pub randomness: RandomnessConfig,
    pub state: CampaignState,
    pub request_id: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct ClaimRecord {
    pub winner: Address,
    pub entitlement: i128,
    pub claimed: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidParameters = 3,
    Unauthorized = 4,
    AlreadyFunded = 5,
    CampaignNotOpen = 6,
    TooEarly = 7,
    UnknownRequest = 8,
    WinnersNotSelected = 9,
    AlreadyJoined = 10,
    AlreadyClaimed = 11,
    NotAWinner = 12,
    TransferFailed = 13,
    OracleRequestFailed = 14,
    InsufficientRandomness = 15,
    MissingParticipant = 16,
}

/// Coarse grouping of [`Error`] codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    PhaseViolation,
    DuplicateAction,
    NotAWinner,
    TransferFailed,
    InvalidInput,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Unauthorized => ErrorKind::Unauthorized,
            Error::AlreadyInitialized
            | Error::NotInitialized
            | Error::AlreadyFunded
            | Error::CampaignNotOpen
            | Error::TooEarly
            | Error::UnknownRequest
            | Error::WinnersNotSelected
            | Error::MissingParticipant => ErrorKind::PhaseViolation,
            Error::AlreadyJoined | Error::AlreadyClaimed => ErrorKind::DuplicateAction,
            Error::NotAWinner => ErrorKind::NotAWinner,
            Error::TransferFailed | Error::OracleRequestFailed => ErrorKind::TransferFailed,
            Error::InvalidParameters | Error::InsufficientRandomness => ErrorKind::InvalidInput,
        }
    }
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
