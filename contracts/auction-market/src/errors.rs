use soroban_sdk::contracterror;

/// Error codes returned by the auction market.
///
/// Every failure aborts the invocation, so the host discards all storage
/// writes, events and outbound calls made before the error was returned.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// `initialize` was already called
    AlreadyInitialized = 1,
    /// Market has no configuration yet
    NotInitialized = 2,
    /// Caller is not the owner, or not the child auction it claims to be
    Unauthorized = 3,
    /// No escrow confirmation exists for the (seller, asset) pair
    EscrowNotConfirmed = 4,
    /// An auction is already active at the derived child address
    AuctionAlreadySet = 5,
    /// No auction is active at the derived child address
    AuctionNotSet = 6,
    /// Embedded setup payload could not be decoded
    MalformedPayload = 7,
    /// Buy-now price must exceed a non-negative reserve price
    InvalidPricing = 8,
}

/// Coarse classification of [`Error`] codes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A guard over persistent state or caller identity failed.
    PreconditionViolation,
    /// The auction parameters themselves are inconsistent.
    InvariantViolation,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidPricing => ErrorKind::InvariantViolation,
            Error::AlreadyInitialized
            | Error::NotInitialized
            | Error::Unauthorized
            | Error::EscrowNotConfirmed
            | Error::AuctionAlreadySet
            | Error::AuctionNotSet
            | Error::MalformedPayload => ErrorKind::PreconditionViolation,
        }
    }
}
