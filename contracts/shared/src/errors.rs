use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    Overflow = 5,

    // Genesis / construction
    /// Holder and share arrays differ in length.
    LengthMismatch = 10,
    /// No genesis holders supplied.
    EmptyHolders = 11,
    /// No genesis share amounts supplied.
    EmptyShares = 12,
    /// Organisation name is empty.
    BlankName = 13,
    /// Token symbol is empty.
    BlankSymbol = 14,
    /// The same address appears twice in the genesis list.
    DuplicateHolder = 15,
    /// Fee divisor of zero.
    InvalidFeeDivisor = 16,

    // Dilution sale
    /// A dilution round is open or awaiting settlement.
    SaleAlreadyOpen = 20,
    /// No dilution round is accepting purchases.
    NoActiveSale = 21,
    /// Purchase exceeds the unsold authorised shares.
    InsufficientSupply = 22,
    /// Genesis holders cannot buy into dilution rounds.
    GenesisHolderExcluded = 23,
    /// Paid value does not equal quantity * price / SCALE.
    ValueMismatch = 24,
    /// No dilution round to settle.
    NoCurrentSale = 25,
    /// Authorised shares remain unsold.
    SharesStillOutstanding = 26,
    ZeroShares = 27,
    ZeroPrice = 28,

    // Peer-to-peer market
    /// Seller already has a listing.
    SellerAlreadyListed = 30,
    /// Only the seller may change their listing.
    CallerNotSeller = 31,
    /// Seller has no listing.
    NoExistingListing = 32,
    /// Balance too small for the requested quantity.
    InsufficientBalance = 33,
    /// Listing does not hold enough shares.
    ListingInsufficient = 34,
    ZeroQuantity = 35,

    // Share token
    InsufficientAllowance = 40,
    InvalidExpiration = 41,

    // Registry
    /// A ledger already exists under this name and symbol.
    DuplicateNameSymbol = 50,
    /// New value equals the current one.
    NoChange = 51,
    /// No accumulated fees.
    NothingToWithdraw = 52,
    /// Ledger is not recorded by this registry.
    NotRegistered = 53,
    /// Registry balance does not cover the credited fee.
    FeeNotReceived = 54,
    /// Ledger was initialised against a different registry.
    ForeignLedger = 55,
}
