use soroban_sdk::{contracttype, Address};

/// Where the ledger's dilution round currently stands.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SaleState {
    /// No round open; a new one may be started.
    Idle = 0,
    /// Authorised shares are on sale to non-genesis buyers.
    DilutionOpen = 1,
    /// Every authorised share sold; proceeds wait for `end_dilution_sale`.
    SoldOutPendingSettlement = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerStatus {
    pub sale_state: SaleState,
    pub initialized: bool,
}

/// Per-holder record as persisted. Equity is not stored: it is a projection
/// of `shares` over the current total supply.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HolderRecord {
    pub shares: i128,
    /// Equity fraction frozen at genesis; zero for non-genesis holders.
    pub initial_equity: i128,
}

/// Per-holder view returned to callers.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HolderInfo {
    pub shares: i128,
    /// `shares * SCALE / total_supply`
    pub equity: i128,
    pub initial_equity: i128,
}

/// One slot of the enumerated holder arena. Slots are append-only; a holder
/// whose balance returns to zero vacates its slot rather than removing it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HolderSlot {
    pub holder: Address,
    pub occupied: bool,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DilutionSale {
    /// Set when a round starts, cleared only by settlement.
    pub active: bool,
    pub share_price: i128,
    pub shares_remaining: i128,
    /// Net payment-token proceeds (after the protocol fee) held for genesis holders.
    pub proceeds: i128,
}

/// A seller's single peer-to-peer offer. All-zero means no listing.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Listing {
    pub share_price: i128,
    pub shares_for_sale: i128,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.shares_for_sale == 0 && self.share_price == 0
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}
