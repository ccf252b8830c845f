use soroban_sdk::{symbol_short, Symbol};

// Share ledger
pub const LEDGER_INITIALIZED: Symbol = symbol_short!("led_init");
pub const HOLDER_ADDED: Symbol = symbol_short!("hld_add");
pub const HOLDER_REMOVED: Symbol = symbol_short!("hld_rem");

// Dilution sale
pub const DILUTION_STARTED: Symbol = symbol_short!("dil_start");
pub const DILUTION_PURCHASE: Symbol = symbol_short!("dil_buy");
pub const DILUTION_SOLD_OUT: Symbol = symbol_short!("dil_sold");
pub const DILUTION_PAYOUT: Symbol = symbol_short!("dil_pay");
pub const DILUTION_SETTLED: Symbol = symbol_short!("dil_end");

// Peer-to-peer market
pub const LISTING_CREATED: Symbol = symbol_short!("lst_new");
pub const LISTING_ALTERED: Symbol = symbol_short!("lst_alt");
pub const LISTING_CLOSED: Symbol = symbol_short!("lst_close");
pub const LISTING_PURCHASE: Symbol = symbol_short!("lst_buy");

// Registry
pub const REGISTRY_INITIALIZED: Symbol = symbol_short!("reg_init");
pub const LEDGER_CREATED: Symbol = symbol_short!("led_new");
pub const LEDGER_REGISTERED: Symbol = symbol_short!("led_reg");
pub const FEE_RECEIVED: Symbol = symbol_short!("fee_recv");
pub const ADMIN_FEE_SET: Symbol = symbol_short!("fee_set");
pub const FEE_SETTER_SET: Symbol = symbol_short!("setter");
pub const FEES_WITHDRAWN: Symbol = symbol_short!("fee_wdr");
