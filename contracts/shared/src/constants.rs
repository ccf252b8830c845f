/// Fixed-point unit for share amounts, prices and equity fractions.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Decimals reported by every share token.
pub const SHARE_DECIMALS: u32 = 18;

/// 1 / 200 = 0.5% protocol fee.
pub const DEFAULT_ADMIN_FEE_DIVISOR: u32 = 200;
