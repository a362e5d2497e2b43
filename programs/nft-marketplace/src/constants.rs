pub const MARKETPLACE_SEED: &[u8] = b"marketplace";

// Fee charged on sales, in percent
pub const DEFAULT_MARKETPLACE_FEE: u8 = 2;
