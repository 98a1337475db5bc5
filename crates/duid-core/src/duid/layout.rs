pub const TYPE_OFFSET: usize = 0;
pub const TYPE_LEN: usize = 2;

/// Largest DUID on the wire: 2-byte type plus at most 128 bytes of payload.
pub const MAX_LEN: usize = 130;

pub const LLT_HW_TYPE_OFFSET: usize = 2;
pub const LLT_TIME_OFFSET: usize = 4;
pub const LLT_ADDR_OFFSET: usize = 8;

pub const EN_ENTERPRISE_OFFSET: usize = 2;
pub const EN_IDENTIFIER_OFFSET: usize = 6;

pub const LL_HW_TYPE_OFFSET: usize = 2;
pub const LL_ADDR_OFFSET: usize = 4;

pub const UUID_OFFSET: usize = 2;
pub const UUID_LEN: usize = 16;

pub const OPAQUE_DATA_OFFSET: usize = TYPE_LEN;

pub const TYPE_LLT: u16 = 1;
pub const TYPE_EN: u16 = 2;
pub const TYPE_LL: u16 = 3;
pub const TYPE_UUID: u16 = 4;

pub const LLT_MIN_LEN: usize = LLT_ADDR_OFFSET;
pub const EN_MIN_LEN: usize = EN_IDENTIFIER_OFFSET;
pub const LL_MIN_LEN: usize = LL_ADDR_OFFSET;
pub const UUID_DUID_LEN: usize = UUID_OFFSET + UUID_LEN;

/// DUID-LLT time is counted from 2000-01-01T00:00:00Z; this is that instant
/// as a Unix timestamp.
pub const LLT_EPOCH_UNIX: i64 = 946_684_800;
