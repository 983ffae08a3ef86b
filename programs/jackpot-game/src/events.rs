use anchor_lang::prelude::*;

// --- GLOBAL & ADMIN ---
#[event]
pub struct GameInitialized {
    pub admin: Pubkey,
    pub treasury: Pubkey,
    pub token_mint: Pubkey,
}

#[event]
pub struct SecretCommitted {
    pub secret_hash: [u8; 32],
    pub salt: [u8; 32],
    pub round: u64,
}

#[event]
pub struct ConfigUpdated {
    pub guess_cost: u64,
    pub hint_cost: u64,
    pub batch_interval: i64,
}

#[event]
pub struct AdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[event]
pub struct SocialAnnouncement {
    pub kind: String,
    pub message: String,
}

// --- MARKET ---
#[event]
pub struct MarketInitialized {
    pub token_mint: Pubkey,
    pub token_reserve: u64,
    pub virtual_base: u64,
    pub spread_bps: u64,
}

#[event]
pub struct MarketPauseChanged {
    pub paused: bool,
}

#[event]
pub struct TokensPurchased {
    pub buyer: Pubkey,
    pub amount: u64,
    pub cost: u64,
    pub fee: u64,
    pub token_reserve: u64,
}

#[event]
pub struct TokensSold {
    pub seller: Pubkey,
    pub amount: u64,
    pub proceeds: u64,
    pub fee: u64,
    pub token_reserve: u64,
}

// --- GUESSING ---
#[event]
pub struct NewPlayer {
    pub player: Pubkey,
}

#[event]
pub struct BatchOpened {
    pub id: u64,
    pub opens_at: i64,
    pub closes_at: i64,
}

#[event]
pub struct GuessSubmitted {
    pub player: Pubkey,
    pub batch_id: u64,
    pub sequence: u32,
    pub chance_bps: u16,
}

// --- RESOLUTION ---
#[event]
pub struct BatchSealed {
    pub id: u64,
    pub draw_slot: u64,
}

#[event]
pub struct GuessResolved {
    pub player: Pubkey,
    pub batch_id: u64,
    pub sequence: u32,
    pub won: bool,
    pub exact_match: bool,
}

#[event]
pub struct BatchResolved {
    pub id: u64,
    pub winner: Option<Pubkey>,
}

#[event]
pub struct JackpotWon {
    pub winner: Pubkey,
    pub amount: u64,
    pub guess: String,
}

#[event]
pub struct JackpotFunded {
    pub funder: Pubkey,
    pub to_current: u64,
    pub to_next: u64,
}

// --- HINTS ---
#[event]
pub struct HintAdded {
    pub index: u32,
}

#[event]
pub struct HintPurchased {
    pub player: Pubkey,
    pub index: u32,
    pub price: u64,
}
