use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

/// Commit-reveal storage for the secret word.
///
/// Only the keccak digest of `plaintext ++ salt` lives on-chain, so the
/// commitment is fixed before any guess can influence it. Game-state
/// mutation on a match is the guess ledger's job; this account only answers
/// "is this the secret".
#[account]
pub struct SecretVault {
    pub secret_hash: [u8; 32],
    pub salt: [u8; 32],
    pub is_set: bool,
    /// Bumped on every new commitment
    pub round: u64,
    pub bump: u8,
}

impl SecretVault {
    // 8 + 32 + 32 + 1 + 8 + 1
    pub const LEN: usize = 8 + 32 + 32 + 1 + 8 + 1;

    /// Fails closed: always false while no secret is committed.
    pub fn verify(&self, candidate: &[u8]) -> bool {
        if !self.is_set {
            return false;
        }
        keccak::hashv(&[candidate, &self.salt]).to_bytes() == self.secret_hash
    }

    pub fn commitment(plaintext: &[u8], salt: &[u8; 32]) -> [u8; 32] {
        keccak::hashv(&[plaintext, salt]).to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault_with(plaintext: &str, salt: [u8; 32]) -> SecretVault {
        SecretVault {
            secret_hash: SecretVault::commitment(plaintext.as_bytes(), &salt),
            salt,
            is_set: true,
            round: 1,
            bump: 255,
        }
    }

    #[test]
    fn verify_accepts_the_committed_plaintext() {
        let vault = vault_with("Sonic4Lyfe", [7u8; 32]);
        assert!(vault.verify(b"Sonic4Lyfe"));
    }

    #[test]
    fn verify_rejects_any_other_plaintext() {
        let vault = vault_with("Sonic4Lyfe", [7u8; 32]);
        assert!(!vault.verify(b"Sonic4Life"));
        assert!(!vault.verify(b"sonic4lyfe"));
        assert!(!vault.verify(b""));
    }

    #[test]
    fn verify_fails_closed_when_unset() {
        let mut vault = vault_with("Sonic4Lyfe", [7u8; 32]);
        vault.is_set = false;
        assert!(!vault.verify(b"Sonic4Lyfe"));
    }

    #[test]
    fn salt_binds_the_commitment() {
        let a = SecretVault::commitment(b"Sonic4Lyfe", &[1u8; 32]);
        let b = SecretVault::commitment(b"Sonic4Lyfe", &[2u8; 32]);
        assert_ne!(a, b);
    }
}
